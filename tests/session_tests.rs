// Host-side tests for the gesture session activity flag.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod session {
    include!("../src/core/session.rs");
}

use session::{Acquire, ActivityFlag, SharedLoad};
use std::cell::Cell;

#[test]
fn starts_inactive() {
    let flag = ActivityFlag::new();
    assert!(!flag.is_active());
    assert!(!flag.deactivate(), "deactivating an idle flag reports inactive");
}

#[test]
fn token_is_live_until_deactivated() {
    let flag = ActivityFlag::new();
    let token = flag.activate();
    assert!(flag.is_active());
    assert!(token.is_live());
    assert!(flag.deactivate());
    assert!(!token.is_live());
    assert!(!flag.is_active());
}

#[test]
fn stale_token_stays_dead_after_reactivation() {
    let flag = ActivityFlag::new();
    let first = flag.activate();
    flag.deactivate();
    let second = flag.activate();
    assert!(!first.is_live(), "old generation revived");
    assert!(second.is_live());
    assert!(second.generation() > first.generation());
}

#[test]
fn clones_share_state() {
    let flag = ActivityFlag::new();
    let other = flag.clone();
    let token = flag.activate();
    assert!(other.is_active());
    other.deactivate();
    assert!(!token.is_live());
}

#[test]
fn token_clones_track_the_same_generation() {
    let flag = ActivityFlag::new();
    let token = flag.activate();
    let copy = token.clone();
    assert_eq!(copy.generation(), token.generation());
    flag.deactivate();
    assert!(!copy.is_live());
}

#[test]
fn overlapping_loads_share_one_start() {
    let slot: SharedLoad<u32, &str> = SharedLoad::new();
    let starts = Cell::new(0);
    let start = || {
        starts.set(starts.get() + 1);
        7
    };

    // Activate, deactivate and activate again before the first load finishes
    assert_eq!(slot.acquire(start), Acquire::Pending(7));
    assert!(slot.is_loading());
    assert_eq!(slot.acquire(start), Acquire::Pending(7));
    assert_eq!(starts.get(), 1, "second activation must join, not reload");

    // Both waiters settle; only the first value is kept
    assert_eq!(slot.settle::<()>(Ok("model-a")), Ok("model-a"));
    assert_eq!(slot.settle::<()>(Ok("model-b")), Ok("model-a"));
    assert!(!slot.is_loading());
    assert!(slot.is_ready());

    assert_eq!(slot.acquire(start), Acquire::Ready("model-a"));
    assert_eq!(starts.get(), 1);
}

#[test]
fn failed_load_lets_the_next_activation_retry() {
    let slot: SharedLoad<u32, &str> = SharedLoad::new();
    let starts = Cell::new(0);
    let start = || {
        starts.set(starts.get() + 1);
        starts.get()
    };

    assert_eq!(slot.acquire(start), Acquire::Pending(1));
    assert_eq!(slot.settle(Err("network")), Err("network"));
    assert!(!slot.is_loading());
    assert!(!slot.is_ready());

    assert_eq!(slot.acquire(start), Acquire::Pending(2));
    assert_eq!(starts.get(), 2);
}
