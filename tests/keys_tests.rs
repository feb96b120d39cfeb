// Host-side tests for the keyboard mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keys {
    include!("../src/core/keys.rs");
}

use keys::{action_for_key, KeyAction};

#[test]
fn space_toggles_mode() {
    assert_eq!(action_for_key(" "), Some(KeyAction::ToggleMode));
    assert!(KeyAction::ToggleMode.prevents_default(), "space would scroll");
}

#[test]
fn letters_are_case_insensitive() {
    for (lower, upper, action) in [
        ("m", "M", KeyAction::ToggleMute),
        ("g", "G", KeyAction::ToggleGesture),
        ("h", "H", KeyAction::ToggleOverlay),
    ] {
        assert_eq!(action_for_key(lower), Some(action));
        assert_eq!(action_for_key(upper), Some(action));
    }
}

#[test]
fn fullscreen_keys() {
    assert_eq!(action_for_key("Enter"), Some(KeyAction::ToggleFullscreen));
    assert_eq!(action_for_key("Escape"), Some(KeyAction::ExitFullscreen));
    assert!(!KeyAction::ExitFullscreen.prevents_default());
}

#[test]
fn unmapped_keys_do_nothing() {
    for k in ["a", "1", "ArrowLeft", "Shift", "", "space"] {
        assert_eq!(action_for_key(k), None, "{k:?} should be unmapped");
    }
}
