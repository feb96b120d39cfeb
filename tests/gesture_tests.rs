// Host-side tests for the hand-gesture classifier.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod animation {
    include!("../src/core/animation.rs");
}
mod gesture {
    include!("../src/core/gesture.rs");
}

use animation::{Controls, Mode};
use constants::*;
use gesture::*;

/// A full hand with thumb tip, index tip and wrist placed explicitly.
fn hand(thumb: (f32, f32), index: (f32, f32), wrist_x: f32) -> Hand {
    let mut h: Hand = (0..LANDMARKS_PER_HAND)
        .map(|_| Landmark::new(0.5, 0.5, 0.0))
        .collect();
    h[WRIST] = Landmark::new(wrist_x, 0.8, 0.0);
    h[THUMB_TIP] = Landmark::new(thumb.0, thumb.1, 0.0);
    h[INDEX_TIP] = Landmark::new(index.0, index.1, 0.0);
    h
}

#[test]
fn pinch_assembles() {
    let u = classify(&[hand((0.40, 0.40), (0.43, 0.44), 0.5)]);
    assert_eq!(u.mode, Some(Mode::Assembled));
}

#[test]
fn open_hand_scatters() {
    let u = classify(&[hand((0.30, 0.40), (0.50, 0.40), 0.5)]);
    assert_eq!(u.mode, Some(Mode::Scattered));
}

#[test]
fn hysteresis_band_keeps_mode() {
    let u = classify(&[hand((0.30, 0.40), (0.40, 0.40), 0.5)]);
    assert_eq!(u.mode, None);
    assert_eq!(u.rotation_offset, Some(0.0));
    assert_eq!(mode_for_pinch(PINCH_CLOSED_MAX), None);
    assert_eq!(mode_for_pinch(PINCH_OPEN_MIN), None);
}

#[test]
fn pinch_distance_ignores_depth() {
    let a = Landmark::new(0.2, 0.2, 0.0);
    let b = Landmark::new(0.2, 0.2, 0.9);
    assert_eq!(a.planar_distance(&b), 0.0);
    let c = Landmark::new(0.5, 0.6, 0.0);
    assert!((a.planar_distance(&c) - 0.5).abs() < 1e-6);
}

#[test]
fn wrist_maps_to_mirrored_offset() {
    assert!((rotation_offset_for_wrist(0.25) - 0.5).abs() < 1e-6);
    assert!((rotation_offset_for_wrist(0.75) + 0.5).abs() < 1e-6);
    assert_eq!(rotation_offset_for_wrist(0.0), 1.0);
    assert_eq!(rotation_offset_for_wrist(1.0), -1.0);
    assert_eq!(rotation_offset_for_wrist(-0.5), 1.0);
    assert_eq!(rotation_offset_for_wrist(1.7), -1.0);
}

#[test]
fn no_hands_is_an_empty_update() {
    let u = classify(&[]);
    assert!(u.is_empty());
}

#[test]
fn incomplete_hand_is_ignored() {
    let mut h = hand((0.4, 0.4), (0.41, 0.41), 0.2);
    h.truncate(LANDMARKS_PER_HAND - 1);
    assert!(classify(&[h]).is_empty());
}

#[test]
fn only_the_first_hand_counts() {
    let pinching = hand((0.4, 0.4), (0.41, 0.41), 0.25);
    let open = hand((0.1, 0.1), (0.9, 0.9), 0.75);
    let u = classify(&[pinching, open]);
    assert_eq!(u.mode, Some(Mode::Assembled));
    assert!((u.rotation_offset.unwrap() - 0.5).abs() < 1e-6);
}

#[test]
fn empty_fields_leave_controls_untouched() {
    let mut c = Controls {
        mode: Mode::Scattered,
        gesture_offset: 0.3,
        gesture_active: true,
    };
    GestureUpdate::default().apply(&mut c);
    assert_eq!(c.mode, Mode::Scattered);
    assert_eq!(c.gesture_offset, 0.3);

    GestureUpdate {
        mode: None,
        rotation_offset: Some(-0.2),
    }
    .apply(&mut c);
    assert_eq!(c.mode, Mode::Scattered);
    assert_eq!(c.gesture_offset, -0.2);

    GestureUpdate {
        mode: Some(Mode::Assembled),
        rotation_offset: None,
    }
    .apply(&mut c);
    assert_eq!(c.mode, Mode::Assembled);
    assert_eq!(c.gesture_offset, -0.2);
}

#[test]
fn skeleton_edges_reference_valid_landmarks() {
    for (a, b) in HAND_CONNECTIONS {
        assert!(a < LANDMARKS_PER_HAND && b < LANDMARKS_PER_HAND);
        assert_ne!(a, b);
    }
}

#[test]
fn preview_is_mirrored_exactly_once() {
    let page = include_str!("../index.html");
    let controller = include_str!("../src/gesture.rs");
    assert!(
        controller.contains("ctx.scale(-1.0, 1.0)"),
        "the preview context should flip the camera frame"
    );
    assert!(
        !page.contains("scaleX(-1)"),
        "a CSS flip on top of the canvas flip would un-mirror the preview"
    );
    // A mirrored preview puts a hand on the image's right at the viewer's left,
    // and the wrist mapping turns the tree the way the hand appears to move
    assert!(rotation_offset_for_wrist(0.8) < 0.0);
    assert!(rotation_offset_for_wrist(0.2) > 0.0);
}
