// Host-side tests for tuning constants, palette conversion and error text.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod palette {
    include!("../src/core/palette.rs");
}
mod error {
    include!("../src/core/error.rs");
}

use constants::*;
use error::TreeError;
use palette::*;

#[test]
fn gesture_thresholds_leave_a_hysteresis_band() {
    assert!(PINCH_CLOSED_MAX < PINCH_OPEN_MIN);
    assert!(PINCH_CLOSED_MAX > 0.0);
}

#[test]
fn layers_nest_from_leaves_to_ribbon() {
    // At every height the ornaments sit outside the leaves and the ribbon outside both
    for h in [0.0_f32, 2.5, 5.0, 9.9] {
        let leaf = (TREE_HEIGHT - h) * LEAF_RADIUS_PER_HEIGHT;
        let ornament = leaf + ORNAMENT_SURFACE_OFFSET;
        let ribbon = (TREE_HEIGHT - h) * RIBBON_RADIUS_PER_HEIGHT + RIBBON_RADIUS_OFFSET;
        assert!(ornament > leaf && ribbon > ornament, "h={h}");
    }
}

#[test]
fn scales_and_rates_are_sane() {
    assert!(LEAF_SCALE_MIN < LEAF_SCALE_MAX);
    assert!(BLEND_RATE_PER_SEC > 0.0);
    assert!(BLEND_SNAP_EPSILON > 0.0 && BLEND_SNAP_EPSILON < 1e-2);
    assert!((0.0..=1.0).contains(&LEAF_PRIMARY_CHANCE));
    assert!((0.0..=1.0).contains(&ORNAMENT_ACCENT_CHANCE));
}

#[test]
fn hex_splits_into_channels() {
    let [r, g, b] = hex_to_srgb(0xFF69B4);
    assert_eq!(r, 1.0);
    assert!((g - 105.0 / 255.0).abs() < 1e-6);
    assert!((b - 180.0 / 255.0).abs() < 1e-6);
}

#[test]
fn srgb_to_linear_keeps_endpoints_and_darkens_midtones() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    let mid = srgb_to_linear(0.5);
    assert!(mid > 0.2 && mid < 0.25, "linear(0.5) = {mid}");
    let mut prev = -1.0;
    for i in 0..=100 {
        let v = srgb_to_linear(i as f32 / 100.0);
        assert!(v > prev);
        prev = v;
    }
}

#[test]
fn background_is_near_black() {
    let bg = hex_to_linear(BACKGROUND);
    assert!(bg.iter().all(|c| *c < 0.01), "{bg:?}");
}

#[test]
fn errors_render_readable_text() {
    assert_eq!(
        TreeError::MissingElement("app-canvas").to_string(),
        "missing DOM element #app-canvas"
    );
    assert_eq!(
        TreeError::ModelLoad("404".into()).status_text(),
        "Hand model failed to load"
    );
    assert_eq!(
        TreeError::Camera("NotAllowedError".into()).status_text(),
        "Camera unavailable"
    );
    assert!(TreeError::Gpu("no adapter".into())
        .status_text()
        .contains("no adapter"));
}
