// Scene shape, motion and gesture tuning constants.
// Kept free of web types so host-side tests can include this file directly.

// Particle counts
pub const LEAF_COUNT: usize = 5000;
pub const ORNAMENT_COUNT: usize = 1500;
pub const RIBBON_COUNT: usize = 1000;
pub const SPARKLE_COUNT: usize = 50;

// Tree shape
pub const TREE_HEIGHT: f32 = 10.0;
pub const TREE_Y_OFFSET: f32 = -5.0; // centres the tree vertically
pub const LEAF_RADIUS_PER_HEIGHT: f32 = 0.4; // radius(h) = (H - h) * k
pub const ORNAMENT_SURFACE_OFFSET: f32 = 0.2; // sits just outside the leaves
pub const RIBBON_RADIUS_PER_HEIGHT: f32 = 0.45;
pub const RIBBON_RADIUS_OFFSET: f32 = 0.3; // outside the ornament band
pub const RIBBON_TURNS: f32 = 3.5;

// Scattered layouts
pub const LEAF_SCATTER_RADIUS_MIN: f32 = 8.0;
pub const LEAF_SCATTER_RADIUS_SPAN: f32 = 5.0; // radius in [8, 13)
pub const ORNAMENT_SCATTER_EXTENT: f32 = 25.0; // cube side, +-12.5
pub const RIBBON_SCATTER_EXTENT: f32 = 20.0; // cube side, +-10

// Per-particle scale
pub const LEAF_SCALE_MIN: f32 = 0.05;
pub const LEAF_SCALE_MAX: f32 = 0.15;
pub const ORNAMENT_SCALE: f32 = 0.12;
pub const RIBBON_SCALE: f32 = 0.04;
pub const STAR_SCALE: f32 = 1.0;
pub const SPARKLE_SCALE: f32 = 0.03;

// Colour mix probabilities
pub const LEAF_PRIMARY_CHANCE: f64 = 0.5;
pub const ORNAMENT_ACCENT_CHANCE: f64 = 0.3;

// Star and sparkles
pub const STAR_HEIGHT: f32 = 5.2;
pub const STAR_FLOAT_SPEED: f32 = 2.0;
pub const STAR_FLOAT_AMPLITUDE: f32 = 0.05;
pub const STAR_SWAY_INTENSITY: f32 = 0.5; // max tilt is intensity / 8 rad
pub const SPARKLE_EXTENT: f32 = 3.0;
pub const SPARKLE_SPEED: f32 = 0.4;

// Interpolation driver
pub const BLEND_RATE_PER_SEC: f32 = 2.0; // fraction of remaining distance per second
pub const BLEND_SNAP_EPSILON: f32 = 1e-4;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // longer gaps (background tab) count as one slow frame
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = 0.1;
pub const GESTURE_ROTATION_GAIN: f32 = 2.0; // radians at full offset

// Secondary motion
pub const LEAF_NOISE_AMPLITUDE: f32 = 0.05;
pub const SPIN_PER_INDEX: f32 = 0.1;

// Gesture classification (normalized image units)
pub const PINCH_CLOSED_MAX: f32 = 0.08;
pub const PINCH_OPEN_MIN: f32 = 0.15;
pub const WRIST_CENTER_X: f32 = 0.5;
pub const WRIST_OFFSET_GAIN: f32 = -2.0; // mirrored preview
