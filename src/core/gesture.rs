// Hand-landmark gesture classifier.
//
// Consumes the landmarks of the hands detected in one camera frame and turns
// them into a coarse mode (pinch = assembled, open hand = scattered) and a
// horizontal rotation offset taken from the wrist. Only the first detected
// hand is used.

use super::animation::{Controls, Mode};
use super::constants::{
    PINCH_CLOSED_MAX, PINCH_OPEN_MIN, WRIST_CENTER_X, WRIST_OFFSET_GAIN,
};
use smallvec::SmallVec;

pub const LANDMARKS_PER_HAND: usize = 21;

// Landmark indices of the hand model
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;

/// Skeleton edges used to draw the preview overlay.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (5, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (9, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (13, 17),
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
];

/// A landmark in normalized image coordinates (0..1, origin top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance in the image plane.
    #[inline]
    pub fn planar_distance(&self, other: &Landmark) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

pub type Hand = SmallVec<[Landmark; LANDMARKS_PER_HAND]>;

/// Result of classifying one inference frame. `None` fields leave the
/// corresponding control untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureUpdate {
    pub mode: Option<Mode>,
    pub rotation_offset: Option<f32>,
}

impl GestureUpdate {
    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.rotation_offset.is_none()
    }

    pub fn apply(&self, controls: &mut Controls) {
        if let Some(mode) = self.mode {
            controls.mode = mode;
        }
        if let Some(offset) = self.rotation_offset {
            controls.gesture_offset = offset;
        }
    }
}

/// Pinch hysteresis: below the closed threshold assembles, above the open
/// threshold scatters, anything between keeps the previous mode.
#[inline]
pub fn mode_for_pinch(distance: f32) -> Option<Mode> {
    if distance < PINCH_CLOSED_MAX {
        Some(Mode::Assembled)
    } else if distance > PINCH_OPEN_MIN {
        Some(Mode::Scattered)
    } else {
        None
    }
}

/// Map the wrist x coordinate to a rotation offset in [-1, 1].
#[inline]
pub fn rotation_offset_for_wrist(x: f32) -> f32 {
    ((x - WRIST_CENTER_X) * WRIST_OFFSET_GAIN).clamp(-1.0, 1.0)
}

pub fn classify_hand(hand: &[Landmark]) -> GestureUpdate {
    if hand.len() < LANDMARKS_PER_HAND {
        return GestureUpdate::default();
    }
    let pinch = hand[THUMB_TIP].planar_distance(&hand[INDEX_TIP]);
    GestureUpdate {
        mode: mode_for_pinch(pinch),
        rotation_offset: Some(rotation_offset_for_wrist(hand[WRIST].x)),
    }
}

pub fn classify(hands: &[Hand]) -> GestureUpdate {
    hands
        .first()
        .map(|h| classify_hand(h))
        .unwrap_or_default()
}
