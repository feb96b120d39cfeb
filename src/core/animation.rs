// Interpolation driver: per-frame blend and rotation state.

use super::constants::{
    AUTO_ROTATE_RAD_PER_SEC, BLEND_RATE_PER_SEC, BLEND_SNAP_EPSILON, GESTURE_ROTATION_GAIN,
    MAX_FRAME_DT_SEC,
};

/// Logical layout target. The visual blend is continuous, the mode is not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Assembled,
    Scattered,
}

impl Mode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Mode::Assembled => Mode::Scattered,
            Mode::Scattered => Mode::Assembled,
        }
    }

    /// Blend factor this mode converges to.
    #[inline]
    pub fn target_blend(self) -> f32 {
        match self {
            Mode::Assembled => 0.0,
            Mode::Scattered => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Assembled => "TREE FORM",
            Mode::Scattered => "CHAOS FORM",
        }
    }
}

/// Inputs shared between the render loop and the input/gesture callbacks.
///
/// `mode` is written by click, keyboard and gesture handlers; `gesture_offset`
/// only by the gesture loop. The render loop only reads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Controls {
    pub mode: Mode,
    pub gesture_offset: f32,
    pub gesture_active: bool,
}

impl Controls {
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// 0 = assembled, 1 = scattered.
    pub blend: f32,
    pub rotation: f32,
    pub gesture_rotation_offset: f32,
}

/// What happens to the gesture rotation term once gesture mode is off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OffsetRelease {
    /// Keep the last offset; the tree stays turned by it.
    #[default]
    Hold,
    /// Ease the offset back to 0 at the blend rate.
    DecayToZero,
}

#[derive(Clone, Debug, Default)]
pub struct InterpolationDriver {
    pub state: AnimationState,
    pub release: OffsetRelease,
}

impl InterpolationDriver {
    pub fn new(release: OffsetRelease) -> Self {
        Self {
            state: AnimationState::default(),
            release,
        }
    }

    /// Advance one frame. `dt_sec` is the frame delta, `elapsed_sec` the time
    /// since the scene started.
    pub fn step(&mut self, controls: &Controls, dt_sec: f32, elapsed_sec: f32) -> &AnimationState {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            let alpha = (dt_sec * BLEND_RATE_PER_SEC).min(1.0);
            self.state.blend = approach(self.state.blend, controls.mode.target_blend(), alpha);

            if controls.gesture_active {
                self.state.gesture_rotation_offset = controls.gesture_offset.clamp(-1.0, 1.0);
            } else if self.release == OffsetRelease::DecayToZero {
                self.state.gesture_rotation_offset =
                    approach(self.state.gesture_rotation_offset, 0.0, alpha);
            }
        }
        self.state.rotation = rotation_angle(elapsed_sec, self.state.gesture_rotation_offset);
        &self.state
    }
}

/// One exponential damping step, snapping onto the target once it is close.
#[inline]
pub fn approach(current: f32, target: f32, alpha: f32) -> f32 {
    let next = current + (target - current) * alpha;
    if (target - next).abs() < BLEND_SNAP_EPSILON {
        target
    } else {
        next
    }
}

/// Frame delta fed to the driver: wall-clock gaps are capped at
/// [`MAX_FRAME_DT_SEC`] and unusable readings become 0.
#[inline]
pub fn clamp_frame_delta(raw_sec: f32) -> f32 {
    if raw_sec.is_finite() && raw_sec > 0.0 {
        raw_sec.min(MAX_FRAME_DT_SEC)
    } else {
        0.0
    }
}

/// Group rotation about +Y: slow autorotation plus the absolute gesture term.
#[inline]
pub fn rotation_angle(elapsed_sec: f32, gesture_offset: f32) -> f32 {
    elapsed_sec * AUTO_ROTATE_RAD_PER_SEC + gesture_offset * GESTURE_ROTATION_GAIN
}
