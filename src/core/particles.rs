// Instance transform writer.
//
// A [`DualLayoutGroup`] pairs a static [`ParticleGroup`] with a
// [`ParticleMotion`] that supplies the group-specific secondary offset and
// orientation. The blend itself is shared by every group.

use super::animation::AnimationState;
use super::constants::{
    LEAF_NOISE_AMPLITUDE, SPARKLE_SPEED, SPIN_PER_INDEX, STAR_FLOAT_AMPLITUDE, STAR_FLOAT_SPEED,
    STAR_SWAY_INTENSITY,
};
use super::geometry::ParticleGroup;
use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

/// Per-instance GPU record: column-major model matrix plus linear RGBA.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    #[allow(dead_code)]
    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.model[3][0], self.model[3][1], self.model[3][2])
    }
}

pub trait ParticleMotion {
    /// Positional offset added after the blend.
    fn offset(&self, _index: usize, _blend: f32, _elapsed: f32) -> Vec3 {
        Vec3::ZERO
    }

    fn orientation(&self, index: usize, blend: f32, position: Vec3, elapsed: f32) -> Quat;

    /// Multiplier on the particle's base scale.
    fn scale_factor(&self, _index: usize, _elapsed: f32) -> f32 {
        1.0
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LeafMotion;

impl ParticleMotion for LeafMotion {
    fn offset(&self, index: usize, blend: f32, elapsed: f32) -> Vec3 {
        Vec3::splat(leaf_noise(index, blend, elapsed))
    }

    fn orientation(&self, index: usize, blend: f32, _position: Vec3, _elapsed: f32) -> Quat {
        let spin = index as f32 * SPIN_PER_INDEX;
        Quat::from_euler(EulerRot::XYZ, spin + blend, spin + blend, spin)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OrnamentMotion;

impl ParticleMotion for OrnamentMotion {
    fn orientation(&self, index: usize, _blend: f32, _position: Vec3, _elapsed: f32) -> Quat {
        let spin = index as f32 * SPIN_PER_INDEX;
        Quat::from_euler(EulerRot::XYZ, spin, spin, 0.0)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RibbonMotion;

impl ParticleMotion for RibbonMotion {
    fn orientation(&self, _index: usize, _blend: f32, position: Vec3, _elapsed: f32) -> Quat {
        look_at_rotation(position, Vec3::new(0.0, position.y + 1.0, 0.0), Vec3::Y)
    }
}

/// Floating star on top: a slow bob plus a small wobble about all three axes.
#[derive(Clone, Copy, Debug, Default)]
pub struct StarMotion;

impl StarMotion {
    #[inline]
    fn phase(elapsed: f32) -> f32 {
        elapsed * STAR_FLOAT_SPEED * 0.25
    }
}

impl ParticleMotion for StarMotion {
    fn offset(&self, _index: usize, _blend: f32, elapsed: f32) -> Vec3 {
        Vec3::new(0.0, Self::phase(elapsed).sin() * STAR_FLOAT_AMPLITUDE, 0.0)
    }

    fn orientation(&self, _index: usize, _blend: f32, _position: Vec3, elapsed: f32) -> Quat {
        let (s, c) = Self::phase(elapsed).sin_cos();
        Quat::from_euler(
            EulerRot::XYZ,
            c / 8.0 * STAR_SWAY_INTENSITY,
            s / 8.0 * STAR_SWAY_INTENSITY,
            s / 20.0 * STAR_SWAY_INTENSITY,
        )
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SparkleMotion;

impl ParticleMotion for SparkleMotion {
    fn offset(&self, index: usize, _blend: f32, elapsed: f32) -> Vec3 {
        let phase = index as f32 * 1.7;
        Vec3::new(0.0, (elapsed * SPARKLE_SPEED + phase).sin() * 0.15, 0.0)
    }

    fn orientation(&self, _index: usize, _blend: f32, _position: Vec3, _elapsed: f32) -> Quat {
        Quat::IDENTITY
    }

    fn scale_factor(&self, index: usize, elapsed: f32) -> f32 {
        let phase = index as f32 * 2.3;
        0.5 + 0.5 * (elapsed * 3.0 + phase).sin().abs()
    }
}

#[inline]
pub fn leaf_noise(index: usize, blend: f32, elapsed: f32) -> f32 {
    (elapsed + index as f32).sin() * LEAF_NOISE_AMPLITUDE * blend
}

/// Rotation that points the local +Z axis from `eye` towards `target`.
///
/// Falls back to identity when the two points coincide or the direction is
/// parallel to `up`.
pub fn look_at_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let Some(z) = (target - eye).try_normalize() else {
        return Quat::IDENTITY;
    };
    let Some(x) = up.cross(z).try_normalize() else {
        return Quat::IDENTITY;
    };
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

pub struct DualLayoutGroup<M> {
    particles: ParticleGroup,
    motion: M,
}

impl<M: ParticleMotion> DualLayoutGroup<M> {
    pub fn new(particles: ParticleGroup, motion: M) -> Self {
        Self { particles, motion }
    }

    #[allow(dead_code)]
    pub fn particles(&self) -> &ParticleGroup {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Overwrite `out` with one transform per particle for this frame.
    pub fn write_instances(&self, state: &AnimationState, elapsed: f32, out: &mut Vec<InstanceRaw>) {
        let blend = state.blend.clamp(0.0, 1.0);
        let p = &self.particles;
        out.clear();
        out.reserve(p.len());
        let rows = p
            .assembled()
            .iter()
            .zip(p.scattered())
            .zip(p.colors())
            .zip(p.scales());
        for (i, (((a, s), c), scale)) in rows.enumerate() {
            let position = a.lerp(*s, blend) + self.motion.offset(i, blend, elapsed);
            let rotation = self.motion.orientation(i, blend, position, elapsed);
            let scale = scale * self.motion.scale_factor(i, elapsed);
            let model = Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, position);
            out.push(InstanceRaw {
                model: model.to_cols_array_2d(),
                color: [c[0], c[1], c[2], 1.0],
            });
        }
    }
}

/// A group together with its reusable instance buffer.
pub struct GroupInstances<M> {
    pub group: DualLayoutGroup<M>,
    pub instances: Vec<InstanceRaw>,
}

impl<M: ParticleMotion> GroupInstances<M> {
    pub fn new(group: DualLayoutGroup<M>) -> Self {
        let instances = Vec::with_capacity(group.len());
        Self { group, instances }
    }

    pub fn update(&mut self, state: &AnimationState, elapsed: f32) -> &[InstanceRaw] {
        self.group.write_instances(state, elapsed, &mut self.instances);
        &self.instances
    }
}
