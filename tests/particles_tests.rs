// Host-side tests for the per-frame instance transform writer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod palette {
    include!("../src/core/palette.rs");
}
mod animation {
    include!("../src/core/animation.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use animation::AnimationState;
use constants::*;
use glam::{Quat, Vec3};
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn state(blend: f32) -> AnimationState {
    AnimationState {
        blend,
        ..AnimationState::default()
    }
}

fn close(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).length() <= eps
}

#[test]
fn instance_layout_is_80_bytes() {
    assert_eq!(std::mem::size_of::<InstanceRaw>(), 80);
}

#[test]
fn blend_zero_places_particles_on_the_tree() {
    let g = DualLayoutGroup::new(
        geometry::generate_leaves(300, &mut StdRng::seed_from_u64(1)),
        LeafMotion,
    );
    let mut out = Vec::new();
    g.write_instances(&state(0.0), 12.34, &mut out);
    assert_eq!(out.len(), 300);
    for (inst, a) in out.iter().zip(g.particles().assembled()) {
        assert!(close(inst.translation(), *a, 1e-5), "{:?} vs {a:?}", inst.translation());
    }
}

#[test]
fn blend_one_places_particles_in_the_cloud() {
    let g = DualLayoutGroup::new(
        geometry::generate_ornaments(300, &mut StdRng::seed_from_u64(2)),
        OrnamentMotion,
    );
    let mut out = Vec::new();
    g.write_instances(&state(1.0), 3.0, &mut out);
    for (inst, s) in out.iter().zip(g.particles().scattered()) {
        assert!(close(inst.translation(), *s, 1e-4));
    }
}

#[test]
fn scattered_leaves_carry_the_noise_offset() {
    let g = DualLayoutGroup::new(
        geometry::generate_leaves(50, &mut StdRng::seed_from_u64(3)),
        LeafMotion,
    );
    let elapsed = 2.5;
    let mut out = Vec::new();
    g.write_instances(&state(1.0), elapsed, &mut out);
    for (i, (inst, s)) in out.iter().zip(g.particles().scattered()).enumerate() {
        let expected = *s + Vec3::splat(leaf_noise(i, 1.0, elapsed));
        assert!(close(inst.translation(), expected, 1e-4), "leaf {i}");
    }
    assert!(leaf_noise(7, 1.0, 1.0).abs() <= LEAF_NOISE_AMPLITUDE);
    assert_eq!(leaf_noise(7, 0.0, 1.0), 0.0);
}

#[test]
fn out_of_range_blend_is_clamped() {
    let g = DualLayoutGroup::new(
        geometry::generate_ribbon(20, &mut StdRng::seed_from_u64(4)),
        RibbonMotion,
    );
    let (mut hi, mut one) = (Vec::new(), Vec::new());
    g.write_instances(&state(2.0), 0.0, &mut hi);
    g.write_instances(&state(1.0), 0.0, &mut one);
    assert_eq!(hi, one);
}

#[test]
fn buffer_is_overwritten_not_appended() {
    let mut gi = GroupInstances::new(DualLayoutGroup::new(
        geometry::generate_ribbon(64, &mut StdRng::seed_from_u64(5)),
        RibbonMotion,
    ));
    assert!(gi.instances.is_empty());
    gi.update(&state(0.2), 0.0);
    gi.update(&state(0.7), 1.0);
    assert_eq!(gi.instances.len(), 64);
}

#[test]
fn instance_colors_are_opaque_group_colors() {
    let g = DualLayoutGroup::new(
        geometry::generate_ornaments(40, &mut StdRng::seed_from_u64(6)),
        OrnamentMotion,
    );
    let mut out = Vec::new();
    g.write_instances(&state(0.5), 0.0, &mut out);
    for (inst, c) in out.iter().zip(g.particles().colors()) {
        assert_eq!(inst.color, [c[0], c[1], c[2], 1.0]);
    }
}

#[test]
fn ribbon_faces_the_axis_one_unit_up() {
    let pos = Vec3::new(3.0, -2.0, 1.0);
    let q = RibbonMotion.orientation(0, 0.0, pos, 0.0);
    let forward = q * Vec3::Z;
    let expected = (Vec3::new(0.0, pos.y + 1.0, 0.0) - pos).normalize();
    assert!(close(forward, expected, 1e-4), "{forward:?} vs {expected:?}");
}

#[test]
fn look_at_falls_back_to_identity() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(look_at_rotation(p, p, Vec3::Y), Quat::IDENTITY);
    assert_eq!(
        look_at_rotation(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), Vec3::Y),
        Quat::IDENTITY
    );
}

#[test]
fn leaf_spin_depends_on_index_and_blend() {
    let a = LeafMotion.orientation(0, 0.0, Vec3::ZERO, 0.0);
    assert!(a.abs_diff_eq(Quat::IDENTITY, 1e-6));
    let b = LeafMotion.orientation(10, 0.0, Vec3::ZERO, 0.0);
    let c = LeafMotion.orientation(10, 1.0, Vec3::ZERO, 0.0);
    assert!(!b.abs_diff_eq(c, 1e-3));
}

#[test]
fn star_bobs_within_its_amplitude() {
    for i in 0..100 {
        let t = i as f32 * 0.1;
        let o = StarMotion.offset(0, 0.0, t);
        assert_eq!(o.x, 0.0);
        assert!(o.y.abs() <= STAR_FLOAT_AMPLITUDE + 1e-6);
    }
}

#[test]
fn star_sways_instead_of_spinning() {
    let max_tilt = STAR_SWAY_INTENSITY / 8.0 + 1e-5;
    let mut smallest_w = 1.0_f32;
    for i in 0..400 {
        let t = i as f32 * 0.25;
        let q = StarMotion.orientation(0, 0.0, Vec3::ZERO, t);
        let (x, y, z) = q.to_euler(glam::EulerRot::XYZ);
        assert!(x.abs() <= max_tilt, "x tilt {x} at t={t}");
        assert!(y.abs() <= max_tilt, "y tilt {y} at t={t}");
        assert!(z.abs() <= max_tilt, "z tilt {z} at t={t}");
        smallest_w = smallest_w.min(q.w.abs());
    }
    // A steady spin would pass through half a turn within 100 s
    assert!(smallest_w > 0.99, "star turned too far: w={smallest_w}");
    let a = StarMotion.orientation(0, 0.0, Vec3::ZERO, 0.0);
    let b = StarMotion.orientation(0, 0.0, Vec3::ZERO, 3.0);
    assert!(!a.abs_diff_eq(b, 1e-4), "star should wobble over time");
}

#[test]
fn sparkles_twinkle_between_half_and_full_size() {
    for i in 0..50 {
        let f = SparkleMotion.scale_factor(i, i as f32 * 0.37);
        assert!((0.5..=1.0).contains(&f), "twinkle factor {f}");
    }
}
