// Static particle layouts.
//
// Every group carries two position sets of equal length: the assembled tree
// layout and the scattered cloud layout. Index `i` in both sets (and in the
// colour and scale sets) belongs to the same particle; nothing else about
// the ordering is meaningful.

use super::constants::*;
use super::palette;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug)]
pub struct ParticleGroup {
    assembled: Vec<Vec3>,
    scattered: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    scales: Vec<f32>,
}

impl ParticleGroup {
    fn with_capacity(count: usize) -> Self {
        Self {
            assembled: Vec::with_capacity(count),
            scattered: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
            scales: Vec::with_capacity(count),
        }
    }

    fn push(&mut self, assembled: Vec3, scattered: Vec3, color: [f32; 3], scale: f32) {
        self.assembled.push(assembled);
        self.scattered.push(scattered);
        self.colors.push(color);
        self.scales.push(scale);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.assembled.len()
    }

    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assembled.is_empty()
    }

    pub fn assembled(&self) -> &[Vec3] {
        &self.assembled
    }

    pub fn scattered(&self) -> &[Vec3] {
        &self.scattered
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn scales(&self) -> &[f32] {
        &self.scales
    }
}

/// Maximum leaf radius at tree height `h` (0 at the base, 10 at the apex).
#[inline]
pub fn cone_radius(h: f32) -> f32 {
    (TREE_HEIGHT - h) * LEAF_RADIUS_PER_HEIGHT
}

#[inline]
fn on_circle(r: f32, theta: f32, h: f32) -> Vec3 {
    Vec3::new(r * theta.cos(), h + TREE_Y_OFFSET, r * theta.sin())
}

#[inline]
fn in_cube<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * extent,
        (rng.gen::<f32>() - 0.5) * extent,
        (rng.gen::<f32>() - 0.5) * extent,
    )
}

/// Point `i` of `count` on a spiral sphere shell of the given radius.
#[inline]
pub fn sphere_shell_point(i: usize, count: usize, radius: f32) -> Vec3 {
    let n = count.max(1) as f32;
    let phi = (-1.0 + (2.0 * i as f32) / n).clamp(-1.0, 1.0).acos();
    let theta = (n * PI).sqrt() * phi;
    Vec3::new(
        radius * theta.cos() * phi.sin(),
        radius * phi.cos(),
        radius * theta.sin() * phi.sin(),
    )
}

/// Ribbon spiral position for particle `i` of `count`.
#[inline]
pub fn ribbon_spiral_point(i: usize, count: usize) -> Vec3 {
    let t = i as f32 / count.max(1) as f32;
    let h = t * TREE_HEIGHT;
    let angle = t * TAU * RIBBON_TURNS;
    let r = (TREE_HEIGHT - h) * RIBBON_RADIUS_PER_HEIGHT + RIBBON_RADIUS_OFFSET;
    on_circle(r, angle, h)
}

pub fn generate_leaves<R: Rng + ?Sized>(count: usize, rng: &mut R) -> ParticleGroup {
    let blossom = palette::hex_to_linear(palette::LEAF_BLOSSOM);
    let hot_pink = palette::hex_to_linear(palette::LEAF_HOT_PINK);
    let mut group = ParticleGroup::with_capacity(count);
    for i in 0..count {
        let theta = rng.gen::<f32>() * TAU;
        let h = rng.gen::<f32>() * TREE_HEIGHT;
        let r = rng.gen::<f32>() * cone_radius(h);
        let assembled = on_circle(r, theta, h);

        let shell = LEAF_SCATTER_RADIUS_MIN + rng.gen::<f32>() * LEAF_SCATTER_RADIUS_SPAN;
        let scattered = sphere_shell_point(i, count, shell);

        let color = if rng.gen_bool(LEAF_PRIMARY_CHANCE) {
            blossom
        } else {
            hot_pink
        };
        let scale = rng.gen_range(LEAF_SCALE_MIN..LEAF_SCALE_MAX);
        group.push(assembled, scattered, color, scale);
    }
    group
}

pub fn generate_ornaments<R: Rng + ?Sized>(count: usize, rng: &mut R) -> ParticleGroup {
    let white = palette::hex_to_linear(palette::ORNAMENT_WHITE);
    let lavender = palette::hex_to_linear(palette::ORNAMENT_LAVENDER);
    let mut group = ParticleGroup::with_capacity(count);
    for _ in 0..count {
        let theta = rng.gen::<f32>() * TAU;
        let h = rng.gen::<f32>() * TREE_HEIGHT;
        let r = cone_radius(h) + ORNAMENT_SURFACE_OFFSET;
        let assembled = on_circle(r, theta, h);
        let scattered = in_cube(rng, ORNAMENT_SCATTER_EXTENT);
        let color = if rng.gen_bool(ORNAMENT_ACCENT_CHANCE) {
            lavender
        } else {
            white
        };
        group.push(assembled, scattered, color, ORNAMENT_SCALE);
    }
    group
}

pub fn generate_ribbon<R: Rng + ?Sized>(count: usize, rng: &mut R) -> ParticleGroup {
    let white = palette::hex_to_linear(palette::RIBBON_WHITE);
    let mut group = ParticleGroup::with_capacity(count);
    for i in 0..count {
        let assembled = ribbon_spiral_point(i, count);
        let scattered = in_cube(rng, RIBBON_SCATTER_EXTENT);
        group.push(assembled, scattered, white, RIBBON_SCALE);
    }
    group
}

/// Sparkles hover around the star in both layouts; only their twinkle moves.
pub fn generate_sparkles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> ParticleGroup {
    let white = palette::hex_to_linear(palette::ORNAMENT_WHITE);
    let center = Vec3::new(0.0, STAR_HEIGHT, 0.0);
    let mut group = ParticleGroup::with_capacity(count);
    for _ in 0..count {
        let p = center + in_cube(rng, SPARKLE_EXTENT);
        let scale = SPARKLE_SCALE * rng.gen_range(0.6..1.4);
        group.push(p, p, white, scale);
    }
    group
}

/// The star is a single particle that stays at the apex in both layouts.
pub fn generate_star() -> ParticleGroup {
    let p = Vec3::new(0.0, STAR_HEIGHT, 0.0);
    let mut group = ParticleGroup::with_capacity(1);
    group.push(p, p, palette::hex_to_linear(palette::STAR_CHIFFON), STAR_SCALE);
    group
}
