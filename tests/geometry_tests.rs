// Host-side tests for the static particle layouts.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod palette {
    include!("../src/core/palette.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}

use constants::*;
use geometry::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn radial(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

fn assert_consistent(g: &ParticleGroup, count: usize, name: &str) {
    assert_eq!(g.len(), count, "{name}: len");
    assert_eq!(g.assembled().len(), count, "{name}: assembled");
    assert_eq!(g.scattered().len(), count, "{name}: scattered");
    assert_eq!(g.colors().len(), count, "{name}: colors");
    assert_eq!(g.scales().len(), count, "{name}: scales");
}

#[test]
fn groups_have_their_configured_counts() {
    let mut r = rng(1);
    assert_consistent(&generate_leaves(LEAF_COUNT, &mut r), LEAF_COUNT, "leaves");
    assert_consistent(
        &generate_ornaments(ORNAMENT_COUNT, &mut r),
        ORNAMENT_COUNT,
        "ornaments",
    );
    assert_consistent(&generate_ribbon(RIBBON_COUNT, &mut r), RIBBON_COUNT, "ribbon");
    assert_consistent(&generate_sparkles(SPARKLE_COUNT, &mut r), SPARKLE_COUNT, "sparkles");
    assert_consistent(&generate_star(), 1, "star");
}

#[test]
fn zero_count_yields_empty_group() {
    let mut r = rng(2);
    assert!(generate_leaves(0, &mut r).is_empty());
    assert!(generate_ornaments(0, &mut r).is_empty());
    assert!(generate_ribbon(0, &mut r).is_empty());
}

#[test]
fn leaves_fill_the_cone() {
    let g = generate_leaves(LEAF_COUNT, &mut rng(3));
    for p in g.assembled() {
        let h = p.y - TREE_Y_OFFSET;
        assert!((0.0..TREE_HEIGHT).contains(&h), "leaf height {h} outside tree");
        assert!(
            radial(*p) <= cone_radius(h) + 1e-4,
            "leaf at h={h} has radius {} beyond cone {}",
            radial(*p),
            cone_radius(h)
        );
    }
}

#[test]
fn leaves_scatter_onto_a_spherical_shell() {
    let g = generate_leaves(LEAF_COUNT, &mut rng(4));
    let lo = LEAF_SCATTER_RADIUS_MIN - 1e-3;
    let hi = LEAF_SCATTER_RADIUS_MIN + LEAF_SCATTER_RADIUS_SPAN + 1e-3;
    for p in g.scattered() {
        let d = p.length();
        assert!(d >= lo && d <= hi, "scattered leaf distance {d} outside [{lo}, {hi}]");
    }
}

#[test]
fn sphere_shell_point_has_requested_radius() {
    for i in [0, 1, 10, 99] {
        let p = sphere_shell_point(i, 100, 9.0);
        assert!((p.length() - 9.0).abs() < 1e-3, "point {i} at {}", p.length());
    }
}

#[test]
fn ornaments_sit_just_outside_the_cone() {
    let g = generate_ornaments(ORNAMENT_COUNT, &mut rng(5));
    for p in g.assembled() {
        let h = p.y - TREE_Y_OFFSET;
        let expected = (TREE_HEIGHT - h) * LEAF_RADIUS_PER_HEIGHT + ORNAMENT_SURFACE_OFFSET;
        assert!(
            (radial(*p) - expected).abs() < 1e-3,
            "ornament radius {} != {expected}",
            radial(*p)
        );
    }
    let half = ORNAMENT_SCATTER_EXTENT / 2.0;
    for p in g.scattered() {
        assert!(
            p.abs().max_element() <= half,
            "ornament scatter {p:?} outside +-{half}"
        );
    }
}

#[test]
fn ribbon_follows_the_spiral() {
    let count = RIBBON_COUNT;
    let g = generate_ribbon(count, &mut rng(6));
    for (i, p) in g.assembled().iter().enumerate() {
        assert_eq!(*p, ribbon_spiral_point(i, count), "ribbon point {i}");
    }
    // First point: base of the tree, angle 0
    let first = g.assembled()[0];
    let r0 = TREE_HEIGHT * RIBBON_RADIUS_PER_HEIGHT + RIBBON_RADIUS_OFFSET;
    assert!((first - Vec3::new(r0, TREE_Y_OFFSET, 0.0)).length() < 1e-5);
    let half = RIBBON_SCATTER_EXTENT / 2.0;
    for p in g.scattered() {
        assert!(p.abs().max_element() <= half, "ribbon scatter {p:?}");
    }
}

#[test]
fn scales_match_each_group() {
    let mut r = rng(7);
    for s in generate_leaves(1000, &mut r).scales() {
        assert!(
            *s >= LEAF_SCALE_MIN && *s < LEAF_SCALE_MAX,
            "leaf scale {s} out of range"
        );
    }
    assert!(generate_ornaments(100, &mut r)
        .scales()
        .iter()
        .all(|s| *s == ORNAMENT_SCALE));
    assert!(generate_ribbon(100, &mut r)
        .scales()
        .iter()
        .all(|s| *s == RIBBON_SCALE));
}

#[test]
fn colors_come_from_the_palette() {
    let mut r = rng(8);
    let blossom = palette::hex_to_linear(palette::LEAF_BLOSSOM);
    let hot = palette::hex_to_linear(palette::LEAF_HOT_PINK);
    let leaves = generate_leaves(500, &mut r);
    assert!(leaves.colors().iter().all(|c| *c == blossom || *c == hot));
    assert!(leaves.colors().iter().any(|c| *c == blossom), "no blossom leaves");
    assert!(leaves.colors().iter().any(|c| *c == hot), "no hot pink leaves");

    let white = palette::hex_to_linear(palette::ORNAMENT_WHITE);
    let lavender = palette::hex_to_linear(palette::ORNAMENT_LAVENDER);
    let ornaments = generate_ornaments(500, &mut r);
    assert!(ornaments.colors().iter().all(|c| *c == white || *c == lavender));
}

#[test]
fn same_seed_same_tree() {
    let a = generate_leaves(200, &mut rng(42));
    let b = generate_leaves(200, &mut rng(42));
    assert_eq!(a.assembled(), b.assembled());
    assert_eq!(a.scattered(), b.scattered());
    assert_eq!(a.scales(), b.scales());
}

#[test]
fn star_stays_at_the_apex() {
    let star = generate_star();
    let apex = Vec3::new(0.0, STAR_HEIGHT, 0.0);
    assert_eq!(star.assembled()[0], apex);
    assert_eq!(star.scattered()[0], apex);
    assert!(STAR_HEIGHT > TREE_HEIGHT + TREE_Y_OFFSET, "star below tree top");
}

#[test]
fn sparkles_do_not_move_between_layouts() {
    let g = generate_sparkles(SPARKLE_COUNT, &mut rng(9));
    assert_eq!(g.assembled(), g.scattered());
    let center = Vec3::new(0.0, STAR_HEIGHT, 0.0);
    for p in g.assembled() {
        assert!((*p - center).abs().max_element() <= SPARKLE_EXTENT / 2.0 + 1e-4);
    }
}
