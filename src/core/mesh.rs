// Low-poly meshes for the instanced groups.
//
// All meshes are convex, centred on the origin and emitted as flat-shaded
// triangle lists (one normal per face) wound counter-clockwise when seen from
// outside.

use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

fn flat_triangles(corners: &[Vec3], indices: &[[usize; 3]]) -> Vec<MeshVertex> {
    let mut out = Vec::with_capacity(indices.len() * 3);
    for tri in indices {
        let (mut a, mut b, c) = (corners[tri[0]], corners[tri[1]], corners[tri[2]]);
        let mut n = (b - a).cross(c - a);
        // Face must point away from the centre.
        if n.dot(a + b + c) < 0.0 {
            std::mem::swap(&mut a, &mut b);
            n = -n;
        }
        let n = n.normalize_or_zero().to_array();
        for p in [a, b, c] {
            out.push(MeshVertex {
                position: p.to_array(),
                normal: n,
            });
        }
    }
    out
}

fn unit(points: &[[f32; 3]]) -> Vec<Vec3> {
    points.iter().map(|p| Vec3::from(*p).normalize()).collect()
}

pub fn tetrahedron() -> Vec<MeshVertex> {
    let corners = unit(&[
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ]);
    flat_triangles(&corners, &[[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]])
}

pub fn octahedron() -> Vec<MeshVertex> {
    let corners = unit(&[
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ]);
    flat_triangles(
        &corners,
        &[
            [0, 2, 4],
            [0, 4, 3],
            [0, 3, 5],
            [0, 5, 2],
            [1, 2, 5],
            [1, 5, 3],
            [1, 3, 4],
            [1, 4, 2],
        ],
    )
}

pub fn icosahedron() -> Vec<MeshVertex> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let corners = unit(&[
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ]);
    flat_triangles(
        &corners,
        &[
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ],
    )
}

/// Cone with its apex on +Y, centred vertically on the origin.
pub fn cone(radius: f32, height: f32, segments: usize) -> Vec<MeshVertex> {
    let segments = segments.max(3);
    let half = height * 0.5;
    let mut corners = Vec::with_capacity(segments + 2);
    corners.push(Vec3::new(0.0, half, 0.0));
    corners.push(Vec3::new(0.0, -half, 0.0));
    for s in 0..segments {
        let a = s as f32 / segments as f32 * TAU;
        corners.push(Vec3::new(radius * a.cos(), -half, radius * a.sin()));
    }
    let mut indices = Vec::with_capacity(segments * 2);
    for s in 0..segments {
        let i = 2 + s;
        let j = 2 + (s + 1) % segments;
        indices.push([0, j, i]);
        indices.push([1, i, j]);
    }
    flat_triangles(&corners, &indices)
}
