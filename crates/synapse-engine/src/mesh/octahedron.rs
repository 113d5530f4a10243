use std::f32::consts::FRAC_1_SQRT_2;

use crate::coords::{ColorRgba, Vec3};

use super::vertex::flat_triangle;
use super::{Mesh, Vertex};

/// Regular octahedron with unit edge length, centered at the origin.
///
/// Apexes sit at `y = ±1/√2`; the equator is the square `x, z ∈ {-0.5, 0.5}`.
/// Eight faces of three vertices each: the upper four first, going around the
/// equator, then the lower four in the same order. Texture coordinates lay the
/// faces side by side: upper faces fill `v ∈ [0.5, 1]`, lower faces `v ∈ [0, 0.5]`,
/// each a quarter of the width.
pub fn octahedron(color: ColorRgba) -> Mesh {
    let top = Vec3::new(0.0, FRAC_1_SQRT_2, 0.0);
    let bottom = Vec3::new(0.0, -FRAC_1_SQRT_2, 0.0);
    let ring = [
        Vec3::new(-0.5, 0.0, 0.5),
        Vec3::new(0.5, 0.0, 0.5),
        Vec3::new(0.5, 0.0, -0.5),
        Vec3::new(-0.5, 0.0, -0.5),
    ];
    let color = color.to_array();

    let mut vertices: Vec<Vertex> = Vec::with_capacity(24);
    for (apex, v_apex) in [(top, 1.0), (bottom, 0.0)] {
        for i in 0..4 {
            let (a, b) = (ring[i], ring[(i + 1) % 4]);
            let u0 = i as f32 * 0.25;
            let uvs = [[u0 + 0.125, v_apex], [u0, 0.5], [u0 + 0.25, 0.5]];
            let centroid = (apex + a + b) / 3.0;
            vertices.extend(flat_triangle([apex, a, b], uvs, centroid, color));
        }
    }

    let indices = (0..vertices.len() as u16).collect();
    Mesh::new(vertices, indices)
}
