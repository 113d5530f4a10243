use std::f32::consts::TAU;

use crate::coords::{ColorRgba, Vec3};

use super::vertex::flat_triangle;
use super::{Mesh, Vertex};

const MIN_SEGMENTS: u32 = 3;
/// Three vertices per segment must stay addressable by `u16` indices.
const MAX_SEGMENTS: u32 = u16::MAX as u32 / 3;

/// Open cone: tip at `(0, 0.5, 0)`, base circle of radius 0.5 at `y = -0.5`.
///
/// One flat triangle per segment; `segments` is clamped to `[3, 21845]`. The
/// smooth normal set is radial, `(x, 0, z)` normalized, with the tip pointing
/// straight up.
pub fn cone(segments: u32, color: ColorRgba) -> Mesh {
    let segments = segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
    let tip = Vec3::new(0.0, 0.5, 0.0);
    let radius = 0.5;
    let color = color.to_array();
    let step = TAU / segments as f32;

    let rim = |i: u32| {
        let a = i as f32 * step;
        Vec3::new(radius * a.cos(), -0.5, radius * a.sin())
    };

    let mut vertices: Vec<Vertex> = Vec::with_capacity(3 * segments as usize);
    for i in 0..segments {
        let (b0, b1) = (rim(i), rim(i + 1));
        let u0 = i as f32 / segments as f32;
        let u1 = (i + 1) as f32 / segments as f32;
        let mid = (b0 + b1) * 0.5;
        let outward = Vec3::new(mid.x, 0.0, mid.z);
        vertices.extend(flat_triangle([tip, b0, b1], [[0.5, 1.0], [u0, 0.0], [u1, 0.0]], outward, color));
    }

    let radial = vertices
        .iter()
        .map(|v| {
            let [x, _, z] = v.position;
            Vec3::new(x, 0.0, z).normalized().map_or([0.0, 1.0, 0.0], Vec3::to_array)
        })
        .collect();

    let indices = (0..vertices.len() as u16).collect();
    Mesh::new(vertices, indices).with_smooth_normals(radial)
}
