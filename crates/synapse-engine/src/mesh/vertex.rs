use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec3;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

/// Which normal set a mesh currently exposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Shading {
    Flat,
    Smooth,
}

/// Indexed triangle list with both flat and smooth normal sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    flat_normals: Vec<[f32; 3]>,
    smooth_normals: Vec<[f32; 3]>,
    shading: Shading,
}

impl Mesh {
    /// Builds a flat-shaded mesh. Smooth normals default to averaging the flat
    /// normals of all vertices sharing a position.
    pub(crate) fn new(vertices: Vec<Vertex>, indices: Vec<u16>) -> Self {
        let flat_normals: Vec<[f32; 3]> = vertices.iter().map(|v| v.normal).collect();
        let smooth_normals = averaged_normals(&vertices);
        Self { vertices, indices, flat_normals, smooth_normals, shading: Shading::Flat }
    }

    /// Replaces the smooth normal set.
    pub(crate) fn with_smooth_normals(mut self, normals: Vec<[f32; 3]>) -> Self {
        debug_assert_eq!(normals.len(), self.vertices.len());
        self.smooth_normals = normals;
        self
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn shading(&self) -> Shading {
        self.shading
    }

    /// Copies the requested normal set into the vertex buffer.
    pub fn set_shading(&mut self, shading: Shading) {
        let src = match shading {
            Shading::Flat => &self.flat_normals,
            Shading::Smooth => &self.smooth_normals,
        };
        for (v, n) in self.vertices.iter_mut().zip(src) {
            v.normal = *n;
        }
        self.shading = shading;
    }

    /// Vertex buffer contents, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents (`u16`), ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Positions of triangle `i`.
    pub fn triangle(&self, i: usize) -> [Vec3; 3] {
        let p = |k: usize| {
            let [x, y, z] = self.vertices[self.indices[3 * i + k] as usize].position;
            Vec3::new(x, y, z)
        };
        [p(0), p(1), p(2)]
    }
}

fn averaged_normals(vertices: &[Vertex]) -> Vec<[f32; 3]> {
    let key = |v: &Vertex| v.position.map(f32::to_bits);
    let mut sums: HashMap<[u32; 3], Vec3> = HashMap::new();
    for v in vertices {
        let [x, y, z] = v.normal;
        let sum = sums.entry(key(v)).or_insert_with(Vec3::zero);
        *sum = *sum + Vec3::new(x, y, z);
    }
    vertices
        .iter()
        .map(|v| sums[&key(v)].normalized().map_or(v.normal, Vec3::to_array))
        .collect()
}

/// Flat triangle `a, b, c` wound counter-clockwise when seen from outside, i.e.
/// from the side `outward` points to. Returns the vertices and the unit normal.
pub(crate) fn flat_triangle(
    mut corners: [Vec3; 3],
    mut uvs: [[f32; 2]; 3],
    outward: Vec3,
    color: [f32; 4],
) -> [Vertex; 3] {
    let mut n = (corners[1] - corners[0]).cross(corners[2] - corners[0]);
    if n.dot(outward) < 0.0 {
        corners.swap(1, 2);
        uvs.swap(1, 2);
        n = -n;
    }
    let normal = n.normalized().unwrap_or(Vec3::new(0.0, 1.0, 0.0)).to_array();
    [0, 1, 2].map(|k| Vertex { position: corners[k].to_array(), normal, color, uv: uvs[k] })
}
