//! Procedural meshes for marker and scene-prop geometry.
//!
//! Meshes are flat-shaded triangle lists: every triangle owns its three
//! vertices so per-face normals, colors and texture coordinates never have to
//! be shared. Smooth normals are precomputed alongside and can be swapped in
//! with [`Mesh::set_shading`].
//!
//! Vertex layout (locations as consumed by shaders):
//! - 0: position `vec3`
//! - 1: normal `vec3`
//! - 2: color `vec4`
//! - 3: uv `vec2`

mod cone;
mod octahedron;
mod vertex;

pub use cone::cone;
pub use octahedron::octahedron;
pub use vertex::{Mesh, Shading, Vertex};

use crate::coords::ColorRgba;

/// Default surface color for generated meshes.
pub const DEFAULT_COLOR: ColorRgba = ColorRgba::new(0.8, 0.8, 0.8, 1.0);
