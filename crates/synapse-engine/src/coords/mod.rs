//! Coordinate and geometry types shared by the path, wave and mesh modules.
//!
//! Canonical space is the model space of the host scene:
//! - right-handed, +Y up
//! - units match the loaded asset (no implicit scaling)
//!
//! [`Vec2`] and [`segment_circle_intersections`] cover the flat canvas
//! geometry used by 2D overlays.

mod aabb;
mod color;
mod intersect;
mod vec2;
mod vec3;

pub use aabb::Aabb;
pub use color::ColorRgba;
pub use intersect::segment_circle_intersections;
pub use vec2::Vec2;
pub use vec3::Vec3;
