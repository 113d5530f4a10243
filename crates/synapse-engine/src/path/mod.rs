//! Route geometry: resolving node names to control points and resampling them.
//!
//! Pipeline:
//! 1) [`extract_waypoints`] turns an ordered list of node names into control points
//! 2) [`densify`] resamples control points at a fixed spacing
//! 3) [`DensePath`] answers fractional-index queries for the wave animator

mod dense;
mod densify;
mod extract;

pub use dense::DensePath;
pub use densify::densify;
pub use extract::{extract_waypoints, Extraction};
