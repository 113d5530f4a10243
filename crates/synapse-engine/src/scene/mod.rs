//! Host-scene collaborators.
//!
//! The engine is renderer-agnostic. A host scene provides:
//! - node lookup by name ([`NodeLookup`]), used once when routes are resolved
//! - a global opacity write over all mesh-bearing descendants ([`OpacityTarget`])
//!
//! Markers are plain data owned by the engine; hosts read them each frame and
//! draw whatever visual they like at the reported positions.

mod host;
mod marker;

pub use host::{MemoryScene, NodeLookup, OpacityTarget};
pub use marker::{Marker, MarkerPool, PoolId};
