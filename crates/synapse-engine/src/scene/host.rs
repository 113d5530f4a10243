use std::collections::HashMap;

use crate::coords::{Aabb, Vec3};

/// Name-based object lookup over the host scene graph.
pub trait NodeLookup {
    /// World-space bounds of the named object, or `None` if no such object exists.
    fn world_bounds(&self, name: &str) -> Option<Aabb>;
}

/// Global opacity control for the displayed model.
pub trait OpacityTarget {
    /// Sets the opacity of every mesh under the model root. `1.0` is fully opaque.
    fn set_global_opacity(&mut self, opacity: f32);
}

/// In-memory scene: a flat table of named bounds plus an opacity register.
///
/// Every opacity write is recorded so drivers and tests can inspect the
/// history; consecutive writes of the same value are recorded too.
#[derive(Debug, Clone)]
pub struct MemoryScene {
    nodes: HashMap<String, Aabb>,
    opacity: f32,
    opacity_log: Vec<f32>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self { nodes: HashMap::new(), opacity: 1.0, opacity_log: Vec::new() }
    }

    /// Adds (or replaces) a named node.
    pub fn insert(&mut self, name: impl Into<String>, bounds: Aabb) {
        self.nodes.insert(name.into(), bounds);
    }

    /// Builder-style [`insert`](Self::insert) for a node given by its center and half extent.
    pub fn with_node(mut self, name: impl Into<String>, center: Vec3, half_extent: f32) -> Self {
        let h = Vec3::new(half_extent, half_extent, half_extent);
        self.insert(name, Aabb::new(center - h, center + h));
        self
    }

    /// Bounds enclosing every node, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<Aabb> {
        self.nodes.values().copied().reduce(Aabb::union)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current global opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Every opacity value written so far, oldest first.
    pub fn opacity_log(&self) -> &[f32] {
        &self.opacity_log
    }

    pub fn clear_opacity_log(&mut self) {
        self.opacity_log.clear();
    }
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeLookup for MemoryScene {
    fn world_bounds(&self, name: &str) -> Option<Aabb> {
        self.nodes.get(name).copied()
    }
}

impl OpacityTarget for MemoryScene {
    fn set_global_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
        self.opacity_log.push(opacity);
    }
}
