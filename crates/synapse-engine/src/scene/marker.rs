use crate::coords::{ColorRgba, Vec3};

/// A reusable visual entity stepped along a path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
    pub position: Vec3,
    pub visible: bool,
    pub color: ColorRgba,
}

impl Marker {
    pub const fn hidden(color: ColorRgba) -> Self {
        Self { position: Vec3::zero(), visible: false, color }
    }
}

/// Index of a marker pool inside the controller that owns it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PoolId(pub usize);

/// Fixed-size set of markers, allocated once and reused by every run.
#[derive(Debug, Clone)]
pub struct MarkerPool {
    label: String,
    markers: Vec<Marker>,
}

impl MarkerPool {
    pub fn new(label: impl Into<String>, count: usize, color: ColorRgba) -> Self {
        Self { label: label.into(), markers: vec![Marker::hidden(color); count] }
    }

    /// Name used in diagnostics (`"heart"`, `"pupil/left"`).
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn markers_mut(&mut self) -> &mut [Marker] {
        &mut self.markers
    }

    pub fn visible_count(&self) -> usize {
        self.markers.iter().filter(|m| m.visible).count()
    }

    pub fn hide_all(&mut self) {
        for m in &mut self.markers {
            m.visible = false;
        }
    }

    pub fn set_color(&mut self, color: ColorRgba) {
        for m in &mut self.markers {
            m.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pool_is_hidden() {
        let pool = MarkerPool::new("heart", 10, ColorRgba::SYMPATHETIC);
        assert_eq!(pool.len(), 10);
        assert_eq!(pool.visible_count(), 0);
    }

    #[test]
    fn hide_all_hides_every_marker() {
        let mut pool = MarkerPool::new("heart", 3, ColorRgba::SYMPATHETIC);
        for m in pool.markers_mut() {
            m.visible = true;
        }
        pool.hide_all();
        assert!(pool.iter().all(|m| !m.visible));
    }

    #[test]
    fn set_color_recolors_every_marker() {
        let mut pool = MarkerPool::new("lung", 4, ColorRgba::SYMPATHETIC);
        pool.set_color(ColorRgba::PARASYMPATHETIC);
        assert!(pool.iter().all(|m| m.color == ColorRgba::PARASYMPATHETIC));
    }
}
