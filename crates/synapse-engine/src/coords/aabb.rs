use super::Vec3;

/// Axis-aligned bounding box in world space.
///
/// Invariant: `min <= max` on every axis once constructed through [`Aabb::new`]
/// or [`Aabb::from_points`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two opposite corners in any order.
    #[inline]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty slice.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Aabb::new(*first, *first), |acc, &p| acc.union(Aabb::new(p, p))))
    }

    #[inline]
    pub fn center(self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(self) -> Vec3 {
        self.max - self.min
    }

    /// True when the box has no volume on at least one axis.
    #[inline]
    pub fn is_empty(self) -> bool {
        let s = self.size();
        s.x <= 0.0 || s.y <= 0.0 || s.z <= 0.0
    }

    /// Closed-interval containment on every axis.
    #[inline]
    pub fn contains(self, p: Vec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x
            && p.y >= self.min.y && p.y <= self.max.y
            && p.z >= self.min.z && p.z <= self.max.z
    }

    #[inline]
    pub fn union(self, other: Aabb) -> Aabb {
        Aabb {
            min: Vec3::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y), self.min.z.min(other.min.z)),
            max: Vec3::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y), self.max.z.max(other.max.z)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32) -> Vec3 { Vec3::new(x, y, z) }

    // ── new ───────────────────────────────────────────────────────────────

    #[test]
    fn new_orders_corners() {
        let b = Aabb::new(v(2.0, -1.0, 5.0), v(0.0, 3.0, 1.0));
        assert_eq!(b.min, v(0.0, -1.0, 1.0));
        assert_eq!(b.max, v(2.0, 3.0, 5.0));
    }

    // ── center ────────────────────────────────────────────────────────────

    #[test]
    fn center_is_midpoint() {
        let b = Aabb::new(v(0.0, 0.0, 0.0), v(2.0, 4.0, -6.0));
        assert_eq!(b.center(), v(1.0, 2.0, -3.0));
    }

    #[test]
    fn degenerate_box_center_is_the_point() {
        let p = v(1.5, -2.0, 0.25);
        assert_eq!(Aabb::new(p, p).center(), p);
        assert!(Aabb::new(p, p).is_empty());
    }

    // ── from_points / union ───────────────────────────────────────────────

    #[test]
    fn from_points_encloses_all() {
        let pts = [v(1.0, 1.0, 1.0), v(-1.0, 2.0, 0.0), v(0.0, -3.0, 4.0)];
        let b = Aabb::from_points(&pts).unwrap();
        assert!(pts.iter().all(|&p| b.contains(p)));
        assert_eq!(b.min, v(-1.0, -3.0, 0.0));
        assert_eq!(b.max, v(1.0, 2.0, 4.0));
    }

    #[test]
    fn from_points_empty_is_none() {
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn contains_rejects_outside() {
        let b = Aabb::new(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0));
        assert!(!b.contains(v(1.5, 0.5, 0.5)));
        assert!(b.contains(v(1.0, 1.0, 1.0)));
    }
}
