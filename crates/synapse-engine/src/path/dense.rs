use crate::coords::Vec3;

use super::densify;

/// A densified path addressed by fractional sample index.
///
/// The parametric length is [`last_index`](Self::last_index): a parameter `t`
/// in `[0, last_index]` lies on the path, sample `floor(t)` blended towards
/// sample `floor(t) + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DensePath {
    points: Vec<Vec3>,
}

impl DensePath {
    /// Wraps already-resampled points.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Densifies control points at `spacing`.
    pub fn from_control_points(control: &[Vec3], spacing: f32) -> Self {
        Self::new(densify(control, spacing))
    }

    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when there is nothing to animate over (fewer than two samples).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// Largest valid parameter, `len - 1` (0 for an empty path).
    #[inline]
    pub fn last_index(&self) -> f32 {
        self.points.len().saturating_sub(1) as f32
    }

    /// Whether `t` addresses a point on the path.
    #[inline]
    pub fn contains_param(&self, t: f32) -> bool {
        !self.points.is_empty() && t >= 0.0 && t <= self.last_index()
    }

    /// Position at parameter `t`, or `None` when `t` is off the path.
    pub fn sample(&self, t: f32) -> Option<Vec3> {
        if !self.contains_param(t) {
            return None;
        }
        let last = self.points.len() - 1;
        let lo = (t.floor() as usize).min(last);
        let hi = (lo + 1).min(last);
        Some(Vec3::lerp(self.points[lo], self.points[hi], t - lo as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> DensePath {
        DensePath::from_control_points(&[Vec3::zero(), Vec3::new(4.0, 0.0, 0.0)], 1.0)
    }

    #[test]
    fn last_index_is_len_minus_one() {
        assert_eq!(line().len(), 5);
        assert_eq!(line().last_index(), 4.0);
        assert_eq!(DensePath::default().last_index(), 0.0);
    }

    #[test]
    fn sample_interpolates_between_neighbours() {
        assert_eq!(line().sample(2.5), Some(Vec3::new(2.5, 0.0, 0.0)));
        assert_eq!(line().sample(0.0), Some(Vec3::zero()));
        assert_eq!(line().sample(4.0), Some(Vec3::new(4.0, 0.0, 0.0)));
    }

    #[test]
    fn sample_off_path_is_none() {
        assert_eq!(line().sample(-0.5), None);
        assert_eq!(line().sample(4.01), None);
        assert_eq!(DensePath::default().sample(0.0), None);
    }
}
