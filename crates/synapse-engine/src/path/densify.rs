use crate::coords::Vec3;

/// Resamples `points` so consecutive samples are at most `spacing` apart.
///
/// Each segment `a → b` of length `d` is split into `ceil(d / spacing)` steps and
/// contributes the samples at fractions `0, 1/steps, …, (steps-1)/steps`; the
/// final control point is appended verbatim so the path ends exactly on it.
/// Zero-length segments contribute nothing.
///
/// Fewer than two points, or a spacing that is not a positive finite number,
/// returns the input unchanged.
pub fn densify(points: &[Vec3], spacing: f32) -> Vec<Vec3> {
    let Some(&last) = points.last() else {
        return Vec::new();
    };
    if points.len() < 2 || !(spacing.is_finite() && spacing > 0.0) {
        return points.to_vec();
    }

    let mut out = Vec::new();
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let steps = (a.distance(b) / spacing).ceil() as usize;
        out.extend((0..steps).map(|s| Vec3::lerp(a, b, s as f32 / steps as f32)));
    }
    out.push(last);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x(v: f32) -> Vec3 { Vec3::new(v, 0.0, 0.0) }

    #[test]
    fn ten_units_at_unit_spacing() {
        let out = densify(&[x(0.0), x(10.0)], 1.0);
        let xs: Vec<f32> = out.iter().map(|p| p.x).collect();
        assert_eq!(xs, (0..=10).map(|i| i as f32).collect::<Vec<_>>());
    }

    #[test]
    fn two_point_sample_count_is_ceil_plus_endpoint() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0); // length 5
        let out = densify(&[a, b], 1.5);
        assert_eq!(out.len(), 4 + 1);
        // Monotone along the segment.
        for w in out.windows(2) {
            assert!(a.distance(w[1]) > a.distance(w[0]));
        }
    }

    #[test]
    fn endpoints_are_exact() {
        let pts = [Vec3::new(0.1, 0.2, 0.3), Vec3::new(-1.7, 0.4, 2.2), Vec3::new(0.9, -3.3, 0.01)];
        let out = densify(&pts, 0.03);
        assert_eq!(out.first(), Some(&pts[0]));
        assert_eq!(out.last(), Some(&pts[2]));
    }

    #[test]
    fn interior_control_points_are_kept() {
        let out = densify(&[x(0.0), x(1.0), x(3.0)], 0.5);
        assert_eq!(out, vec![x(0.0), x(0.5), x(1.0), x(1.5), x(2.0), x(2.5), x(3.0)]);
    }

    #[test]
    fn spacing_bound_holds() {
        let pts = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 2.0)];
        let out = densify(&pts, 0.4);
        assert!(out.windows(2).all(|w| w[0].distance(w[1]) <= 0.4 + 1e-5));
    }

    #[test]
    fn degenerate_inputs_are_returned_unchanged() {
        assert!(densify(&[], 0.1).is_empty());
        assert_eq!(densify(&[x(2.0)], 0.1), vec![x(2.0)]);
        assert_eq!(densify(&[x(0.0), x(1.0)], 0.0), vec![x(0.0), x(1.0)]);
        assert_eq!(densify(&[x(0.0), x(1.0)], f32::NAN), vec![x(0.0), x(1.0)]);
    }

    #[test]
    fn duplicate_points_collapse() {
        assert_eq!(densify(&[x(1.0), x(1.0)], 0.5), vec![x(1.0)]);
    }

    #[test]
    fn deterministic() {
        let pts = [x(0.0), Vec3::new(0.3, 0.7, -0.2)];
        assert_eq!(densify(&pts, 0.05), densify(&pts, 0.05));
    }
}
