use super::Vec2;

/// Parameters closer than this count as one touching point.
const TANGENT_EPSILON: f32 = 1e-6;

/// Points where the segment `a → b` crosses the circle around `center`.
///
/// Solves `|a + t·(b - a) - center|² = radius²` and keeps the roots with
/// `t ∈ [0, 1]`, ordered from `a` towards `b`. A tangent segment yields one
/// point. A zero-length segment yields its point when it lies on the circle.
pub fn segment_circle_intersections(center: Vec2, radius: f32, a: Vec2, b: Vec2) -> Vec<Vec2> {
    let d = b - a;
    let f = a - center;

    let qa = d.dot(d);
    if qa == 0.0 {
        return if (f.length() - radius.abs()).abs() <= TANGENT_EPSILON { vec![a] } else { Vec::new() };
    }
    let qb = 2.0 * d.dot(f);
    let qc = f.dot(f) - radius * radius;

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return Vec::new();
    }

    let root = disc.sqrt();
    let t1 = (-qb - root) / (2.0 * qa);
    let t2 = (-qb + root) / (2.0 * qa);
    let on_segment = |t: f32| (0.0..=1.0).contains(&t);

    let mut points = Vec::with_capacity(2);
    if on_segment(t1) {
        points.push(a + d * t1);
    }
    if on_segment(t2) && (t2 - t1).abs() > TANGENT_EPSILON {
        points.push(a + d * t2);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    const UNIT: f32 = 1.0;

    #[test]
    fn chord_through_center_hits_twice() {
        let hits = segment_circle_intersections(Vec2::zero(), UNIT, p(-2.0, 0.0), p(2.0, 0.0));
        assert_eq!(hits, vec![p(-1.0, 0.0), p(1.0, 0.0)]);
    }

    #[test]
    fn hits_are_ordered_from_start() {
        let hits = segment_circle_intersections(Vec2::zero(), UNIT, p(2.0, 0.0), p(-2.0, 0.0));
        assert_eq!(hits, vec![p(1.0, 0.0), p(-1.0, 0.0)]);
    }

    #[test]
    fn miss_has_no_points() {
        assert!(segment_circle_intersections(Vec2::zero(), UNIT, p(-2.0, 2.0), p(2.0, 2.0)).is_empty());
    }

    #[test]
    fn tangent_counts_once() {
        let hits = segment_circle_intersections(Vec2::zero(), UNIT, p(-2.0, 1.0), p(2.0, 1.0));
        assert_eq!(hits, vec![p(0.0, 1.0)]);
    }

    #[test]
    fn roots_off_the_segment_are_clipped() {
        // Starts at the center: only the exit point lies on the segment.
        let hits = segment_circle_intersections(Vec2::zero(), UNIT, Vec2::zero(), p(2.0, 0.0));
        assert_eq!(hits, vec![p(1.0, 0.0)]);

        // Entirely inside.
        assert!(segment_circle_intersections(Vec2::zero(), UNIT, p(-0.5, 0.0), p(0.5, 0.0)).is_empty());

        // On the line, but short of the circle.
        assert!(segment_circle_intersections(Vec2::zero(), UNIT, p(2.0, 0.0), p(3.0, 0.0)).is_empty());
    }

    #[test]
    fn endpoint_on_circle_is_included() {
        let hits = segment_circle_intersections(Vec2::zero(), UNIT, p(1.0, 0.0), p(3.0, 0.0));
        assert_eq!(hits, vec![p(1.0, 0.0)]);
    }

    #[test]
    fn zero_length_segment() {
        assert_eq!(
            segment_circle_intersections(Vec2::zero(), UNIT, p(0.0, 1.0), p(0.0, 1.0)),
            vec![p(0.0, 1.0)]
        );
        assert!(segment_circle_intersections(Vec2::zero(), UNIT, Vec2::zero(), Vec2::zero()).is_empty());
    }

    #[test]
    fn offset_circle() {
        let hits = segment_circle_intersections(p(10.0, 5.0), 2.0, p(10.0, 0.0), p(10.0, 8.0));
        assert_eq!(hits, vec![p(10.0, 3.0), p(10.0, 7.0)]);
    }
}
