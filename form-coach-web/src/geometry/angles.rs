//! Joint angle calculation from bearing difference
//!
//! Computes the interior angle at a joint from the bearings of the two
//! rays leaving it (joint→parent and joint→child).

use std::f32::consts::PI;

/// Below this ray length the bearing is undefined
const MIN_RAY_LENGTH: f32 = 1e-4;

/// Calculate angle ABC in degrees (angle at `b`)
///
/// Returns `None` when any point is missing, non-finite, or coincides
/// with the vertex. Result is always within [0, 180]:
/// - 180° = fully straight (e.g. standing knee)
/// - 90° = right-angle bend
pub fn angle_at(
    a: Option<(f32, f32)>,
    b: Option<(f32, f32)>,
    c: Option<(f32, f32)>,
) -> Option<f32> {
    angle_between(a?, b?, c?)
}

/// Same as [`angle_at`] for points that are already resolved
pub fn angle_between(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Option<f32> {
    let finite = [a.0, a.1, b.0, b.1, c.0, c.1].iter().all(|v| v.is_finite());
    if !finite {
        return None;
    }

    // Rays from the vertex
    let ba = (a.0 - b.0, a.1 - b.1);
    let bc = (c.0 - b.0, c.1 - b.1);

    if ray_length(ba) < MIN_RAY_LENGTH || ray_length(bc) < MIN_RAY_LENGTH {
        return None;
    }

    let bearing_a = ba.1.atan2(ba.0);
    let bearing_c = bc.1.atan2(bc.0);

    // Fold the bearing difference into [0, π]
    let mut angle = (bearing_c - bearing_a).abs();
    if angle > PI {
        angle = 2.0 * PI - angle;
    }

    Some(angle.to_degrees().clamp(0.0, 180.0))
}

fn ray_length(v: (f32, f32)) -> f32 {
    (v.0 * v.0 + v.1 * v.1).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_leg() {
        let hip = (0.0, 0.0);
        let knee = (0.0, 0.5);
        let ankle = (0.0, 1.0);
        let angle = angle_between(hip, knee, ankle).unwrap();
        assert!((angle - 180.0).abs() < 1.0);
    }

    #[test]
    fn test_right_angle() {
        let shoulder = (0.0, 0.0);
        let elbow = (0.5, 0.0);
        let wrist = (0.5, 0.5);
        let angle = angle_between(shoulder, elbow, wrist).unwrap();
        assert!((angle - 90.0).abs() < 1.0);
    }

    #[test]
    fn test_reflex_difference_is_folded() {
        // Bearings of +170° and -170° are only 20° apart
        let a = (-1.0, 0.176);
        let b = (0.0, 0.0);
        let c = (-1.0, -0.176);
        let angle = angle_between(a, b, c).unwrap();
        assert!((angle - 20.0).abs() < 0.5);
    }

    #[test]
    fn test_order_of_outer_points_does_not_matter() {
        let a = (3.0, 1.0);
        let b = (1.0, 1.0);
        let c = (2.0, 4.0);
        let ab = angle_between(a, b, c).unwrap();
        let ba = angle_between(c, b, a).unwrap();
        assert!((ab - ba).abs() < 1e-3);
    }

    #[test]
    fn test_missing_point_is_unavailable() {
        assert_eq!(angle_at(None, Some((0.0, 0.0)), Some((1.0, 0.0))), None);
        assert_eq!(angle_at(Some((1.0, 0.0)), None, Some((1.0, 0.0))), None);
    }

    #[test]
    fn test_degenerate_geometry_is_unavailable() {
        let p = (0.3, 0.3);
        assert_eq!(angle_between(p, p, (1.0, 1.0)), None);
        assert_eq!(angle_between((0.0, 0.0), (f32::NAN, 0.0), (1.0, 1.0)), None);
    }
}
