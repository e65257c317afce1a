//! Angle helpers for pointer-driven rotation.
//!
//! All angles are in degrees using the `atan2` convention: 0° points along
//! +x and angles grow toward +y (clockwise on screen, since y points down).

use kurbo::{Point, Rect};

/// Angle in degrees from the center of `bounds` to `pointer`.
pub fn pointer_angle(bounds: Rect, pointer: Point) -> f64 {
    let center = bounds.center();
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}

/// Wrap a raw angle difference into the half-open range (-180, 180].
///
/// The result is congruent to `delta` modulo 360 and is the shortest signed
/// path between the two samples.
pub fn normalize_delta(delta: f64) -> f64 {
    let wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }

    #[test]
    fn test_pointer_angle_axes() {
        let rect = square();
        assert!((pointer_angle(rect, Point::new(200.0, 100.0)) - 0.0).abs() < 1e-9);
        assert!((pointer_angle(rect, Point::new(100.0, 200.0)) - 90.0).abs() < 1e-9);
        assert!((pointer_angle(rect, Point::new(0.0, 100.0)) - 180.0).abs() < 1e-9);
        assert!((pointer_angle(rect, Point::new(100.0, 0.0)) + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_angle_offset_rect() {
        let rect = Rect::new(50.0, 80.0, 150.0, 180.0);
        let angle = pointer_angle(rect, Point::new(150.0, 180.0));
        assert!((angle - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_shortest_path() {
        assert!((normalize_delta(350.0) + 10.0).abs() < 1e-9);
        assert!((normalize_delta(-350.0) - 10.0).abs() < 1e-9);
        assert!((normalize_delta(10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_boundaries() {
        assert_eq!(normalize_delta(180.0), 180.0);
        assert_eq!(normalize_delta(-180.0), 180.0);
        assert_eq!(normalize_delta(0.0), 0.0);
        assert_eq!(normalize_delta(360.0), 0.0);
        assert_eq!(normalize_delta(540.0), 180.0);
    }

    #[test]
    fn test_normalize_range_and_congruence() {
        let samples = [-179.5, -90.0, 0.0, 45.0, 179.9, 180.0];
        for &a in &samples {
            for &b in &samples {
                let raw = a - b;
                let n = normalize_delta(raw);
                assert!(n > -180.0 && n <= 180.0, "{raw} -> {n}");
                let diff = (raw - n).rem_euclid(360.0);
                assert!(diff < 1e-9 || (360.0 - diff) < 1e-9, "{raw} -> {n}");
            }
        }
    }
}
