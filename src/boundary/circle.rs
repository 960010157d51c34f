//! Boundary sampling for circular obstacles
//!
//! Samples are spread evenly in angle on the circumference, starting on the
//! +x axis. The count is `4 * (resolution - 1)`, which is what the rectangle
//! strategy keeps on its perimeter at the same resolution, so box and
//! cylinder obstacles get comparable point densities.
//!
//! Each offset from the center is rounded away from the center, so no
//! rounded point ends up closer than the radius.

use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::boundary::rectangle::{check_decimals, check_resolution};
use crate::common::{BoundarySampler, FieldError, FieldResult, Point2D};
use crate::utils::round_away_from;

/// Direction components this small are treated as exactly on an axis
const AXIS_SNAP: f64 = 1e-12;

/// Circle boundary strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleBoundary {
    radius: f64,
}

impl CircleBoundary {
    pub fn new(radius: f64) -> FieldResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(FieldError::InvalidParameter(format!(
                "radius must be positive, got {}",
                radius
            )));
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of circumference samples for a grid resolution of at least 2
    fn sample_count(resolution: usize) -> usize {
        4 * (resolution - 1)
    }
}

impl BoundarySampler for CircleBoundary {
    fn sample_boundary(
        &self,
        center: Point2D,
        resolution: usize,
        decimals: u32,
    ) -> FieldResult<Vec<Point2D>> {
        check_resolution(resolution)?;
        check_decimals(decimals)?;

        let n = Self::sample_count(resolution);
        let c = center.to_vector();
        let snap = |t: f64| if t.abs() < AXIS_SNAP { 0.0 } else { t };
        let points = (0..n)
            .map(|k| {
                let theta = 2.0 * PI * k as f64 / n as f64;
                let v = c + self.radius * Vector2::new(snap(theta.cos()), snap(theta.sin()));
                Point2D::new(
                    round_away_from(v.x, center.x, decimals),
                    round_away_from(v.y, center.y, decimals),
                )
            })
            .collect();
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::rectangle::DEFAULT_DECIMALS;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sample_count_matches_rectangle_perimeter() {
        let circle = CircleBoundary::new(1.0).unwrap();
        let points = circle.sample_boundary(Point2D::origin(), 5, DEFAULT_DECIMALS).unwrap();
        assert_eq!(points.len(), 16);
    }

    #[test]
    fn test_axis_extremes_present() {
        let center = Point2D::new(3.0, -3.0);
        let circle = CircleBoundary::new(1.0).unwrap();
        let points = circle.sample_boundary(center, 5, DEFAULT_DECIMALS).unwrap();
        for (x, y) in [(4.0, -3.0), (3.0, -2.0), (2.0, -3.0), (3.0, -4.0)] {
            assert!(points.iter().any(|p| p.x == x && p.y == y), "missing ({}, {})", x, y);
        }
    }

    #[test]
    fn test_points_lie_on_circle() {
        let center = Point2D::new(-1.0, 2.0);
        let circle = CircleBoundary::new(0.8).unwrap();
        let points = circle.sample_boundary(center, 9, 6).unwrap();
        assert_eq!(points.len(), 32);
        for p in &points {
            assert_abs_diff_eq!(p.distance(&center), 0.8, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_rounding_keeps_points_outside() {
        for i in 0..10 {
            let center = Point2D::new(0.1234 * i as f64 - 0.517, 0.0871 * i as f64 + 0.0033);
            let radius = 0.3117 + 0.1913 * i as f64;
            let circle = CircleBoundary::new(radius).unwrap();
            for resolution in 2..9 {
                for decimals in 0..4 {
                    let points = circle.sample_boundary(center, resolution, decimals).unwrap();
                    assert_eq!(points.len(), 4 * (resolution - 1));
                    for p in &points {
                        assert!(p.distance(&center) >= radius - 1e-9, "{:?} inside r={}", p, radius);
                    }
                }
            }
        }
    }

    #[test]
    fn test_small_circle_keeps_every_sample() {
        let circle = CircleBoundary::new(0.001).unwrap();
        let points = circle.sample_boundary(Point2D::origin(), 5, DEFAULT_DECIMALS).unwrap();
        assert_eq!(points.len(), 16);
        assert!(points.contains(&Point2D::new(0.01, 0.0)));
        assert!(points.contains(&Point2D::new(0.0, -0.01)));
    }

    #[test]
    fn test_invalid_radius() {
        assert!(matches!(CircleBoundary::new(0.0), Err(FieldError::InvalidParameter(_))));
        assert!(matches!(CircleBoundary::new(-2.0), Err(FieldError::InvalidParameter(_))));
    }

    #[test]
    fn test_invalid_resolution() {
        let circle = CircleBoundary::new(1.0).unwrap();
        assert!(circle.sample_boundary(Point2D::origin(), 1, 2).is_err());
        assert!(circle.sample_boundary(Point2D::origin(), 0, 2).is_err());
        assert!(matches!(
            circle.sample_boundary(Point2D::origin(), 5, 16),
            Err(FieldError::InvalidParameter(_))
        ));
    }
}
