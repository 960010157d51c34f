//! Common types used throughout obstacle_field

use nalgebra::Vector2;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Hashable, totally ordered form of the point
    pub fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.x), OrderedFloat(self.y))
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Point2D> for (f64, f64) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// Half the width and height of an axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfExtent {
    pub x: f64,
    pub y: f64,
}

impl HalfExtent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Square half-extent, e.g. the bounding box of a circle
    pub fn uniform(value: f64) -> Self {
        Self { x: value, y: value }
    }

    pub fn is_degenerate(&self) -> bool {
        self.x == 0.0 || self.y == 0.0
    }
}

/// Boundary sample points for a set of obstacles, grouped per obstacle
///
/// Groups keep the order in which obstacles were added. Within a group the
/// order follows the sampling strategy and carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    groups: Vec<Vec<Point2D>>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn from_groups(groups: Vec<Vec<Point2D>>) -> Self {
        Self { groups }
    }

    pub fn push_group(&mut self, points: Vec<Point2D>) {
        self.groups.push(points);
    }

    /// Points of every obstacle as one flat sequence
    pub fn points(&self) -> Vec<Point2D> {
        self.groups.iter().flatten().copied().collect()
    }

    pub fn groups(&self) -> &[Vec<Point2D>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Vec<Point2D>> {
        self.groups
    }

    /// Number of points across all obstacles
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn obstacle_count(&self) -> usize {
        self.groups.len()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.groups.iter().flatten().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.groups.iter().flatten().map(|p| p.y).collect()
    }

    /// Flat `(x, y)` pairs, the shape a DWA obstacle list takes
    pub fn to_tuples(&self) -> Vec<(f64, f64)> {
        self.groups.iter().flatten().map(|&p| p.into()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2d_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point2d_key_distinguishes_points() {
        let a = Point2D::new(1.0, 2.0);
        let b = Point2D::new(2.0, 1.0);
        assert_ne!(a.key(), b.key());
        assert_eq!(a.key(), Point2D::from((1.0, 2.0)).key());
    }

    #[test]
    fn test_half_extent_degenerate() {
        assert!(HalfExtent::new(0.0, 1.0).is_degenerate());
        assert!(!HalfExtent::uniform(0.5).is_degenerate());
    }

    #[test]
    fn test_point_cloud_flattens_in_group_order() {
        let mut cloud = PointCloud::new();
        cloud.push_group(vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)]);
        cloud.push_group(vec![Point2D::new(5.0, 5.0)]);

        assert_eq!(cloud.obstacle_count(), 2);
        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud.x_coords(), vec![0.0, 1.0, 5.0]);
        assert_eq!(cloud.to_tuples()[2], (5.0, 5.0));
    }

    #[test]
    fn test_empty_point_cloud() {
        let cloud = PointCloud::from_groups(vec![Vec::new()]);
        assert!(cloud.is_empty());
        assert_eq!(cloud.obstacle_count(), 1);
    }
}
