//! Point cloud extraction for a whole obstacle set
//!
//! Each obstacle is dispatched to the boundary strategy for its shape and
//! the per-obstacle groups are collected, in obstacle order, into a
//! [`PointCloud`]. The extractor holds no state besides its configuration.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::boundary::rectangle::{check_decimals, check_resolution};
use crate::boundary::{
    CircleBoundary, ObstacleDescriptor, ObstacleShape, RectangleBoundary, DEFAULT_DECIMALS,
    DEFAULT_RESOLUTION,
};
use crate::common::{BoundarySampler, FieldResult, ObstacleSource, Point2D, PointCloud};

/// How circular obstacles are sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleMode {
    /// Points on the circumference
    #[default]
    Perimeter,
    /// Treat the circle as its bounding square
    BoundingBox,
}

/// Configuration for the boundary extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Grid samples per axis
    pub resolution: usize,
    /// Decimal places kept in output coordinates
    pub decimals: u32,
    pub circle_mode: CircleMode,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            decimals: DEFAULT_DECIMALS,
            circle_mode: CircleMode::default(),
        }
    }
}

impl ExtractorConfig {
    /// Resolution must be at least 2 and decimals at most [`crate::utils::MAX_DECIMALS`]
    pub fn validate(&self) -> FieldResult<()> {
        check_resolution(self.resolution)?;
        check_decimals(self.decimals)
    }
}

/// Turns obstacle descriptors into boundary point clouds
#[derive(Debug, Clone, Default)]
pub struct BoundaryExtractor {
    config: ExtractorConfig,
}

impl BoundaryExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Boundary points of a single obstacle
    pub fn extract_obstacle(&self, obstacle: &ObstacleDescriptor) -> FieldResult<Vec<Point2D>> {
        let ExtractorConfig { resolution, decimals, circle_mode } = self.config;
        let center = obstacle.center();
        let points = match (obstacle.shape(), circle_mode) {
            (ObstacleShape::Rectangle { half_extent }, _) => {
                RectangleBoundary::new(half_extent)?.sample_boundary(center, resolution, decimals)?
            }
            (shape @ ObstacleShape::Circle { .. }, CircleMode::BoundingBox) => {
                RectangleBoundary::new(shape.bounding_half_extent())?
                    .sample_boundary(center, resolution, decimals)?
            }
            (ObstacleShape::Circle { radius }, CircleMode::Perimeter) => {
                CircleBoundary::new(radius)?.sample_boundary(center, resolution, decimals)?
            }
        };
        debug!(
            name = obstacle.name().unwrap_or("<unnamed>"),
            x = center.x,
            y = center.y,
            points = points.len(),
            "obstacle boundary sampled"
        );
        Ok(points)
    }

    /// Boundary points of every obstacle from `source`, grouped per obstacle
    ///
    /// Fails on the first malformed or invalid obstacle.
    pub fn extract<S: ObstacleSource + ?Sized>(&self, source: &S) -> FieldResult<PointCloud> {
        self.config.validate()?;
        let obstacles = source.obstacle_descriptors()?;
        let mut cloud = PointCloud::new();
        for obstacle in &obstacles {
            cloud.push_group(self.extract_obstacle(obstacle)?);
        }
        info!(obstacles = cloud.obstacle_count(), points = cloud.len(), "point cloud extracted");
        Ok(cloud)
    }

    /// Flat point sequence for the planner, grouped by obstacle
    pub fn extract_points<S: ObstacleSource + ?Sized>(&self, source: &S) -> FieldResult<Vec<Point2D>> {
        Ok(self.extract(source)?.points())
    }
}
