//! Common traits defining the seams between placement, scene and extraction

use crate::boundary::ObstacleDescriptor;
use crate::common::error::FieldResult;
use crate::common::types::*;

/// Trait for shape-specific boundary sampling strategies
pub trait BoundarySampler {
    /// Sample points on or outside the shape boundary around `center`
    ///
    /// `resolution` is the number of grid samples per axis (or the matching
    /// density for curved shapes). Points are rounded to the configured
    /// decimal precision before they are returned.
    fn sample_boundary(
        &self,
        center: Point2D,
        resolution: usize,
        decimals: u32,
    ) -> FieldResult<Vec<Point2D>>;
}

/// Trait for anything that can supply obstacle descriptors to the extractor
///
/// Implementations must surface malformed entries as errors instead of
/// skipping them.
pub trait ObstacleSource {
    fn obstacle_descriptors(&self) -> FieldResult<Vec<ObstacleDescriptor>>;
}

impl ObstacleSource for [ObstacleDescriptor] {
    fn obstacle_descriptors(&self) -> FieldResult<Vec<ObstacleDescriptor>> {
        Ok(self.to_vec())
    }
}

impl ObstacleSource for Vec<ObstacleDescriptor> {
    fn obstacle_descriptors(&self) -> FieldResult<Vec<ObstacleDescriptor>> {
        Ok(self.clone())
    }
}
