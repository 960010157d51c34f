//! obstacle_field - obstacle layouts and boundary point clouds for local planners
//!
//! This crate places non-overlapping obstacles on a centered square lattice,
//! describes them as a simulator scene, and turns the scene back into the
//! discrete obstacle points a Dynamic Window Approach style planner checks
//! its candidate trajectories against.

// Core modules
pub mod common;
pub mod utils;
pub mod config;

// Algorithm modules
pub mod placement;
pub mod boundary;
pub mod scene;

// Re-export common types for convenience
pub use common::{Point2D, HalfExtent, PointCloud};
pub use common::{BoundarySampler, ObstacleSource};
pub use common::{FieldError, FieldResult};
pub use config::FieldConfig;
pub use placement::{Lattice, LatticeSampler, Placement, PlacementConfig};
pub use boundary::{BoundaryExtractor, ExtractorConfig, ObstacleDescriptor, ObstacleShape};
pub use scene::{Scene, SceneBuilder};
