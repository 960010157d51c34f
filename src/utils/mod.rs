//! Utility modules for obstacle_field

pub mod sampling_grid;

pub use sampling_grid::*;
