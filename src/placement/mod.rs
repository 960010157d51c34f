// Obstacle placement on a centered square lattice

pub mod lattice;
pub mod sampler;
pub mod config;

pub use lattice::*;
pub use sampler::*;
pub use config::*;
