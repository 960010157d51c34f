//! Configuration for obstacle placement and the resulting placement

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::common::{FieldError, FieldResult, Point2D};
use crate::placement::{Lattice, LatticeSampler};

/// Configuration for laying out obstacles around the robot start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Number of obstacles, not counting the goal marker
    pub obstacle_count: usize,
    /// Largest (diagonal) robot length [m]
    pub robot_diagonal: f64,
    /// Center-to-center spacing in multiples of the robot diagonal
    pub spacing_factor: f64,
    /// Obstacle half-size in multiples of the robot diagonal
    pub obstacle_size_factor: f64,
    /// Robot start position, kept free of obstacles when set
    pub start: Option<Point2D>,
    /// Goal marker position, placed outside the sampled lattice
    pub goal: Point2D,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            obstacle_count: 5,
            robot_diagonal: 1.0,
            spacing_factor: 3.0,
            obstacle_size_factor: 1.0,
            start: Some(Point2D::origin()),
            goal: Point2D::new(10.0, 10.0),
        }
    }
}

impl PlacementConfig {
    /// Center-to-center distance between lattice points [m]
    pub fn spacing(&self) -> f64 {
        self.spacing_factor * self.robot_diagonal
    }

    /// Side length of the square region obstacles are placed in [m]
    ///
    /// Grows with the number of scene objects, the goal marker included.
    pub fn plane_width(&self) -> f64 {
        0.5 * (self.obstacle_count + 1) as f64 * self.spacing()
    }

    /// Obstacle half-extent along x and y [m]
    pub fn obstacle_half_size(&self) -> f64 {
        self.obstacle_size_factor * self.robot_diagonal
    }

    pub fn validate(&self) -> FieldResult<()> {
        if !(self.robot_diagonal.is_finite() && self.robot_diagonal > 0.0) {
            return Err(FieldError::InvalidParameter(format!(
                "robot_diagonal must be positive, got {}",
                self.robot_diagonal
            )));
        }
        if !(self.spacing_factor.is_finite() && self.spacing_factor > 0.0) {
            return Err(FieldError::InvalidParameter(format!(
                "spacing_factor must be positive, got {}",
                self.spacing_factor
            )));
        }
        if !(self.obstacle_size_factor.is_finite() && self.obstacle_size_factor > 0.0) {
            return Err(FieldError::InvalidParameter(format!(
                "obstacle_size_factor must be positive, got {}",
                self.obstacle_size_factor
            )));
        }
        Ok(())
    }

    pub fn lattice(&self) -> FieldResult<Lattice> {
        self.validate()?;
        Lattice::new(self.spacing(), self.plane_width())
    }

    pub fn sampler(&self) -> FieldResult<LatticeSampler> {
        let sampler = LatticeSampler::new(self.lattice()?);
        Ok(match self.start {
            Some(start) => sampler.with_exclusion(start),
            None => sampler,
        })
    }

    /// Sample obstacle centers and attach the goal marker
    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldResult<Placement> {
        let obstacles = self.sampler()?.sample(self.obstacle_count, rng)?;
        Ok(Placement { obstacles, goal: self.goal })
    }
}

/// Sampled obstacle centers plus the goal marker
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub obstacles: Vec<Point2D>,
    pub goal: Point2D,
}

impl Placement {
    /// Obstacle centers in sampling order, followed by the goal
    pub fn positions(&self) -> Vec<Point2D> {
        let mut positions = self.obstacles.clone();
        positions.push(self.goal);
        positions
    }
}
