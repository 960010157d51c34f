//! Collision-free random placement of obstacle centers on a lattice
//!
//! Points are drawn uniformly without replacement as distinct lattice
//! indices, so the work grows with `count` rather than with the lattice size
//! and no lattice point is ever used twice. Because lattice points are
//! `spacing` apart, any two placed centers are at least that far from each
//! other.

use rand::seq::index;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::common::{FieldError, FieldResult, Point2D};
use crate::placement::Lattice;

/// Random sampler over the points of a [`Lattice`]
#[derive(Debug, Clone)]
pub struct LatticeSampler {
    lattice: Lattice,
    /// Lattice index that is never drawn
    excluded: Option<usize>,
}

impl LatticeSampler {
    pub fn new(lattice: Lattice) -> Self {
        Self { lattice, excluded: None }
    }

    /// Never place an obstacle on `point`, e.g. the robot start position
    ///
    /// Removed from the candidates before sampling. A point that is not on
    /// the lattice excludes nothing.
    pub fn with_exclusion(mut self, point: Point2D) -> Self {
        self.excluded = self.lattice.index_of(point);
        if self.excluded.is_none() {
            warn!(x = point.x, y = point.y, "exclusion point is not on the lattice");
        }
        self
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Lattice point that is never drawn, if the exclusion hit the lattice
    pub fn excluded(&self) -> Option<Point2D> {
        self.excluded.and_then(|k| self.lattice.point_at(k))
    }

    /// Number of points that can be placed
    pub fn available(&self) -> usize {
        self.lattice.capacity() - usize::from(self.excluded.is_some())
    }

    /// Draw `count` distinct lattice points
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> FieldResult<Vec<Point2D>> {
        let available = self.available();
        if count > available {
            return Err(FieldError::InsufficientCapacity { requested: count, available });
        }

        // draw among the available indices, then step over the excluded one
        let selected = index::sample(rng, available, count)
            .into_iter()
            .map(|k| match self.excluded {
                Some(excluded) if k >= excluded => k + 1,
                _ => k,
            })
            .filter_map(|k| self.lattice.point_at(k))
            .collect::<Vec<_>>();
        debug!(count, remaining = available - count, "lattice points drawn");
        info!(count, capacity = available, "obstacle centers placed");

        Ok(selected)
    }
}

/// Draw `count` distinct points of the lattice with the given spacing and extent
pub fn sample<R: Rng + ?Sized>(
    count: usize,
    spacing: f64,
    extent: f64,
    rng: &mut R,
) -> FieldResult<Vec<Point2D>> {
    LatticeSampler::new(Lattice::new(spacing, extent)?).sample(count, rng)
}

/// Like [`sample`], but `exclusion` is never drawn
pub fn sample_excluding<R: Rng + ?Sized>(
    count: usize,
    spacing: f64,
    extent: f64,
    exclusion: Point2D,
    rng: &mut R,
) -> FieldResult<Vec<Point2D>> {
    LatticeSampler::new(Lattice::new(spacing, extent)?)
        .with_exclusion(exclusion)
        .sample(count, rng)
}
