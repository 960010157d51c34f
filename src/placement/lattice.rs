//! Centered square lattice of candidate obstacle centers
//!
//! The lattice spans a square of side `extent` centered at the origin, with
//! points every `spacing` along both axes. The number of points per axis is
//! forced odd so that `(0, 0)` is always a lattice point.
//!
//! Points are never stored: index `k` is the point in row `k / n`, column
//! `k % n` of the `n × n` grid, so lattices far larger than memory can
//! still be sampled from.

use itertools::iproduct;
use tracing::debug;

use crate::common::{FieldError, FieldResult, Point2D};
use crate::utils::centered_axis;

/// Relative tolerance used when snapping a coordinate to a lattice index
const SNAP_TOLERANCE: f64 = 1e-9;
/// Upper bound on points per axis; keeps the squared count within `u64`
const MAX_POINTS_PER_AXIS: f64 = u32::MAX as f64;

/// Implicit grid of candidate points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    spacing: f64,
    extent: f64,
    points_per_axis: usize,
    capacity: usize,
}

impl Lattice {
    /// Create a lattice; spacing and extent must be finite and positive
    pub fn new(spacing: f64, extent: f64) -> FieldResult<Self> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(FieldError::InvalidParameter(format!(
                "lattice spacing must be positive, got {}",
                spacing
            )));
        }
        if !(extent.is_finite() && extent > 0.0) {
            return Err(FieldError::InvalidParameter(format!(
                "lattice extent must be positive, got {}",
                extent
            )));
        }

        let ratio = (extent / spacing).floor();
        if ratio >= MAX_POINTS_PER_AXIS {
            return Err(too_large(spacing, extent));
        }
        // +1 for the fencepost, then drop one if even to keep the origin
        let mut points_per_axis = ratio as usize + 1;
        if points_per_axis % 2 == 0 {
            points_per_axis -= 1;
        }
        let capacity = points_per_axis
            .checked_mul(points_per_axis)
            .ok_or_else(|| too_large(spacing, extent))?;
        debug!(spacing, extent, points_per_axis, capacity, "lattice sized");

        Ok(Self { spacing, extent, points_per_axis, capacity })
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Number of lattice points along one axis (always odd)
    pub fn points_per_axis(&self) -> usize {
        self.points_per_axis
    }

    /// Total number of lattice points
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lattice point at position `index` of [`Lattice::points`]
    pub fn point_at(&self, index: usize) -> Option<Point2D> {
        if index >= self.capacity {
            return None;
        }
        let n = self.points_per_axis;
        Some(Point2D::new(self.coordinate(index / n), self.coordinate(index % n)))
    }

    /// Lattice coordinates along one axis, ascending and centered at zero
    pub fn axis(&self) -> Vec<f64> {
        centered_axis(self.points_per_axis, self.spacing)
    }

    /// Every lattice point, x-major (all `y` for the first `x`, then the next `x`)
    pub fn points(&self) -> Vec<Point2D> {
        let axis = self.axis();
        iproduct!(axis.iter(), axis.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect()
    }

    /// Position in [`Lattice::points`] of the lattice point at `p`, if any
    ///
    /// Matches by snapping to the nearest index, so a coordinate computed in
    /// a slightly different way still finds its lattice point.
    pub fn index_of(&self, p: Point2D) -> Option<usize> {
        let i = self.axis_index(p.x)?;
        let j = self.axis_index(p.y)?;
        Some(i * self.points_per_axis + j)
    }

    pub fn contains(&self, p: Point2D) -> bool {
        self.index_of(p).is_some()
    }

    fn coordinate(&self, index: usize) -> f64 {
        let half = (self.points_per_axis as f64 - 1.0) / 2.0;
        self.spacing * (index as f64 - half)
    }

    fn axis_index(&self, value: f64) -> Option<usize> {
        let half = (self.points_per_axis as f64 - 1.0) / 2.0;
        let index = (value / self.spacing + half).round();
        if index < 0.0 || index > (self.points_per_axis - 1) as f64 {
            return None;
        }
        let snapped = self.spacing * (index - half);
        let tolerance = SNAP_TOLERANCE * self.spacing.max(snapped.abs());
        if (snapped - value).abs() <= tolerance {
            Some(index as usize)
        } else {
            None
        }
    }
}

fn too_large(spacing: f64, extent: f64) -> FieldError {
    FieldError::InvalidParameter(format!(
        "lattice with spacing {} over extent {} has too many points",
        spacing, extent
    ))
}
