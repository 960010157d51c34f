//! Boundary sampling for axis-aligned rectangles
//!
//! A `resolution × resolution` grid is laid over the rectangle so that its
//! outer rows and columns sit exactly on the edges. The interior-exclusion
//! mask then drops every grid point that is strictly inside on all four
//! sides; points on an edge are kept. No epsilon is involved, which is why
//! the grid ends are pinned to the edge values.
//!
//! Kept coordinates are rounded away from the obstacle center, so rounding
//! can push a point further out but never back inside.

use std::collections::HashSet;

use itertools::iproduct;

use crate::common::{BoundarySampler, FieldError, FieldResult, HalfExtent, Point2D};
use crate::utils::{linspace, round_away_from, MAX_DECIMALS};

/// Grid samples per axis used by the obstacle-array tool
pub const DEFAULT_RESOLUTION: usize = 5;
/// Decimal places kept in extracted coordinates
pub const DEFAULT_DECIMALS: u32 = 2;

/// Rectangle boundary strategy
///
/// Unlike [`crate::boundary::ObstacleDescriptor`], a zero half-extent is
/// accepted here: the rectangle collapses to a segment (or a point) and
/// every grid sample lies on its boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleBoundary {
    half_extent: HalfExtent,
}

impl RectangleBoundary {
    pub fn new(half_extent: HalfExtent) -> FieldResult<Self> {
        for (axis, value) in [("x", half_extent.x), ("y", half_extent.y)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FieldError::InvalidParameter(format!(
                    "half_extent.{} must be non-negative, got {}",
                    axis, value
                )));
            }
        }
        Ok(Self { half_extent })
    }

    pub fn half_extent(&self) -> HalfExtent {
        self.half_extent
    }

    /// True iff `p` is strictly inside the rectangle centered at `center`
    pub fn is_strictly_interior(&self, center: Point2D, p: Point2D) -> bool {
        let h = self.half_extent;
        p.x > center.x - h.x && p.x < center.x + h.x && p.y > center.y - h.y && p.y < center.y + h.y
    }
}

impl BoundarySampler for RectangleBoundary {
    fn sample_boundary(
        &self,
        center: Point2D,
        resolution: usize,
        decimals: u32,
    ) -> FieldResult<Vec<Point2D>> {
        check_resolution(resolution)?;
        check_decimals(decimals)?;

        let h = self.half_extent;
        let (min_x, max_x) = (center.x - h.x, center.x + h.x);
        let (min_y, max_y) = (center.y - h.y, center.y + h.y);
        let xs = linspace(min_x, max_x, resolution);
        let ys = linspace(min_y, max_y, resolution);

        let mut seen = HashSet::new();
        let mut points = Vec::new();
        for (&x, &y) in iproduct!(xs.iter(), ys.iter()) {
            if !(x <= min_x || x >= max_x || y <= min_y || y >= max_y) {
                continue;
            }
            let p = Point2D::new(
                round_away_from(x, center.x, decimals),
                round_away_from(y, center.y, decimals),
            );
            // a collapsed axis maps a whole grid row onto one point
            if !h.is_degenerate() || seen.insert(p.key()) {
                points.push(p);
            }
        }
        Ok(points)
    }
}

pub(crate) fn check_resolution(resolution: usize) -> FieldResult<()> {
    if resolution < 2 {
        return Err(FieldError::InvalidParameter(format!(
            "boundary resolution must be at least 2, got {}",
            resolution
        )));
    }
    Ok(())
}

pub(crate) fn check_decimals(decimals: u32) -> FieldResult<()> {
    if decimals > MAX_DECIMALS {
        return Err(FieldError::InvalidParameter(format!(
            "decimals must be at most {}, got {}",
            MAX_DECIMALS, decimals
        )));
    }
    Ok(())
}

/// Boundary points of one rectangle, rounded to [`DEFAULT_DECIMALS`]
pub fn extract(center: Point2D, half_extent: HalfExtent, resolution: usize) -> FieldResult<Vec<Point2D>> {
    RectangleBoundary::new(half_extent)?.sample_boundary(center, resolution, DEFAULT_DECIMALS)
}
