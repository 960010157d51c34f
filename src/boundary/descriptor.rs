//! Obstacle descriptors consumed by the boundary extractor

use crate::common::{FieldError, FieldResult, HalfExtent, Point2D};

/// Obstacle footprint in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleShape {
    /// Axis-aligned rectangle (a `box` geom)
    Rectangle { half_extent: HalfExtent },
    /// Circle (a `cylinder` geom seen from above)
    Circle { radius: f64 },
}

impl ObstacleShape {
    /// Half-extent of the smallest axis-aligned box containing the shape
    pub fn bounding_half_extent(&self) -> HalfExtent {
        match *self {
            ObstacleShape::Rectangle { half_extent } => half_extent,
            ObstacleShape::Circle { radius } => HalfExtent::uniform(radius),
        }
    }

    fn validate(&self) -> FieldResult<()> {
        match *self {
            ObstacleShape::Rectangle { half_extent } => {
                check_positive("half_extent.x", half_extent.x)?;
                check_positive("half_extent.y", half_extent.y)
            }
            ObstacleShape::Circle { radius } => check_positive("radius", radius),
        }
    }
}

/// One obstacle: where it is and what it looks like from above
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleDescriptor {
    name: Option<String>,
    center: Point2D,
    shape: ObstacleShape,
}

impl ObstacleDescriptor {
    /// Create a descriptor; sizes must be strictly positive
    pub fn new(center: Point2D, shape: ObstacleShape) -> FieldResult<Self> {
        shape.validate()?;
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(FieldError::InvalidParameter(format!(
                "obstacle center must be finite, got ({}, {})",
                center.x, center.y
            )));
        }
        Ok(Self { name: None, center, shape })
    }

    pub fn rectangle(center: Point2D, half_x: f64, half_y: f64) -> FieldResult<Self> {
        Self::new(center, ObstacleShape::Rectangle { half_extent: HalfExtent::new(half_x, half_y) })
    }

    pub fn circle(center: Point2D, radius: f64) -> FieldResult<Self> {
        Self::new(center, ObstacleShape::Circle { radius })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn center(&self) -> Point2D {
        self.center
    }

    pub fn shape(&self) -> ObstacleShape {
        self.shape
    }
}

fn check_positive(field: &str, value: f64) -> FieldResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FieldError::InvalidParameter(format!("{} must be positive, got {}", field, value)))
    }
}
