//! Error types for obstacle_field

use thiserror::Error;

/// Main error type for obstacle placement and boundary extraction
#[derive(Debug, Error)]
pub enum FieldError {
    /// Spacing, extent, obstacle size or sampling resolution out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// More obstacles requested than the lattice can hold
    #[error("Insufficient capacity: requested {requested} points, lattice holds {available}")]
    InsufficientCapacity { requested: usize, available: usize },

    /// Scene entry missing fields or with inconsistent shape/size arity
    #[error("Malformed obstacle descriptor '{name}': {reason}")]
    MalformedObstacleDescriptor { name: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scene serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

impl FieldError {
    pub(crate) fn malformed(name: &str, reason: impl Into<String>) -> Self {
        FieldError::MalformedObstacleDescriptor {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for obstacle field operations
pub type FieldResult<T> = Result<T, FieldError>;
