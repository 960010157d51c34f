//! Common types, traits, and error definitions for obstacle_field
//!
//! This module provides the foundational building blocks shared by the
//! placement, scene and boundary modules.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
