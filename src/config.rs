//! Top-level configuration loaded from TOML
//!
//! ```toml
//! [placement]
//! obstacle_count = 5
//! robot_diagonal = 1.0
//! goal = { x = 10.0, y = 10.0 }
//!
//! [extractor]
//! resolution = 5
//! circle_mode = "perimeter"
//! ```
//!
//! Every key is optional and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::boundary::ExtractorConfig;
use crate::common::FieldResult;
use crate::placement::PlacementConfig;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub placement: PlacementConfig,
    pub extractor: ExtractorConfig,
}

impl FieldConfig {
    pub fn from_toml_str(content: &str) -> FieldResult<Self> {
        let config: FieldConfig = toml::from_str(content)?;
        config.placement.validate()?;
        config.extractor.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> FieldResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::CircleMode;
    use crate::common::{FieldError, Point2D};

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = FieldConfig::from_toml_str("").unwrap();
        assert_eq!(config, FieldConfig::default());
        assert_eq!(config.extractor.resolution, 5);
        assert_eq!(config.placement.start, Some(Point2D::origin()));
    }

    #[test]
    fn test_partial_toml_overrides() {
        let content = r#"
            [placement]
            obstacle_count = 8
            goal = { x = 12.0, y = -4.0 }

            [extractor]
            decimals = 3
            circle_mode = "bounding_box"
        "#;
        let config = FieldConfig::from_toml_str(content).unwrap();
        assert_eq!(config.placement.obstacle_count, 8);
        assert_eq!(config.placement.goal, Point2D::new(12.0, -4.0));
        assert_eq!(config.placement.robot_diagonal, 1.0);
        assert_eq!(config.extractor.decimals, 3);
        assert_eq!(config.extractor.resolution, 5);
        assert_eq!(config.extractor.circle_mode, CircleMode::BoundingBox);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            FieldConfig::from_toml_str("[placement]\nobstacle_count = \"many\""),
            Err(FieldError::ConfigError(_))
        ));
        assert!(matches!(
            FieldConfig::from_toml_str("[placement]\nrobot_diagonal = -1.0"),
            Err(FieldError::InvalidParameter(_))
        ));
        assert!(matches!(
            FieldConfig::from_toml_str("[extractor]\ndecimals = 99"),
            Err(FieldError::InvalidParameter(_))
        ));
        assert!(matches!(
            FieldConfig::from_toml_str("[extractor]\nresolution = 1"),
            Err(FieldError::InvalidParameter(_))
        ));
    }
}
