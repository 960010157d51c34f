//! Scene description shared by scene authoring and point cloud extraction
//!
//! Only the fields the two halves agree on are modelled: object name,
//! 3D position, geom type, geom size and the cosmetic mass/colour values the
//! simulator wants. Sizes follow the simulator convention: a `box` has three
//! half-sizes, a `cylinder` has radius and half-height.
//!
//! Every field may be absent in JSON; a missing name, position or geom is
//! reported as a malformed obstacle when the object is turned into one.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::boundary::{ObstacleDescriptor, ObstacleShape};
use crate::common::{FieldError, FieldResult, HalfExtent, ObstacleSource, Point2D};

/// Name of the object marking the goal; never turned into an obstacle
pub const GOAL_NAME: &str = "goal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeomKind {
    Box,
    Cylinder,
}

impl GeomKind {
    /// Number of size values the simulator expects for this geom
    pub fn size_arity(&self) -> usize {
        match self {
            GeomKind::Box => 3,
            GeomKind::Cylinder => 2,
        }
    }
}

/// One body in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: Vec<f64>,
    pub geom: Option<GeomKind>,
    #[serde(default)]
    pub size: Vec<f64>,
    #[serde(default)]
    pub mass: f64,
    #[serde(default)]
    pub rgba: [f64; 4],
}

impl SceneObject {
    pub fn is_goal(&self) -> bool {
        self.name == GOAL_NAME
    }

    /// Planar obstacle described by this object
    pub fn to_descriptor(&self) -> FieldResult<ObstacleDescriptor> {
        if self.name.is_empty() {
            return Err(FieldError::malformed("<unnamed>", "missing name"));
        }
        if self.position.len() != 3 {
            return Err(FieldError::malformed(
                &self.name,
                format!("position needs 3 values, got {}", self.position.len()),
            ));
        }
        let geom = self
            .geom
            .ok_or_else(|| FieldError::malformed(&self.name, "missing geom type"))?;
        if self.size.len() != geom.size_arity() {
            return Err(FieldError::malformed(
                &self.name,
                format!(
                    "{:?} size needs {} values, got {}",
                    geom,
                    geom.size_arity(),
                    self.size.len()
                ),
            ));
        }

        let center = Point2D::new(self.position[0], self.position[1]);
        let shape = match geom {
            GeomKind::Box => ObstacleShape::Rectangle {
                half_extent: HalfExtent::new(self.size[0], self.size[1]),
            },
            GeomKind::Cylinder => ObstacleShape::Circle { radius: self.size[0] },
        };
        Ok(ObstacleDescriptor::new(center, shape)?.with_name(self.name.clone()))
    }
}

/// A whole scene: obstacles plus the goal marker
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub model: String,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new(model: impl Into<String>) -> Self {
        Self { model: model.into(), objects: Vec::new() }
    }

    /// Position of the goal marker, if the scene has one
    pub fn goal(&self) -> Option<Point2D> {
        self.objects
            .iter()
            .find(|o| o.is_goal())
            .filter(|o| o.position.len() >= 2)
            .map(|o| Point2D::new(o.position[0], o.position[1]))
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| !o.is_goal())
    }

    pub fn to_json(&self) -> FieldResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> FieldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> FieldResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> FieldResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl ObstacleSource for Scene {
    fn obstacle_descriptors(&self) -> FieldResult<Vec<ObstacleDescriptor>> {
        let descriptors = self
            .obstacles()
            .map(SceneObject::to_descriptor)
            .collect::<FieldResult<Vec<_>>>()?;
        debug!(model = %self.model, obstacles = descriptors.len(), "scene obstacles parsed");
        Ok(descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(name: &str, geom: Option<GeomKind>, position: Vec<f64>, size: Vec<f64>) -> SceneObject {
        SceneObject { name: name.to_string(), position, geom, size, mass: 1.0, rgba: [0.5, 0.5, 0.5, 1.0] }
    }

    fn sample_scene() -> Scene {
        let mut scene = Scene::new("objects");
        scene.objects.push(object("object1", Some(GeomKind::Box), vec![3.0, -3.0, 0.6], vec![1.0, 1.0, 0.6]));
        scene.objects.push(object("object2", Some(GeomKind::Cylinder), vec![-3.0, 0.0, 0.5], vec![0.75, 0.5]));
        scene.objects.push(object(GOAL_NAME, Some(GeomKind::Box), vec![10.0, 10.0, 2.5], vec![0.5, 0.5, 0.5]));
        scene
    }

    #[test]
    fn test_goal_is_skipped() {
        let scene = sample_scene();
        let descriptors = scene.obstacle_descriptors().unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].name(), Some("object1"));
        assert_eq!(scene.goal(), Some(Point2D::new(10.0, 10.0)));
    }

    #[test]
    fn test_shapes_follow_geom() {
        let descriptors = sample_scene().obstacle_descriptors().unwrap();
        assert_eq!(
            descriptors[0].shape(),
            ObstacleShape::Rectangle { half_extent: HalfExtent::new(1.0, 1.0) }
        );
        assert_eq!(descriptors[1].shape(), ObstacleShape::Circle { radius: 0.75 });
        assert_eq!(descriptors[1].center(), Point2D::new(-3.0, 0.0));
    }

    #[test]
    fn test_size_arity_is_checked() {
        let mut scene = sample_scene();
        scene.objects[0].size = vec![1.0, 1.0];
        let err = scene.obstacle_descriptors().unwrap_err();
        assert!(matches!(err, FieldError::MalformedObstacleDescriptor { ref name, .. } if name == "object1"));

        let mut scene = sample_scene();
        scene.objects[1].size = vec![0.75, 0.5, 0.5];
        assert!(matches!(
            scene.obstacle_descriptors(),
            Err(FieldError::MalformedObstacleDescriptor { .. })
        ));
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let mut scene = sample_scene();
        scene.objects[1].geom = None;
        assert!(matches!(
            scene.obstacle_descriptors(),
            Err(FieldError::MalformedObstacleDescriptor { .. })
        ));

        let mut scene = sample_scene();
        scene.objects[0].position = vec![3.0];
        assert!(matches!(
            scene.obstacle_descriptors(),
            Err(FieldError::MalformedObstacleDescriptor { .. })
        ));
    }

    #[test]
    fn test_non_positive_size_is_invalid() {
        let mut scene = sample_scene();
        scene.objects[0].size = vec![0.0, 1.0, 0.6];
        assert!(matches!(scene.obstacle_descriptors(), Err(FieldError::InvalidParameter(_))));
    }

    #[test]
    fn test_json_uses_lowercase_geom() {
        let json = sample_scene().to_json().unwrap();
        assert!(json.contains("\"box\""));
        assert!(json.contains("\"cylinder\""));
        assert_eq!(Scene::from_json(&json).unwrap(), sample_scene());
    }

    #[test]
    fn test_parse_handwritten_scene() {
        let json = r#"{
            "model": "objects",
            "objects": [
                { "name": "object1", "position": [0.0, 3.0, 0.2], "geom": "box", "size": [1.0, 1.0, 0.2] },
                { "name": "goal", "position": [10.0, 10.0, 2.5], "geom": "box", "size": [0.5, 0.5, 0.5] }
            ]
        }"#;
        let scene = Scene::from_json(json).unwrap();
        let descriptors = scene.obstacle_descriptors().unwrap();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].center(), Point2D::new(0.0, 3.0));

        assert!(matches!(Scene::from_json("{ \"model\": 1 }"), Err(FieldError::SerializationError(_))));
    }

    #[test]
    fn test_absent_keys_reach_descriptor_checks() {
        let json = r#"{
            "model": "objects",
            "objects": [
                { "name": "object1", "geom": "box", "size": [1.0, 1.0, 0.2] }
            ]
        }"#;
        let scene = Scene::from_json(json).unwrap();
        let err = scene.obstacle_descriptors().unwrap_err();
        assert!(matches!(err, FieldError::MalformedObstacleDescriptor { ref name, .. } if name == "object1"));

        let json = r#"{
            "model": "objects",
            "objects": [
                { "position": [0.0, 3.0, 0.2], "geom": "box", "size": [1.0, 1.0, 0.2] }
            ]
        }"#;
        let scene = Scene::from_json(json).unwrap();
        assert!(matches!(
            scene.obstacle_descriptors(),
            Err(FieldError::MalformedObstacleDescriptor { .. })
        ));

        let json = r#"{ "model": "objects", "objects": [ { "name": "object1", "position": [0.0, 3.0, 0.2] } ] }"#;
        assert!(matches!(
            Scene::from_json(json).unwrap().obstacle_descriptors(),
            Err(FieldError::MalformedObstacleDescriptor { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Scene::load("/nonexistent/dir/objects.json");
        assert!(matches!(result, Err(FieldError::IoError(_))));
    }
}
