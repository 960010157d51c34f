//! Scene authoring from a placement
//!
//! Every obstacle becomes a box whose planar half-size comes from the
//! placement config. Height, mass and colour are drawn at random with the
//! caller's rng and rounded to one decimal, so a seeded rng reproduces the
//! whole scene.

use rand::Rng;
use tracing::info;

use crate::placement::{Placement, PlacementConfig};
use crate::scene::{GeomKind, Scene, SceneObject, GOAL_NAME};
use crate::utils::round_to_decimals;

const MODEL_NAME: &str = "objects";
/// Height, half-size and colour of the goal marker
const GOAL_HEIGHT: f64 = 2.5;
const GOAL_HALF_SIZE: f64 = 0.5;
const GOAL_RGBA: [f64; 4] = [0.1, 0.9, 0.1, 0.1];
/// Heights stay clear of zero
const MIN_HEIGHT: f64 = 0.1;

/// Builds a [`Scene`] out of sampled obstacle positions
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    half_size: f64,
}

impl SceneBuilder {
    pub fn new(config: &PlacementConfig) -> Self {
        Self { half_size: config.obstacle_half_size() }
    }

    pub fn build<R: Rng + ?Sized>(&self, placement: &Placement, rng: &mut R) -> Scene {
        let mut scene = Scene::new(MODEL_NAME);
        for (i, center) in placement.obstacles.iter().enumerate() {
            let height = round_tenth(rng) + MIN_HEIGHT;
            let mass = 10.0 * round_tenth(rng) + 1.0;
            let rgba = [round_tenth(rng), round_tenth(rng), round_tenth(rng), 1.0];
            scene.objects.push(SceneObject {
                name: format!("object{}", i + 1),
                position: vec![center.x, center.y, height],
                geom: Some(GeomKind::Box),
                size: vec![self.half_size, self.half_size, height],
                mass,
                rgba,
            });
        }

        let goal = placement.goal;
        scene.objects.push(SceneObject {
            name: GOAL_NAME.to_string(),
            position: vec![goal.x, goal.y, GOAL_HEIGHT],
            geom: Some(GeomKind::Box),
            size: vec![GOAL_HALF_SIZE; 3],
            mass: 10.0 * round_tenth(rng) + 1.0,
            rgba: GOAL_RGBA,
        });

        info!(obstacles = placement.obstacles.len(), "scene built");
        scene
    }
}

fn round_tenth<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    round_to_decimals(rng.gen_range(0.0..=1.0), 1)
}
