//! Obstacle Pipeline Example
//!
//! Lays out random obstacles around the robot start, writes the scene to
//! `objects.json`, reads it back and prints the boundary point cloud as the
//! obstacle array of a DWA planner.
//!
//! Usage: cargo run --example obstacle_pipeline [config.toml] [seed]

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use obstacle_field::{BoundaryExtractor, FieldConfig, FieldResult, Scene, SceneBuilder};

const SCENE_FILE: &str = "objects.json";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("obstacle pipeline failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> FieldResult<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => FieldConfig::from_file(path)?,
        None => FieldConfig::default(),
    };
    let mut rng = match args.next().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Obstacle placement start!!");
    let placement = config.placement.place(&mut rng)?;
    let scene = SceneBuilder::new(&config.placement).build(&placement, &mut rng);
    scene.save(SCENE_FILE)?;
    println!("Scene with {} objects saved to: {}", scene.objects.len(), SCENE_FILE);

    let scene = Scene::load(SCENE_FILE)?;
    let extractor = BoundaryExtractor::new(config.extractor.clone());
    let cloud = extractor.extract(&scene)?;

    let rows: Vec<String> = cloud
        .points()
        .iter()
        .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
        .collect();
    println!("let ob = vec![");
    for row in &rows {
        println!("    {},", row);
    }
    println!("];");

    if let Some(goal) = scene.goal() {
        println!("let goal = ({:.1}, {:.1});", goal.x, goal.y);
    }
    println!("{} obstacle points from {} obstacles", cloud.len(), cloud.obstacle_count());
    Ok(())
}
