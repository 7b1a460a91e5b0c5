//! Plans an agent through an L-shaped corridor for a few radii and walks the
//! result at a fixed step.
//!
//! Run with `RUST_LOG=debug cargo run --example corridor_walk` to see the
//! search and smoothing diagnostics.

use log::info;

use ddls_nav::config::NavConfig;
use ddls_nav::geometry::{Point2, path_length};
use ddls_nav::mesh::Mesh;
use ddls_nav::navigation::{Agent, LinearPathSampler, PathFinder};

fn l_corridor() -> Result<Mesh<f64>, ddls_nav::MeshError> {
    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(8.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 2.0),
        Point2::new(10.0, 10.0),
        Point2::new(8.0, 10.0),
        Point2::new(8.0, 2.0),
        Point2::new(0.0, 2.0),
    ];
    let triangles = [
        [0, 1, 6],
        [0, 6, 7],
        [1, 2, 3],
        [1, 3, 6],
        [6, 3, 4],
        [6, 4, 5],
    ];
    Mesh::from_triangles(&points, &triangles, &[])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => NavConfig::load(path.as_ref())?,
        None => NavConfig::default(),
    };
    config.validate()?;

    let mut mesh = l_corridor()?;
    mesh.apply_config(&config);
    mesh.validate()?;

    let start = Point2::new(1.0, 1.0);
    let goal = Point2::new(9.0, 9.0);

    for radius in [0.0, 0.25, 0.5, 0.9, 1.1] {
        let mut finder = PathFinder::new(&mesh, Agent::new(start, radius), &config);
        let path = finder.find_path(goal);
        if path.is_empty() {
            info!("radius {radius:.2}: no path");
            continue;
        }

        info!(
            "radius {radius:.2}: {} waypoints, length {:.3}",
            path.len(),
            path_length(&path)
        );

        let mut sampler = LinearPathSampler::new(path, 1.0);
        let mut agent = *finder.agent();
        while sampler.advance() {
            sampler.place(&mut agent);
            info!("  step {:>2}: ({:.3}, {:.3})", sampler.count(), agent.position.x, agent.position.y);
        }
        finder.set_position(agent.position);
    }

    Ok(())
}
