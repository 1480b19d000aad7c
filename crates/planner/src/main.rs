pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod profit;

use clap::Parser;
use tracing::{info, warn};

use route_solver_core::bellman_ford::BellmanFord;

/// Delivery route profit planner: finds a profit-maximizing delivery loop
/// over a road map by combining Bellman-Ford negative-cycle detection with
/// Dijkstra route stitching.
#[derive(Parser, Debug)]
#[command(name = "planner")]
struct Args {
    /// Vertices CSV path; overrides the configured location.
    #[arg(long)]
    vertices: Option<String>,

    /// Distances CSV path; overrides the configured location.
    #[arg(long)]
    distances: Option<String>,
}

fn main() {
    tracing_subscriber::fmt().init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), error::Error> {
    let args = Args::parse();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("{} Falling back to built-in defaults.", e);
            config::Config::default()
        }
    };

    let vertices_path = args.vertices.unwrap_or_else(|| config.data.vertices.clone());
    let distances_path = args
        .distances
        .unwrap_or_else(|| config.data.distances.clone());

    println!("=== Delivery Truck Route Optimization System ===");
    println!("Maximizing delivery profit by combining Bellman-Ford and Dijkstra");

    info!(vertices = %vertices_path, distances = %distances_path, "Constructing road map");
    let map = loader::load_or_demo(&vertices_path, &distances_path);
    println!("\nMap loaded with {} vertices.", map.len());

    match analysis::analyze(&BellmanFord, &map, &config)? {
        analysis::Outcome::ProfitableRoute(report) => analysis::print_report(&map, &report),
        analysis::Outcome::NoProfitableCycle => {
            println!("No profitable delivery cycles found!");
            if let Some(garage) = analysis::find_garage(&map) {
                analysis::print_distance_analysis(&map, garage);
            }
        }
    }

    Ok(())
}
