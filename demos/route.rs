//! Shortest route between two cities on a road network.
//!
//! ```text
//! cargo run --example route -- data/usa.graph data/uscities.csv "Durham NC" "Seattle WA"
//! ```
//!
//! Set `RUST_LOG=roadnet=debug` to see what the loader does.

use std::{error::Error, fs::File, time::Instant};

use roadnet::{
    algo::is_connected,
    loader::{load_graph, read_cities},
    prelude::*,
    Haversine,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let [graph_path, cities_path, start_city, end_city] = args.as_slice() else {
        eprintln!("usage: route <graph file> <cities file> <start city> <end city>");
        std::process::exit(2);
    };

    let graph = load_graph(File::open(graph_path)?, Haversine)?;
    let cities = read_cities(File::open(cities_path)?)?;

    println!(
        "Loaded {} vertices, {} edges{}",
        graph.vertex_count(),
        graph.edge_count(),
        if is_connected(&graph) {
            ""
        } else {
            " (not connected)"
        }
    );

    let start_point = cities
        .get(start_city)
        .ok_or_else(|| format!("Starting location is invalid: {start_city}"))?;
    let end_point = cities
        .get(end_city)
        .ok_or_else(|| format!("Ending location is invalid: {end_city}"))?;

    let started = Instant::now();
    let start = graph.nearest_point(start_point)?;
    let end = graph.nearest_point(end_point)?;
    let route = graph.route(start, end)?;
    let distance = graph.route_distance(&route);
    let elapsed = started.elapsed();

    println!(
        "Trip distance: {distance:.2} miles | Calculation time: {} ms",
        elapsed.as_millis()
    );
    println!("Nearest point to {start_city}: {start}");
    println!("Nearest point to {end_city}: {end}");

    for point in &route {
        match graph.vertex_of(*point).and_then(|v| graph.name(v)) {
            Some(name) => println!("  {point} {name}"),
            None => println!("  {point}"),
        }
    }

    Ok(())
}
