use std::{error::Error, path::PathBuf, time::Instant};

use clap::Parser;
use selection_paths::{
    build_graph,
    graphs::{graph_functions::adjacency_listing, read_edges_from_fmi_file},
    search::shortest_paths,
    GraphLayout,
};
use tracing_subscriber::EnvFilter;

/// Prints the shortest distance from a source vertex to every vertex
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in .fmi format
    #[arg(short, long)]
    graph: PathBuf,
    /// Vertex to measure distances from
    #[arg(short, long, default_value_t = 0)]
    source: u32,
    /// Insert every edge in both directions
    #[arg(short, long)]
    undirected: bool,
    #[arg(short, long, value_enum, default_value_t = GraphLayout::VecVec)]
    layout: GraphLayout,
    /// Print the adjacency lists before searching
    #[arg(short, long)]
    print_graph: bool,
    /// Print the distance table as json
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let start = Instant::now();
    let edge_list = read_edges_from_fmi_file(&args.graph)?;
    let graph = build_graph(&edge_list, !args.undirected, args.layout)?;
    tracing::info!(elapsed = ?start.elapsed(), "loaded graph");

    if args.print_graph {
        println!("{}", adjacency_listing(graph.as_ref()));
    }

    let start = Instant::now();
    let distances = shortest_paths(graph.as_ref(), args.source)?;
    tracing::info!(
        elapsed = ?start.elapsed(),
        reachable = distances.number_of_reachable(),
        "searched graph"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&distances)?);
    } else {
        println!("{}", distances);
    }

    Ok(())
}
