use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use tube_planner::directions::Directions;
use tube_planner::graph::TransitGraph;
use tube_planner::logging::init_logger;
use tube_planner::network::london_network;
use tube_planner::planner::Planner;

/// Find the fastest trip between two London stations.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Station to begin the journey at, e.g. "Queen's Park"
    start: String,
    /// Station to reach, e.g. "Bond Street"
    destination: String,
}

fn main() -> ExitCode {
    init_logger();
    let args = CliArgs::parse();

    // The network is compiled in, so a failure here is a data bug
    let graph = match london_network().and_then(|network| TransitGraph::from_network(&network)) {
        Ok(graph) => graph,
        Err(e) => {
            error!(error = %e, "embedded network is invalid");
            eprintln!("ERROR: invalid network data: {e}");
            return ExitCode::FAILURE;
        }
    };

    let planner = Planner::new(&graph);
    match planner.find_shortest_path(&args.start, &args.destination) {
        Ok(route) => {
            print!("{}", Directions::new(route.as_ref()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
