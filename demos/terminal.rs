use pathfinding_visualizer::{Algorithm, ThreadPacer, Visualizer, VisualizerConfig};
use std::env;
use std::process::ExitCode;

// Animates a search on the default 25x50 grid in the terminal. The algorithm can be given as the
// first argument (dfs, bfs or astar):
//
//     cargo run --example terminal -- astar
//
// where in the output
// - S marks the start and E the end
// - # marks a wall
// - o marks a settled cell and * a path cell

fn main() -> ExitCode {
    env_logger::init();
    let algorithm = match env::args().nth(1).map(|arg| arg.parse::<Algorithm>()) {
        Some(Ok(algorithm)) => algorithm,
        Some(Err(e)) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
        None => Algorithm::default(),
    };
    let config = VisualizerConfig {
        algorithm,
        ..VisualizerConfig::default()
    };
    let mut visualizer = match Visualizer::new(config) {
        Ok(visualizer) => visualizer,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    // A wall between start and end with openings at the top and bottom
    for row in 2..23 {
        if let Err(e) = visualizer.toggle_wall(row, 25) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }
    let result = visualizer.visualize(&mut ThreadPacer, |grid, _| {
        print!("\x1b[2J\x1b[H{}", grid);
    });
    match result {
        Ok(summary) => {
            println!(
                "{}: {} cells settled, path of {} cells",
                summary.algorithm, summary.visited, summary.path
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
