//! # pathfinding_visualizer
//!
//! The core of an interactive grid pathfinding visualizer. A [Grid](grid::Grid) of
//! [Node](node::Node)s with a fixed start and end cell is painted with walls, after which one of
//! three searches is run over the 4-connected, uniform-cost grid:
//! [depth-first](search::dfs::DepthFirstSearch),
//! [breadth-first](search::bfs::BreadthFirstSearch) or
//! [A*](search::astar::AstarSearch) with a
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) heuristic.
//! Each search yields the order in which cells were settled and the reconstructed path, which the
//! [Visualizer](visualizer::Visualizer) then reveals one cell at a time at a fixed pace.
pub mod config;
pub mod error;
pub mod grid;
pub mod node;
pub mod search;
pub mod visualizer;

pub use config::VisualizerConfig;
pub use error::{GridError, VisualizerError};
pub use grid::Grid;
pub use node::Node;
pub use search::{run_search, Algorithm, GridSearch, SearchOutcome};
pub use visualizer::{NoDelay, Pacer, RevealEvent, RevealKind, RunSummary, ThreadPacer, Visualizer};

/// Cost bookkeeping type used for the g, h and f scores.
pub type Score = i32;
/// Value of a score that has not been reached yet. Larger than any real cost on a grid.
pub const INFINITE_SCORE: Score = Score::MAX;
/// Uniform cost of a single step between neighbouring cells.
pub const EDGE_COST: Score = 1;
/// A 4-neighbourhood never has more than this many cells.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Number of rows of a default session grid.
pub const DEFAULT_ROWS: usize = 25;
/// Number of columns of a default session grid.
pub const DEFAULT_COLS: usize = 50;
