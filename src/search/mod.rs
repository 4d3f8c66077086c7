use crate::grid::Grid;
use core::fmt;
use core::str::FromStr;
use grid_util::point::Point;
use log::info;
use serde::{Deserialize, Serialize};

pub mod astar;
pub mod bfs;
pub mod dfs;
mod traversal;

/// Result of a single search run. `visited` holds the cells in the order they were settled, which
/// is also the order in which they are animated. `path` runs from start to end and is empty if the
/// end could not be reached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub visited: Vec<Point>,
    pub path: Vec<Point>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
    /// Number of steps along the path, `None` if no path was found.
    pub fn path_cost(&self) -> Option<usize> {
        if self.found() {
            Some(self.path.len() - 1)
        } else {
            None
        }
    }
}

pub trait GridSearch {
    /// Searches from `start` to `end`, mutating the per-node search fields of `grid` in place.
    /// The grid state after the call reflects the finished search.
    fn search(&self, grid: &mut Grid, start: Point, end: Point) -> SearchOutcome;
}

/// The searches a visualization run can be started with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    DepthFirst,
    #[default]
    BreadthFirst,
    BestFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::BestFirst,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::BestFirst => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::DepthFirst => "depth-first search",
            Algorithm::BreadthFirst => "breadth-first search",
            Algorithm::BestFirst => "A* search",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown algorithm '{0}', expected one of dfs, bfs, astar")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "astar" | "a*" | "best-first" => Ok(Algorithm::BestFirst),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Runs the given algorithm on `grid`.
pub fn run_search(
    algorithm: Algorithm,
    grid: &mut Grid,
    start: Point,
    end: Point,
) -> SearchOutcome {
    let outcome = match algorithm {
        Algorithm::DepthFirst => dfs::DepthFirstSearch.search(grid, start, end),
        Algorithm::BreadthFirst => bfs::BreadthFirstSearch.search(grid, start, end),
        Algorithm::BestFirst => astar::AstarSearch.search(grid, start, end),
    };
    info!(
        "{} from {} to {} settled {} cells, path of {} cells",
        algorithm,
        start,
        end,
        outcome.visited.len(),
        outcome.path.len()
    );
    outcome
}

/// Follows the `previous` links back from `end` and returns the path in start to end order.
pub(crate) fn reconstruct_path(grid: &Grid, end: Point) -> Vec<Point> {
    let mut path: Vec<Point> = itertools::unfold(Some(end), |current| {
        let point = (*current)?;
        *current = grid.node_at(point).and_then(|node| node.previous);
        Some(point)
    })
    // Chains are acyclic by construction, the bound only guards against a corrupted grid
    .take(grid.nodes().len())
    .collect();
    path.reverse();
    path
}
