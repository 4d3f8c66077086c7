use grid_util::point::Point;

use super::traversal::{traverse, Stack};
use crate::{grid::Grid, search::GridSearch, search::SearchOutcome};

/// Depth-first search with a last-in-first-out frontier. Finds a path whenever one exists, but
/// not necessarily a short one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirstSearch;

impl GridSearch for DepthFirstSearch {
    fn search(&self, grid: &mut Grid, start: Point, end: Point) -> SearchOutcome {
        traverse::<Stack>(grid, start, end)
    }
}
