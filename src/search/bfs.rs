use grid_util::point::Point;

use super::traversal::{traverse, Queue};
use crate::{grid::Grid, search::GridSearch, search::SearchOutcome};

/// Breadth-first search with a first-in-first-out frontier. Cells are settled in rings of
/// increasing step distance from the start and each back-reference is fixed on first discovery,
/// so the returned path is a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSearch;

impl GridSearch for BreadthFirstSearch {
    fn search(&self, grid: &mut Grid, start: Point, end: Point) -> SearchOutcome {
        traverse::<Queue>(grid, start, end)
    }
}
