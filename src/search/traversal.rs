use super::{reconstruct_path, SearchOutcome};
use crate::grid::Grid;
use fxhash::{FxBuildHasher, FxHashSet};
use grid_util::point::Point;
use indexmap::IndexSet;
use log::warn;
use std::collections::VecDeque;

pub(crate) type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// The collection of discovered but not yet settled cells of an uninformed traversal.
pub(crate) trait Frontier: Default {
    /// Whether pushing an already discovered cell again moves its back-reference to the cell
    /// pushing it. Stacks need this so that the path follows the order in which cells are popped,
    /// queues must keep the first link to stay shortest.
    const RELINK: bool;

    fn push(&mut self, point: Point);
    fn pop(&mut self) -> Option<Point>;
}

#[derive(Default)]
pub(crate) struct Stack(Vec<Point>);

impl Frontier for Stack {
    const RELINK: bool = true;

    fn push(&mut self, point: Point) {
        self.0.push(point);
    }
    fn pop(&mut self) -> Option<Point> {
        self.0.pop()
    }
}

#[derive(Default)]
pub(crate) struct Queue(VecDeque<Point>);

impl Frontier for Queue {
    const RELINK: bool = false;

    fn push(&mut self, point: Point) {
        self.0.push_back(point);
    }
    fn pop(&mut self) -> Option<Point> {
        self.0.pop_front()
    }
}

/// Shared control flow of the depth-first and breadth-first searches. The settled set keeps
/// insertion order and therefore doubles as the visitation sequence.
pub(crate) fn traverse<F: Frontier>(grid: &mut Grid, start: Point, end: Point) -> SearchOutcome {
    for node in grid.nodes_mut() {
        node.is_visited = false;
        node.is_path = false;
        node.previous = None;
    }
    if !grid.point_in_bounds(start) {
        warn!("Start {} lies outside the grid", start);
        return SearchOutcome::default();
    }

    let mut frontier = F::default();
    frontier.push(start);
    let mut settled: FxIndexSet<Point> = FxIndexSet::default();
    let mut discovered: FxHashSet<Point> = FxHashSet::default();
    discovered.insert(start);

    while let Some(current) = frontier.pop() {
        if !settled.insert(current) {
            continue;
        }
        if let Some(node) = grid.node_at_mut(current) {
            node.is_visited = true;
        }
        if current == end {
            let path = reconstruct_path(grid, end);
            return SearchOutcome {
                visited: settled.into_iter().collect(),
                path,
            };
        }
        for neighbour in grid.neighbours(&current) {
            if settled.contains(&neighbour) {
                continue;
            }
            if !discovered.insert(neighbour) && !F::RELINK {
                continue;
            }
            if let Some(node) = grid.node_at_mut(neighbour) {
                node.previous = Some(current);
            }
            frontier.push(neighbour);
        }
    }
    SearchOutcome {
        visited: settled.into_iter().collect(),
        path: Vec::new(),
    }
}
