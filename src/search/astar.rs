use grid_util::point::Point;
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::traversal::FxIndexSet;
use crate::{
    grid::Grid,
    search::{reconstruct_path, GridSearch, SearchOutcome},
    Score, EDGE_COST, INFINITE_SCORE,
};

struct SmallestCostHolder {
    estimated_cost: Score,
    order: usize,
    position: Point,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost && self.order == other.order
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Orders per estimated cost first, ties go to the entry that joined the open set first
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.order.cmp(&self.order),
            s => s,
        }
    }
}

/// A* search using the Manhattan distance to the end as heuristic, which is consistent on a
/// uniform-cost 4-grid: the first time the end is selected, its path is optimal.
///
/// The open set is a binary heap with lazy deletion. An improved cell is pushed again with its new
/// f score and the outdated entry is dropped when it surfaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSearch;

impl GridSearch for AstarSearch {
    fn search(&self, grid: &mut Grid, start: Point, end: Point) -> SearchOutcome {
        for node in grid.nodes_mut() {
            node.is_visited = false;
            node.is_path = false;
            node.previous = None;
            node.g_score = INFINITE_SCORE;
            node.h_score = node.position.manhattan_distance(&end);
            node.f_score = INFINITE_SCORE;
        }
        let Some(start_node) = grid.node_at_mut(start) else {
            return SearchOutcome::default();
        };
        start_node.g_score = 0;
        start_node.f_score = start_node.h_score;

        let mut to_see = BinaryHeap::new();
        let mut order = 0;
        to_see.push(SmallestCostHolder {
            estimated_cost: start_node.f_score,
            order,
            position: start,
        });
        let mut closed: FxIndexSet<Point> = FxIndexSet::default();

        while let Some(SmallestCostHolder {
            estimated_cost,
            position: current,
            ..
        }) = to_see.pop()
        {
            if closed.contains(&current) {
                continue;
            }
            let current_g = match grid.node_at_mut(current) {
                // A cheaper route was found after this entry was pushed
                Some(node) if node.f_score != estimated_cost => continue,
                Some(node) => {
                    node.is_visited = true;
                    node.g_score
                }
                None => continue,
            };
            closed.insert(current);
            if current == end {
                let path = reconstruct_path(grid, end);
                return SearchOutcome {
                    visited: closed.into_iter().collect(),
                    path,
                };
            }
            for neighbour in grid.neighbours(&current) {
                if closed.contains(&neighbour) {
                    continue;
                }
                let tentative_g = current_g + EDGE_COST;
                let Some(node) = grid.node_at_mut(neighbour) else {
                    continue;
                };
                if tentative_g >= node.g_score {
                    continue;
                }
                node.previous = Some(current);
                node.g_score = tentative_g;
                node.f_score = tentative_g + node.h_score;
                order += 1;
                to_see.push(SmallestCostHolder {
                    estimated_cost: node.f_score,
                    order,
                    position: neighbour,
                });
            }
        }
        debug!("Open set exhausted without reaching {}", end);
        SearchOutcome {
            visited: closed.into_iter().collect(),
            path: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::bfs::BreadthFirstSearch;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let mut grid = Grid::new(1, 1).unwrap();
        let start = Point::new(0, 0);
        let outcome = AstarSearch.search(&mut grid, start, start);
        assert_eq!(outcome.visited, vec![start]);
        assert_eq!(outcome.path, vec![start]);
    }

    /// Asserts that the optimal 4 step solution is found.
    #[test]
    fn solve_simple_problem() {
        // |S  |
        // | # |
        // |  G|
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_wall(1, 1, true).unwrap();
        let outcome = AstarSearch.search(&mut grid, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(outcome.path.len(), 5);
    }

    #[test]
    fn records_scores() {
        let mut grid = Grid::new(5, 5).unwrap();
        let start = grid.start_node().unwrap().position;
        let end = grid.end_node().unwrap().position;
        let outcome = AstarSearch.search(&mut grid, start, end);
        assert_eq!(outcome.path, vec![start, Point::new(2, 2), end]);
        let start_node = grid.node_at(start).unwrap();
        assert_eq!(start_node.g_score, 0);
        assert_eq!(start_node.h_score, 2);
        assert_eq!(start_node.f_score, 2);
        let end_node = grid.node_at(end).unwrap();
        assert_eq!(end_node.g_score, 2);
        assert_eq!(end_node.f_score, 2);
        // Straight line with an exact heuristic: nothing off the path gets settled
        assert_eq!(outcome.visited, outcome.path);
    }

    #[test]
    fn test_complex() {
        let mut grid = Grid::new(10, 10).unwrap();
        for (row, col) in [(1, 1), (0, 5), (5, 0), (8, 8)] {
            grid.set_wall(row, col, true).unwrap();
        }
        let start = Point::new(0, 0);
        let end = Point::new(7, 7);
        let astar = AstarSearch.search(&mut grid, start, end);
        let bfs = BreadthFirstSearch.search(&mut grid, start, end);
        assert_eq!(astar.path_cost(), Some(14));
        assert_eq!(astar.path_cost(), bfs.path_cost());
        assert!(astar.visited.len() <= bfs.visited.len());
    }

    #[test]
    fn unreachable_end_exhausts_component() {
        let mut grid = Grid::new(3, 4).unwrap();
        // Start at (1, 1), end at (1, 3); wall off column 2
        for row in 0..3 {
            grid.set_wall(row, 2, true).unwrap();
        }
        let start = grid.start_node().unwrap().position;
        let end = grid.end_node().unwrap().position;
        let outcome = AstarSearch.search(&mut grid, start, end);
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.visited.len(), 6);
        assert!(!outcome.visited.contains(&end));
    }
}
