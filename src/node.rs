use grid_util::point::Point;

use crate::{Score, INFINITE_SCORE};

/// A single cell of the [Grid](crate::grid::Grid). The position doubles as the identity key of
/// the node: `x` is the column and `y` the row. The back-reference `previous` is stored as a
/// position as well, so path reconstruction walks coordinates instead of references.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub position: Point,
    pub is_start: bool,
    pub is_end: bool,
    pub is_wall: bool,
    pub is_visited: bool,
    pub is_path: bool,
    /// Kept for layout compatibility with presentation code, never read by the searches.
    pub distance: Score,
    pub g_score: Score,
    pub h_score: Score,
    pub f_score: Score,
    pub previous: Option<Point>,
}

impl Node {
    pub fn new(row: usize, col: usize) -> Node {
        Node {
            position: Point::new(col as i32, row as i32),
            is_start: false,
            is_end: false,
            is_wall: false,
            is_visited: false,
            is_path: false,
            distance: INFINITE_SCORE,
            g_score: INFINITE_SCORE,
            h_score: 0,
            f_score: INFINITE_SCORE,
            previous: None,
        }
    }
    pub fn row(&self) -> usize {
        self.position.y as usize
    }
    pub fn col(&self) -> usize {
        self.position.x as usize
    }
    /// Start and end nodes can never become walls.
    pub fn is_endpoint(&self) -> bool {
        self.is_start || self.is_end
    }
    /// Clears visitation, path and score bookkeeping, leaving walls and endpoints intact.
    pub fn reset_search_state(&mut self) {
        self.is_visited = false;
        self.is_path = false;
        self.distance = INFINITE_SCORE;
        self.g_score = INFINITE_SCORE;
        self.h_score = 0;
        self.f_score = INFINITE_SCORE;
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_has_infinite_costs() {
        let node = Node::new(3, 7);
        assert_eq!(node.row(), 3);
        assert_eq!(node.col(), 7);
        assert_eq!(node.g_score, INFINITE_SCORE);
        assert_eq!(node.f_score, INFINITE_SCORE);
        assert_eq!(node.h_score, 0);
        assert!(!node.is_wall && !node.is_endpoint());
    }

    #[test]
    fn reset_keeps_walls() {
        let mut node = Node::new(0, 0);
        node.is_wall = true;
        node.is_visited = true;
        node.g_score = 4;
        node.previous = Some(Point::new(1, 0));
        node.reset_search_state();
        assert!(node.is_wall);
        assert!(!node.is_visited);
        assert_eq!(node.g_score, INFINITE_SCORE);
        assert_eq!(node.previous, None);
    }
}
