use crate::error::GridError;
use crate::node::Node;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::grid::{Grid as CellGrid, SimpleGrid};
use grid_util::point::Point;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [Grid] holds the rows × cols [Node]s of a visualization session in a [SimpleGrid] together
/// with a [UnionFind] structure over the open cells, used for cheap reachability queries. The
/// start node sits at `(rows / 2, cols / 4)` and the end node at `(rows / 2, 3 * cols / 4)`; both
/// are placed on creation and never move.
#[derive(Clone, Debug)]
pub struct Grid {
    nodes: SimpleGrid<Node>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// Creates a grid of open cells with the fixed start and end nodes. Zero-sized grids are
    /// rejected.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Grid::build(rows, cols))
    }

    fn build(rows: usize, cols: usize) -> Grid {
        let mut nodes: SimpleGrid<Node> = CellGrid::new(cols, rows, Node::new(0, 0));
        for row in 0..rows {
            for col in 0..cols {
                nodes.set(col, row, Node::new(row, col));
            }
        }
        let (start, end) = Grid::endpoint_positions(rows, cols);
        // Both points are in bounds for any non-empty grid
        let start_ix = nodes.get_ix_point(&start);
        let end_ix = nodes.get_ix_point(&end);
        nodes.values[start_ix].is_start = true;
        nodes.values[end_ix].is_end = true;
        let mut grid = Grid {
            nodes,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Positions of the start and end node for a grid of the given size.
    pub fn endpoint_positions(rows: usize, cols: usize) -> (Point, Point) {
        let row = (rows / 2) as i32;
        (
            Point::new((cols / 4) as i32, row),
            Point::new((3 * cols / 4) as i32, row),
        )
    }

    pub fn rows(&self) -> usize {
        self.nodes.height()
    }
    pub fn cols(&self) -> usize {
        self.nodes.width()
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes.values
    }
    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes.values
    }

    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.nodes.point_in_bounds(point)
    }
    fn ix_in_bounds(&self, point: Point) -> Option<usize> {
        if self.nodes.point_in_bounds(point) {
            Some(self.nodes.get_ix_point(&point))
        } else {
            None
        }
    }

    pub fn node(&self, row: usize, col: usize) -> Option<&Node> {
        if self.nodes.index_in_bounds(col, row) {
            Some(&self.nodes.values[self.nodes.get_ix(col, row)])
        } else {
            None
        }
    }
    pub fn node_at(&self, point: Point) -> Option<&Node> {
        self.ix_in_bounds(point).map(|ix| &self.nodes.values[ix])
    }
    pub(crate) fn node_at_mut(&mut self, point: Point) -> Option<&mut Node> {
        self.ix_in_bounds(point).map(move |ix| &mut self.nodes.values[ix])
    }

    pub fn start_node(&self) -> Option<&Node> {
        self.nodes.values.iter().find(|node| node.is_start)
    }
    pub fn end_node(&self) -> Option<&Node> {
        self.nodes.values.iter().find(|node| node.is_end)
    }

    pub fn is_wall(&self, point: Point) -> bool {
        self.node_at(point).map_or(false, |node| node.is_wall)
    }
    pub fn can_move_to(&self, point: Point) -> bool {
        self.point_in_bounds(point) && !self.is_wall(point)
    }

    /// The 4-connected neighbourhood of `point` in the order up, down, left, right, clipped to
    /// the grid and without walls.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        [
            Point::new(point.x, point.y - 1),
            Point::new(point.x, point.y + 1),
            Point::new(point.x - 1, point.y),
            Point::new(point.x + 1, point.y),
        ]
        .into_iter()
        .filter(|p| self.can_move_to(*p))
        .collect()
    }

    /// Flips the wall state of a cell. Start and end nodes are left untouched, in which case
    /// `false` is returned.
    pub fn toggle_wall(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let blocked = !self
            .node(row, col)
            .ok_or(GridError::OutOfBounds { row, col })?
            .is_wall;
        self.set_wall(row, col, blocked)
    }

    /// Sets the wall state of a cell. Joins newly connected components and flags the components
    /// as dirty if they are (potentially) broken apart. Returns whether the cell was changed.
    pub fn set_wall(&mut self, row: usize, col: usize, blocked: bool) -> Result<bool, GridError> {
        if !self.nodes.index_in_bounds(col, row) {
            return Err(GridError::OutOfBounds { row, col });
        }
        let mut node = self.nodes.get(col, row);
        if node.is_endpoint() {
            debug!("Ignoring wall change on endpoint {}", node.position);
            return Ok(false);
        }
        if node.is_wall == blocked {
            return Ok(false);
        }
        node.is_wall = blocked;
        self.nodes.set(col, row, node);
        if blocked {
            self.components_dirty = true;
        } else {
            let ix = self.nodes.get_ix(col, row);
            for n in self.neighbours(&node.position) {
                let n_ix = self.nodes.get_ix_point(&n);
                self.components.union(ix, n_ix);
            }
        }
        Ok(true)
    }

    /// Clears visitation, path and score fields of every node. Walls and endpoints stay.
    pub fn reset_search_state(&mut self) {
        for node in self.nodes.values.iter_mut() {
            node.reset_search_state();
        }
    }

    /// Clears only the display flags, keeping the search bookkeeping of the last run.
    pub(crate) fn clear_display_flags(&mut self) {
        for node in self.nodes.values.iter_mut() {
            node.is_visited = false;
            node.is_path = false;
        }
    }

    /// Replaces the grid by a fresh one of the same size, dropping all walls.
    pub fn reset_grid(&mut self) {
        let (rows, cols) = (self.rows(), self.cols());
        info!("Resetting {}x{} grid", rows, cols);
        *self = Grid::build(rows, cols);
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.ix_in_bounds(*point).map(|ix| self.components.find(ix))
    }

    /// Checks if `start` and `goal` are open cells on the same component, regenerating the
    /// components first if they are dirty.
    pub fn reachable(&mut self, start: &Point, goal: &Point) -> bool {
        self.update();
        if !self.can_move_to(*start) || !self.can_move_to(*goal) {
            return false;
        }
        let start_ix = self.nodes.get_ix_point(start);
        let goal_ix = self.nodes.get_ix_point(goal);
        self.components.equiv(start_ix, goal_ix)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open 4-neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let w = self.nodes.width;
        let h = self.nodes.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let point = Point::new(x, y);
                if self.is_wall(point) {
                    continue;
                }
                let parent_ix = self.nodes.get_ix_point(&point);
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.can_move_to(p) {
                        let ix = self.nodes.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.nodes.height {
            let line = (0..self.nodes.width)
                .map(|x| {
                    let node = self.nodes.get(x, y);
                    if node.is_start {
                        'S'
                    } else if node.is_end {
                        'E'
                    } else if node.is_wall {
                        '#'
                    } else if node.is_path {
                        '*'
                    } else if node.is_visited {
                        'o'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
