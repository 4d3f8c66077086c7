use pathfinding_visualizer::{run_search, Algorithm, Grid};

// Runs every algorithm on a 5x5 grid where the end is walled in:
//  _____
// |     |
// |   # |
// | S#E#|
// |   # |
// |     |
//  _____
// No algorithm finds a path and each one settles all 20 cells reachable from the start.

fn main() {
    env_logger::init();
    let mut grid = Grid::new(5, 5).unwrap();
    for (row, col) in [(1, 3), (3, 3), (2, 2), (2, 4)] {
        grid.toggle_wall(row, col).unwrap();
    }
    let start = grid.start_node().unwrap().position;
    let end = grid.end_node().unwrap().position;
    for algorithm in Algorithm::ALL {
        let outcome = run_search(algorithm, &mut grid, start, end);
        println!("{}", grid);
        println!(
            "{}: settled {} cells, path {:?}",
            algorithm,
            outcome.visited.len(),
            outcome.path
        );
    }
}
