//! Drives a visualization run: picks the algorithm, runs the search eagerly and then hands the
//! result back to the presentation side one cell at a time, paced by fixed delays. Settled cells
//! are always revealed before any path cell. While a run is playing back, every request that would
//! change the grid or the selected algorithm is rejected.

use crate::config::VisualizerConfig;
use crate::error::VisualizerError;
use crate::grid::Grid;
use crate::search::{run_search, Algorithm, SearchOutcome};
use grid_util::point::Point;
use log::{debug, info, warn};
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealKind {
    Visited,
    Path,
}

/// A single display update: set the flag named by `kind` on the cell at `position` after waiting
/// `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealEvent {
    pub position: Point,
    pub kind: RevealKind,
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub visited: usize,
    pub path: usize,
    /// Whether start and end share a connected component before the run.
    pub reachable: bool,
}

impl RunSummary {
    pub fn found(&self) -> bool {
        self.path > 0
    }
}

/// Suspension point between two reveals.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Blocks the current thread for the requested delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Plays back without waiting, for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self, _delay: Duration) {}
}

impl<F> Pacer for F
where
    F: FnMut(Duration),
{
    fn pause(&mut self, delay: Duration) {
        self(delay)
    }
}

#[derive(Clone, Debug)]
pub struct Visualizer {
    config: VisualizerConfig,
    grid: Grid,
    algorithm: Algorithm,
    is_visualizing: bool,
    pending: VecDeque<RevealEvent>,
    last_outcome: Option<SearchOutcome>,
}

impl Visualizer {
    pub fn new(config: VisualizerConfig) -> Result<Visualizer, VisualizerError> {
        let grid = Grid::new(config.rows, config.cols)?;
        Ok(Visualizer {
            algorithm: config.algorithm,
            config,
            grid,
            is_visualizing: false,
            pending: VecDeque::new(),
            last_outcome: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    pub fn is_visualizing(&self) -> bool {
        self.is_visualizing
    }
    /// Reveals still queued for the active run.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    fn ensure_idle(&self) -> Result<(), VisualizerError> {
        if self.is_visualizing {
            debug!("Rejecting request while a run is in progress");
            Err(VisualizerError::RunInProgress)
        } else {
            Ok(())
        }
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> Result<(), VisualizerError> {
        self.ensure_idle()?;
        self.algorithm = algorithm;
        Ok(())
    }

    /// Flips a wall; returns `false` if the cell is the start or end node.
    pub fn toggle_wall(&mut self, row: usize, col: usize) -> Result<bool, VisualizerError> {
        self.ensure_idle()?;
        Ok(self.grid.toggle_wall(row, col)?)
    }

    pub fn clear_path(&mut self) -> Result<(), VisualizerError> {
        self.ensure_idle()?;
        self.grid.reset_search_state();
        self.last_outcome = None;
        Ok(())
    }

    pub fn clear_grid(&mut self) -> Result<(), VisualizerError> {
        self.ensure_idle()?;
        self.grid.reset_grid();
        self.last_outcome = None;
        Ok(())
    }

    /// Runs the selected search and queues its reveals. The grid is left with the search
    /// bookkeeping of the run but without display flags, which are then set by
    /// [next_reveal](Self::next_reveal).
    pub fn start(&mut self) -> Result<RunSummary, VisualizerError> {
        self.ensure_idle()?;
        self.is_visualizing = true;
        let endpoints = match (self.grid.start_node(), self.grid.end_node()) {
            (Some(start), Some(end)) => Ok((start.position, end.position)),
            (None, _) => Err(VisualizerError::MissingStart),
            (_, None) => Err(VisualizerError::MissingEnd),
        };
        let (start, end) = match endpoints {
            Ok(endpoints) => endpoints,
            Err(e) => {
                warn!("Aborting run: {}", e);
                self.is_visualizing = false;
                return Err(e);
            }
        };

        self.grid.reset_search_state();
        let reachable = self.grid.reachable(&start, &end);
        if !reachable {
            info!("{} is not reachable from {}", end, start);
        }
        let outcome = run_search(self.algorithm, &mut self.grid, start, end);
        self.grid.clear_display_flags();

        let visit_delay = self.config.visit_delay();
        let path_delay = self.config.path_delay();
        self.pending.clear();
        self.pending
            .extend(outcome.visited.iter().map(|&position| RevealEvent {
                position,
                kind: RevealKind::Visited,
                delay: visit_delay,
            }));
        self.pending.extend(outcome.path.iter().map(|&position| RevealEvent {
            position,
            kind: RevealKind::Path,
            delay: path_delay,
        }));
        let summary = RunSummary {
            algorithm: self.algorithm,
            visited: outcome.visited.len(),
            path: outcome.path.len(),
            reachable,
        };
        self.last_outcome = Some(outcome);
        if self.pending.is_empty() {
            self.is_visualizing = false;
        }
        Ok(summary)
    }

    /// Applies the next queued reveal to the grid. The run ends with the last reveal.
    pub fn next_reveal(&mut self) -> Option<RevealEvent> {
        let event = self.pending.pop_front()?;
        if let Some(node) = self.grid.node_at_mut(event.position) {
            match event.kind {
                RevealKind::Visited => node.is_visited = true,
                RevealKind::Path => node.is_path = true,
            }
        }
        if self.pending.is_empty() {
            info!("Run of {} finished", self.algorithm);
            self.is_visualizing = false;
        }
        Some(event)
    }

    /// Plays back the queued reveals, pausing before each one. `on_reveal` sees the grid right
    /// after the reveal was applied. Returns the number of reveals played.
    pub fn animate<P, F>(&mut self, pacer: &mut P, mut on_reveal: F) -> usize
    where
        P: Pacer,
        F: FnMut(&Grid, &RevealEvent),
    {
        let mut played = 0;
        while let Some(delay) = self.pending.front().map(|event| event.delay) {
            pacer.pause(delay);
            if let Some(event) = self.next_reveal() {
                on_reveal(&self.grid, &event);
                played += 1;
            }
        }
        played
    }

    /// Starts a run and plays it back to completion.
    pub fn visualize<P, F>(
        &mut self,
        pacer: &mut P,
        on_reveal: F,
    ) -> Result<RunSummary, VisualizerError>
    where
        P: Pacer,
        F: FnMut(&Grid, &RevealEvent),
    {
        let summary = self.start()?;
        self.animate(pacer, on_reveal);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn small_config() -> VisualizerConfig {
        VisualizerConfig {
            rows: 5,
            cols: 5,
            ..VisualizerConfig::default()
        }
    }

    #[test]
    fn reveals_visited_before_path_with_their_delays() {
        let mut visualizer = Visualizer::new(small_config()).unwrap();
        let summary = visualizer.start().unwrap();
        assert!(visualizer.is_visualizing());
        assert_eq!(summary.algorithm, Algorithm::BreadthFirst);
        assert!(summary.found() && summary.reachable);
        assert!(visualizer.grid().nodes().iter().all(|n| !n.is_visited && !n.is_path));

        let mut delays = Vec::new();
        let mut kinds = Vec::new();
        let played = visualizer.animate(&mut |delay: Duration| delays.push(delay), |_, event| {
            kinds.push(event.kind)
        });
        assert_eq!(played, summary.visited + summary.path);
        assert!(!visualizer.is_visualizing());
        let first_path = kinds.iter().position(|k| *k == RevealKind::Path).unwrap();
        assert_eq!(first_path, summary.visited);
        assert!(kinds[first_path..].iter().all(|k| *k == RevealKind::Path));
        assert!(delays[..first_path]
            .iter()
            .all(|d| *d == Duration::from_millis(10)));
        assert!(delays[first_path..]
            .iter()
            .all(|d| *d == Duration::from_millis(50)));

        let path_cells = visualizer.grid().nodes().iter().filter(|n| n.is_path).count();
        assert_eq!(path_cells, 3);
    }

    #[test]
    fn rejects_changes_while_running() {
        let mut visualizer = Visualizer::new(small_config()).unwrap();
        visualizer.start().unwrap();
        let before = visualizer.grid().nodes().to_vec();
        assert_eq!(
            visualizer.toggle_wall(0, 0),
            Err(VisualizerError::RunInProgress)
        );
        assert_eq!(
            visualizer.select_algorithm(Algorithm::DepthFirst),
            Err(VisualizerError::RunInProgress)
        );
        assert_eq!(visualizer.clear_path(), Err(VisualizerError::RunInProgress));
        assert_eq!(visualizer.clear_grid(), Err(VisualizerError::RunInProgress));
        assert_eq!(visualizer.start(), Err(VisualizerError::RunInProgress));
        assert_eq!(visualizer.grid().nodes(), &before[..]);
        assert_eq!(visualizer.algorithm(), Algorithm::BreadthFirst);

        while visualizer.next_reveal().is_some() {}
        assert!(!visualizer.is_visualizing());
        assert_eq!(visualizer.toggle_wall(0, 0), Ok(true));
        assert_eq!(visualizer.select_algorithm(Algorithm::DepthFirst), Ok(()));
    }

    #[test]
    fn unreachable_end_reveals_no_path() {
        let mut visualizer = Visualizer::new(small_config()).unwrap();
        // Enclose the end node at (2, 3)
        for (row, col) in [(1, 3), (3, 3), (2, 2), (2, 4)] {
            visualizer.toggle_wall(row, col).unwrap();
        }
        let mut kinds = Vec::new();
        let summary = visualizer
            .visualize(&mut NoDelay, |_, event| kinds.push(event.kind))
            .unwrap();
        assert!(!summary.reachable && !summary.found());
        assert_eq!(kinds.len(), summary.visited);
        assert!(kinds.iter().all(|k| *k == RevealKind::Visited));
        assert_eq!(summary.visited, 25 - 4 - 1);
    }

    #[test]
    fn missing_endpoint_aborts_run() {
        let mut visualizer = Visualizer::new(small_config()).unwrap();
        for node in visualizer.grid.nodes_mut() {
            node.is_end = false;
        }
        assert_eq!(visualizer.start(), Err(VisualizerError::MissingEnd));
        assert!(!visualizer.is_visualizing());
        assert_eq!(visualizer.remaining(), 0);
        assert!(visualizer.last_outcome().is_none());
    }

    #[test]
    fn missing_start_aborts_run() {
        let mut visualizer = Visualizer::new(small_config()).unwrap();
        for node in visualizer.grid.nodes_mut() {
            node.is_start = false;
        }
        assert_eq!(visualizer.start(), Err(VisualizerError::MissingStart));
        assert!(!visualizer.is_visualizing());
        assert_eq!(visualizer.remaining(), 0);
        assert!(visualizer.last_outcome().is_none());
    }

    #[test]
    fn rerun_is_repeatable() {
        let mut visualizer = Visualizer::new(small_config()).unwrap();
        visualizer.select_algorithm(Algorithm::BestFirst).unwrap();
        visualizer.visualize(&mut NoDelay, |_, _| {}).unwrap();
        let first = visualizer.last_outcome().cloned();
        visualizer.visualize(&mut NoDelay, |_, _| {}).unwrap();
        assert_eq!(visualizer.last_outcome().cloned(), first);
        visualizer.clear_path().unwrap();
        assert!(visualizer.grid().nodes().iter().all(|n| !n.is_visited && !n.is_path));
    }

    #[test]
    fn clear_grid_drops_walls() {
        let mut visualizer = Visualizer::new(small_config()).unwrap();
        visualizer.toggle_wall(0, 0).unwrap();
        visualizer.clear_grid().unwrap();
        assert!(visualizer.grid().nodes().iter().all(|n| !n.is_wall));
    }

    #[test]
    fn rejects_invalid_dimensions() {
        let config = VisualizerConfig {
            rows: 0,
            ..VisualizerConfig::default()
        };
        assert!(matches!(
            Visualizer::new(config),
            Err(VisualizerError::Grid(_))
        ));
    }
}
