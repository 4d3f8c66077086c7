use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Cell ({row}, {col}) lies outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizerError {
    #[error("A visualization run is in progress")]
    RunInProgress,
    #[error("Grid has no start node")]
    MissingStart,
    #[error("Grid has no end node")]
    MissingEnd,
    #[error(transparent)]
    Grid(#[from] GridError),
}
