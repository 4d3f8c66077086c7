//! Settings of a visualization session. Everything has a default, so a partial serialized config
//! (or none at all) is enough to get going.

use crate::search::Algorithm;
use crate::{DEFAULT_COLS, DEFAULT_ROWS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub rows: usize,
    pub cols: usize,
    /// Pause before each settled cell is revealed.
    pub visit_delay_ms: u64,
    /// Pause before each path cell is revealed, after all settled cells are shown.
    pub path_delay_ms: u64,
    pub algorithm: Algorithm,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            visit_delay_ms: 10,
            path_delay_ms: 50,
            algorithm: Algorithm::default(),
        }
    }
}

impl VisualizerConfig {
    pub fn visit_delay(&self) -> Duration {
        Duration::from_millis(self.visit_delay_ms)
    }
    pub fn path_delay(&self) -> Duration {
        Duration::from_millis(self.path_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: VisualizerConfig =
            serde_json::from_str(r#"{ "rows": 10, "algorithm": "best-first" }"#).unwrap();
        assert_eq!(config.rows, 10);
        assert_eq!(config.cols, DEFAULT_COLS);
        assert_eq!(config.algorithm, Algorithm::BestFirst);
        assert_eq!(config.visit_delay(), Duration::from_millis(10));
        assert_eq!(config.path_delay(), Duration::from_millis(50));
    }
}
