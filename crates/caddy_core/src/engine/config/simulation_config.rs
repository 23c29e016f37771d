//! Monte Carlo simulation parameters

use serde::{Deserialize, Serialize};

use crate::models::Surface;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Draws per candidate (default: 400)
    pub n_sim: usize,
    /// Recommendations returned (default: 5)
    pub top_n: usize,
    /// Fixed seed for reproducible output; `None` draws fresh entropy
    pub seed: Option<u64>,
    /// Candidate window: `min_ratio × target <= total`
    pub window_min_ratio: f64,
    /// Candidate window: `total <= max_ratio × target`
    pub window_max_ratio: f64,
    /// Remaining distance treated as "on the green" when no geometry is known
    pub green_radius_yards: f64,
    /// Radius used for the closeness probability
    pub close_radius_yards: f64,
    /// Surface for outcomes that miss the green without finding trouble
    pub miss_surface: Surface,
    /// Above this many candidates the evaluation runs on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_sim: 400,
            top_n: 5,
            seed: None,
            window_min_ratio: 0.5,
            window_max_ratio: 1.5,
            green_radius_yards: 10.0,
            close_radius_yards: 5.0,
            miss_surface: Surface::Fairway,
            parallel_threshold: 8,
        }
    }
}
