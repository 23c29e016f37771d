//! Hole-strategy baselines

use serde::{Deserialize, Serialize};

use crate::models::Club;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Average score baselines per par
    pub par3_baseline: f64,
    pub par4_baseline: f64,
    pub par5_baseline: f64,
    /// Full-swing clubs considered off a par-4/5 tee
    pub tee_clubs: Vec<Club>,
    /// Minimum approach left after a tee shot
    pub min_remaining_yards: f64,
    /// Preferred wedge yardage for a three-shot par 5
    pub layup_target_yards: f64,
    /// Longest second shot considered reachable
    pub go_for_it_max_yards: f64,
    /// Layup wins unless going for it is better by more than this
    pub layup_bias: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            par3_baseline: 3.1,
            par4_baseline: 4.2,
            par5_baseline: 5.2,
            tee_clubs: vec![
                Club::Driver,
                Club::ThreeWood,
                Club::ThreeHybrid,
                Club::FourIron,
                Club::FiveIron,
                Club::SixIron,
            ],
            min_remaining_yards: 10.0,
            layup_target_yards: 100.0,
            go_for_it_max_yards: 260.0,
            layup_bias: 0.05,
        }
    }
}
