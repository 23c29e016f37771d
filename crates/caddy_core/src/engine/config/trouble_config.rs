//! Trouble-zone penalties

use serde::{Deserialize, Serialize};

use crate::models::{Strategy, TroubleSeverity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TroubleConfig {
    /// Depth miss (yards past or short of the target) that reaches trouble
    pub depth_threshold_yards: f64,
    /// Lateral miss that reaches trouble when the green width is unknown
    pub side_threshold_yards: f64,
    /// Fraction of the half green-width used as the side threshold
    pub green_width_side_ratio: f64,

    // === Extra strokes per severity ===
    pub mild_penalty: f64,
    pub severe_penalty: f64,

    // === Strategy multipliers on the penalty ===
    pub conservative_multiplier: f64,
    pub balanced_multiplier: f64,
    pub aggressive_multiplier: f64,
}

impl Default for TroubleConfig {
    fn default() -> Self {
        Self {
            depth_threshold_yards: 5.0,
            side_threshold_yards: 12.0,
            green_width_side_ratio: 0.7,
            mild_penalty: 0.4,
            severe_penalty: 1.0,
            conservative_multiplier: 1.3,
            balanced_multiplier: 1.0,
            aggressive_multiplier: 0.7,
        }
    }
}

impl TroubleConfig {
    pub fn penalty(&self, severity: TroubleSeverity) -> f64 {
        match severity {
            TroubleSeverity::None => 0.0,
            TroubleSeverity::Mild => self.mild_penalty,
            TroubleSeverity::Severe => self.severe_penalty,
        }
    }

    pub fn strategy_multiplier(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Conservative => self.conservative_multiplier,
            Strategy::Balanced => self.balanced_multiplier,
            Strategy::Aggressive => self.aggressive_multiplier,
        }
    }

    /// Penalty actually charged for finding trouble of `severity`
    pub fn scaled_penalty(&self, severity: TroubleSeverity, strategy: Strategy) -> f64 {
        self.penalty(severity) * self.strategy_multiplier(strategy)
    }
}
