use serde::{Deserialize, Serialize};

use super::shot::CandidateShot;

/// Qualitative strokes-gained band used in the rationale text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SgTier {
    Strong,
    Neutral,
    Weak,
}

impl SgTier {
    /// ±0.2 strokes separates the bands
    pub fn from_sg(sg: f64) -> Self {
        if sg > 0.2 {
            SgTier::Strong
        } else if sg < -0.2 {
            SgTier::Weak
        } else {
            SgTier::Neutral
        }
    }
}

/// Share of simulated outcomes that found each trouble zone
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TroubleExposure {
    pub short: f64,
    pub long: f64,
    pub left: f64,
    pub right: f64,
}

/// One scored candidate, as returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    #[serde(flatten)]
    pub shot: CandidateShot,
    /// Signed distance error: total − target
    pub diff: f64,
    /// Mean expected strokes to hole out, counting this shot
    pub expected_strokes: f64,
    /// baseline − expected_strokes
    pub strokes_gained: f64,
    /// Probability of finishing within the close radius of the hole
    pub p_close: f64,
    pub exposure: TroubleExposure,
    pub tier: SgTier,
    pub rationale: String,
}

impl RankedRecommendation {
    pub fn abs_diff(&self) -> f64 {
        self.diff.abs()
    }
}
