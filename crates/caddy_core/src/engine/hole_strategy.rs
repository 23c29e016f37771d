//! Par-3 / par-4 / par-5 strategy helpers
//!
//! Par 3 runs the full recommender from the tee. Par 4 and par 5 work off the
//! full-bag yardage table with closed-form fairway-miss estimates.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::EngineConfig;
use super::dispersion::get_lateral_sigma;
use super::expected_strokes::expected_strokes;
use super::probability::prob_within;
use super::recommender::recommend_shots_with_sg;
use super::shot_sampler::ShotSampler;
use super::sort_keys::compare_score_asc_stable;
use crate::error::{ensure_finite, Result};
use crate::models::{
    CandidateShot, Club, FairwayWidth, FullBagRow, RankedRecommendation, Situation, Surface,
    TroubleSeverity,
};

// ============================================================================
// Par 3
// ============================================================================

/// Best tee shot on a par 3 with its green-hitting odds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Par3Best {
    #[serde(flatten)]
    pub recommendation: RankedRecommendation,
    /// Depth within 5 yards × lateral within half the green width
    pub p_on_green: f64,
    pub p_within_5: f64,
    pub p_within_10: f64,
    /// Par-3 baseline minus expected score
    pub sg_vs_par: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Par3Plan {
    pub best: Option<Par3Best>,
    pub alternatives: Vec<RankedRecommendation>,
}

/// Rank tee shots for a par 3 of `hole_yards`.
///
/// The situation's start is forced to (`hole_yards`, tee).
pub fn par3_strategy<R: Rng + ?Sized>(
    hole_yards: f64,
    candidates: &[CandidateShot],
    situation: &Situation,
    config: &EngineConfig,
    rng: &mut R,
) -> Result<Par3Plan> {
    let hole_yards = ensure_finite("hole_yards", hole_yards)?.max(0.0);
    let situation = situation.clone().with_start(hole_yards, Surface::Tee);

    let mut ranked = recommend_shots_with_sg(hole_yards, candidates, &situation, config, rng)?;
    if ranked.is_empty() {
        return Ok(Par3Plan { best: None, alternatives: Vec::new() });
    }

    let alternatives: Vec<RankedRecommendation> = ranked.iter().skip(1).take(3).cloned().collect();
    let best = ranked.swap_remove(0);

    let sampler = ShotSampler::new(
        best.diff,
        best.shot.category,
        situation.effective_skill_factor(),
        situation.lie_dispersion_factor(),
    );
    let (sd, sl) = (sampler.sigma_depth, sampler.sigma_lateral);

    let p_within_5 = (prob_within(5.0, best.diff, sd) * prob_within(5.0, 0.0, sl)).clamp(0.0, 1.0);
    let p_within_10 = (prob_within(10.0, best.diff, sd) * prob_within(10.0, 0.0, sl)).clamp(0.0, 1.0);
    let p_on_green = if situation.green.has_width() {
        let half = situation.green.half_width();
        (prob_within(5.0, best.diff, sd) * prob_within(half, 0.0, sl)).clamp(0.0, 1.0)
    } else {
        p_within_10
    };

    let baseline = config.strategy.par3_baseline * situation.effective_handicap_factor();
    let sg_vs_par = baseline - best.expected_strokes;

    debug!(hole_yards, best = %best.shot.name(), p_on_green, sg_vs_par, "par 3 plan");

    Ok(Par3Plan {
        best: Some(Par3Best { recommendation: best, p_on_green, p_within_5, p_within_10, sg_vs_par }),
        alternatives,
    })
}

// ============================================================================
// Par 4 / Par 5 shared context
// ============================================================================

/// Tee-shot context for the long-hole helpers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleContext {
    pub skill_factor: f64,
    pub handicap_factor: f64,
    pub fairway_width: FairwayWidth,
    pub tee_left_trouble: TroubleSeverity,
    pub tee_right_trouble: TroubleSeverity,
    /// Trouble around the green, charged to a par-5 "go for it" second
    pub green_trouble: TroubleSeverity,
}

impl Default for HoleContext {
    fn default() -> Self {
        Self {
            skill_factor: 1.0,
            handicap_factor: 1.0,
            fairway_width: FairwayWidth::Medium,
            tee_left_trouble: TroubleSeverity::None,
            tee_right_trouble: TroubleSeverity::None,
            green_trouble: TroubleSeverity::None,
        }
    }
}

impl HoleContext {
    fn skill(&self) -> f64 {
        if self.skill_factor.is_finite() && self.skill_factor > 0.0 {
            self.skill_factor
        } else {
            1.0
        }
    }

    fn handicap(&self) -> f64 {
        if self.handicap_factor.is_finite() && self.handicap_factor > 0.0 {
            self.handicap_factor
        } else {
            1.0
        }
    }

    /// Approach difficulty after missing the fairway: at least rough
    fn miss_multiplier(&self) -> f64 {
        let worst_side = self.tee_left_trouble.max(self.tee_right_trouble);
        Surface::Rough.strokes_multiplier().max(worst_side.difficulty_factor())
    }
}

// ============================================================================
// Par 4
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeeOption {
    pub tee_club: Club,
    pub avg_total: f64,
    pub remaining_yards: f64,
    /// Probability of missing the fairway
    pub miss_prob: f64,
    /// 1 + expected approach strokes, inflated for fairway misses
    pub expected_score: f64,
    pub sg_vs_baseline: f64,
}

impl TeeOption {
    /// Multiplier applied to the approach for missing the fairway
    pub fn miss_inflation(&self, ctx: &HoleContext) -> f64 {
        1.0 + self.miss_prob * (ctx.miss_multiplier() - 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Par4Plan {
    pub best: Option<TeeOption>,
    /// Sorted by expected score, best first
    pub options: Vec<TeeOption>,
}

fn tee_options(
    hole_yards: f64,
    full_bag: &[FullBagRow],
    ctx: &HoleContext,
    config: &EngineConfig,
    baseline: f64,
) -> Vec<TeeOption> {
    let strategy = &config.strategy;
    let half_fairway = ctx.fairway_width.yards() / 2.0;
    let hf = ctx.handicap();

    let mut options: Vec<(usize, TeeOption)> = full_bag
        .iter()
        .filter(|row| strategy.tee_clubs.contains(&row.club))
        .enumerate()
        .map(|(idx, row)| {
            let remaining = (hole_yards - row.total).max(strategy.min_remaining_yards);
            let sigma = get_lateral_sigma(row.category()) * ctx.skill();
            let miss_prob = 1.0 - prob_within(half_fairway, 0.0, sigma);
            let inflation = 1.0 + miss_prob * (ctx.miss_multiplier() - 1.0);
            let expected_score = 1.0 + expected_strokes(remaining, Surface::Fairway, hf) * inflation;

            let option = TeeOption {
                tee_club: row.club,
                avg_total: row.total,
                remaining_yards: remaining,
                miss_prob,
                expected_score,
                sg_vs_baseline: baseline * hf - expected_score,
            };
            (idx, option)
        })
        .collect();

    options.sort_by(|(a_idx, a), (b_idx, b)| {
        compare_score_asc_stable(a.expected_score, *a_idx, b.expected_score, *b_idx)
    });
    options.into_iter().map(|(_, option)| option).collect()
}

/// Compare tee clubs on a par 4 by expected score
pub fn par4_strategy(
    hole_yards: f64,
    full_bag: &[FullBagRow],
    ctx: &HoleContext,
    config: &EngineConfig,
) -> Result<Par4Plan> {
    let hole_yards = ensure_finite("hole_yards", hole_yards)?.max(0.0);
    let options = tee_options(hole_yards, full_bag, ctx, config, config.strategy.par4_baseline);

    debug!(hole_yards, options = options.len(), "par 4 plan");

    Ok(Par4Plan { best: options.first().cloned(), options })
}

// ============================================================================
// Par 5
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Par5Approach {
    /// Lay up to the wedge yardage, then attack
    Layup,
    /// Reach the green in two
    GoForIt,
}

impl Par5Approach {
    pub fn label(&self) -> &'static str {
        match self {
            Par5Approach::Layup => "Three-shot (layup) plan",
            Par5Approach::GoForIt => "Aggressive two-shot plan",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Par5Plan {
    pub best_tee: TeeOption,
    pub approach: Par5Approach,
    pub expected_score: f64,
    pub remaining_after_tee: f64,
    pub layup_target: f64,
    pub layup_score: f64,
    /// `None` when the green is out of reach in two
    pub go_for_it_score: Option<f64>,
    pub sg_vs_baseline: f64,
}

/// Best par-4 tee shot, then layup versus going for the green in two.
///
/// Returns `None` when the bag holds none of the configured tee clubs.
pub fn par5_strategy(
    hole_yards: f64,
    full_bag: &[FullBagRow],
    ctx: &HoleContext,
    config: &EngineConfig,
) -> Result<Option<Par5Plan>> {
    let hole_yards = ensure_finite("hole_yards", hole_yards)?.max(0.0);
    let strategy = &config.strategy;
    let Some(best_tee) = tee_options(hole_yards, full_bag, ctx, config, strategy.par5_baseline)
        .into_iter()
        .next()
    else {
        return Ok(None);
    };

    let hf = ctx.handicap();
    let remaining = best_tee.remaining_yards;
    let inflation = best_tee.miss_inflation(ctx);

    let layup_target = strategy.layup_target_yards;
    let layup_score = if remaining > layup_target {
        // layup stroke played from the tee-shot lie, then the wedge in
        1.0 + inflation + expected_strokes(layup_target, Surface::Fairway, hf)
    } else {
        1.0 + expected_strokes(remaining, Surface::Fairway, hf) * inflation
    };

    let go_for_it_score = (remaining <= strategy.go_for_it_max_yards).then(|| {
        1.0 + expected_strokes(remaining, Surface::Fairway, hf)
            * inflation
            * ctx.green_trouble.difficulty_factor()
    });

    let (approach, expected_score) = match go_for_it_score {
        Some(go) if go + strategy.layup_bias < layup_score => (Par5Approach::GoForIt, go),
        _ => (Par5Approach::Layup, layup_score),
    };

    debug!(hole_yards, remaining, layup_score, ?go_for_it_score, plan = approach.label(), "par 5 plan");

    Ok(Some(Par5Plan {
        sg_vs_baseline: strategy.par5_baseline * hf - expected_score,
        best_tee,
        approach,
        expected_score,
        remaining_after_tee: remaining,
        layup_target,
        layup_score,
        go_for_it_score,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::bag::build_bag;
    use crate::models::{GreenGeometry, TroubleMap};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn full_bag() -> Vec<FullBagRow> {
        build_bag(100.0).unwrap().full_bag
    }

    #[test]
    fn test_par3_picks_club_near_hole_length() {
        let bag = build_bag(100.0).unwrap();
        let cfg = EngineConfig::deterministic(5);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let situation = Situation::new().with_green(GreenGeometry { width: 30.0, ..Default::default() });

        let plan = par3_strategy(161.0, &bag.candidates, &situation, &cfg, &mut rng).unwrap();
        let best = plan.best.unwrap();
        assert!(best.recommendation.diff.abs() <= 12.0, "{:?}", best.recommendation.shot);
        assert!(plan.alternatives.len() <= 3);
        assert!(best.p_within_5 <= best.p_within_10);
        assert!((0.0..=1.0).contains(&best.p_on_green));
        assert!((best.sg_vs_par - (3.1 - best.recommendation.expected_strokes)).abs() < 1e-12);
    }

    #[test]
    fn test_par3_without_width_uses_ten_yard_odds() {
        let bag = build_bag(100.0).unwrap();
        let cfg = EngineConfig::deterministic(8);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let plan = par3_strategy(140.0, &bag.candidates, &Situation::new(), &cfg, &mut rng).unwrap();
        let best = plan.best.unwrap();
        assert_eq!(best.p_on_green, best.p_within_10);
    }

    #[test]
    fn test_par3_out_of_range_is_empty() {
        let cfg = EngineConfig::deterministic(1);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let wedges = build_bag(100.0).unwrap().scoring_shots;
        let plan = par3_strategy(600.0, &wedges, &Situation::new(), &cfg, &mut rng).unwrap();
        assert!(plan.best.is_none());
        assert!(plan.alternatives.is_empty());
    }

    #[test]
    fn test_par3_trouble_reaches_recommender() {
        let bag = build_bag(100.0).unwrap();
        let cfg = EngineConfig::deterministic(12);
        let trouble = TroubleMap { long: TroubleSeverity::Severe, short: TroubleSeverity::Severe, ..TroubleMap::none() };
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let plan = par3_strategy(150.0, &bag.candidates, &Situation::new().with_trouble(trouble), &cfg, &mut rng)
            .unwrap();
        assert!(plan.best.unwrap().recommendation.rationale.contains("trouble"));
    }

    #[test]
    fn test_par4_options_sorted_and_limited_to_tee_clubs() {
        let plan = par4_strategy(420.0, &full_bag(), &HoleContext::default(), &EngineConfig::default()).unwrap();
        assert_eq!(plan.options.len(), 6);
        for pair in plan.options.windows(2) {
            assert!(pair[0].expected_score <= pair[1].expected_score);
        }
        let best = plan.best.unwrap();
        assert_eq!(best, plan.options[0]);
        assert!(plan.options.iter().all(|o| o.remaining_yards >= 10.0));
        assert!((best.sg_vs_baseline - (4.2 - best.expected_score)).abs() < 1e-12);
    }

    #[test]
    fn test_par4_short_hole_clamps_remaining() {
        let plan = par4_strategy(150.0, &full_bag(), &HoleContext::default(), &EngineConfig::default()).unwrap();
        let driver = plan.options.iter().find(|o| o.tee_club == Club::Driver).unwrap();
        assert_eq!(driver.remaining_yards, 10.0);
    }

    #[test]
    fn test_narrow_fairway_and_trouble_raise_miss_cost() {
        let bag = full_bag();
        let cfg = EngineConfig::default();
        let wide = HoleContext { fairway_width: FairwayWidth::Wide, ..Default::default() };
        let narrow = HoleContext {
            fairway_width: FairwayWidth::Narrow,
            tee_right_trouble: TroubleSeverity::Severe,
            ..Default::default()
        };

        let driver = |ctx: &HoleContext| {
            par4_strategy(400.0, &bag, ctx, &cfg)
                .unwrap()
                .options
                .into_iter()
                .find(|o| o.tee_club == Club::Driver)
                .unwrap()
        };
        let w = driver(&wide);
        let n = driver(&narrow);
        assert!(n.miss_prob > w.miss_prob);
        assert!(n.expected_score > w.expected_score);
    }

    #[test]
    fn test_par4_empty_bag() {
        let plan = par4_strategy(400.0, &[], &HoleContext::default(), &EngineConfig::default()).unwrap();
        assert!(plan.best.is_none());
        assert!(plan.options.is_empty());
    }

    #[test]
    fn test_par5_long_hole_lays_up() {
        let plan = par5_strategy(600.0, &full_bag(), &HoleContext::default(), &EngineConfig::default())
            .unwrap()
            .unwrap();
        assert!(plan.remaining_after_tee > 260.0);
        assert_eq!(plan.go_for_it_score, None);
        assert_eq!(plan.approach, Par5Approach::Layup);
        assert_eq!(plan.expected_score, plan.layup_score);
        assert_eq!(plan.layup_target, 100.0);
    }

    #[test]
    fn test_par5_reachable_hole_compares_plans() {
        let plan = par5_strategy(470.0, &full_bag(), &HoleContext::default(), &EngineConfig::default())
            .unwrap()
            .unwrap();
        let go = plan.go_for_it_score.unwrap();
        match plan.approach {
            Par5Approach::GoForIt => assert!(go + 0.05 < plan.layup_score),
            Par5Approach::Layup => assert!(go + 0.05 >= plan.layup_score),
        }
        assert_eq!(plan.expected_score, plan.layup_score.min(plan.expected_score));
    }

    #[test]
    fn test_par5_green_trouble_discourages_going() {
        let bag = full_bag();
        let cfg = EngineConfig::default();
        let calm = par5_strategy(470.0, &bag, &HoleContext::default(), &cfg).unwrap().unwrap();
        let guarded = HoleContext { green_trouble: TroubleSeverity::Severe, ..Default::default() };
        let risky = par5_strategy(470.0, &bag, &guarded, &cfg).unwrap().unwrap();
        assert!(risky.go_for_it_score.unwrap() > calm.go_for_it_score.unwrap());
        assert_eq!(risky.layup_score, calm.layup_score);
    }

    #[test]
    fn test_par5_without_tee_clubs() {
        let wedges_only: Vec<FullBagRow> =
            full_bag().into_iter().filter(|row| row.club.is_wedge()).collect();
        let plan = par5_strategy(520.0, &wedges_only, &HoleContext::default(), &EngineConfig::default()).unwrap();
        assert!(plan.is_none());
    }
}
