//! Shot evaluator / recommender
//!
//! Each candidate inside the distance window is simulated `n_sim` times in
//! 2-D. A draw is scored as the stroke just played plus the expected strokes
//! from where it finished, plus any trouble penalty. Strokes gained is the
//! pre-shot baseline minus the mean draw score.
//!
//! Every candidate gets its own ChaCha8 stream derived from one base seed
//! drawn from the caller's RNG, keyed by its position in the candidate slice.
//! Results are therefore identical whether candidates run on the rayon pool
//! or sequentially, and two queries with the same seed share random numbers.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::config::EngineConfig;
use super::expected_strokes::expected_strokes;
use super::probability::prob_within;
use super::shot_sampler::{ShotOutcome, ShotSampler};
use super::sort_keys::compare_recommendations;
use crate::error::{ensure_finite, CaddyError, Result};
use crate::models::{
    CandidateShot, RankedRecommendation, SgTier, Situation, Surface, TroubleExposure, TroubleMap,
};

/// Golden-ratio increment used to spread per-candidate seeds
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// RNG for one query: seeded when `seed` is set, fresh entropy otherwise
pub fn simulation_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

// ============================================================================
// Per-query geometry
// ============================================================================

/// Thresholds shared by every draw of one query.
///
/// Draws are sampled around the aim point; limits and putting distances are
/// measured from the hole, so every draw is moved into that frame first.
#[derive(Debug, Clone, Copy)]
struct Zones {
    /// Depth below which a draw is short trouble (negative)
    short_limit: f64,
    /// Depth above which a draw is long trouble
    long_limit: f64,
    /// |lateral position| beyond which a draw is side trouble
    side_limit: f64,
    /// Green depth edges around the hole, when front/back are known
    green_depth: Option<(f64, f64)>,
    green_half_width: Option<f64>,
    /// Pin offset from the green's centre line
    pin_offset: f64,
    /// Aim point past the hole (yards)
    aim_depth: f64,
    /// Aim point right of the green's centre line (yards)
    aim_lateral: f64,
    green_radius: f64,
}

impl Zones {
    fn new(situation: &Situation, config: &EngineConfig) -> Self {
        let green = &situation.green;
        let trouble_cfg = &config.trouble;

        // Hole position between the edges: the start distance when it falls
        // on the green, the centre otherwise
        let center = green.center_yards();
        let hole = center.map(|center| {
            situation
                .start_distance
                .filter(|d| *d >= green.front_yards && *d <= green.back_yards)
                .unwrap_or(center)
        });
        let green_depth = hole.map(|hole| (green.front_yards - hole, green.back_yards - hole));

        let depth = trouble_cfg.depth_threshold_yards;
        let (short_limit, long_limit) = match green_depth {
            Some((front, back)) => (front.min(-depth), back.max(depth)),
            None => (-depth, depth),
        };

        let green_half_width = green.has_width().then(|| green.half_width());
        let side_limit = match green_half_width {
            Some(half) => trouble_cfg.green_width_side_ratio * half,
            None => trouble_cfg.side_threshold_yards,
        };

        let pin_offset = if green.has_width() { green.pin_lateral_offset } else { 0.0 };
        let (aim_depth, aim_lateral) = match (center, hole) {
            (Some(center), Some(hole)) if situation.aim_at_center => (center - hole, 0.0),
            _ => (0.0, pin_offset),
        };

        Self {
            short_limit,
            long_limit,
            side_limit,
            green_depth,
            green_half_width,
            pin_offset,
            aim_depth,
            aim_lateral,
            green_radius: config.simulation.green_radius_yards,
        }
    }

    /// Draw position measured from the hole
    fn from_hole(&self, outcome: &ShotOutcome) -> ShotOutcome {
        ShotOutcome {
            depth: outcome.depth + self.aim_depth,
            lateral: self.aim_lateral + outcome.lateral - self.pin_offset,
        }
    }

    /// Draw position across the green, from its centre line
    fn lateral_position(&self, outcome: &ShotOutcome) -> f64 {
        self.aim_lateral + outcome.lateral
    }

    fn on_green(&self, outcome: &ShotOutcome) -> bool {
        let at_hole = self.from_hole(outcome);
        let within_width = match self.green_half_width {
            Some(half) => self.lateral_position(outcome).abs() <= half,
            None => true,
        };
        let within_depth = match self.green_depth {
            Some((front, back)) => (front..=back).contains(&at_hole.depth),
            None => at_hole.remaining() <= self.green_radius,
        };
        within_width && within_depth
    }
}

// ============================================================================
// Candidate evaluation
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct CandidateScore {
    expected_after: f64,
    exposure: TroubleExposure,
}

fn evaluate_candidate(
    shot: &CandidateShot,
    target: f64,
    situation: &Situation,
    config: &EngineConfig,
    zones: &Zones,
    seed: u64,
) -> CandidateScore {
    let n_sim = config.simulation.n_sim;
    let hf = situation.effective_handicap_factor();
    let trouble = &situation.trouble;
    let strategy = situation.strategy;
    let penalty = |severity| config.trouble.scaled_penalty(severity, strategy);

    let sampler = ShotSampler::new(
        shot.total - target,
        shot.category,
        situation.effective_skill_factor(),
        situation.lie_dispersion_factor(),
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut total_strokes = 0.0;
    let mut hits = [0usize; 4];

    for _ in 0..n_sim {
        let outcome = sampler.sample(&mut rng);
        let at_hole = zones.from_hole(&outcome);
        let surface = if zones.on_green(&outcome) {
            Surface::Green
        } else {
            config.simulation.miss_surface
        };
        let mut strokes = 1.0 + expected_strokes(at_hole.remaining(), surface, hf);

        if at_hole.depth < zones.short_limit && trouble.short.is_present() {
            strokes += penalty(trouble.short);
            hits[0] += 1;
        } else if at_hole.depth > zones.long_limit && trouble.long.is_present() {
            strokes += penalty(trouble.long);
            hits[1] += 1;
        }

        let lateral = zones.lateral_position(&outcome);
        if lateral < -zones.side_limit && trouble.left.is_present() {
            strokes += penalty(trouble.left);
            hits[2] += 1;
        } else if lateral > zones.side_limit && trouble.right.is_present() {
            strokes += penalty(trouble.right);
            hits[3] += 1;
        }

        total_strokes += strokes;
    }

    let n = n_sim as f64;
    CandidateScore {
        expected_after: total_strokes / n,
        exposure: TroubleExposure {
            short: hits[0] as f64 / n,
            long: hits[1] as f64 / n,
            left: hits[2] as f64 / n,
            right: hits[3] as f64 / n,
        },
    }
}

// ============================================================================
// Rationale
// ============================================================================

fn build_rationale(diff: f64, exposure: &TroubleExposure, trouble: &TroubleMap, tier: SgTier) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(3);

    let abs_diff = diff.abs();
    if abs_diff <= 5.0 {
        lines.push("Distance matches the plays-like yardage closely.".to_string());
    } else if abs_diff <= 12.0 {
        lines.push("Distance matches the plays-like yardage reasonably well.".to_string());
    } else {
        let side = if diff < 0.0 { "short" } else { "long" };
        lines.push(format!("Distance matches loosely; expect to finish {abs_diff:.0} yards {side}."));
    }

    let worst = [
        ("short", exposure.short),
        ("long", exposure.long),
        ("left", exposure.left),
        ("right", exposure.right),
    ]
    .into_iter()
    .max_by(|a, b| a.1.total_cmp(&b.1));

    match worst {
        Some((side, share)) if share >= 0.10 => lines.push(format!(
            "Finds the {side} trouble on {:.0}% of simulated shots.",
            share * 100.0
        )),
        _ if trouble.any() => lines.push("Keeps the trouble mostly out of play.".to_string()),
        _ => {}
    }

    lines.push(
        match tier {
            SgTier::Strong => "Strong strokes-gained profile compared with a typical shot from here.",
            SgTier::Neutral => "Strokes-gained profile is roughly neutral vs. an average shot from here.",
            SgTier::Weak => "Weaker strokes-gained profile; consider a slightly safer alternative.",
        }
        .to_string(),
    );

    lines.join(" ")
}

// ============================================================================
// Public API
// ============================================================================

/// Rank `candidates` for a shot that should finish `target_total` yards away.
///
/// Returns at most `config.simulation.top_n` recommendations sorted by
/// strokes gained (desc), then by distance error. An empty window is not an
/// error: the result is simply empty.
///
/// # Errors
/// `InvalidInput` when `n_sim` is zero or a numeric input is not finite.
pub fn recommend_shots_with_sg<R: Rng + ?Sized>(
    target_total: f64,
    candidates: &[CandidateShot],
    situation: &Situation,
    config: &EngineConfig,
    rng: &mut R,
) -> Result<Vec<RankedRecommendation>> {
    let sim = &config.simulation;
    if sim.n_sim == 0 {
        return Err(CaddyError::invalid_input("n_sim must be at least 1"));
    }
    config.validate()?;
    let target = ensure_finite("target_total", target_total)?.max(0.0);
    if let Some(start) = situation.start_distance {
        ensure_finite("start_distance", start)?;
    }

    let lo = sim.window_min_ratio * target;
    let hi = sim.window_max_ratio * target;
    let in_window: Vec<(usize, &CandidateShot)> = candidates
        .iter()
        .enumerate()
        .filter(|(_, shot)| shot.total >= lo && shot.total <= hi)
        .collect();

    debug!(target, window_lo = lo, window_hi = hi, candidates = in_window.len(), "candidate window");

    if in_window.is_empty() {
        warn!(target, offered = candidates.len(), "no candidate within the distance window");
        return Ok(Vec::new());
    }

    let hf = situation.effective_handicap_factor();
    let baseline = expected_strokes(
        situation.start_distance.unwrap_or(target),
        situation.start_surface,
        hf,
    );

    let zones = Zones::new(situation, config);
    let base_seed: u64 = rng.gen();
    let seed_for = |idx: usize| base_seed.wrapping_add((idx as u64).wrapping_mul(SEED_STRIDE));

    let score = |&(idx, shot): &(usize, &CandidateShot)| {
        (idx, evaluate_candidate(shot, target, situation, config, &zones, seed_for(idx)))
    };
    let scores: Vec<(usize, CandidateScore)> = if in_window.len() > sim.parallel_threshold {
        in_window.par_iter().map(score).collect()
    } else {
        in_window.iter().map(score).collect()
    };

    let close = sim.close_radius_yards;
    let lie_factor = situation.lie_dispersion_factor();
    let skill = situation.effective_skill_factor();

    let mut ranked: Vec<(usize, RankedRecommendation)> = scores
        .into_iter()
        .map(|(idx, score)| {
            let shot = &candidates[idx];
            let diff = shot.total - target;
            let sampler = ShotSampler::new(diff, shot.category, skill, lie_factor);
            let p_close = prob_within(close, diff + zones.aim_depth, sampler.sigma_depth)
                * prob_within(close, zones.aim_lateral - zones.pin_offset, sampler.sigma_lateral);
            let strokes_gained = baseline - score.expected_after;
            let tier = SgTier::from_sg(strokes_gained);

            trace!(
                shot = %shot.name(),
                diff,
                expected = score.expected_after,
                strokes_gained,
                "candidate scored"
            );

            let rec = RankedRecommendation {
                shot: shot.clone(),
                diff,
                expected_strokes: score.expected_after,
                strokes_gained,
                p_close,
                exposure: score.exposure,
                tier,
                rationale: build_rationale(diff, &score.exposure, &situation.trouble, tier),
            };
            (idx, rec)
        })
        .collect();

    ranked.sort_by(|(a_idx, a), (b_idx, b)| compare_recommendations(a, *a_idx, b, *b_idx));
    ranked.truncate(sim.top_n);

    Ok(ranked.into_iter().map(|(_, rec)| rec).collect())
}

/// Same as [`recommend_shots_with_sg`], seeded from `config.simulation.seed`
pub fn recommend(
    target_total: f64,
    candidates: &[CandidateShot],
    situation: &Situation,
    config: &EngineConfig,
) -> Result<Vec<RankedRecommendation>> {
    let mut rng = simulation_rng(config.simulation.seed);
    recommend_shots_with_sg(target_total, candidates, situation, config, &mut rng)
}
