//! JSON API for UI collaborators
//!
//! Every request carries `schema_version` (currently 1). Categorical fields
//! accept loose UI labels; unknown labels fall back to the neutral value.
//! Errors come back as plain strings so a front end can show them as-is.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::engine::bag::{build_bag_for_green, compute_optimal_carry_for_target, Bag, BASELINE_DRIVER_SPEED};
use crate::engine::config::EngineConfig;
use crate::engine::hole_strategy::{
    par3_strategy, par4_strategy, par5_strategy, HoleContext, Par3Plan, Par4Plan, Par5Plan,
};
use crate::engine::plays_like::{
    plays_like_breakdown, select_raw_target, PlaysLikeBreakdown, PlaysLikeInput,
};
use crate::engine::recommender::{recommend_shots_with_sg, simulation_rng};
use crate::engine::scenario::{generate_random_scenario, Scenario};
use crate::models::{Club, GreenFirmness, RankedRecommendation, Situation};

pub const SCHEMA_VERSION: u8 = 1;

fn default_speed() -> f64 {
    BASELINE_DRIVER_SPEED
}

fn parse_request<'a, T: Deserialize<'a>>(request_json: &'a str) -> Result<T, String> {
    serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))
}

fn check_schema(version: u8) -> Result<(), String> {
    if version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", version));
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

/// Bag for the requested speed and firmness, with range overrides applied
fn load_bag(
    speed: f64,
    firmness: GreenFirmness,
    calibration: &HashMap<Club, f64>,
) -> Result<Bag, String> {
    let bag = build_bag_for_green(speed, firmness).map_err(|e| e.to_string())?;
    if calibration.is_empty() {
        Ok(bag)
    } else {
        bag.calibrated(calibration).map_err(|e| e.to_string())
    }
}

// ============================================================================
// Recommendation
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub schema_version: u8,
    /// Measured yards to the pin
    pub raw_yards: f64,
    #[serde(default)]
    pub use_center_of_green: bool,
    #[serde(default = "default_speed")]
    pub driver_speed_mph: f64,
    /// Raw yardage only: no adjustments, no recommendations
    #[serde(default)]
    pub tournament_mode: bool,
    /// `None` draws fresh entropy
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub n_sim: Option<usize>,
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(default)]
    pub situation: Situation,
    /// Measured range carries keyed by club label ("7i", "PW", ...)
    #[serde(default)]
    pub calibration: HashMap<Club, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub schema_version: u8,
    pub tournament_mode: bool,
    /// Raw yardage actually aimed at (pin or centre of green)
    pub raw_target: f64,
    /// Yardage the recommendations were ranked against
    pub target_yards: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plays_like: Option<PlaysLikeBreakdown>,
    pub recommendations: Vec<RankedRecommendation>,
    /// Suggested carry for the top recommendation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_carry: Option<f64>,
}

/// Recommendation request using `CADDY_CONFIG` or the default tuning
pub fn recommend_json(request_json: &str) -> Result<String, String> {
    recommend_json_with_config(request_json, &EngineConfig::from_env_or_default())
}

pub fn recommend_json_with_config(request_json: &str, config: &EngineConfig) -> Result<String, String> {
    let request: RecommendRequest = parse_request(request_json)?;
    check_schema(request.schema_version)?;

    if !request.raw_yards.is_finite() {
        return Err(format!("raw_yards must be finite, got {}", request.raw_yards));
    }

    let raw_target = select_raw_target(
        request.raw_yards,
        &request.situation.green,
        request.use_center_of_green,
    );

    if request.tournament_mode {
        debug!(raw_target, "tournament mode: raw yardage only");
        return to_json(&RecommendResponse {
            schema_version: SCHEMA_VERSION,
            tournament_mode: true,
            raw_target,
            target_yards: raw_target,
            plays_like: None,
            recommendations: Vec::new(),
            optimal_carry: None,
        });
    }

    let mut config = config.clone();
    if let Some(seed) = request.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(n_sim) = request.n_sim {
        config.simulation.n_sim = n_sim;
    }
    if let Some(top_n) = request.top_n {
        config.simulation.top_n = top_n;
    }
    config.validate().map_err(|e| e.to_string())?;

    let mut situation = request.situation.clone();
    if situation.start_distance.is_none() {
        situation.start_distance = Some(request.raw_yards);
    }
    situation.aim_at_center = request.use_center_of_green;

    let breakdown = plays_like_breakdown(
        &PlaysLikeInput::from_situation(raw_target, &situation),
        &config.environment,
    );
    let target = breakdown.plays_like;

    let bag = load_bag(request.driver_speed_mph, situation.green_firmness, &request.calibration)?;
    let mut rng = simulation_rng(config.simulation.seed);
    let recommendations = recommend_shots_with_sg(target, &bag.candidates, &situation, &config, &mut rng)
        .map_err(|e| e.to_string())?;

    let optimal_carry = recommendations
        .first()
        .map(|best| compute_optimal_carry_for_target(target, best.shot.category));

    to_json(&RecommendResponse {
        schema_version: SCHEMA_VERSION,
        tournament_mode: false,
        raw_target,
        target_yards: target,
        plays_like: Some(breakdown),
        recommendations,
        optimal_carry,
    })
}

// ============================================================================
// Bag
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagRequest {
    pub schema_version: u8,
    #[serde(default = "default_speed")]
    pub driver_speed_mph: f64,
    #[serde(default)]
    pub green_firmness: GreenFirmness,
    #[serde(default)]
    pub calibration: HashMap<Club, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagResponse {
    pub schema_version: u8,
    pub bag: Bag,
}

pub fn bag_json(request_json: &str) -> Result<String, String> {
    let request: BagRequest = parse_request(request_json)?;
    check_schema(request.schema_version)?;

    let bag = load_bag(request.driver_speed_mph, request.green_firmness, &request.calibration)?;
    to_json(&BagResponse { schema_version: SCHEMA_VERSION, bag })
}

// ============================================================================
// Hole strategy
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleStrategyRequest {
    pub schema_version: u8,
    pub par: u8,
    pub hole_yards: f64,
    #[serde(default = "default_speed")]
    pub driver_speed_mph: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Par 3: conditions on the tee
    #[serde(default)]
    pub situation: Situation,
    /// Par 4/5: fairway and trouble off the tee
    #[serde(default)]
    pub context: HoleContext,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleStrategyResponse {
    pub schema_version: u8,
    pub par: u8,
    pub hole_yards: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par3: Option<Par3Plan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par4: Option<Par4Plan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par5: Option<Par5Plan>,
}

pub fn hole_strategy_json(request_json: &str) -> Result<String, String> {
    hole_strategy_json_with_config(request_json, &EngineConfig::from_env_or_default())
}

pub fn hole_strategy_json_with_config(request_json: &str, config: &EngineConfig) -> Result<String, String> {
    let request: HoleStrategyRequest = parse_request(request_json)?;
    check_schema(request.schema_version)?;

    let mut config = config.clone();
    if let Some(seed) = request.seed {
        config.simulation.seed = Some(seed);
    }

    let bag = build_bag_for_green(request.driver_speed_mph, request.situation.green_firmness)
        .map_err(|e| e.to_string())?;

    let mut response = HoleStrategyResponse {
        schema_version: SCHEMA_VERSION,
        par: request.par,
        hole_yards: request.hole_yards,
        par3: None,
        par4: None,
        par5: None,
    };

    match request.par {
        3 => {
            let mut rng = simulation_rng(config.simulation.seed);
            response.par3 = Some(
                par3_strategy(request.hole_yards, &bag.candidates, &request.situation, &config, &mut rng)
                    .map_err(|e| e.to_string())?,
            );
        }
        4 => {
            response.par4 = Some(
                par4_strategy(request.hole_yards, &bag.full_bag, &request.context, &config)
                    .map_err(|e| e.to_string())?,
            );
        }
        5 => {
            response.par5 = par5_strategy(request.hole_yards, &bag.full_bag, &request.context, &config)
                .map_err(|e| e.to_string())?;
        }
        other => return Err(format!("Unsupported par: {} (expected 3, 4 or 5)", other)),
    }

    to_json(&response)
}

// ============================================================================
// Practice scenarios
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResponse {
    pub schema_version: u8,
    pub scenario: Scenario,
    /// Answer for the player to check their own estimate against
    pub plays_like: f64,
}

pub fn random_scenario_json(request_json: &str) -> Result<String, String> {
    let request: ScenarioRequest = parse_request(request_json)?;
    check_schema(request.schema_version)?;

    let mut rng = simulation_rng(request.seed);
    let scenario = generate_random_scenario(&mut rng);
    let plays_like = scenario.plays_like(&EngineConfig::default().environment);

    to_json(&ScenarioResponse { schema_version: SCHEMA_VERSION, scenario, plays_like })
}
