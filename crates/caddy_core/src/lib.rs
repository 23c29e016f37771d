//! # caddy_core - Strokes-Gained Shot Recommendation Engine
//!
//! Turns a raw yardage and on-course conditions into a ranked list of
//! (club, swing) choices for an amateur golfer.
//!
//! ## Features
//! - Bag model scaled from the player's driver clubhead speed
//! - Plays-like yardage (wind, elevation, lie, temperature, tendency)
//! - 2-D Monte Carlo strokes-gained ranking with trouble penalties
//! - Par 3/4/5 strategy helpers and practice scenarios
//! - Deterministic when seeded (same seed = same result)
//! - JSON API for UI front ends
//!
//! ## Example
//! ```rust
//! use caddy_core::{build_bag, recommend, EngineConfig, Situation};
//! use caddy_core::models::{WindDirection, WindStrength};
//!
//! let bag = build_bag(100.0).unwrap();
//! let situation = Situation::new().with_wind(WindDirection::Into, WindStrength::Light);
//! let recs = recommend(150.0, &bag.candidates, &situation, &EngineConfig::deterministic(7)).unwrap();
//! assert!(!recs.is_empty());
//! ```

// Engine entry points mirror the UI's parameter lists
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{bag_json, hole_strategy_json, random_scenario_json, recommend_json};
pub use engine::{
    build_bag, build_bag_for_green, calculate_plays_like_yardage, expected_strokes,
    generate_random_scenario, par3_strategy, par4_strategy, par5_strategy, recommend,
    recommend_shots_with_sg, Bag, EngineConfig, HoleContext,
};
pub use error::{CaddyError, Result};
pub use models::{CandidateShot, Club, ClubCategory, RankedRecommendation, Situation, Surface};
