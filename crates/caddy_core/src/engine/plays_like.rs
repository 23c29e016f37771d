//! Plays-like yardage
//!
//! Pure adjustments applied to a raw distance in a fixed order:
//! wind → elevation → lie → temperature → player tendency.
//! None of them can fail; neutral inputs (no wind, flat, good lie, baseline
//! temperature, neutral tendency) leave the distance unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::air_density::{air_density, STANDARD_PRESSURE_PA};
use super::config::{EnvironmentConfig, TemperatureModel};
use crate::models::{
    Elevation, GreenGeometry, LieQuality, Situation, Tendency, WindDirection, WindStrength,
};

/// Reference shot length for the distance-dependent scale factors
const REFERENCE_YARDS: f64 = 150.0;

const HEADWIND_FACTOR: f64 = 0.9;
const TAILWIND_FACTOR: f64 = 0.4;
const CROSSWIND_FACTOR: f64 = 0.1;

/// Damping applied to the raw air-density effect
const TEMPERATURE_DAMPING: f64 = 0.7;

// ============================================================================
// Individual adjustments
// ============================================================================

/// Headwind hurts more than tailwind helps; crosswind adds a small margin.
pub fn adjust_for_wind(distance: f64, direction: WindDirection, strength: WindStrength) -> f64 {
    let wind_mph = strength.mph();
    let scale = (distance / REFERENCE_YARDS).clamp(0.5, 1.2);

    match direction {
        WindDirection::None => distance,
        WindDirection::Into => distance + wind_mph * HEADWIND_FACTOR * scale,
        WindDirection::Down => distance - wind_mph * TAILWIND_FACTOR * scale,
        WindDirection::Cross => distance + wind_mph * CROSSWIND_FACTOR * scale,
    }
}

pub fn apply_elevation(distance: f64, elevation: Elevation) -> f64 {
    distance + elevation.yards()
}

pub fn apply_lie(distance: f64, lie: LieQuality) -> f64 {
    distance * lie.distance_multiplier()
}

/// Air-density temperature model at 50% relative humidity.
/// Colder than `baseline_temp_f` plays longer, hotter plays shorter.
pub fn apply_temperature(distance: f64, temp_f: f64, baseline_temp_f: f64) -> f64 {
    apply_temperature_air_density(distance, temp_f, baseline_temp_f, 0.5)
}

pub fn apply_temperature_air_density(
    distance: f64,
    temp_f: f64,
    baseline_temp_f: f64,
    relative_humidity: f64,
) -> f64 {
    let rho_base = air_density(baseline_temp_f, relative_humidity, STANDARD_PRESSURE_PA);
    let rho_now = air_density(temp_f, relative_humidity, STANDARD_PRESSURE_PA);
    if !(rho_base > 0.0 && rho_now > 0.0) {
        return distance;
    }

    // How far the ball carries relative to the baseline day
    let carry_scale = (rho_base / rho_now).sqrt();
    let sensitivity = (distance / REFERENCE_YARDS).clamp(0.6, 1.4);
    let damped = 1.0 + (carry_scale - 1.0) * sensitivity * TEMPERATURE_DAMPING;

    if damped > 0.0 {
        distance / damped
    } else {
        distance
    }
}

/// ±2.5 yards per 10°F at 150 yards, scaled linearly with distance
pub fn apply_temperature_linear(distance: f64, temp_f: f64, baseline_temp_f: f64) -> f64 {
    let per_ten_degrees = 2.5 * distance / REFERENCE_YARDS;
    distance + (baseline_temp_f - temp_f) / 10.0 * per_ten_degrees
}

/// Temperature adjustment using the configured model
pub fn apply_temperature_with(distance: f64, temp_f: f64, env: &EnvironmentConfig) -> f64 {
    match env.temperature_model {
        TemperatureModel::AirDensity => apply_temperature_air_density(
            distance,
            temp_f,
            env.baseline_temp_f,
            env.relative_humidity,
        ),
        TemperatureModel::Linear => apply_temperature_linear(distance, temp_f, env.baseline_temp_f),
    }
}

/// A short hitter takes more club, a long hitter less
pub fn apply_tendency(distance: f64, tendency: Tendency, yards: f64) -> f64 {
    distance + tendency.sign() * yards
}

// ============================================================================
// Composition
// ============================================================================

/// Everything the plays-like pipeline consumes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaysLikeInput {
    pub raw_yards: f64,
    pub wind_direction: WindDirection,
    pub wind_strength: WindStrength,
    pub elevation: Elevation,
    pub lie: LieQuality,
    pub tendency: Tendency,
    /// `None` skips the temperature stage
    pub temp_f: Option<f64>,
}

impl PlaysLikeInput {
    pub fn from_situation(raw_yards: f64, situation: &Situation) -> Self {
        Self {
            raw_yards,
            wind_direction: situation.wind_direction,
            wind_strength: situation.wind_strength,
            elevation: situation.elevation,
            lie: situation.lie,
            tendency: situation.tendency,
            temp_f: situation.temperature_f,
        }
    }
}

/// Each stage of the pipeline, for display next to the final number
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaysLikeBreakdown {
    pub raw: f64,
    pub after_wind: f64,
    pub after_elevation: f64,
    pub after_lie: f64,
    pub after_temperature: f64,
    pub plays_like: f64,
}

impl PlaysLikeBreakdown {
    /// Yardage unchanged; used when adjustments are switched off
    pub fn raw_only(raw: f64) -> Self {
        Self {
            raw,
            after_wind: raw,
            after_elevation: raw,
            after_lie: raw,
            after_temperature: raw,
            plays_like: raw,
        }
    }

    pub fn total_adjustment(&self) -> f64 {
        self.plays_like - self.raw
    }
}

pub fn plays_like_breakdown(input: &PlaysLikeInput, env: &EnvironmentConfig) -> PlaysLikeBreakdown {
    let raw = input.raw_yards.max(0.0);
    let after_wind = adjust_for_wind(raw, input.wind_direction, input.wind_strength);
    let after_elevation = apply_elevation(after_wind, input.elevation);
    let after_lie = apply_lie(after_elevation, input.lie);
    let after_temperature = match input.temp_f {
        Some(temp_f) => apply_temperature_with(after_lie, temp_f, env),
        None => after_lie,
    };
    let plays_like = apply_tendency(after_temperature, input.tendency, env.tendency_yards).max(0.0);

    debug!(raw, after_wind, after_elevation, after_lie, after_temperature, plays_like, "plays-like");

    PlaysLikeBreakdown { raw, after_wind, after_elevation, after_lie, after_temperature, plays_like }
}

/// Plays-like yardage with the default environment settings
pub fn calculate_plays_like_yardage(
    raw_yards: f64,
    wind_direction: WindDirection,
    wind_strength: WindStrength,
    elevation: Elevation,
    lie: LieQuality,
    tendency: Tendency,
    temp_f: Option<f64>,
) -> f64 {
    let input = PlaysLikeInput {
        raw_yards,
        wind_direction,
        wind_strength,
        elevation,
        lie,
        tendency,
        temp_f,
    };
    plays_like_breakdown(&input, &EnvironmentConfig::default()).plays_like
}

/// Pin yardage, or the middle of the green when asked for and the
/// front/back numbers make sense
pub fn select_raw_target(pin_yards: f64, green: &GreenGeometry, use_center: bool) -> f64 {
    match green.center_yards() {
        Some(center) if use_center => center,
        _ => pin_yards,
    }
}
