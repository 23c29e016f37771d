//! Plays-like adjustment parameters

use serde::{Deserialize, Serialize};

/// How temperature feeds into the plays-like number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureModel {
    /// Ideal-gas air density with Tetens vapour pressure
    #[default]
    AirDensity,
    /// ±2.5 yards per 10°F at 150 yards, scaled by distance
    Linear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub temperature_model: TemperatureModel,
    /// Temperature at which the bag was calibrated (°F)
    pub baseline_temp_f: f64,
    /// Relative humidity used for the vapour partial pressure (0..1)
    pub relative_humidity: f64,
    /// Yards added (usually short) or removed (usually long) for tendency
    pub tendency_yards: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            temperature_model: TemperatureModel::AirDensity,
            baseline_temp_f: 75.0,
            relative_humidity: 0.5,
            tendency_yards: 3.0,
        }
    }
}
