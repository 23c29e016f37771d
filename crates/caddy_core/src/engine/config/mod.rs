//! # Engine Configuration
//!
//! All tuning constants of the recommendation engine in one place.
//!
//! ## Usage
//! ```rust
//! use caddy_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let reproducible = EngineConfig::deterministic(42);
//! let from_yaml = EngineConfig::from_yaml_str("simulation:\n  n_sim: 200\n").unwrap();
//! assert_eq!(from_yaml.simulation.n_sim, 200);
//! ```
//!
//! ## Environment Variables
//!
//! - `CADDY_CONFIG`: path to a YAML file read by [`EngineConfig::from_env_or_default`]

mod environment_config;
mod simulation_config;
mod strategy_config;
mod trouble_config;

pub use environment_config::{EnvironmentConfig, TemperatureModel};
pub use simulation_config::SimulationConfig;
pub use strategy_config::StrategyConfig;
pub use trouble_config::TroubleConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{CaddyError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub trouble: TroubleConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub strategy: StrategyConfig,
}

impl EngineConfig {
    /// Fixed seed, for tests and reproducible practice rounds
    pub fn deterministic(seed: u64) -> Self {
        let mut cfg = Self::default();
        cfg.simulation.seed = Some(seed);
        cfg
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.simulation.seed = seed;
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: EngineConfig = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Load `CADDY_CONFIG` if set, otherwise defaults. A broken file is
    /// logged and ignored.
    pub fn from_env_or_default() -> Self {
        match env::var("CADDY_CONFIG") {
            Ok(path) if !path.trim().is_empty() => {
                match Self::from_yaml_file(Path::new(&path)) {
                    Ok(cfg) => cfg,
                    Err(err) => {
                        warn!(%path, error = %err, "ignoring CADDY_CONFIG");
                        Self::default()
                    }
                }
            }
            _ => Self::default(),
        }
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        let trouble = &self.trouble;
        let env = &self.environment;
        let strategy = &self.strategy;
        let numbers = [
            ("simulation.window_min_ratio", sim.window_min_ratio),
            ("simulation.window_max_ratio", sim.window_max_ratio),
            ("simulation.green_radius_yards", sim.green_radius_yards),
            ("simulation.close_radius_yards", sim.close_radius_yards),
            ("trouble.depth_threshold_yards", trouble.depth_threshold_yards),
            ("trouble.side_threshold_yards", trouble.side_threshold_yards),
            ("trouble.green_width_side_ratio", trouble.green_width_side_ratio),
            ("trouble.mild_penalty", trouble.mild_penalty),
            ("trouble.severe_penalty", trouble.severe_penalty),
            ("trouble.conservative_multiplier", trouble.conservative_multiplier),
            ("trouble.balanced_multiplier", trouble.balanced_multiplier),
            ("trouble.aggressive_multiplier", trouble.aggressive_multiplier),
            ("environment.baseline_temp_f", env.baseline_temp_f),
            ("environment.relative_humidity", env.relative_humidity),
            ("environment.tendency_yards", env.tendency_yards),
            ("strategy.par3_baseline", strategy.par3_baseline),
            ("strategy.par4_baseline", strategy.par4_baseline),
            ("strategy.par5_baseline", strategy.par5_baseline),
            ("strategy.min_remaining_yards", strategy.min_remaining_yards),
            ("strategy.layup_target_yards", strategy.layup_target_yards),
            ("strategy.go_for_it_max_yards", strategy.go_for_it_max_yards),
            ("strategy.layup_bias", strategy.layup_bias),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CaddyError::Config(format!("{name} must be finite, got {value}")));
        }

        if sim.n_sim == 0 {
            return Err(CaddyError::Config("simulation.n_sim must be >= 1".into()));
        }
        if sim.top_n == 0 {
            return Err(CaddyError::Config("simulation.top_n must be >= 1".into()));
        }
        if !(sim.window_min_ratio >= 0.0 && sim.window_min_ratio <= sim.window_max_ratio) {
            return Err(CaddyError::Config(format!(
                "candidate window is inverted: {} .. {}",
                sim.window_min_ratio, sim.window_max_ratio
            )));
        }
        if sim.green_radius_yards < 0.0 || sim.close_radius_yards < 0.0 {
            return Err(CaddyError::Config("radii must be non-negative".into()));
        }
        if !(0.0..=1.0).contains(&env.relative_humidity) {
            return Err(CaddyError::Config(format!(
                "environment.relative_humidity must be within 0..1, got {}",
                env.relative_humidity
            )));
        }
        if self.strategy.tee_clubs.is_empty() {
            return Err(CaddyError::Config("strategy.tee_clubs must not be empty".into()));
        }
        Ok(())
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Club, Strategy, Surface, TroubleSeverity};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.simulation.n_sim, 400);
        assert_eq!(cfg.simulation.seed, None);
        assert_eq!(cfg.simulation.miss_surface, Surface::Fairway);
        assert_eq!(cfg.environment.temperature_model, TemperatureModel::AirDensity);
        assert_eq!(cfg.strategy.tee_clubs.first(), Some(&Club::Driver));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_penalty_scaling() {
        let cfg = TroubleConfig::default();
        assert_eq!(cfg.scaled_penalty(TroubleSeverity::None, Strategy::Conservative), 0.0);
        assert!((cfg.scaled_penalty(TroubleSeverity::Severe, Strategy::Conservative) - 1.3).abs() < 1e-12);
        assert!((cfg.scaled_penalty(TroubleSeverity::Mild, Strategy::Aggressive) - 0.28).abs() < 1e-12);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "simulation:\n  n_sim: 120\n  seed: 7\nenvironment:\n  temperature_model: linear\n";
        let cfg = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.simulation.n_sim, 120);
        assert_eq!(cfg.simulation.seed, Some(7));
        assert_eq!(cfg.simulation.top_n, 5);
        assert_eq!(cfg.environment.temperature_model, TemperatureModel::Linear);
        assert_eq!(cfg.trouble, TroubleConfig::default());
    }

    #[test]
    fn test_invalid_yaml_values_rejected() {
        assert!(matches!(
            EngineConfig::from_yaml_str("simulation:\n  n_sim: 0\n"),
            Err(CaddyError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_yaml_str("simulation:\n  window_min_ratio: 2.0\n  window_max_ratio: 1.0\n"),
            Err(CaddyError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_yaml_str("simulation: [1, 2"),
            Err(CaddyError::Yaml(_))
        ));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.simulation.green_radius_yards = f64::NAN;
        assert!(matches!(cfg.validate(), Err(CaddyError::Config(msg)) if msg.contains("green_radius_yards")));

        let mut cfg = EngineConfig::default();
        cfg.simulation.close_radius_yards = f64::INFINITY;
        assert!(matches!(cfg.validate(), Err(CaddyError::Config(_))));

        let mut cfg = EngineConfig::default();
        cfg.simulation.window_max_ratio = f64::INFINITY;
        assert!(matches!(cfg.validate(), Err(CaddyError::Config(msg)) if msg.contains("window_max_ratio")));

        assert!(matches!(
            EngineConfig::from_yaml_str("simulation:\n  window_min_ratio: .nan\n"),
            Err(CaddyError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_yaml_str("trouble:\n  severe_penalty: .inf\n"),
            Err(CaddyError::Config(_))
        ));
    }

    #[test]
    fn test_recommend_rejects_invalid_config() {
        let mut cfg = EngineConfig::deterministic(3);
        cfg.simulation.green_radius_yards = f64::NAN;
        let shots = [crate::models::CandidateShot::full(Club::SevenIron, 147.0, 155.0).unwrap()];
        let err = crate::engine::recommend(150.0, &shots, &crate::models::Situation::new(), &cfg).unwrap_err();
        assert!(matches!(err, CaddyError::Config(_)));
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let cfg = EngineConfig::deterministic(99);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(cfg.to_yaml_string().unwrap().as_bytes()).unwrap();

        let loaded = EngineConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EngineConfig::from_yaml_file(Path::new("/nonexistent/caddy.yaml")).unwrap_err();
        assert!(matches!(err, CaddyError::Io(_)));
    }
}
