//! Caller-supplied context for one recommendation request.
//!
//! A `Situation` is built per query and passed by reference into every
//! engine call; the engine keeps no state between calls.

use serde::{Deserialize, Serialize};

use super::conditions::{
    Elevation, GreenFirmness, HandicapProfile, LieQuality, SkillLevel, Strategy, Surface,
    Tendency, TroubleSeverity, WindDirection, WindStrength,
};

/// Trouble severity in each miss direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TroubleMap {
    pub short: TroubleSeverity,
    pub long: TroubleSeverity,
    pub left: TroubleSeverity,
    pub right: TroubleSeverity,
}

impl TroubleMap {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn any(&self) -> bool {
        self.short.is_present()
            || self.long.is_present()
            || self.left.is_present()
            || self.right.is_present()
    }

    /// Worst of the two lateral sides
    pub fn worst_side(&self) -> TroubleSeverity {
        self.left.max(self.right)
    }
}

/// Optional green geometry. Zero means "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GreenGeometry {
    /// Yards from the ball to the front edge
    pub front_yards: f64,
    /// Yards from the ball to the back edge
    pub back_yards: f64,
    /// Green width in yards
    pub width: f64,
    /// Pin offset from the green's centre line (positive = right)
    pub pin_lateral_offset: f64,
}

impl GreenGeometry {
    /// Front/back yardages are usable as depth edges
    pub fn has_depth(&self) -> bool {
        self.front_yards > 0.0 && self.back_yards > self.front_yards
    }

    pub fn has_width(&self) -> bool {
        self.width > 0.0
    }

    pub fn center_yards(&self) -> Option<f64> {
        self.has_depth().then(|| (self.front_yards + self.back_yards) / 2.0)
    }

    pub fn half_width(&self) -> f64 {
        self.width.max(0.0) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Situation {
    pub wind_direction: WindDirection,
    pub wind_strength: WindStrength,
    pub elevation: Elevation,
    pub lie: LieQuality,
    /// Ambient temperature (°F); `None` skips the temperature adjustment
    pub temperature_f: Option<f64>,
    pub tendency: Tendency,
    /// Dispersion scale (0.8 consistent .. 1.3 recreational)
    pub skill_factor: f64,
    /// Expected-strokes scale (>1 = weaker baseline)
    pub handicap_factor: f64,
    pub strategy: Strategy,
    pub trouble: TroubleMap,
    pub green_firmness: GreenFirmness,
    pub green: GreenGeometry,
    /// Pre-shot distance to the hole; defaults to the shot target
    pub start_distance: Option<f64>,
    pub start_surface: Surface,
    /// Aim at the middle of the green rather than the pin. Draws are still
    /// scored against the pin.
    pub aim_at_center: bool,
}

impl Default for Situation {
    fn default() -> Self {
        Self {
            wind_direction: WindDirection::None,
            wind_strength: WindStrength::None,
            elevation: Elevation::Flat,
            lie: LieQuality::Good,
            temperature_f: None,
            tendency: Tendency::Neutral,
            skill_factor: 1.0,
            handicap_factor: 1.0,
            strategy: Strategy::Balanced,
            trouble: TroubleMap::none(),
            green_firmness: GreenFirmness::Medium,
            green: GreenGeometry::default(),
            start_distance: None,
            start_surface: Surface::Fairway,
            aim_at_center: false,
        }
    }
}

impl Situation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wind(mut self, direction: WindDirection, strength: WindStrength) -> Self {
        self.wind_direction = direction;
        self.wind_strength = strength;
        self
    }

    pub fn with_elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_lie(mut self, lie: LieQuality) -> Self {
        self.lie = lie;
        self
    }

    pub fn with_temperature(mut self, temp_f: f64) -> Self {
        self.temperature_f = Some(temp_f);
        self
    }

    pub fn with_tendency(mut self, tendency: Tendency) -> Self {
        self.tendency = tendency;
        self
    }

    pub fn with_skill(mut self, skill: SkillLevel) -> Self {
        self.skill_factor = skill.factor();
        self
    }

    pub fn with_skill_factor(mut self, factor: f64) -> Self {
        self.skill_factor = factor;
        self
    }

    pub fn with_handicap(mut self, profile: HandicapProfile) -> Self {
        self.handicap_factor = profile.factor();
        self
    }

    pub fn with_handicap_factor(mut self, factor: f64) -> Self {
        self.handicap_factor = factor;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_trouble(mut self, trouble: TroubleMap) -> Self {
        self.trouble = trouble;
        self
    }

    pub fn with_green_firmness(mut self, firmness: GreenFirmness) -> Self {
        self.green_firmness = firmness;
        self
    }

    pub fn with_green(mut self, green: GreenGeometry) -> Self {
        self.green = green;
        self
    }

    pub fn with_start(mut self, distance: f64, surface: Surface) -> Self {
        self.start_distance = Some(distance);
        self.start_surface = surface;
        self
    }

    pub fn with_center_aim(mut self, aim_at_center: bool) -> Self {
        self.aim_at_center = aim_at_center;
        self
    }

    /// Combined dispersion multiplier from the surface and the strike quality
    pub fn lie_dispersion_factor(&self) -> f64 {
        self.start_surface.dispersion_factor() * self.lie.dispersion_factor()
    }

    /// Skill factor guarded against non-positive or NaN input
    pub fn effective_skill_factor(&self) -> f64 {
        if self.skill_factor.is_finite() && self.skill_factor > 0.0 {
            self.skill_factor
        } else {
            1.0
        }
    }

    pub fn effective_handicap_factor(&self) -> f64 {
        if self.handicap_factor.is_finite() && self.handicap_factor > 0.0 {
            self.handicap_factor
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let situation = Situation::new()
            .with_wind(WindDirection::Into, WindStrength::Heavy)
            .with_skill(SkillLevel::Recreational)
            .with_handicap(HandicapProfile::TenToFourteen)
            .with_start(160.0, Surface::Rough);

        assert_eq!(situation.wind_direction, WindDirection::Into);
        assert_eq!(situation.skill_factor, 1.3);
        assert_eq!(situation.handicap_factor, 1.15);
        assert_eq!(situation.start_distance, Some(160.0));
        assert_eq!(situation.start_surface, Surface::Rough);
    }

    #[test]
    fn test_lie_dispersion_factor_combines_surface_and_strike() {
        let clean = Situation::new();
        let buried = Situation::new().with_lie(LieQuality::Bad).with_start(150.0, Surface::Sand);
        assert_eq!(clean.lie_dispersion_factor(), 1.0);
        assert!(buried.lie_dispersion_factor() > 1.6);
    }

    #[test]
    fn test_green_geometry() {
        let green = GreenGeometry { front_yards: 140.0, back_yards: 165.0, width: 30.0, ..Default::default() };
        assert!(green.has_depth());
        assert_eq!(green.center_yards(), Some(152.5));
        assert_eq!(green.half_width(), 15.0);

        let inverted = GreenGeometry { front_yards: 160.0, back_yards: 150.0, ..Default::default() };
        assert!(!inverted.has_depth());
        assert_eq!(inverted.center_yards(), None);
    }

    #[test]
    fn test_trouble_map() {
        let trouble = TroubleMap { left: TroubleSeverity::Mild, right: TroubleSeverity::Severe, ..Default::default() };
        assert!(trouble.any());
        assert_eq!(trouble.worst_side(), TroubleSeverity::Severe);
        assert!(!TroubleMap::none().any());
    }

    #[test]
    fn test_degenerate_factors_are_neutralized() {
        let situation = Situation::new().with_skill_factor(0.0).with_handicap_factor(f64::NAN);
        assert_eq!(situation.effective_skill_factor(), 1.0);
        assert_eq!(situation.effective_handicap_factor(), 1.0);
    }

    #[test]
    fn test_deserialize_with_partial_fields() {
        let json = r#"{"wind_direction":"into","trouble":{"long":"Severe"},"start_surface":"Light Rough"}"#;
        let situation: Situation = serde_json::from_str(json).unwrap();
        assert_eq!(situation.wind_direction, WindDirection::Into);
        assert_eq!(situation.trouble.long, TroubleSeverity::Severe);
        assert_eq!(situation.trouble.short, TroubleSeverity::None);
        assert_eq!(situation.start_surface, Surface::Rough);
        assert_eq!(situation.skill_factor, 1.0);
    }
}
