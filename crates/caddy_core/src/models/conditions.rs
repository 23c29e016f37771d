//! Closed vocabularies for on-course conditions.
//!
//! Every category the UI can send is one of these enums. Each type offers a
//! strict `parse` (returns `None` for unknown labels) and a permissive
//! `from_label` that falls back to the neutral variant. The engine always
//! goes through `from_label`, so loosely validated UI strings never fail a
//! query; unknown labels are logged at `warn` level instead.
//!
//! Serde uses the same labels in both directions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase, trim, and unify separators so "Slight_Uphill", "slight uphill"
/// and " SLIGHT-UPHILL " compare equal.
fn normalize(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace(['_', '-', '\u{2013}'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! label_conversions {
    ($ty:ident) => {
        impl $ty {
            /// Permissive parse: unknown labels map to the neutral default.
            pub fn from_label(label: &str) -> Self {
                match Self::parse(label) {
                    Some(value) => value,
                    None => {
                        if !label.trim().is_empty() {
                            tracing::warn!(
                                label,
                                fallback = Self::default().label(),
                                concat!("unrecognized ", stringify!($ty), " label")
                            );
                        }
                        Self::default()
                    }
                }
            }
        }

        impl From<String> for $ty {
            fn from(label: String) -> Self {
                Self::from_label(&label)
            }
        }

        impl From<$ty> for &'static str {
            fn from(value: $ty) -> Self {
                value.label()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

// ============================================================================
// Wind
// ============================================================================

/// Wind direction relative to the target line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum WindDirection {
    #[default]
    None,
    Into,
    Down,
    Cross,
}

impl WindDirection {
    pub const ALL: [WindDirection; 4] =
        [WindDirection::None, WindDirection::Into, WindDirection::Down, WindDirection::Cross];

    pub fn parse(label: &str) -> Option<Self> {
        let l = normalize(label);
        if l == "none" || l == "calm" || l == "no wind" {
            Some(WindDirection::None)
        } else if l.starts_with("into") || l.starts_with("head") {
            Some(WindDirection::Into)
        } else if l.starts_with("down") || l.starts_with("tail") || l.starts_with("helping") {
            Some(WindDirection::Down)
        } else if l.starts_with("cross") {
            Some(WindDirection::Cross)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindDirection::None => "None",
            WindDirection::Into => "Into",
            WindDirection::Down => "Down",
            WindDirection::Cross => "Cross",
        }
    }
}

label_conversions!(WindDirection);

/// Categorical wind strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum WindStrength {
    #[default]
    None,
    Light,
    Medium,
    Heavy,
}

impl WindStrength {
    pub const ALL: [WindStrength; 4] =
        [WindStrength::None, WindStrength::Light, WindStrength::Medium, WindStrength::Heavy];

    pub fn parse(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "none" | "calm" => Some(WindStrength::None),
            "light" => Some(WindStrength::Light),
            "medium" | "moderate" => Some(WindStrength::Medium),
            "heavy" | "strong" => Some(WindStrength::Heavy),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindStrength::None => "None",
            WindStrength::Light => "Light",
            WindStrength::Medium => "Medium",
            WindStrength::Heavy => "Heavy",
        }
    }

    /// Nominal wind speed in mph
    pub fn mph(&self) -> f64 {
        match self {
            WindStrength::None => 0.0,
            WindStrength::Light => 5.0,
            WindStrength::Medium => 10.0,
            WindStrength::Heavy => 20.0,
        }
    }
}

label_conversions!(WindStrength);

// ============================================================================
// Elevation / Lie / Surface
// ============================================================================

/// Elevation change between ball and target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Elevation {
    #[default]
    Flat,
    SlightUphill,
    ModerateUphill,
    SlightDownhill,
    ModerateDownhill,
}

impl Elevation {
    pub const ALL: [Elevation; 5] = [
        Elevation::Flat,
        Elevation::SlightUphill,
        Elevation::ModerateUphill,
        Elevation::SlightDownhill,
        Elevation::ModerateDownhill,
    ];

    /// "Severe"/"steep" slopes map to the moderate categories, the
    /// steepest the table knows.
    pub fn parse(label: &str) -> Option<Self> {
        let l = normalize(label);
        if l == "flat" || l == "level" {
            Some(Elevation::Flat)
        } else if l.starts_with("slight up") {
            Some(Elevation::SlightUphill)
        } else if l.starts_with("moderate up") || l.starts_with("severe up") || l.starts_with("steep up") {
            Some(Elevation::ModerateUphill)
        } else if l.starts_with("slight down") {
            Some(Elevation::SlightDownhill)
        } else if l.starts_with("moderate down")
            || l.starts_with("severe down")
            || l.starts_with("steep down")
        {
            Some(Elevation::ModerateDownhill)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Elevation::Flat => "Flat",
            Elevation::SlightUphill => "Slight Uphill",
            Elevation::ModerateUphill => "Moderate Uphill",
            Elevation::SlightDownhill => "Slight Downhill",
            Elevation::ModerateDownhill => "Moderate Downhill",
        }
    }

    /// Yards added to the target (negative plays shorter)
    pub fn yards(&self) -> f64 {
        match self {
            Elevation::Flat => 0.0,
            Elevation::SlightUphill => 5.0,
            Elevation::ModerateUphill => 10.0,
            Elevation::SlightDownhill => -5.0,
            Elevation::ModerateDownhill => -10.0,
        }
    }
}

label_conversions!(Elevation);

/// Strike quality expected from the lie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum LieQuality {
    #[default]
    Good,
    Ok,
    Bad,
}

impl LieQuality {
    pub const ALL: [LieQuality; 3] = [LieQuality::Good, LieQuality::Ok, LieQuality::Bad];

    pub fn parse(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "good" | "clean" => Some(LieQuality::Good),
            "ok" | "okay" | "light rough" | "first cut" => Some(LieQuality::Ok),
            "bad" | "poor" | "thick rough" | "heavy rough" | "deep rough" => Some(LieQuality::Bad),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LieQuality::Good => "Good",
            LieQuality::Ok => "Ok",
            LieQuality::Bad => "Bad",
        }
    }

    /// Plays-like distance multiplier (reduced strike efficiency)
    pub fn distance_multiplier(&self) -> f64 {
        match self {
            LieQuality::Good => 1.00,
            LieQuality::Ok => 1.05,
            LieQuality::Bad => 1.12,
        }
    }

    /// Dispersion multiplier, non-decreasing as the lie worsens
    pub fn dispersion_factor(&self) -> f64 {
        match self {
            LieQuality::Good => 1.0,
            LieQuality::Ok => 1.1,
            LieQuality::Bad => 1.3,
        }
    }
}

label_conversions!(LieQuality);

/// Surface the ball sits on (or comes to rest on)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Surface {
    Tee,
    #[default]
    Fairway,
    Green,
    Rough,
    Sand,
    Recovery,
}

impl Surface {
    pub const ALL: [Surface; 6] = [
        Surface::Tee,
        Surface::Fairway,
        Surface::Green,
        Surface::Rough,
        Surface::Sand,
        Surface::Recovery,
    ];

    /// Accepts UI labels such as "Light Rough", "Heavy rough" or "Bunker".
    pub fn parse(label: &str) -> Option<Self> {
        let l = normalize(label);
        if l.contains("sand") || l.contains("bunker") {
            Some(Surface::Sand)
        } else if l.contains("fairway") {
            Some(Surface::Fairway)
        } else if l.contains("rough") {
            Some(Surface::Rough)
        } else if l.contains("recovery") || l.contains("trees") {
            Some(Surface::Recovery)
        } else if l.contains("green") {
            Some(Surface::Green)
        } else if l.contains("tee") {
            Some(Surface::Tee)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Surface::Tee => "tee",
            Surface::Fairway => "fairway",
            Surface::Green => "green",
            Surface::Rough => "rough",
            Surface::Sand => "sand",
            Surface::Recovery => "recovery",
        }
    }

    /// Multiplier over the fairway expected-strokes curve.
    /// Not meaningful for `Green`, which has its own putting table.
    pub fn strokes_multiplier(&self) -> f64 {
        match self {
            Surface::Tee | Surface::Fairway | Surface::Green => 1.00,
            Surface::Rough => 1.08,
            Surface::Sand => 1.15,
            Surface::Recovery => 1.25,
        }
    }

    pub fn dispersion_factor(&self) -> f64 {
        match self {
            Surface::Tee | Surface::Fairway | Surface::Green => 1.0,
            Surface::Rough => 1.15,
            Surface::Sand => 1.30,
            Surface::Recovery => 1.45,
        }
    }
}

label_conversions!(Surface);

// ============================================================================
// Player / Strategy
// ============================================================================

/// Known distance bias of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Tendency {
    #[default]
    Neutral,
    UsuallyShort,
    UsuallyLong,
}

impl Tendency {
    pub fn parse(label: &str) -> Option<Self> {
        let l = normalize(label);
        if l == "neutral" || l == "none" {
            Some(Tendency::Neutral)
        } else if l.contains("short") {
            Some(Tendency::UsuallyShort)
        } else if l.contains("long") {
            Some(Tendency::UsuallyLong)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tendency::Neutral => "Neutral",
            Tendency::UsuallyShort => "Usually Short",
            Tendency::UsuallyLong => "Usually Long",
        }
    }

    /// Direction of the bias correction: a short hitter needs more club.
    pub fn sign(&self) -> f64 {
        match self {
            Tendency::Neutral => 0.0,
            Tendency::UsuallyShort => 1.0,
            Tendency::UsuallyLong => -1.0,
        }
    }
}

label_conversions!(Tendency);

/// Risk appetite applied to trouble penalties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Strategy {
    Conservative,
    #[default]
    Balanced,
    Aggressive,
}

impl Strategy {
    pub fn parse(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "conservative" | "safe" => Some(Strategy::Conservative),
            "balanced" => Some(Strategy::Balanced),
            "aggressive" => Some(Strategy::Aggressive),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Conservative => "Conservative",
            Strategy::Balanced => "Balanced",
            Strategy::Aggressive => "Aggressive",
        }
    }
}

label_conversions!(Strategy);

/// How punishing a miss in one direction is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum TroubleSeverity {
    #[default]
    None,
    Mild,
    Severe,
}

impl TroubleSeverity {
    pub fn parse(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "none" | "no" => Some(TroubleSeverity::None),
            "mild" | "some" => Some(TroubleSeverity::Mild),
            "severe" | "big" => Some(TroubleSeverity::Severe),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TroubleSeverity::None => "None",
            TroubleSeverity::Mild => "Mild",
            TroubleSeverity::Severe => "Severe",
        }
    }

    pub fn is_present(&self) -> bool {
        *self != TroubleSeverity::None
    }

    /// Multiplicative difficulty of the next shot after finding this trouble
    pub fn difficulty_factor(&self) -> f64 {
        match self {
            TroubleSeverity::None => 1.0,
            TroubleSeverity::Mild => 1.15,
            TroubleSeverity::Severe => 1.30,
        }
    }
}

label_conversions!(TroubleSeverity);

/// Green receptiveness; drives how much the full-swing clubs release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum GreenFirmness {
    Soft,
    #[default]
    Medium,
    Firm,
}

impl GreenFirmness {
    pub fn parse(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "soft" | "receptive" => Some(GreenFirmness::Soft),
            "medium" | "normal" => Some(GreenFirmness::Medium),
            "firm" | "hard" => Some(GreenFirmness::Firm),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GreenFirmness::Soft => "Soft",
            GreenFirmness::Medium => "Medium",
            GreenFirmness::Firm => "Firm",
        }
    }

    pub fn roll_multiplier(&self) -> f64 {
        match self {
            GreenFirmness::Soft => 0.6,
            GreenFirmness::Medium => 1.0,
            GreenFirmness::Firm => 1.4,
        }
    }
}

label_conversions!(GreenFirmness);

/// Ball-striking consistency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SkillLevel {
    HighlyConsistent,
    #[default]
    Intermediate,
    Recreational,
}

impl SkillLevel {
    pub fn parse(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "highly consistent" | "consistent" | "advanced" => Some(SkillLevel::HighlyConsistent),
            "intermediate" => Some(SkillLevel::Intermediate),
            "recreational" | "beginner" => Some(SkillLevel::Recreational),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::HighlyConsistent => "Highly Consistent",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Recreational => "Recreational",
        }
    }

    /// Dispersion scale factor
    pub fn factor(&self) -> f64 {
        match self {
            SkillLevel::HighlyConsistent => 0.8,
            SkillLevel::Intermediate => 1.0,
            SkillLevel::Recreational => 1.3,
        }
    }
}

label_conversions!(SkillLevel);

/// Strokes-gained baseline the player compares against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum HandicapProfile {
    #[default]
    TourScratch,
    FiveToNine,
    TenToFourteen,
    FifteenPlus,
}

impl HandicapProfile {
    pub fn parse(label: &str) -> Option<Self> {
        let l = normalize(label);
        if l.contains("tour") || l.contains("scratch") {
            Some(HandicapProfile::TourScratch)
        } else if l.contains("5 9") {
            Some(HandicapProfile::FiveToNine)
        } else if l.contains("10 14") {
            Some(HandicapProfile::TenToFourteen)
        } else if l.contains("15+") {
            Some(HandicapProfile::FifteenPlus)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HandicapProfile::TourScratch => "Tour / Scratch",
            HandicapProfile::FiveToNine => "5-9 Handicap",
            HandicapProfile::TenToFourteen => "10-14 Handicap",
            HandicapProfile::FifteenPlus => "15+ Handicap",
        }
    }

    /// Expected-strokes scale (>1 = weaker baseline player)
    pub fn factor(&self) -> f64 {
        match self {
            HandicapProfile::TourScratch => 1.00,
            HandicapProfile::FiveToNine => 1.08,
            HandicapProfile::TenToFourteen => 1.15,
            HandicapProfile::FifteenPlus => 1.22,
        }
    }
}

label_conversions!(HandicapProfile);

/// Landing-area width off the tee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum FairwayWidth {
    Narrow,
    #[default]
    Medium,
    Wide,
}

impl FairwayWidth {
    pub fn parse(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "narrow" | "tight" => Some(FairwayWidth::Narrow),
            "medium" | "average" => Some(FairwayWidth::Medium),
            "wide" | "generous" => Some(FairwayWidth::Wide),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FairwayWidth::Narrow => "Narrow",
            FairwayWidth::Medium => "Medium",
            FairwayWidth::Wide => "Wide",
        }
    }

    pub fn yards(&self) -> f64 {
        match self {
            FairwayWidth::Narrow => 25.0,
            FairwayWidth::Medium => 35.0,
            FairwayWidth::Wide => 45.0,
        }
    }
}

label_conversions!(FairwayWidth);
