//! Clubs, swing types and candidate shots

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CaddyError, Result};

/// Dispersion / strokes lookup key for a club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubCategory {
    Driver,
    Wood,
    Hybrid,
    LongIron,
    MidIron,
    ShortIron,
    ScoringWedge,
}

impl ClubCategory {
    pub const ALL: [ClubCategory; 7] = [
        ClubCategory::Driver,
        ClubCategory::Wood,
        ClubCategory::Hybrid,
        ClubCategory::LongIron,
        ClubCategory::MidIron,
        ClubCategory::ShortIron,
        ClubCategory::ScoringWedge,
    ];

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "driver" => Some(ClubCategory::Driver),
            "wood" => Some(ClubCategory::Wood),
            "hybrid" => Some(ClubCategory::Hybrid),
            "long_iron" => Some(ClubCategory::LongIron),
            "mid_iron" => Some(ClubCategory::MidIron),
            "short_iron" => Some(ClubCategory::ShortIron),
            "scoring_wedge" | "wedge" => Some(ClubCategory::ScoringWedge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClubCategory::Driver => "driver",
            ClubCategory::Wood => "wood",
            ClubCategory::Hybrid => "hybrid",
            ClubCategory::LongIron => "long_iron",
            ClubCategory::MidIron => "mid_iron",
            ClubCategory::ShortIron => "short_iron",
            ClubCategory::ScoringWedge => "scoring_wedge",
        }
    }
}

impl fmt::Display for ClubCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The 13 clubs of the modelled bag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Club {
    Driver,
    #[serde(rename = "3W")]
    ThreeWood,
    #[serde(rename = "3H")]
    ThreeHybrid,
    #[serde(rename = "4i")]
    FourIron,
    #[serde(rename = "5i")]
    FiveIron,
    #[serde(rename = "6i")]
    SixIron,
    #[serde(rename = "7i")]
    SevenIron,
    #[serde(rename = "8i")]
    EightIron,
    #[serde(rename = "9i")]
    NineIron,
    #[serde(rename = "PW")]
    PitchingWedge,
    #[serde(rename = "GW")]
    GapWedge,
    #[serde(rename = "SW")]
    SandWedge,
    #[serde(rename = "LW")]
    LobWedge,
}

impl Club {
    pub const ALL: [Club; 13] = [
        Club::Driver,
        Club::ThreeWood,
        Club::ThreeHybrid,
        Club::FourIron,
        Club::FiveIron,
        Club::SixIron,
        Club::SevenIron,
        Club::EightIron,
        Club::NineIron,
        Club::PitchingWedge,
        Club::GapWedge,
        Club::SandWedge,
        Club::LobWedge,
    ];

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "DRIVER" | "1W" => Some(Club::Driver),
            "3W" => Some(Club::ThreeWood),
            "3H" => Some(Club::ThreeHybrid),
            "4I" => Some(Club::FourIron),
            "5I" => Some(Club::FiveIron),
            "6I" => Some(Club::SixIron),
            "7I" => Some(Club::SevenIron),
            "8I" => Some(Club::EightIron),
            "9I" => Some(Club::NineIron),
            "PW" => Some(Club::PitchingWedge),
            "GW" | "AW" => Some(Club::GapWedge),
            "SW" => Some(Club::SandWedge),
            "LW" => Some(Club::LobWedge),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Club::Driver => "Driver",
            Club::ThreeWood => "3W",
            Club::ThreeHybrid => "3H",
            Club::FourIron => "4i",
            Club::FiveIron => "5i",
            Club::SixIron => "6i",
            Club::SevenIron => "7i",
            Club::EightIron => "8i",
            Club::NineIron => "9i",
            Club::PitchingWedge => "PW",
            Club::GapWedge => "GW",
            Club::SandWedge => "SW",
            Club::LobWedge => "LW",
        }
    }

    /// Fixed club → category mapping
    pub fn category(&self) -> ClubCategory {
        match self {
            Club::Driver => ClubCategory::Driver,
            Club::ThreeWood => ClubCategory::Wood,
            Club::ThreeHybrid => ClubCategory::Hybrid,
            Club::FourIron | Club::FiveIron => ClubCategory::LongIron,
            Club::SixIron | Club::SevenIron => ClubCategory::MidIron,
            Club::EightIron | Club::NineIron => ClubCategory::ShortIron,
            Club::PitchingWedge | Club::GapWedge | Club::SandWedge | Club::LobWedge => {
                ClubCategory::ScoringWedge
            }
        }
    }

    pub fn is_wedge(&self) -> bool {
        self.category() == ClubCategory::ScoringWedge
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Swing length; partial swings scale the club's full carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwingType {
    Full,
    #[serde(rename = "Choke-Down")]
    ChokeDown,
    #[serde(rename = "3/4")]
    ThreeQuarter,
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "1/4")]
    Quarter,
}

impl SwingType {
    pub fn multiplier(&self) -> f64 {
        match self {
            SwingType::Full => 1.00,
            SwingType::ChokeDown => 0.94,
            SwingType::ThreeQuarter => 0.80,
            SwingType::Half => 0.60,
            SwingType::Quarter => 0.40,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SwingType::Full => "Full",
            SwingType::ChokeDown => "Choke-Down",
            SwingType::ThreeQuarter => "3/4",
            SwingType::Half => "1/2",
            SwingType::Quarter => "1/4",
        }
    }
}

impl fmt::Display for SwingType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ball-flight height label shown next to a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trajectory {
    Stock,
    Low,
    #[serde(rename = "Medium-Low")]
    MediumLow,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
}

impl Trajectory {
    pub fn label(&self) -> &'static str {
        match self {
            Trajectory::Stock => "Stock",
            Trajectory::Low => "Low",
            Trajectory::MediumLow => "Medium-Low",
            Trajectory::Medium => "Medium",
            Trajectory::MediumHigh => "Medium-High",
            Trajectory::High => "High",
        }
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One (club, swing) combination available to the player.
///
/// Invariant: `total >= carry >= 0`, enforced by [`CandidateShot::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CandidateShotRecord")]
pub struct CandidateShot {
    pub club: Club,
    pub swing: SwingType,
    pub trajectory: Trajectory,
    /// Air distance (yards)
    pub carry: f64,
    /// Carry plus roll (yards)
    pub total: f64,
    pub category: ClubCategory,
}

impl CandidateShot {
    pub fn new(
        club: Club,
        swing: SwingType,
        trajectory: Trajectory,
        carry: f64,
        total: f64,
    ) -> Result<Self> {
        if !carry.is_finite() || !total.is_finite() {
            return Err(CaddyError::invalid_input(format!(
                "{club} {swing}: distances must be finite"
            )));
        }
        if carry < 0.0 || total < carry {
            return Err(CaddyError::invalid_input(format!(
                "{club} {swing}: expected total >= carry >= 0, got carry {carry:.1} total {total:.1}"
            )));
        }
        Ok(Self { club, swing, trajectory, carry, total, category: club.category() })
    }

    /// Full swing with a stock trajectory
    pub fn full(club: Club, carry: f64, total: f64) -> Result<Self> {
        Self::new(club, SwingType::Full, Trajectory::Stock, carry, total)
    }

    pub fn roll(&self) -> f64 {
        self.total - self.carry
    }

    /// e.g. "7i Full" or "SW 1/2"
    pub fn name(&self) -> String {
        format!("{} {}", self.club, self.swing)
    }
}

/// Incoming form of a [`CandidateShot`]; the category is derived from the club
#[derive(Deserialize)]
struct CandidateShotRecord {
    club: Club,
    swing: SwingType,
    trajectory: Trajectory,
    carry: f64,
    total: f64,
}

impl TryFrom<CandidateShotRecord> for CandidateShot {
    type Error = CaddyError;

    fn try_from(record: CandidateShotRecord) -> Result<Self> {
        Self::new(record.club, record.swing, record.trajectory, record.carry, record.total)
    }
}

/// Yardage-table row for one full-swing club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullBagRow {
    pub club: Club,
    pub ball_speed_mph: f64,
    pub launch_deg: f64,
    pub spin_rpm: f64,
    pub carry: f64,
    pub total: f64,
}

impl FullBagRow {
    pub fn category(&self) -> ClubCategory {
        self.club.category()
    }
}
