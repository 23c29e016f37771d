//! Bag model builder
//!
//! Scales a 100 mph reference bag to the player's driver clubhead speed and
//! expands the wedges into partial-swing scoring shots. The result is a pure
//! function of (speed, green firmness); callers cache it per speed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::error::{ensure_finite, CaddyError, Result};
use crate::models::{
    CandidateShot, Club, ClubCategory, FullBagRow, GreenFirmness, SwingType, Trajectory,
};

/// Speed every table below is calibrated at (mph)
pub const BASELINE_DRIVER_SPEED: f64 = 100.0;

// ============================================================================
// Reference tables (100 mph)
// ============================================================================

/// club, ball speed (mph), launch (°), spin (rpm), carry, total
const FULL_BAG_BASE: [(Club, f64, f64, f64, f64, f64); 13] = [
    (Club::Driver, 148.0, 13.0, 2500.0, 233.0, 253.0),
    (Club::ThreeWood, 140.0, 14.5, 3300.0, 216.0, 233.0),
    (Club::ThreeHybrid, 135.0, 16.0, 3900.0, 202.0, 220.0),
    (Club::FourIron, 128.0, 14.5, 4600.0, 182.0, 194.0),
    (Club::FiveIron, 122.0, 15.5, 5000.0, 172.0, 185.0),
    (Club::SixIron, 116.0, 17.0, 5400.0, 162.0, 172.0),
    (Club::SevenIron, 110.0, 18.5, 6200.0, 151.0, 161.0),
    (Club::EightIron, 104.0, 20.5, 7000.0, 139.0, 149.0),
    (Club::NineIron, 98.0, 23.0, 7800.0, 127.0, 137.0),
    (Club::PitchingWedge, 92.0, 28.0, 8500.0, 118.0, 124.0),
    (Club::GapWedge, 86.0, 30.0, 9000.0, 104.0, 110.0),
    (Club::SandWedge, 81.0, 32.0, 9500.0, 89.0, 95.0),
    (Club::LobWedge, 75.0, 34.0, 10500.0, 75.0, 81.0),
];

/// Stock full-swing carry of each wedge when hit as a scoring shot
fn full_wedge_carry(club: Club) -> Option<f64> {
    match club {
        Club::PitchingWedge => Some(121.0),
        Club::GapWedge => Some(107.0),
        Club::SandWedge => Some(92.0),
        Club::LobWedge => Some(78.0),
        _ => None,
    }
}

const SCORING_DEFS: [(Club, SwingType, Trajectory); 18] = [
    (Club::PitchingWedge, SwingType::Full, Trajectory::MediumHigh),
    (Club::PitchingWedge, SwingType::ChokeDown, Trajectory::Medium),
    (Club::PitchingWedge, SwingType::ThreeQuarter, Trajectory::Medium),
    (Club::SandWedge, SwingType::Full, Trajectory::High),
    (Club::LobWedge, SwingType::Full, Trajectory::High),
    (Club::SandWedge, SwingType::ThreeQuarter, Trajectory::MediumHigh),
    (Club::PitchingWedge, SwingType::Half, Trajectory::MediumLow),
    (Club::LobWedge, SwingType::ThreeQuarter, Trajectory::Medium),
    (Club::SandWedge, SwingType::Half, Trajectory::MediumLow),
    (Club::PitchingWedge, SwingType::Quarter, Trajectory::Low),
    (Club::LobWedge, SwingType::Half, Trajectory::MediumLow),
    (Club::GapWedge, SwingType::Quarter, Trajectory::Low),
    (Club::SandWedge, SwingType::Quarter, Trajectory::Low),
    (Club::LobWedge, SwingType::Quarter, Trajectory::Low),
    (Club::GapWedge, SwingType::Full, Trajectory::MediumHigh),
    (Club::GapWedge, SwingType::ChokeDown, Trajectory::Medium),
    (Club::GapWedge, SwingType::ThreeQuarter, Trajectory::Medium),
    (Club::GapWedge, SwingType::Half, Trajectory::MediumLow),
];

// ============================================================================
// Bag
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bag {
    pub reference_speed: f64,
    pub green_firmness: GreenFirmness,
    /// Full swings of every club followed by the scoring shots
    pub candidates: Vec<CandidateShot>,
    /// Wedge full and partial swings
    pub scoring_shots: Vec<CandidateShot>,
    /// Yardage table, one row per club
    pub full_bag: Vec<FullBagRow>,
}

impl Bag {
    pub fn row(&self, club: Club) -> Option<&FullBagRow> {
        self.full_bag.iter().find(|row| row.club == club)
    }

    /// Replace scaled carries with measured range carries.
    ///
    /// Each overridden club keeps its total/carry ratio, and every candidate
    /// hit with that club (partials included) is rescaled by the same factor.
    pub fn calibrated(&self, measured_carries: &HashMap<Club, f64>) -> Result<Bag> {
        let mut bag = self.clone();
        for (&club, &measured) in measured_carries {
            let measured = ensure_finite("measured carry", measured)?;
            if measured <= 0.0 {
                return Err(CaddyError::invalid_input(format!(
                    "measured carry for {club} must be positive, got {measured}"
                )));
            }
            let Some(row) = bag.full_bag.iter_mut().find(|row| row.club == club) else {
                continue;
            };
            let ratio = measured / row.carry;
            row.carry = measured;
            row.total *= ratio;

            for shot in bag.candidates.iter_mut().chain(bag.scoring_shots.iter_mut()) {
                if shot.club == club {
                    shot.carry *= ratio;
                    shot.total *= ratio;
                }
            }
            debug!(%club, measured, ratio, "calibrated club from range carry");
        }
        Ok(bag)
    }
}

#[inline]
fn scale_value(base_value: f64, driver_speed_mph: f64) -> f64 {
    base_value * (driver_speed_mph / BASELINE_DRIVER_SPEED)
}

fn validate_speed(reference_speed: f64) -> Result<f64> {
    let speed = ensure_finite("reference speed", reference_speed)?;
    if speed <= 0.0 {
        return Err(CaddyError::invalid_input(format!(
            "reference speed must be positive, got {speed}"
        )));
    }
    Ok(speed)
}

fn build_full_bag(speed: f64, firmness: GreenFirmness) -> Vec<FullBagRow> {
    FULL_BAG_BASE
        .iter()
        .map(|&(club, ball_speed, launch, spin, carry, total)| {
            let roll = scale_value(total - carry, speed) * firmness.roll_multiplier();
            let carry = scale_value(carry, speed);
            FullBagRow {
                club,
                ball_speed_mph: scale_value(ball_speed, speed),
                launch_deg: launch,
                spin_rpm: spin,
                carry,
                total: carry + roll.max(0.0),
            }
        })
        .collect()
}

/// Scoring shots assume no roll
fn build_scoring_shots(speed: f64) -> Result<Vec<CandidateShot>> {
    SCORING_DEFS
        .iter()
        .filter_map(|&(club, swing, trajectory)| {
            full_wedge_carry(club).map(|base| (club, swing, trajectory, base))
        })
        .map(|(club, swing, trajectory, base)| {
            let carry = scale_value(base, speed) * swing.multiplier();
            CandidateShot::new(club, swing, trajectory, carry, carry)
        })
        .collect()
}

/// Build the bag at medium green firmness
pub fn build_bag(reference_speed: f64) -> Result<Bag> {
    build_bag_for_green(reference_speed, GreenFirmness::Medium)
}

/// Build the bag with roll scaled for the green firmness
pub fn build_bag_for_green(reference_speed: f64, firmness: GreenFirmness) -> Result<Bag> {
    let speed = validate_speed(reference_speed)?;
    let full_bag = build_full_bag(speed, firmness);
    let scoring_shots = build_scoring_shots(speed)?;

    let mut candidates = full_bag
        .iter()
        .map(|row| CandidateShot::full(row.club, row.carry, row.total))
        .collect::<Result<Vec<_>>>()?;
    candidates.extend(scoring_shots.iter().cloned());

    debug!(
        speed,
        firmness = firmness.label(),
        candidates = candidates.len(),
        "built bag"
    );

    Ok(Bag { reference_speed: speed, green_firmness: firmness, candidates, scoring_shots, full_bag })
}

/// Carry to aim for so that roll-out finishes at `target_total`
pub fn compute_optimal_carry_for_target(target_total: f64, category: ClubCategory) -> f64 {
    let roll_allowance = match category {
        ClubCategory::Driver | ClubCategory::Wood | ClubCategory::Hybrid => 5.0,
        ClubCategory::LongIron | ClubCategory::MidIron => 3.0,
        ClubCategory::ShortIron | ClubCategory::ScoringWedge => 1.0,
    };
    (target_total - roll_allowance).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_speed_reproduces_tables() {
        let bag = build_bag(100.0).unwrap();
        assert_eq!(bag.full_bag.len(), 13);
        assert_eq!(bag.scoring_shots.len(), 18);
        assert_eq!(bag.candidates.len(), 31);

        let seven = bag.row(Club::SevenIron).unwrap();
        assert!((seven.carry - 151.0).abs() < 1e-9);
        assert!((seven.total - 161.0).abs() < 1e-9);
        assert!((seven.ball_speed_mph - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_speed_scaling() {
        let bag = build_bag(110.0).unwrap();
        let driver = bag.row(Club::Driver).unwrap();
        assert!((driver.carry - 256.3).abs() < 1e-9);
        assert!((driver.total - 278.3).abs() < 1e-9);
    }

    #[test]
    fn test_partial_swing_multipliers() {
        let bag = build_bag(100.0).unwrap();
        let sw_half = bag
            .scoring_shots
            .iter()
            .find(|s| s.club == Club::SandWedge && s.swing == SwingType::Half)
            .unwrap();
        assert!((sw_half.carry - 92.0 * 0.60).abs() < 1e-9);
        assert_eq!(sw_half.total, sw_half.carry);
        assert_eq!(sw_half.trajectory, Trajectory::MediumLow);
        assert!(bag.scoring_shots.iter().all(|s| s.category == ClubCategory::ScoringWedge));
    }

    #[test]
    fn test_every_shot_respects_invariant() {
        for speed in [60.0, 90.0, 105.0, 120.0] {
            for firmness in [GreenFirmness::Soft, GreenFirmness::Medium, GreenFirmness::Firm] {
                let bag = build_bag_for_green(speed, firmness).unwrap();
                for shot in &bag.candidates {
                    assert!(shot.total >= shot.carry && shot.carry >= 0.0, "{shot:?}");
                    assert_eq!(shot.category, shot.club.category());
                }
            }
        }
    }

    #[test]
    fn test_firm_greens_roll_further() {
        let soft = build_bag_for_green(100.0, GreenFirmness::Soft).unwrap();
        let firm = build_bag_for_green(100.0, GreenFirmness::Firm).unwrap();
        let soft_7 = soft.row(Club::SevenIron).unwrap();
        let firm_7 = firm.row(Club::SevenIron).unwrap();
        assert_eq!(soft_7.carry, firm_7.carry);
        assert!((soft_7.total - 157.0).abs() < 1e-9);
        assert!((firm_7.total - 165.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        assert!(matches!(build_bag(0.0), Err(CaddyError::InvalidInput(_))));
        assert!(matches!(build_bag(-95.0), Err(CaddyError::InvalidInput(_))));
        assert!(matches!(build_bag(f64::NAN), Err(CaddyError::InvalidInput(_))));
    }

    #[test]
    fn test_range_calibration() {
        let bag = build_bag(100.0).unwrap();
        let mut measured = HashMap::new();
        measured.insert(Club::PitchingWedge, 110.0);
        let calibrated = bag.calibrated(&measured).unwrap();

        let pw = calibrated.row(Club::PitchingWedge).unwrap();
        assert_eq!(pw.carry, 110.0);
        assert!((pw.total - 124.0 * 110.0 / 118.0).abs() < 1e-9);

        let ratio = 110.0 / 118.0;
        let pw_half_before = bag
            .scoring_shots
            .iter()
            .find(|s| s.club == Club::PitchingWedge && s.swing == SwingType::Half)
            .unwrap();
        let pw_half_after = calibrated
            .scoring_shots
            .iter()
            .find(|s| s.club == Club::PitchingWedge && s.swing == SwingType::Half)
            .unwrap();
        assert!((pw_half_after.carry - pw_half_before.carry * ratio).abs() < 1e-9);

        // Untouched clubs stay put
        assert_eq!(calibrated.row(Club::SevenIron), bag.row(Club::SevenIron));

        measured.insert(Club::SevenIron, -4.0);
        assert!(bag.calibrated(&measured).is_err());
    }

    #[test]
    fn test_optimal_carry() {
        assert_eq!(compute_optimal_carry_for_target(250.0, ClubCategory::Driver), 245.0);
        assert_eq!(compute_optimal_carry_for_target(160.0, ClubCategory::MidIron), 157.0);
        assert_eq!(compute_optimal_carry_for_target(90.0, ClubCategory::ScoringWedge), 89.0);
        assert_eq!(compute_optimal_carry_for_target(0.5, ClubCategory::ScoringWedge), 0.0);
    }
}
