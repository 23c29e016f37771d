//! Shot dispersion model
//!
//! Depth and lateral 1σ spreads per club category, scaled by player skill
//! and by how bad the lie is. A worse lie never narrows the spread.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::models::{ClubCategory, LieQuality, Surface};

/// Sampling never uses a sigma below this
const MIN_SAMPLE_SIGMA: f64 = 0.1;

/// Base 1σ depth dispersion (yards)
pub fn get_dispersion_sigma(category: ClubCategory) -> f64 {
    match category {
        ClubCategory::ScoringWedge => 5.0,
        ClubCategory::ShortIron => 7.0,
        ClubCategory::MidIron => 8.0,
        ClubCategory::LongIron => 10.0,
        ClubCategory::Hybrid => 12.0,
        ClubCategory::Wood => 14.0,
        ClubCategory::Driver => 16.0,
    }
}

/// Base 1σ lateral dispersion (yards)
pub fn get_lateral_sigma(category: ClubCategory) -> f64 {
    match category {
        ClubCategory::ScoringWedge => 6.0,
        ClubCategory::ShortIron => 8.0,
        ClubCategory::MidIron => 10.0,
        ClubCategory::LongIron => 12.0,
        ClubCategory::Hybrid => 14.0,
        ClubCategory::Wood => 16.0,
        ClubCategory::Driver => 18.0,
    }
}

/// Dispersion multiplier for a loose lie label.
///
/// Surface labels ("Heavy Rough", "bunker", ...) are tried first, then
/// strike-quality labels ("Good", "Ok", "Bad"). Anything else is neutral.
pub fn lie_dispersion_factor(label: &str) -> f64 {
    if let Some(surface) = Surface::parse(label) {
        return surface.dispersion_factor();
    }
    LieQuality::parse(label).map(|quality| quality.dispersion_factor()).unwrap_or(1.0)
}

fn sanitize(factor: f64) -> f64 {
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}

pub fn sigma_depth(category: ClubCategory, skill_factor: f64, lie_factor: f64) -> f64 {
    get_dispersion_sigma(category) * sanitize(skill_factor) * sanitize(lie_factor)
}

pub fn sigma_lateral(category: ClubCategory, skill_factor: f64, lie_factor: f64) -> f64 {
    get_lateral_sigma(category) * sanitize(skill_factor) * sanitize(lie_factor)
}

/// `n` depth outcomes around `center` for charting
pub fn simulate_dispersion_samples<R: Rng + ?Sized>(
    center: f64,
    category: ClubCategory,
    skill_factor: f64,
    n: usize,
    rng: &mut R,
) -> Vec<f64> {
    let sigma = (get_dispersion_sigma(category) * sanitize(skill_factor)).max(MIN_SAMPLE_SIGMA);
    (0..n)
        .map(|_| {
            let z: f64 = StandardNormal.sample(rng);
            center + sigma * z
        })
        .collect()
}
