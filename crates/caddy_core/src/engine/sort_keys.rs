//! Stable ranking comparators
//!
//! Recommendations are ordered by strokes gained, with ties broken by the
//! smaller distance error and finally by the candidate's position in the bag.
//! Float keys go through `total_cmp` so NaN can never make a sort panic or
//! depend on platform.
//!
//! ## Usage
//! ```ignore
//! ranked.sort_by(|a, b| compare_recommendations(a, a_idx, b, b_idx));
//! ```

use std::cmp::Ordering;

use crate::models::RankedRecommendation;

// ============================================================================
// Float Comparison Helpers
// ============================================================================

/// Score descending, then `tiebreak` ascending, then index ascending.
#[inline]
pub fn compare_score_desc_stable(
    a_score: f64,
    a_tiebreak: f64,
    a_idx: usize,
    b_score: f64,
    b_tiebreak: f64,
    b_idx: usize,
) -> Ordering {
    b_score
        .total_cmp(&a_score)
        .then_with(|| a_tiebreak.total_cmp(&b_tiebreak))
        .then_with(|| a_idx.cmp(&b_idx))
}

/// Score ascending, then index ascending.
#[inline]
pub fn compare_score_asc_stable(a_score: f64, a_idx: usize, b_score: f64, b_idx: usize) -> Ordering {
    a_score.total_cmp(&b_score).then_with(|| a_idx.cmp(&b_idx))
}

/// Ranking order for recommendations: strokes gained desc, |diff| asc.
#[inline]
pub fn compare_recommendations(
    a: &RankedRecommendation,
    a_idx: usize,
    b: &RankedRecommendation,
    b_idx: usize,
) -> Ordering {
    compare_score_desc_stable(a.strokes_gained, a.abs_diff(), a_idx, b.strokes_gained, b.abs_diff(), b_idx)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_score_desc_stable() {
        // Higher score first
        assert_eq!(compare_score_desc_stable(0.3, 9.0, 5, 0.1, 1.0, 3), Ordering::Less);
        // Equal score: smaller tiebreak first
        assert_eq!(compare_score_desc_stable(0.2, 2.0, 7, 0.2, 5.0, 1), Ordering::Less);
        // Everything equal but the index
        assert_eq!(compare_score_desc_stable(0.2, 2.0, 3, 0.2, 2.0, 7), Ordering::Less);
        assert_eq!(compare_score_desc_stable(0.2, 2.0, 3, 0.2, 2.0, 3), Ordering::Equal);
    }

    #[test]
    fn test_compare_score_asc_stable() {
        assert_eq!(compare_score_asc_stable(3.9, 4, 4.1, 0), Ordering::Less);
        assert_eq!(compare_score_asc_stable(4.0, 1, 4.0, 2), Ordering::Less);
    }

    #[test]
    fn test_nan_sorts_deterministically() {
        // Positive NaN is above every number under total_cmp, so it ranks first
        assert_eq!(compare_score_desc_stable(f64::NAN, 0.0, 1, 0.5, 0.0, 2), Ordering::Less);

        let mut scores = vec![(0.1, 0usize), (f64::NAN, 1), (0.4, 2), (0.1, 3)];
        scores.sort_by(|a, b| compare_score_desc_stable(a.0, 0.0, a.1, b.0, 0.0, b.1));
        let order: Vec<usize> = scores.iter().map(|s| s.1).collect();
        assert_eq!(order, vec![1, 2, 0, 3]);
    }
}
