//! Expected strokes to hole out
//!
//! Piecewise-linear anchor tables in the spirit of tour strokes-gained
//! baselines. Off-fairway surfaces scale the fairway curve; the green has its
//! own putting table. Outside a table's domain the end anchors are held.

use crate::models::Surface;

/// (yards to hole, strokes) from the fairway
const FAIRWAY_TABLE: &[(f64, f64)] = &[
    (10.0, 2.18),
    (20.0, 2.40),
    (30.0, 2.52),
    (50.0, 2.60),
    (75.0, 2.72),
    (100.0, 2.80),
    (125.0, 2.87),
    (150.0, 2.98),
    (175.0, 3.08),
    (200.0, 3.19),
    (225.0, 3.32),
    (250.0, 3.45),
    (300.0, 3.71),
    (350.0, 3.95),
    (400.0, 4.10),
    (450.0, 4.25),
    (500.0, 4.45),
    (550.0, 4.65),
    (600.0, 4.85),
];

/// (yards to hole, putts) on the green
const GREEN_TABLE: &[(f64, f64)] = &[
    (0.0, 1.00),
    (1.0, 1.04),
    (2.0, 1.34),
    (3.0, 1.55),
    (5.0, 1.73),
    (10.0, 1.90),
    (15.0, 2.00),
    (20.0, 2.09),
    (30.0, 2.25),
];

/// Linear interpolation over sorted anchors, clamped at both ends.
fn interpolate(table: &[(f64, f64)], distance: f64) -> f64 {
    let (first_x, first_y) = table[0];
    let (last_x, last_y) = table[table.len() - 1];

    if distance <= first_x {
        return first_y;
    }
    if distance >= last_x {
        return last_y;
    }

    for pair in table.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if distance <= x1 {
            let t = (distance - x0) / (x1 - x0);
            return y0 + t * (y1 - y0);
        }
    }
    last_y
}

/// Expected strokes from `distance` yards on `surface`.
///
/// Negative or NaN distances clamp to the start of the table.
/// `handicap_factor` scales the result (>1 weaker, <1 stronger); non-positive
/// values are treated as 1.
pub fn expected_strokes(distance: f64, surface: Surface, handicap_factor: f64) -> f64 {
    let distance = distance.max(0.0);
    let base = match surface {
        Surface::Green => interpolate(GREEN_TABLE, distance),
        other => interpolate(FAIRWAY_TABLE, distance) * other.strokes_multiplier(),
    };

    let hf = if handicap_factor.is_finite() && handicap_factor > 0.0 {
        handicap_factor
    } else {
        1.0
    };
    base * hf
}
