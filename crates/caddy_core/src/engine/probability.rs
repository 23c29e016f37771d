//! Normal-distribution helpers
//!
//! All functions are pure. A non-positive sigma is treated as a Dirac delta
//! at the mean, so callers never divide by zero.

use std::f64::consts::SQRT_2;

/// Error function, Abramowitz & Stegun 7.1.26 (|error| < 1.5e-7)
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// P(X <= x) for X ~ Normal(mu, sigma)
#[inline]
pub fn normal_cdf(x: f64, mu: f64, sigma: f64) -> f64 {
    if sigma <= 0.0 || !sigma.is_finite() {
        return if x >= mu { 1.0 } else { 0.0 };
    }
    let z = (x - mu) / (sigma * SQRT_2);
    (0.5 * (1.0 + erf(z))).clamp(0.0, 1.0)
}

/// P(lo <= X <= hi)
#[inline]
pub fn prob_between(lo: f64, hi: f64, mu: f64, sigma: f64) -> f64 {
    if hi < lo {
        return 0.0;
    }
    if sigma <= 0.0 || !sigma.is_finite() {
        return if (lo..=hi).contains(&mu) { 1.0 } else { 0.0 };
    }
    (normal_cdf(hi, mu, sigma) - normal_cdf(lo, mu, sigma)).clamp(0.0, 1.0)
}

/// P(|X| <= half_width)
#[inline]
pub fn prob_within(half_width: f64, mu: f64, sigma: f64) -> f64 {
    prob_between(-half_width, half_width, mu, sigma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erf_reference_values() {
        assert!(erf(0.0).abs() < 1e-7);
        assert!((erf(0.5) - 0.520_499_877_8).abs() < 1e-6);
        assert!((erf(1.0) - 0.842_700_792_9).abs() < 1e-6);
        assert!((erf(-1.0) + 0.842_700_792_9).abs() < 1e-6);
        assert!((erf(3.0) - 0.999_977_909_5).abs() < 1e-6);
    }

    #[test]
    fn test_normal_cdf() {
        assert!((normal_cdf(0.0, 0.0, 1.0) - 0.5).abs() < 1e-7);
        assert!((normal_cdf(1.96, 0.0, 1.0) - 0.975).abs() < 1e-3);
        assert!((normal_cdf(160.0, 150.0, 10.0) - 0.8413).abs() < 1e-3);
    }

    #[test]
    fn test_zero_sigma_is_dirac() {
        assert_eq!(normal_cdf(5.0, 5.0, 0.0), 1.0);
        assert_eq!(normal_cdf(4.9, 5.0, 0.0), 0.0);
        assert_eq!(normal_cdf(4.9, 5.0, -3.0), 0.0);
        assert_eq!(prob_within(5.0, 3.0, 0.0), 1.0);
        assert_eq!(prob_within(5.0, 6.0, 0.0), 0.0);
    }

    #[test]
    fn test_prob_within() {
        // ±1σ ≈ 68.3%
        assert!((prob_within(8.0, 0.0, 8.0) - 0.6827).abs() < 1e-3);
        assert_eq!(prob_between(5.0, -5.0, 0.0, 1.0), 0.0);
        // Offset mean lowers the window probability
        assert!(prob_within(5.0, 10.0, 8.0) < prob_within(5.0, 0.0, 8.0));
    }
}
