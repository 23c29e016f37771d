//! Moist-air density from temperature and humidity.
//!
//! Ideal gas for the dry-air and water-vapour partial pressures, with the
//! saturation vapour pressure from the Tetens formula.

/// Sea-level standard pressure (Pa)
pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;

/// Specific gas constant of dry air (J/(kg·K))
const R_DRY: f64 = 287.058;
/// Specific gas constant of water vapour (J/(kg·K))
const R_VAPOR: f64 = 461.495;

#[inline]
pub fn fahrenheit_to_celsius(temp_f: f64) -> f64 {
    (temp_f - 32.0) * 5.0 / 9.0
}

/// Saturation vapour pressure (Pa), Tetens
pub fn saturation_vapor_pressure_pa(temp_c: f64) -> f64 {
    let hpa = 6.1078 * 10f64.powf(7.5 * temp_c / (temp_c + 237.3));
    hpa * 100.0
}

/// Air density (kg/m³) at `temp_f`, relative humidity `rh` (0..1) and
/// station pressure `pressure_pa`
pub fn air_density(temp_f: f64, rh: f64, pressure_pa: f64) -> f64 {
    let temp_c = fahrenheit_to_celsius(temp_f);
    let temp_k = temp_c + 273.15;
    let p_vapor = rh.clamp(0.0, 1.0) * saturation_vapor_pressure_pa(temp_c);
    let p_dry = (pressure_pa - p_vapor).max(0.0);
    p_dry / (R_DRY * temp_k) + p_vapor / (R_VAPOR * temp_k)
}
