//! Vapor Pressure Deficit with Psychrometric Physics
//!
//! ## Physics Background
//!
//! ### Saturation Vapor Pressure
//!
//! Warm air can hold more water vapor than cold air. The partial pressure of
//! water vapor in saturated air grows roughly exponentially with temperature
//! and is well approximated by the Tetens equation:
//!
//! ```text
//! es(T) = 0.6108 × exp(17.27 × T / (T + 237.3))      [kPa, T in °C]
//! ```
//!
//! At 20°C this gives 2.338 kPa, matching standard psychrometric tables.
//!
//! ### Vapor Pressure Deficit
//!
//! VPD is how far the air is from saturation:
//!
//! ```text
//! ea  = es(T) × RH / 100
//! VPD = es(T) − ea = es(T) × (1 − RH / 100)
//! ```
//!
//! It drives transpiration: the leaf interior is saturated, so the deficit
//! against the surrounding air sets how hard the plant pulls water from the
//! roots. VPD rises with temperature and falls with humidity, which is what
//! lets the target solver use plain bisection.
//!
//! ### Leaf Temperature
//!
//! Transpiring leaves run cooler than the air. When a leaf offset is
//! configured the deficit is evaluated at `air − offset` (in the grower's
//! unit, before conversion to Celsius).
//!
//! ## Usage
//!
//! ```rust
//! use vpdguard_core::psychrometrics::{saturation_vapor_pressure, vapor_pressure_deficit};
//!
//! let svp = saturation_vapor_pressure(20.0);
//! assert!((svp - 2.338).abs() < 0.01);
//!
//! let vpd = vapor_pressure_deficit(20.0, 50.0);
//! assert!((vpd - svp / 2.0).abs() < 1e-12);
//! ```
//!
//! No bounds are enforced here. The formula is meaningful roughly between
//! -40°C and 50°C, and callers constrain inputs upstream.

use crate::{
    config::LeafOffset,
    constants::physics::{SATURATED_RH_PCT, SVP_AT_FREEZING_KPA, TETENS_A, TETENS_B_C},
    units::Temperature,
};

/// Saturation vapor pressure (kPa) at `temp_c` degrees Celsius
#[inline]
pub fn saturation_vapor_pressure(temp_c: f64) -> f64 {
    SVP_AT_FREEZING_KPA * libm::exp(TETENS_A * temp_c / (temp_c + TETENS_B_C))
}

/// Actual vapor pressure (kPa) of air at `temp_c` and `rh_percent`
#[inline]
pub fn actual_vapor_pressure(temp_c: f64, rh_percent: f64) -> f64 {
    saturation_vapor_pressure(temp_c) * rh_percent / SATURATED_RH_PCT
}

/// Vapor pressure deficit (kPa) at an effective temperature in °C
///
/// Non-negative for humidity in [0, 100].
#[inline]
pub fn vapor_pressure_deficit(effective_temp_c: f64, rh_percent: f64) -> f64 {
    saturation_vapor_pressure(effective_temp_c) * (1.0 - rh_percent / SATURATED_RH_PCT)
}

/// Temperature the deficit is evaluated at: the leaf when an offset is
/// configured, the air otherwise. Stays in the air temperature's unit.
pub fn effective_temperature(air: Temperature, leaf: Option<LeafOffset>) -> Temperature {
    match leaf {
        Some(offset) => offset.leaf_temperature(air),
        None => air,
    }
}

/// VPD (kPa) for an air reading, applying the leaf offset if any
pub fn vpd_for(air: Temperature, rh_percent: f64, leaf: Option<LeafOffset>) -> f64 {
    let effective = effective_temperature(air, leaf);
    vapor_pressure_deficit(effective.to_celsius(), rh_percent)
}
