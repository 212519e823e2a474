//! Physical Constants for VPDGuard
//!
//! Psychrometric coefficients, unit-conversion factors and photon-flux
//! scaling used by the model. Values follow the FAO-56 conventions used
//! throughout horticultural VPD tables.

// ===== SATURATION VAPOR PRESSURE (TETENS) =====

/// Saturation vapor pressure of water at 0°C (kPa).
///
/// Leading coefficient of the Tetens equation:
/// `es(T) = 0.6108 × exp(17.27 × T / (T + 237.3))`
///
/// Source: FAO Irrigation and Drainage Paper 56, Eq. 11
pub const SVP_AT_FREEZING_KPA: f64 = 0.6108;

/// Tetens exponent numerator coefficient (dimensionless).
///
/// Source: FAO-56, Eq. 11
pub const TETENS_A: f64 = 17.27;

/// Tetens exponent denominator offset (°C).
///
/// Source: FAO-56, Eq. 11
pub const TETENS_B_C: f64 = 237.3;

/// Relative humidity of saturated air (%).
pub const SATURATED_RH_PCT: f64 = 100.0;

// ===== TEMPERATURE SCALES =====

/// Freezing point of water on the Fahrenheit scale (°F).
pub const FAHRENHEIT_FREEZING_POINT: f64 = 32.0;

/// Size of one Celsius degree in Fahrenheit degrees.
///
/// Temperatures shift by [`FAHRENHEIT_FREEZING_POINT`] as well; temperature
/// differences (leaf offsets) only scale by this ratio.
pub const FAHRENHEIT_PER_CELSIUS: f64 = 9.0 / 5.0;

/// Size of one Fahrenheit degree in Celsius degrees.
pub const CELSIUS_PER_FAHRENHEIT: f64 = 5.0 / 9.0;

// ===== LIGHT =====

/// Seconds in one hour of photoperiod.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Micromoles per mole.
///
/// PPFD is reported in µmol·m⁻²·s⁻¹ while DLI is mol·m⁻²·day⁻¹.
pub const MICROMOLES_PER_MOLE: f64 = 1_000_000.0;
