//! Instrument and Input Ranges
//!
//! Ranges of the grower-facing controls. The psychrometric model itself
//! accepts any finite input; these limits apply to input sanitization, to
//! the solver search band and to which recommendations are shown.
//!
//! Temperature limits come in pairs because the controls are expressed in
//! the grower's chosen unit. The Celsius bounds are the rounded values the
//! controls use, not exact conversions of the Fahrenheit ones.

// ===== AIR TEMPERATURE INPUT =====

/// Accepted air/leaf temperature input range (°F).
pub const INPUT_TEMP_MIN_F: f64 = 60.0;
/// Upper air/leaf temperature input (°F).
pub const INPUT_TEMP_MAX_F: f64 = 95.0;

/// Accepted air/leaf temperature input range (°C).
pub const INPUT_TEMP_MIN_C: f64 = 15.0;
/// Upper air/leaf temperature input (°C).
pub const INPUT_TEMP_MAX_C: f64 = 35.0;

// ===== SOLVER / HEATMAP TEMPERATURE BAND =====

/// Temperature band searched by the solver and plotted by the heatmap (°F).
///
/// A temperature recommendation outside this band is never shown.
pub const BAND_TEMP_MIN_F: f64 = 65.0;
/// Top of the temperature band (°F).
pub const BAND_TEMP_MAX_F: f64 = 85.0;

/// Temperature band searched by the solver and plotted by the heatmap (°C).
pub const BAND_TEMP_MIN_C: f64 = 18.0;
/// Top of the temperature band (°C).
pub const BAND_TEMP_MAX_C: f64 = 29.0;

// ===== HUMIDITY =====

/// Accepted relative humidity input range (%).
///
/// Also the range a humidity recommendation must fall in to be shown.
pub const HUMIDITY_MIN_PCT: f64 = 30.0;
/// Upper relative humidity input (%).
pub const HUMIDITY_MAX_PCT: f64 = 90.0;

/// Humidity axis of the heatmap (%).
pub const HEATMAP_HUMIDITY_MIN_PCT: f64 = 40.0;
/// Top of the heatmap humidity axis (%).
pub const HEATMAP_HUMIDITY_MAX_PCT: f64 = 80.0;

/// Heatmap sampling step on both axes (unit degrees and % RH).
pub const HEATMAP_STEP: f64 = 1.0;

// ===== LEAF OFFSET =====

/// Accepted leaf-to-air offset range (°F).
pub const LEAF_OFFSET_MIN_F: f64 = 1.0;
/// Largest leaf offset (°F).
pub const LEAF_OFFSET_MAX_F: f64 = 6.0;

/// Accepted leaf-to-air offset range (°C).
pub const LEAF_OFFSET_MIN_C: f64 = 0.5;
/// Largest leaf offset (°C).
pub const LEAF_OFFSET_MAX_C: f64 = 3.0;

/// Default leaf offset (°F).
///
/// Transpiring leaves under typical grow lights sit a few degrees below air.
pub const DEFAULT_LEAF_OFFSET_F: f64 = 2.0;

// ===== LIGHT =====

/// Accepted PPFD input range (µmol·m⁻²·s⁻¹).
pub const PPFD_MIN: f64 = 100.0;
/// Upper PPFD input (µmol·m⁻²·s⁻¹).
pub const PPFD_MAX: f64 = 2000.0;

/// Accepted photoperiod range (hours of light per day).
pub const PHOTOPERIOD_MIN_H: f64 = 8.0;
/// Longest photoperiod (hours).
pub const PHOTOPERIOD_MAX_H: f64 = 24.0;

// ===== DEFAULT READING =====

/// Air temperature shown before the grower enters anything (°F).
pub const DEFAULT_AIR_TEMP_F: f64 = 75.0;

/// Relative humidity shown before the grower enters anything (%).
pub const DEFAULT_HUMIDITY_PCT: f64 = 60.0;

/// Default light settings.
pub const DEFAULT_PPFD: f64 = 500.0;
/// Default photoperiod (hours).
pub const DEFAULT_PHOTOPERIOD_H: f64 = 12.0;
