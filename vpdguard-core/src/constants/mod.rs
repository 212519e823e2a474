//! Constants for VPDGuard Core
//!
//! Every numeric value the model depends on is defined here with its unit
//! and origin.
//!
//! ## Organization
//!
//! - **Physics**: psychrometric coefficients and unit conversion factors
//! - **Stages**: per-stage VPD windows, classification margins, solver tolerances
//! - **Instruments**: control ranges, solver band, heatmap axes, defaults
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. Keep Celsius/Fahrenheit pairs next to each other

/// Physical constants: Tetens coefficients, temperature scales, photon units.
pub mod physics;

/// Growth-stage VPD windows and classification margins.
pub mod stages;

/// Input ranges, solver band and heatmap axes.
pub mod instruments;

// Re-export commonly used constants for convenience
pub use physics::{SVP_AT_FREEZING_KPA, TETENS_A, TETENS_B_C};

pub use stages::{
    LOW_MARGIN_KPA, HIGH_MARGIN_KPA, PERFECT_TOLERANCE_KPA,
    ON_TARGET_TOLERANCE_KPA, SOLVER_TOLERANCE_KPA, SOLVER_MAX_ITERATIONS,
    TARGET_VPD_MIN_KPA, TARGET_VPD_MAX_KPA,
};

pub use instruments::{
    HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT,
    BAND_TEMP_MIN_F, BAND_TEMP_MAX_F, BAND_TEMP_MIN_C, BAND_TEMP_MAX_C,
};
