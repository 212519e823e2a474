//! Growth-Stage VPD Targets and Classification Margins
//!
//! Target VPD windows per growth stage and the margins that split the
//! space around each window into the five status categories. These are
//! behavioral contracts: the status text, the status dot and every heatmap
//! cell are derived from them.

// ===== STAGE WINDOWS (kPa) =====

/// Seedling / clone window: high humidity, gentle transpiration.
pub const SEEDLING_MIN_KPA: f64 = 0.4;
/// Seedling optimum.
pub const SEEDLING_OPTIMAL_KPA: f64 = 0.6;
/// Seedling upper edge.
pub const SEEDLING_MAX_KPA: f64 = 0.8;

/// Vegetative window.
pub const VEGETATIVE_MIN_KPA: f64 = 0.8;
/// Vegetative optimum.
pub const VEGETATIVE_OPTIMAL_KPA: f64 = 1.0;
/// Vegetative upper edge.
pub const VEGETATIVE_MAX_KPA: f64 = 1.2;

/// Flowering window: drier air to limit mold in dense canopy.
pub const FLOWERING_MIN_KPA: f64 = 1.0;
/// Flowering optimum.
pub const FLOWERING_OPTIMAL_KPA: f64 = 1.25;
/// Flowering upper edge.
pub const FLOWERING_MAX_KPA: f64 = 1.5;

// ===== CLASSIFICATION MARGINS =====

/// Band below a stage's minimum still classified as "too low" (kPa).
///
/// Anything further below is dangerously low (mold and mildew risk).
pub const LOW_MARGIN_KPA: f64 = 0.2;

/// Band above a stage's maximum still classified as "too high" (kPa).
///
/// Anything further above is dangerously high (stomatal closure, stress).
pub const HIGH_MARGIN_KPA: f64 = 0.4;

/// Distance from the stage optimum reported as "perfect" (kPa).
pub const PERFECT_TOLERANCE_KPA: f64 = 0.1;

// ===== TARGETING =====

/// Lowest selectable custom target VPD (kPa).
pub const TARGET_VPD_MIN_KPA: f64 = 0.4;

/// Highest selectable custom target VPD (kPa).
pub const TARGET_VPD_MAX_KPA: f64 = 1.6;

/// Distance from the target treated as reached (kPa).
///
/// Inside this band no adjustment is recommended.
pub const ON_TARGET_TOLERANCE_KPA: f64 = 0.05;

/// Early-exit tolerance of the temperature bisection (kPa).
pub const SOLVER_TOLERANCE_KPA: f64 = 0.01;

/// Hard cap on bisection iterations.
///
/// Twenty halvings of a 20°F band leave a bracket of ~2e-5°F, far below
/// any instrument resolution.
pub const SOLVER_MAX_ITERATIONS: u32 = 20;
