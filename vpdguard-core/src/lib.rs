//! Core VPD engine for VPDGuard
//!
//! Computes vapor pressure deficit from air temperature and humidity,
//! classifies it against growth-stage windows, and recommends the humidity
//! or temperature change that reaches a target VPD. Also computes daily
//! light integral.
//!
//! Key constraints:
//! - Pure functions over plain values, no shared state
//! - No heap allocation (`heapless` for labels and candidate lists)
//! - `no_std` with `default-features = false`
//!
//! ```
//! use vpdguard_core::{evaluate, GrowthStage, Inputs, Temperature, TargetConfiguration};
//!
//! let inputs = Inputs::new(Temperature::fahrenheit(75.0), 60.0)
//!     .with_stage(GrowthStage::Vegetative)
//!     .with_target(TargetConfiguration::custom(1.0));
//!
//! let result = evaluate(&inputs);
//! println!("{:.2} kPa: {} {}", result.vpd, result.label, result.color);
//! for candidate in result.recommendation.candidates() {
//!     println!("  {}", candidate);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
pub mod constants;
pub mod errors;
pub mod evaluate;
pub mod heatmap;
pub mod light;
pub mod psychrometrics;
pub mod recommend;
pub mod solver;
pub mod stage;
pub mod units;
pub mod validators;

// Public API
pub use config::{LeafOffset, LightConfiguration, TargetConfiguration};
pub use errors::{ValidationError, ValidationResult};
pub use evaluate::{evaluate, Evaluation, Inputs};
pub use recommend::{Recommendation, RecommendationEngine};
pub use stage::{GrowthStage, StageClassifier, StatusCategory};
pub use units::{Temperature, TemperatureUnit};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
