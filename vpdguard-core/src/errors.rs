//! Error Types for Input Validation
//!
//! ## Design Philosophy
//!
//! The numerical core of VPDGuard never fails: saturation vapor pressure, VPD,
//! the solvers and the color ramp are total functions over finite inputs, and
//! out-of-range inputs are corrected by clamping rather than rejected. Errors
//! only appear at the edges of the crate:
//!
//! 1. **Parsing**: turning UI text (`"flowering"`, `"F"`) into typed values.
//! 2. **Strict validation**: callers that would rather reject a reading than
//!    have it silently clamped use [`InputLimits::check`](crate::validators::InputLimits::check).
//! 3. **Custom stage ranges**: a hand-built [`StageRange`](crate::stage::StageRange)
//!    must keep `min < optimal < max`.
//!
//! Like every value type in the crate, errors are small and `Copy`, carrying
//! only numbers and `&'static str` reasons so they work without an allocator.
//!
//! ```rust
//! use vpdguard_core::{GrowthStage, ValidationError};
//!
//! match "fruiting".parse::<GrowthStage>() {
//!     Ok(stage) => println!("stage {}", stage),
//!     Err(ValidationError::UnknownVariant { kind }) => println!("not a {}", kind),
//!     Err(e) => println!("{}", e),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside the accepted range
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The rejected input
        value: f64,
        /// Lower bound of the accepted range
        min: f64,
        /// Upper bound of the accepted range
        max: f64,
    },

    /// Value makes no physical sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,

    /// Text did not name any known variant
    #[error("Unknown {kind}")]
    UnknownVariant {
        /// What was being parsed, e.g. "growth stage"
        kind: &'static str,
    },

    /// A range whose bounds are not ordered `min < optimal < max`
    #[error("Invalid range: {reason}")]
    InvalidRange {
        /// Which ordering was violated
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ValidationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::UnknownVariant { kind } =>
                defmt::write!(fmt, "Unknown {}", kind),
            Self::InvalidRange { reason } =>
                defmt::write!(fmt, "Invalid range: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_small_and_copy() {
        let err = ValidationError::OutOfRange { value: 95.0, min: 30.0, max: 90.0 };
        let copy = err;
        assert_eq!(err, copy);
        assert!(core::mem::size_of::<ValidationError>() <= 32);
    }

    #[cfg(feature = "std")]
    #[test]
    fn error_messages() {
        let err = ValidationError::OutOfRange { value: 95.0, min: 30.0, max: 90.0 };
        assert_eq!(err.to_string(), "Value 95 outside range [30, 90]");

        let err = ValidationError::UnknownVariant { kind: "growth stage" };
        assert_eq!(err.to_string(), "Unknown growth stage");
    }
}
