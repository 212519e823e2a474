//! Common Validation Utilities
//!
//! Pure helpers shared by the input limits: finiteness checks and range
//! checks. No allocation, no panics; invalid inputs come back as errors.

use crate::errors::{ValidationError, ValidationResult};

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is physically valid (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Check if a value is within the specified closed range
pub fn check_range(value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if !value.is_valid() {
        Err(ValidationError::InvalidValue)
    } else if value < min || value > max {
        Err(ValidationError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range(5.0, 0.0, 10.0).is_ok());
        assert!(check_range(0.0, 0.0, 10.0).is_ok());
        assert!(check_range(10.0, 0.0, 10.0).is_ok());
        assert!(check_range(-1.0, 0.0, 10.0).is_err());
        assert!(check_range(11.0, 0.0, 10.0).is_err());
        assert_eq!(check_range(f64::NAN, 0.0, 10.0), Err(ValidationError::InvalidValue));
    }

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f32::NEG_INFINITY.is_valid());
    }
}
