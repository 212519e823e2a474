//! Input limits for grower-facing controls
//!
//! Each control (air temperature, humidity, target VPD, leaf offset, PPFD,
//! photoperiod) accepts a closed range. Two postures are offered:
//!
//! - [`InputLimits::sanitize`]: the calculator's default. Non-finite input
//!   falls back to the previous/default value, out-of-range input is clamped,
//!   and the result says whether a correction happened.
//! - [`InputLimits::check`]: strict, returns [`ValidationError`](crate::errors::ValidationError) instead.

use crate::{
    constants::{
        instruments::{
            HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, INPUT_TEMP_MAX_C, INPUT_TEMP_MAX_F,
            INPUT_TEMP_MIN_C, INPUT_TEMP_MIN_F, LEAF_OFFSET_MAX_C, LEAF_OFFSET_MAX_F,
            LEAF_OFFSET_MIN_C, LEAF_OFFSET_MIN_F, PHOTOPERIOD_MAX_H, PHOTOPERIOD_MIN_H,
            PPFD_MAX, PPFD_MIN,
        },
        stages::{TARGET_VPD_MAX_KPA, TARGET_VPD_MIN_KPA},
    },
    errors::ValidationResult,
    units::TemperatureUnit,
};

use super::utils::{self, Validatable};

/// Closed range accepted by one input control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLimits {
    /// Name used in log messages
    pub quantity: &'static str,
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
}

/// Outcome of sanitizing one input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sanitized {
    /// Value to use
    pub value: f64,
    /// True when the input was replaced or clamped
    pub corrected: bool,
}

impl InputLimits {
    /// Relative humidity control (%)
    pub const HUMIDITY: Self = Self::new("humidity", HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT);

    /// Custom target VPD control (kPa)
    pub const TARGET_VPD: Self = Self::new("target VPD", TARGET_VPD_MIN_KPA, TARGET_VPD_MAX_KPA);

    /// PPFD control (µmol·m⁻²·s⁻¹)
    pub const PPFD: Self = Self::new("PPFD", PPFD_MIN, PPFD_MAX);

    /// Photoperiod control (hours)
    pub const PHOTOPERIOD: Self = Self::new("photoperiod", PHOTOPERIOD_MIN_H, PHOTOPERIOD_MAX_H);

    /// Create limits for a named quantity
    pub const fn new(quantity: &'static str, min: f64, max: f64) -> Self {
        Self { quantity, min, max }
    }

    /// Air (or leaf) temperature control in the given unit
    pub const fn air_temperature(unit: TemperatureUnit) -> Self {
        match unit {
            TemperatureUnit::Fahrenheit => Self::new("temperature", INPUT_TEMP_MIN_F, INPUT_TEMP_MAX_F),
            TemperatureUnit::Celsius => Self::new("temperature", INPUT_TEMP_MIN_C, INPUT_TEMP_MAX_C),
        }
    }

    /// Leaf-to-air offset control in the given unit
    pub const fn leaf_offset(unit: TemperatureUnit) -> Self {
        match unit {
            TemperatureUnit::Fahrenheit => Self::new("leaf offset", LEAF_OFFSET_MIN_F, LEAF_OFFSET_MAX_F),
            TemperatureUnit::Celsius => Self::new("leaf offset", LEAF_OFFSET_MIN_C, LEAF_OFFSET_MAX_C),
        }
    }

    /// True when `value` lies inside the closed range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a finite value into range
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Strict check: the value itself, or why it was rejected
    pub fn check(&self, value: f64) -> ValidationResult<f64> {
        utils::check_range(value, self.min, self.max)?;
        Ok(value)
    }

    /// Replace non-finite input with `fallback` and clamp into range
    pub fn sanitize(&self, value: f64, fallback: f64) -> Sanitized {
        let candidate = if value.is_valid() {
            value
        } else if fallback.is_valid() {
            fallback
        } else {
            self.min
        };
        let clamped = self.clamp(candidate);
        let corrected = clamped != value;

        if corrected {
            log_warn!(
                "{} input {} corrected to {} (range [{}, {}])",
                self.quantity, value, clamped, self.min, self.max
            );
        }

        Sanitized { value: clamped, corrected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn sanitize_clamps() {
        let s = InputLimits::HUMIDITY.sanitize(95.0, 60.0);
        assert_eq!(s, Sanitized { value: 90.0, corrected: true });

        let s = InputLimits::HUMIDITY.sanitize(12.0, 60.0);
        assert_eq!(s.value, 30.0);

        let s = InputLimits::HUMIDITY.sanitize(55.0, 60.0);
        assert_eq!(s, Sanitized { value: 55.0, corrected: false });
    }

    #[test]
    fn sanitize_replaces_non_finite() {
        let s = InputLimits::TARGET_VPD.sanitize(f64::NAN, 1.0);
        assert_eq!(s, Sanitized { value: 1.0, corrected: true });

        // A bad fallback still yields an in-range value
        let s = InputLimits::TARGET_VPD.sanitize(f64::INFINITY, f64::NAN);
        assert_eq!(s.value, 0.4);
        assert!(s.corrected);
    }

    #[test]
    fn strict_check() {
        assert_eq!(InputLimits::PPFD.check(800.0), Ok(800.0));
        assert_eq!(
            InputLimits::PPFD.check(50.0),
            Err(ValidationError::OutOfRange { value: 50.0, min: 100.0, max: 2000.0 })
        );
        assert_eq!(InputLimits::PHOTOPERIOD.check(f64::NAN), Err(ValidationError::InvalidValue));
    }

    #[test]
    fn unit_dependent_limits() {
        let f = InputLimits::air_temperature(TemperatureUnit::Fahrenheit);
        let c = InputLimits::air_temperature(TemperatureUnit::Celsius);
        assert!(f.contains(95.0) && !f.contains(96.0));
        assert!(c.contains(15.0) && !c.contains(14.9));

        let off_c = InputLimits::leaf_offset(TemperatureUnit::Celsius);
        assert_eq!((off_c.min, off_c.max), (0.5, 3.0));
    }
}
