//! Temperature units and conversions
//!
//! Growers read thermometers in either scale, so every temperature in the
//! crate carries its unit. Conversions are exact algebraic inverses:
//! `fahrenheit_to_celsius(celsius_to_fahrenheit(c))` returns `c` up to
//! floating-point rounding.
//!
//! Absolute temperatures shift by 32°F; temperature *differences* (a leaf
//! offset, a recommended change) only scale. [`TemperatureUnit::convert`]
//! and [`TemperatureUnit::convert_delta`] keep the two apart.

use core::fmt;
use core::str::FromStr;

use crate::constants::physics::{
    CELSIUS_PER_FAHRENHEIT, FAHRENHEIT_FREEZING_POINT, FAHRENHEIT_PER_CELSIUS,
};
use crate::errors::ValidationError;

/// Convert an absolute temperature from °C to °F.
#[inline]
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * FAHRENHEIT_PER_CELSIUS + FAHRENHEIT_FREEZING_POINT
}

/// Convert an absolute temperature from °F to °C.
#[inline]
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - FAHRENHEIT_FREEZING_POINT) * CELSIUS_PER_FAHRENHEIT
}

/// Temperature scale selected by the grower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Unit letter without the degree sign: `"C"` or `"F"`
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    /// Convert an absolute temperature from this unit to `to`
    pub fn convert(self, value: f64, to: TemperatureUnit) -> f64 {
        match (self, to) {
            (Self::Celsius, Self::Fahrenheit) => celsius_to_fahrenheit(value),
            (Self::Fahrenheit, Self::Celsius) => fahrenheit_to_celsius(value),
            _ => value,
        }
    }

    /// Convert a temperature difference from this unit to `to`
    pub fn convert_delta(self, delta: f64, to: TemperatureUnit) -> f64 {
        match (self, to) {
            (Self::Celsius, Self::Fahrenheit) => delta * FAHRENHEIT_PER_CELSIUS,
            (Self::Fahrenheit, Self::Celsius) => delta * CELSIUS_PER_FAHRENHEIT,
            _ => delta,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("c") || s.eq_ignore_ascii_case("celsius") {
            Ok(Self::Celsius)
        } else if s.eq_ignore_ascii_case("f") || s.eq_ignore_ascii_case("fahrenheit") {
            Ok(Self::Fahrenheit)
        } else {
            Err(ValidationError::UnknownVariant { kind: "temperature unit" })
        }
    }
}

/// Absolute temperature tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    /// Numeric value in `unit`
    pub value: f64,
    /// Scale of `value`
    pub unit: TemperatureUnit,
}

impl Temperature {
    /// Create a temperature in the given unit
    pub const fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    /// Temperature in degrees Celsius
    pub const fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// Temperature in degrees Fahrenheit
    pub const fn fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    /// Value in °C
    pub fn to_celsius(self) -> f64 {
        self.unit.convert(self.value, TemperatureUnit::Celsius)
    }

    /// Value in °F
    pub fn to_fahrenheit(self) -> f64 {
        self.unit.convert(self.value, TemperatureUnit::Fahrenheit)
    }

    /// Same temperature expressed in `unit`
    pub fn in_unit(self, unit: TemperatureUnit) -> Self {
        Self::new(self.unit.convert(self.value, unit), unit)
    }

    /// Shift by a difference expressed in `delta_unit`, keeping this unit
    pub fn shifted(self, delta: f64, delta_unit: TemperatureUnit) -> Self {
        Self::new(self.value + delta_unit.convert_delta(delta, self.unit), self.unit)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°{}", self.value, self.unit)
    }
}
