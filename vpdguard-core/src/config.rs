//! Grower Configuration
//!
//! Three small records hold everything a grower sets besides the live
//! reading:
//!
//! - [`LeafOffset`]: how much cooler leaves run than the air
//! - [`TargetConfiguration`]: whether a custom target VPD is active, and its value
//! - [`LightConfiguration`]: PPFD and photoperiod for the DLI figure
//!
//! Constructors clamp into the control ranges from
//! [`InputLimits`](crate::validators::InputLimits), so a configuration
//! value is always usable. The `try_` variants reject instead.
//!
//! ```rust
//! use vpdguard_core::{config::TargetConfiguration, GrowthStage};
//!
//! let mut target = TargetConfiguration::custom(1.3);
//! assert!(target.is_enabled());
//!
//! // Turning targeting off never leaves a stale value behind
//! target.disable(GrowthStage::Flowering);
//! assert_eq!(target.target_vpd(), 1.25);
//! ```

use crate::{
    constants::instruments::{
        BAND_TEMP_MAX_C, BAND_TEMP_MAX_F, BAND_TEMP_MIN_C, BAND_TEMP_MIN_F,
        DEFAULT_LEAF_OFFSET_F, DEFAULT_PHOTOPERIOD_H, DEFAULT_PPFD,
    },
    errors::ValidationResult,
    light::daily_light_integral,
    stage::GrowthStage,
    units::{Temperature, TemperatureUnit},
    validators::InputLimits,
};

/// Leaf-to-air temperature offset
///
/// The leaf is modelled as `air - offset`, with the offset expressed in a
/// temperature unit. Offsets are differences, so switching units rescales
/// by 5/9 or 9/5 without the 32° shift.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafOffset {
    value: f64,
    unit: TemperatureUnit,
}

impl LeafOffset {
    /// Offset clamped into the control range for `unit`
    ///
    /// Non-finite input falls back to the default offset.
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        let fallback = Self::default_for(unit).value;
        let value = InputLimits::leaf_offset(unit).sanitize(value, fallback).value;
        Self { value, unit }
    }

    /// Offset that must already lie in the control range
    pub fn try_new(value: f64, unit: TemperatureUnit) -> ValidationResult<Self> {
        let value = InputLimits::leaf_offset(unit).check(value)?;
        Ok(Self { value, unit })
    }

    /// The default 2°F offset, expressed in `unit`
    pub fn default_for(unit: TemperatureUnit) -> Self {
        Self {
            value: TemperatureUnit::Fahrenheit.convert_delta(DEFAULT_LEAF_OFFSET_F, unit),
            unit,
        }
    }

    /// Offset magnitude in [`Self::unit`]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Unit the offset is expressed in
    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Same offset expressed in another unit
    ///
    /// The rescale is exact and does not re-clamp: 6°F becomes 3.33°C even
    /// though the Celsius control tops out at 3°C.
    pub fn in_unit(self, unit: TemperatureUnit) -> Self {
        Self {
            value: self.unit.convert_delta(self.value, unit),
            unit,
        }
    }

    /// Leaf temperature for an air reading, in the air reading's unit
    pub fn leaf_temperature(&self, air: Temperature) -> Temperature {
        air.shifted(-self.value, self.unit)
    }
}

impl Default for LeafOffset {
    fn default() -> Self {
        Self::default_for(TemperatureUnit::default())
    }
}

/// Temperature window the solver searches and the heatmap spans
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureBand {
    /// Lower edge
    pub min: f64,
    /// Upper edge
    pub max: f64,
    /// Unit of both edges
    pub unit: TemperatureUnit,
}

impl TemperatureBand {
    /// Standard grow-room band: 65-85°F or 18-29°C
    pub const fn for_unit(unit: TemperatureUnit) -> Self {
        match unit {
            TemperatureUnit::Fahrenheit => Self { min: BAND_TEMP_MIN_F, max: BAND_TEMP_MAX_F, unit },
            TemperatureUnit::Celsius => Self { min: BAND_TEMP_MIN_C, max: BAND_TEMP_MAX_C, unit },
        }
    }

    /// True when `value` (in [`Self::unit`]) lies inside the band
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Width of the band
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Center of the band
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl Default for TemperatureBand {
    fn default() -> Self {
        Self::for_unit(TemperatureUnit::default())
    }
}

/// Custom target VPD setting
///
/// While disabled the target tracks the current stage's optimum, so
/// re-enabling starts from a sensible value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetConfiguration {
    enabled: bool,
    target_vpd: f64,
}

impl TargetConfiguration {
    /// Targeting off, seeded with the stage optimum
    pub const fn for_stage(stage: GrowthStage) -> Self {
        Self {
            enabled: false,
            target_vpd: stage.range().optimal,
        }
    }

    /// Targeting on with `target_vpd` clamped to 0.4-1.6 kPa
    pub fn custom(target_vpd: f64) -> Self {
        let fallback = GrowthStage::default().range().optimal;
        Self {
            enabled: true,
            target_vpd: InputLimits::TARGET_VPD.sanitize(target_vpd, fallback).value,
        }
    }

    /// Targeting on, rejecting targets outside 0.4-1.6 kPa
    pub fn try_custom(target_vpd: f64) -> ValidationResult<Self> {
        let target_vpd = InputLimits::TARGET_VPD.check(target_vpd)?;
        Ok(Self { enabled: true, target_vpd })
    }

    /// Whether recommendations are produced
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current target (kPa)
    pub const fn target_vpd(&self) -> f64 {
        self.target_vpd
    }

    /// Change the target. Ignored while disabled, like a greyed-out input.
    pub fn set_target(&mut self, target_vpd: f64) {
        if self.enabled {
            self.target_vpd = InputLimits::TARGET_VPD.sanitize(target_vpd, self.target_vpd).value;
        }
    }

    /// Turn targeting on, keeping the current value
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Turn targeting off and reset the target to the stage optimum
    pub fn disable(&mut self, stage: GrowthStage) {
        self.enabled = false;
        self.target_vpd = stage.range().optimal;
    }

    /// Toggle, as a checkbox would
    pub fn set_enabled(&mut self, enabled: bool, stage: GrowthStage) {
        if enabled {
            self.enable();
        } else {
            self.disable(stage);
        }
    }

    /// Set the target to the stage optimum
    pub fn use_optimal_for(&mut self, stage: GrowthStage) {
        self.target_vpd = stage.range().optimal;
    }

    /// Follow a stage change. A disabled target is re-seeded, an active
    /// custom target is kept.
    pub fn on_stage_change(&mut self, stage: GrowthStage) {
        if !self.enabled {
            self.use_optimal_for(stage);
        }
    }

    /// Target in effect for `stage`
    pub fn resolved_for(&self, stage: GrowthStage) -> f64 {
        if self.enabled {
            self.target_vpd
        } else {
            stage.range().optimal
        }
    }
}

impl Default for TargetConfiguration {
    fn default() -> Self {
        Self::for_stage(GrowthStage::default())
    }
}

/// Lighting setup for the DLI figure
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightConfiguration {
    ppfd: f64,
    photoperiod_hours: f64,
}

impl LightConfiguration {
    /// PPFD clamped to 100-2000 µmol·m⁻²·s⁻¹, photoperiod to 8-24 h
    pub fn new(ppfd: f64, photoperiod_hours: f64) -> Self {
        Self {
            ppfd: InputLimits::PPFD.sanitize(ppfd, DEFAULT_PPFD).value,
            photoperiod_hours: InputLimits::PHOTOPERIOD
                .sanitize(photoperiod_hours, DEFAULT_PHOTOPERIOD_H)
                .value,
        }
    }

    /// Reject out-of-range values instead of clamping
    pub fn try_new(ppfd: f64, photoperiod_hours: f64) -> ValidationResult<Self> {
        Ok(Self {
            ppfd: InputLimits::PPFD.check(ppfd)?,
            photoperiod_hours: InputLimits::PHOTOPERIOD.check(photoperiod_hours)?,
        })
    }

    /// Photosynthetic photon flux density (µmol·m⁻²·s⁻¹)
    pub const fn ppfd(&self) -> f64 {
        self.ppfd
    }

    /// Hours of light per day
    pub const fn photoperiod_hours(&self) -> f64 {
        self.photoperiod_hours
    }

    /// Daily light integral (mol·m⁻²·day⁻¹)
    pub fn dli(&self) -> f64 {
        daily_light_integral(self.ppfd, self.photoperiod_hours)
    }
}

impl Default for LightConfiguration {
    fn default() -> Self {
        Self {
            ppfd: DEFAULT_PPFD,
            photoperiod_hours: DEFAULT_PHOTOPERIOD_H,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn leaf_offset_clamps_per_unit() {
        assert_eq!(LeafOffset::new(9.0, TemperatureUnit::Fahrenheit).value(), 6.0);
        assert_eq!(LeafOffset::new(0.1, TemperatureUnit::Celsius).value(), 0.5);
        assert_eq!(LeafOffset::new(f64::NAN, TemperatureUnit::Fahrenheit).value(), 2.0);
        assert!(matches!(
            LeafOffset::try_new(9.0, TemperatureUnit::Fahrenheit),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn leaf_offset_rescales_without_shift() {
        let f = LeafOffset::new(3.6, TemperatureUnit::Fahrenheit);
        let c = f.in_unit(TemperatureUnit::Celsius);
        assert_eq!(c.unit(), TemperatureUnit::Celsius);
        assert_abs_diff_eq!(c.value(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.in_unit(TemperatureUnit::Fahrenheit).value(), 3.6, epsilon = 1e-12);

        // No re-clamp on conversion
        let max_f = LeafOffset::new(6.0, TemperatureUnit::Fahrenheit);
        assert_abs_diff_eq!(max_f.in_unit(TemperatureUnit::Celsius).value(), 10.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn default_leaf_offset() {
        assert_eq!(LeafOffset::default().value(), 2.0);
        assert_abs_diff_eq!(
            LeafOffset::default_for(TemperatureUnit::Celsius).value(),
            10.0 / 9.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn leaf_temperature_in_air_unit() {
        let leaf = LeafOffset::new(1.0, TemperatureUnit::Celsius);
        let t = leaf.leaf_temperature(Temperature::fahrenheit(80.0));
        assert_eq!(t.unit, TemperatureUnit::Fahrenheit);
        assert_abs_diff_eq!(t.value, 78.2, epsilon = 1e-12);
    }

    #[test]
    fn bands() {
        let f = TemperatureBand::for_unit(TemperatureUnit::Fahrenheit);
        assert_eq!((f.min, f.max, f.span(), f.midpoint()), (65.0, 85.0, 20.0, 75.0));
        let c = TemperatureBand::for_unit(TemperatureUnit::Celsius);
        assert!(c.contains(18.0) && c.contains(29.0) && !c.contains(29.5));
    }

    #[test]
    fn target_defaults_to_stage_optimum() {
        let t = TargetConfiguration::default();
        assert!(!t.is_enabled());
        assert_eq!(t.target_vpd(), 1.0);
        assert_eq!(TargetConfiguration::for_stage(GrowthStage::Seedling).target_vpd(), 0.6);
    }

    #[test]
    fn custom_target_clamped() {
        assert_eq!(TargetConfiguration::custom(2.5).target_vpd(), 1.6);
        assert_eq!(TargetConfiguration::custom(0.1).target_vpd(), 0.4);
        assert!(TargetConfiguration::try_custom(2.5).is_err());
        assert_eq!(TargetConfiguration::try_custom(1.1).map(|t| t.target_vpd()), Ok(1.1));
    }

    #[test]
    fn disable_resets_to_stage_optimum() {
        let mut t = TargetConfiguration::custom(1.45);
        t.disable(GrowthStage::Seedling);
        assert!(!t.is_enabled());
        assert_eq!(t.target_vpd(), 0.6);

        // Disabled input ignores edits
        t.set_target(1.3);
        assert_eq!(t.target_vpd(), 0.6);

        t.set_enabled(true, GrowthStage::Seedling);
        t.set_target(1.3);
        assert_eq!(t.target_vpd(), 1.3);
        t.set_target(9.0);
        assert_eq!(t.target_vpd(), 1.6);
    }

    #[test]
    fn stage_change_only_reseeds_when_disabled() {
        let mut t = TargetConfiguration::default();
        t.on_stage_change(GrowthStage::Flowering);
        assert_eq!(t.target_vpd(), 1.25);

        let mut custom = TargetConfiguration::custom(0.9);
        custom.on_stage_change(GrowthStage::Flowering);
        assert_eq!(custom.target_vpd(), 0.9);

        custom.use_optimal_for(GrowthStage::Flowering);
        assert_eq!(custom.target_vpd(), 1.25);
        assert!(custom.is_enabled());
    }

    #[test]
    fn resolved_target() {
        let mut t = TargetConfiguration::custom(1.4);
        assert_eq!(t.resolved_for(GrowthStage::Seedling), 1.4);
        t.disable(GrowthStage::Vegetative);
        assert_eq!(t.resolved_for(GrowthStage::Seedling), 0.6);
    }

    #[test]
    fn light_configuration() {
        let light = LightConfiguration::default();
        assert_eq!(light.dli(), 21.6);

        let clamped = LightConfiguration::new(5000.0, 4.0);
        assert_eq!((clamped.ppfd(), clamped.photoperiod_hours()), (2000.0, 8.0));
        assert!(LightConfiguration::try_new(50.0, 12.0).is_err());
    }
}
