//! One-Call Evaluation
//!
//! The calculator keeps no state of its own. A caller gathers the current
//! controls into [`Inputs`], calls [`evaluate`], and renders the
//! [`Evaluation`]. Inputs are sanitized first, the same way the UI controls
//! snap back into range, and the evaluation reports the values it used.
//!
//! ```rust
//! use vpdguard_core::{evaluate, GrowthStage, Inputs, Temperature};
//!
//! let inputs = Inputs::new(Temperature::fahrenheit(75.0), 60.0)
//!     .with_stage(GrowthStage::Vegetative);
//! let result = evaluate(&inputs);
//!
//! assert!(result.status.is_optimal());
//! assert_eq!(result.label.as_str(), "Good for Vegetative");
//! ```

use crate::{
    config::{LeafOffset, LightConfiguration, TargetConfiguration},
    constants::instruments::{DEFAULT_AIR_TEMP_F, DEFAULT_HUMIDITY_PCT},
    psychrometrics::{effective_temperature, vapor_pressure_deficit},
    recommend::{Recommendation, RecommendationEngine},
    stage::{GrowthStage, Rgb, StageClassifier, StatusCategory, StatusLabel},
    units::{Temperature, TemperatureUnit},
    validators::InputLimits,
};

/// Everything the grower has set
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inputs {
    /// Air temperature; its unit is the display unit
    pub temperature: Temperature,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Growth stage
    pub stage: GrowthStage,
    /// Leaf offset, when leaf temperature is in use
    pub leaf: Option<LeafOffset>,
    /// Custom target setting
    pub target: TargetConfiguration,
    /// Lighting, when the DLI figure is wanted
    pub light: Option<LightConfiguration>,
}

impl Inputs {
    /// Reading with default stage and no options
    pub fn new(temperature: Temperature, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
            ..Self::default()
        }
    }

    /// Set the growth stage. A disabled target follows the stage.
    pub fn with_stage(mut self, stage: GrowthStage) -> Self {
        self.stage = stage;
        self.target.on_stage_change(stage);
        self
    }

    /// Evaluate at the leaf, `offset` below the air
    pub fn with_leaf_offset(mut self, offset: LeafOffset) -> Self {
        self.leaf = Some(offset);
        self
    }

    /// Use a target setting
    pub fn with_target(mut self, target: TargetConfiguration) -> Self {
        self.target = target;
        self
    }

    /// Include lighting for DLI
    pub fn with_light(mut self, light: LightConfiguration) -> Self {
        self.light = Some(light);
        self
    }

    /// Inputs snapped into the control ranges
    ///
    /// Non-finite readings fall back to the defaults (75°F, 60 %), and a
    /// disabled target is re-seeded with the stage optimum.
    pub fn sanitized(&self) -> Self {
        let unit = self.temperature.unit;
        let default_temp = TemperatureUnit::Fahrenheit.convert(DEFAULT_AIR_TEMP_F, unit);
        let temperature = InputLimits::air_temperature(unit)
            .sanitize(self.temperature.value, default_temp)
            .value;
        let humidity = InputLimits::HUMIDITY.sanitize(self.humidity, DEFAULT_HUMIDITY_PCT).value;

        let target = if self.target.is_enabled() {
            TargetConfiguration::custom(self.target.target_vpd())
        } else {
            TargetConfiguration::for_stage(self.stage)
        };

        Self {
            temperature: Temperature::new(temperature, unit),
            humidity,
            stage: self.stage,
            leaf: self.leaf.map(|leaf| LeafOffset::new(leaf.value(), leaf.unit())),
            target,
            light: self
                .light
                .map(|light| LightConfiguration::new(light.ppfd(), light.photoperiod_hours())),
        }
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            temperature: Temperature::fahrenheit(DEFAULT_AIR_TEMP_F),
            humidity: DEFAULT_HUMIDITY_PCT,
            stage: GrowthStage::default(),
            leaf: None,
            target: TargetConfiguration::default(),
            light: None,
        }
    }
}

/// Everything the calculator shows for one set of inputs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Inputs after sanitization
    pub inputs: Inputs,
    /// VPD (kPa)
    pub vpd: f64,
    /// Temperature the VPD was evaluated at, in the display unit
    pub effective_temperature: Temperature,
    /// Status against the stage window
    pub status: StatusCategory,
    /// Status text
    pub label: StatusLabel,
    /// Status color
    pub color: Rgb,
    /// Target recommendation
    pub recommendation: Recommendation,
    /// Daily light integral, when lighting was given
    pub dli: Option<f64>,
}

/// Evaluate a set of inputs
pub fn evaluate(inputs: &Inputs) -> Evaluation {
    let inputs = inputs.sanitized();
    let unit = inputs.temperature.unit;

    let effective = effective_temperature(inputs.temperature, inputs.leaf);
    let vpd = vapor_pressure_deficit(effective.to_celsius(), inputs.humidity);

    let classifier = StageClassifier::new(inputs.stage);
    let status = classifier.classify(vpd);

    let recommendation = RecommendationEngine::new(unit, inputs.leaf).recommend(
        inputs.temperature,
        inputs.humidity,
        &inputs.target,
    );

    Evaluation {
        vpd,
        effective_temperature: effective,
        status,
        label: status.label(inputs.stage),
        color: classifier.color(vpd),
        recommendation,
        dli: inputs.light.map(|light| light.dli()),
        inputs,
    }
}
