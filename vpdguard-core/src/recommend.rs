//! Target VPD Recommendations
//!
//! When a custom target is active, the engine compares the current VPD
//! against it and proposes single-variable changes that would close the
//! gap:
//!
//! 1. Targeting off: [`Recommendation::Disabled`].
//! 2. Within 0.05 kPa of the target: [`Recommendation::OnTarget`].
//! 3. Otherwise [`Recommendation::Adjust`] with the deviation and up to two
//!    candidates, humidity first:
//!    - change humidity, holding the air temperature
//!    - change temperature, holding humidity
//!
//! A candidate is only offered when it is reachable with the controls: a
//! humidity solution strictly inside 30-90 %, a temperature inside the
//! grow-room band. When the bisection runs out of probes its final midpoint
//! still counts, so a target beyond the band yields the band-edge setting.
//! Unreachable candidates are dropped, so an
//! `Adjust` may carry zero, one or two of them. The two are alternatives;
//! no combined change is computed.
//!
//! ```rust
//! use vpdguard_core::{
//!     config::TargetConfiguration,
//!     recommend::{Recommendation, RecommendationEngine},
//!     units::{Temperature, TemperatureUnit},
//! };
//!
//! let engine = RecommendationEngine::new(TemperatureUnit::Fahrenheit, None);
//! let rec = engine.recommend(Temperature::fahrenheit(75.0), 60.0, &TargetConfiguration::custom(1.0));
//!
//! if let Recommendation::Adjust { candidates, .. } = &rec {
//!     assert_eq!(candidates.len(), 2);
//!     assert_eq!(candidates[0].to_string(), "Increase humidity +6% (to 66%)");
//! }
//! ```

use core::fmt;

use heapless::Vec;

use crate::{
    config::{LeafOffset, TargetConfiguration},
    constants::stages::ON_TARGET_TOLERANCE_KPA,
    psychrometrics::vpd_for,
    solver::TargetSolver,
    units::{Temperature, TemperatureUnit},
};

/// Controlled variable a candidate changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variable {
    /// Relative humidity (%)
    Humidity,
    /// Air temperature
    Temperature(TemperatureUnit),
}

/// Direction of a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Raise the variable
    Increase,
    /// Lower the variable
    Decrease,
}

impl Action {
    fn for_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Increase
        } else {
            Self::Decrease
        }
    }

    /// Capitalized verb
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Increase => "Increase",
            Self::Decrease => "Decrease",
        }
    }

    const fn sign(self) -> char {
        match self {
            Self::Increase => '+',
            Self::Decrease => '-',
        }
    }
}

/// One proposed single-variable change
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjustment {
    /// What to change
    pub variable: Variable,
    /// Which way
    pub action: Action,
    /// Present value
    pub current: f64,
    /// Value that reaches the target
    pub target: f64,
    /// `target - current`
    pub delta: f64,
}

impl Adjustment {
    fn new(variable: Variable, current: f64, target: f64) -> Self {
        let delta = target - current;
        Self {
            variable,
            action: Action::for_delta(delta),
            current,
            target,
            delta,
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = self.action.verb();
        let sign = self.action.sign();
        let magnitude = libm::fabs(self.delta);
        match self.variable {
            Variable::Humidity => write!(
                f,
                "{} humidity {}{:.0}% (to {:.0}%)",
                verb, sign, magnitude, self.target
            ),
            Variable::Temperature(unit) => write!(
                f,
                "{} temperature {}{:.1}°{} (to {:.1}°{})",
                verb, sign, magnitude, unit, self.target, unit
            ),
        }
    }
}

/// Which side of the target the reading is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// VPD above target: air too warm or too dry
    TooHigh,
    /// VPD below target: air too cool or too humid
    TooLow,
}

/// Distance from the target
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deviation {
    /// Side of the target
    pub direction: Direction,
    /// `|current - target|` in kPa
    pub amount: f64,
}

impl Deviation {
    fn between(current_vpd: f64, target_vpd: f64) -> Self {
        let difference = current_vpd - target_vpd;
        Self {
            direction: if difference > 0.0 { Direction::TooHigh } else { Direction::TooLow },
            amount: libm::fabs(difference),
        }
    }
}

impl fmt::Display for Deviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.direction {
            Direction::TooHigh => "high",
            Direction::TooLow => "low",
        };
        write!(f, "VPD is {:.2} kPa too {}", self.amount, side)
    }
}

/// Up to one humidity and one temperature candidate
pub type Candidates = Vec<Adjustment, 2>;

/// Engine output
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recommendation {
    /// Custom targeting is off
    Disabled,
    /// Close enough to the target
    OnTarget {
        /// Measured VPD (kPa)
        current_vpd: f64,
        /// Target VPD (kPa)
        target_vpd: f64,
    },
    /// Off target, with whatever candidates are reachable
    Adjust {
        /// Measured VPD (kPa)
        current_vpd: f64,
        /// Target VPD (kPa)
        target_vpd: f64,
        /// How far off, and which way
        deviation: Deviation,
        /// Reachable single-variable changes, humidity first
        candidates: Candidates,
    },
}

impl Recommendation {
    /// Candidates, empty unless adjusting
    pub fn candidates(&self) -> &[Adjustment] {
        match self {
            Self::Adjust { candidates, .. } => candidates.as_slice(),
            _ => &[],
        }
    }

    /// True for [`Recommendation::OnTarget`]
    pub fn is_on_target(&self) -> bool {
        matches!(self, Self::OnTarget { .. })
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => Ok(()),
            Self::OnTarget { .. } => f.write_str("Perfect! You're right on target!"),
            Self::Adjust { target_vpd, deviation, candidates, .. } => {
                write!(f, "Recommendations to reach {:.1} kPa: {}. Try:", target_vpd, deviation)?;
                for candidate in candidates {
                    write!(f, "\n  {}", candidate)?;
                }
                Ok(())
            }
        }
    }
}

/// Proposes changes that bring VPD to a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationEngine {
    solver: TargetSolver,
    leaf: Option<LeafOffset>,
    tolerance: f64,
}

impl RecommendationEngine {
    /// Engine reporting temperatures in `unit`
    pub const fn new(unit: TemperatureUnit, leaf: Option<LeafOffset>) -> Self {
        Self {
            solver: TargetSolver::new(unit, leaf),
            leaf,
            tolerance: ON_TARGET_TOLERANCE_KPA,
        }
    }

    /// Replace the 0.05 kPa on-target tolerance
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Solver used for the candidates
    pub const fn solver(&self) -> &TargetSolver {
        &self.solver
    }

    /// Recommendation for the current reading
    pub fn recommend(&self, air: Temperature, humidity: f64, target: &TargetConfiguration) -> Recommendation {
        if !target.is_enabled() {
            return Recommendation::Disabled;
        }

        let unit = self.solver.unit();
        let air = air.in_unit(unit);
        let target_vpd = target.target_vpd();
        let current_vpd = vpd_for(air, humidity, self.leaf);

        if libm::fabs(current_vpd - target_vpd) <= self.tolerance {
            return Recommendation::OnTarget { current_vpd, target_vpd };
        }

        let mut candidates = Candidates::new();

        let by_humidity = self.solver.humidity_for_target(air, target_vpd);
        if by_humidity.is_feasible() {
            // Capacity is two; at most two pushes happen
            let _ = candidates.push(Adjustment::new(Variable::Humidity, humidity, by_humidity.humidity));
        } else {
            log_debug!(
                "humidity candidate omitted: {}% outside control range",
                by_humidity.unconstrained
            );
        }

        let by_temperature = self.solver.temperature_for_target(humidity, target_vpd);
        let reached = by_temperature.temperature.value;
        if self.solver.band().contains(reached) {
            let _ = candidates.push(Adjustment::new(Variable::Temperature(unit), air.value, reached));
        } else {
            log_debug!("temperature candidate omitted: no solution inside the band");
        }

        Recommendation::Adjust {
            current_vpd,
            target_vpd,
            deviation: Deviation::between(current_vpd, target_vpd),
            candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::GrowthStage;
    use approx::assert_abs_diff_eq;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(TemperatureUnit::Fahrenheit, None)
    }

    #[test]
    fn disabled_target_yields_nothing() {
        let rec = engine().recommend(
            Temperature::fahrenheit(75.0),
            60.0,
            &TargetConfiguration::for_stage(GrowthStage::Vegetative),
        );
        assert_eq!(rec, Recommendation::Disabled);
        assert!(rec.candidates().is_empty());
        assert_eq!(rec.to_string(), "");
    }

    #[test]
    fn on_target_within_tolerance() {
        let rec = engine().recommend(Temperature::fahrenheit(70.0), 60.0, &TargetConfiguration::custom(1.0));
        assert!(rec.is_on_target());
        assert!(rec.candidates().is_empty());
        assert_eq!(rec.to_string(), "Perfect! You're right on target!");
    }

    #[test]
    fn too_high_offers_both_candidates() {
        let rec = engine().recommend(Temperature::fahrenheit(75.0), 60.0, &TargetConfiguration::custom(1.0));
        let Recommendation::Adjust { deviation, candidates, .. } = &rec else {
            panic!("expected adjustment, got {:?}", rec);
        };

        assert_eq!(deviation.direction, Direction::TooHigh);
        assert_abs_diff_eq!(deviation.amount, 0.1856, epsilon = 0.001);
        assert_eq!(deviation.to_string(), "VPD is 0.19 kPa too high");

        assert_eq!(candidates.len(), 2);
        let humidity = candidates[0];
        assert_eq!(humidity.variable, Variable::Humidity);
        assert_eq!(humidity.action, Action::Increase);
        assert_abs_diff_eq!(humidity.target, 66.26, epsilon = 0.01);

        let temperature = candidates[1];
        assert_eq!(temperature.variable, Variable::Temperature(TemperatureUnit::Fahrenheit));
        assert_eq!(temperature.action, Action::Decrease);
        assert_eq!(temperature.target, 70.0);
        assert_eq!(temperature.delta, -5.0);
        assert_eq!(temperature.to_string(), "Decrease temperature -5.0°F (to 70.0°F)");
    }

    #[test]
    fn too_low_direction() {
        let rec = engine().recommend(Temperature::fahrenheit(70.0), 70.0, &TargetConfiguration::custom(1.2));
        let Recommendation::Adjust { deviation, candidates, .. } = &rec else {
            panic!("expected adjustment, got {:?}", rec);
        };
        assert_eq!(deviation.direction, Direction::TooLow);
        for c in candidates.iter() {
            match c.variable {
                Variable::Humidity => assert_eq!(c.action, Action::Decrease),
                Variable::Temperature(_) => assert_eq!(c.action, Action::Increase),
            }
        }
    }

    #[test]
    fn unreachable_temperature_stops_at_band_edge() {
        // At 70% the band tops out well below 1.6 kPa
        let rec = engine().recommend(Temperature::fahrenheit(75.0), 70.0, &TargetConfiguration::custom(1.6));
        let candidates = rec.candidates();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].variable, Variable::Humidity);
        assert_eq!(candidates[0].action, Action::Decrease);
        assert_abs_diff_eq!(candidates[0].target, 46.0, epsilon = 0.5);

        let temperature = candidates[1];
        assert_eq!(temperature.variable, Variable::Temperature(TemperatureUnit::Fahrenheit));
        assert_eq!(temperature.action, Action::Increase);
        assert_abs_diff_eq!(temperature.target, 85.0, epsilon = 1e-4);
        assert_eq!(temperature.to_string(), "Increase temperature +10.0°F (to 85.0°F)");
    }

    #[test]
    fn humidity_above_controls_omitted() {
        // 0.2 kPa at 75°F needs ~93 % RH
        let rec = engine().recommend(Temperature::fahrenheit(75.0), 60.0, &TargetConfiguration::custom(0.2));
        let candidates = rec.candidates();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].variable, Variable::Temperature(TemperatureUnit::Fahrenheit));
        assert_eq!(candidates[0].action, Action::Decrease);
        assert_abs_diff_eq!(candidates[0].target, 65.0, epsilon = 1e-4);
    }

    #[test]
    fn reading_converted_to_engine_unit() {
        let celsius_reading = Temperature::fahrenheit(75.0).in_unit(TemperatureUnit::Celsius);
        let a = engine().recommend(celsius_reading, 60.0, &TargetConfiguration::custom(1.0));
        let b = engine().recommend(Temperature::fahrenheit(75.0), 60.0, &TargetConfiguration::custom(1.0));
        assert_eq!(a.candidates().len(), b.candidates().len());
        assert_abs_diff_eq!(a.candidates()[1].current, 75.0, epsilon = 1e-9);
    }

    #[test]
    fn wider_tolerance() {
        let loose = engine().with_tolerance(0.2);
        let rec = loose.recommend(Temperature::fahrenheit(75.0), 60.0, &TargetConfiguration::custom(1.0));
        assert!(rec.is_on_target());
    }

    #[test]
    fn humidity_wording() {
        let adj = Adjustment::new(Variable::Humidity, 60.0, 68.2);
        assert_eq!(adj.to_string(), "Increase humidity +8% (to 68%)");
        let adj = Adjustment::new(Variable::Temperature(TemperatureUnit::Fahrenheit), 75.0, 72.6);
        assert_eq!(adj.to_string(), "Decrease temperature -2.4°F (to 72.6°F)");
    }
}
