//! Target Solvers
//!
//! Two single-variable inversions of the VPD model, each holding the other
//! variable fixed.
//!
//! ## Humidity (closed form)
//!
//! At a fixed effective temperature the deficit is linear in humidity:
//!
//! ```text
//! ea = es(T) − target
//! RH = ea / es(T) × 100
//! ```
//!
//! The reported humidity is clamped to the 30-90 % control range. The
//! unclamped value is kept so callers can tell a real answer from a
//! clamped one.
//!
//! ## Temperature (bisection)
//!
//! Temperature enters through the exponential, so the solver bisects the
//! grow-room band (65-85°F or 18-29°C) in the caller's unit. VPD rises with
//! temperature, so the bracket halves towards the target on every probe:
//!
//! ```text
//! low = band.min, high = band.max
//! repeat at most 20 times:
//!     mid = (low + high) / 2
//!     |vpd(mid) − target| < 0.01  → done
//!     vpd(mid) > target           → high = mid
//!     otherwise                   → low  = mid
//! not converged → (low + high) / 2
//! ```
//!
//! Each probe is an air temperature. When a leaf offset is configured it is
//! applied to the probe before the deficit is evaluated.

use crate::{
    config::{LeafOffset, TemperatureBand},
    constants::{
        instruments::{HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT},
        stages::{SOLVER_MAX_ITERATIONS, SOLVER_TOLERANCE_KPA},
    },
    psychrometrics::{effective_temperature, saturation_vapor_pressure, vpd_for},
    units::{Temperature, TemperatureUnit},
};

/// Humidity that reaches a target VPD at a fixed temperature
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HumiditySolution {
    /// Solution clamped to 30-90 %
    pub humidity: f64,
    /// Solution before clamping. Negative when the target exceeds the SVP.
    pub unconstrained: f64,
    /// True when `unconstrained` fell outside 30-90 %
    pub clamped: bool,
}

impl HumiditySolution {
    /// True when the solution lies strictly inside 30-90 %
    ///
    /// A solution exactly on a limit is not offered: the control can only
    /// hold it at its stop.
    pub fn is_feasible(&self) -> bool {
        self.unconstrained > HUMIDITY_MIN_PCT && self.unconstrained < HUMIDITY_MAX_PCT
    }
}

/// Closed-form humidity for `target_vpd` at `effective_temp_c`
pub fn humidity_for_target(effective_temp_c: f64, target_vpd: f64) -> HumiditySolution {
    let svp = saturation_vapor_pressure(effective_temp_c);
    let avp = svp - target_vpd;
    let unconstrained = avp / svp * 100.0;
    let humidity = unconstrained.clamp(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT);

    HumiditySolution {
        humidity,
        unconstrained,
        clamped: !(HUMIDITY_MIN_PCT..=HUMIDITY_MAX_PCT).contains(&unconstrained),
    }
}

/// Air temperature that reaches a target VPD at a fixed humidity
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureSolution {
    /// Converged probe, or the final bracket midpoint
    pub temperature: Temperature,
    /// Probes evaluated, at most 20
    pub iterations: u32,
    /// True when a probe came within 0.01 kPa of the target
    pub converged: bool,
    /// `|vpd(temperature) − target|` in kPa
    pub residual: f64,
}

/// Solver bound to a unit, a leaf offset and a search band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSolver {
    unit: TemperatureUnit,
    leaf: Option<LeafOffset>,
    band: TemperatureBand,
}

impl TargetSolver {
    /// Solver over the standard band for `unit`
    pub const fn new(unit: TemperatureUnit, leaf: Option<LeafOffset>) -> Self {
        Self {
            unit,
            leaf,
            band: TemperatureBand::for_unit(unit),
        }
    }

    /// Solver over a custom band. The band's unit becomes the solver's unit.
    pub const fn with_band(band: TemperatureBand, leaf: Option<LeafOffset>) -> Self {
        Self { unit: band.unit, leaf, band }
    }

    /// Unit temperatures are reported in
    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Band the temperature solver searches
    pub const fn band(&self) -> &TemperatureBand {
        &self.band
    }

    /// Humidity reaching `target_vpd` with the air held at `air`
    pub fn humidity_for_target(&self, air: Temperature, target_vpd: f64) -> HumiditySolution {
        let effective = effective_temperature(air, self.leaf);
        humidity_for_target(effective.to_celsius(), target_vpd)
    }

    /// Air temperature reaching `target_vpd` with humidity held at `humidity`
    pub fn temperature_for_target(&self, humidity: f64, target_vpd: f64) -> TemperatureSolution {
        let vpd_at = |t: f64| vpd_for(Temperature::new(t, self.unit), humidity, self.leaf);

        let mut low = self.band.min;
        let mut high = self.band.max;

        for i in 0..SOLVER_MAX_ITERATIONS {
            let mid = (low + high) / 2.0;
            let vpd = vpd_at(mid);
            let residual = libm::fabs(vpd - target_vpd);

            if residual < SOLVER_TOLERANCE_KPA {
                return TemperatureSolution {
                    temperature: Temperature::new(mid, self.unit),
                    iterations: i + 1,
                    converged: true,
                    residual,
                };
            }

            if vpd > target_vpd {
                high = mid;
            } else {
                low = mid;
            }
        }

        let mid = (low + high) / 2.0;
        let residual = libm::fabs(vpd_at(mid) - target_vpd);
        log_debug!(
            "temperature solve for {} kPa at {}% did not converge (residual {})",
            target_vpd, humidity, residual
        );

        TemperatureSolution {
            temperature: Temperature::new(mid, self.unit),
            iterations: SOLVER_MAX_ITERATIONS,
            converged: false,
            residual,
        }
    }
}
