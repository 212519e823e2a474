//! Common fixtures for integration tests
//!
//! This module provides:
//! - Grow-room scenarios with known VPD and status
//! - Assertion helpers for recommendations

#![allow(dead_code)]

pub mod scenarios;

use vpdguard_core::{
    config::TemperatureBand,
    psychrometrics::vpd_for,
    recommend::{Adjustment, Variable},
    LeafOffset, Temperature,
};

/// Tolerance the temperature solver converges to
pub const SOLVER_TOLERANCE: f64 = 0.01;

/// Apply a candidate to the reading and return the resulting VPD
pub fn vpd_after(
    adjustment: &Adjustment,
    air: Temperature,
    humidity: f64,
    leaf: Option<LeafOffset>,
) -> f64 {
    match adjustment.variable {
        Variable::Humidity => vpd_for(air, adjustment.target, leaf),
        Variable::Temperature(unit) => {
            vpd_for(Temperature::new(adjustment.target, unit), humidity, leaf)
        }
    }
}

/// True when a temperature candidate sits on the edge of its search band
pub fn at_band_edge(adjustment: &Adjustment) -> bool {
    let Variable::Temperature(unit) = adjustment.variable else {
        return false;
    };
    let band = TemperatureBand::for_unit(unit);
    (adjustment.target - band.min).abs() < 1e-3 || (band.max - adjustment.target).abs() < 1e-3
}

/// Assert that every candidate lands on the target
///
/// A temperature candidate pinned to the band edge only has to close part
/// of the gap.
pub fn assert_candidates_reach_target(
    candidates: &[Adjustment],
    air: Temperature,
    humidity: f64,
    leaf: Option<LeafOffset>,
    target: f64,
) {
    let current = vpd_for(air, humidity, leaf);
    for candidate in candidates {
        let reached = vpd_after(candidate, air, humidity, leaf);
        if at_band_edge(candidate) {
            assert!(
                (reached - target).abs() <= (current - target).abs(),
                "{} moves away from {:.2} kPa",
                candidate,
                target
            );
            continue;
        }
        assert!(
            (reached - target).abs() < SOLVER_TOLERANCE,
            "{} reaches {:.4} kPa, target {:.2}",
            candidate,
            reached,
            target
        );
    }
}
