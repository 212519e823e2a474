//! Daily Light Integral
//!
//! PPFD is an instantaneous photon flux (µmol·m⁻²·s⁻¹). Plants respond to
//! the total delivered over a day, the DLI:
//!
//! ```text
//! DLI = PPFD × hours × 3600 / 1 000 000        [mol·m⁻²·day⁻¹]
//! ```
//!
//! 500 µmol·m⁻²·s⁻¹ for 12 hours gives 21.6 mol·m⁻²·day⁻¹.
//!
//! The weekly guide is a reference schedule for a typical photoperiod crop:
//! a "regular" and a "high-growth" DLI for each week from germination to
//! harvest.

use crate::{
    constants::physics::{MICROMOLES_PER_MOLE, SECONDS_PER_HOUR},
    stage::GrowthStage,
};

/// Daily light integral (mol·m⁻²·day⁻¹)
#[inline]
pub fn daily_light_integral(ppfd: f64, photoperiod_hours: f64) -> f64 {
    ppfd * photoperiod_hours * SECONDS_PER_HOUR / MICROMOLES_PER_MOLE
}

/// Recommended DLI for one week of the crop cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeeklyDli {
    /// Standard schedule
    pub regular: f64,
    /// Aggressive schedule with CO2 and strong genetics
    pub high: f64,
}

impl WeeklyDli {
    const fn new(regular: f64, high: f64) -> Self {
        Self { regular, high }
    }
}

/// Weeks covered by [`WEEKLY_DLI_GUIDE`]
pub const GUIDE_WEEKS: usize = 15;

/// Weeks `[0, 2)` are seedling weeks
pub const SEEDLING_WEEKS_END: usize = 2;

/// Weeks `[2, 8)` are vegetative, the rest flowering
pub const VEGETATIVE_WEEKS_END: usize = 8;

/// DLI schedule by week, week 0 first
pub const WEEKLY_DLI_GUIDE: [WeeklyDli; GUIDE_WEEKS] = [
    WeeklyDli::new(12.0, 16.0),
    WeeklyDli::new(20.0, 25.0),
    WeeklyDli::new(30.0, 38.0),
    WeeklyDli::new(40.0, 50.0),
    WeeklyDli::new(45.0, 55.0),
    WeeklyDli::new(31.0, 45.0),
    WeeklyDli::new(25.0, 35.0),
    WeeklyDli::new(28.0, 38.0),
    WeeklyDli::new(30.0, 42.0),
    WeeklyDli::new(34.0, 45.0),
    WeeklyDli::new(36.0, 48.0),
    WeeklyDli::new(38.0, 50.0),
    WeeklyDli::new(40.0, 50.0),
    WeeklyDli::new(36.0, 45.0),
    WeeklyDli::new(32.0, 40.0),
];

/// Guide entry for a week, `None` past the end of the schedule
pub fn guide_for_week(week: usize) -> Option<WeeklyDli> {
    WEEKLY_DLI_GUIDE.get(week).copied()
}

/// Growth stage a week of the schedule belongs to
pub fn stage_for_week(week: usize) -> Option<GrowthStage> {
    match week {
        w if w < SEEDLING_WEEKS_END => Some(GrowthStage::Seedling),
        w if w < VEGETATIVE_WEEKS_END => Some(GrowthStage::Vegetative),
        w if w < GUIDE_WEEKS => Some(GrowthStage::Flowering),
        _ => None,
    }
}
