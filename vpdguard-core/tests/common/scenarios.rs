//! Pre-built grow-room scenarios
//!
//! Each scenario is a reading with the VPD it should produce and the status
//! it should get. VPD values are from the Tetens equation.

use vpdguard_core::{GrowthStage, StatusCategory, Temperature};
use vpdguard_core::stage::OptimalQuality;

/// A reading and what the calculator should say about it
pub struct GrowRoom {
    pub name: &'static str,
    pub air: Temperature,
    pub humidity: f64,
    pub stage: GrowthStage,
    pub expected_vpd: f64,
    pub expected_status: StatusCategory,
}

/// Reference scenarios across stages and units
pub fn grow_rooms() -> [GrowRoom; 6] {
    [
        GrowRoom {
            name: "propagation dome",
            air: Temperature::fahrenheit(75.0),
            humidity: 80.0,
            stage: GrowthStage::Seedling,
            expected_vpd: 0.5928,
            expected_status: StatusCategory::Optimal(OptimalQuality::Perfect),
        },
        GrowRoom {
            name: "veg tent",
            air: Temperature::fahrenheit(75.0),
            humidity: 60.0,
            stage: GrowthStage::Vegetative,
            expected_vpd: 1.1856,
            expected_status: StatusCategory::Optimal(OptimalQuality::Good),
        },
        GrowRoom {
            name: "cool veg room",
            air: Temperature::fahrenheit(70.0),
            humidity: 60.0,
            stage: GrowthStage::Vegetative,
            expected_vpd: 1.0016,
            expected_status: StatusCategory::Optimal(OptimalQuality::Perfect),
        },
        GrowRoom {
            name: "flower room",
            air: Temperature::celsius(26.0),
            humidity: 50.0,
            stage: GrowthStage::Flowering,
            expected_vpd: 1.6807,
            expected_status: StatusCategory::TooHigh,
        },
        GrowRoom {
            name: "humid flower room",
            air: Temperature::celsius(22.0),
            humidity: 85.0,
            stage: GrowthStage::Flowering,
            expected_vpd: 0.3966,
            expected_status: StatusCategory::DangerouslyLow,
        },
        GrowRoom {
            name: "dry seedling tray",
            air: Temperature::fahrenheit(85.0),
            humidity: 40.0,
            stage: GrowthStage::Seedling,
            expected_vpd: 2.4658,
            expected_status: StatusCategory::DangerouslyHigh,
        },
    ]
}
