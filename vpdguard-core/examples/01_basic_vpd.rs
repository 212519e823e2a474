//! Basic VPD Example
//!
//! This example computes VPD for a few grow-room readings and shows how
//! each one is classified for every growth stage.
//!
//! ## What You'll Learn
//!
//! - Computing VPD from air temperature and humidity
//! - Evaluating at the leaf with a leaf-to-air offset
//! - Classifying a reading and getting its status color
//! - Computing daily light integral
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_vpd
//! ```

use vpdguard_core::{
    light::{daily_light_integral, guide_for_week, stage_for_week, GUIDE_WEEKS},
    psychrometrics::{saturation_vapor_pressure, vpd_for},
    GrowthStage, LeafOffset, StageClassifier, Temperature, TemperatureUnit,
};

fn main() {
    println!("VPDGuard Basic VPD Example");
    println!("==========================\n");

    // Saturation vapor pressure grows fast with temperature
    println!("Saturation vapor pressure:");
    for t in [15.0, 20.0, 25.0, 30.0] {
        println!("  {:4.1}°C: {:.3} kPa", t, saturation_vapor_pressure(t));
    }
    println!();

    let readings = [
        Temperature::fahrenheit(68.0),
        Temperature::fahrenheit(75.0),
        Temperature::celsius(28.0),
    ];
    let humidity = 60.0;

    println!("Air VPD at {}% RH:", humidity);
    for air in readings {
        let vpd = vpd_for(air, humidity, None);
        println!("  {}: {:.2} kPa", air, vpd);

        for stage in GrowthStage::ALL {
            let classifier = StageClassifier::new(stage);
            println!(
                "    {:<10} {:<40} {}",
                stage.display_name(),
                classifier.label(vpd),
                classifier.color(vpd)
            );
        }
    }
    println!();

    // Leaves run cooler than the air
    let leaf = LeafOffset::new(3.0, TemperatureUnit::Fahrenheit);
    let air = Temperature::fahrenheit(80.0);
    println!("Leaf offset {:.1}°{}:", leaf.value(), leaf.unit());
    println!("  air VPD:  {:.2} kPa", vpd_for(air, 55.0, None));
    println!("  leaf VPD: {:.2} kPa", vpd_for(air, 55.0, Some(leaf)));
    println!();

    println!("Daily light integral:");
    for (ppfd, hours) in [(300.0, 18.0), (500.0, 12.0), (900.0, 12.0)] {
        println!("  {:4} µmol/m²/s × {:2}h = {:.1} mol/m²/day", ppfd, hours, daily_light_integral(ppfd, hours));
    }
    println!();

    println!("Weekly DLI guide:");
    for week in 0..GUIDE_WEEKS {
        if let (Some(guide), Some(stage)) = (guide_for_week(week), stage_for_week(week)) {
            println!("  week {:2} {:<10} {:4.0} - {:4.0}", week, stage.display_name(), guide.regular, guide.high);
        }
    }
}
