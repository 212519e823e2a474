//! Target Recommendations Example
//!
//! This example sets a custom target VPD and asks the engine how to reach
//! it from several starting conditions.
//!
//! ## What You'll Learn
//!
//! - Enabling and disabling a custom target
//! - Reading the deviation and the candidate adjustments
//! - Why some candidates are omitted
//! - Running the whole calculator through `evaluate`
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_target_recommendations
//! ```

use vpdguard_core::{
    evaluate, GrowthStage, Inputs, LeafOffset, LightConfiguration, Recommendation,
    RecommendationEngine, TargetConfiguration, Temperature, TemperatureUnit,
};

fn main() {
    println!("VPDGuard Target Recommendation Example");
    println!("======================================\n");

    let engine = RecommendationEngine::new(TemperatureUnit::Fahrenheit, None);
    let target = TargetConfiguration::custom(1.0);

    let conditions = [
        (75.0, 60.0), // a little dry
        (70.0, 60.0), // on target
        (68.0, 75.0), // too humid
    ];

    for (temp, humidity) in conditions {
        let air = Temperature::fahrenheit(temp);
        println!("{} / {}% RH, target {:.1} kPa", air, humidity, target.target_vpd());
        println!("{}\n", engine.recommend(air, humidity, &target));
    }

    // Humidity above 90% is dropped; temperature stops at the band edge
    let hard = TargetConfiguration::custom(0.2);
    let rec = engine.recommend(Temperature::fahrenheit(75.0), 60.0, &hard);
    println!("Target 0.2 kPa at 75°F / 60% RH:");
    println!("{}", rec);
    if let Recommendation::Adjust { candidates, .. } = &rec {
        println!("  ({} of 2 candidates reachable)", candidates.len());
    }
    println!();

    // Disabling resets the target to the stage optimum
    let mut config = TargetConfiguration::custom(1.4);
    config.disable(GrowthStage::Seedling);
    println!(
        "Disabled for seedlings: target resets to {:.2} kPa, recommendation: {:?}",
        config.target_vpd(),
        engine.recommend(Temperature::fahrenheit(75.0), 60.0, &config)
    );
    println!();

    // The full calculator in one call
    let inputs = Inputs::new(Temperature::celsius(26.0), 55.0)
        .with_stage(GrowthStage::Flowering)
        .with_leaf_offset(LeafOffset::default_for(TemperatureUnit::Celsius))
        .with_target(TargetConfiguration::custom(1.3))
        .with_light(LightConfiguration::new(800.0, 12.0));
    let result = evaluate(&inputs);

    println!("Full evaluation:");
    println!("  leaf temperature: {}", result.effective_temperature);
    println!("  VPD:    {:.2} kPa", result.vpd);
    println!("  status: {} ({})", result.label, result.status.severity().as_str());
    println!("  color:  {}", result.color.to_rgba(0.7));
    if let Some(dli) = result.dli {
        println!("  DLI:    {:.1} mol/m²/day", dli);
    }
    println!("  {}", result.recommendation);
}
