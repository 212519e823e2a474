//! Heatmap Example
//!
//! This example samples the VPD chart and prints it as a coarse character
//! map, with the current reading marked.
//!
//! ## What You'll Learn
//!
//! - Iterating heatmap cells without allocation
//! - Mapping cells to status categories
//! - Placing the current-reading marker
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_heatmap
//! ```

use vpdguard_core::{
    heatmap::HeatmapGrid,
    stage::{classify, Severity},
    GrowthStage, StatusCategory, Temperature, TemperatureUnit,
};

fn symbol(status: StatusCategory) -> char {
    match status.severity() {
        Severity::Danger => '#',
        Severity::Low => '-',
        Severity::Optimal => 'o',
        Severity::High => '+',
    }
}

fn main() {
    println!("VPDGuard Heatmap Example");
    println!("========================\n");

    let stage = GrowthStage::Vegetative;
    let grid = HeatmapGrid::for_unit(TemperatureUnit::Fahrenheit, None, stage);
    let spec = grid.spec();
    let range = stage.range();

    println!(
        "{} cells: {} temperatures × {} humidities ({} window {:.1}-{:.1} kPa)",
        grid.len(),
        spec.columns(),
        spec.rows(),
        stage.display_name(),
        range.min,
        range.max
    );
    println!("legend: # danger, - low, o optimal, + high\n");

    let reading = Temperature::fahrenheit(75.0);
    let (mx, my) = grid.marker_position(reading, 60.0);
    let marker_col = (mx * spec.columns() as f64) as usize;
    let marker_row = ((1.0 - my) * spec.rows() as f64) as usize;

    // Top row is the highest humidity
    for row in (0..spec.rows()).rev() {
        let mut line = String::new();
        for col in 0..spec.columns() {
            let ch = match grid.cell(col, row) {
                Some(_) if col == marker_col && row == marker_row => '@',
                Some(cell) => symbol(classify(cell.vpd, &range)),
                None => ' ',
            };
            line.push(ch);
        }
        println!("{:3.0}% {}", spec.humidity_min + row as f64 * spec.step, line);
    }
    println!(
        "     {:.0}°F{}{:.0}°F",
        spec.temperature.min,
        " ".repeat(spec.columns().saturating_sub(8)),
        spec.temperature.max
    );
    println!();

    let optimal = grid.cells().filter(|c| classify(c.vpd, &range).is_optimal()).count();
    println!("{} of {} cells are in the {} window", optimal, grid.len(), stage.display_name());
    println!("marker for {} / 60%: ({:.2}, {:.2})", reading, mx, my);
}
