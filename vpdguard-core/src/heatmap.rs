//! VPD Heatmap Sampling
//!
//! The chart behind the calculator is a grid of VPD colors over
//! temperature (x) and humidity (y). This module produces the samples; how
//! they are drawn is up to the caller.
//!
//! ```text
//! humidity
//!   80 % ┌──────────────────────────┐
//!        │  cells: one per step     │
//!        │  color = color_for(vpd)  │
//!   40 % └──────────────────────────┘
//!       band.min                band.max   temperature
//! ```
//!
//! Both axes are half-open: a cell is emitted for `min, min + step, …`
//! strictly below `max`. With the default 1.0 step that is 20 × 40 cells in
//! Fahrenheit and 11 × 40 in Celsius. Cells come out row-major by
//! temperature, then humidity, computed on the fly.

use crate::{
    config::{LeafOffset, TemperatureBand},
    constants::instruments::{HEATMAP_HUMIDITY_MAX_PCT, HEATMAP_HUMIDITY_MIN_PCT, HEATMAP_STEP},
    psychrometrics::vpd_for,
    stage::{color_for, GrowthStage, Rgb, StageRange},
    units::{Temperature, TemperatureUnit},
};

/// Axes of the chart
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatmapSpec {
    /// Temperature axis
    pub temperature: TemperatureBand,
    /// Bottom of the humidity axis (%)
    pub humidity_min: f64,
    /// Top of the humidity axis (%)
    pub humidity_max: f64,
    /// Sample spacing on both axes
    pub step: f64,
}

impl HeatmapSpec {
    /// Standard chart for `unit`: grow-room band by 40-80 %
    pub const fn for_unit(unit: TemperatureUnit) -> Self {
        Self {
            temperature: TemperatureBand::for_unit(unit),
            humidity_min: HEATMAP_HUMIDITY_MIN_PCT,
            humidity_max: HEATMAP_HUMIDITY_MAX_PCT,
            step: HEATMAP_STEP,
        }
    }

    /// Samples along the temperature axis
    pub fn columns(&self) -> usize {
        axis_len(self.temperature.min, self.temperature.max, self.step)
    }

    /// Samples along the humidity axis
    pub fn rows(&self) -> usize {
        axis_len(self.humidity_min, self.humidity_max, self.step)
    }

    /// Normalized chart position of a reading
    ///
    /// `x` runs 0 → 1 left to right over temperature, `y` runs 0 → 1 top to
    /// bottom, so high humidity sits at the top. Not clamped: readings off
    /// the chart land outside [0, 1].
    pub fn marker_position(&self, temperature: f64, humidity: f64) -> (f64, f64) {
        let x = (temperature - self.temperature.min) / self.temperature.span();
        let y = (self.humidity_max - humidity) / (self.humidity_max - self.humidity_min);
        (x, y)
    }
}

impl Default for HeatmapSpec {
    fn default() -> Self {
        Self::for_unit(TemperatureUnit::default())
    }
}

// Count of `min + i * step` strictly below `max`, 0 when not representable
fn axis_len(min: f64, max: f64, step: f64) -> usize {
    if !(min.is_finite() && max.is_finite() && step.is_finite()) || step <= 0.0 || max <= min {
        return 0;
    }
    let count = libm::ceil((max - min) / step);
    if count.is_finite() && count < usize::MAX as f64 {
        count as usize
    } else {
        0
    }
}

/// One sample of the chart
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatmapCell {
    /// Air temperature, in the chart's unit
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// VPD at this point, leaf offset applied
    pub vpd: f64,
    /// Status color
    pub color: Rgb,
}

/// Heatmap for one stage, unit and leaf offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapGrid {
    spec: HeatmapSpec,
    leaf: Option<LeafOffset>,
    range: StageRange,
}

impl HeatmapGrid {
    /// Grid over `spec`, colored against `stage`
    pub fn new(spec: HeatmapSpec, leaf: Option<LeafOffset>, stage: GrowthStage) -> Self {
        Self { spec, leaf, range: stage.range() }
    }

    /// Standard chart in `unit`
    pub fn for_unit(unit: TemperatureUnit, leaf: Option<LeafOffset>, stage: GrowthStage) -> Self {
        Self::new(HeatmapSpec::for_unit(unit), leaf, stage)
    }

    /// Axes in use
    pub const fn spec(&self) -> &HeatmapSpec {
        &self.spec
    }

    /// Total number of cells, 0 when the count overflows `usize`
    pub fn len(&self) -> usize {
        let (columns, rows) = self.dimensions();
        columns * rows
    }

    // (columns, rows), both 0 when their product overflows
    fn dimensions(&self) -> (usize, usize) {
        let columns = self.spec.columns();
        let rows = self.spec.rows();
        match columns.checked_mul(rows) {
            Some(_) => (columns, rows),
            None => {
                log_warn!("heatmap of {} x {} cells is too large, treating as empty", columns, rows);
                (0, 0)
            }
        }
    }

    /// True when either axis is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at (`column`, `row`), `None` outside the grid
    pub fn cell(&self, column: usize, row: usize) -> Option<HeatmapCell> {
        let (columns, rows) = self.dimensions();
        if column >= columns || row >= rows {
            return None;
        }
        let temperature = self.spec.temperature.min + column as f64 * self.spec.step;
        let humidity = self.spec.humidity_min + row as f64 * self.spec.step;
        let vpd = vpd_for(Temperature::new(temperature, self.spec.temperature.unit), humidity, self.leaf);

        Some(HeatmapCell {
            temperature,
            humidity,
            vpd,
            color: color_for(vpd, &self.range),
        })
    }

    /// All cells, temperature-major
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            grid: self,
            index: 0,
            len: self.len(),
        }
    }

    /// Normalized position of the current reading, see [`HeatmapSpec::marker_position`]
    pub fn marker_position(&self, air: Temperature, humidity: f64) -> (f64, f64) {
        let air = air.in_unit(self.spec.temperature.unit);
        self.spec.marker_position(air.value, humidity)
    }
}

/// Iterator over [`HeatmapGrid`] cells
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    grid: &'a HeatmapGrid,
    index: usize,
    len: usize,
}

impl Iterator for Cells<'_> {
    type Item = HeatmapCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let (_, rows) = self.grid.dimensions();
        let cell = self.grid.cell(self.index / rows, self.index % rows);
        self.index += 1;
        cell
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}
