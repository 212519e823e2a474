//! Growth Stages and VPD Status Classification
//!
//! ## Stage Windows
//!
//! Plants want different deficits as they grow. Seedlings have small roots
//! and need humid air; flowering plants tolerate (and benefit from) drier
//! air that keeps dense canopies free of mold:
//!
//! ```text
//! Stage        min    optimal   max      (kPa)
//! Seedling     0.40   0.60      0.80
//! Vegetative   0.80   1.00      1.20
//! Flowering    1.00   1.25      1.50
//! ```
//!
//! ## Status Categories
//!
//! A reading is placed in one of five categories relative to its stage
//! window:
//!
//! ```text
//!        DangerouslyLow | TooLow |      Optimal      | TooHigh | DangerouslyHigh
//!   ─────────────────── ┼ ────── ┼ ───────────────── ┼ ─────── ┼ ──────────────
//!                   min-0.2     min                 max     max+0.4
//! ```
//!
//! Boundaries are closed on the side nearer the optimum: exactly `min` is
//! Optimal, exactly `min - 0.2` is TooLow, exactly `max + 0.4` is TooHigh.
//! Inside the window a reading within 0.1 kPa of the optimum is "Perfect",
//! otherwise "Good".
//!
//! ## Usage
//!
//! ```rust
//! use vpdguard_core::stage::{GrowthStage, StageClassifier, StatusCategory};
//!
//! let classifier = StageClassifier::new(GrowthStage::Vegetative);
//! assert!(classifier.classify(1.05).is_optimal());
//! assert_eq!(classifier.classify(1.4), StatusCategory::TooHigh);
//! assert_eq!(classifier.label(1.05).as_str(), "Perfect for Vegetative!");
//! ```

mod color;

pub use color::{color_for, Rgb, DANGEROUSLY_HIGH_COLOR, DANGEROUSLY_LOW_COLOR};

use core::fmt::{self, Write as _};
use core::str::FromStr;

use heapless::String;

use crate::{
    constants::stages::{
        FLOWERING_MAX_KPA, FLOWERING_MIN_KPA, FLOWERING_OPTIMAL_KPA, HIGH_MARGIN_KPA,
        LOW_MARGIN_KPA, PERFECT_TOLERANCE_KPA, SEEDLING_MAX_KPA, SEEDLING_MIN_KPA,
        SEEDLING_OPTIMAL_KPA, VEGETATIVE_MAX_KPA, VEGETATIVE_MIN_KPA, VEGETATIVE_OPTIMAL_KPA,
    },
    errors::{ValidationError, ValidationResult},
    validators::Validatable,
};

/// Human-readable status text, sized for the longest label
pub type StatusLabel = String<48>;

/// Crop growth stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GrowthStage {
    /// Seedlings and fresh clones
    Seedling,
    /// Vegetative growth
    #[default]
    Vegetative,
    /// Flowering / fruiting
    Flowering,
}

impl GrowthStage {
    /// All stages in crop order
    pub const ALL: [GrowthStage; 3] = [Self::Seedling, Self::Vegetative, Self::Flowering];

    /// Target VPD window for this stage
    pub const fn range(self) -> StageRange {
        match self {
            Self::Seedling => StageRange::new(SEEDLING_MIN_KPA, SEEDLING_MAX_KPA, SEEDLING_OPTIMAL_KPA),
            Self::Vegetative => StageRange::new(VEGETATIVE_MIN_KPA, VEGETATIVE_MAX_KPA, VEGETATIVE_OPTIMAL_KPA),
            Self::Flowering => StageRange::new(FLOWERING_MIN_KPA, FLOWERING_MAX_KPA, FLOWERING_OPTIMAL_KPA),
        }
    }

    /// Lowercase identifier, as stored in settings: `"vegetative"`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seedling => "seedling",
            Self::Vegetative => "vegetative",
            Self::Flowering => "flowering",
        }
    }

    /// Capitalized name for status text: `"Vegetative"`
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Seedling => "Seedling",
            Self::Vegetative => "Vegetative",
            Self::Flowering => "Flowering",
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GrowthStage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|stage| s.eq_ignore_ascii_case(stage.name()))
            .ok_or(ValidationError::UnknownVariant { kind: "growth stage" })
    }
}

/// Optimal VPD window (kPa) with `min < optimal < max`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageRange {
    /// Lower edge of the optimal window
    pub min: f64,
    /// Upper edge of the optimal window
    pub max: f64,
    /// Ideal VPD
    pub optimal: f64,
}

impl StageRange {
    /// Build a range without checking ordering. Used for the fixed stage table.
    pub const fn new(min: f64, max: f64, optimal: f64) -> Self {
        Self { min, max, optimal }
    }

    /// Build a custom range, rejecting unordered or non-finite bounds
    pub fn try_new(min: f64, max: f64, optimal: f64) -> ValidationResult<Self> {
        if !(min.is_valid() && max.is_valid() && optimal.is_valid()) {
            return Err(ValidationError::InvalidValue);
        }
        if !(min < optimal && optimal < max) {
            return Err(ValidationError::InvalidRange {
                reason: "expected min < optimal < max",
            });
        }
        Ok(Self::new(min, max, optimal))
    }

    /// True when `vpd` lies inside the optimal window
    pub fn contains(&self, vpd: f64) -> bool {
        vpd >= self.min && vpd <= self.max
    }

    /// Below this value a reading is dangerously low
    pub fn low_threshold(&self) -> f64 {
        self.min - LOW_MARGIN_KPA
    }

    /// Above this value a reading is dangerously high
    pub fn high_threshold(&self) -> f64 {
        self.max + HIGH_MARGIN_KPA
    }

    /// Width of the "too low" band
    pub const fn low_band(&self) -> f64 {
        LOW_MARGIN_KPA
    }

    /// Width of the "too high" band
    pub const fn high_band(&self) -> f64 {
        HIGH_MARGIN_KPA
    }

    /// Larger distance from the optimum to either window edge
    pub fn max_distance(&self) -> f64 {
        (self.optimal - self.min).max(self.max - self.optimal)
    }
}

/// How close an in-window reading is to the optimum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptimalQuality {
    /// Within 0.1 kPa of the optimum
    Perfect,
    /// Inside the window but further from the optimum
    Good,
}

/// Where a VPD reading falls relative to a stage window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusCategory {
    /// More than 0.2 kPa below the window
    DangerouslyLow,
    /// Up to 0.2 kPa below the window
    TooLow,
    /// Inside the window
    Optimal(OptimalQuality),
    /// Up to 0.4 kPa above the window
    TooHigh,
    /// More than 0.4 kPa above the window
    DangerouslyHigh,
}

/// Coarse grouping of categories, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Either dangerous category
    Danger,
    /// Too low
    Low,
    /// In the window
    Optimal,
    /// Too high
    High,
}

impl Severity {
    /// Lowercase identifier
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Low => "low",
            Self::Optimal => "optimal",
            Self::High => "high",
        }
    }
}

impl StatusCategory {
    /// True for either quality of in-window reading
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::Optimal(_))
    }

    /// Styling bucket
    pub const fn severity(self) -> Severity {
        match self {
            Self::DangerouslyLow | Self::DangerouslyHigh => Severity::Danger,
            Self::TooLow => Severity::Low,
            Self::Optimal(_) => Severity::Optimal,
            Self::TooHigh => Severity::High,
        }
    }

    /// Status text for a reading in `stage`
    pub fn label(self, stage: GrowthStage) -> StatusLabel {
        let mut label = StatusLabel::new();
        // Longest label is 37 bytes
        let _ = match self {
            Self::DangerouslyLow => label.push_str("Dangerously Low - Risk of mold/mildew").map_err(|_| fmt::Error),
            Self::TooLow => label.push_str("Too Low - Slow transpiration").map_err(|_| fmt::Error),
            Self::Optimal(OptimalQuality::Perfect) => write!(label, "Perfect for {}!", stage.display_name()),
            Self::Optimal(OptimalQuality::Good) => write!(label, "Good for {}", stage.display_name()),
            Self::TooHigh => label.push_str("Too High - Stress risk").map_err(|_| fmt::Error),
            Self::DangerouslyHigh => label.push_str("Dangerously High - Plant stress").map_err(|_| fmt::Error),
        };
        label
    }
}

/// Place a VPD reading in one of the five status categories
pub fn classify(vpd: f64, range: &StageRange) -> StatusCategory {
    if vpd < range.low_threshold() {
        StatusCategory::DangerouslyLow
    } else if vpd < range.min {
        StatusCategory::TooLow
    } else if vpd <= range.max {
        if libm::fabs(vpd - range.optimal) <= PERFECT_TOLERANCE_KPA {
            StatusCategory::Optimal(OptimalQuality::Perfect)
        } else {
            StatusCategory::Optimal(OptimalQuality::Good)
        }
    } else if vpd <= range.high_threshold() {
        StatusCategory::TooHigh
    } else {
        StatusCategory::DangerouslyHigh
    }
}

/// Classifier bound to one growth stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageClassifier {
    stage: GrowthStage,
    range: StageRange,
}

impl StageClassifier {
    /// Classifier using the stage's standard window
    pub const fn new(stage: GrowthStage) -> Self {
        Self { stage, range: stage.range() }
    }

    /// Classifier with a custom window, e.g. for a cultivar with its own targets
    pub const fn with_range(stage: GrowthStage, range: StageRange) -> Self {
        Self { stage, range }
    }

    /// Stage this classifier reports for
    pub const fn stage(&self) -> GrowthStage {
        self.stage
    }

    /// Window in use
    pub const fn range(&self) -> &StageRange {
        &self.range
    }

    /// Status category of a reading
    pub fn classify(&self, vpd: f64) -> StatusCategory {
        classify(vpd, &self.range)
    }

    /// Status and heatmap color of a reading
    pub fn color(&self, vpd: f64) -> Rgb {
        color_for(vpd, &self.range)
    }

    /// Status text of a reading
    pub fn label(&self, vpd: f64) -> StatusLabel {
        self.classify(vpd).label(self.stage)
    }
}

impl Default for StageClassifier {
    fn default() -> Self {
        Self::new(GrowthStage::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_windows_are_ordered() {
        for stage in GrowthStage::ALL {
            let r = stage.range();
            assert!(r.min < r.optimal && r.optimal < r.max, "{:?}", stage);
            assert_eq!(StageRange::try_new(r.min, r.max, r.optimal), Ok(r));
        }
        assert_eq!(GrowthStage::Flowering.range(), StageRange::new(1.0, 1.5, 1.25));
    }

    #[test]
    fn custom_range_rejects_bad_order() {
        assert!(matches!(
            StageRange::try_new(1.0, 0.8, 0.9),
            Err(ValidationError::InvalidRange { .. })
        ));
        assert!(StageRange::try_new(0.8, 1.2, 1.2).is_err());
        assert_eq!(StageRange::try_new(f64::NAN, 1.2, 1.0), Err(ValidationError::InvalidValue));
    }

    #[test]
    fn five_categories() {
        let veg = GrowthStage::Vegetative.range();
        assert_eq!(classify(0.3, &veg), StatusCategory::DangerouslyLow);
        assert_eq!(classify(0.7, &veg), StatusCategory::TooLow);
        assert_eq!(classify(1.0, &veg), StatusCategory::Optimal(OptimalQuality::Perfect));
        assert_eq!(classify(0.85, &veg), StatusCategory::Optimal(OptimalQuality::Good));
        assert_eq!(classify(1.3, &veg), StatusCategory::TooHigh);
        assert_eq!(classify(2.0, &veg), StatusCategory::DangerouslyHigh);
    }

    #[test]
    fn boundaries_resolve_toward_optimum() {
        for stage in GrowthStage::ALL {
            let r = stage.range();
            assert!(classify(r.min, &r).is_optimal());
            assert!(classify(r.max, &r).is_optimal());
            assert_eq!(classify(r.low_threshold(), &r), StatusCategory::TooLow);
            assert_eq!(classify(r.high_threshold(), &r), StatusCategory::TooHigh);
        }
    }

    #[test]
    fn perfect_band() {
        let flowering = GrowthStage::Flowering.range();
        assert_eq!(classify(1.3, &flowering), StatusCategory::Optimal(OptimalQuality::Perfect));
        assert_eq!(classify(1.45, &flowering), StatusCategory::Optimal(OptimalQuality::Good));
    }

    #[test]
    fn labels() {
        let stage = GrowthStage::Seedling;
        assert_eq!(StatusCategory::DangerouslyLow.label(stage).as_str(), "Dangerously Low - Risk of mold/mildew");
        assert_eq!(StatusCategory::TooLow.label(stage).as_str(), "Too Low - Slow transpiration");
        assert_eq!(StatusCategory::Optimal(OptimalQuality::Perfect).label(stage).as_str(), "Perfect for Seedling!");
        assert_eq!(StatusCategory::Optimal(OptimalQuality::Good).label(stage).as_str(), "Good for Seedling");
        assert_eq!(StatusCategory::TooHigh.label(stage).as_str(), "Too High - Stress risk");
        assert_eq!(StatusCategory::DangerouslyHigh.label(stage).as_str(), "Dangerously High - Plant stress");
    }

    #[test]
    fn severity_buckets() {
        assert_eq!(StatusCategory::DangerouslyLow.severity(), Severity::Danger);
        assert_eq!(StatusCategory::DangerouslyHigh.severity(), Severity::Danger);
        assert_eq!(StatusCategory::TooLow.severity().as_str(), "low");
        assert_eq!(StatusCategory::Optimal(OptimalQuality::Good).severity(), Severity::Optimal);
    }

    #[test]
    fn parse_stage() {
        assert_eq!("flowering".parse::<GrowthStage>(), Ok(GrowthStage::Flowering));
        assert_eq!("Seedling".parse::<GrowthStage>(), Ok(GrowthStage::Seedling));
        assert_eq!(
            "fruiting".parse::<GrowthStage>(),
            Err(ValidationError::UnknownVariant { kind: "growth stage" })
        );
    }

    #[test]
    fn classifier_agrees_with_free_functions() {
        let classifier = StageClassifier::new(GrowthStage::Flowering);
        let range = GrowthStage::Flowering.range();
        for vpd in [0.5, 0.9, 1.1, 1.25, 1.6, 2.5] {
            assert_eq!(classifier.classify(vpd), classify(vpd, &range));
            assert_eq!(classifier.color(vpd), color_for(vpd, &range));
        }
        assert_eq!(classifier.label(1.25).as_str(), "Perfect for Flowering!");
    }
}
