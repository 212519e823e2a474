//! Input Validation for Grower Controls
//!
//! ## Overview
//!
//! The model accepts any finite number, but the controls a grower uses have
//! ranges: a humidity slider does not go to 0%, a thermometer in a grow room
//! does not read 140°F. This module holds those ranges and applies them.
//!
//! ## Validation Posture
//!
//! The calculator favors silent correction over rejection, the way a form
//! input snaps back into range:
//!
//! ```rust
//! use vpdguard_core::validators::InputLimits;
//!
//! let s = InputLimits::HUMIDITY.sanitize(97.0, 60.0);
//! assert_eq!(s.value, 90.0);
//! assert!(s.corrected);
//! ```
//!
//! Callers that would rather surface the problem use the strict check:
//!
//! ```rust
//! use vpdguard_core::{validators::InputLimits, ValidationError};
//!
//! let err = InputLimits::HUMIDITY.check(97.0).unwrap_err();
//! assert!(matches!(err, ValidationError::OutOfRange { .. }));
//! ```
//!
//! ## Control Ranges
//!
//! | Control          | °F / unitless   | °C        |
//! |------------------|-----------------|-----------|
//! | Air temperature  | 60 - 95         | 15 - 35   |
//! | Leaf offset      | 1 - 6           | 0.5 - 3   |
//! | Humidity         | 30 - 90 %       |           |
//! | Target VPD       | 0.4 - 1.6 kPa   |           |
//! | PPFD             | 100 - 2000      |           |
//! | Photoperiod      | 8 - 24 h        |           |

mod limits;
mod utils;

pub use limits::{InputLimits, Sanitized};
pub use utils::{check_range, Validatable};
