//! Prelude for the axis-scaled crate.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```
//! use axis_scaled::prelude::*;
//!
//! let corrector = AxisCorrector::new(&AxisSettings::identity());
//! assert_eq!(corrector.correct(AXIS_MAX), AXIS_MAX);
//! ```

pub use crate::anti_deadzone::AntiDeadZone;
pub use crate::corrector::{AxisCorrector, Coefficients};
pub use crate::deadzone::DeadZone;
pub use crate::error::{AxisError, AxisResult};
pub use crate::plugin::{AxisToAxisScaled, OutputSink};
pub use crate::range::RangeScaler;
pub use crate::sample::{AXIS_MAX, AXIS_MIN, AxisTransform};
pub use crate::sensitivity::Sensitivity;
pub use crate::settings::{AxisSettings, SettingField, SettingValue};
