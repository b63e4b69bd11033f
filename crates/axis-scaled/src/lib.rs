//! Axis to Axis Scaled
//!
//! This crate remaps one analog axis onto another. A raw signed 16-bit sample
//! is rescaled onto a sub-range of the output domain and then passed through
//! optional inversion, dead-zone, anti-dead-zone and sensitivity corrections.
//!
//! # Overview
//!
//! The correction pipeline runs in a fixed order:
//! - **Range**: map the full input axis onto `[low_range%, high_range%]`
//! - **Invert**: negate the sample
//! - **Dead zone**: flatten the band around neutral to `0`
//! - **Anti-dead zone**: push small displacements out to a minimum magnitude
//! - **Sensitivity**: linear or cubic response curve
//!
//! Each optional stage only runs when its setting is non-default.
//!
//! # RT Safety
//!
//! - `Coefficients::from_settings()`: derives every stage coefficient once, at
//!   (re)configuration time
//! - `AxisCorrector::correct()`: O(1), no allocations, no I/O, never panics
//!
//! # Example
//!
//! ```
//! use axis_scaled::prelude::*;
//!
//! let settings = AxisSettings {
//!     low_range: 0,
//!     high_range: 100,
//!     dead_zone: 10,
//!     ..AxisSettings::default()
//! };
//!
//! // Derive coefficients when the configuration changes
//! let corrector = AxisCorrector::new(&settings);
//!
//! // Per-sample path
//! assert_eq!(corrector.correct(1_000), 0);
//! assert_eq!(corrector.correct(AXIS_MAX), AXIS_MAX);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod anti_deadzone;
pub mod corrector;
pub mod deadzone;
pub mod error;
pub mod plugin;
pub mod prelude;
pub mod range;
pub mod sample;
pub mod sensitivity;
pub mod settings;

pub use anti_deadzone::AntiDeadZone;
pub use corrector::{AxisCorrector, Coefficients};
pub use deadzone::DeadZone;
pub use error::{AxisError, AxisResult};
pub use plugin::{AxisToAxisScaled, OutputSink, PluginDescriptor};
pub use range::RangeScaler;
pub use sample::{AXIS_MAX, AXIS_MIN, AxisTransform};
pub use sensitivity::Sensitivity;
pub use settings::{AxisSettings, SettingField, SettingValue, ValueKind};
