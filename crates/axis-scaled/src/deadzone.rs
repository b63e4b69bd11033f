//! Dead zone
//!
//! Flattens the band around neutral to `0` and rescales the remainder so the
//! output still reaches full scale at the axis extremes.

use crate::sample::{AXIS_MAX, AxisTransform, round_to_sample};

/// Precomputed dead-zone coefficients.
///
/// # Examples
///
/// ```
/// use axis_scaled::{AxisTransform, DeadZone};
///
/// let dead_zone = DeadZone::from_percent(10);
/// assert_eq!(dead_zone.apply(3_000), 0);
/// assert_eq!(dead_zone.apply(-3_000), 0);
/// assert_eq!(dead_zone.apply(i16::MAX), i16::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadZone {
    cutoff: f64,
    scale: f64,
}

impl DeadZone {
    /// Derive a dead zone covering `percent` of half the axis on each side.
    ///
    /// `percent >= 100` flattens the whole axis to `0`.
    pub fn from_percent(percent: i32) -> Self {
        let max = f64::from(AXIS_MAX);
        let cutoff = max * f64::from(percent) / 100.0;
        let remainder = max - cutoff;
        let scale = if remainder > 0.0 { max / remainder } else { 0.0 };
        Self { cutoff, scale }
    }

    /// Largest input magnitude that still maps to `0`.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Whether `value` falls inside the dead band.
    pub fn contains(&self, value: i16) -> bool {
        f64::from(value.unsigned_abs()) <= self.cutoff || self.scale <= 0.0
    }
}

impl AxisTransform for DeadZone {
    #[inline]
    fn apply(&self, value: i16) -> i16 {
        if value == 0 || self.contains(value) {
            return 0;
        }
        let magnitude = (f64::from(value.unsigned_abs()) - self.cutoff) * self.scale;
        round_to_sample(magnitude.copysign(f64::from(value)))
    }
}
