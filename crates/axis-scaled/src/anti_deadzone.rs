//! Anti-dead zone
//!
//! Compensates for a dead zone further down the chain (in a game or in the
//! device firmware) by pushing any displacement from neutral out to a
//! minimum magnitude.

use crate::sample::{AXIS_MAX, AxisTransform, round_to_sample};

/// Precomputed anti-dead-zone coefficients.
///
/// # Examples
///
/// ```
/// use axis_scaled::{AntiDeadZone, AxisTransform};
///
/// let anti = AntiDeadZone::from_percent(25);
/// assert_eq!(anti.apply(0), 0);
/// assert!(anti.apply(1) >= anti.min_magnitude());
/// assert_eq!(anti.apply(i16::MAX), i16::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntiDeadZone {
    floor: f64,
    scale: f64,
}

impl AntiDeadZone {
    /// Derive an anti-dead zone whose floor is `percent` of half the axis.
    pub fn from_percent(percent: i32) -> Self {
        let max = f64::from(AXIS_MAX);
        let floor = max * f64::from(percent) / 100.0;
        let scale = (max - floor) / max;
        Self { floor, scale }
    }

    /// Smallest output magnitude produced for any nonzero input.
    pub fn min_magnitude(&self) -> i16 {
        round_to_sample(self.floor.max(0.0))
    }
}

impl AxisTransform for AntiDeadZone {
    #[inline]
    fn apply(&self, value: i16) -> i16 {
        if value == 0 {
            return 0;
        }
        let magnitude = f64::from(value.unsigned_abs()) * self.scale + self.floor;
        round_to_sample(magnitude.copysign(f64::from(value)))
    }
}
