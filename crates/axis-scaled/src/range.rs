//! Range rescaler
//!
//! Maps the full input axis onto a sub-range of the output domain given as
//! low/high percentages. Empirically a throttle at 0% reads `32768` and at
//! 100% reads `-32768`, so the "activated" fraction of the axis is
//! `(32768 - value) / 65536`.

use crate::sample::{AXIS_DOMAIN, AXIS_MAX, AXIS_MIDPOINT_OFFSET, AxisTransform, clamp_axis_range};

/// Lower clamp bound of the rescaled output.
pub const RANGE_OUTPUT_MIN: i64 = -(AXIS_MAX as i64);

/// Upper clamp bound of the rescaled output.
pub const RANGE_OUTPUT_MAX: i64 = AXIS_MAX as i64;

/// Precomputed coefficients for the range rescaler.
///
/// # Examples
///
/// ```
/// use axis_scaled::{AxisTransform, RangeScaler};
///
/// let scaler = RangeScaler::new(50, 100);
/// assert_eq!(scaler.rescale_raw(32_768), 0);
/// assert_eq!(scaler.apply(i16::MIN), -32_767);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeScaler {
    range_start: i64,
    range_end: i64,
}

impl RangeScaler {
    /// Derive the rescaler for an output range given in percent of the domain.
    ///
    /// Percentages are not range-checked; out-of-range or reversed values
    /// produce degenerate scaling rather than an error.
    pub fn new(low_range: i32, high_range: i32) -> Self {
        let domain = i64::from(AXIS_DOMAIN);
        let start = (domain * i64::from(low_range)) as f32 / 100.0;
        let end = (domain * i64::from(high_range)) as f32 / 100.0;
        Self {
            range_start: start.ceil() as i64,
            range_end: end.round_ties_even() as i64,
        }
    }

    /// First domain position of the output range.
    pub fn range_start(&self) -> i64 {
        self.range_start
    }

    /// Last domain position of the output range.
    pub fn range_end(&self) -> i64 {
        self.range_end
    }

    /// Width of the output range in domain positions.
    pub fn output_range(&self) -> i64 {
        self.range_end.saturating_sub(self.range_start)
    }

    /// Evaluate the rescale formula without clamping or narrowing.
    ///
    /// Accepts values outside the sample range, e.g. `32768` for the
    /// 0%-activated midpoint convention.
    pub fn rescale_raw(&self, value: i32) -> i64 {
        let offset = i64::from(AXIS_MIDPOINT_OFFSET).saturating_sub(i64::from(value));
        let activated = offset as f32 / AXIS_DOMAIN as f32;
        let scaled = (self.output_range() as f32 * activated).round_ties_even() as i64;
        i64::from(AXIS_MIDPOINT_OFFSET)
            .saturating_sub(self.range_start)
            .saturating_sub(scaled)
    }
}

impl AxisTransform for RangeScaler {
    #[inline]
    fn apply(&self, value: i16) -> i16 {
        let raw = self.rescale_raw(i32::from(value));
        clamp_axis_range(raw.clamp(RANGE_OUTPUT_MIN, RANGE_OUTPUT_MAX))
    }
}
