//! Axis sample primitives shared by every correction stage.

/// Lowest representable axis sample.
pub const AXIS_MIN: i16 = i16::MIN;

/// Highest representable axis sample.
pub const AXIS_MAX: i16 = i16::MAX;

/// Number of distinct sample positions in the axis domain.
pub const AXIS_DOMAIN: i32 = 65_536;

/// Sample position treated as "0% activated" by the range rescaler.
///
/// One past [`AXIS_MAX`]; it only appears in the unclamped range formula.
pub const AXIS_MIDPOINT_OFFSET: i32 = 32_768;

/// A single correction stage in the axis pipeline.
///
/// Implementors hold coefficients derived once from the settings and map one
/// sample to one sample.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Must not panic for any input sample
pub trait AxisTransform: Copy + std::fmt::Debug {
    /// Apply the stage to a single sample.
    fn apply(&self, value: i16) -> i16;
}

/// Clamp a wide intermediate value into the representable sample range.
#[inline]
pub fn clamp_axis_range(value: i64) -> i16 {
    value.clamp(i64::from(AXIS_MIN), i64::from(AXIS_MAX)) as i16
}

/// Round a floating intermediate half-to-even and clamp it into the sample range.
///
/// NaN maps to `0`.
#[inline]
pub fn round_to_sample(value: f64) -> i16 {
    if value.is_nan() {
        return 0;
    }
    let rounded = value
        .round_ties_even()
        .clamp(f64::from(AXIS_MIN), f64::from(AXIS_MAX));
    clamp_axis_range(rounded as i64)
}

/// Negate a sample, saturating `-32768` to `32767`.
///
/// Involutive on `[-32767, 32767]`.
#[inline]
pub fn invert(value: i16) -> i16 {
    value.saturating_neg()
}
