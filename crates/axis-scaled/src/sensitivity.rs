//! Sensitivity curve
//!
//! Linear mode multiplies the sample by the sensitivity factor. Curved mode
//! normalises the sample to `[-1, 1]` and blends it with its cube:
//!
//! `f(x) = s*x + (1 - s)*x^3`
//!
//! For `s` in `[0, 1]` this keeps both endpoints fixed and flattens the
//! response around neutral. `s = 1` is the identity in both modes.

use crate::sample::{AxisTransform, round_to_sample};

const SPAN: f64 = 65_535.0;
const OFFSET: f64 = 32_768.0;

/// Precomputed sensitivity coefficients.
///
/// # Examples
///
/// ```
/// use axis_scaled::{AxisTransform, Sensitivity};
///
/// let linear = Sensitivity::from_percent(50, true);
/// assert_eq!(linear.apply(10_000), 5_000);
///
/// let curved = Sensitivity::from_percent(50, false);
/// assert!(curved.apply(10_000) < 10_000);
/// assert_eq!(curved.apply(i16::MAX), i16::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensitivity {
    factor: f64,
    linear: bool,
}

impl Sensitivity {
    /// Derive the sensitivity stage from a percentage (`100` is neutral).
    pub fn from_percent(percent: i32, linear: bool) -> Self {
        Self {
            factor: f64::from(percent) / 100.0,
            linear,
        }
    }

    /// Sensitivity as a multiplier.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Whether the linear mode is selected.
    pub fn is_linear(&self) -> bool {
        self.linear
    }

    fn curve(&self, value: i16) -> f64 {
        let x = ((f64::from(value) + OFFSET) / SPAN) * 2.0 - 1.0;
        let y = self.factor * x + (1.0 - self.factor) * x.powi(3);
        ((y + 1.0) / 2.0) * SPAN - OFFSET
    }
}

impl AxisTransform for Sensitivity {
    #[inline]
    fn apply(&self, value: i16) -> i16 {
        if self.linear {
            round_to_sample(f64::from(value) * self.factor)
        } else {
            round_to_sample(self.curve(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [i16; 7] = [i16::MIN, -20_000, -1, 0, 1, 20_000, i16::MAX];

    #[test]
    fn test_neutral_is_identity_in_both_modes() {
        for linear in [true, false] {
            let sensitivity = Sensitivity::from_percent(100, linear);
            for value in SAMPLES {
                assert_eq!(sensitivity.apply(value), value, "linear={linear} value={value}");
            }
        }
    }

    #[test]
    fn test_linear_scales() {
        let sensitivity = Sensitivity::from_percent(25, true);
        assert_eq!(sensitivity.apply(20_000), 5_000);
        assert_eq!(sensitivity.apply(-20_000), -5_000);
        assert_eq!(sensitivity.apply(0), 0);
    }

    #[test]
    fn test_linear_above_neutral_saturates() {
        let sensitivity = Sensitivity::from_percent(200, true);
        assert_eq!(sensitivity.apply(10_000), 20_000);
        assert_eq!(sensitivity.apply(20_000), i16::MAX);
        assert_eq!(sensitivity.apply(-20_000), i16::MIN);
    }

    #[test]
    fn test_curve_keeps_endpoints() {
        for percent in [0, 25, 50, 75] {
            let sensitivity = Sensitivity::from_percent(percent, false);
            assert_eq!(sensitivity.apply(i16::MIN), i16::MIN);
            assert_eq!(sensitivity.apply(i16::MAX), i16::MAX);
        }
    }

    #[test]
    fn test_curve_softens_center() {
        let sensitivity = Sensitivity::from_percent(0, false);
        // Pure cubic: x = 0.5 maps to 0.125
        let out = sensitivity.apply(16_384);
        assert!((i32::from(out) - 4_096).abs() <= 2, "got {out}");
        assert!(sensitivity.apply(-16_384) < 0);
    }

    #[test]
    fn test_accessors() {
        let sensitivity = Sensitivity::from_percent(40, true);
        assert!((sensitivity.factor() - 0.4).abs() < 1e-12);
        assert!(sensitivity.is_linear());
    }
}
