//! Axis correction pipeline
//!
//! [`Coefficients::from_settings`] derives every stage once per configuration
//! change. [`AxisCorrector::correct`] then runs the fixed pipeline on each
//! sample: range, invert, dead zone, anti-dead zone, sensitivity.

use crate::anti_deadzone::AntiDeadZone;
use crate::deadzone::DeadZone;
use crate::range::RangeScaler;
use crate::sample::{AxisTransform, invert};
use crate::sensitivity::Sensitivity;
use crate::settings::AxisSettings;

/// Sensitivity percentage that disables the sensitivity stage.
pub const NEUTRAL_SENSITIVITY: i32 = 100;

/// Immutable bundle of per-stage coefficients.
///
/// Optional stages are `None` when their setting is at its neutral value, so
/// the per-sample path skips them entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Output range rescaler, always applied.
    pub range: RangeScaler,
    /// Negate after rescaling.
    pub invert: bool,
    /// Dead zone, present when `dead_zone != 0`.
    pub dead_zone: Option<DeadZone>,
    /// Anti-dead zone, present when `anti_dead_zone != 0`.
    pub anti_dead_zone: Option<AntiDeadZone>,
    /// Sensitivity curve, present when `sensitivity != 100`.
    pub sensitivity: Option<Sensitivity>,
}

impl Coefficients {
    /// Derive the coefficient bundle for `settings`.
    pub fn from_settings(settings: &AxisSettings) -> Self {
        Self {
            range: RangeScaler::new(settings.low_range, settings.high_range),
            invert: settings.invert,
            dead_zone: (settings.dead_zone != 0).then(|| DeadZone::from_percent(settings.dead_zone)),
            anti_dead_zone: (settings.anti_dead_zone != 0)
                .then(|| AntiDeadZone::from_percent(settings.anti_dead_zone)),
            sensitivity: (settings.sensitivity != NEUTRAL_SENSITIVITY)
                .then(|| Sensitivity::from_percent(settings.sensitivity, settings.linear)),
        }
    }

    /// Number of stages that will run per sample, the range stage included.
    pub fn active_stages(&self) -> usize {
        1 + usize::from(self.invert)
            + usize::from(self.dead_zone.is_some())
            + usize::from(self.anti_dead_zone.is_some())
            + usize::from(self.sensitivity.is_some())
    }
}

impl AxisTransform for Coefficients {
    #[inline]
    fn apply(&self, value: i16) -> i16 {
        let mut value = self.range.apply(value);
        if self.invert {
            value = invert(value);
        }
        if let Some(dead_zone) = &self.dead_zone {
            value = dead_zone.apply(value);
        }
        if let Some(anti_dead_zone) = &self.anti_dead_zone {
            value = anti_dead_zone.apply(value);
        }
        if let Some(sensitivity) = &self.sensitivity {
            value = sensitivity.apply(value);
        }
        value
    }
}

/// Corrects raw axis samples for one configuration snapshot.
///
/// Always configured: it can only be built from settings. Rebuild it, or call
/// [`AxisCorrector::reconfigure`], whenever the settings change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCorrector {
    settings: AxisSettings,
    coefficients: Coefficients,
}

impl AxisCorrector {
    /// Snapshot `settings` and derive the coefficients.
    pub fn new(settings: &AxisSettings) -> Self {
        Self {
            settings: *settings,
            coefficients: Coefficients::from_settings(settings),
        }
    }

    /// Replace the settings snapshot and re-derive every coefficient.
    pub fn reconfigure(&mut self, settings: &AxisSettings) {
        *self = Self::new(settings);
    }

    /// Settings the coefficients were derived from.
    pub fn settings(&self) -> &AxisSettings {
        &self.settings
    }

    /// Derived coefficient bundle.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Run the correction pipeline on one raw sample.
    #[inline]
    pub fn correct(&self, value: i16) -> i16 {
        self.coefficients.apply(value)
    }
}

impl Default for AxisCorrector {
    fn default() -> Self {
        Self::new(&AxisSettings::default())
    }
}
