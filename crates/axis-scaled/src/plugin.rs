//! Host-facing plugin surface.
//!
//! The host owns discovery, the settings UI, bindings and device I/O. This
//! module exposes what it needs to drive the corrector: static metadata,
//! validated setting assignment, the cache re-initialization hook and the
//! per-cycle `update` entry point.

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::corrector::AxisCorrector;
use crate::error::{AxisError, AxisResult};
use crate::settings::{AxisSettings, SettingField, SettingValue};

/// Static description of the plugin for the host's plugin browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginDescriptor {
    /// Display name.
    pub name: &'static str,
    /// Plugin browser group.
    pub group: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Names of the range inputs the plugin binds, in slot order.
    pub inputs: &'static [&'static str],
    /// Names of the range outputs the plugin writes, in slot order.
    pub outputs: &'static [&'static str],
    /// Settings groups, in display order.
    pub settings_groups: &'static [&'static str],
}

/// Receives corrected samples from [`AxisToAxisScaled::update`].
pub trait OutputSink {
    /// Write `value` to output `slot`.
    fn write_output(&mut self, slot: usize, value: i16);
}

impl<F: FnMut(usize, i16)> OutputSink for F {
    fn write_output(&mut self, slot: usize, value: i16) {
        self(slot, value)
    }
}

/// The "Axis to Axis Scaled" plugin.
///
/// Starts unconfigured. The host assigns settings, then calls
/// [`initialize_cache_values`](Self::initialize_cache_values) before the
/// first update and after every settings change.
///
/// # Examples
///
/// ```
/// use axis_scaled::{AxisToAxisScaled, SettingField, SettingValue};
///
/// let mut plugin = AxisToAxisScaled::new();
/// plugin.set_setting(SettingField::LowRange, SettingValue::Percent(0))?;
/// plugin.initialize_cache_values();
///
/// let mut written = None;
/// plugin.update(&[1_234], &mut |slot: usize, value: i16| written = Some((slot, value)))?;
/// assert_eq!(written, Some((0, 1_234)));
/// # Ok::<(), axis_scaled::AxisError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AxisToAxisScaled {
    settings: AxisSettings,
    corrector: Option<AxisCorrector>,
}

impl AxisToAxisScaled {
    /// Plugin metadata.
    pub const DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        name: "Axis to Axis Scaled",
        group: "Axis",
        description: "Map from one axis to another and scale the output",
        inputs: &["Axis"],
        outputs: &["Axis"],
        settings_groups: &["Scaling", "Sensitivity", "Dead zone"],
    };

    /// Number of bound inputs read per update.
    pub const INPUT_COUNT: usize = 1;

    /// Output slot the corrected sample is written to.
    pub const OUTPUT_SLOT: usize = 0;

    /// Create an unconfigured plugin with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unconfigured plugin with the given settings.
    pub fn with_settings(settings: AxisSettings) -> Self {
        Self {
            settings,
            corrector: None,
        }
    }

    /// Current settings, which may be newer than the cached coefficients.
    pub fn settings(&self) -> &AxisSettings {
        &self.settings
    }

    /// Validate and assign one setting.
    ///
    /// The cached coefficients are left as they are until the next
    /// [`initialize_cache_values`](Self::initialize_cache_values).
    ///
    /// # Errors
    ///
    /// Returns the validation error and leaves the settings unchanged.
    pub fn set_setting(&mut self, field: SettingField, value: SettingValue) -> AxisResult<()> {
        self.settings.set(field, value)
    }

    /// Validate a value for `field` without assigning it.
    ///
    /// # Errors
    ///
    /// See [`SettingField::validate`].
    pub fn validate(&self, field: SettingField, value: SettingValue) -> AxisResult<()> {
        field.validate(value)
    }

    /// Rebuild the cached coefficients from the current settings.
    pub fn initialize_cache_values(&mut self) {
        let settings = self.settings;
        if settings.low_range >= settings.high_range {
            warn!(
                low_range = settings.low_range,
                high_range = settings.high_range,
                "output range is empty or reversed"
            );
        }
        let corrector = AxisCorrector::new(&settings);
        debug!(
            ?settings,
            range_start = corrector.coefficients().range.range_start(),
            output_range = corrector.coefficients().range.output_range(),
            active_stages = corrector.coefficients().active_stages(),
            "axis coefficients rebuilt"
        );
        self.corrector = Some(corrector);
    }

    /// Whether the cached coefficients have been built.
    pub fn is_initialized(&self) -> bool {
        self.corrector.is_some()
    }

    /// Correct the first bound input and write it to the output slot.
    ///
    /// # Errors
    ///
    /// - [`AxisError::NotInitialized`] before the first
    ///   [`initialize_cache_values`](Self::initialize_cache_values)
    /// - [`AxisError::MissingInput`] if `values` is empty
    pub fn update<S: OutputSink + ?Sized>(&self, values: &[i16], sink: &mut S) -> AxisResult<()> {
        let corrector = self.corrector.as_ref().ok_or(AxisError::NotInitialized)?;
        let &raw = values.first().ok_or(AxisError::MissingInput {
            expected: Self::INPUT_COUNT,
            actual: values.len(),
        })?;
        let corrected = corrector.correct(raw);
        trace!(raw, corrected, "axis update");
        sink.write_output(Self::OUTPUT_SLOT, corrected);
        Ok(())
    }
}
