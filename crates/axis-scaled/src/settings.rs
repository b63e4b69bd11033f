//! Plugin settings and their fixed schema.
//!
//! [`AxisSettings`] is the configuration the host edits. [`SettingField`]
//! tags each field so the host can render it (label, group, order) and
//! validate values before assigning them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Configuration for one axis-to-axis mapping.
///
/// Percentages are plain integers. The corrector never range-checks them;
/// out-of-range values only produce degenerate scaling. Hosts validate
/// assignments with [`SettingField::validate`] or [`AxisSettings::set`].
///
/// # Examples
///
/// ```
/// use axis_scaled::AxisSettings;
///
/// let settings: AxisSettings = serde_json::from_str(r#"{ "dead_zone": 5 }"#)?;
/// assert_eq!(settings.dead_zone, 5);
/// assert_eq!(settings.low_range, 50);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    /// Negate the rescaled sample.
    pub invert: bool,
    /// Use a linear multiply instead of the cubic sensitivity curve.
    pub linear: bool,
    /// Dead-zone size as a percentage of half the axis.
    pub dead_zone: i32,
    /// Anti-dead-zone floor as a percentage of half the axis.
    pub anti_dead_zone: i32,
    /// Sensitivity percentage, `100` is neutral.
    pub sensitivity: i32,
    /// Start of the output range as a percentage of the domain.
    pub low_range: i32,
    /// End of the output range as a percentage of the domain.
    pub high_range: i32,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            invert: false,
            linear: false,
            dead_zone: 0,
            anti_dead_zone: 0,
            sensitivity: 100,
            low_range: 50,
            high_range: 100,
        }
    }
}

impl AxisSettings {
    /// Settings that pass every sample through unchanged.
    ///
    /// The full input axis maps onto the full output axis and every optional
    /// stage is disabled.
    pub fn identity() -> Self {
        Self {
            low_range: 0,
            high_range: 100,
            ..Self::default()
        }
    }

    /// Validate `value` for `field` and assign it.
    ///
    /// Cached coefficients held elsewhere are not refreshed; the host must
    /// re-initialize its corrector afterwards.
    ///
    /// # Errors
    ///
    /// Returns the error from [`SettingField::validate`]; the settings are
    /// left untouched in that case.
    pub fn set(&mut self, field: SettingField, value: SettingValue) -> AxisResult<()> {
        field.validate(value)?;
        match (field, value) {
            (SettingField::Invert, SettingValue::Bool(v)) => self.invert = v,
            (SettingField::Linear, SettingValue::Bool(v)) => self.linear = v,
            (SettingField::DeadZone, SettingValue::Percent(v)) => self.dead_zone = v as i32,
            (SettingField::AntiDeadZone, SettingValue::Percent(v)) => {
                self.anti_dead_zone = v as i32;
            }
            (SettingField::Sensitivity, SettingValue::Percent(v)) => self.sensitivity = v as i32,
            (SettingField::LowRange, SettingValue::Percent(v)) => self.low_range = v as i32,
            (SettingField::HighRange, SettingValue::Percent(v)) => self.high_range = v as i32,
            (field, _) => {
                return Err(AxisError::WrongValueKind {
                    field,
                    expected: field.kind(),
                });
            }
        }
        Ok(())
    }

    /// Current value of `field`.
    pub fn get(&self, field: SettingField) -> SettingValue {
        match field {
            SettingField::Invert => SettingValue::Bool(self.invert),
            SettingField::Linear => SettingValue::Bool(self.linear),
            SettingField::DeadZone => SettingValue::Percent(i64::from(self.dead_zone)),
            SettingField::AntiDeadZone => SettingValue::Percent(i64::from(self.anti_dead_zone)),
            SettingField::Sensitivity => SettingValue::Percent(i64::from(self.sensitivity)),
            SettingField::LowRange => SettingValue::Percent(i64::from(self.low_range)),
            SettingField::HighRange => SettingValue::Percent(i64::from(self.high_range)),
        }
    }

    /// Validate every field, then the ordering of the output range.
    ///
    /// This is a host-side check. The corrector accepts any settings.
    ///
    /// # Errors
    ///
    /// Returns the first failing field, or [`AxisError::EmptyOutputRange`]
    /// when `low_range >= high_range`.
    pub fn validate(&self) -> AxisResult<()> {
        for field in SettingField::ALL {
            field.validate(self.get(field))?;
        }
        if self.low_range >= self.high_range {
            return Err(AxisError::EmptyOutputRange {
                low: self.low_range,
                high: self.high_range,
            });
        }
        Ok(())
    }
}

/// Kind of value a setting accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// A checkbox.
    Bool,
    /// An integer percentage in `[0, 100]`.
    Percent,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "boolean"),
            Self::Percent => write!(f, "percentage"),
        }
    }
}

/// A value submitted by the host for one setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value, validated as a percentage.
    Percent(i64),
}

/// Tag for each field of [`AxisSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingField {
    /// [`AxisSettings::invert`]
    Invert,
    /// [`AxisSettings::linear`]
    Linear,
    /// [`AxisSettings::dead_zone`]
    DeadZone,
    /// [`AxisSettings::anti_dead_zone`]
    AntiDeadZone,
    /// [`AxisSettings::sensitivity`]
    Sensitivity,
    /// [`AxisSettings::low_range`]
    LowRange,
    /// [`AxisSettings::high_range`]
    HighRange,
}

impl SettingField {
    /// Every field, in declaration order.
    pub const ALL: [SettingField; 7] = [
        SettingField::Invert,
        SettingField::Linear,
        SettingField::DeadZone,
        SettingField::AntiDeadZone,
        SettingField::Sensitivity,
        SettingField::LowRange,
        SettingField::HighRange,
    ];

    /// Settings key, matching the serialized field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Invert => "invert",
            Self::Linear => "linear",
            Self::DeadZone => "dead_zone",
            Self::AntiDeadZone => "anti_dead_zone",
            Self::Sensitivity => "sensitivity",
            Self::LowRange => "low_range",
            Self::HighRange => "high_range",
        }
    }

    /// Label shown next to the control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Invert => "Invert",
            Self::Linear => "Linear",
            Self::DeadZone | Self::Sensitivity => "Percentage",
            Self::AntiDeadZone => "Anti-dead zone",
            Self::LowRange => "Low range",
            Self::HighRange => "High range",
        }
    }

    /// Settings group the control is rendered in, if any.
    pub fn group(self) -> Option<&'static str> {
        match self {
            Self::Invert => None,
            Self::Linear | Self::Sensitivity => Some("Sensitivity"),
            Self::DeadZone | Self::AntiDeadZone => Some("Dead zone"),
            Self::LowRange | Self::HighRange => Some("Scaling"),
        }
    }

    /// Position of the control inside its group.
    pub fn order(self) -> u8 {
        match self {
            Self::Linear => 1,
            _ => 0,
        }
    }

    /// Kind of value this field accepts.
    pub fn kind(self) -> ValueKind {
        match self {
            Self::Invert | Self::Linear => ValueKind::Bool,
            Self::DeadZone
            | Self::AntiDeadZone
            | Self::Sensitivity
            | Self::LowRange
            | Self::HighRange => ValueKind::Percent,
        }
    }

    /// Check that `value` is acceptable for this field.
    ///
    /// # Errors
    ///
    /// - [`AxisError::WrongValueKind`] if the value kind does not match
    /// - [`AxisError::PercentOutOfRange`] if a percentage is outside `[0, 100]`
    pub fn validate(self, value: SettingValue) -> AxisResult<()> {
        match (self.kind(), value) {
            (ValueKind::Bool, SettingValue::Bool(_)) => Ok(()),
            (ValueKind::Percent, SettingValue::Percent(v)) => validate_percentage(self, v),
            (expected, _) => Err(AxisError::WrongValueKind {
                field: self,
                expected,
            }),
        }
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accept integer percentages in `[0, 100]`.
fn validate_percentage(field: SettingField, value: i64) -> AxisResult<()> {
    if (0..=100).contains(&value) {
        Ok(())
    } else {
        Err(AxisError::PercentOutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AxisSettings::default();
        assert!(!settings.invert);
        assert!(!settings.linear);
        assert_eq!(settings.dead_zone, 0);
        assert_eq!(settings.anti_dead_zone, 0);
        assert_eq!(settings.sensitivity, 100);
        assert_eq!(settings.low_range, 50);
        assert_eq!(settings.high_range, 100);
    }

    #[test]
    fn test_validate_percentage_bounds() {
        for field in [SettingField::DeadZone, SettingField::HighRange] {
            assert_eq!(field.validate(SettingValue::Percent(0)), Ok(()));
            assert_eq!(field.validate(SettingValue::Percent(100)), Ok(()));
            assert_eq!(
                field.validate(SettingValue::Percent(101)),
                Err(AxisError::PercentOutOfRange { field, value: 101 })
            );
            assert_eq!(
                field.validate(SettingValue::Percent(-1)),
                Err(AxisError::PercentOutOfRange { field, value: -1 })
            );
        }
    }

    #[test]
    fn test_validate_wrong_kind() {
        assert_eq!(
            SettingField::Invert.validate(SettingValue::Percent(1)),
            Err(AxisError::WrongValueKind {
                field: SettingField::Invert,
                expected: ValueKind::Bool,
            })
        );
        assert_eq!(
            SettingField::Sensitivity.validate(SettingValue::Bool(true)),
            Err(AxisError::WrongValueKind {
                field: SettingField::Sensitivity,
                expected: ValueKind::Percent,
            })
        );
    }

    #[test]
    fn test_set_and_get_round_trip_every_field() -> Result<(), AxisError> {
        let mut settings = AxisSettings::default();
        settings.set(SettingField::Invert, SettingValue::Bool(true))?;
        settings.set(SettingField::Linear, SettingValue::Bool(true))?;
        settings.set(SettingField::DeadZone, SettingValue::Percent(10))?;
        settings.set(SettingField::AntiDeadZone, SettingValue::Percent(20))?;
        settings.set(SettingField::Sensitivity, SettingValue::Percent(30))?;
        settings.set(SettingField::LowRange, SettingValue::Percent(40))?;
        settings.set(SettingField::HighRange, SettingValue::Percent(90))?;

        assert_eq!(
            settings,
            AxisSettings {
                invert: true,
                linear: true,
                dead_zone: 10,
                anti_dead_zone: 20,
                sensitivity: 30,
                low_range: 40,
                high_range: 90,
            }
        );
        assert_eq!(settings.get(SettingField::AntiDeadZone), SettingValue::Percent(20));
        assert_eq!(settings.get(SettingField::Linear), SettingValue::Bool(true));
        Ok(())
    }

    #[test]
    fn test_set_rejects_without_mutating() {
        let mut settings = AxisSettings::default();
        let result = settings.set(SettingField::DeadZone, SettingValue::Percent(250));
        assert!(matches!(result, Err(AxisError::PercentOutOfRange { .. })));
        assert_eq!(settings, AxisSettings::default());
    }

    #[test]
    fn test_validate_whole_settings() {
        assert_eq!(AxisSettings::default().validate(), Ok(()));
        assert_eq!(AxisSettings::identity().validate(), Ok(()));

        let reversed = AxisSettings {
            low_range: 80,
            high_range: 20,
            ..AxisSettings::default()
        };
        assert_eq!(
            reversed.validate(),
            Err(AxisError::EmptyOutputRange { low: 80, high: 20 })
        );

        let bad_sensitivity = AxisSettings {
            sensitivity: 150,
            ..AxisSettings::default()
        };
        assert_eq!(
            bad_sensitivity.validate(),
            Err(AxisError::PercentOutOfRange {
                field: SettingField::Sensitivity,
                value: 150,
            })
        );
    }

    #[test]
    fn test_schema_matches_groups() {
        assert_eq!(SettingField::Invert.group(), None);
        assert_eq!(SettingField::Linear.group(), Some("Sensitivity"));
        assert_eq!(SettingField::Linear.order(), 1);
        assert_eq!(SettingField::DeadZone.label(), "Percentage");
        assert_eq!(SettingField::AntiDeadZone.group(), Some("Dead zone"));
        assert_eq!(SettingField::LowRange.group(), Some("Scaling"));
    }

    #[test]
    fn test_field_names_match_serialized_keys() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(AxisSettings::default())?;
        for field in SettingField::ALL {
            assert!(json.get(field.name()).is_some(), "missing key {field}");
        }
        Ok(())
    }
}
