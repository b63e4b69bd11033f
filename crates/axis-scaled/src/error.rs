//! Error types for the plugin surface.
//!
//! The per-sample transform is total and never returns an error. These
//! variants cover settings validation and host misuse of the plugin.

use crate::settings::{SettingField, ValueKind};

/// Error type for settings validation and plugin updates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AxisError {
    /// A percentage setting is outside `[0, 100]`.
    #[error("{field} value {value} is out of range [0, 100]")]
    PercentOutOfRange {
        /// The setting that was rejected.
        field: SettingField,
        /// The rejected value.
        value: i64,
    },

    /// A setting received a value of the wrong kind.
    #[error("{field} expects a {expected} value")]
    WrongValueKind {
        /// The setting that was rejected.
        field: SettingField,
        /// The kind of value the setting accepts.
        expected: ValueKind,
    },

    /// The configured output range is empty or reversed.
    #[error("low range {low}% must be below high range {high}%")]
    EmptyOutputRange {
        /// Configured low range percentage.
        low: i32,
        /// Configured high range percentage.
        high: i32,
    },

    /// The host bound fewer inputs than the plugin reads.
    #[error("expected at least {expected} input value(s), got {actual}")]
    MissingInput {
        /// Number of inputs the plugin reads.
        expected: usize,
        /// Number of inputs supplied.
        actual: usize,
    },

    /// `update` was called before the cached coefficients were built.
    #[error("axis corrector used before cache values were initialized")]
    NotInitialized,
}

/// Result alias for plugin surface operations.
pub type AxisResult<T> = Result<T, AxisError>;
