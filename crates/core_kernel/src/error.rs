//! Kernel error type

use std::fmt;

use thiserror::Error;
use crate::money::MoneyError;
use crate::temporal::TemporalError;

/// Errors surfaced by kernel types outside a single domain
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    /// A setting that does not parse into a kernel type
    #[error("Configuration error: {setting}: {reason}")]
    Configuration { setting: String, reason: String },
}

impl CoreError {
    pub fn configuration(setting: impl Into<String>, reason: impl fmt::Display) -> Self {
        CoreError::Configuration {
            setting: setting.into(),
            reason: reason.to_string(),
        }
    }

    /// Name of the offending setting, if any
    pub fn setting(&self) -> Option<&str> {
        match self {
            CoreError::Configuration { setting, .. } => Some(setting),
            _ => None,
        }
    }
}
