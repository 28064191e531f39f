//! Error types for system monitor tools

use std::fmt::Display;

use thiserror::Error;

/// Why a tool invocation failed
///
/// Every variant is terminal for its invocation and reaches the caller as
/// the text of an error result.
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Failed to get {what}: {reason}")]
    MetricsUnavailable { what: &'static str, reason: String },

    #[error("Process not found: {0}")]
    ProcessNotFound(u32),

    #[error("Network interface not found: {0}")]
    InterfaceNotFound(String),

    /// An argument that parsed as JSON but makes no sense for the tool
    #[error("{0}")]
    InvalidArgument(String),
}

impl MonitorError {
    pub fn unavailable(what: &'static str, reason: impl Display) -> Self {
        MonitorError::MetricsUnavailable {
            what,
            reason: reason.to_string(),
        }
    }
}

pub type MonitorResult<T> = Result<T, MonitorError>;
