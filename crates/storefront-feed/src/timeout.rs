//! Timeout configuration for the feed request.

use std::time::Duration;

/// Timeouts applied to the feed request.
///
/// Both are unset by default: the request waits as long as the transport
/// allows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Connection timeout.
    pub connect: Option<Duration>,
    /// Total operation timeout.
    pub total: Option<Duration>,
}

impl TimeoutConfig {
    /// No timeouts at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Create from a single total timeout. The connect phase gets a quarter
    /// of it.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: Some(total / 4),
            total: Some(total),
        }
    }

    /// Build from a whole number of seconds, as written in config files.
    pub fn from_secs(secs: Option<u64>) -> Self {
        secs.map(|s| Self::from_total(Duration::from_secs(s)))
            .unwrap_or_default()
    }

    pub fn is_enabled(&self) -> bool {
        self.total.is_some() || self.connect.is_some()
    }
}
