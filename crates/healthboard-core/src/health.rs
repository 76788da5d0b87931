//! System health view model.
//!
//! Mirrors the status view the dashboard renders: a title plus the overall
//! status. The status values match what the deployment's health endpoint
//! reports on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall status reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// Database is fine but a secondary service (cache) is not.
    Degraded,
    Unhealthy,
    /// Any status string we do not recognize.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Degraded => "Degraded",
            HealthStatus::Unhealthy => "Unhealthy",
            HealthStatus::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// The status view: title plus current status.
#[derive(Debug, Clone, Serialize)]
pub struct HealthView {
    pub title: &'static str,
    pub status: HealthStatus,
}

impl HealthView {
    pub fn new() -> Self {
        Self {
            title: "System Health",
            status: HealthStatus::Healthy,
        }
    }

    /// Plain-text rendering: heading line plus status line.
    pub fn render(&self) -> String {
        format!("{}\nStatus: {}", self.title, self.status)
    }
}

impl Default for HealthView {
    fn default() -> Self {
        Self::new()
    }
}
