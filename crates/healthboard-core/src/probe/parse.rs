//! Parse the health endpoint's JSON body.

use serde::{Deserialize, Serialize};

use crate::health::HealthStatus;

/// JSON shape reported by the health endpoint. The `database` and `cache`
/// fields carry either `"healthy"` or a free-form error message, so they
/// stay plain strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: HealthStatus,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub cache: Option<String>,
}

/// Parse a response body; `None` for non-JSON or unexpected shapes.
pub(crate) fn parse_health_body(body: &[u8]) -> Option<HealthBody> {
    serde_json::from_slice(body).ok()
}
