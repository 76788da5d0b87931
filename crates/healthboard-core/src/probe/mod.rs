//! Health endpoint probing.
//!
//! Uses the curl crate (libcurl) to GET the deployment's health endpoint
//! and parse the JSON body the backend reports. An HTTP 503 still produces
//! a report (the body carries the degradation detail); only transport
//! failures are errors.

mod parse;

use anyhow::{Context, Result};
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::config::HealthboardConfig;
use crate::health::HealthStatus;

pub use parse::HealthBody;

/// Result of one probe: request URL, HTTP status, latency, and the parsed
/// body when the endpoint returned recognizable JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub url: String,
    pub http_status: u32,
    pub latency_ms: u64,
    pub body: Option<HealthBody>,
}

impl ProbeReport {
    /// Whether the deployment should be treated as up. The backend keeps
    /// HTTP 200 when the database is healthy even if the cache is degraded,
    /// so the status code alone decides.
    pub fn is_up(&self) -> bool {
        (200..300).contains(&self.http_status)
    }

    /// Overall status: the body's status when present, otherwise inferred
    /// from the HTTP status code.
    pub fn status(&self) -> HealthStatus {
        match &self.body {
            Some(body) => body.status,
            None if self.is_up() => HealthStatus::Unknown,
            None => HealthStatus::Unhealthy,
        }
    }
}

/// Performs a GET against `{base_url}{health_path}` and returns the report.
///
/// Follows redirects and honors the configured timeouts. Runs in the
/// current thread and blocks until the response is read.
pub fn probe(base_url: &str, cfg: &HealthboardConfig) -> Result<ProbeReport> {
    let url = format!("{}{}", base_url, cfg.health_path);
    let mut body_buf: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&url).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.request_timeout_secs))?;
    // A 503 carries the degradation detail in its body; never fail on status.
    easy.fail_on_error(false)?;

    let started = Instant::now();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body_buf.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("GET {} failed", url))?;
    }
    let latency = started.elapsed();

    let code = easy.response_code().context("no response code")?;
    let body = parse::parse_health_body(&body_buf);

    tracing::debug!(
        "probe {} -> HTTP {} in {}ms",
        url,
        code,
        latency.as_millis()
    );

    Ok(ProbeReport {
        url,
        http_status: code,
        latency_ms: latency.as_millis() as u64,
        body,
    })
}
