//! `healthboard check` – probe the deployment's health endpoint.

use anyhow::Result;
use healthboard_core::base_url::api_base_url;
use healthboard_core::config::HealthboardConfig;
use healthboard_core::probe;

/// Probe the health endpoint and print the report. Returns an error (exit 1)
/// when the endpoint reports a non-2xx status, so scripts can gate on it.
pub fn run_check(cfg: &HealthboardConfig, json: bool, path_override: Option<&str>) -> Result<()> {
    let mut cfg = cfg.clone();
    if let Some(path) = path_override {
        cfg.health_path = path.to_string();
    }

    let report = probe::probe(api_base_url(), &cfg)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}  HTTP {}  {}ms",
            report.url, report.http_status, report.latency_ms
        );
        match &report.body {
            Some(body) => {
                println!("status:   {}", body.status);
                if let Some(database) = &body.database {
                    println!("database: {}", database);
                }
                if let Some(cache) = &body.cache {
                    println!("cache:    {}", cache);
                }
            }
            None => println!("status:   {} (no parseable body)", report.status()),
        }
    }

    if !report.is_up() {
        anyhow::bail!("health endpoint returned HTTP {}", report.http_status);
    }
    Ok(())
}
