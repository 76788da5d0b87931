//! Logging init: file under the XDG state dir, or stderr when unavailable.

use std::fs;
use std::io;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,healthboard=debug"))
}

/// Initialize structured logging to `~/.local/state/healthboard/healthboard.log`,
/// falling back to stderr when the state dir cannot be created (read-only
/// home, missing XDG dirs).
pub fn init() {
    let writer = match open_log_file() {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();
}

fn open_log_file() -> Result<fs::File> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("healthboard")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("healthboard.log"))?;
    Ok(file)
}
