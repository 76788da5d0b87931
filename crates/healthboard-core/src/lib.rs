pub mod base_url;
pub mod config;
pub mod health;
pub mod logging;
pub mod probe;
