//! CLI command handlers. Each command is in its own file.

mod base_url;
mod check;
mod show;

pub use base_url::run_base_url;
pub use check::run_check;
pub use show::run_show;
