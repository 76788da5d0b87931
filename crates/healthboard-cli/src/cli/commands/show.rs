//! `healthboard show` – render the System Health status view.

use anyhow::Result;
use healthboard_core::health::HealthView;

pub fn run_show(json: bool) -> Result<()> {
    let view = HealthView::new();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.render());
    }
    Ok(())
}
