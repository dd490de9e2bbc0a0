//! One-off postal code lookup.

use console::style;

use crate::config::Settings;
use crate::server::AppState;

/// Resolve a postal code and print the same JSON `/address` returns.
pub async fn cmd_lookup(settings: &Settings, postal_code: &str) -> anyhow::Result<()> {
    settings.ensure_directories()?;
    let ctx = settings.create_db_context()?;
    ctx.init_schema().await?;

    let state = AppState::new(settings)?;
    match state.address.lookup(postal_code).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            Err(e.into())
        }
    }
}
