//! Access log report.

use console::style;

use crate::access_log::AccessLogStore;
use crate::config::Settings;
use crate::server::AccessLogsResponse;

/// Print request counts per postal code.
pub async fn cmd_logs(settings: &Settings, json: bool, recent: Option<u32>) -> anyhow::Result<()> {
    let ctx = settings.create_db_context()?;
    ctx.init_schema().await?;
    let repo = ctx.access_logs();

    let access_logs = repo.count_by_postal_code().await?;

    if json {
        let body = AccessLogsResponse { access_logs };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if access_logs.is_empty() {
        println!("{} No lookups recorded yet", style("!").yellow());
        return Ok(());
    }

    let total = repo.count().await?;
    println!(
        "{} {} lookups across {} postal codes",
        style("→").cyan(),
        total,
        access_logs.len()
    );
    println!(
        "{:<12} {:>8}",
        style("Postal code").bold(),
        style("Requests").bold()
    );
    for entry in &access_logs {
        println!("{:<12} {:>8}", entry.postal_code, entry.request_count);
    }

    if let Some(limit) = recent {
        println!();
        println!("{} Most recent lookups", style("→").cyan());
        for entry in repo.recent(limit).await? {
            println!(
                "  #{:<6} {:<12} {}",
                entry.id,
                entry.postal_code,
                style(entry.created_at.to_rfc3339()).dim()
            );
        }
    }

    Ok(())
}
