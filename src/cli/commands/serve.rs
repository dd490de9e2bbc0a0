//! Web server command.

use console::style;

use crate::config::Settings;

const DEFAULT_PORT: u16 = 8080;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    settings.ensure_directories()?;

    println!("{} Preparing access log database...", style("→").cyan());
    let ctx = settings.create_db_context()?;
    match ctx.init_schema().await {
        Ok(()) => {
            tracing::info!("Access log schema ready at {}", settings.database_url());
            println!("  {} Database ready", style("✓").green());
        }
        Err(e) => {
            eprintln!("  {} Schema setup failed: {}", style("✗").red(), e);
            return Err(anyhow::anyhow!("Database setup failed: {}", e));
        }
    }

    println!(
        "{} Starting postal-distance at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8080" -> 0.0.0.0:8080
/// - Just a host: "127.0.0.1" -> 127.0.0.1:8080
/// - Host and port: "127.0.0.1:9000" -> 127.0.0.1:9000
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    let bind = bind.trim();
    if bind.is_empty() {
        anyhow::bail!("Bind address is empty");
    }

    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("0.0.0.0".to_string(), port));
    }

    // Bare IPv6 addresses contain colons but no port
    if bind.parse::<std::net::Ipv6Addr>().is_ok() {
        return Ok((bind.to_string(), DEFAULT_PORT));
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        let port = port_str
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("Invalid port in bind address '{}'", bind))?;
        return Ok((host.to_string(), port));
    }

    Ok((bind.to_string(), DEFAULT_PORT))
}
