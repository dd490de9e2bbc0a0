//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod init;
mod logs;
mod lookup;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "postal-distance")]
#[command(about = "Postal code lookup service reporting the distance to Tokyo Station")]
#[command(version)]
pub struct Cli {
    /// Data directory or database file (overrides config file).
    /// Can be a directory containing postal-distance.db or a .db file directly.
    #[arg(long, short = 'd', global = true)]
    data: Option<PathBuf>,

    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Resolve relative paths from current working directory instead of config file location
    #[arg(long, global = true)]
    cwd: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and database
    Init,

    /// Start the HTTP server
    Serve {
        /// Address to bind: port, host, or host:port (default: 0.0.0.0:8080)
        bind: Option<String>,
    },

    /// Look up a single postal code and print the JSON response
    Lookup {
        /// Postal code to resolve
        postal_code: String,
    },

    /// Show request counts per postal code
    Logs {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Also list the most recent N lookups
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        recent: Option<u32>,
    },
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        use_cwd: cli.cwd,
        data: cli.data,
    };
    let (settings, _config) = load_settings_with_options(options).await;

    match cli.command {
        Commands::Init => init::cmd_init(&settings).await,
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            serve::cmd_serve(&settings, &bind).await
        }
        Commands::Lookup { postal_code } => lookup::cmd_lookup(&settings, &postal_code).await,
        Commands::Logs { json, recent } => logs::cmd_logs(&settings, json, recent).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_with_global_flags() {
        let cli = Cli::try_parse_from([
            "postal-distance",
            "serve",
            "127.0.0.1:9000",
            "--data",
            "/tmp/lookups.db",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/lookups.db")));
        match cli.command {
            Commands::Serve { bind } => assert_eq!(bind.as_deref(), Some("127.0.0.1:9000")),
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_logs_recent_must_be_positive() {
        for bad in ["0", "-3", "many"] {
            assert!(
                Cli::try_parse_from(["postal-distance", "logs", "--recent", bad]).is_err(),
                "{}",
                bad
            );
        }

        let cli = Cli::try_parse_from(["postal-distance", "logs", "--recent", "5"]).unwrap();
        match cli.command {
            Commands::Logs { recent, json } => {
                assert_eq!(recent, Some(5));
                assert!(!json);
            }
            _ => panic!("expected logs"),
        }
    }

    #[test]
    fn test_lookup_requires_postal_code() {
        assert!(Cli::try_parse_from(["postal-distance", "lookup"]).is_err());
    }
}
