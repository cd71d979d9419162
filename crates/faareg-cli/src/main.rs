//! faareg command-line shell.
//!
//! Looks up one tail number and prints the registration as JSON. Lookup
//! logic lives in `faareg-fetcher`.

use anyhow::{Context, Result};
use clap::Parser;
use faareg_core::AppConfig;
use faareg_fetcher::{FetchError, RegistrationFetcher};
use std::process::ExitCode;
use tracing::{error, info};

/// Exit code for a number the registry reports as not assigned.
const EXIT_NOT_ASSIGNED: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "faareg", about = "Look up an FAA aircraft registration", version)]
struct Cli {
    /// Tail number to look up, with or without the leading N
    tail_number: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Override the registry inquiry endpoint
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl Cli {
    fn config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load_with_env().context("failed to load configuration")?;
        if let Some(base_url) = &self.base_url {
            config.registry.base_url.clone_from(base_url);
        }
        if let Some(timeout) = self.timeout {
            config.http.timeout_secs = timeout;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,faareg=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: &Cli) -> Result<String> {
    let config = cli.config()?;
    let fetcher = RegistrationFetcher::from_config(&config)?;
    let registration = fetcher.fetch(&cli.tail_number).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&registration)?
    } else {
        serde_json::to_string(&registration)?
    };
    Ok(json)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    info!("Starting faareg v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            match e.downcast_ref::<FetchError>() {
                Some(FetchError::NotAssigned { .. }) => ExitCode::from(EXIT_NOT_ASSIGNED),
                _ => ExitCode::FAILURE,
            }
        }
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
    fn test_cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "faareg",
            "265FT",
            "--pretty",
            "--base-url",
            "http://localhost:8080/NNumberResult",
            "--timeout",
            "5",
        ])
        .expect("parse arguments");

        assert_eq!(cli.tail_number, "265FT");
        assert!(cli.pretty);
        assert_eq!(
            cli.base_url.as_deref(),
            Some("http://localhost:8080/NNumberResult")
        );
        assert_eq!(cli.timeout, Some(5));
    }

    #[test]
    fn test_cli_requires_tail_number() {
        assert!(Cli::try_parse_from(["faareg"]).is_err());
    }
}
