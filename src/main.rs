//! ytnotes CLI entry point.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ytnotes::cli::{commands, Cli, Commands};
use ytnotes::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // API keys may live in a local .env file
    dotenvy::dotenv().ok();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("ytnotes={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Settings::default_config_path);
    let settings = Settings::load_from(Some(&config_path))?;

    match &cli.command {
        Commands::Summarize {
            url,
            words,
            output_dir,
            no_export,
        } => {
            commands::run_summarize(url, *words, output_dir.clone(), *no_export, settings).await?;
        }

        Commands::Interactive => {
            commands::run_interactive(settings).await?;
        }

        Commands::Resolve { url, json } => {
            commands::run_resolve(url, *json)?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings, &config_path)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings, config_path)?;
        }
    }

    Ok(())
}
