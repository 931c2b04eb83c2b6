use std::time::Duration;

use clap::Parser;
use oddsboard::adapters::OddsServiceClient;
use oddsboard::cli::{self, Cli, Commands, OutputMode};
use oddsboard::config::{AppConfig, LoggingConfig};
use oddsboard::tui;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    let client = OddsServiceClient::with_timeout(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?;
    let mode = OutputMode::from_json_flag(cli.json);

    match cli.command.unwrap_or(Commands::Dash) {
        Commands::Dash => {
            // Keep the alternate screen clean: dashboard logs go to file.
            let _guard = init_logging_file(&config.logging);
            tui::run_dashboard(client, &config.ui).await?;
        }
        Commands::Sports => {
            init_logging_simple();
            cli::run_sports(&client, mode).await?;
        }
        Commands::Events { sport_key } => {
            init_logging_simple();
            cli::run_events(&client, &sport_key, mode).await?;
        }
        Commands::Detail { event_id } => {
            init_logging_simple();
            cli::run_detail(&client, &event_id, mode).await?;
        }
        Commands::History {
            event_id,
            market,
            hours,
            bookmaker,
        } => {
            init_logging_simple();
            cli::run_history(&client, &event_id, market, hours, bookmaker.as_deref(), mode).await?;
        }
    }

    Ok(())
}

fn init_logging_simple() {
    // Minimal logging for one-shot commands
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}

fn init_logging_file(config: &LoggingConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let appender = tracing_appender::rolling::daily(&config.dir, "oddsboard.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("info,oddsboard={}", config.level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .init();

    guard
}
