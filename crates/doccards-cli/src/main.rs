mod cli;
mod handlers;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use doccards_core::AppConfig;
use doccards_domain::seed::seeded_board;
use doccards_domain::CardBoard;
use doccards_tui::{App, EventHandler};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Where log lines go for this run.
#[derive(Debug, PartialEq)]
enum LogTarget {
    /// `DOCCARDS_DEBUG_LOG` is set: everything at DEBUG into that file.
    File(PathBuf),
    /// The TUI owns the terminal, so nothing may be written to it.
    Silent,
    Stderr,
}

fn log_target(debug_log: Option<String>, launches_tui: bool) -> LogTarget {
    match debug_log {
        Some(path) if !path.is_empty() => LogTarget::File(PathBuf::from(path)),
        _ if launches_tui => LogTarget::Silent,
        _ => LogTarget::Stderr,
    }
}

fn init_tracing(target: LogTarget) -> anyhow::Result<()> {
    match target {
        LogTarget::File(log_path) => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)?;

            tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_max_level(tracing::Level::DEBUG)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .init();
        }
        LogTarget::Silent => {}
        LogTarget::Stderr => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(log_target(
        std::env::var("DOCCARDS_DEBUG_LOG").ok(),
        cli.command.is_none(),
    ))?;

    match cli.command {
        Some(Commands::Seed) => handlers::handle_seed()?,
        Some(Commands::Size { files }) => handlers::handle_size(files).await?,
        Some(Commands::Completions { shell }) => handlers::handle_completions(shell),
        None => {
            let mut config = match &cli.config {
                Some(path) => AppConfig::load_from(path)?,
                None => AppConfig::load(),
            };
            if let Some(dir) = cli.download_dir {
                config.download_dir = Some(dir);
            }
            if cli.empty {
                config.seed_cards = false;
            }

            let board = if config.seed_cards {
                seeded_board()
            } else {
                CardBoard::new()
            };
            tracing::info!("Starting with {} cards", board.len());

            let events = EventHandler::new();
            let app = App::new(&config, board, events.sender());
            app.run(events).await?;
        }
    }

    Ok(())
}
