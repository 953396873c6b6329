//! three_piece - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use three_piece::{Console, GameConfig, Session, SessionEnd};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = GameConfig::load(cli.config.as_deref()).context("Loading configuration")?;

    match cli.command() {
        Command::Play {
            no_color,
            no_animation,
        } => run_game(apply_overrides(config, no_color, no_animation)),
        Command::Rules => print_rules(config),
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn apply_overrides(config: GameConfig, no_color: bool, no_animation: bool) -> GameConfig {
    let config = if no_color {
        config.with_color(false)
    } else {
        config
    };
    if no_animation {
        config.with_loading_frames(0)
    } else {
        config
    }
}

#[instrument(skip(config))]
fn run_game(config: GameConfig) -> Result<()> {
    info!("Starting three_piece");
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout(), config);
    let mut session = Session::new(console);

    let end = session.run().context("Console session failed")?;
    info!(?end, rounds = session.rounds_played(), "Session ended");
    if end == SessionEnd::InputClosed {
        // Leave the shell prompt on a fresh line.
        writeln!(io::stdout())?;
    }
    Ok(())
}

fn print_rules(config: GameConfig) -> Result<()> {
    let mut console = Console::new(io::empty(), io::stdout(), config);
    console.rules()?;
    Ok(())
}
