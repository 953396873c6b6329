//! Command-line interface for three_piece.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Three-piece Tic-Tac-Toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "three_piece")]
#[command(about = "Three-piece Tic-Tac-Toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./three_piece.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "three_piece_rules=trace" (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a game on this terminal
    Play {
        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Skip the loading animation
        #[arg(long)]
        no_animation: bool,
    },

    /// Print the rules and exit
    Rules,

    /// Print the effective configuration as TOML and exit
    Config,
}

impl Cli {
    /// The chosen command, with `play` as the default.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            no_color: false,
            no_animation: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_is_default() {
        let cli = Cli::parse_from(["three_piece"]);
        assert_eq!(
            cli.command(),
            Command::Play {
                no_color: false,
                no_animation: false
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "three_piece",
            "play",
            "--no-color",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(
            cli.command(),
            Command::Play {
                no_color: true,
                no_animation: false
            }
        );
    }

    #[test]
    fn test_rules_and_config_commands() {
        assert_eq!(
            Cli::parse_from(["three_piece", "rules"]).command(),
            Command::Rules
        );
        assert_eq!(
            Cli::parse_from(["three_piece", "config"]).command(),
            Command::Config
        );
    }
}
