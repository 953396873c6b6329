//! Console settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use three_piece_rules::Marker;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "three_piece.toml";

/// Presentation settings for the console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Colorize headers, prompts and errors.
    #[serde(default = "default_true")]
    color: bool,

    /// Clear the terminal before menus and the board.
    #[serde(default = "default_true")]
    clear_screen: bool,

    /// Number of frames in the loading animation.
    #[serde(default = "default_loading_frames")]
    loading_frames: u32,

    /// Delay between loading frames, in milliseconds.
    #[serde(default = "default_loading_frame_ms")]
    loading_frame_ms: u64,

    /// Marker given to player 1 when they leave the prompt empty.
    #[serde(default = "default_player_one_marker")]
    player_one_default_marker: char,

    /// Marker given to player 2 when they leave the prompt empty.
    #[serde(default = "default_player_two_marker")]
    player_two_default_marker: char,
}

fn default_true() -> bool {
    true
}

fn default_loading_frames() -> u32 {
    4
}

fn default_loading_frame_ms() -> u64 {
    500
}

fn default_player_one_marker() -> char {
    'X'
}

fn default_player_two_marker() -> char {
    'O'
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            clear_screen: default_true(),
            loading_frames: default_loading_frames(),
            loading_frame_ms: default_loading_frame_ms(),
            player_one_default_marker: default_player_one_marker(),
            player_two_default_marker: default_player_two_marker(),
        }
    }
}

impl GameConfig {
    /// Settings for scripted runs: no color, no clearing, no animation delay.
    pub fn plain() -> Self {
        Self::default()
            .with_color(false)
            .with_clear_screen(false)
            .with_loading_frames(0)
            .with_loading_frame_ms(0)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if present,
    /// else the defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks that both default markers are usable and distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let one = Marker::new(self.player_one_default_marker)
            .map_err(|e| ConfigError::new(format!("player_one_default_marker: {}", e)))?;
        let two = Marker::new(self.player_two_default_marker)
            .map_err(|e| ConfigError::new(format!("player_two_default_marker: {}", e)))?;
        if one == two {
            return Err(ConfigError::new(format!(
                "Both players default to the marker {:?}",
                one.as_char()
            )));
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
