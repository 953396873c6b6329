//! Parsing of typed input: menu choices, coordinates, names and markers.
//!
//! These checks are about shape only (numeric, in range, one character).
//! Whether a move is legal is decided by the rules engine.

use three_piece_rules::{Coordinate, Marker, MarkerError};
use tracing::instrument;

/// A choice from the two-option menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `[1]`: start, or accept the rematch.
    Proceed,
    /// `[2]`: leave the game.
    Exit,
}

/// Rejected input, shown to the user before prompting again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Menu answer other than 1 or 2.
    #[display("Invalid input, please try again.")]
    InvalidChoice,

    /// Coordinate line without exactly two parts.
    #[display("Please enter 2 numbers separated by space.")]
    WrongCount,

    /// Coordinate part that is not an integer.
    #[display("Invalid input. Please enter 2 valid numbers.")]
    NotNumeric,

    /// Coordinate part outside 1 to 3.
    #[display("Both numbers must be between 1 and 3.")]
    OutOfRange,

    /// Unusable marker.
    #[display("{}", _0)]
    Marker(MarkerError),

    /// The other player already uses this marker.
    #[display("{:?} is already taken by the other player", _0)]
    MarkerTaken(char),
}

impl std::error::Error for InputError {}

/// Parses a `[1]`/`[2]` menu answer.
#[instrument]
pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, InputError> {
    match line.trim() {
        "1" => Ok(MenuChoice::Proceed),
        "2" => Ok(MenuChoice::Exit),
        _ => Err(InputError::InvalidChoice),
    }
}

/// Parses `"row, col"`, `"row col"` or any mix of commas and whitespace.
#[instrument]
pub fn parse_coordinate(line: &str) -> Result<Coordinate, InputError> {
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(InputError::WrongCount);
    };

    let row: i64 = row.parse().map_err(|_| InputError::NotNumeric)?;
    let col: i64 = col.parse().map_err(|_| InputError::NotNumeric)?;
    Coordinate::checked(row, col).map_err(|_| InputError::OutOfRange)
}

/// Trims a typed name, falling back to `default` when nothing was entered.
pub fn parse_name(line: &str, default: &str) -> String {
    match line.trim() {
        "" => default.to_string(),
        name => name.to_string(),
    }
}

/// Parses a marker, falling back to `default` on an empty line and
/// refusing the marker already chosen by the other player.
#[instrument]
pub fn parse_marker(
    line: &str,
    default: char,
    taken: Option<Marker>,
) -> Result<Marker, InputError> {
    let trimmed = line.trim();
    let parsed = if trimmed.is_empty() {
        Marker::new(default)
    } else {
        Marker::try_from(trimmed)
    };
    let marker = parsed.map_err(InputError::Marker)?;

    if taken == Some(marker) {
        return Err(InputError::MarkerTaken(marker.as_char()));
    }
    Ok(marker)
}
