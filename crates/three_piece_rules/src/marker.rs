//! Single-character cell markers.

use serde::Serialize;
use tracing::instrument;

/// The symbol shown in a cell: either blank or a player's piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct Marker(char);

/// Why a symbol cannot be used as a player's marker.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MarkerError {
    /// Nothing was entered.
    #[display("A marker needs exactly one character")]
    Empty,

    /// More than one character was entered.
    #[display("A marker is a single character, got {:?}", _0)]
    TooLong(String),

    /// Whitespace would be indistinguishable from an empty cell.
    #[display("{:?} looks like an empty cell and cannot be a marker", _0)]
    Whitespace(char),
}

impl std::error::Error for MarkerError {}

impl Marker {
    /// The marker of an empty cell.
    pub const BLANK: Marker = Marker(' ');

    /// Creates a player marker. Whitespace is reserved for blank cells.
    #[instrument]
    pub fn new(symbol: char) -> Result<Self, MarkerError> {
        if symbol.is_whitespace() {
            return Err(MarkerError::Whitespace(symbol));
        }
        Ok(Self(symbol))
    }

    /// Returns the character drawn for this marker.
    pub fn as_char(self) -> char {
        self.0
    }

    /// True for the blank marker.
    pub fn is_blank(self) -> bool {
        self == Self::BLANK
    }
}

impl TryFrom<&str> for Marker {
    type Error = MarkerError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(MarkerError::Empty),
            (Some(symbol), None) => Self::new(symbol),
            (Some(_), Some(_)) => Err(MarkerError::TooLong(text.to_string())),
        }
    }
}

impl From<Marker> for char {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}
