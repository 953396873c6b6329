//! Rules engine for three-piece tic-tac-toe.
//!
//! Each player owns three pieces. Once all three are down, a player moves by
//! lifting one of their own pieces and dropping it on a blank cell. A round is
//! won by holding both outer cells of the middle column, the middle row or the
//! anti-diagonal.
//!
//! # Architecture
//!
//! - **PositionSet**: coordinate-to-marker table shared by everything below
//! - **Board**: the nine cells, each blank or showing a player's marker
//! - **Player**: name, marker and the (at most three) cells held
//! - **Rules**: the three win patterns and their detection
//! - **Round**: turn order, placement/lift dispatch, round end and rematch
//!
//! # Example
//!
//! ```
//! use three_piece_rules::{Coordinate, Marker, MoveOutcome, Player, Round, WinPattern};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut round = Round::new(
//!     Player::new("Ada", Marker::new('X')?),
//!     Player::new("Bob", Marker::new('O')?),
//! );
//! round.play(Coordinate::new(1, 2)?)?;
//! round.play(Coordinate::new(2, 2)?)?;
//! let outcome = round.play(Coordinate::new(3, 2)?)?;
//! assert!(matches!(
//!     outcome,
//!     MoveOutcome::RoundOver(o) if *o.pattern() == WinPattern::Vertical
//! ));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod coordinate;
mod marker;
mod player;
mod position_set;
mod round;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, MoveOutcome, RoundOutcome};
pub use board::{Board, Grid};
pub use coordinate::{Coordinate, CoordinateError, MAX_AXIS, MIN_AXIS};
pub use marker::{Marker, MarkerError};
pub use player::{MAX_PLACED, Player, PlayerError, PlayerSlot};
pub use position_set::PositionSet;
pub use round::{Round, RoundPhase};
pub use rules::WinPattern;
