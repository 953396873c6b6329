//! First-class move types.
//!
//! A move is a request, not a side effect: the seat that wants to act and
//! the cell it names. Whether it places or lifts a piece is decided by the
//! round from that player's current piece count.

use super::{Coordinate, PlayerError, PlayerSlot, WinPattern};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A request by `player` to act on `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The seat making the move.
    pub player: PlayerSlot,
    /// The cell named by the move.
    pub at: Coordinate,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.at)
    }
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoundOutcome {
    /// The pattern that was completed.
    pattern: WinPattern,
    /// The seat whose placement completed the pattern.
    completed_by: PlayerSlot,
    /// The seat announced as winner: the seat to move after the final
    /// placement, i.e. the opponent of `completed_by`.
    credited: PlayerSlot,
}

impl RoundOutcome {
    /// Outcome of a pattern completed by `mover`.
    pub fn completed(pattern: WinPattern, mover: PlayerSlot) -> Self {
        Self {
            pattern,
            completed_by: mover,
            credited: mover.opponent(),
        }
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A piece was placed and the turn passed.
    Placed {
        /// Who placed.
        player: PlayerSlot,
        /// Where.
        at: Coordinate,
    },
    /// A piece was taken back; the same player must now place it.
    Lifted {
        /// Who lifted.
        player: PlayerSlot,
        /// The cell that is now blank.
        from: Coordinate,
    },
    /// A placement completed a win pattern and ended the round.
    RoundOver(RoundOutcome),
}

/// Why a move was rejected. A rejected move never changes the round.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Placement on a cell that is not blank.
    #[display("Cell {} is already taken", _0)]
    OccupiedCell(Coordinate),

    /// Lift from a cell the mover does not hold.
    #[display("Cell {} does not hold one of your pieces", _0)]
    NotOwnedCell(Coordinate),

    /// It is the other seat's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(PlayerSlot),

    /// The round has already been decided.
    #[display("The round is already over")]
    RoundOver,

    /// A player-level guard refused the change.
    #[display("{}", _0)]
    Player(PlayerError),

    /// The move would break a round invariant (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<PlayerError> for MoveError {
    fn from(err: PlayerError) -> Self {
        MoveError::Player(err)
    }
}
