//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions decide whether a move is legal; the
//! postcondition re-checks the round invariants on the resulting state.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, RoundInvariants};
use super::round::Round;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round has not been decided.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects any move once a pattern has been completed.
    pub fn check(round: &Round) -> Result<(), MoveError> {
        if round.is_over() {
            Err(MoveError::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the mover's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move submitted by the seat that is not to move.
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        if mov.player != round.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is blank.
pub struct CellIsFree;

impl CellIsFree {
    /// Rejects a placement on a cell held by either player.
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        if round.board().is_free(mov.at) {
            Ok(())
        } else {
            Err(MoveError::OccupiedCell(mov.at))
        }
    }
}

/// Precondition: the mover holds the target cell.
pub struct OwnsCell;

impl OwnsCell {
    /// Rejects a lift from a blank cell or from an opponent's piece.
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        let free = round.board().is_free(mov.at);
        if !free && round.player(mov.player).occupies(mov.at) {
            Ok(())
        } else {
            Err(MoveError::NotOwnedCell(mov.at))
        }
    }
}

/// Composite precondition for placing a piece.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        RoundInProgress::check(round)?;
        PlayersTurn::check(mov, round)?;
        CellIsFree::check(mov, round)?;
        Ok(())
    }
}

/// Composite precondition for lifting a piece.
pub struct LegalLift;

impl LegalLift {
    /// Validates all preconditions for a lift.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        RoundInProgress::check(round)?;
        PlayersTurn::check(mov, round)?;
        OwnsCell::check(mov, round)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contracts (Pre + Post)
// ─────────────────────────────────────────────────────────────

fn invariants_hold(after: &Round) -> Result<(), MoveError> {
    RoundInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Contract for placing a piece.
pub struct PlacementContract;

impl Contract<Round, Move> for PlacementContract {
    fn pre(round: &Round, action: &Move) -> Result<(), MoveError> {
        LegalPlacement::check(action, round)
    }

    fn post(before: &Round, after: &Round) -> Result<(), MoveError> {
        invariants_hold(after)?;
        let mover = before.to_move();
        if after.player(mover).placed_count() != before.player(mover).placed_count() + 1 {
            return Err(MoveError::InvariantViolation(
                "Placement must add exactly one piece".to_string(),
            ));
        }
        Ok(())
    }
}

/// Contract for lifting a piece.
pub struct LiftContract;

impl Contract<Round, Move> for LiftContract {
    fn pre(round: &Round, action: &Move) -> Result<(), MoveError> {
        LegalLift::check(action, round)
    }

    fn post(before: &Round, after: &Round) -> Result<(), MoveError> {
        invariants_hold(after)?;
        if after.to_move() != before.to_move() {
            return Err(MoveError::InvariantViolation(
                "Lifting a piece must not pass the turn".to_string(),
            ));
        }
        Ok(())
    }
}
