//! Placement cap invariant: nobody has more than three pieces down.

use super::super::{MAX_PLACED, PlayerSlot, Round};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: each player holds between zero and three cells.
pub struct PlacementCapInvariant;

impl Invariant<Round> for PlacementCapInvariant {
    fn holds(round: &Round) -> bool {
        PlayerSlot::iter().all(|slot| round.player(slot).placed_count() <= MAX_PLACED)
    }

    fn description() -> &'static str {
        "Each player has at most three pieces on the board"
    }
}
