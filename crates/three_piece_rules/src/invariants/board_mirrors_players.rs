//! Board consistency invariant: the board shows exactly the players' pieces.

use super::super::{Coordinate, PlayerSlot, Round};
use super::Invariant;

/// Invariant: a cell shows a player's marker if and only if that player
/// holds it, and every other cell is blank.
pub struct BoardMirrorsPlayersInvariant;

impl Invariant<Round> for BoardMirrorsPlayersInvariant {
    fn holds(round: &Round) -> bool {
        let one = round.player(PlayerSlot::One);
        let two = round.player(PlayerSlot::Two);

        Coordinate::ALL.iter().all(|coord| {
            let shown = round.board().get(*coord);
            match (one.occupies(*coord), two.occupies(*coord)) {
                (true, false) => shown == *one.marker(),
                (false, true) => shown == *two.marker(),
                (false, false) => shown.is_blank(),
                (true, true) => false,
            }
        })
    }

    fn description() -> &'static str {
        "Board cells match the pieces the players hold"
    }
}
