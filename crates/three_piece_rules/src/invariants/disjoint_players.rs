//! Disjoint players invariant: no cell is held by both players.

use super::super::{PlayerSlot, Round};
use super::Invariant;

/// Invariant: the two players' piece sets never share a cell.
pub struct DisjointPlayersInvariant;

impl Invariant<Round> for DisjointPlayersInvariant {
    fn holds(round: &Round) -> bool {
        let one = round.player(PlayerSlot::One).positions();
        let two = round.player(PlayerSlot::Two).positions();
        one.count_matching(two) == 0
    }

    fn description() -> &'static str {
        "No cell is held by both players"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Marker, Player};

    #[test]
    fn test_shared_cell_violates() {
        let mut round = Round::new(
            Player::new("A", Marker::new('X').unwrap()),
            Player::new("B", Marker::new('O').unwrap()),
        );
        round.play(Coordinate::CENTER).unwrap();
        assert!(DisjointPlayersInvariant::holds(&round));

        round.players[1]
            .positions_mut()
            .add(Coordinate::CENTER, Marker::new('O').unwrap());
        assert!(!DisjointPlayersInvariant::holds(&round));
    }
}
