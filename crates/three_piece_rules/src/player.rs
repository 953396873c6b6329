//! Players and the pieces they hold on the board.

use super::coordinate::Coordinate;
use super::marker::Marker;
use super::position_set::PositionSet;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How many pieces each player owns.
pub const MAX_PLACED: usize = 3;

/// Seat at the table. Player one moves first in every round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
    derive_more::Display,
)]
pub enum PlayerSlot {
    /// First to move.
    #[display("Player 1")]
    One,
    /// Second to move.
    #[display("Player 2")]
    Two,
}

impl PlayerSlot {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Array index of this seat (0 or 1).
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

/// Guard failures on a player's own piece set.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayerError {
    /// All pieces are already on the board.
    #[display("All three pieces are already on the board")]
    CapacityExceeded,

    /// The player holds no piece at this cell.
    #[display("No piece of yours at {}", _0)]
    NotOwnedCell(Coordinate),
}

impl std::error::Error for PlayerError {}

/// A named player with a marker and the cells they currently hold.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// Symbol drawn on the cells this player holds.
    marker: Marker,
    /// Cells currently holding this player's pieces.
    positions: PositionSet,
}

impl Player {
    /// Creates a player with no pieces on the board.
    #[instrument(skip(name), fields(name = %name.as_ref(), marker = %marker))]
    pub fn new(name: impl AsRef<str>, marker: Marker) -> Self {
        Self {
            name: name.as_ref().to_string(),
            marker,
            positions: PositionSet::new(),
        }
    }

    /// Number of pieces on the board (0 to 3).
    pub fn placed_count(&self) -> usize {
        self.positions.len()
    }

    /// True once every piece is on the board, so the next move must be a lift.
    pub fn has_full_hand(&self) -> bool {
        self.placed_count() >= MAX_PLACED
    }

    /// True if this player, not merely anyone, holds `coord`.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.positions.get(coord) == Some(self.marker)
    }

    /// Records a piece at `coord`.
    ///
    /// The caller checks that the cell is free on the board.
    #[instrument(skip(self), fields(player = %self.name, coord = %coord))]
    pub fn place_at(&mut self, coord: Coordinate) -> Result<(), PlayerError> {
        if self.has_full_hand() && !self.occupies(coord) {
            return Err(PlayerError::CapacityExceeded);
        }
        self.positions.add(coord, self.marker);
        debug!(placed = self.placed_count(), "Piece recorded");
        Ok(())
    }

    /// Takes back the piece at `coord`.
    #[instrument(skip(self), fields(player = %self.name, coord = %coord))]
    pub fn remove_at(&mut self, coord: Coordinate) -> Result<(), PlayerError> {
        match self.positions.remove(coord) {
            Some(_) => {
                debug!(placed = self.placed_count(), "Piece taken back");
                Ok(())
            }
            None => Err(PlayerError::NotOwnedCell(coord)),
        }
    }

    /// Takes every piece off the board.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn reset(&mut self) {
        self.positions.clear();
    }

    #[cfg(test)]
    pub(crate) fn positions_mut(&mut self) -> &mut PositionSet {
        &mut self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: u8, col: u8) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    fn alice() -> Player {
        Player::new("Alice", Marker::new('X').unwrap())
    }

    #[test]
    fn test_place_and_query() {
        let mut player = alice();
        assert_eq!(player.placed_count(), 0);
        player.place_at(c(1, 1)).unwrap();
        assert_eq!(player.placed_count(), 1);
        assert!(player.occupies(c(1, 1)));
        assert!(!player.occupies(c(1, 2)));
    }

    #[test]
    fn test_fourth_piece_refused() {
        let mut player = alice();
        for coord in [c(1, 1), c(2, 2), c(3, 3)] {
            player.place_at(coord).unwrap();
        }
        assert!(player.has_full_hand());
        assert_eq!(player.place_at(c(1, 2)), Err(PlayerError::CapacityExceeded));
        assert_eq!(player.placed_count(), MAX_PLACED);
    }

    #[test]
    fn test_remove_unowned_reported() {
        let mut player = alice();
        player.place_at(c(2, 2)).unwrap();
        assert_eq!(
            player.remove_at(c(1, 1)),
            Err(PlayerError::NotOwnedCell(c(1, 1)))
        );
        assert_eq!(player.remove_at(c(2, 2)), Ok(()));
        assert_eq!(player.placed_count(), 0);
    }

    #[test]
    fn test_reset_keeps_identity() {
        let mut player = alice();
        player.place_at(c(3, 1)).unwrap();
        player.reset();
        assert_eq!(player.placed_count(), 0);
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.marker().as_char(), 'X');
    }

    #[test]
    fn test_slot_opponent() {
        assert_eq!(PlayerSlot::One.opponent(), PlayerSlot::Two);
        assert_eq!(PlayerSlot::Two.opponent(), PlayerSlot::One);
        assert_eq!(PlayerSlot::Two.to_string(), "Player 2");
    }
}
