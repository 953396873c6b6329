//! Win detection for three-piece tic-tac-toe.
//!
//! Only the two outer cells of a line count: a player wins by holding both
//! ends of the middle column, both ends of the middle row, or the
//! top-right and bottom-left corners. The center is never required.

use super::super::{Coordinate, Marker, PositionSet};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// The three winning cell pairs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
    derive_more::Display,
)]
pub enum WinPattern {
    /// (1, 2) and (3, 2).
    Vertical,
    /// (2, 1) and (2, 3).
    Horizontal,
    /// (1, 3) and (3, 1).
    Diagonal,
}

impl WinPattern {
    /// The two cells a player must hold.
    pub fn cells(self) -> [Coordinate; 2] {
        match self {
            WinPattern::Vertical => [Coordinate::at(1, 2), Coordinate::at(3, 2)],
            WinPattern::Horizontal => [Coordinate::at(2, 1), Coordinate::at(2, 3)],
            WinPattern::Diagonal => [Coordinate::at(1, 3), Coordinate::at(3, 1)],
        }
    }

    /// The pattern as a piece set. Only coordinates take part in matching.
    pub fn position_set(self) -> PositionSet {
        self.cells()
            .into_iter()
            .map(|coord| (coord, Marker::BLANK))
            .collect()
    }

    /// How many of this pattern's cells `positions` holds (0, 1 or 2).
    pub fn count_matching(self, positions: &PositionSet) -> usize {
        self.position_set().count_matching(positions)
    }

    /// True when `positions` holds both cells.
    pub fn is_complete(self, positions: &PositionSet) -> bool {
        self.count_matching(positions) == self.cells().len()
    }
}

/// Match counts for every pattern, in declaration order.
pub fn match_counts(positions: &PositionSet) -> [usize; 3] {
    let mut counts = [0; 3];
    for (slot, pattern) in counts.iter_mut().zip(WinPattern::iter()) {
        *slot = pattern.count_matching(positions);
    }
    counts
}

/// Returns the first pattern fully held by `positions`.
#[instrument(skip(positions), fields(pieces = positions.len()))]
pub fn detect(positions: &PositionSet) -> Option<WinPattern> {
    debug!(matching = ?match_counts(positions), "Matching sets");
    WinPattern::iter().find(|pattern| pattern.is_complete(positions))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(cells: &[(u8, u8)]) -> PositionSet {
        let x = Marker::new('X').unwrap();
        cells
            .iter()
            .map(|(row, col)| (Coordinate::new(*row, *col).unwrap(), x))
            .collect()
    }

    #[test]
    fn test_no_pattern_on_empty_set() {
        assert_eq!(detect(&PositionSet::new()), None);
        assert_eq!(match_counts(&PositionSet::new()), [0, 0, 0]);
    }

    #[test]
    fn test_vertical_ends() {
        assert_eq!(detect(&held(&[(1, 2), (3, 2)])), Some(WinPattern::Vertical));
    }

    #[test]
    fn test_horizontal_ends() {
        assert_eq!(
            detect(&held(&[(2, 1), (2, 2), (2, 3)])),
            Some(WinPattern::Horizontal)
        );
    }

    #[test]
    fn test_anti_diagonal_corners() {
        assert_eq!(detect(&held(&[(1, 3), (3, 1)])), Some(WinPattern::Diagonal));
    }

    #[test]
    fn test_main_diagonal_is_not_a_win() {
        assert_eq!(detect(&held(&[(1, 1), (2, 2), (3, 3)])), None);
    }

    #[test]
    fn test_classic_row_is_not_a_win() {
        assert_eq!(detect(&held(&[(1, 1), (1, 2), (1, 3)])), None);
    }

    #[test]
    fn test_counts_never_exceed_two() {
        let all = held(&[(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
        assert_eq!(match_counts(&all), [2, 2, 2]);
    }

    #[test]
    fn test_partial_counts() {
        assert_eq!(match_counts(&held(&[(1, 2), (2, 3), (2, 2)])), [1, 1, 0]);
    }
}
