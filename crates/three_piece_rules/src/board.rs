//! The 3x3 playing surface.

use super::coordinate::Coordinate;
use super::marker::Marker;
use super::position_set::PositionSet;
use tracing::{debug, instrument};

/// Read-only snapshot of the board, `grid[row - 1][col - 1]`.
pub type Grid = [[Marker; 3]; 3];

/// The board: every one of the nine cells holds either the blank marker or
/// a player's marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: PositionSet,
}

impl Board {
    /// Creates a board with every cell blank.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Self {
            cells: PositionSet::new(),
        };
        board.reset();
        board
    }

    /// Sets every cell back to blank.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = Coordinate::ALL
            .iter()
            .map(|coord| (*coord, Marker::BLANK))
            .collect();
        debug!("Board cleared");
    }

    /// Returns the marker at `coord`.
    pub fn get(&self, coord: Coordinate) -> Marker {
        self.cells.get(coord).unwrap_or(Marker::BLANK)
    }

    /// True if `coord` holds the blank marker.
    pub fn is_free(&self, coord: Coordinate) -> bool {
        self.get(coord).is_blank()
    }

    /// Overwrites the cell at `coord`, returning the previous marker.
    ///
    /// Used both to place a piece and to clear a cell back to
    /// [`Marker::BLANK`].
    #[instrument(skip(self), fields(coord = %coord, marker = %marker))]
    pub fn set_marker(&mut self, coord: Coordinate, marker: Marker) -> Marker {
        self.cells.add(coord, marker).unwrap_or(Marker::BLANK)
    }

    /// Snapshot of all nine cells for display.
    pub fn render(&self) -> Grid {
        let mut grid = [[Marker::BLANK; 3]; 3];
        for (coord, marker) in self.cells.iter() {
            grid[usize::from(coord.row() - 1)][usize::from(coord.col() - 1)] = marker;
        }
        grid
    }

    /// Blank cells in row-major order.
    pub fn free_cells(&self) -> Vec<Coordinate> {
        Coordinate::ALL
            .iter()
            .copied()
            .filter(|coord| self.is_free(*coord))
            .collect()
    }

    /// The underlying cell table.
    pub fn cells(&self) -> &PositionSet {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
