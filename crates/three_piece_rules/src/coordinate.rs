//! Grid coordinates on the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest legal row or column.
pub const MIN_AXIS: u8 = 1;

/// Largest legal row or column.
pub const MAX_AXIS: u8 = 3;

/// A cell address, 1-indexed as `(row, column)`.
///
/// Both components are always in `1..=3`; the only way to build one is
/// through [`Coordinate::new`], which rejects anything else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
#[display("({row}, {col})")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

/// Why a pair of integers is not a board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum CoordinateError {
    /// Row or column outside `1..=3`.
    #[display("({}, {}) is off the board; rows and columns run from 1 to 3", _0, _1)]
    OutOfRange(i64, i64),
}

impl std::error::Error for CoordinateError {}

impl Coordinate {
    /// Every cell of the board in row-major order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate::at(1, 1),
        Coordinate::at(1, 2),
        Coordinate::at(1, 3),
        Coordinate::at(2, 1),
        Coordinate::at(2, 2),
        Coordinate::at(2, 3),
        Coordinate::at(3, 1),
        Coordinate::at(3, 2),
        Coordinate::at(3, 3),
    ];

    /// The center cell, which no win pattern uses.
    pub const CENTER: Coordinate = Coordinate::at(2, 2);

    /// Builds a coordinate, rejecting anything outside `1..=3`.
    #[instrument]
    pub fn new(row: u8, col: u8) -> Result<Self, CoordinateError> {
        Self::checked(i64::from(row), i64::from(col))
    }

    /// Builds a coordinate from arbitrary integers, as typed by a user.
    pub fn checked(row: i64, col: i64) -> Result<Self, CoordinateError> {
        let axis = i64::from(MIN_AXIS)..=i64::from(MAX_AXIS);
        if axis.contains(&row) && axis.contains(&col) {
            // Both values fit in u8 after the range check.
            Ok(Self::at(row as u8, col as u8))
        } else {
            Err(CoordinateError::OutOfRange(row, col))
        }
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row, 1 to 3 from top to bottom.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column, 1 to 3 from left to right.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major slot index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.row - MIN_AXIS) * 3 + usize::from(self.col - MIN_AXIS)
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl TryFrom<(u8, u8)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (u8, u8) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}
