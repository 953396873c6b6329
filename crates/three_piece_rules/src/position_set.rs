//! Coordinate-to-marker mapping shared by the board, players and win patterns.
//!
//! The set is a direct-indexed table with one slot per board cell, so every
//! lookup is constant time and iteration follows row-major order. Writing to
//! an occupied slot replaces the entry, so a coordinate can never appear twice.

use super::coordinate::Coordinate;
use super::marker::Marker;
use tracing::{instrument, trace};

/// Markers keyed by coordinate, at most one per cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSet {
    slots: [Option<Marker>; 9],
    len: usize,
}

impl PositionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `marker` at `coord`, returning whatever was there before.
    #[instrument(skip(self), fields(coord = %coord, marker = %marker))]
    pub fn add(&mut self, coord: Coordinate, marker: Marker) -> Option<Marker> {
        let previous = self.slots[coord.index()].replace(marker);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Deletes the entry at `coord`.
    ///
    /// Removing a coordinate that has no entry leaves the set unchanged and
    /// returns `None`.
    #[instrument(skip(self), fields(coord = %coord))]
    pub fn remove(&mut self, coord: Coordinate) -> Option<Marker> {
        let removed = self.slots[coord.index()].take();
        match removed {
            Some(_) => self.len -= 1,
            None => trace!("remove on absent coordinate"),
        }
        removed
    }

    /// Returns the occupant at `coord`, if any.
    pub fn get(&self, coord: Coordinate) -> Option<Marker> {
        self.slots[coord.index()]
    }

    /// True if `coord` has an entry.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.get(coord).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Counts the coordinates present in both sets. Markers are ignored.
    pub fn count_matching(&self, other: &PositionSet) -> usize {
        self.coordinates().filter(|coord| other.contains(*coord)).count()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Marker)> + '_ {
        Coordinate::ALL
            .into_iter()
            .filter_map(|coord| self.get(coord).map(|marker| (coord, marker)))
    }

    /// Occupied coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter().map(|(coord, _)| coord)
    }
}

impl FromIterator<(Coordinate, Marker)> for PositionSet {
    fn from_iter<I: IntoIterator<Item = (Coordinate, Marker)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (coord, marker) in iter {
            set.add(coord, marker);
        }
        set
    }
}
