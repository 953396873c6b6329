//! Game rules for three-piece tic-tac-toe.
//!
//! Pure functions over piece sets. Rules are kept apart from the round
//! controller so contracts and tests can use them directly.

pub mod win;

pub use win::{WinPattern, detect, match_counts};
