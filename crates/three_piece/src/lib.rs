//! Console front end for three-piece Tic-Tac-Toe.
//!
//! Wraps the [`three_piece_rules`] engine in menus, prompts and board art.
//! Everything reads from a [`BufRead`](std::io::BufRead) and writes to a
//! [`Write`](std::io::Write), so a scripted game runs the same as a live one:
//!
//! ```
//! use std::io::Cursor;
//! use three_piece::{Console, GameConfig, Session, SessionEnd};
//!
//! let script = "1\nAda\n\nBob\n\n1 2\n1 1\n3 2\n2\n";
//! let console = Console::new(Cursor::new(script), Vec::new(), GameConfig::plain());
//! let mut session = Session::new(console);
//!
//! assert_eq!(session.run().unwrap(), SessionEnd::Exited);
//! assert_eq!(session.rounds_played(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod input;
mod session;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use console::{Console, ConsoleError};
pub use input::{
    InputError, MenuChoice, parse_coordinate, parse_marker, parse_menu_choice, parse_name,
};
pub use session::{Session, SessionEnd};
