//! Text console: menus, board art, animations and prompts.

use crate::config::GameConfig;
use crate::input::{self, InputError, MenuChoice};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};
use std::time::Duration;
use three_piece_rules::{Board, Coordinate, Marker, WinPattern};
use tracing::{debug, instrument};

const LOADING_FRAMES: [&str; 5] = [".", "..", "...", "....", "....->"];

const RULES: &str = "\
Each player owns three pieces and takes turns placing them on the 3x3 board.
Once all three of your pieces are down, pick up one of your own pieces by
entering its cell, then enter a blank cell to put it back down.

A round is won by holding both ends of the middle column (1,2)+(3,2),
both ends of the middle row (2,1)+(2,3), or the corners (1,3)+(3,1).
Coordinates are entered as row and column, e.g. '1, 2'.";

/// Failure to talk to the player.
#[derive(Debug, derive_more::Display)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input ended before the game did.
    #[display("Input closed")]
    Closed,
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(err) => Some(err),
            ConsoleError::Closed => None,
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

/// Console bound to an input and an output stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    config: GameConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Returns the active settings.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if *self.config.color() {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn clear(&mut self) -> Result<(), ConsoleError> {
        if *self.config.clear_screen() {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Err(ConsoleError::Closed);
        }
        Ok(line)
    }

    /// Prints an error line in red.
    pub fn error(&mut self, message: &str) -> Result<(), ConsoleError> {
        let text = self.paint(message, Color::Red);
        writeln!(self.output, "{}\n", text)?;
        Ok(())
    }

    fn menu(&mut self, lines: &[&str], clear_first: bool) -> Result<MenuChoice, ConsoleError> {
        let mut rejected: Option<InputError> = None;
        let mut clear = clear_first;
        loop {
            if clear {
                self.clear()?;
            }
            clear = true;
            for line in lines {
                writeln!(self.output, "{}", line)?;
            }
            // Shown below the redrawn menu so clearing does not hide it.
            if let Some(err) = rejected.take() {
                self.input_error(&err)?;
            }
            write!(self.output, ">>  ")?;
            let answer = self.read_line()?;
            match input::parse_menu_choice(&answer) {
                Ok(choice) => return Ok(choice),
                Err(err) => rejected = Some(err),
            }
        }
    }

    /// Shows the start menu.
    #[instrument(skip(self))]
    pub fn main_menu(&mut self) -> Result<MenuChoice, ConsoleError> {
        self.menu(&[
            "-----Welcome to Tic Tac Toe v2--------",
            "| [1]: Start                         |",
            "| [2]: Exit                          |",
            "--------------------------------------",
        ], true)
    }

    /// Asks whether to play again, below the final board.
    #[instrument(skip(self))]
    pub fn rematch_menu(&mut self) -> Result<MenuChoice, ConsoleError> {
        self.menu(&[
            "--------------------------------------",
            "| Would you like a rematch?          |",
            "| [1]: Yes                           |",
            "| [2]: Exit Game                     |",
            "--------------------------------------",
        ], false)
    }

    /// Asks for a player's name; an empty answer becomes `label`.
    #[instrument(skip(self))]
    pub fn name_input(&mut self, label: &str) -> Result<String, ConsoleError> {
        self.clear()?;
        writeln!(self.output, "{}:", label)?;
        writeln!(self.output, "Enter your name: ")?;
        write!(self.output, ">>  ")?;
        let line = self.read_line()?;
        Ok(input::parse_name(&line, label))
    }

    /// Asks for a marker until a usable one is entered.
    #[instrument(skip(self))]
    pub fn marker_input(
        &mut self,
        default: char,
        taken: Option<Marker>,
    ) -> Result<Marker, ConsoleError> {
        loop {
            writeln!(self.output, "Enter your preferred character [{}]: ", default)?;
            write!(self.output, ">> ")?;
            let line = self.read_line()?;
            match input::parse_marker(&line, default, taken) {
                Ok(marker) => return Ok(marker),
                Err(err) => self.error(&err.to_string())?,
            }
        }
    }

    /// Prints `message` followed by the dotted loading animation.
    #[instrument(skip(self))]
    pub fn loading(&mut self, message: &str) -> Result<(), ConsoleError> {
        write!(self.output, "{}...", message)?;
        let delay = Duration::from_millis(*self.config.loading_frame_ms());
        let frames = *self.config.loading_frames() as usize;
        for frame in LOADING_FRAMES.iter().cycle().take(frames) {
            self.output.flush()?;
            std::thread::sleep(delay);
            write!(self.output, "{}", frame)?;
        }
        let done = self.paint("Loading complete!", Color::Green);
        writeln!(self.output, "\n{}", done)?;
        writeln!(self.output, "-----------------------------------")?;
        Ok(())
    }

    /// Draws the board with row and column labels.
    pub fn board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        self.clear()?;
        let header = self.paint("     1     2     3   ", Color::Green);
        writeln!(self.output, "{}", header)?;
        writeln!(self.output, "   +-----+-----+-----+")?;
        for (index, row) in board.render().iter().enumerate() {
            let label = self.paint(&format!(" {} ", index + 1), Color::Green);
            writeln!(
                self.output,
                "{}|  {}  |  {}  |  {}  |",
                label, row[0], row[1], row[2]
            )?;
            writeln!(self.output, "   +-----+-----+-----+")?;
        }
        Ok(())
    }

    /// Announces whose turn it is, reminding them of a lifted piece.
    pub fn turn(
        &mut self,
        name: &str,
        pending_lift: Option<Coordinate>,
    ) -> Result<(), ConsoleError> {
        writeln!(self.output, "Player: {}'s turn ", name)?;
        if let Some(from) = pending_lift {
            writeln!(
                self.output,
                "You picked up your piece from {}. Choose where to put it.",
                from
            )?;
        }
        Ok(())
    }

    /// Reads coordinates until a well-formed pair is entered.
    pub fn coordinate(&mut self) -> Result<Coordinate, ConsoleError> {
        loop {
            write!(self.output, "Enter coordinates (e.g., '1, 2'): ")?;
            let line = self.read_line()?;
            match input::parse_coordinate(&line) {
                Ok(coord) => return Ok(coord),
                Err(err) => self.input_error(&err)?,
            }
        }
    }

    fn input_error(&mut self, err: &InputError) -> Result<(), ConsoleError> {
        debug!(%err, "Rejected input");
        self.error(&err.to_string())
    }

    /// Names the pattern that ended the round.
    pub fn match_over(&mut self, pattern: WinPattern) -> Result<(), ConsoleError> {
        let text = self.paint(&format!("Match ended by {} move!", pattern), Color::Green);
        writeln!(self.output, "{}\n", text)?;
        Ok(())
    }

    /// Congratulates the round's winner.
    pub fn winner(&mut self, name: &str) -> Result<(), ConsoleError> {
        let text = self.paint(
            &format!("The winner of this round is {}!!\nCongratulations!!", name),
            Color::Green,
        );
        writeln!(self.output, "{}\n", text)?;
        Ok(())
    }

    /// Prints the rules.
    pub fn rules(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", RULES)?;
        Ok(())
    }

    /// Prints the farewell screen.
    pub fn exit_screen(&mut self) -> Result<(), ConsoleError> {
        self.clear()?;
        let thanks = self.paint("thank you for playing", Color::Green);
        writeln!(self.output, "-----------------EXIT-----------------")?;
        writeln!(self.output, "|       {}        |", thanks)?;
        writeln!(self.output, "--------------------------------------")?;
        self.output.flush()?;
        Ok(())
    }
}
