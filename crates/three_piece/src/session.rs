//! The game loop: menu, player setup, rounds and rematches.

use crate::console::{Console, ConsoleError};
use crate::input::MenuChoice;
use std::io::{BufRead, Write};
use three_piece_rules::{MoveError, MoveOutcome, Player, PlayerSlot, Round, RoundOutcome};
use tracing::{debug, info, instrument, warn};

const TAKEN_CELL: &str = "Selected coordinate is taken!";
const FULL_HAND: &str = "You already placed 3 pieces.\nTake 1 of your pieces.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player chose Exit from a menu.
    Exited,
    /// Input ran out.
    InputClosed,
}

/// Drives one process lifetime of play on a console.
#[derive(Debug)]
pub struct Session<R, W> {
    console: Console<R, W>,
    rounds_played: u32,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session on `console`.
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            console,
            rounds_played: 0,
        }
    }

    /// Number of rounds that reached a result.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Consumes the session, returning the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs menu, setup and rounds until the player exits or input closes.
    ///
    /// Closed input ends the session like choosing Exit; only terminal I/O
    /// failures are errors.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionEnd, ConsoleError> {
        match self.play_session() {
            Ok(()) => {
                self.console.exit_screen()?;
                Ok(SessionEnd::Exited)
            }
            Err(ConsoleError::Closed) => {
                info!("Input closed, leaving the game");
                self.console.exit_screen()?;
                Ok(SessionEnd::InputClosed)
            }
            Err(err) => Err(err),
        }
    }

    fn play_session(&mut self) -> Result<(), ConsoleError> {
        if self.console.main_menu()? == MenuChoice::Exit {
            return Ok(());
        }

        let mut round = self.load()?;
        loop {
            let outcome = self.play_round(&mut round)?;
            self.game_over(&round, outcome)?;

            match self.console.rematch_menu()? {
                MenuChoice::Proceed => round.rematch(),
                MenuChoice::Exit => return Ok(()),
            }
        }
    }

    /// Asks both players for a name and marker.
    fn load(&mut self) -> Result<Round, ConsoleError> {
        let config = self.console.config().clone();

        let name = self.console.name_input(&PlayerSlot::One.to_string())?;
        let marker = self
            .console
            .marker_input(*config.player_one_default_marker(), None)?;
        let one = Player::new(name, marker);

        let name = self.console.name_input(&PlayerSlot::Two.to_string())?;
        let marker = self
            .console
            .marker_input(*config.player_two_default_marker(), Some(*one.marker()))?;
        let two = Player::new(name, marker);

        self.console.loading("Loading")?;
        Ok(Round::new(one, two))
    }

    /// Prompts moves until a pattern completes.
    #[instrument(skip_all)]
    fn play_round(&mut self, round: &mut Round) -> Result<RoundOutcome, ConsoleError> {
        self.console.loading("Starting Game")?;
        let mut notice: Option<&'static str> = None;

        loop {
            self.console.board(round.board())?;
            if let Some(text) = notice.take() {
                self.console.error(text)?;
            }
            let mover = round.current_player().name().clone();
            self.console.turn(&mover, round.pending_lift())?;
            let coord = self.console.coordinate()?;

            match round.play(coord) {
                Ok(MoveOutcome::RoundOver(outcome)) => return Ok(outcome),
                Ok(outcome) => debug!(?outcome, "Move applied"),
                Err(MoveError::OccupiedCell(_)) => notice = Some(TAKEN_CELL),
                Err(MoveError::NotOwnedCell(_)) => notice = Some(FULL_HAND),
                Err(err) => {
                    warn!(%err, "Unexpected rejection");
                    notice = Some("That move is not allowed.");
                }
            }
        }
    }

    fn game_over(&mut self, round: &Round, outcome: RoundOutcome) -> Result<(), ConsoleError> {
        self.rounds_played += 1;
        let winner = round.player(*outcome.credited()).name().clone();
        info!(
            pattern = %outcome.pattern(),
            completed_by = %round.player(*outcome.completed_by()).name(),
            credited = %winner,
            rounds = self.rounds_played,
            "Round finished"
        );

        self.console.board(round.board())?;
        self.console.match_over(*outcome.pattern())?;
        self.console.winner(&winner)?;
        Ok(())
    }
}
