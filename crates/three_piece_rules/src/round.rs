//! Round controller: turn order, move dispatch and the end of a round.
//!
//! A round is a small state machine. While [`RoundPhase::AwaitingMove`], the
//! seat to move names a cell:
//!
//! - with fewer than three pieces down, the cell must be blank and a piece is
//!   placed there, passing the turn;
//! - with all three pieces down, the cell must hold one of the mover's own
//!   pieces, which is lifted. The turn stays with the mover, whose next move
//!   (now with two pieces down) drops the piece somewhere blank.
//!
//! After each placement the mover's pieces are checked against the win
//! patterns; a match moves the round to [`RoundPhase::RoundOver`].
//!
//! Every move is applied to a copy of the round and committed only once the
//! contract postconditions hold, so a rejected move never changes anything.

use super::action::{Move, MoveError, MoveOutcome, RoundOutcome};
use super::board::Board;
use super::contracts::{Contract, LiftContract, PlacementContract};
use super::coordinate::Coordinate;
use super::marker::Marker;
use super::player::{Player, PlayerSlot};
use super::rules::win;
use tracing::{debug, info, instrument, warn};

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for the seat to move.
    AwaitingMove,
    /// A win pattern was completed; only a rematch continues play.
    RoundOver(RoundOutcome),
}

/// One play-through: the board, both players and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) to_move: PlayerSlot,
    pub(crate) phase: RoundPhase,
    pub(crate) pending_lift: Option<Coordinate>,
}

impl Round {
    /// Starts a round with an empty board and player one to move.
    #[instrument(skip_all, fields(one = %one.name(), two = %two.name()))]
    pub fn new(one: Player, two: Player) -> Self {
        info!("New round");
        Self {
            board: Board::new(),
            players: [one, two],
            to_move: PlayerSlot::One,
            phase: RoundPhase::AwaitingMove,
            pending_lift: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player in `slot`.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    /// Returns both players, player one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the seat to move.
    pub fn to_move(&self) -> PlayerSlot {
        self.to_move
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> &Player {
        self.player(self.to_move)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// True once a pattern has been completed.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, RoundPhase::RoundOver(_))
    }

    /// How the round ended, if it has.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::RoundOver(outcome) => Some(outcome),
            RoundPhase::AwaitingMove => None,
        }
    }

    /// The cell the mover just lifted a piece from, until it is dropped.
    pub fn pending_lift(&self) -> Option<Coordinate> {
        self.pending_lift
    }

    /// Submits a move for the seat to move.
    pub fn play(&mut self, at: Coordinate) -> Result<MoveOutcome, MoveError> {
        self.submit(Move::new(self.to_move, at))
    }

    /// Validates and applies `mov`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::RoundOver`] once the round has been decided.
    /// - [`MoveError::WrongPlayer`] if the other seat is to move.
    /// - [`MoveError::OccupiedCell`] when placing on a cell that is not blank.
    /// - [`MoveError::NotOwnedCell`] when all pieces are down and the cell
    ///   does not hold one of the mover's own.
    ///
    /// On error the round is unchanged and the same seat is still to move.
    #[instrument(skip(self), fields(player = %mov.player, at = %mov.at))]
    pub fn submit(&mut self, mov: Move) -> Result<MoveOutcome, MoveError> {
        let lifting = self.player(mov.player).has_full_hand();
        let result = if lifting {
            self.transition::<LiftContract>(mov, Self::lift)
        } else {
            self.transition::<PlacementContract>(mov, Self::place)
        };

        match &result {
            Ok(outcome) => info!(?outcome, "Move accepted"),
            Err(err) => warn!(%err, "Move rejected"),
        }
        result
    }

    /// Runs `apply` on a copy of the round under contract `C` and commits it.
    fn transition<C>(
        &mut self,
        mov: Move,
        apply: fn(&mut Self, Move) -> Result<MoveOutcome, MoveError>,
    ) -> Result<MoveOutcome, MoveError>
    where
        C: Contract<Round, Move>,
    {
        C::pre(self, &mov)?;
        let mut next = self.clone();
        let outcome = apply(&mut next, mov)?;
        C::post(self, &next)?;
        *self = next;
        Ok(outcome)
    }

    fn place(&mut self, mov: Move) -> Result<MoveOutcome, MoveError> {
        let mover = mov.player;
        let marker = *self.player(mover).marker();
        self.players[mover.index()].place_at(mov.at)?;
        self.board.set_marker(mov.at, marker);
        self.pending_lift = None;
        self.to_move = mover.opponent();

        match win::detect(self.player(mover).positions()) {
            Some(pattern) => {
                let outcome = RoundOutcome::completed(pattern, mover);
                info!(
                    %pattern,
                    completed_by = %mover,
                    credited = %outcome.credited(),
                    "Round over"
                );
                self.phase = RoundPhase::RoundOver(outcome);
                Ok(MoveOutcome::RoundOver(outcome))
            }
            None => Ok(MoveOutcome::Placed {
                player: mover,
                at: mov.at,
            }),
        }
    }

    fn lift(&mut self, mov: Move) -> Result<MoveOutcome, MoveError> {
        self.players[mov.player.index()].remove_at(mov.at)?;
        self.board.set_marker(mov.at, Marker::BLANK);
        self.pending_lift = Some(mov.at);
        debug!("Piece lifted, awaiting drop");
        Ok(MoveOutcome::Lifted {
            player: mov.player,
            from: mov.at,
        })
    }

    /// Clears the board and both players for another round with the same
    /// players. Player one moves first again.
    #[instrument(skip(self))]
    pub fn rematch(&mut self) {
        self.board.reset();
        for player in &mut self.players {
            player.reset();
        }
        self.to_move = PlayerSlot::One;
        self.phase = RoundPhase::AwaitingMove;
        self.pending_lift = None;
        info!("Rematch");
    }
}
