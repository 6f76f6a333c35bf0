//! Game session: board, turn and mode for one game of tic-tac-toe.
//!
//! A session is an owned value. Every operation either applies completely
//! or leaves the session untouched.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract, MoveRequest};
use super::minimax::best_move;
use super::rules;
use super::{Board, GameStatus, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays the two sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans take turns on the same board.
    #[default]
    #[serde(alias = "two-player")]
    TwoPlayer,
    /// A human plays against the minimax AI.
    #[serde(alias = "vs-ai")]
    VsAi,
}

impl GameMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VsAi,
            GameMode::VsAi => GameMode::TwoPlayer,
        }
    }
}

/// Report of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Accepted {
    /// The move that was submitted.
    placed: Move,
    /// The AI's answer, applied in the same call.
    reply: Option<Move>,
    /// Status after both moves.
    status: GameStatus,
}

/// A single game of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    mode: GameMode,
    ai: Player,
    pub(crate) board: Board,
    to_move: Player,
    status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Creates a new game with X to move; in vs-AI mode the AI plays O.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self::with_ai(mode, Player::O)
    }

    /// Creates a new game where the AI (if any) plays `ai`.
    ///
    /// When the AI plays X in vs-AI mode its opening move is already on
    /// the board when this returns.
    #[instrument]
    pub fn with_ai(mode: GameMode, ai: Player) -> Self {
        let mut session = Self {
            mode,
            ai,
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        };
        info!(%mode, ai = %ai, "New game");
        session.start_ai_turn();
        session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Frozen once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the AI's mark (used only in vs-AI mode).
    pub fn ai(&self) -> Player {
        self.ai
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game has a result.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns true when the AI should move next.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::VsAi && !self.is_over() && self.to_move == self.ai
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Places `player`'s mark at board `index`.
    ///
    /// In vs-AI mode, if the game continues and the AI is to move, its reply
    /// is applied before returning. On error nothing changes.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<Accepted, MoveError> {
        let request = MoveRequest::new(index, player);
        let placed = MoveContract::pre(self, &request).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        self.place(placed);
        let reply = self.start_ai_turn();

        Ok(Accepted {
            placed,
            reply,
            status: self.status,
        })
    }

    /// Lets the AI move if it is its turn.
    ///
    /// Does nothing (and returns `None`) otherwise.
    #[instrument(skip(self))]
    pub fn start_ai_turn(&mut self) -> Option<Move> {
        if !self.is_ai_turn() {
            return None;
        }

        let position = best_move(&self.board, self.ai)?;
        let reply = Move::new(self.ai, position);
        self.place(reply);
        Some(reply)
    }

    /// Switches mode, keeping the board. Returns the AI's move if switching
    /// to vs-AI hands it the turn.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: GameMode) -> Option<Move> {
        self.mode = mode;
        info!(%mode, "Mode changed");
        self.start_ai_turn()
    }

    /// Switches to the other mode. See [`GameSession::set_mode`].
    pub fn toggle_mode(&mut self) -> Option<Move> {
        self.set_mode(self.mode.toggled())
    }

    /// Clears the board for a new game, keeping mode and AI mark.
    ///
    /// Returns the AI's opening move when it plays X.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Option<Move> {
        info!("Restarting game");
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.start_ai_turn()
    }

    /// Applies a validated move and re-evaluates the game.
    fn place(&mut self, mv: Move) {
        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(mv.position, Square::Occupied(mv.player));
        self.history.push(mv);
        self.status = rules::evaluate(&self.board);
        if !self.is_over() {
            self.to_move = mv.player.opponent();
        }
        debug!(%mv, status = %self.status, "Move applied");
        if self.is_over() {
            info!(status = %self.status, moves = self.history.len(), "Game over");
        }

        #[cfg(debug_assertions)]
        debug_assert!(
            MoveContract::post(&before, self).is_ok(),
            "Postcondition failed after {}",
            mv
        );
    }
}
