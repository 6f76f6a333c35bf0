//! Unbeatable tic-tac-toe
//!
//! A tic-tac-toe core with two modes: two humans sharing a board, or a
//! human against an exhaustive minimax AI that never loses.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation (`evaluate`, `winning_line`)
//! - **Minimax**: full game-tree search (`best_move`, `score_moves`)
//! - **Session**: turn order, move validation and the AI's automatic reply
//! - **TUI**: ratatui front end driven by [`GameConfig`]
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{GameMode, GameSession, GameStatus, Player};
//!
//! let mut session = GameSession::new(GameMode::VsAi);
//! let accepted = session.apply_move(4, Player::X).unwrap();
//! assert!(accepted.reply().is_some());
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod report;

/// Terminal front end.
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, Theme};

// Crate-level exports - CLI reports
pub use report::{AnalysisReport, BestMoveReport, EvaluateReport};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    best_move, evaluate, rules, score_moves, Accepted, Board, GameMode, GameSession, GameStatus,
    Move, MoveError, ParseBoardError, Player, Position, Square, WIN_SCORE,
};

// Crate-level exports - Contracts and invariants
pub use games::tictactoe::{
    AlternatingTurnInvariant, Contract, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, LegalMove, MoveContract, MoveRequest, SessionInvariants,
    StatusConsistentInvariant,
};
