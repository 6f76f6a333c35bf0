//! Tic-tac-toe: board, rules, minimax AI and game session.

mod action;
mod contracts;
mod invariants;
mod minimax;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalMove, MoveContract, MoveRequest};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, SessionInvariants, StatusConsistentInvariant,
};
pub use minimax::{best_move, score_moves, WIN_SCORE};
pub use position::Position;
pub use rules::evaluate;
pub use session::{Accepted, GameMode, GameSession};
pub use types::{Board, GameStatus, ParseBoardError, Player, Square};
