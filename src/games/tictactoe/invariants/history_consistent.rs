//! History consistency invariant: replaying the history reproduces the board.

use super::super::{Board, GameSession, Square};
use super::Invariant;

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Every move in history corresponds to exactly one occupied square.
/// No moves are missing, no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();
        for mv in session.history() {
            if !replayed.is_empty(mv.position) {
                return false;
            }
            replayed.set(mv.position, Square::Occupied(mv.player));
        }
        &replayed == session.board()
    }

    fn description() -> &'static str {
        "History replays to the current board"
    }
}
