//! Outcome evaluation: folds win and draw detection into a [`GameStatus`].

use super::super::{Board, GameStatus};
use super::draw::is_full;
use super::win::check_winner;

/// Evaluates the board.
///
/// A completed line wins even on a full board, so the win check runs
/// before the draw check. Pure and total over every 9-cell board.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
