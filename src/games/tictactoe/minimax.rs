//! Exhaustive minimax move selection.
//!
//! The search walks every continuation of the position. Each branch works
//! on its own copy of the board, so the caller's board is never touched.

use super::rules::evaluate;
use super::{Board, GameStatus, Player, Position};
use tracing::{debug, instrument};

/// Score of an immediate win. Deeper wins score less, deeper losses more.
pub const WIN_SCORE: i32 = 10;

/// Scores a terminal status from `ai`'s point of view, `None` if play continues.
fn terminal_score(status: GameStatus, ai: Player, depth: i32) -> Option<i32> {
    match status {
        GameStatus::Won(winner) if winner == ai => Some(WIN_SCORE - depth),
        GameStatus::Won(_) => Some(depth - WIN_SCORE),
        GameStatus::Draw => Some(0),
        GameStatus::InProgress => None,
    }
}

/// Minimax value of `board` for `ai`.
///
/// `maximizing` is true when the AI is the side to move on `board`.
fn minimax(board: &Board, depth: i32, ai: Player, maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(evaluate(board), ai, depth) {
        return score;
    }

    let mover = if maximizing { ai } else { ai.opponent() };
    let scores = Position::ALL
        .into_iter()
        .filter(|&pos| board.is_empty(pos))
        .map(|pos| minimax(&board.with_mark(pos, mover), depth + 1, ai, !maximizing));

    let best = if maximizing { scores.max() } else { scores.min() };
    // An in-progress board always has an empty square.
    best.unwrap_or(0)
}

/// Minimax value of each empty square for `ai`, in index order.
///
/// The board after the AI's candidate move is depth 0. Returns an empty
/// list when the board is already won or full.
pub fn score_moves(board: &Board, ai: Player) -> Vec<(Position, i32)> {
    if evaluate(board).is_over() {
        return Vec::new();
    }

    Position::valid_moves(board)
        .into_iter()
        .map(|pos| (pos, minimax(&board.with_mark(pos, ai), 0, ai, false)))
        .collect()
}

/// Picks the optimal square for `ai`.
///
/// Ties go to the lowest index: a later square replaces the current
/// choice only with a strictly greater score. Returns `None` when the game
/// is already over.
#[instrument(skip(board), fields(ai = %ai))]
pub fn best_move(board: &Board, ai: Player) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;
    for (pos, score) in score_moves(board, ai) {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((pos, score)),
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "AI chose position");
    }
    best.map(|(pos, _)| pos)
}
