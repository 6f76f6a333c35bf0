//! Printable results for the non-interactive commands.

use crate::games::tictactoe::{
    best_move, evaluate, rules, score_moves, Board, GameStatus, Player, Position,
};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// Status of a board, plus the winning line if there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluateReport {
    /// The evaluated board.
    pub board: Board,
    /// Its status.
    pub status: GameStatus,
    /// The completed line, when won.
    pub winning_line: Option<[Position; 3]>,
}

impl EvaluateReport {
    /// Evaluates `board`.
    #[instrument(skip(board))]
    pub fn new(board: Board) -> Self {
        let status = evaluate(&board);
        let winning_line = rules::winning_line(&board).map(|(_, line)| line);
        Self {
            board,
            status,
            winning_line,
        }
    }
}

impl fmt::Display for EvaluateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        write!(f, "Status: {}", self.status)?;
        if let Some(line) = &self.winning_line {
            let cells: Vec<String> = line.iter().map(|p| p.number().to_string()).collect();
            write!(f, " (cells {})", cells.join(", "))?;
        }
        Ok(())
    }
}

/// The move the AI would play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    /// The AI's mark.
    pub ai: Player,
    /// Chosen square, `None` when the game is over.
    pub position: Option<Position>,
    /// Board index of the chosen square.
    pub index: Option<usize>,
    /// Status of the board before the move.
    pub status: GameStatus,
}

impl BestMoveReport {
    /// Searches `board` for `ai`'s best move.
    #[instrument(skip(board))]
    pub fn new(board: &Board, ai: Player) -> Self {
        let position = best_move(board, ai);
        Self {
            ai,
            position,
            index: position.map(Position::to_index),
            status: evaluate(board),
        }
    }
}

impl fmt::Display for BestMoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "AI ({}) plays {} ({})", self.ai, pos.number(), pos.label()),
            None => write!(f, "No move: game is over ({})", self.status),
        }
    }
}

/// Minimax score of every empty square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// The AI's mark.
    pub ai: Player,
    /// Squares and their scores, in index order.
    pub scores: Vec<(Position, i32)>,
    /// The square the AI would pick.
    pub best: Option<Position>,
}

impl AnalysisReport {
    /// Scores every empty square of `board` for `ai`.
    #[instrument(skip(board))]
    pub fn new(board: &Board, ai: Player) -> Self {
        Self {
            ai,
            scores: score_moves(board, ai),
            best: best_move(board, ai),
        }
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scores.is_empty() {
            return write!(f, "No moves: game is over");
        }
        writeln!(f, "Scores for {}:", self.ai)?;
        for (i, (pos, score)) in self.scores.iter().enumerate() {
            let marker = if Some(*pos) == self.best { "*" } else { " " };
            write!(f, "{} {} {:<14}{:>4}", marker, pos.number(), pos.label(), score)?;
            if i + 1 < self.scores.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
