//! Draw detection logic for tic-tac-toe.
//!
//! A draw is a full board with no winner; [`super::evaluate`] combines
//! this with the win check.

use super::super::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{GameStatus, Player, Position};
    use super::super::evaluate;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / X O O
        let board: Board = "XXX OOX XOO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }
}
