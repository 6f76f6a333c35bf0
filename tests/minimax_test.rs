//! Tests for the minimax AI.
//!
//! The exhaustive tests play the AI against every possible opponent line.

use unbeatable_tictactoe::{
    best_move, evaluate, score_moves, Board, GameMode, GameSession, GameStatus, Player, Position,
    WIN_SCORE,
};

/// Plays every opponent continuation from `session`, returning the
/// number of finished games and panicking if the AI ever loses.
fn explore(session: &GameSession, games: &mut usize) {
    if session.is_over() {
        assert_ne!(
            session.status(),
            GameStatus::Won(session.ai().opponent()),
            "AI lost:\n{}",
            session.board()
        );
        *games += 1;
        return;
    }

    let human = session.to_move();
    assert_ne!(human, session.ai(), "AI should have replied already");
    for pos in Position::valid_moves(session.board()) {
        let mut next = session.clone();
        next.apply_move(pos.to_index(), human).unwrap();
        explore(&next, games);
    }
}

#[test]
fn test_ai_as_o_never_loses() {
    let session = GameSession::with_ai(GameMode::VsAi, Player::O);
    let mut games = 0;
    explore(&session, &mut games);
    assert!(games > 0);
}

#[test]
fn test_ai_as_x_never_loses() {
    let session = GameSession::with_ai(GameMode::VsAi, Player::X);
    assert_eq!(session.history().len(), 1, "AI opens as X");
    let mut games = 0;
    explore(&session, &mut games);
    assert!(games > 0);
}

#[test]
fn test_blocks_open_top_row() {
    let board: Board = "X.X ... ...".parse().unwrap();
    assert_eq!(best_move(&board, Player::O), Some(Position::TopCenter));
}

#[test]
fn test_win_preferred_over_block() {
    // O can win on the middle row or block X's top row; winning is better.
    let board: Board = "XX. OO. X..".parse().unwrap();
    assert_eq!(best_move(&board, Player::O), Some(Position::MiddleRight));
}

#[test]
fn test_ties_go_to_lowest_index() {
    // Every opening is a draw under perfect play, so the first square wins the tie.
    let board = Board::new();
    let scores = score_moves(&board, Player::X);
    assert_eq!(scores.len(), 9);
    assert!(scores.iter().all(|&(_, s)| s == 0));
    assert_eq!(best_move(&board, Player::X), Some(Position::TopLeft));
}

#[test]
fn test_scores_bounded_by_win_score() {
    let board: Board = "X.. .O. ...".parse().unwrap();
    for (_, score) in score_moves(&board, Player::X) {
        assert!((-WIN_SCORE..=WIN_SCORE).contains(&score));
    }
}

#[test]
fn test_never_picks_occupied_square() {
    for text in ["X.. ... ...", "XO. .X. ...", "XOX .O. ..X", "OX. XO. X.."] {
        let board: Board = text.parse().unwrap();
        for ai in [Player::X, Player::O] {
            if let Some(pos) = best_move(&board, ai) {
                assert!(board.is_empty(pos), "{} chose {} on {}", ai, pos, text);
            }
        }
    }
}

#[test]
fn test_none_when_game_over() {
    let won: Board = "OOO XX. X..".parse().unwrap();
    assert_eq!(evaluate(&won), GameStatus::Won(Player::O));
    assert_eq!(best_move(&won, Player::X), None);
    assert!(score_moves(&won, Player::X).is_empty());
}
