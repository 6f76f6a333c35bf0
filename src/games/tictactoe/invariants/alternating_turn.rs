//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern. While the game is in
/// progress the player to move follows from the history length; once it is
/// over the turn stays with whoever made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.player == if i % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }

        let expected = match history.last() {
            Some(last) if session.is_over() => last.player,
            Some(last) => last.player.opponent(),
            None => Player::X,
        };
        session.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
