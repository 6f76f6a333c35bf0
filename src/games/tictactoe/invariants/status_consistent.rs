//! Status consistency invariant: the cached status is what the rules say.

use super::super::{rules, GameSession};
use super::Invariant;

/// Invariant: the session's status equals [`rules::evaluate`] of its board.
pub struct StatusConsistentInvariant;

impl Invariant<GameSession> for StatusConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        session.status() == rules::evaluate(session.board())
    }

    fn description() -> &'static str {
        "Status matches the evaluated board"
    }
}
