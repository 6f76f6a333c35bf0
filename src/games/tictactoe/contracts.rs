//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::session::GameSession;
use super::{Player, Position, Square};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// What a satisfied precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// A raw move submission: an untrusted index and the player claiming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct MoveRequest {
    /// Board index, expected in 0-8.
    pub index: usize,
    /// The player submitting the move.
    pub player: Player,
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game has a result.
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The index must name a square.
pub struct InBounds;

impl InBounds {
    /// Resolves the index to a [`Position`].
    pub fn check(request: &MoveRequest) -> Result<Position, MoveError> {
        Position::from_index(request.index).ok_or(MoveError::OutOfRange(request.index))
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    pub fn check(position: Position, session: &GameSession) -> Result<(), MoveError> {
        if session.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not to move.
    pub fn check(request: &MoveRequest, session: &GameSession) -> Result<(), MoveError> {
        if request.player != session.to_move() {
            Err(MoveError::WrongPlayer(request.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in order: game not over, index in bounds,
/// square empty, player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(request: &MoveRequest, session: &GameSession) -> Result<Move, MoveError> {
        GameNotOver::check(session)?;
        let position = InBounds::check(request)?;
        SquareIsEmpty::check(position, session)?;
        PlayersTurn::check(request, session)?;
        Ok(Move::new(request.player, position))
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - Squares occupied before are unchanged (the board only grows)
/// - Players still alternate
/// - History replays to the board
/// - Status matches the board
pub struct MoveContract;

impl Contract<GameSession, MoveRequest> for MoveContract {
    type Checked = Move;

    fn pre(session: &GameSession, request: &MoveRequest) -> Result<Move, MoveError> {
        LegalMove::check(request, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = SessionInvariants::check_all(after).err().unwrap_or_default();

        let monotonic = Position::ALL.iter().all(|&pos| {
            let was = before.board().get(pos);
            was == Square::Empty || was == after.board().get(pos)
        });
        if !monotonic {
            violations.push(InvariantViolation::new("Occupied squares never change"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
