//! Application state and logic.

use crate::config::{GameConfig, Theme};
use crate::games::tictactoe::{Board, GameMode, GameSession, GameStatus, Move, Position, Square};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::input::{digit_index, move_cursor};

/// An AI move that is already on the board but not shown yet.
#[derive(Debug, Clone, Copy)]
struct PendingReply {
    mv: Move,
    reveal_at: Instant,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    theme: Theme,
    ai_delay: Duration,
    pending: Option<PendingReply>,
    feedback: Option<String>,
    bell: bool,
}

impl App {
    /// Creates a new application from configuration.
    pub fn new(config: &GameConfig) -> Self {
        let session = GameSession::with_ai(*config.mode(), *config.ai_player());
        let mut app = Self {
            session,
            cursor: Position::Center,
            theme: *config.theme(),
            ai_delay: Duration::from_millis(*config.ai_delay_ms()),
            pending: None,
            feedback: None,
            bell: false,
        };
        // An AI playing X has already opened.
        if let Some(mv) = app.session.history().first().copied() {
            app.hold_back(Some(mv));
        }
        app
    }

    /// Returns the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns true while an AI reply is being held back.
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// The board as it should be shown: a held-back reply is still empty.
    pub fn visible_board(&self) -> Board {
        let mut board = self.session.board().clone();
        if let Some(pending) = self.pending {
            board.set(pending.mv.position, Square::Empty);
        }
        board
    }

    /// The winning line to highlight, once it is visible.
    pub fn highlighted_line(&self) -> Option<[Position; 3]> {
        if self.is_thinking() {
            None
        } else {
            self.session.winning_line()
        }
    }

    /// Text for the status bar.
    pub fn status_line(&self) -> String {
        if self.is_thinking() {
            return "AI is thinking...".to_string();
        }
        if let Some(feedback) = &self.feedback {
            return feedback.clone();
        }
        match self.session.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.session.to_move()),
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    /// Label for the mode indicator.
    pub fn mode_label(&self) -> String {
        match self.session.mode() {
            GameMode::TwoPlayer => "Mode: 2 Players".to_string(),
            GameMode::VsAi => format!("Mode: VS AI (AI plays {})", self.session.ai()),
        }
    }

    /// Reveals a held-back reply once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = self.pending {
            if now >= pending.reveal_at {
                debug!(mv = %pending.mv, "Revealing AI move");
                self.pending = None;
                self.ring_if_over();
            }
        }
    }

    /// Returns true once per finished game, when the result becomes visible.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }

    /// Handles a key press. Returns false when the user quits.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return false;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('m') => self.toggle_mode(),
            KeyCode::Char('t') => self.theme = self.theme.toggled(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index()),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(index) = digit_index(other) {
                    self.place(index);
                }
            }
        }
        true
    }

    /// Places the current player's mark at `index`.
    pub fn place(&mut self, index: usize) {
        if self.is_thinking() {
            debug!(index, "Ignoring input while AI move is pending");
            return;
        }

        let player = self.session.to_move();
        match self.session.apply_move(index, player) {
            Ok(accepted) => {
                self.feedback = None;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.hold_back(*accepted.reply());
                if !self.is_thinking() {
                    self.ring_if_over();
                }
            }
            Err(e) => {
                self.feedback = Some(e.to_string());
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        let opening = self.session.restart();
        self.feedback = None;
        self.pending = None;
        self.bell = false;
        self.cursor = Position::Center;
        self.hold_back(opening);
    }

    /// Switches between two-player and vs-AI mode.
    pub fn toggle_mode(&mut self) {
        if self.is_thinking() {
            return;
        }
        let reply = self.session.toggle_mode();
        self.feedback = None;
        self.hold_back(reply);
        if !self.is_thinking() {
            self.ring_if_over();
        }
    }

    fn ring_if_over(&mut self) {
        if self.session.is_over() {
            info!(status = %self.session.status(), "Announcing result");
            self.bell = true;
        }
    }

    fn hold_back(&mut self, reply: Option<Move>) {
        self.pending = reply.map(|mv| PendingReply {
            mv,
            reveal_at: Instant::now() + self.ai_delay,
        });
    }
}
