//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unbeatable_tictactoe::{Board, GameMode, Player};

/// Tic-tac-toe against a friend or an unbeatable AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the game config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Override the mode (two-player or vs-ai)
        #[arg(long)]
        mode: Option<GameMode>,

        /// Override the AI's mark (x or o)
        #[arg(long)]
        ai: Option<Player>,
    },

    /// Print the status of a board, e.g. "XXX OO. ..."
    Evaluate {
        /// Nine cells: X, O, or '.' / '_' / 1-9 for empty
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the move the AI would play
    Best {
        /// Nine cells: X, O, or '.' / '_' / 1-9 for empty
        board: Board,

        /// The AI's mark
        #[arg(long, default_value = "o")]
        ai: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the minimax score of every empty square
    Analyze {
        /// Nine cells: X, O, or '.' / '_' / 1-9 for empty
        board: Board,

        /// The AI's mark
        #[arg(long, default_value = "o")]
        ai: Player,
    },
}
