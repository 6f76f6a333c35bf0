//! Tic-tac-toe - Unified CLI
//!
//! Interactive play plus one-shot board analysis.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{
    AnalysisReport, BestMoveReport, Board, EvaluateReport, GameConfig, GameMode, Player,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, mode, ai } => run_play(&config, mode, ai),
        Command::Evaluate { board, json } => {
            initialize_cli_tracing();
            run_evaluate(board, json)
        }
        Command::Best { board, ai, json } => {
            initialize_cli_tracing();
            run_best(&board, ai, json)
        }
        Command::Analyze { board, ai } => {
            initialize_cli_tracing();
            run_analyze(&board, ai)
        }
    }
}

/// Run the terminal UI
fn run_play(config_path: &Path, mode: Option<GameMode>, ai: Option<Player>) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(ai) = ai {
        config = config.with_ai_player(ai);
    }

    unbeatable_tictactoe::tui::run_tui(config)
}

#[instrument(skip(board))]
fn run_evaluate(board: Board, json: bool) -> Result<()> {
    let report = EvaluateReport::new(board);
    info!(status = %report.status, "Board evaluated");
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

#[instrument(skip(board))]
fn run_best(board: &Board, ai: Player, json: bool) -> Result<()> {
    let report = BestMoveReport::new(board, ai);
    info!(position = ?report.position, "Best move computed");
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

#[instrument(skip(board))]
fn run_analyze(board: &Board, ai: Player) -> Result<()> {
    let report = AnalysisReport::new(board, ai);
    println!("{}", report);
    Ok(())
}

fn initialize_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
