//! Command-line interface for versus.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use versus_tictactoe::{Board, Difficulty, Player};

/// Versus - tic-tac-toe against a computer opponent
#[derive(Parser, Debug)]
#[command(name = "versus")]
#[command(about = "Tic-tac-toe against an engine with three difficulty levels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Engine strength: easy, normal or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Your mark (X moves first)
        #[arg(short, long)]
        mark: Option<Player>,

        /// Seed for the engine's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the engine's move (cell index 0-8) for a board
    Suggest {
        /// Board in compact notation, e.g. "XX./.O./..."
        #[arg(short, long)]
        board: Board,

        /// Mark the engine plays
        #[arg(short, long, default_value = "O")]
        mark: Player,

        /// Engine strength: easy, normal or hard
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for the engine's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit the engine against itself and print the tally
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Strength of the X side
        #[arg(short, long, default_value = "hard")]
        x: Difficulty,

        /// Strength of the O side
        #[arg(short, long, default_value = "hard")]
        o: Difficulty,

        /// Seed for the engine's random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}
