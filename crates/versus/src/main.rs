//! Versus - unified CLI
//!
//! Play tic-tac-toe against the engine, ask it for a move, or let it play
//! itself.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use versus::{Cli, Command, PlaySettings, VersusConfig, run_selfplay, run_session};
use versus_tictactoe::{Position, SessionRng, select_move};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            difficulty,
            mark,
            seed,
            config,
        } => {
            let config = match config {
                Some(path) => VersusConfig::from_file(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => VersusConfig::default(),
            };
            let config = config.with_overrides(difficulty, mark, seed);
            run_play(&config)
        }
        Command::Suggest {
            board,
            mark,
            difficulty,
            seed,
        } => {
            let mut rng = rng_for(seed);
            let cell = select_move(&board, mark, difficulty, &mut rng)
                .with_context(|| format!("No move for board {}", board))?;
            info!(
                cell,
                label = Position::from_index(cell).map(|p| p.label()).unwrap_or("?"),
                "Suggested move"
            );
            println!("{}", cell);
            Ok(())
        }
        Command::Selfplay { games, x, o, seed } => {
            let mut rng = rng_for(seed);
            let scores = run_selfplay(x, o, games, &mut rng)?;
            println!("{} games, X={} O={}", games, x, o);
            println!("{}", scores);
            Ok(())
        }
    }
}

/// Run the interactive session on the terminal
#[instrument(skip(config))]
fn run_play(config: &VersusConfig) -> Result<()> {
    info!(?config, "Starting interactive session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), PlaySettings::from(config))?;
    Ok(())
}

fn rng_for(seed: Option<u64>) -> SessionRng {
    let rng = seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    info!(seed = rng.seed(), "Using random seed");
    rng
}
