//! Versus tic-tac-toe engine.
//!
//! A pure move-selection engine for 3x3 tic-tac-toe with three strength
//! levels, plus the small amount of match bookkeeping a front end needs.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`Position`]
//! - **Rules**: terminal detection ([`evaluate`] → [`Outcome`])
//! - **Engine**: [`select_move`] under a [`Difficulty`]
//! - **Game**: a caller-owned human-versus-engine [`Game`] with a [`Scoreboard`]
//!
//! Randomness is always injected, so a seeded generator makes every
//! difficulty reproducible.
//!
//! # Example
//!
//! ```
//! use versus_tictactoe::{Board, Difficulty, Outcome, Player, SessionRng, evaluate, select_move};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//!
//! let mut rng = SessionRng::new(7);
//! let cell = select_move(&board, Player::O, Difficulty::Hard, &mut rng)?;
//! assert_eq!(cell, 5);
//! # Ok::<(), versus_tictactoe::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod error;
mod game;
mod position;
mod rng;
mod types;

pub mod engine;
pub mod rules;

pub use difficulty::{Difficulty, MovePolicy};
pub use engine::{heuristic_move, random_move, score, search_move, select_move};
pub use error::EngineError;
pub use game::{Game, Scoreboard};
pub use position::Position;
pub use rng::SessionRng;
pub use rules::{LINES, Line, LineKind, Outcome, evaluate};
pub use types::{Board, Player, Square};
