//! Versus - play tic-tac-toe against the engine in a terminal.
//!
//! The terminal front end is a thin caller of [`versus_tictactoe`]: it owns
//! the input loop, the configuration file and logging set-up, and asks the
//! engine for a cell whenever it is the computer's turn.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod play;
mod selfplay;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, VersusConfig};

// Crate-level exports - Interactive play
pub use play::{PlayCommand, PlaySettings, run_session};

// Crate-level exports - Engine versus engine
pub use selfplay::{play_one, run_selfplay};
