//! Terminal-state detection.

use super::draw::is_full;
use super::win::check_winner;
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
///
/// Always derived from a board, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Full board, no line completed.
    Tie,
}

impl Outcome {
    /// True for `Win` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(player) => write!(f, "{} wins!", player),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Evaluates the board: win, tie, or still in progress.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = check_winner(board) {
        Outcome::Win(player)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
