//! Difficulty levels and the move policy each one selects.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How strong the engine plays.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Mostly random moves.
    Easy,
    /// Mostly heuristic moves.
    #[default]
    Normal,
    /// Exhaustive search; never loses.
    Hard,
}

/// The decision procedure a difficulty maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovePolicy {
    /// Heuristic move with the given probability, otherwise a uniformly
    /// random empty cell.
    Mixed {
        /// Chance of the heuristic branch, in `0.0..=1.0`.
        heuristic_probability: f64,
    },
    /// Deterministic exhaustive search.
    Search,
}

impl Difficulty {
    /// Returns the move policy for this level.
    pub fn policy(self) -> MovePolicy {
        match self {
            Difficulty::Easy => MovePolicy::Mixed {
                heuristic_probability: 0.2,
            },
            Difficulty::Normal => MovePolicy::Mixed {
                heuristic_probability: 0.7,
            },
            Difficulty::Hard => MovePolicy::Search,
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::InvalidDifficulty(s.to_string())),
        }
    }
}
