//! Move selection.
//!
//! Every entry point is a pure function of the board it is given, the
//! mark the engine plays, and an injected random source. The opponent
//! is always `mark.opponent()`.

mod heuristic;
mod search;

pub use heuristic::heuristic_move;
pub use search::{score, search_move};

use crate::{Board, Difficulty, EngineError, MovePolicy, Player};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks the engine's next move for `mark` under `difficulty`.
///
/// Easy and Normal flip a biased coin between [`heuristic_move`] and
/// [`random_move`]; Hard always plays [`search_move`].
///
/// # Errors
///
/// [`EngineError::InvalidState`] if the board has no empty square.
#[instrument(skip(board, rng), fields(cells = %board))]
pub fn select_move<R>(
    board: &Board,
    mark: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, EngineError>
where
    R: Rng + ?Sized,
{
    if board.is_full() {
        return Err(EngineError::InvalidState(
            "cannot select a move on a full board".to_string(),
        ));
    }

    let cell = match difficulty.policy() {
        MovePolicy::Search => search_move(board, mark),
        MovePolicy::Mixed {
            heuristic_probability,
        } => {
            if rng.random_bool(heuristic_probability) {
                debug!("heuristic branch");
                Some(heuristic_move(board, mark, rng))
            } else {
                debug!("random branch");
                random_move(board, rng)
            }
        }
    }
    .ok_or_else(|| EngineError::InvalidState("no empty square to play".to_string()))?;

    debug!(cell, "selected move");
    Ok(cell)
}

/// A uniformly random empty cell, or `None` on a full board.
pub fn random_move<R>(board: &Board, rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
{
    board.empty_cells().choose(rng).copied()
}
