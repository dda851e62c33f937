//! Exhaustive game-tree search.
//!
//! Scores are depth-biased: a win found at depth `d` is worth `10 - d`
//! and a loss `d - 10`, so faster wins and slower losses rank higher.
//! Each ply works on a copy of the board; the caller's board is never
//! written.

use crate::rules::has_won;
use crate::{Board, Player};
use tracing::{debug, instrument};

/// Returns the optimal move for `mark`, or `None` on a full board.
///
/// Ties between equally scored cells go to the lowest index.
#[instrument(skip(board), fields(cells = %board))]
pub fn search_move(board: &Board, mark: Player) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;

    for cell in board.empty_cells() {
        let value = score(&board.with(cell, mark), mark, 0, false);
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((cell, value));
        }
    }

    if let Some((cell, value)) = best {
        debug!(cell, value, "search result");
    }
    best.map(|(cell, _)| cell)
}

/// Scores `board` from `mark`'s point of view.
///
/// `maximizing` is true when `mark` is the side to move at this node.
pub fn score(board: &Board, mark: Player, depth: i32, maximizing: bool) -> i32 {
    let opponent = mark.opponent();

    if has_won(board, mark) {
        return 10 - depth;
    }
    if has_won(board, opponent) {
        return depth - 10;
    }
    if board.is_full() {
        return 0;
    }

    let children = board.empty_cells().into_iter();
    if maximizing {
        children
            .map(|cell| score(&board.with(cell, mark), mark, depth + 1, false))
            .max()
    } else {
        children
            .map(|cell| score(&board.with(cell, opponent), mark, depth + 1, true))
            .min()
    }
    .unwrap_or(0)
}
