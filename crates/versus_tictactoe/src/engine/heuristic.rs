//! Rule-based move: win, block, center, corner, edge.

use crate::rules::completes_line;
use crate::{Board, Player, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::trace;

/// Returns a fast rule-based move for `mark`.
///
/// First matching rule wins:
/// 1. the lowest empty cell that completes a line for `mark`;
/// 2. the lowest empty cell that completes a line for the opponent;
/// 3. the center;
/// 4. a random empty corner;
/// 5. a random empty edge;
/// 6. cell 0 (only reachable on a full board).
pub fn heuristic_move<R>(board: &Board, mark: Player, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let empty = board.empty_cells();

    if let Some(&cell) = empty.iter().find(|&&i| completes_line(board, i, mark)) {
        trace!(cell, "taking win");
        return cell;
    }

    let opponent = mark.opponent();
    if let Some(&cell) = empty.iter().find(|&&i| completes_line(board, i, opponent)) {
        trace!(cell, "blocking");
        return cell;
    }

    let center = Position::Center.to_index();
    if board.is_empty(center) {
        return center;
    }

    for group in [Position::CORNERS, Position::EDGES] {
        let open: Vec<usize> = group
            .iter()
            .map(|p| p.to_index())
            .filter(|&i| board.is_empty(i))
            .collect();
        if let Some(&cell) = open.choose(rng) {
            return cell;
        }
    }

    0
}
