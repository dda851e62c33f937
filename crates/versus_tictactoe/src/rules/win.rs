//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Orientation of a [`Line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// A horizontal line.
    Row,
    /// A vertical line.
    Column,
    /// One of the two diagonals.
    Diagonal,
}

/// Three board indices that win when they share a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    cells: [usize; 3],
    kind: LineKind,
}

impl Line {
    const fn new(cells: [usize; 3], kind: LineKind) -> Self {
        Self { cells, kind }
    }

    /// The three indices, ascending.
    pub fn cells(&self) -> [usize; 3] {
        self.cells
    }

    /// Row, column or diagonal.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the player holding all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells;
        let sq = board.get(a)?;
        if sq != Square::Empty && Some(sq) == board.get(b) && Some(sq) == board.get(c) {
            sq.player()
        } else {
            None
        }
    }

    /// Whether `index` is one of this line's cells.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Winning combinations: rows, columns, then diagonals.
pub const LINES: [Line; 8] = [
    Line::new([0, 1, 2], LineKind::Row),
    Line::new([3, 4, 5], LineKind::Row),
    Line::new([6, 7, 8], LineKind::Row),
    Line::new([0, 3, 6], LineKind::Column),
    Line::new([1, 4, 7], LineKind::Column),
    Line::new([2, 5, 8], LineKind::Column),
    Line::new([0, 4, 8], LineKind::Diagonal),
    Line::new([2, 4, 6], LineKind::Diagonal),
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line.owner(board))
}

/// Whether `player` holds any complete line.
pub fn has_won(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| line.owner(board) == Some(player))
}

/// Returns the first completed line in table order.
///
/// Front ends use it to highlight the winning cells.
#[instrument]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.iter().copied().find(|line| line.owner(board).is_some())
}

/// Whether placing `player` on the empty square `index` completes a line.
///
/// Only the lines through `index` are inspected.
pub fn completes_line(board: &Board, index: usize, player: Player) -> bool {
    if !board.is_empty(index) {
        return false;
    }
    let mine = Some(Square::Occupied(player));
    LINES
        .iter()
        .filter(|line| line.contains(index))
        .any(|line| {
            line.cells()
                .iter()
                .filter(|&&i| i != index)
                .all(|&i| board.get(i) == mine)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let b = board("XXX/OO./...");
        assert_eq!(check_winner(&b), Some(Player::X));
        let line = winning_line(&b).unwrap();
        assert_eq!(line.cells(), [0, 1, 2]);
        assert_eq!(line.kind(), LineKind::Row);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let b = board("X.O/XO./O..");
        assert_eq!(check_winner(&b), Some(Player::O));
        assert_eq!(winning_line(&b).unwrap().kind(), LineKind::Diagonal);
    }

    #[test]
    fn test_winner_column() {
        let b = board(".O./XO./XO.");
        assert_eq!(check_winner(&b), Some(Player::O));
        assert_eq!(winning_line(&b).unwrap().cells(), [1, 4, 7]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX./.O./...")), None);
    }

    #[test]
    fn test_completes_line() {
        let b = board("XX./OO./...");
        assert!(completes_line(&b, 2, Player::X));
        assert!(!completes_line(&b, 2, Player::O));
        assert!(completes_line(&b, 5, Player::O));
        // occupied squares never complete anything
        assert!(!completes_line(&b, 0, Player::X));
    }

    #[test]
    fn test_lines_cover_every_cell() {
        for i in 0..9 {
            assert!(LINES.iter().any(|l| l.contains(i)));
        }
        assert_eq!(LINES.iter().filter(|l| l.contains(4)).count(), 4);
    }
}
