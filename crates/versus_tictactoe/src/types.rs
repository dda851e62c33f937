//! Core domain types for tic-tac-toe.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The symbol written into a square.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl FromStr for Player {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(EngineError::InvalidMark(other.to_string())),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn parse_symbol(c: char) -> Option<Square> {
        match c {
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            '.' | '-' | '_' | ' ' => Some(Square::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// On the wire a board is the nine-element string array used by the
/// game API: `["X", "", "O", ...]`, with `""` for an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), EngineError> {
        let slot = self
            .squares
            .get_mut(pos)
            .ok_or(EngineError::InvalidPosition(pos))?;
        *slot = square;
        Ok(())
    }

    /// Places a mark on an empty square.
    #[instrument]
    pub fn place(&mut self, pos: usize, player: Player) -> Result<(), EngineError> {
        match self.get(pos) {
            None => Err(EngineError::InvalidPosition(pos)),
            Some(Square::Occupied(_)) => Err(EngineError::SquareOccupied(pos)),
            Some(Square::Empty) => self.set(pos, Square::Occupied(player)),
        }
    }

    /// Returns a copy of this board with `player` written at `pos`.
    ///
    /// `pos` must be an empty in-bounds square; use [`Board::place`] for
    /// unchecked input.
    pub fn with(&self, pos: usize, player: Player) -> Board {
        debug_assert!(self.is_empty(pos), "square {pos} is not an empty cell");
        let mut next = *self;
        next.squares[pos] = Square::Occupied(player);
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Indices of the empty squares, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// True when no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact notation: one symbol per square, `X`, `O` or `.` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = square.player().map(Player::symbol).unwrap_or('.');
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Parses the compact notation.
///
/// `X`/`O` are marks; `.`, `-`, `_` and space are empty squares.
/// `/`, newlines and tabs are row separators and are skipped, so
/// `"XO./.X./..O"` and `"XO..X...O"` describe the same board.
impl FromStr for Board {
    type Err = EngineError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars().filter(|c| !matches!(c, '/' | '\n' | '\r' | '\t')) {
            let square = Square::parse_symbol(c)
                .ok_or_else(|| EngineError::InvalidBoard(format!("unexpected symbol {:?}", c)))?;
            squares.push(square);
        }
        from_squares(squares)
    }
}

impl TryFrom<&[&str]> for Board {
    type Error = EngineError;

    fn try_from(cells: &[&str]) -> Result<Self, Self::Error> {
        let squares = cells
            .iter()
            .map(|cell| match cell.trim() {
                "" => Ok(Square::Empty),
                mark => mark
                    .parse::<Player>()
                    .map(Square::Occupied)
                    .map_err(|_| EngineError::InvalidBoard(format!("unexpected cell {:?}", mark))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        from_squares(squares)
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = EngineError;

    fn try_from(cells: Vec<String>) -> Result<Self, Self::Error> {
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        Board::try_from(cells.as_slice())
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        board
            .squares
            .iter()
            .map(|s| s.player().map(|p| p.symbol().to_string()).unwrap_or_default())
            .collect()
    }
}

fn from_squares(squares: Vec<Square>) -> Result<Board, EngineError> {
    let len = squares.len();
    let squares: [Square; 9] = squares
        .try_into()
        .map_err(|_| EngineError::InvalidBoard(format!("expected 9 squares, found {}", len)))?;
    Ok(Board { squares })
}
