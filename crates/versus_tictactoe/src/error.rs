//! Error types for the tic-tac-toe engine.

use super::types::Player;

/// Error that can occur when selecting, validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The board cannot accept another move (no empty square left).
    #[display("Invalid state: {}", _0)]
    InvalidState(String),

    /// A difficulty name that is not one of easy, normal or hard.
    #[display("Invalid difficulty: {:?} (expected easy, normal or hard)", _0)]
    InvalidDifficulty(String),

    /// A cell index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    InvalidPosition(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// A mark other than X or O.
    #[display("Invalid mark: {:?} (expected X or O)", _0)]
    InvalidMark(String),

    /// A board description that does not parse into nine squares.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),
}

impl std::error::Error for EngineError {}
