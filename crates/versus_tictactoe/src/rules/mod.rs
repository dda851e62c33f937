//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated
//! from board storage so the engine and front ends share one definition
//! of a finished game.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, evaluate};
pub use win::{LINES, Line, LineKind, check_winner, completes_line, has_won, winning_line};
