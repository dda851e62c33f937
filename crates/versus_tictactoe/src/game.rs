//! A human-versus-engine match.
//!
//! The engine itself is stateless; `Game` is the caller that owns the
//! board, alternates turns and keeps score across rounds.

use crate::engine::select_move;
use crate::rules::{Line, evaluate, winning_line};
use crate::{Board, Difficulty, EngineError, Outcome, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Wins per mark and ties, kept across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game; `InProgress` is ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {}
        }
    }

    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Drawn games.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}  Ties: {}", self.x_wins, self.o_wins, self.ties)
    }
}

/// Complete match state. X always moves first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    human: Player,
    difficulty: Difficulty,
    current_player: Player,
    outcome: Outcome,
    scoreboard: Scoreboard,
}

impl Game {
    /// Creates a new game; the human plays `human`.
    #[instrument]
    pub fn new(human: Player, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            human,
            difficulty,
            current_player: Player::X,
            outcome: Outcome::InProgress,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The engine's mark.
    pub fn engine(&self) -> Player {
        self.human.opponent()
    }

    /// Returns the current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the outcome of the current round.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the scores across rounds.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// True when the round is live and the engine is to move.
    pub fn is_engine_turn(&self) -> bool {
        !self.outcome.is_terminal() && self.current_player == self.engine()
    }

    /// The completed line, once someone has won.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.board)
    }

    /// Plays the human's mark at `index` (0-8).
    #[instrument(skip(self))]
    pub fn play_human(&mut self, index: usize) -> Result<Outcome, EngineError> {
        self.check_turn(self.human)?;
        self.board.place(index, self.human)?;
        Ok(self.advance())
    }

    /// Lets the engine choose and play its move; returns the cell.
    #[instrument(skip(self, rng))]
    pub fn play_engine<R>(&mut self, rng: &mut R) -> Result<usize, EngineError>
    where
        R: Rng + ?Sized,
    {
        let engine = self.engine();
        self.check_turn(engine)?;
        let cell = select_move(&self.board, engine, self.difficulty, rng)?;
        self.board.place(cell, engine)?;
        self.advance();
        Ok(cell)
    }

    /// Clears the board for a new round. Marks, difficulty and scores stay.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.outcome = Outcome::InProgress;
    }

    /// Changes difficulty and starts a new round.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    /// Switches the human's mark and starts a new round.
    ///
    /// When the human takes O the engine holds X and moves first.
    pub fn choose_mark(&mut self, human: Player) {
        self.human = human;
        self.reset();
    }

    fn check_turn(&self, player: Player) -> Result<(), EngineError> {
        if self.outcome.is_terminal() {
            return Err(EngineError::GameOver);
        }
        if self.current_player != player {
            return Err(EngineError::NotYourTurn(player));
        }
        Ok(())
    }

    fn advance(&mut self) -> Outcome {
        self.outcome = evaluate(&self.board);
        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, "round finished");
            self.scoreboard.record(self.outcome);
        } else {
            self.current_player = self.current_player.opponent();
        }
        self.outcome
    }
}
