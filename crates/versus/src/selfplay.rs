//! Engine-versus-engine matches.

use rand::Rng;
use tracing::{debug, info, instrument};
use versus_tictactoe::{
    Board, Difficulty, EngineError, Outcome, Player, Scoreboard, evaluate, select_move,
};

/// Plays one game, X at `x` strength and O at `o` strength.
pub fn play_one<R>(x: Difficulty, o: Difficulty, rng: &mut R) -> Result<Outcome, EngineError>
where
    R: Rng + ?Sized,
{
    let mut board = Board::new();
    let mut to_move = Player::X;

    loop {
        let outcome = evaluate(&board);
        if outcome.is_terminal() {
            debug!(%board, %outcome, "Game finished");
            return Ok(outcome);
        }
        let difficulty = match to_move {
            Player::X => x,
            Player::O => o,
        };
        let cell = select_move(&board, to_move, difficulty, rng)?;
        board.place(cell, to_move)?;
        to_move = to_move.opponent();
    }
}

/// Plays `games` games and tallies the results.
#[instrument(skip(rng))]
pub fn run_selfplay<R>(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    rng: &mut R,
) -> Result<Scoreboard, EngineError>
where
    R: Rng + ?Sized,
{
    let mut scores = Scoreboard::new();
    for _ in 0..games {
        scores.record(play_one(x, o, rng)?);
    }
    info!(%scores, "Self-play finished");
    Ok(scores)
}
