//! Interactive game loop.
//!
//! Generic over the reader and writer so the whole session can be driven
//! from in-memory buffers.

use crate::config::VersusConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use versus_tictactoe::{Difficulty, EngineError, Game, Player, Position, Scoreboard, SessionRng};

const HELP: &str = "\
Commands:
  1-9 or a label (e.g. center)  place your mark
  new                           start a new round
  difficulty <easy|normal|hard> change strength (starts a new round)
  mark <X|O>                    switch sides (starts a new round)
  help                          show this text
  quit                          leave";

/// Resolved settings for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySettings {
    /// Engine strength.
    pub difficulty: Difficulty,
    /// The human's mark.
    pub human: Player,
    /// Seed for the engine; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl From<&VersusConfig> for PlaySettings {
    fn from(config: &VersusConfig) -> Self {
        Self {
            difficulty: *config.difficulty(),
            human: *config.human_mark(),
            seed: *config.seed(),
        }
    }
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// Place the human's mark.
    Move(Position),
    /// Start a new round.
    New,
    /// Change difficulty.
    Difficulty(Difficulty),
    /// Switch sides.
    Mark(Player),
    /// Show the command list.
    Help,
    /// Leave the session.
    Quit,
    /// Blank line.
    Nothing,
}

impl PlayCommand {
    /// Parses a line of input.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(PlayCommand::Nothing),
            "quit" | "exit" | "q" => Ok(PlayCommand::Quit),
            "new" | "reset" => Ok(PlayCommand::New),
            "help" | "?" => Ok(PlayCommand::Help),
            "difficulty" => rest
                .parse()
                .map(PlayCommand::Difficulty)
                .map_err(|e: EngineError| e.to_string()),
            "mark" => rest
                .parse()
                .map(PlayCommand::Mark)
                .map_err(|e: EngineError| e.to_string()),
            _ => Position::from_label_or_number(line)
                .map(PlayCommand::Move)
                .ok_or_else(|| format!("Unrecognized input {:?}; type 'help'", line)),
        }
    }
}

/// Runs an interactive session until `quit` or end of input.
///
/// Returns the final scoreboard.
#[instrument(skip(input, output))]
pub fn run_session<R, W>(input: R, mut output: W, settings: PlaySettings) -> Result<Scoreboard>
where
    R: BufRead,
    W: Write,
{
    let mut rng = settings
        .seed
        .map(SessionRng::new)
        .unwrap_or_else(SessionRng::from_random);
    info!(seed = rng.seed(), "Session started");

    let mut game = Game::new(settings.human, settings.difficulty);
    writeln!(
        output,
        "You are {}; the engine plays {} on {}.",
        game.human(),
        game.engine(),
        game.difficulty()
    )?;
    writeln!(output, "{}", HELP)?;

    engine_reply(&mut game, &mut rng, &mut output)?;
    render(&game, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = match PlayCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };
        debug!(?command, "Parsed command");

        match command {
            PlayCommand::Quit => break,
            PlayCommand::Nothing => continue,
            PlayCommand::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            PlayCommand::New => game.reset(),
            PlayCommand::Difficulty(difficulty) => {
                game.set_difficulty(difficulty);
                writeln!(output, "Difficulty set to {}.", difficulty)?;
            }
            PlayCommand::Mark(mark) => {
                game.choose_mark(mark);
                writeln!(output, "You are now {}.", mark)?;
            }
            PlayCommand::Move(position) => {
                if let Err(e) = game.play_human(position.to_index()) {
                    warn!(error = %e, "Rejected move");
                    writeln!(output, "{}", e)?;
                    continue;
                }
            }
        }

        engine_reply(&mut game, &mut rng, &mut output)?;
        render(&game, &mut output)?;
    }

    writeln!(output, "Final score - {}", game.scoreboard())?;
    Ok(*game.scoreboard())
}

fn engine_reply<W: Write>(game: &mut Game, rng: &mut SessionRng, output: &mut W) -> Result<()> {
    if game.is_engine_turn() {
        let cell = game.play_engine(rng).context("Engine failed to move")?;
        let label = Position::from_index(cell).map(|p| p.label()).unwrap_or("?");
        writeln!(output, "Engine plays {} ({}).", cell + 1, label)?;
    }
    Ok(())
}

fn render<W: Write>(game: &Game, output: &mut W) -> Result<()> {
    writeln!(output, "\n{}\n", game.board().display())?;

    let outcome = game.outcome();
    if outcome.is_terminal() {
        writeln!(output, "{}", outcome)?;
        if let Some(line) = game.winning_line() {
            let cells: Vec<String> = line.cells().iter().map(|c| (c + 1).to_string()).collect();
            writeln!(output, "Winning line: {}", cells.join("-"))?;
        }
        writeln!(output, "Score - {}", game.scoreboard())?;
        writeln!(output, "Type 'new' to play again or 'quit' to leave.")?;
    } else {
        writeln!(output, "Your move ({}):", game.human())?;
    }
    Ok(())
}
