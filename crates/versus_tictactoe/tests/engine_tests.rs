//! Behavioural tests for the move engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use versus_tictactoe::{
    Board, Difficulty, EngineError, LINES, Outcome, Player, SessionRng, evaluate, heuristic_move,
    score, search_move, select_move,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

fn cells(cells: [&str; 9]) -> Board {
    Board::try_from(&cells[..]).expect("valid board")
}

/// Walks every continuation where `hard` answers with the engine and the
/// other side tries every legal move. Returns the number of finished games.
fn assert_never_loses(board: Board, hard: Player, to_move: Player) -> usize {
    match evaluate(&board) {
        Outcome::Win(winner) => {
            assert_eq!(winner, hard, "engine lost on {}", board);
            return 1;
        }
        Outcome::Tie => return 1,
        Outcome::InProgress => {}
    }

    if to_move == hard {
        let cell = search_move(&board, hard).expect("board has an empty cell");
        assert!(board.is_empty(cell));
        assert_never_loses(board.with(cell, hard), hard, to_move.opponent())
    } else {
        board
            .empty_cells()
            .into_iter()
            .map(|cell| assert_never_loses(board.with(cell, to_move), hard, to_move.opponent()))
            .sum()
    }
}

#[test]
fn test_evaluate_each_line() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let mut b = Board::new();
            for cell in line.cells() {
                b.place(cell, player).unwrap();
            }
            assert_eq!(evaluate(&b), Outcome::Win(player));
        }
    }
}

#[test]
fn test_evaluate_tie_and_in_progress() {
    assert_eq!(evaluate(&board("XOX/XOO/OXX")), Outcome::Tie);
    assert_eq!(evaluate(&board("XOX/XO./O.X")), Outcome::InProgress);
    assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
}

#[test]
fn test_heuristic_takes_immediate_win() {
    let b = cells(["X", "X", "", "", "", "", "", "", ""]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(heuristic_move(&b, Player::X, &mut rng), 2);
}

#[test]
fn test_heuristic_blocks_immediate_loss() {
    let b = cells(["O", "O", "", "X", "", "", "", "", ""]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(heuristic_move(&b, Player::X, &mut rng), 2);
}

#[test]
fn test_heuristic_blocks_lowest_of_two_threats() {
    let b = cells(["O", "O", "", "", "X", "", "O", "", ""]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(heuristic_move(&b, Player::X, &mut rng), 2);
}

#[test]
fn test_heuristic_prefers_center() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(heuristic_move(&Board::new(), Player::X, &mut rng), 4);
}

#[test]
fn test_hard_never_loses_as_x() {
    let games = assert_never_loses(Board::new(), Player::X, Player::X);
    assert!(games > 0);
}

#[test]
fn test_hard_never_loses_as_o() {
    let games = assert_never_loses(Board::new(), Player::O, Player::X);
    assert!(games > 0);
}

#[test]
fn test_hard_against_itself_ties() {
    let mut b = Board::new();
    let mut rng = SessionRng::new(0);
    let mut to_move = Player::X;
    let mut played = Vec::new();
    while evaluate(&b) == Outcome::InProgress {
        let cell = select_move(&b, to_move, Difficulty::Hard, &mut rng).unwrap();
        b.place(cell, to_move).unwrap();
        played.push(cell);
        to_move = to_move.opponent();
    }
    assert_eq!(evaluate(&b), Outcome::Tie);
    assert_eq!(played, vec![0, 4, 1, 2, 6, 3, 5, 7, 8]);
}

#[test]
fn test_hard_blocks_two_in_a_row() {
    let b = cells(["X", "X", "", "", "", "", "", "", ""]);
    let mut rng = SessionRng::new(0);
    assert_eq!(select_move(&b, Player::O, Difficulty::Hard, &mut rng), Ok(2));
}

#[test]
fn test_hard_is_deterministic() {
    let b = board("X../.O./..X");
    let first = select_move(&b, Player::O, Difficulty::Hard, &mut SessionRng::new(1)).unwrap();
    for seed in 2..10 {
        let again =
            select_move(&b, Player::O, Difficulty::Hard, &mut SessionRng::new(seed)).unwrap();
        assert_eq!(again, first);
    }
    assert_eq!(search_move(&b, Player::O), Some(first));
}

#[test]
fn test_select_move_on_full_board_is_invalid_state() {
    let b = board("XOX/XOO/OXX");
    let err = select_move(&b, Player::X, Difficulty::Normal, &mut SessionRng::new(0)).unwrap_err();
    assert!(matches!(err, EngineError::InvalidState(_)));
}

#[test]
fn test_unknown_difficulty_is_an_error() {
    assert_eq!(
        "expert".parse::<Difficulty>(),
        Err(EngineError::InvalidDifficulty("expert".to_string()))
    );
}

#[test]
fn test_every_difficulty_returns_an_empty_cell() {
    let mut rng = SessionRng::new(99);
    for b in ["X../.../...", "XO./.X./..O", "XOX/OXO/.X."] {
        let b = board(b);
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            for mark in [Player::X, Player::O] {
                let cell = select_move(&b, mark, difficulty, &mut rng).unwrap();
                assert!(b.is_empty(cell), "{difficulty} played occupied {cell} on {b}");
            }
        }
    }
}

#[test]
fn test_seeded_policies_are_reproducible() {
    let b = board("X../.O./...");
    for difficulty in [Difficulty::Easy, Difficulty::Normal] {
        let run = |seed| {
            let mut rng = SessionRng::new(seed);
            (0..32)
                .map(|_| select_move(&b, Player::X, difficulty, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(1234), run(1234));
    }
}

#[test]
fn test_normal_takes_wins_more_often_than_easy() {
    // X wins at 2; a random move finds it 1 time in 7
    let b = board("XX./.../...");
    let mut rng = StdRng::seed_from_u64(2024);
    let mut wins = |difficulty| {
        (0..1000)
            .filter(|_| select_move(&b, Player::X, difficulty, &mut rng).unwrap() == 2)
            .count()
    };
    let easy = wins(Difficulty::Easy);
    let normal = wins(Difficulty::Normal);
    assert!(easy < 400, "easy took the win {easy} times");
    assert!(normal > 650, "normal took the win {normal} times");
}

#[test]
fn test_depth_bias() {
    let x_wins = board("XXX/OO./...");
    assert!(score(&x_wins, Player::X, 2, false) > score(&x_wins, Player::X, 4, false));

    let x_loses = board("OOO/XX./X..");
    assert!(score(&x_loses, Player::X, 4, true) > score(&x_loses, Player::X, 2, true));
}

#[test]
fn test_search_prefers_the_faster_win() {
    // winning now at 5 outranks blocking X at 2
    assert_eq!(search_move(&board("XX./OO./X.."), Player::O), Some(5));
}

#[test]
fn test_board_wire_format() {
    let b = cells(["X", "", "O", "", "X", "", "", "", "O"]);
    let json = serde_json::to_string(&b).unwrap();
    assert_eq!(json, r#"["X","","O","","X","","","","O"]"#);
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);
    assert!(serde_json::from_str::<Board>(r#"["X","",""]"#).is_err());
}

#[test]
fn test_difficulty_wire_format() {
    assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), r#""hard""#);
    let parsed: Difficulty = serde_json::from_str(r#""easy""#).unwrap();
    assert_eq!(parsed, Difficulty::Easy);
    assert!(serde_json::from_str::<Difficulty>(r#""legendary""#).is_err());
}
