use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use versus_tictactoe::{Board, Difficulty, Player, SessionRng, evaluate, search_move, select_move};

fn bench_search_empty_board() {
    black_box(search_move(black_box(&Board::new()), Player::X));
}

fn bench_search_after_opening() {
    let board = Board::new().with(4, Player::X);
    black_box(search_move(black_box(&board), Player::O));
}

fn bench_full_game(difficulty: Difficulty) {
    let mut board = Board::new();
    let mut rng = SessionRng::new(17);
    let mut mark = Player::X;
    while let Ok(cell) = select_move(&board, mark, difficulty, &mut rng) {
        if board.place(cell, mark).is_err() || evaluate(&board).is_terminal() {
            break;
        }
        mark = mark.opponent();
    }
}

fn search_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    group.sample_size(10);

    group.bench_function("empty_board", |b| b.iter(bench_search_empty_board));

    group.bench_function("after_center_opening", |b| {
        b.iter(bench_search_after_opening)
    });

    group.bench_function("hard_self_play", |b| {
        b.iter(|| bench_full_game(Difficulty::Hard))
    });

    group.bench_function("normal_self_play", |b| {
        b.iter(|| bench_full_game(Difficulty::Normal))
    });

    group.finish();
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
