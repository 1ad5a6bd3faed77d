//! Criterion benchmarks measure time of the clearly separated pieces of code.

use chessvar::chess::core::Player;
use chessvar::chess::game::Game;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const OPENING: [&str; 6] = ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"];

fn play_opening(moves: &[&str]) -> Game {
    let mut game = Game::new();
    for next_move in moves {
        let _ = criterion::black_box(game.apply_move(next_move));
    }
    game
}

fn apply_moves(c: &mut Criterion) {
    let _ = c.bench_with_input(
        BenchmarkId::new("apply moves", format!("{} moves", OPENING.len())),
        &OPENING,
        |b, moves| {
            b.iter(|| play_opening(moves));
        },
    );
}

fn generate_destinations(game: &Game) -> usize {
    game.board()
        .pieces(Player::White)
        .map(|(square, _)| game.candidate_destinations(square).len())
        .sum()
}

fn destinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Candidate destinations");
    for (name, game) in [
        ("starting", Game::new()),
        ("developed", play_opening(&OPENING[..4])),
    ] {
        let _ = group.bench_with_input(BenchmarkId::from_parameter(name), &game, |b, game| {
            b.iter(|| criterion::black_box(generate_destinations(game)));
        });
    }
    group.finish();
}

criterion_group! {
    name = engine;
    config = Criterion::default();
    targets = apply_moves, destinations
}
criterion_main!(engine);
