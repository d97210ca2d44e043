//! Benchmarks for the tick hot path.
//!
//! Covers a single tick on a crowded board, food respawn on a nearly full
//! board, and a whole seeded match.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use coil::moves::FixedMoves;
use coil::{
    Direction, Engine, Game, GameFrame, MatchHistory, MoveDecision, Point, RandomSelector,
    RulesConfig, Snake, game_tick, update_food,
};
use criterion::{Criterion, criterion_group, criterion_main};

/// Eight snakes of length 10 in separate columns of a 19x19 board.
fn crowded_frame() -> GameFrame {
    let snakes = (0..8)
        .map(|i| {
            let body = (4..14).map(|y| Point::new(i * 2 + 1, y)).collect();
            Snake::new(format!("s{i}"), format!("snake {i}"), body)
        })
        .collect();
    let food = (0..8).map(|i| Point::new(i * 2 + 1, 2)).collect();
    GameFrame::new(0, snakes, food)
}

fn bench_single_tick(c: &mut Criterion) {
    let rules = RulesConfig::default();
    let game = Game::new("bench", 19, 19);
    let frame = crowded_frame();
    let decisions: Vec<_> = frame
        .snakes
        .iter()
        .map(|s| MoveDecision::new(s.id.clone(), "up"))
        .collect();

    c.bench_function("tick_8_snakes", |b| {
        let mut selector = RandomSelector::new(42);
        b.iter(|| {
            let next = game_tick(
                &rules,
                black_box(&game),
                black_box(&frame),
                black_box(&decisions),
                &mut selector,
            );
            black_box(next)
        });
    });
}

fn bench_food_respawn(c: &mut Criterion) {
    // One long snake fills every column but the last.
    let body = (0..18)
        .flat_map(|x| (0..19).map(move |y| Point::new(x, y)))
        .collect();
    let food: Vec<Point> = (0..10).map(|y| Point::new(18, y)).collect();
    let frame = GameFrame::new(0, vec![Snake::new("s", "s", body)], food.clone());

    c.bench_function("update_food_full_board", |b| {
        let mut selector = RandomSelector::new(7);
        b.iter(|| {
            let next = update_food(19, 19, black_box(&frame), black_box(&food), &mut selector);
            black_box(next)
        });
    });
}

fn bench_short_match(c: &mut Criterion) {
    let frame = crowded_frame();
    let source = frame
        .snakes
        .iter()
        .enumerate()
        .fold(FixedMoves::new(), |moves, (i, s)| {
            let direction = if i % 2 == 0 { Direction::Up } else { Direction::Down };
            moves.with(s.id.clone(), direction)
        });

    c.bench_function("match_100_turns", |b| {
        b.iter(|| {
            let mut engine = Engine::new(RulesConfig::default(), source.clone(), RandomSelector::new(1));
            let mut history = MatchHistory::new(Game::new("bench", 19, 19), frame.clone());
            let outcome = engine.run(&mut history, 100).unwrap();
            black_box(outcome)
        });
    });
}

criterion_group!(benches, bench_single_tick, bench_food_respawn, bench_short_match);
criterion_main!(benches);
