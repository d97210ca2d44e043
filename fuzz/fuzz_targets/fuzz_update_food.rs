#![no_main]

//! Food respawn fuzzer.
//!
//! Checks count conservation and placement of respawned food for arbitrary
//! boards, bodies and eaten lists.

use std::collections::HashSet;

use arbitrary::Arbitrary;
use coil::game::unoccupied_points;
use coil::{GameFrame, Point, RandomSelector, Snake, update_food};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FoodInput {
    width: u8,
    height: u8,
    body: Vec<(u8, u8)>,
    food: Vec<(u8, u8)>,
    eaten: Vec<(u8, u8)>,
    seed: u64,
}

fn points(raw: Vec<(u8, u8)>, limit: usize) -> Vec<Point> {
    raw.into_iter()
        .take(limit)
        .map(|(x, y)| Point::new(i32::from(x % 16), i32::from(y % 16)))
        .collect()
}

fuzz_target!(|input: FoodInput| {
    let width = i32::from(input.width % 16);
    let height = i32::from(input.height % 16);

    let mut seen = HashSet::new();
    let food: Vec<Point> = points(input.food, 32)
        .into_iter()
        .filter(|p| seen.insert(*p))
        .collect();
    let eaten = points(input.eaten, 32);
    let frame = GameFrame::new(0, vec![Snake::new("s", "s", points(input.body, 64))], food);

    let Ok(next) = update_food(width, height, &frame, &eaten, &mut RandomSelector::new(input.seed))
    else {
        assert!(width <= 0 || height <= 0);
        return;
    };

    let kept: Vec<Point> = frame.food.iter().copied().filter(|p| !eaten.contains(p)).collect();
    assert_eq!(&next[..kept.len()], &kept[..]);

    let board = coil::game::Board::new(width, height).unwrap();
    let free = unoccupied_points(board, &kept, &frame.snakes);
    let removed = frame.food.len() - kept.len();
    assert_eq!(next.len(), kept.len() + removed.min(free.len()));
    for spawned in &next[kept.len()..] {
        assert!(free.contains(spawned));
    }
});
