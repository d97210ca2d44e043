#![no_main]

//! Multi-turn tick fuzzer.
//!
//! Builds an arbitrary frame, including malformed ones, and runs several
//! ticks with arbitrary move decisions. Checks that:
//! 1. A tick never panics
//! 2. Only an invalid board produces an error
//! 3. A valid frame always yields a valid frame

use arbitrary::Arbitrary;
use coil::game::{DeadSnakeBehavior, check_invariants};
use coil::{
    DeathCause, Game, GameFrame, MoveDecision, MoveFailure, Point, RandomSelector, RulesConfig,
    Snake, game_tick,
};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated move reply.
#[derive(Arbitrary, Debug, Clone)]
enum FuzzMove {
    /// One of the four valid labels.
    Valid(u8),
    /// Any label at all.
    Label(String),
    /// The agent did not answer.
    Timeout,
}

#[derive(Arbitrary, Debug)]
struct FuzzSnake {
    segments: Vec<(i8, i8)>,
    health: u8,
    dead: bool,
}

/// Structured input for tick fuzzing.
#[derive(Arbitrary, Debug)]
struct TickInput {
    width: i8,
    height: i8,
    snakes: Vec<FuzzSnake>,
    food: Vec<(i8, i8)>,
    moves: Vec<(u8, FuzzMove)>,
    stay_on_field: bool,
    seed: u64,
    num_turns: u8,
}

fuzz_target!(|input: TickInput| {
    // Cap values to avoid excessive runtime
    let num_turns = (input.num_turns % 10).max(1);
    let game = Game::new("fuzz", i32::from(input.width % 24), i32::from(input.height % 24));
    let rules = RulesConfig {
        dead_snake_behavior: if input.stay_on_field {
            DeadSnakeBehavior::StayOnField
        } else {
            DeadSnakeBehavior::Disappear
        },
        ..RulesConfig::default()
    };

    let snakes: Vec<Snake> = input
        .snakes
        .into_iter()
        .take(8)
        .enumerate()
        .map(|(i, s)| {
            let body = s
                .segments
                .into_iter()
                .take(32)
                .map(|(x, y)| Point::new(i32::from(x), i32::from(y)))
                .collect();
            let mut snake = Snake::new(format!("s{i}"), "fuzz", body)
                .with_health(u32::from(s.health % 101));
            if s.dead {
                snake.kill(0, DeathCause::SnakeCollision);
            }
            snake
        })
        .collect();
    let food = input
        .food
        .into_iter()
        .take(16)
        .map(|(x, y)| Point::new(i32::from(x), i32::from(y)))
        .collect();
    let mut frame = GameFrame::new(0, snakes, food);

    let decisions: Vec<MoveDecision> = input
        .moves
        .into_iter()
        .take(16)
        .map(|(who, reply)| {
            let id = format!("s{}", who % 8);
            match reply {
                FuzzMove::Valid(d) => {
                    MoveDecision::new(id, ["up", "down", "left", "right"][usize::from(d % 4)])
                }
                FuzzMove::Label(label) => MoveDecision::new(id, label),
                FuzzMove::Timeout => MoveDecision::failed(id, MoveFailure::Timeout),
            }
        })
        .collect();

    let mut selector = RandomSelector::new(input.seed);
    for _ in 0..num_turns {
        let was_valid = check_invariants(&game, &frame, rules.max_health).is_empty();
        match game_tick(&rules, &game, &frame, &decisions, &mut selector) {
            Ok(next) => {
                assert_eq!(next.turn, frame.turn + 1);
                assert_eq!(next.snakes.len(), frame.snakes.len());
                if was_valid {
                    let violations = check_invariants(&game, &next, rules.max_health);
                    assert!(violations.is_empty(), "{violations:?}");
                }
                frame = next;
            }
            Err(_) => {
                assert!(game.board().is_err());
                return;
            }
        }
    }
});
