//! The per-turn state transition.
//!
//! A tick runs these phases in order:
//! 1. Index move decisions by snake ID
//! 2. Starvation: every living snake loses one health, dying at zero
//! 3. Movement: each remaining snake's new head is computed
//! 4. Eating: snakes landing on food are restored and grow
//! 5. Collisions against the board as it stood before the tick; newly
//!    eliminated snakes keep their pre-move body
//! 6. Food: eaten food is removed and replaced
//! 7. The turn counter advances
//!
//! The previous frame is only read; the result is a new frame.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::RulesConfig;
use crate::error::TickResult;
use crate::game::{
    DeathCause, Game, GameFrame, MoveDecision, MoveIndex, MovedSnake, Point, PointSelector, Snake,
    apply_move, check_for_deaths, next_head, update_food,
};

/// Advance `previous` by one turn.
///
/// Snakes without a usable decision in `decisions` move up. Snakes that were
/// already dead are carried over untouched. Every death recorded by this tick
/// carries the turn number of the returned frame.
///
/// # Errors
///
/// Returns an error if the game's board dimensions are invalid. The previous
/// frame is left as it was.
pub fn game_tick<S: PointSelector + ?Sized>(
    rules: &RulesConfig,
    game: &Game,
    previous: &GameFrame,
    decisions: &[MoveDecision],
    selector: &mut S,
) -> TickResult<GameFrame> {
    let board = game.board()?;
    let turn = previous.turn.saturating_add(1);
    let moves = MoveIndex::new(decisions);

    debug!(game = %game.id, turn, snakes = previous.snakes.len(), "tick started");

    let mut snakes = previous.snakes.clone();
    starve(&mut snakes, turn);

    let food: HashSet<Point> = previous.food.iter().copied().collect();
    let mut moved = Vec::new();
    let mut ate = Vec::new();
    for (index, snake) in snakes.iter().enumerate() {
        if !snake.is_alive() {
            continue;
        }
        let Some(head) = snake.head() else {
            continue;
        };
        let direction = moves.direction_for(&snake.id);
        let grows = food.contains(&next_head(head, direction));
        moved.push(MovedSnake {
            index,
            body: apply_move(&snake.body, direction, grows),
        });
        ate.push(grows);
    }

    let mut eaten: Vec<Point> = Vec::new();
    for (snake, _) in moved.iter().zip(&ate).filter(|(_, grows)| **grows) {
        match snake.head() {
            Some(head) if !eaten.contains(&head) => eaten.push(head),
            _ => {}
        }
    }

    // Blocking is judged on the board as it stood before this tick, so a
    // snake starving now still blocks.
    let causes = check_for_deaths(board, &moved, &previous.snakes, rules.dead_snake_behavior);

    for ((snake_move, grows), cause) in moved.into_iter().zip(ate).zip(causes) {
        let snake = &mut snakes[snake_move.index];
        if let Some(cause) = cause {
            eliminate(snake, turn, cause);
            continue;
        }
        snake.body = snake_move.body;
        if grows {
            snake.health = rules.max_health;
        }
    }

    let mut next = GameFrame::new(turn, snakes, previous.food.clone());
    next.food = update_food(board.width(), board.height(), &next, &eaten, selector)?;

    debug!(
        game = %game.id,
        turn,
        alive = next.alive_snakes().count(),
        food = next.food.len(),
        "tick finished"
    );
    Ok(next)
}

/// Decay health of every living snake, eliminating those that reach zero.
fn starve(snakes: &mut [Snake], turn: u32) {
    for snake in snakes.iter_mut().filter(|s| s.is_alive()) {
        snake.health = snake.health.saturating_sub(1);
        if snake.health == 0 {
            eliminate(snake, turn, DeathCause::Starvation);
        }
    }
}

fn eliminate(snake: &mut Snake, turn: u32, cause: DeathCause) {
    info!(snake = %snake.id, turn, %cause, "snake eliminated");
    snake.kill(turn, cause);
}
