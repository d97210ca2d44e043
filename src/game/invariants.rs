//! Frame invariants - sanity checks that detect bugs.
//!
//! A frame produced by [`game_tick`](crate::game::game_tick) from a valid
//! frame should never violate these. Frames handed in from outside (loaded
//! files, agent payloads) may, which is why this returns a list instead of
//! panicking.

use std::collections::HashSet;

use crate::game::{Game, GameFrame};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

fn violation(message: String) -> InvariantViolation {
    InvariantViolation { message }
}

/// Check all frame invariants against the game's board.
///
/// `max_health` is the upper bound for a living snake's health.
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(game: &Game, frame: &GameFrame, max_health: u32) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let Ok(board) = game.board() else {
        violations.push(violation(format!(
            "Board {}x{} has no cells",
            game.width, game.height
        )));
        return violations;
    };

    let mut ids = HashSet::new();
    for snake in &frame.snakes {
        if !ids.insert(snake.id.as_str()) {
            violations.push(violation(format!("Snake id {} is used twice", snake.id)));
        }

        if let Some(point) = snake.body.iter().find(|p| !board.contains(**p)) {
            violations.push(violation(format!(
                "Snake {} has segment {point} outside the board",
                snake.id
            )));
        }

        if !snake.is_alive() {
            continue;
        }

        if snake.body.is_empty() {
            violations.push(violation(format!("Live snake {} has no body", snake.id)));
        }

        if snake.health == 0 || snake.health > max_health {
            violations.push(violation(format!(
                "Live snake {} has health {} outside 1..={max_health}",
                snake.id, snake.health
            )));
        }
    }

    let mut food = HashSet::new();
    for point in &frame.food {
        if !food.insert(*point) {
            violations.push(violation(format!("Food at {point} is listed twice")));
        }
        if !board.contains(*point) {
            violations.push(violation(format!("Food at {point} is outside the board")));
        }
    }

    violations
}

/// Assert all frame invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(game: &Game, frame: &GameFrame, max_health: u32) {
    let violations = check_invariants(game, frame, max_health);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Frame invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_game: &Game, _frame: &GameFrame, _max_health: u32) {}
