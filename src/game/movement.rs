//! Movement resolution.
//!
//! Turns each snake's move decision into a direction and shifts its body.
//! A missing, failed or unrecognized decision never stalls a tick: the snake
//! moves [`Direction::Up`] instead.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::game::{Direction, GameFrame, Point};

/// Why a move could not be obtained from an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "kebab-case")]
pub enum MoveFailure {
    /// The agent did not answer within the move timeout.
    Timeout,
    /// The request could not be delivered or the connection failed.
    Transport(String),
    /// The agent answered with something that is not a valid move.
    InvalidResponse(String),
}

impl fmt::Display for MoveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveFailure::Timeout => write!(f, "timed out"),
            MoveFailure::Transport(msg) => write!(f, "transport error: {msg}"),
            MoveFailure::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

/// A snake's requested move for one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDecision {
    /// The snake this decision belongs to.
    pub snake_id: String,
    /// Requested direction label, as received.
    #[serde(default)]
    pub direction: String,
    /// Set when no usable decision could be obtained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<MoveFailure>,
}

impl MoveDecision {
    /// A successful decision.
    #[must_use]
    pub fn new(snake_id: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            snake_id: snake_id.into(),
            direction: direction.into(),
            failure: None,
        }
    }

    /// A decision that could not be obtained.
    #[must_use]
    pub fn failed(snake_id: impl Into<String>, failure: MoveFailure) -> Self {
        Self {
            snake_id: snake_id.into(),
            direction: String::new(),
            failure: Some(failure),
        }
    }

    /// The direction the snake will actually move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if let Some(failure) = &self.failure {
            debug!(snake = %self.snake_id, %failure, "move failed, using default");
            return Direction::default();
        }
        self.direction.parse().unwrap_or_else(|err| {
            debug!(snake = %self.snake_id, %err, "unrecognized move, using default");
            Direction::default()
        })
    }
}

/// Move decisions keyed by snake ID.
#[derive(Debug, Clone, Default)]
pub struct MoveIndex<'a> {
    by_snake: HashMap<&'a str, &'a MoveDecision>,
}

impl<'a> MoveIndex<'a> {
    /// Index a list of decisions. The first decision for a snake wins.
    #[must_use]
    pub fn new(decisions: &'a [MoveDecision]) -> Self {
        let mut by_snake = HashMap::with_capacity(decisions.len());
        for decision in decisions {
            if by_snake.contains_key(decision.snake_id.as_str()) {
                warn!(snake = %decision.snake_id, "duplicate move decision ignored");
                continue;
            }
            by_snake.insert(decision.snake_id.as_str(), decision);
        }
        Self { by_snake }
    }

    /// The decision for a snake, if one was supplied.
    #[must_use]
    pub fn get(&self, snake_id: &str) -> Option<&'a MoveDecision> {
        self.by_snake.get(snake_id).copied()
    }

    /// The resolved direction for a snake, defaulting when none was supplied.
    #[must_use]
    pub fn direction_for(&self, snake_id: &str) -> Direction {
        self.get(snake_id).map_or_else(
            || {
                debug!(snake = %snake_id, "no move decision, using default");
                Direction::default()
            },
            MoveDecision::direction,
        )
    }
}

/// The head position after moving `direction` from `head`.
#[must_use]
pub const fn next_head(head: Point, direction: Direction) -> Point {
    head.step(direction)
}

/// The body after one move.
///
/// The new head is prepended. When `grow` is set the whole previous body is
/// kept, otherwise the tail segment is dropped so the length is unchanged.
/// An empty body stays empty.
#[must_use]
pub fn apply_move(body: &[Point], direction: Direction, grow: bool) -> Vec<Point> {
    let Some(&head) = body.first() else {
        return Vec::new();
    };
    let kept = if grow { body.len() } else { body.len() - 1 };
    let mut next = Vec::with_capacity(kept + 1);
    next.push(next_head(head, direction));
    next.extend_from_slice(&body[..kept]);
    next
}

/// Move every living snake in `frame` one cell, without growth.
pub fn update_snakes(frame: &mut GameFrame, decisions: &[MoveDecision]) {
    let index = MoveIndex::new(decisions);
    for snake in frame.snakes.iter_mut().filter(|s| s.is_alive()) {
        let direction = index.direction_for(&snake.id);
        snake.body = apply_move(&snake.body, direction, false);
    }
}
