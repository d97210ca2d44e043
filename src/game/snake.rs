//! Snake state management.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::Point;

/// Unique identifier for a snake within a match.
pub type SnakeId = String;

/// Health a snake starts with and is restored to after eating.
pub const MAX_HEALTH: u32 = 100;

/// Why a snake was eliminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeathCause {
    /// Moved its head onto its own body.
    SnakeSelfCollision,
    /// Moved its head onto another snake's body.
    SnakeCollision,
    /// Met another snake head-on and was not the longer one.
    HeadToHeadCollision,
    /// Moved its head off the board.
    WallCollision,
    /// Health ran out.
    Starvation,
}

impl DeathCause {
    /// The wire label of this cause.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeathCause::SnakeSelfCollision => "snake-self-collision",
            DeathCause::SnakeCollision => "snake-collision",
            DeathCause::HeadToHeadCollision => "head-to-head-collision",
            DeathCause::WallCollision => "wall-collision",
            DeathCause::Starvation => "starvation",
        }
    }
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of a snake's elimination. Set once, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Death {
    /// Turn of the frame in which the snake first appears dead.
    pub turn: u32,
    /// What killed it.
    pub cause: DeathCause,
}

/// A single snake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Identifier used to match move decisions.
    pub id: SnakeId,
    /// Display name.
    pub name: String,
    /// Base URL of the agent controlling this snake.
    #[serde(default)]
    pub url: String,
    /// Remaining health.
    pub health: u32,
    /// Body segments, head first.
    pub body: Vec<Point>,
    /// Set once the snake is eliminated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<Death>,
}

impl Snake {
    /// Create a live snake at full health.
    #[must_use]
    pub fn new(id: impl Into<SnakeId>, name: impl Into<String>, body: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: String::new(),
            health: MAX_HEALTH,
            body,
            death: None,
        }
    }

    /// Set the agent URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the health.
    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health;
        self
    }

    /// Check if the snake is still in play.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.death.is_none()
    }

    /// The leading segment, if the body is not empty.
    #[must_use]
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }

    /// Body length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the body has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Record an elimination. Does nothing if the snake is already dead.
    pub fn kill(&mut self, turn: u32, cause: DeathCause) {
        if self.death.is_none() {
            self.death = Some(Death { turn, cause });
        }
    }
}
