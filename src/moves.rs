//! Move acquisition boundary.
//!
//! The tick engine never talks to agents itself. A [`MoveSource`] hands it
//! one [`MoveDecision`] per living snake, with any network failure already
//! folded into the decision's failure field.
//!
//! This module also defines the JSON shapes an HTTP move source exchanges
//! with agents: the [`AgentRequest`] body posted to `/start`, `/move` and
//! `/end`, and the [`AgentMove`] reply to `/move`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::{Direction, Game, GameFrame, MoveDecision, MoveFailure, Point, Snake};

/// Produces move decisions for a frame.
pub trait MoveSource {
    /// One decision per living snake in `frame`.
    ///
    /// Missing decisions are allowed; the tick substitutes the default move.
    fn moves(&mut self, game: &Game, frame: &GameFrame) -> Vec<MoveDecision>;
}

impl<F> MoveSource for F
where
    F: FnMut(&Game, &GameFrame) -> Vec<MoveDecision>,
{
    fn moves(&mut self, game: &Game, frame: &GameFrame) -> Vec<MoveDecision> {
        self(game, frame)
    }
}

/// Supplies no decisions, so every snake takes the default move.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackMoves;

impl MoveSource for FallbackMoves {
    fn moves(&mut self, _game: &Game, _frame: &GameFrame) -> Vec<MoveDecision> {
        Vec::new()
    }
}

/// Replays the same direction for each snake on every turn.
#[derive(Debug, Clone, Default)]
pub struct FixedMoves {
    directions: HashMap<String, Direction>,
}

impl FixedMoves {
    /// Create an empty set of fixed moves.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the direction for a snake.
    #[must_use]
    pub fn with(mut self, snake_id: impl Into<String>, direction: Direction) -> Self {
        self.directions.insert(snake_id.into(), direction);
        self
    }
}

impl MoveSource for FixedMoves {
    fn moves(&mut self, _game: &Game, frame: &GameFrame) -> Vec<MoveDecision> {
        frame
            .alive_snakes()
            .filter_map(|snake| {
                self.directions
                    .get(&snake.id)
                    .map(|d| MoveDecision::new(snake.id.clone(), d.as_str()))
            })
            .collect()
    }
}

/// Agent endpoints an HTTP move source calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentEndpoint {
    /// Sent once before the first turn.
    Start,
    /// Sent every turn; the reply is an [`AgentMove`].
    Move,
    /// Sent once after the match.
    End,
}

impl AgentEndpoint {
    /// Path appended to the agent's base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            AgentEndpoint::Start => "/start",
            AgentEndpoint::Move => "/move",
            AgentEndpoint::End => "/end",
        }
    }

    /// Full URL for an agent's base URL.
    #[must_use]
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// Match identity as sent to agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentGame {
    /// Match identifier.
    pub id: String,
}

/// A snake as seen by agents. Agent URLs are not shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSnake {
    /// Snake identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Remaining health.
    pub health: u32,
    /// Body segments, head first.
    pub body: Vec<Point>,
}

impl From<&Snake> for AgentSnake {
    fn from(snake: &Snake) -> Self {
        Self {
            id: snake.id.clone(),
            name: snake.name.clone(),
            health: snake.health,
            body: snake.body.clone(),
        }
    }
}

/// The board as seen by agents: only living snakes are listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentBoard {
    /// Board width.
    pub width: i32,
    /// Board height.
    pub height: i32,
    /// Food points.
    pub food: Vec<Point>,
    /// Living snakes.
    pub snakes: Vec<AgentSnake>,
}

/// JSON body posted to an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    /// Match identity.
    pub game: AgentGame,
    /// Turn of the frame the agent should move from.
    pub turn: u32,
    /// Board state.
    pub board: AgentBoard,
    /// The snake the agent controls.
    pub you: AgentSnake,
}

impl AgentRequest {
    /// Build the request for the snake `you_id`.
    ///
    /// Returns `None` if `frame` has no snake with that id.
    #[must_use]
    pub fn new(game: &Game, frame: &GameFrame, you_id: &str) -> Option<Self> {
        let you = frame.snake(you_id)?;
        Some(Self {
            game: AgentGame {
                id: game.id.clone(),
            },
            turn: frame.turn,
            board: AgentBoard {
                width: game.width,
                height: game.height,
                food: frame.food.clone(),
                snakes: frame.alive_snakes().map(AgentSnake::from).collect(),
            },
            you: AgentSnake::from(you),
        })
    }
}

/// An agent's reply to `/move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMove {
    /// Direction label.
    #[serde(rename = "move")]
    pub direction: String,
}

impl MoveDecision {
    /// Translate a raw `/move` reply body into a decision.
    ///
    /// Malformed JSON becomes an [`MoveFailure::InvalidResponse`] decision
    /// instead of an error, so the tick falls back to the default move.
    #[must_use]
    pub fn from_agent_reply(snake_id: impl Into<String>, body: &str) -> Self {
        let snake_id = snake_id.into();
        match serde_json::from_str::<AgentMove>(body) {
            Ok(reply) => MoveDecision::new(snake_id, reply.direction),
            Err(e) => MoveDecision::failed(snake_id, MoveFailure::InvalidResponse(e.to_string())),
        }
    }
}
