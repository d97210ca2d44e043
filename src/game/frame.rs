//! Match configuration and per-turn frames.

use serde::{Deserialize, Serialize};

use crate::error::TickResult;
use crate::game::{Board, Point, Snake};

/// Lifecycle status of a match, as reported by the orchestration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Created or in progress.
    #[default]
    Running,
    /// Finished normally.
    Complete,
    /// Stopped by an operator.
    Stopped,
    /// Aborted by a failure outside the tick engine.
    Error,
}

/// Immutable per-match configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Match identifier.
    pub id: String,
    /// Board width.
    pub width: i32,
    /// Board height.
    pub height: i32,
    /// Lifecycle status.
    #[serde(default)]
    pub status: GameStatus,
}

impl Game {
    /// Create a running game.
    #[must_use]
    pub fn new(id: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            status: GameStatus::Running,
        }
    }

    /// Validated board for this game.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are not positive.
    pub fn board(&self) -> TickResult<Board> {
        Board::new(self.width, self.height)
    }
}

/// Complete board state at one turn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameFrame {
    /// Turn number.
    pub turn: u32,
    /// All snakes in match-assignment order, dead ones included.
    #[serde(default)]
    pub snakes: Vec<Snake>,
    /// Food on the board, no duplicates.
    #[serde(default)]
    pub food: Vec<Point>,
}

impl GameFrame {
    /// Create a frame.
    #[must_use]
    pub fn new(turn: u32, snakes: Vec<Snake>, food: Vec<Point>) -> Self {
        Self { turn, snakes, food }
    }

    /// Get a snake by ID.
    #[must_use]
    pub fn snake(&self, id: &str) -> Option<&Snake> {
        self.snakes.iter().find(|s| s.id == id)
    }

    /// Get all living snakes.
    pub fn alive_snakes(&self) -> impl Iterator<Item = &Snake> {
        self.snakes.iter().filter(|s| s.is_alive())
    }

    /// Check if the match is decided.
    ///
    /// A solo match ends when its snake dies; a match with several snakes ends
    /// when at most one is left.
    #[must_use]
    pub fn is_over(&self) -> bool {
        let alive = self.alive_snakes().count();
        if self.snakes.len() <= 1 {
            alive == 0
        } else {
            alive <= 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DeathCause;

    fn snake(id: &str, x: i32) -> Snake {
        Snake::new(id, id, vec![Point::new(x, 0)])
    }

    #[test]
    fn test_game_board() {
        assert!(Game::new("g", 11, 11).board().is_ok());
        assert!(Game::new("g", 0, 11).board().is_err());
    }

    #[test]
    fn test_solo_match_over_when_dead() {
        let mut frame = GameFrame::new(0, vec![snake("a", 0)], vec![]);
        assert!(!frame.is_over());
        frame.snakes[0].kill(1, DeathCause::Starvation);
        assert!(frame.is_over());
    }

    #[test]
    fn test_multi_match_over_with_one_left() {
        let mut frame = GameFrame::new(0, vec![snake("a", 0), snake("b", 2)], vec![]);
        assert!(!frame.is_over());
        frame.snakes[1].kill(1, DeathCause::WallCollision);
        assert!(frame.is_over());
        assert_eq!(frame.alive_snakes().count(), 1);
        assert_eq!(frame.snake("a").map(|s| s.name.as_str()), Some("a"));
    }

    #[test]
    fn test_frame_json_defaults() {
        let frame: GameFrame = serde_json::from_str(r#"{"turn": 5}"#).unwrap();
        assert_eq!(frame.turn, 5);
        assert!(frame.snakes.is_empty());
        assert!(frame.food.is_empty());
    }
}
