// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Coil: a deterministic turn engine for multi-agent snake matches.
//!
//! Given the previous frame of a match and one move decision per snake,
//! [`game_tick`] computes the next frame: new snake positions, eliminations,
//! and food removal and respawn.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Engine (moves → tick → history)    │
//! ├─────────────────────────────────────┤
//! │  Tick: starve, move, eat, collide,  │
//! │        respawn food                 │
//! ├─────────────────────────────────────┤
//! │  Geometry, occupancy, selectors     │
//! └─────────────────────────────────────┘
//! ```
//!
//! The tick performs no I/O. Moves are gathered beforehand by a
//! [`MoveSource`](moves::MoveSource), and random food placement goes through
//! an injected [`PointSelector`] so a seeded match replays exactly.

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod history;
pub mod moves;

pub use config::{ConfigError, RulesConfig};
pub use engine::{Engine, MatchOutcome};
pub use error::{TickError, TickResult};
pub use history::{HistoryError, MatchHistory};

// Re-export key game types at crate root for convenience
pub use game::{
    Death, DeathCause, Direction, Game, GameFrame, MoveDecision, MoveFailure, Point, PointSelector,
    RandomSelector, ScanOrderSelector, Snake, game_tick, update_food,
};
