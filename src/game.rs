//! Game layer for Coil.
//!
//! Implements the snake rules:
//! - Board geometry and the match data model
//! - Movement with default-move fallback
//! - Occupancy and free-cell selection
//! - Food removal and respawn
//! - Collision and death classification
//! - The per-turn tick that sequences all of the above

mod collision;
mod food;
mod frame;
mod geometry;
mod invariants;
mod movement;
mod occupancy;
mod snake;
mod tick;

pub use collision::{DeadSnakeBehavior, MovedSnake, check_for_deaths};
pub use food::update_food;
pub use frame::{Game, GameFrame, GameStatus};
pub use geometry::{Board, Direction, Point, UnknownDirection};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use movement::{MoveDecision, MoveFailure, MoveIndex, apply_move, next_head, update_snakes};
pub use occupancy::{
    PointSelector, RandomSelector, ScanOrderSelector, unique_occupied_points, unoccupied_point,
    unoccupied_points,
};
pub use snake::{Death, DeathCause, MAX_HEALTH, Snake, SnakeId};
pub use tick::game_tick;
