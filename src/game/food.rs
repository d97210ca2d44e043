//! Food lifecycle: removal of eaten food and respawn.
//!
//! Every eaten food point is replaced by one new point drawn from the free
//! cells of the board, so the food count stays constant until the board
//! fills up. When no free cell is left the replacement is skipped and the
//! food count shrinks, possibly to zero.

use tracing::debug;

use crate::error::TickResult;
use crate::game::{Board, GameFrame, Point, PointSelector, unoccupied_point};

/// Food after removing `eaten` from `frame.food` and respawning replacements.
///
/// Replacements avoid every snake in `frame` and every food point, including
/// replacements spawned earlier in the same call.
///
/// # Errors
///
/// Returns an error if the board dimensions are not positive.
pub fn update_food<S: PointSelector + ?Sized>(
    width: i32,
    height: i32,
    frame: &GameFrame,
    eaten: &[Point],
    selector: &mut S,
) -> TickResult<Vec<Point>> {
    let board = Board::new(width, height)?;

    let (removed, mut food): (Vec<Point>, Vec<Point>) =
        frame.food.iter().partition(|p| eaten.contains(*p));

    for point in &removed {
        match unoccupied_point(board, &food, &frame.snakes, &mut *selector) {
            Some(spawned) => {
                debug!(eaten = %point, %spawned, "food respawned");
                food.push(spawned);
            }
            None => debug!(eaten = %point, "no free cell for food"),
        }
    }

    Ok(food)
}
