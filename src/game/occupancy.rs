//! Board occupancy and free-cell selection.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, Point, Snake};

/// Picks one cell out of a list of free cells.
///
/// The random source is injected so that tests and replays can pin exact
/// spawn locations.
pub trait PointSelector {
    /// Choose one of `candidates`, or `None` if there are none.
    fn select(&mut self, candidates: &[Point]) -> Option<Point>;
}

impl<T: PointSelector + ?Sized> PointSelector for &mut T {
    fn select(&mut self, candidates: &[Point]) -> Option<Point> {
        (**self).select(candidates)
    }
}

/// Uniform random choice from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
    seed: u64,
}

impl RandomSelector {
    /// Create a selector with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a selector with a seed drawn from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// The seed this selector was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl PointSelector for RandomSelector {
    fn select(&mut self, candidates: &[Point]) -> Option<Point> {
        if candidates.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..candidates.len());
        candidates.get(index).copied()
    }
}

/// Always picks the first candidate in scan order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOrderSelector;

impl PointSelector for ScanOrderSelector {
    fn select(&mut self, candidates: &[Point]) -> Option<Point> {
        candidates.first().copied()
    }
}

/// Every cell covered by food or by any snake segment, each listed once.
///
/// Points are returned in first-seen order: food first, then snake bodies in
/// frame order.
#[must_use]
pub fn unique_occupied_points(food: &[Point], snakes: &[Snake]) -> Vec<Point> {
    let mut seen = HashSet::new();
    food.iter()
        .chain(snakes.iter().flat_map(|s| s.body.iter()))
        .copied()
        .filter(|p| seen.insert(*p))
        .collect()
}

/// Every free cell on the board, x outer and y inner.
#[must_use]
pub fn unoccupied_points(board: Board, food: &[Point], snakes: &[Snake]) -> Vec<Point> {
    let occupied: HashSet<Point> = unique_occupied_points(food, snakes).into_iter().collect();
    board.cells().filter(|p| !occupied.contains(p)).collect()
}

/// One free cell chosen by `selector`, or `None` if the board is full.
pub fn unoccupied_point<S: PointSelector + ?Sized>(
    board: Board,
    food: &[Point],
    snakes: &[Snake],
    selector: &mut S,
) -> Option<Point> {
    let candidates = unoccupied_points(board, food, snakes);
    selector.select(&candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(body: Vec<Point>) -> Snake {
        Snake::new("s", "s", body)
    }

    #[test]
    fn test_unique_occupied_points_dedupes() {
        let occupied = unique_occupied_points(
            &[Point::new(0, 0)],
            &[snake(vec![
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(1, 1),
                Point::new(1, 0),
            ])],
        );
        assert_eq!(occupied.len(), 4);
    }

    #[test]
    fn test_unique_occupied_points_food_under_snake() {
        let occupied = unique_occupied_points(
            &[Point::new(2, 2)],
            &[snake(vec![Point::new(2, 2), Point::new(2, 3)])],
        );
        assert_eq!(occupied, vec![Point::new(2, 2), Point::new(2, 3)]);
    }

    #[test]
    fn test_unoccupied_points_with_empty_spots() {
        let board = Board::new(2, 2).unwrap();
        let free = unoccupied_points(board, &[Point::new(0, 0)], &[snake(vec![Point::new(0, 1)])]);
        assert_eq!(free, vec![Point::new(1, 0), Point::new(1, 1)]);
    }

    #[test]
    fn test_unoccupied_point_full_board() {
        let board = Board::new(2, 2).unwrap();
        let point = unoccupied_point(
            board,
            &[Point::new(0, 0)],
            &[snake(vec![Point::new(0, 1), Point::new(1, 1), Point::new(1, 0)])],
            &mut RandomSelector::new(7),
        );
        assert_eq!(point, None);
    }

    #[test]
    fn test_scan_order_selector_picks_first_free() {
        let board = Board::new(3, 3).unwrap();
        let point = unoccupied_point(
            board,
            &[Point::new(0, 0)],
            &[snake(vec![Point::new(0, 1)])],
            &mut ScanOrderSelector,
        );
        assert_eq!(point, Some(Point::new(0, 2)));
    }

    #[test]
    fn test_random_selector_is_seeded() {
        let candidates: Vec<_> = Board::new(10, 10).unwrap().cells().collect();
        let mut a = RandomSelector::new(42);
        let mut b = RandomSelector::new(42);
        for _ in 0..20 {
            let picked = a.select(&candidates);
            assert_eq!(picked, b.select(&candidates));
            assert!(picked.is_some_and(|p| candidates.contains(&p)));
        }
        assert_eq!(a.seed(), 42);
        assert_eq!(RandomSelector::new(1).select(&[]), None);
    }
}
