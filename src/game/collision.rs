//! Collision and death classification.
//!
//! All snakes move at once. A moving snake's new head is checked against the
//! board edges, its own post-move body, the other snakes' bodies as they
//! stood before the move, and the other snakes' new heads. The first rule
//! that matches decides the cause:
//!
//! 1. wall collision
//! 2. self collision
//! 3. body collision with another snake
//! 4. head-to-head collision (shorter dies, equal lengths both die)

use serde::{Deserialize, Serialize};

use crate::game::{Board, DeathCause, Point, Snake};

/// Whether dead snakes still block the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeadSnakeBehavior {
    /// Dead bodies are ignored by collision checks.
    #[default]
    Disappear,
    /// Dead bodies remain obstacles.
    StayOnField,
}

impl DeadSnakeBehavior {
    /// Check if `snake` blocks movement under this behavior.
    #[must_use]
    pub fn blocks(self, snake: &Snake) -> bool {
        match self {
            DeadSnakeBehavior::Disappear => snake.is_alive(),
            DeadSnakeBehavior::StayOnField => true,
        }
    }
}

/// A snake's tentative position after this tick's move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedSnake {
    /// Index of the snake in the pre-move snake list.
    pub index: usize,
    /// Body after the move, head first.
    pub body: Vec<Point>,
}

impl MovedSnake {
    /// The new head.
    #[must_use]
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }
}

/// Classify every moving snake.
///
/// `before` is the snake list as it stood before the tick; `moved` refers
/// into it by index. The result is aligned with `moved`: `None` means the snake
/// survives the collision checks.
#[must_use]
pub fn check_for_deaths(
    board: Board,
    moved: &[MovedSnake],
    before: &[Snake],
    behavior: DeadSnakeBehavior,
) -> Vec<Option<DeathCause>> {
    moved
        .iter()
        .map(|snake| classify(board, snake, moved, before, behavior))
        .collect()
}

fn classify(
    board: Board,
    snake: &MovedSnake,
    moved: &[MovedSnake],
    before: &[Snake],
    behavior: DeadSnakeBehavior,
) -> Option<DeathCause> {
    let head = snake.head()?;

    if !board.contains(head) {
        return Some(DeathCause::WallCollision);
    }

    if snake.body.iter().skip(1).any(|&p| p == head) {
        return Some(DeathCause::SnakeSelfCollision);
    }

    let hit_body = before.iter().enumerate().any(|(i, other)| {
        i != snake.index && behavior.blocks(other) && other.body.contains(&head)
    });
    if hit_body {
        return Some(DeathCause::SnakeCollision);
    }

    let length = snake.body.len();
    let lost_head_on = moved.iter().any(|other| {
        other.index != snake.index && other.head() == Some(head) && other.body.len() >= length
    });
    if lost_head_on {
        return Some(DeathCause::HeadToHeadCollision);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, apply_move};

    fn board() -> Board {
        Board::new(10, 10).unwrap()
    }

    fn snake(id: &str, body: &[(i32, i32)]) -> Snake {
        Snake::new(id, id, body.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    fn moved(index: usize, before: &Snake, direction: Direction, grow: bool) -> MovedSnake {
        MovedSnake {
            index,
            body: apply_move(&before.body, direction, grow),
        }
    }

    #[test]
    fn test_no_collision() {
        let before = vec![snake("a", &[(5, 5), (5, 6)])];
        let m = vec![moved(0, &before[0], Direction::Up, false)];
        assert_eq!(check_for_deaths(board(), &m, &before, DeadSnakeBehavior::Disappear), vec![None]);
    }

    #[test]
    fn test_wall_collision_each_edge() {
        for (start, direction) in [
            ((0, 5), Direction::Left),
            ((9, 5), Direction::Right),
            ((5, 0), Direction::Up),
            ((5, 9), Direction::Down),
        ] {
            let before = vec![snake("a", &[start])];
            let m = vec![moved(0, &before[0], direction, false)];
            assert_eq!(
                check_for_deaths(board(), &m, &before, DeadSnakeBehavior::Disappear),
                vec![Some(DeathCause::WallCollision)],
                "{direction} from {start:?}"
            );
        }
    }

    #[test]
    fn test_self_collision() {
        // Moving down from a U shape runs into the own body.
        let before = vec![snake("a", &[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)])];
        let m = vec![moved(0, &before[0], Direction::Down, false)];
        assert_eq!(
            check_for_deaths(board(), &m, &before, DeadSnakeBehavior::Disappear),
            vec![Some(DeathCause::SnakeSelfCollision)]
        );
    }

    #[test]
    fn test_chasing_own_tail_is_safe_unless_growing() {
        let before = vec![snake("a", &[(5, 5), (6, 5), (6, 6), (5, 6)])];

        let m = vec![moved(0, &before[0], Direction::Down, false)];
        assert_eq!(check_for_deaths(board(), &m, &before, DeadSnakeBehavior::Disappear), vec![None]);

        let m = vec![moved(0, &before[0], Direction::Down, true)];
        assert_eq!(
            check_for_deaths(board(), &m, &before, DeadSnakeBehavior::Disappear),
            vec![Some(DeathCause::SnakeSelfCollision)]
        );
    }

    #[test]
    fn test_body_collision_uses_pre_move_bodies() {
        // b's tail at (3,4) moves away this tick, but a still dies on it.
        let before = vec![
            snake("a", &[(3, 5), (3, 6)]),
            snake("b", &[(5, 4), (4, 4), (3, 4)]),
        ];
        let m = vec![
            moved(0, &before[0], Direction::Up, false),
            moved(1, &before[1], Direction::Right, false),
        ];
        assert_eq!(
            check_for_deaths(board(), &m, &before, DeadSnakeBehavior::Disappear),
            vec![Some(DeathCause::SnakeCollision), None]
        );
    }

    #[test]
    fn test_dead_snake_behavior() {
        let mut corpse = snake("b", &[(5, 4), (4, 4)]);
        corpse.kill(1, DeathCause::Starvation);
        let before = vec![snake("a", &[(5, 5), (5, 6)]), corpse];
        let m = vec![moved(0, &before[0], Direction::Up, false)];

        assert_eq!(check_for_deaths(board(), &m, &before, DeadSnakeBehavior::Disappear), vec![None]);
        assert_eq!(
            check_for_deaths(board(), &m, &before, DeadSnakeBehavior::StayOnField),
            vec![Some(DeathCause::SnakeCollision)]
        );
    }

    #[test]
    fn test_head_to_head_shorter_dies() {
        let before = vec![
            snake("a", &[(4, 5), (3, 5), (2, 5)]),
            snake("b", &[(6, 5), (7, 5)]),
        ];
        let m = vec![
            moved(0, &before[0], Direction::Right, false),
            moved(1, &before[1], Direction::Left, false),
        ];
        assert_eq!(
            check_for_deaths(board(), &m, &before, DeadSnakeBehavior::Disappear),
            vec![None, Some(DeathCause::HeadToHeadCollision)]
        );
    }

    #[test]
    fn test_head_to_head_tie_kills_both() {
        let before = vec![
            snake("a", &[(4, 5), (3, 5)]),
            snake("b", &[(6, 5), (7, 5)]),
        ];
        let m = vec![
            moved(0, &before[0], Direction::Right, false),
            moved(1, &before[1], Direction::Left, false),
        ];
        assert_eq!(
            check_for_deaths(board(), &m, &before, DeadSnakeBehavior::Disappear),
            vec![
                Some(DeathCause::HeadToHeadCollision),
                Some(DeathCause::HeadToHeadCollision)
            ]
        );
    }

    #[test]
    fn test_head_to_head_growth_counts() {
        // Equal before the move, but a eats and ends one segment longer.
        let before = vec![
            snake("a", &[(4, 5), (3, 5)]),
            snake("b", &[(6, 5), (7, 5)]),
        ];
        let m = vec![
            moved(0, &before[0], Direction::Right, true),
            moved(1, &before[1], Direction::Left, false),
        ];
        assert_eq!(
            check_for_deaths(board(), &m, &before, DeadSnakeBehavior::Disappear),
            vec![None, Some(DeathCause::HeadToHeadCollision)]
        );
    }

    #[test]
    fn test_wall_takes_precedence() {
        let before = vec![snake("a", &[(0, 0), (1, 0)])];
        let m = vec![moved(0, &before[0], Direction::Left, false)];
        assert_eq!(
            check_for_deaths(board(), &m, &before, DeadSnakeBehavior::StayOnField),
            vec![Some(DeathCause::WallCollision)]
        );
    }
}
