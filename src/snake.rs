use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::geometry::{Direction, Grid, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The head would have entered the body. Nothing moved.
    Collided,
}

#[derive(Debug, Clone)]
pub struct Snake {
    /// Head first.
    body: VecDeque<Vec2>,
    direction: Direction,
    grow_pending: bool,
    health: i32,
    experience: u32,
    grid: Grid,
    collision_penalty: i32,
    food_reward: u32,
}

impl Snake {
    pub fn new(config: &GameConfig) -> Self {
        let grid = config.grid();
        Snake {
            body: VecDeque::from([grid.wrapped_add(config.start_position, Vec2::default())]),
            direction: config.start_direction,
            grow_pending: false,
            health: config.start_health,
            experience: 0,
            grid,
            collision_penalty: config.collision_penalty,
            food_reward: config.food_reward,
        }
    }

    pub fn head(&self) -> Vec2 {
        self.body[0]
    }

    pub fn segments(&self) -> impl Iterator<Item = &Vec2> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Ignored when `new_direction` would turn the snake straight back on itself.
    pub fn change_direction(&mut self, new_direction: Direction) {
        if new_direction.opposite() != self.direction {
            self.direction = new_direction;
        }
    }

    /// Advances one cell, or takes the collision penalty and stays put.
    ///
    /// A pending growth is spent by this call either way, so growth earned
    /// on the same tick as a collision is lost.
    pub fn slither(&mut self) -> MoveOutcome {
        let new_head = self
            .grid
            .wrapped_add(self.head(), self.grid.step(self.direction));
        let grow = std::mem::take(&mut self.grow_pending);

        if self.body.iter().skip(1).any(|&pos| pos == new_head) {
            self.health -= self.collision_penalty;
            return MoveOutcome::Collided;
        }

        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
        MoveOutcome::Moved
    }

    pub fn grow(&mut self) {
        self.grow_pending = true;
        self.experience += self.food_reward;
    }

    #[cfg(test)]
    pub(crate) fn with_body(config: &GameConfig, body: &[Vec2], direction: Direction) -> Self {
        let mut snake = Snake::new(config);
        snake.body = body.iter().copied().collect();
        snake.direction = direction;
        snake
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    /// A U-shaped snake whose head points back into its own body.
    ///
    /// ```text
    /// (100,100) H  (120,100) 1
    /// (100,120) 4  (120,120) 2
    ///              (120,140) 3
    /// ```
    fn coiled(config: &GameConfig) -> Snake {
        Snake::with_body(
            config,
            &[
                Vec2::new(100, 100),
                Vec2::new(120, 100),
                Vec2::new(120, 120),
                Vec2::new(100, 120),
                Vec2::new(100, 140),
            ],
            Direction::Down,
        )
    }

    #[test]
    fn test_new_snake() {
        let snake = Snake::new(&config());
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Vec2::new(100, 100));
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.health(), 100);
        assert_eq!(snake.experience(), 0);
    }

    #[test]
    fn test_change_direction() {
        let mut snake = Snake::new(&config());

        // Heading up, can't reverse
        snake.change_direction(Direction::Down);
        assert_eq!(snake.direction(), Direction::Up);

        snake.change_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
        snake.change_direction(Direction::Right);
        assert_eq!(snake.direction(), Direction::Left);

        snake.change_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_direction_change_applies_to_next_move() {
        let mut snake = Snake::new(&config());
        snake.change_direction(Direction::Right);
        assert_eq!(snake.slither(), MoveOutcome::Moved);
        assert_eq!(snake.head(), Vec2::new(120, 100));
    }

    #[test]
    fn test_slither_advances_one_cell() {
        let mut snake = Snake::new(&config());
        assert_eq!(snake.slither(), MoveOutcome::Moved);
        assert_eq!(snake.head(), Vec2::new(100, 80));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_slither_wraps_both_axes() {
        let config = config();

        let mut snake = Snake::with_body(&config, &[Vec2::new(780, 300)], Direction::Right);
        snake.slither();
        assert_eq!(snake.head(), Vec2::new(0, 300));

        let mut snake = Snake::with_body(&config, &[Vec2::new(0, 300)], Direction::Left);
        snake.slither();
        assert_eq!(snake.head(), Vec2::new(780, 300));

        let mut snake = Snake::with_body(&config, &[Vec2::new(40, 0)], Direction::Up);
        snake.slither();
        assert_eq!(snake.head(), Vec2::new(40, 580));

        let mut snake = Snake::with_body(&config, &[Vec2::new(40, 580)], Direction::Down);
        snake.slither();
        assert_eq!(snake.head(), Vec2::new(40, 0));
    }

    #[test]
    fn test_tail_follows_head() {
        let config = config();
        let mut snake = Snake::with_body(
            &config,
            &[Vec2::new(100, 100), Vec2::new(80, 100), Vec2::new(60, 100)],
            Direction::Right,
        );
        assert_eq!(snake.slither(), MoveOutcome::Moved);
        let body: Vec<Vec2> = snake.segments().copied().collect();
        assert_eq!(
            body,
            vec![Vec2::new(120, 100), Vec2::new(100, 100), Vec2::new(80, 100)]
        );
    }

    #[test]
    fn test_self_collision_costs_health_and_keeps_body() {
        let config = config();
        let mut snake = coiled(&config);
        let before: Vec<Vec2> = snake.segments().copied().collect();

        assert_eq!(snake.slither(), MoveOutcome::Collided);
        assert_eq!(snake.health(), 90);
        let after: Vec<Vec2> = snake.segments().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_grow_then_move() {
        let mut snake = Snake::new(&config());
        snake.grow();
        assert_eq!(snake.experience(), 10);
        assert_eq!(snake.slither(), MoveOutcome::Moved);
        assert_eq!(snake.len(), 2);

        // Growth is a one-shot
        snake.slither();
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_growth_is_lost_on_collision() {
        let config = config();
        let mut snake = coiled(&config);
        snake.grow();
        assert_eq!(snake.slither(), MoveOutcome::Collided);
        assert_eq!(snake.len(), 5);

        // Turn away from the body; the earlier growth must not resurface
        snake.change_direction(Direction::Left);
        assert_eq!(snake.slither(), MoveOutcome::Moved);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.experience(), 10);
    }

    #[test]
    fn test_health_reaches_zero_after_ten_collisions() {
        let config = config();
        let mut snake = coiled(&config);
        for _ in 0..9 {
            assert_eq!(snake.slither(), MoveOutcome::Collided);
            assert!(!snake.is_dead());
        }
        assert_eq!(snake.slither(), MoveOutcome::Collided);
        assert_eq!(snake.health(), 0);
        assert!(snake.is_dead());
    }
}
