use std::time::Duration;

use log::{debug, info, warn};
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::food::Food;
use crate::geometry::{Direction, Grid};
use crate::snake::{MoveOutcome, Snake};

/// Fixed-timestep accumulator deciding when the simulation advances.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    max_catch_up: u32,
    accumulated: Duration,
}

impl TickClock {
    pub fn new(interval: Duration, max_catch_up: u32) -> Self {
        TickClock {
            interval,
            max_catch_up: max_catch_up.max(1),
            accumulated: Duration::ZERO,
        }
    }

    /// Adds `elapsed` and returns how many ticks are now due. Backlog beyond
    /// `max_catch_up` ticks is discarded.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 1;
        }

        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }

        if due > self.max_catch_up {
            debug!("Dropping {} late ticks", due - self.max_catch_up);
            self.accumulated = Duration::ZERO;
            due = self.max_catch_up;
        }
        due
    }
}

/// Sound cue raised by a simulation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Eat,
    Crash,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Ended,
}

/// How a session handed control back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The snake ran out of health.
    Ended,
    /// The player asked to quit the program.
    Quit,
}

/// One game: a snake, its food, and the clock that paces them.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    snake: Snake,
    food: Food,
    state: SessionState,
    clock: TickClock,
    rng: StdRng,
}

impl Session {
    pub fn new(config: &GameConfig, mut rng: StdRng) -> Self {
        let grid = config.grid();
        let food = Food::new(grid, &mut rng);
        info!("New session, food at {:?}", food.position());

        Session {
            grid,
            snake: Snake::new(config),
            food,
            state: SessionState::Running,
            clock: TickClock::new(config.tick_interval(), config.max_catch_up_ticks),
            rng,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn steer(&mut self, direction: Direction) {
        self.snake.change_direction(direction);
        debug!("Steer {:?}, heading {:?}", direction, self.snake.direction());
    }

    /// Lets `elapsed` pass, running every simulation tick that falls due.
    pub fn update(&mut self, elapsed: Duration) -> Vec<Cue> {
        let due = self.clock.advance(elapsed);
        (0..due).filter_map(|_| self.tick()).collect()
    }

    /// A single simulation step. Does nothing once the session has ended.
    pub fn tick(&mut self) -> Option<Cue> {
        if !self.is_running() {
            return None;
        }

        match self.snake.slither() {
            MoveOutcome::Collided => {
                warn!("Self-collision, health now {}", self.snake.health());
                if self.snake.is_dead() {
                    info!(
                        "Session over with {} experience, length {}",
                        self.snake.experience(),
                        self.snake.len()
                    );
                    self.state = SessionState::Ended;
                }
                Some(Cue::Crash)
            }
            MoveOutcome::Moved if self.snake.head() == self.food.position() => {
                self.snake.grow();
                self.food.relocate(self.grid, &mut self.rng);
                debug!(
                    "Ate food, experience {}, next food at {:?}",
                    self.snake.experience(),
                    self.food.position()
                );
                Some(Cue::Eat)
            }
            MoveOutcome::Moved => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_entities(config: &GameConfig, snake: Snake, food: Food, rng: StdRng) -> Self {
        let mut session = Session::new(config, rng);
        session.snake = snake;
        session.food = food;
        session
    }
}
