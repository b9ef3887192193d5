use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Grid, INITIAL_SNAKE_LENGTH};
use crate::food;
use crate::input::Direction;
use crate::snake::{Cell, Snake};

/// High-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so food has nowhere to spawn. A win.
    BoardFull,
}

/// Read-only view of one consistent game state, the renderer's sole input.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub cells: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    pub heading: Direction,
    pub grid: Grid,
}

/// Owns the snake, food, and score for one session and advances them tick
/// by tick. Nothing outside this type mutates game state.
#[derive(Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Cell>,
    pub score: u32,
    status: GameStatus,
    end_reason: Option<EndReason>,
    grid: Grid,
    rng: StdRng,
}

const INITIAL_HEADING: Direction = Direction::Right;

impl GameState {
    /// Creates a running session on `grid` with an entropy-seeded RNG.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, mut rng: StdRng) -> Self {
        let snake = initial_snake(grid);
        let food = food::spawn_cell(&mut rng, grid, &snake);

        let mut state = Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            end_reason: None,
            grid,
            rng,
        };
        if state.food.is_none() {
            state.finish(EndReason::BoardFull);
        }
        state
    }

    /// Advances the simulation by one tick. No-op once the game is over.
    ///
    /// The food check runs before the collision checks, so food eaten on the
    /// same tick as a fatal move still scores. That ordering is a tested
    /// property, not incidental.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.snake.advance();
        let head = self.snake.head();

        if Some(head) == self.food {
            self.score += 1;
            self.snake.grow();
            self.food = food::spawn_cell(&mut self.rng, self.grid, &self.snake);
            if self.food.is_none() {
                self.finish(EndReason::BoardFull);
                return;
            }
        }

        if self.snake.head_overlaps_body() {
            self.finish(EndReason::SelfCollision);
            return;
        }

        if !self.grid.in_bounds(head) {
            self.finish(EndReason::WallCollision);
        }
    }

    /// Requests a heading for the next tick.
    ///
    /// Reversals of the committed heading are silently ignored; among valid
    /// requests between two ticks, the last one wins.
    pub fn request_heading(&mut self, direction: Direction) {
        if self.status == GameStatus::Running {
            self.snake.steer(direction);
        }
    }

    /// Starts a fresh session: initial snake, new food, score zero, running.
    pub fn restart(&mut self) {
        self.snake = initial_snake(self.grid);
        self.food = food::spawn_cell(&mut self.rng, self.grid, &self.snake);
        self.score = 0;
        self.status = GameStatus::Running;
        self.end_reason = None;
        if self.food.is_none() {
            self.finish(EndReason::BoardFull);
        }
    }

    /// Returns an owned, internally consistent view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.snake.cells().copied().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
            end_reason: self.end_reason,
            heading: self.snake.heading(),
            grid: self.grid,
        }
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns why the session ended, if it has.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Returns the board this session plays on.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    fn finish(&mut self, reason: EndReason) {
        self.status = GameStatus::Over;
        self.end_reason = Some(reason);
    }
}

fn initial_snake(grid: Grid) -> Snake {
    Snake::with_length(grid.center(), INITIAL_HEADING, INITIAL_SNAKE_LENGTH)
}
