use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::apple::Apple;
use crate::config::GridSize;
use crate::input::Direction;
use crate::settings::Settings;
use crate::snake::{MoveOutcome, Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    /// The snake hit a wall or itself. Terminal.
    GameOver,
    /// The snake covers every cell, so no apple can be placed. Terminal.
    Won,
}

/// Complete mutable game state for one session.
///
/// Owns the snake and the apple. Every tick is driven from outside: inputs
/// go through [`GameState::change_direction`] and time advances only through
/// [`GameState::update`].
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    apple: Apple,
    score: u32,
    status: GameStatus,
    pending_direction: Direction,
    tick_count: u64,
    rng: StdRng,
}

impl GameState {
    /// Starts a fresh game from validated settings.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(settings: &Settings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: &Settings, mut rng: StdRng) -> Self {
        let snake = Snake::new(settings.map_size(), settings.wraps_around_edges());
        let apple = Apple::spawn(&mut rng, settings.map_size(), |cell| snake.occupies(cell));

        Self {
            snake,
            apple,
            score: 0,
            status: GameStatus::Running,
            pending_direction: Direction::Up,
            tick_count: 0,
            rng,
        }
    }

    /// Resumes from a prepared snake and apple.
    ///
    /// Every segment beyond the head counts as an apple already eaten, so
    /// the score starts at `snake.len() - 1`.
    #[must_use]
    pub fn from_parts(snake: Snake, apple: Apple) -> Self {
        debug_assert_eq!(snake.bounds(), apple.bounds());

        let score = u32::try_from(snake.len() - 1).unwrap_or(u32::MAX);
        Self {
            snake,
            apple,
            score,
            status: GameStatus::Running,
            pending_direction: Direction::Up,
            tick_count: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reseeds apple placement.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Advances the simulation by one tick.
    ///
    /// Does nothing once the game has ended. A blocked move ends the game
    /// with the snake frozen in its last valid position.
    pub fn update(&mut self) -> MoveOutcome {
        if !self.is_running() {
            return MoveOutcome::Blocked;
        }

        self.tick_count += 1;
        let outcome = self
            .snake
            .advance(self.pending_direction, self.apple.position());

        match outcome {
            MoveOutcome::Blocked => {
                self.status = GameStatus::GameOver;
                info!(
                    score = self.score,
                    length = self.snake.len(),
                    tick = self.tick_count,
                    "game over"
                );
            }
            MoveOutcome::Advanced => {}
            MoveOutcome::AteApple => self.on_apple_eaten(),
        }

        outcome
    }

    fn on_apple_eaten(&mut self) {
        debug!(length = self.snake.len(), "apple eaten");

        if self.snake.len() >= self.bounds().total_cells() {
            self.status = GameStatus::Won;
            info!(length = self.snake.len(), "snake fills the whole map");
        } else {
            self.apple
                .respawn(&mut self.rng, |cell| self.snake.occupies(cell));
        }

        self.score += 1;
    }

    /// Requests a direction for the next tick. Last call before the tick wins.
    pub fn change_direction(&mut self, direction: Direction) {
        self.pending_direction = direction;
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Snake cells from head to tail.
    pub fn snake_pieces(&self) -> impl Iterator<Item = &Position> {
        self.snake.segments()
    }

    #[must_use]
    pub fn apple_position(&self) -> Position {
        self.apple.position()
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.snake.bounds()
    }

    /// Number of ticks that ran while the game was live.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
