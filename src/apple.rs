use rand::Rng;
use tracing::debug;

use crate::config::GridSize;
use crate::snake::Position;

/// The single apple on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    position: Position,
    bounds: GridSize,
}

impl Apple {
    /// Places an apple at an explicit position.
    ///
    /// The position is not checked against the bounds.
    #[must_use]
    pub fn at(bounds: GridSize, position: Position) -> Self {
        Self { position, bounds }
    }

    /// Places an apple on a random cell for which `is_occupied` is false.
    ///
    /// See [`Apple::respawn`] for the termination requirement.
    #[must_use]
    pub fn spawn<R, F>(rng: &mut R, bounds: GridSize, is_occupied: F) -> Self
    where
        R: Rng + ?Sized,
        F: Fn(Position) -> bool,
    {
        Self {
            position: random_free_position(rng, bounds, is_occupied),
            bounds,
        }
    }

    /// Moves the apple to a random cell for which `is_occupied` is false.
    ///
    /// Cells are drawn uniformly and redrawn until a free one comes up, so
    /// the caller must guarantee that at least one free cell exists.
    pub fn respawn<R, F>(&mut self, rng: &mut R, is_occupied: F)
    where
        R: Rng + ?Sized,
        F: Fn(Position) -> bool,
    {
        self.position = random_free_position(rng, self.bounds, is_occupied);
        debug!(x = self.position.x, y = self.position.y, "apple respawned");
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}

fn random_free_position<R, F>(rng: &mut R, bounds: GridSize, is_occupied: F) -> Position
where
    R: Rng + ?Sized,
    F: Fn(Position) -> bool,
{
    debug_assert!(bounds.width > 0 && bounds.height > 0);

    loop {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !is_occupied(candidate) {
            return candidate;
        }
    }
}
