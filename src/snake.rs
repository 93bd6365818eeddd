use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: self.x.rem_euclid(i32::from(bounds.width)),
            y: self.y.rem_euclid(i32::from(bounds.height)),
        }
    }

    /// Returns the neighbouring cell one step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Result of a single movement attempt.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveOutcome {
    /// The head would leave the map or hit the body. Nothing changed.
    Blocked,
    /// The snake moved and kept its length.
    Advanced,
    /// The snake moved onto the apple and grew by one segment.
    AteApple,
}

impl MoveOutcome {
    /// Returns true when the snake actually moved.
    #[must_use]
    pub fn is_success(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

/// Snake body, movement rules and collision detection.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    bounds: GridSize,
    wraps_around_edges: bool,
    direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake in the middle of the map.
    #[must_use]
    pub fn new(bounds: GridSize, wraps_around_edges: bool) -> Self {
        let start = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        Self::with_start(bounds, wraps_around_edges, start)
    }

    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn with_start(bounds: GridSize, wraps_around_edges: bool, start: Position) -> Self {
        Self::from_segments(bounds, wraps_around_edges, vec![start], Direction::Up)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(
        bounds: GridSize,
        wraps_around_edges: bool,
        segments: Vec<Position>,
        direction: Direction,
    ) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        Self {
            body: VecDeque::from(segments),
            bounds,
            wraps_around_edges,
            direction,
        }
    }

    /// Attempts one step toward `requested`, eating the apple at `apple` if
    /// the new head lands on it.
    ///
    /// A request for the exact opposite of the current direction is ignored
    /// while the snake is longer than one cell; it keeps going straight
    /// instead. A blocked move leaves the snake exactly as it was.
    pub fn advance(&mut self, requested: Direction, apple: Position) -> MoveOutcome {
        let direction = self.resolve_direction(requested);
        let next_head = self.next_head_position(direction);
        let ate_apple = next_head == apple;

        // The tail only vacates its cell when the snake does not grow.
        if !self.can_move_to(next_head, !ate_apple) {
            return MoveOutcome::Blocked;
        }

        self.direction = direction;
        self.body.push_front(next_head);
        if ate_apple {
            return MoveOutcome::AteApple;
        }

        let _ = self.body.pop_back();
        MoveOutcome::Advanced
    }

    fn resolve_direction(&self, requested: Direction) -> Direction {
        if self.body.len() > 1 && requested.is_reversal_of(self.direction) {
            self.direction
        } else {
            requested
        }
    }

    fn next_head_position(&self, direction: Direction) -> Position {
        let next = self.head().step(direction);
        if self.wraps_around_edges {
            next.wrapped(self.bounds)
        } else {
            next
        }
    }

    fn can_move_to(&self, target: Position, tail_vacates: bool) -> bool {
        if !self.wraps_around_edges && !target.is_within_bounds(self.bounds) {
            return false;
        }

        let blocking = if tail_vacates {
            self.body.len() - 1
        } else {
            self.body.len()
        };
        !self.body.iter().take(blocking).any(|segment| *segment == target)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the direction applied on the last successful move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn wraps_around_edges(&self) -> bool {
        self.wraps_around_edges
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
