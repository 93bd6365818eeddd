use crate::error::{Error, Result};

/// Canonical movement directions on the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true when `self` is the exact 180° turn away from `other`.
    #[must_use]
    pub fn is_reversal_of(self, other: Self) -> bool {
        self == other.opposite()
    }

    /// Unit step along this direction. `y` grows downward.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Maps a script key to a direction, ignoring case.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_uppercase() {
            'U' | 'W' => Some(Self::Up),
            'D' | 'S' => Some(Self::Down),
            'L' | 'A' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Parses a tick script into one optional direction per tick.
///
/// `.` leaves the pending direction untouched for that tick and whitespace is
/// skipped, so `"RR.. D"` is five ticks.
pub fn parse_script(script: &str) -> Result<Vec<Option<Direction>>> {
    script
        .chars()
        .filter(|key| !key.is_whitespace())
        .map(|key| match key {
            '.' => Ok(None),
            other => Direction::from_key(other)
                .map(Some)
                .ok_or(Error::UnknownDirectionKey(other)),
        })
        .collect()
}
