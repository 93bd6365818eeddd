//! Turn-based Snake simulation.
//!
//! The core is [`game::GameState`]: an external driver feeds it directions
//! through [`game::GameState::change_direction`] and advances it one tick at
//! a time with [`game::GameState::update`]. [`runner`] provides such a driver
//! for a fixed tick interval.

pub mod apple;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod runner;
pub mod settings;
pub mod snake;
