use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or driving a game.
///
/// Losing a game is not an error; it is reported through
/// [`crate::game::GameStatus`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("map width must be within [{min}; {max}], got {actual}")]
    MapWidthOutOfRange { actual: u16, min: u16, max: u16 },

    #[error("map height must be within [{min}; {max}], got {actual}")]
    MapHeightOutOfRange { actual: u16, min: u16, max: u16 },

    #[error("tick delay must be within [{min}; {max}] ms, got {actual} ms")]
    TickDelayOutOfRange { actual: u64, min: u64, max: u64 },

    #[error("failed to access settings file {}: {source}", .path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed settings file {}: {source}", .path.display())]
    SettingsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unrecognized direction key {0:?} in move script")]
    UnknownDirectionKey(char),
}

pub type Result<T> = std::result::Result<T, Error>;
