use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{
    GridSize, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_TICK_DELAY_MS,
    DEFAULT_WRAPS_AROUND_EDGES, MAX_MAP_HEIGHT, MAX_MAP_WIDTH, MAX_TICK_DELAY_MS, MIN_MAP_HEIGHT,
    MIN_MAP_WIDTH, MIN_TICK_DELAY_MS,
};
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Values a game is started with.
///
/// Fields are only reachable through validated setters, so a `Settings`
/// value always describes a playable map.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    map_size: GridSize,
    tick_delay_ms: u64,
    wraps_around_edges: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map_size: GridSize {
                width: DEFAULT_MAP_WIDTH,
                height: DEFAULT_MAP_HEIGHT,
            },
            tick_delay_ms: DEFAULT_TICK_DELAY_MS,
            wraps_around_edges: DEFAULT_WRAPS_AROUND_EDGES,
        }
    }
}

impl Settings {
    pub fn with_map_width(mut self, width: u16) -> Result<Self> {
        if !(MIN_MAP_WIDTH..=MAX_MAP_WIDTH).contains(&width) {
            return Err(Error::MapWidthOutOfRange {
                actual: width,
                min: MIN_MAP_WIDTH,
                max: MAX_MAP_WIDTH,
            });
        }
        self.map_size.width = width;
        Ok(self)
    }

    pub fn with_map_height(mut self, height: u16) -> Result<Self> {
        if !(MIN_MAP_HEIGHT..=MAX_MAP_HEIGHT).contains(&height) {
            return Err(Error::MapHeightOutOfRange {
                actual: height,
                min: MIN_MAP_HEIGHT,
                max: MAX_MAP_HEIGHT,
            });
        }
        self.map_size.height = height;
        Ok(self)
    }

    pub fn with_tick_delay_ms(mut self, delay_ms: u64) -> Result<Self> {
        if !(MIN_TICK_DELAY_MS..=MAX_TICK_DELAY_MS).contains(&delay_ms) {
            return Err(Error::TickDelayOutOfRange {
                actual: delay_ms,
                min: MIN_TICK_DELAY_MS,
                max: MAX_TICK_DELAY_MS,
            });
        }
        self.tick_delay_ms = delay_ms;
        Ok(self)
    }

    #[must_use]
    pub fn with_wrap_around(mut self, wraps_around_edges: bool) -> Self {
        self.wraps_around_edges = wraps_around_edges;
        self
    }

    /// Re-checks every bounded field, e.g. after deserializing.
    pub fn validate(self) -> Result<Self> {
        Settings::default()
            .with_map_width(self.map_size.width)?
            .with_map_height(self.map_size.height)?
            .with_tick_delay_ms(self.tick_delay_ms)
            .map(|settings| settings.with_wrap_around(self.wraps_around_edges))
    }

    #[must_use]
    pub fn map_size(&self) -> GridSize {
        self.map_size
    }

    #[must_use]
    pub fn tick_delay_ms(&self) -> u64 {
        self.tick_delay_ms
    }

    /// Delay between two ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }

    #[must_use]
    pub fn wraps_around_edges(&self) -> bool {
        self.wraps_around_edges
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from `path`.
///
/// A missing or empty file yields the defaults. A file that cannot be read,
/// does not parse, or holds out-of-range values is an error.
pub fn load_settings_from_path(path: &Path) -> Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(Error::SettingsIo {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if raw.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_json::from_str::<Settings>(&raw)
        .map_err(|source| Error::SettingsFormat {
            path: path.to_path_buf(),
            source,
        })?
        .validate()
}

/// Saves settings to `path`, creating parent directories when needed.
pub fn save_settings_to_path(path: &Path, settings: &Settings) -> Result<()> {
    let io_error = |source| Error::SettingsIo {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(settings).map_err(|source| Error::SettingsFormat {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(io_error)
}
