use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use grid_snake::error::Result;
use grid_snake::game::GameState;
use grid_snake::input::parse_script;
use grid_snake::runner::run_session;
use grid_snake::settings::{Settings, load_settings_from_path, save_settings_to_path, settings_path};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Headless Snake: plays a scripted game on a fixed tick interval.
#[derive(Debug, Parser)]
#[command(name = "grid-snake", version, about)]
struct Cli {
    /// Settings file to start from (defaults to the per-user config file).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Map width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Map height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Delay between ticks in milliseconds.
    #[arg(long = "delay-ms")]
    delay_ms: Option<u64>,

    /// Let the snake leave one edge and come back from the opposite one.
    #[arg(long)]
    wrap: bool,

    /// Seed for apple placement.
    #[arg(long)]
    seed: Option<u64>,

    /// One key per tick: U/W, D/S, L/A, R, or `.` to keep going.
    #[arg(long, default_value = "")]
    moves: String,

    /// Stop after this many ticks even if the snake is still alive.
    #[arg(long = "max-ticks")]
    max_ticks: Option<u64>,

    /// Write the effective settings back to the settings file.
    #[arg(long)]
    save: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "grid_snake=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.settings.clone().unwrap_or_else(settings_path);
    let settings = apply_overrides(load_or_default(&path), &cli)?;

    if cli.save {
        save_settings_to_path(&path, &settings)?;
        info!(path = %path.display(), "settings saved");
    }

    let script = parse_script(&cli.moves)?;
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(&settings, seed),
        None => GameState::new(&settings),
    };

    info!(
        width = settings.map_size().width,
        height = settings.map_size().height,
        wrap = settings.wraps_around_edges(),
        delay_ms = settings.tick_delay_ms(),
        "starting game"
    );

    let summary = run_session(
        &mut state,
        settings.tick_interval(),
        cli.max_ticks,
        |tick, _| {
            let index = usize::try_from(tick).ok()?;
            script.get(index).copied().flatten()
        },
    );

    println!(
        "{:?} after {} ticks: score {}, length {}",
        summary.status, summary.ticks, summary.score, summary.length
    );
    Ok(())
}

fn load_or_default(path: &Path) -> Settings {
    match load_settings_from_path(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{e}; falling back to default settings");
            Settings::default()
        }
    }
}

fn apply_overrides(mut settings: Settings, cli: &Cli) -> Result<Settings> {
    if let Some(width) = cli.width {
        settings = settings.with_map_width(width)?;
    }
    if let Some(height) = cli.height {
        settings = settings.with_map_height(height)?;
    }
    if let Some(delay_ms) = cli.delay_ms {
        settings = settings.with_tick_delay_ms(delay_ms)?;
    }
    if cli.wrap {
        settings = settings.with_wrap_around(true);
    }
    Ok(settings)
}
