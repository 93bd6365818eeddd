use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::MoveOutcome;

/// Final numbers of one driven session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub score: u32,
    pub length: usize,
    pub status: GameStatus,
}

impl SessionSummary {
    fn of(state: &GameState, ticks: u64) -> Self {
        Self {
            ticks,
            score: state.score(),
            length: state.snake().len(),
            status: state.status(),
        }
    }
}

/// Drives `state` on a fixed tick interval until the game ends.
///
/// Input is sampled once per tick through `next_input`, which receives the
/// zero-based tick index and the state as of the previous tick. With
/// `max_ticks` set the session also stops after that many ticks even if the
/// game is still running.
pub fn run_session<F>(
    state: &mut GameState,
    interval: Duration,
    max_ticks: Option<u64>,
    mut next_input: F,
) -> SessionSummary
where
    F: FnMut(u64, &GameState) -> Option<Direction>,
{
    let mut ticks = 0;

    while state.is_running() && max_ticks.is_none_or(|limit| ticks < limit) {
        if !interval.is_zero() {
            thread::sleep(interval);
        }

        if let Some(direction) = next_input(ticks, state) {
            state.change_direction(direction);
        }

        let outcome = state.update();
        ticks += 1;

        if outcome == MoveOutcome::AteApple {
            debug!(tick = ticks, score = state.score(), "score increased");
        }
    }

    let summary = SessionSummary::of(state, ticks);
    info!(
        ticks = summary.ticks,
        score = summary.score,
        length = summary.length,
        status = ?summary.status,
        "session finished"
    );
    summary
}
