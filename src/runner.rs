//! Headless session driver
//!
//! Plays a session with a pilot standing in for the keyboard and checks
//! every invariant after each tick.

use std::time::Duration;

use anyhow::{Result, anyhow};
use serde::Serialize;

use crate::autopilot::Pilot;
use crate::platform::FrameClock;
use crate::renderer::{Viewport, render};
use crate::settings::Tuning;
use crate::sim::{GameState, tick};

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub seed: u64,
    /// Stop after this many frames even if the clock is still running
    pub max_frames: u32,
    /// Simulated frame rate for the fixed-step driver
    pub fps: f32,
    pub tuning: Tuning,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_frames: 60 * 120,
            fps: 60.0,
            tuning: Tuning::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    pub pilot: String,
    pub seed: u64,
    pub frames: u32,
    pub score: u64,
    pub lives: u8,
    pub time_left: f32,
    pub game_over: bool,
    /// Frames where the pilot held at least one key
    pub active_frames: u32,
    pub hud: Vec<String>,
}

/// Run one session with a fixed frame delta of `1 / fps`
pub fn run_session(pilot: &mut dyn Pilot, config: &RunConfig) -> Result<RunSummary> {
    if config.max_frames == 0 {
        return Err(anyhow!("max_frames must be > 0"));
    }
    if !(config.fps > 0.0) {
        return Err(anyhow!("fps must be positive, got {}", config.fps));
    }
    config.tuning.validate()?;

    let dt = 1.0 / config.fps;
    let mut state = GameState::new(config.seed, config.tuning.clone());
    state
        .validate()
        .map_err(|rule| anyhow!("initial invariant failure: {rule}"))?;

    let mut frames = 0;
    let mut active_frames = 0;
    while frames < config.max_frames && !state.is_game_over() {
        let input = pilot.next_input(&state);
        if !input.is_idle() {
            active_frames += 1;
        }
        tick(&mut state, &input, dt);
        frames += 1;
        state
            .validate()
            .map_err(|rule| anyhow!("invariant {rule} broken at frame {frames}"))?;
    }

    log::info!(
        "{} finished seed {} after {} frames: score {}",
        pilot.id(),
        config.seed,
        frames,
        state.score
    );
    Ok(summarize(pilot.id(), &state, frames, active_frames))
}

/// Run against the wall clock for `seconds`, sleeping to roughly hold `fps`
pub fn run_realtime(
    pilot: &mut dyn Pilot,
    seed: u64,
    tuning: Tuning,
    seconds: f32,
    fps: f32,
) -> Result<RunSummary> {
    if !(fps > 0.0) {
        return Err(anyhow!("fps must be positive, got {fps}"));
    }
    tuning.validate()?;

    let frame_budget = Duration::from_secs_f32(1.0 / fps);
    let mut state = GameState::new(seed, tuning);
    let mut clock = FrameClock::new();
    let mut elapsed = 0.0;
    let mut frames = 0;
    let mut active_frames = 0;
    let mut last_whole_second = -1;

    while elapsed < seconds && !state.is_game_over() {
        std::thread::sleep(frame_budget);
        let raw_dt = clock.lap();
        elapsed += raw_dt;

        let input = pilot.next_input(&state);
        if !input.is_idle() {
            active_frames += 1;
        }
        tick(&mut state, &input, raw_dt);
        frames += 1;

        let whole = elapsed as i32;
        if whole != last_whole_second {
            last_whole_second = whole;
            let frame = render(&state, &Viewport::default());
            let hud: Vec<&str> = frame.hud.iter().map(|l| l.text.as_str()).collect();
            log::info!("[{whole:>3}s] {}", hud.join(" | "));
        }
    }

    Ok(summarize(pilot.id(), &state, frames, active_frames))
}

fn summarize(pilot: &str, state: &GameState, frames: u32, active_frames: u32) -> RunSummary {
    let frame = render(state, &Viewport::default());
    RunSummary {
        pilot: pilot.to_string(),
        seed: state.seed,
        frames,
        score: state.score,
        lives: state.lives,
        time_left: state.time_left,
        game_over: state.is_game_over(),
        active_frames,
        hud: frame.hud.into_iter().map(|l| l.text).collect(),
    }
}
