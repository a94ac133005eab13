//! Simulation tick
//!
//! Core game loop: clock, then cat, then mice, then catches. One call per
//! rendered frame with the raw measured delta.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use super::catch::check_catches;
use super::mice::update_mice;
use super::player::update_player;
use super::state::{GamePhase, GameState};
use crate::consts::{MAX_FRAME_DT, MIN_FRAME_DT};

/// Movement keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub forward: bool,
    pub back: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl TickInput {
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.back || self.turn_left || self.turn_right)
    }
}

/// Discrete requests applied between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Reset,
    Quit,
    CameraLeft,
    CameraRight,
}

/// Guard a raw frame delta: stalls are capped, non-positive (or NaN)
/// readings become a tiny positive step.
pub fn clamp_frame_dt(raw: f32) -> f32 {
    if !(raw > 0.0) {
        MIN_FRAME_DT
    } else {
        raw.min(MAX_FRAME_DT)
    }
}

/// Advance the session by one frame. Does nothing once the game is over.
pub fn tick(state: &mut GameState, input: &TickInput, raw_dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    let dt = clamp_frame_dt(raw_dt);

    state.time_ticks += 1;
    state.time_left -= dt;
    if state.time_left <= 0.0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Time's up! Final score {} after {} ticks",
            state.score,
            state.time_ticks
        );
    }

    // The tick that runs out the clock still finishes its movement
    update_player(state, input, dt);
    update_mice(state, dt);
    check_catches(state);

    debug_assert_eq!(state.mice.len(), state.tuning.num_mice);
}

/// Apply a discrete request. `Break` means the driver should stop.
pub fn apply_command(state: &mut GameState, command: Command) -> ControlFlow<()> {
    match command {
        Command::Reset => state.reset(),
        Command::Quit => {
            log::info!("Quit requested");
            return ControlFlow::Break(());
        }
        Command::CameraLeft => state.camera.rotate(-1.0),
        Command::CameraRight => state.camera.rotate(1.0),
    }
    ControlFlow::Continue(())
}
