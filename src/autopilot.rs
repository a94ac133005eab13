//! Scripted input for headless runs
//!
//! A pilot looks at the snapshot and decides which keys to hold, exactly
//! like a player would. It never touches the simulation state.

use crate::consts::{MAX_FRAME_DT, PLAYER_CLEARANCE};
use crate::heading_dir;
use crate::sim::{GameState, TickInput, is_blocked};

/// Degrees of error the chaser tolerates before turning
const AIM_DEADBAND: f32 = 4.0;
/// Only run forward when roughly facing the target
const RUN_CONE: f32 = 50.0;

pub trait Pilot {
    fn id(&self) -> &'static str;
    fn next_input(&mut self, state: &GameState) -> TickInput;
}

/// Holds nothing
#[derive(Debug, Default)]
pub struct Idle;

impl Pilot for Idle {
    fn id(&self) -> &'static str {
        "idle"
    }

    fn next_input(&mut self, _state: &GameState) -> TickInput {
        TickInput::default()
    }
}

/// Turns toward the nearest mouse and runs at it, circling left when an
/// obstacle is in the way
#[derive(Debug, Default)]
pub struct Chaser;

impl Pilot for Chaser {
    fn id(&self) -> &'static str {
        "chaser"
    }

    fn next_input(&mut self, state: &GameState) -> TickInput {
        let cat = &state.cat;
        let Some(target) = state
            .mice
            .iter()
            .map(|m| m.pos)
            .min_by(|a, b| {
                a.distance_squared(cat.pos)
                    .total_cmp(&b.distance_squared(cat.pos))
            })
        else {
            return TickInput::default();
        };

        let reach = state.tuning.cat_speed * MAX_FRAME_DT;
        let probe = cat.pos + heading_dir(cat.heading) * reach;
        if is_blocked(probe, &state.obstacles, PLAYER_CLEARANCE) {
            return TickInput {
                turn_left: true,
                ..Default::default()
            };
        }

        let to = target - cat.pos;
        let wanted = to.x.atan2(to.y).to_degrees();
        let error = wrap_degrees(wanted - cat.heading);

        TickInput {
            forward: error.abs() < RUN_CONE,
            turn_left: error > AIM_DEADBAND,
            turn_right: error < -AIM_DEADBAND,
            back: false,
        }
    }
}

/// Wrap to [-180, 180)
pub fn wrap_degrees(deg: f32) -> f32 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Look up a pilot by name
pub fn create_pilot(id: &str) -> Option<Box<dyn Pilot>> {
    match id {
        "idle" => Some(Box::new(Idle)),
        "chaser" => Some(Box::new(Chaser)),
        _ => None,
    }
}

pub fn pilot_ids() -> &'static [&'static str] {
    &["chaser", "idle"]
}
