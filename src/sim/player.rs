//! Cat steering
//!
//! Held keys turn the cat and push it along its heading. Obstacles stop
//! the cat dead: a step that would end inside a padded footprint is
//! dropped entirely, with no sliding.

use super::geometry::is_blocked;
use super::state::GameState;
use super::tick::TickInput;
use crate::consts::{PLAYER_CLEARANCE, PLAYER_WALL_MARGIN};
use crate::heading_dir;

/// Apply one tick of held-key input to the cat
pub fn update_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let tuning = &state.tuning;
    let cat = &mut state.cat;

    if input.turn_left {
        cat.heading += tuning.cat_rot_speed * dt;
    }
    if input.turn_right {
        cat.heading -= tuning.cat_rot_speed * dt;
    }

    let mut step = 0.0;
    if input.forward {
        step += tuning.cat_speed * dt;
    }
    if input.back {
        step -= tuning.cat_speed * dt;
    }
    if step == 0.0 {
        return;
    }

    let next = cat.pos + heading_dir(cat.heading) * step;
    if is_blocked(next, &state.obstacles, PLAYER_CLEARANCE) {
        return;
    }
    cat.pos = state.arena.clamp(next, PLAYER_WALL_MARGIN);
}
