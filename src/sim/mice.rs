//! Mouse wandering
//!
//! Each mouse cruises along its heading. A cooldown gates random turns,
//! walls bounce it, and obstacles knock it sideways without letting it in.

use rand::Rng;
use rand_pcg::Pcg32;

use super::geometry::{Arena, Obstacle};
use super::state::{GameState, Mouse};
use crate::consts::*;
use crate::heading_dir;

/// Advance every mouse by `dt` seconds
pub fn update_mice(state: &mut GameState, dt: f32) {
    let (mice, obstacles, arena, rng) = state.mice_and_world();
    for mouse in mice.iter_mut() {
        step_mouse(mouse, dt, obstacles, arena, rng);
    }
}

/// Advance one mouse by `dt` seconds
pub fn step_mouse(
    mouse: &mut Mouse,
    dt: f32,
    obstacles: &[Obstacle],
    arena: &Arena,
    rng: &mut Pcg32,
) {
    mouse.cool -= dt;
    if mouse.cool <= 0.0 {
        mouse.heading += rng.random_range(-MOUSE_TURN_MAX..=MOUSE_TURN_MAX);
        let (lo, hi) = MOUSE_TURN_COOL;
        mouse.cool = rng.random_range(lo..=hi);
    }

    let mut next = mouse.pos + heading_dir(mouse.heading) * (mouse.speed * dt);

    // Walls reflect the heading with fixed formulas per axis and pin the
    // position to the bound; both can fire on a corner.
    let bound = arena.bound(MOUSE_WALL_MARGIN);
    if next.x < -bound || next.x > bound {
        mouse.heading = 180.0 - mouse.heading;
        next.x = next.x.clamp(-bound, bound);
    }
    if next.y < -bound || next.y > bound {
        mouse.heading = -mouse.heading;
        next.y = next.y.clamp(-bound, bound);
    }

    if let Some(ob) = obstacles.iter().find(|ob| ob.touches_mouse(next)) {
        let kick = if rng.random_bool(0.5) {
            MOUSE_OBSTACLE_KICK
        } else {
            -MOUSE_OBSTACLE_KICK
        };
        mouse.heading += kick;
        next = mouse.pos;
        log::trace!(
            "Mouse deflected by obstacle at {:?}, heading now {:.1}",
            ob.pos,
            mouse.heading
        );
    }

    mouse.pos = next;

    if rng.random_bool(MOUSE_JITTER_CHANCE) {
        mouse.heading += rng.random_range(-MOUSE_JITTER_MAX..=MOUSE_JITTER_MAX);
    }
}
