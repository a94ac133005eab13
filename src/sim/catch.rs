//! Catch detection and scoring

use glam::Vec2;

use super::state::GameState;

/// True if a mouse at `mouse` is within `catch_distance` of the cat
#[inline]
pub fn within_reach(cat: Vec2, mouse: Vec2, catch_distance: f32) -> bool {
    cat.distance_squared(mouse) <= catch_distance * catch_distance
}

/// Remove every mouse the cat is touching, score it, and spawn a
/// replacement at the end of the list. Returns the number caught.
///
/// Replacements are not checked again this tick.
pub fn check_catches(state: &mut GameState) -> u32 {
    let cat = state.cat.pos;
    let reach = state.tuning.catch_distance;

    let before = state.mice.len();
    state.mice.retain(|m| !within_reach(cat, m.pos, reach));
    let caught = (before - state.mice.len()) as u32;

    for _ in 0..caught {
        let mouse = state.spawn_mouse();
        log::debug!(
            "Caught a mouse! Score {} -> {}, respawned at ({:.1}, {:.1})",
            state.score,
            state.score + 1,
            mouse.pos.x,
            mouse.pos.y
        );
        state.mice.push(mouse);
        state.score += 1;
    }

    caught
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::NUM_MICE;

    /// Park every mouse in a far corner so only the ones a test places matter
    fn scatter(state: &mut GameState) {
        for mouse in &mut state.mice {
            mouse.pos = Vec2::new(15.0, 15.0);
        }
    }

    #[test]
    fn test_reach_threshold() {
        assert!(within_reach(Vec2::ZERO, Vec2::new(0.0, 0.99), 1.0));
        assert!(within_reach(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.0));
        assert!(!within_reach(Vec2::ZERO, Vec2::new(0.0, 1.01), 1.0));
    }

    #[test]
    fn test_catch_scores_and_respawns() {
        let mut state = GameState::with_seed(3);
        scatter(&mut state);
        state.mice[2].pos = Vec2::new(0.0, 0.99);
        let caught_id = state.mice[2].clone();

        assert_eq!(check_catches(&mut state), 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.mice.len(), NUM_MICE);
        assert!(!state.mice.contains(&caught_id));
    }

    #[test]
    fn test_near_miss_is_not_caught() {
        let mut state = GameState::with_seed(3);
        scatter(&mut state);
        state.mice[0].pos = Vec2::new(0.0, 1.01);

        assert_eq!(check_catches(&mut state), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.mice[0].pos, Vec2::new(0.0, 1.01));
    }

    #[test]
    fn test_multiple_catches_in_one_tick() {
        let mut state = GameState::with_seed(8);
        scatter(&mut state);
        state.mice[0].pos = Vec2::new(0.5, 0.0);
        state.mice[4].pos = Vec2::new(0.0, -0.5);
        state.mice[7].pos = Vec2::new(-0.3, 0.3);

        assert_eq!(check_catches(&mut state), 3);
        assert_eq!(state.score, 3);
        assert_eq!(state.mice.len(), NUM_MICE);
        // Survivors keep their order ahead of the replacements
        for mouse in &state.mice[..NUM_MICE - 3] {
            assert_eq!(mouse.pos, Vec2::new(15.0, 15.0));
        }
    }
}
