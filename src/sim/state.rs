//! Game state and core simulation types
//!
//! The session aggregate owns every entity and the seeded RNG. Nothing
//! outside `GameState` holds references into it.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Arena, Obstacle};
use crate::consts::*;
use crate::settings::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Clock running, everything moves
    Active,
    /// Clock ran out; frozen until reset
    GameOver,
}

/// A wandering mouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mouse {
    pub pos: Vec2,
    /// Degrees, 0 = +z
    pub heading: f32,
    pub speed: f32,
    /// Seconds until the next random turn
    pub cool: f32,
}

impl Mouse {
    /// Spawn at a random spot away from the walls, facing anywhere
    pub fn spawn(rng: &mut Pcg32, arena: &Arena, speed: f32) -> Self {
        let pos = rand_in_arena(rng, arena, MOUSE_SPAWN_MARGIN);
        let heading = rng.random_range(0.0..360.0);
        let (lo, hi) = MOUSE_SPAWN_COOL;
        let cool = rng.random_range(lo..=hi);
        Self {
            pos,
            heading,
            speed,
            cool,
        }
    }
}

/// The player's cat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    pub pos: Vec2,
    /// Fixed height above the floor (render only)
    pub height: f32,
    /// Degrees, 0 = +z
    pub heading: f32,
}

impl Cat {
    pub fn new(height: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            height,
            heading: 0.0,
        }
    }

    /// Position in world space
    pub fn world_pos(&self) -> Vec3 {
        Vec3::new(self.pos.x, self.height, self.pos.y)
    }
}

/// Chase-camera parameters. View only; never read by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Degrees around the cat
    pub angle: f32,
    pub height: f32,
    pub radius: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            angle: CAM_ANGLE,
            height: CAM_HEIGHT,
            radius: CAM_RADIUS,
        }
    }
}

impl Camera {
    /// Orbit by `steps` rotate events (negative = left)
    pub fn rotate(&mut self, steps: f32) {
        self.angle += steps * CAM_ROTATE_STEP;
    }
}

/// Spawn an obstacle away from the walls with a random footprint
pub fn spawn_obstacle(rng: &mut Pcg32, arena: &Arena) -> Obstacle {
    let pos = rand_in_arena(rng, arena, OBSTACLE_SPAWN_MARGIN);
    let sx = rng.random_range(OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE);
    let sz = rng.random_range(OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE);
    Obstacle::new(pos, Vec2::new(sx, sz))
}

/// Uniform point in `[-size + margin, size - margin]` on both axes
pub fn rand_in_arena(rng: &mut Pcg32, arena: &Arena, margin: f32) -> Vec2 {
    let r = arena.bound(margin);
    Vec2::new(rng.random_range(-r..=r), rng.random_range(-r..=r))
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session knobs, fixed for the life of the state
    pub tuning: Tuning,
    pub arena: Arena,
    /// Catches so far
    pub score: u64,
    /// Shown on the HUD; no rule spends them
    pub lives: u8,
    /// Seconds left; may dip slightly below zero on the final tick
    pub time_left: f32,
    pub phase: GamePhase,
    /// Simulation ticks since the last reset
    pub time_ticks: u64,
    pub cat: Cat,
    pub camera: Camera,
    /// Live mice, always `tuning.num_mice` long between ticks
    pub mice: Vec<Mouse>,
    /// Static for the session
    pub obstacles: Vec<Obstacle>,
    /// Every random draw in the simulation comes from here
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let arena = Arena::new(tuning.arena_size);
        let mut state = Self {
            seed,
            arena,
            score: 0,
            lives: tuning.initial_lives,
            time_left: tuning.game_time,
            phase: GamePhase::Active,
            time_ticks: 0,
            cat: Cat::new(tuning.cat_height),
            camera: Camera::default(),
            mice: Vec::new(),
            obstacles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };
        state.reset();
        state
    }

    /// Fresh session with default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, Tuning::default())
    }

    /// Back to the start: full clock, zero score, cat at the center,
    /// new mice and obstacles. The RNG keeps running, so layouts differ
    /// from the previous round. The camera is left where the player put it.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.tuning.initial_lives;
        self.time_left = self.tuning.game_time;
        self.phase = GamePhase::Active;
        self.time_ticks = 0;
        self.cat = Cat::new(self.tuning.cat_height);

        let arena = self.arena;
        let speed = self.tuning.mouse_speed;
        let rng = &mut self.rng;
        self.mice = (0..self.tuning.num_mice)
            .map(|_| Mouse::spawn(rng, &arena, speed))
            .collect();
        self.obstacles = (0..self.tuning.num_obstacles)
            .map(|_| spawn_obstacle(rng, &arena))
            .collect();

        log::info!(
            "Session reset (seed {}): {} mice, {} obstacles, {:.0}s on the clock",
            self.seed,
            self.mice.len(),
            self.obstacles.len(),
            self.time_left
        );
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Spawn a mouse with default speed using the session RNG
    pub fn spawn_mouse(&mut self) -> Mouse {
        Mouse::spawn(&mut self.rng, &self.arena, self.tuning.mouse_speed)
    }

    /// Split borrow for per-mouse updates: mice mutable, the rest shared
    pub(crate) fn mice_and_world(
        &mut self,
    ) -> (&mut [Mouse], &[Obstacle], &Arena, &mut Pcg32) {
        (
            self.mice.as_mut_slice(),
            self.obstacles.as_slice(),
            &self.arena,
            &mut self.rng,
        )
    }
}
