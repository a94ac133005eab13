//! Cat Chase - a 3D arena arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring, clock)
//! - `renderer`: Pure frame description built from a post-tick snapshot
//! - `platform`: Input-event mapping and frame timing
//! - `settings`: Data-driven session tuning
//! - `autopilot` / `runner`: Headless drivers

pub mod autopilot;
pub mod platform;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;

pub use settings::{SettingsError, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Half-extent of the square arena
    pub const ARENA_SIZE: f32 = 20.0;
    pub const NUM_MICE: usize = 8;
    pub const NUM_OBSTACLES: usize = 6;

    /// Cat defaults
    pub const CAT_SPEED: f32 = 3.6;
    /// Degrees per second
    pub const CAT_ROT_SPEED: f32 = 140.0;
    pub const CAT_HEIGHT: f32 = 0.5;

    pub const MOUSE_SPEED: f32 = 1.4;
    pub const CATCH_DISTANCE: f32 = 1.0;

    /// Session length in seconds
    pub const GAME_TIME: f32 = 90.0;
    pub const INITIAL_LIVES: u8 = 3;

    /// Cat keeps this much clearance around every obstacle footprint
    pub const PLAYER_CLEARANCE: f32 = 0.4;
    /// Cat stays this far inside the arena walls
    pub const PLAYER_WALL_MARGIN: f32 = 0.8;
    /// Mice bounce this far inside the arena walls
    pub const MOUSE_WALL_MARGIN: f32 = 1.0;
    /// Mice see an obstacle as a box of half-width size / 1.8
    pub const MOUSE_FOOTPRINT_DIVISOR: f32 = 1.8;

    /// Spawn margins
    pub const MOUSE_SPAWN_MARGIN: f32 = 3.0;
    pub const OBSTACLE_SPAWN_MARGIN: f32 = 4.0;
    /// Obstacle full width/depth range
    pub const OBSTACLE_MIN_SIZE: f32 = 1.0;
    pub const OBSTACLE_MAX_SIZE: f32 = 3.0;

    /// Cooldown given to a freshly spawned mouse (seconds)
    pub const MOUSE_SPAWN_COOL: (f32, f32) = (0.4, 1.8);
    /// Cooldown after a cruising turn (seconds)
    pub const MOUSE_TURN_COOL: (f32, f32) = (0.6, 2.0);
    /// Max random turn when the cooldown expires (degrees)
    pub const MOUSE_TURN_MAX: f32 = 80.0;
    /// Heading kick on obstacle contact (degrees, sign is random)
    pub const MOUSE_OBSTACLE_KICK: f32 = 100.0;
    /// Per-tick chance of a small extra wiggle
    pub const MOUSE_JITTER_CHANCE: f64 = 0.01;
    pub const MOUSE_JITTER_MAX: f32 = 20.0;

    /// Frame delta guards (seconds)
    pub const MAX_FRAME_DT: f32 = 0.12;
    pub const MIN_FRAME_DT: f32 = 1e-4;

    /// Chase camera defaults
    pub const CAM_ANGLE: f32 = -30.0;
    pub const CAM_HEIGHT: f32 = 7.0;
    pub const CAM_RADIUS: f32 = 14.0;
    /// Degrees per rotate event
    pub const CAM_ROTATE_STEP: f32 = 6.0;
}

/// Unit direction on the ground plane for a heading in degrees.
///
/// 0° faces +z; x follows the sine, z the cosine. The returned `Vec2`
/// stores world x in `.x` and world z in `.y`.
#[inline]
pub fn heading_dir(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.sin(), rad.cos())
}
