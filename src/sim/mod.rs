//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the session
//! - Stable iteration order (mice in list order)
//! - No rendering or platform dependencies

pub mod catch;
pub mod geometry;
pub mod invariants;
pub mod mice;
pub mod player;
pub mod state;
pub mod tick;

pub use catch::{check_catches, within_reach};
pub use geometry::{Arena, Obstacle, is_blocked};
pub use invariants::RuleCode;
pub use mice::{step_mouse, update_mice};
pub use player::update_player;
pub use state::{Camera, Cat, GamePhase, GameState, Mouse};
pub use tick::{Command, TickInput, apply_command, clamp_frame_dt, tick};
