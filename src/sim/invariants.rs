//! Session invariants
//!
//! A failed check is a bug in the simulation, never a player-facing error.
//! The headless runner checks after every tick; the tick itself only
//! debug-asserts the mouse count.

use std::fmt;

use super::geometry::is_blocked;
use super::state::{GamePhase, GameState};
use crate::consts::{MOUSE_WALL_MARGIN, PLAYER_CLEARANCE, PLAYER_WALL_MARGIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleCode {
    MouseCount,
    CatBounds,
    CatInsideObstacle,
    MouseBounds,
    LivesChanged,
    PhaseClock,
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MouseCount => write!(f, "MOUSE_COUNT"),
            Self::CatBounds => write!(f, "CAT_BOUNDS"),
            Self::CatInsideObstacle => write!(f, "CAT_INSIDE_OBSTACLE"),
            Self::MouseBounds => write!(f, "MOUSE_BOUNDS"),
            Self::LivesChanged => write!(f, "LIVES_CHANGED"),
            Self::PhaseClock => write!(f, "PHASE_CLOCK"),
        }
    }
}

impl std::error::Error for RuleCode {}

impl GameState {
    /// Check every structural invariant of the session
    pub fn validate(&self) -> Result<(), RuleCode> {
        if self.mice.len() != self.tuning.num_mice {
            return Err(RuleCode::MouseCount);
        }

        if !self.arena.contains(self.cat.pos, PLAYER_WALL_MARGIN) {
            return Err(RuleCode::CatBounds);
        }
        // Only a cat that has moved can have been stopped short of an
        // obstacle; a cat still on its spawn point may sit on one.
        if self.cat.pos != glam::Vec2::ZERO
            && is_blocked(self.cat.pos, &self.obstacles, PLAYER_CLEARANCE)
        {
            return Err(RuleCode::CatInsideObstacle);
        }

        if self
            .mice
            .iter()
            .any(|m| !self.arena.contains(m.pos, MOUSE_WALL_MARGIN))
        {
            return Err(RuleCode::MouseBounds);
        }

        if self.lives != self.tuning.initial_lives {
            return Err(RuleCode::LivesChanged);
        }

        let clock_consistent = match self.phase {
            GamePhase::Active => self.time_left > 0.0,
            GamePhase::GameOver => self.time_left <= 0.0,
        };
        if !clock_consistent {
            return Err(RuleCode::PhaseClock);
        }

        Ok(())
    }
}
