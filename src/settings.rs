//! Session tuning
//!
//! Data-driven knobs for a session, loadable from JSON. Collision margins
//! and spawn ranges are not tunable and live in `crate::consts`.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Session tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Half-extent of the square arena
    pub arena_size: f32,
    pub num_mice: usize,
    pub num_obstacles: usize,

    // === Cat ===
    pub cat_speed: f32,
    /// Degrees per second
    pub cat_rot_speed: f32,
    pub cat_height: f32,

    // === Mice ===
    pub mouse_speed: f32,
    pub catch_distance: f32,

    // === Session ===
    /// Seconds on the clock at reset
    pub game_time: f32,
    pub initial_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_size: ARENA_SIZE,
            num_mice: NUM_MICE,
            num_obstacles: NUM_OBSTACLES,

            cat_speed: CAT_SPEED,
            cat_rot_speed: CAT_ROT_SPEED,
            cat_height: CAT_HEIGHT,

            mouse_speed: MOUSE_SPEED,
            catch_distance: CATCH_DISTANCE,

            game_time: GAME_TIME,
            initial_lives: INITIAL_LIVES,
        }
    }
}

/// Errors from loading or validating tuning
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read tuning file: {err}"),
            Self::Parse(err) => write!(f, "malformed tuning JSON: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("cat_speed", self.cat_speed),
            ("cat_rot_speed", self.cat_rot_speed),
            ("mouse_speed", self.mouse_speed),
            ("catch_distance", self.catch_distance),
            ("game_time", self.game_time),
        ];
        for (field, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                });
            }
        }
        if !self.cat_height.is_finite() || self.cat_height < 0.0 {
            return Err(SettingsError::Invalid {
                field: "cat_height",
                reason: "must be non-negative",
            });
        }
        // Spawning samples [-size+margin, size-margin]; that range must be non-empty
        if !self.arena_size.is_finite() || self.arena_size <= OBSTACLE_SPAWN_MARGIN {
            return Err(SettingsError::Invalid {
                field: "arena_size",
                reason: "must exceed the obstacle spawn margin",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.num_mice, 8);
        assert_eq!(tuning.num_obstacles, 6);
        assert_eq!(tuning.initial_lives, 3);
        assert_eq!(tuning.game_time, 90.0);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "num_mice": 3, "game_time": 10.0 }"#).unwrap();
        assert_eq!(tuning.num_mice, 3);
        assert_eq!(tuning.game_time, 10.0);
        assert_eq!(tuning.cat_speed, CAT_SPEED);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "mouse_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "mouse_speed", .. }));

        let err = Tuning::from_json(r#"{ "arena_size": 2.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "arena_size", .. }));

        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning {
            num_obstacles: 0,
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
