//! Input state tracking for the keyboard
//!
//! Turns raw key events into a queryable held-key snapshot for the tick
//! plus discrete commands (reset, quit, camera orbit).

use crate::sim::{Command, TickInput};

const ESCAPE: char = '\u{1b}';

/// Non-character keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    Left,
    Right,
    Up,
    Down,
}

/// A raw event from the window system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(char),
    KeyUp(char),
    Special(SpecialKey),
}

/// Movement keys currently held
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: TickInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event. Returns the command it triggers, if any.
    /// Keys the game does not use are ignored.
    pub fn process(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::KeyDown(key) => {
                let key = key.to_ascii_lowercase();
                match key {
                    'r' => Some(Command::Reset),
                    'f' | ESCAPE => Some(Command::Quit),
                    _ => {
                        self.set_held(key, true);
                        None
                    }
                }
            }
            InputEvent::KeyUp(key) => {
                self.set_held(key.to_ascii_lowercase(), false);
                None
            }
            InputEvent::Special(SpecialKey::Left) => Some(Command::CameraLeft),
            InputEvent::Special(SpecialKey::Right) => Some(Command::CameraRight),
            InputEvent::Special(_) => None,
        }
    }

    /// Snapshot for the next tick
    pub fn held(&self) -> TickInput {
        self.held
    }

    /// Drop every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held = TickInput::default();
    }

    fn set_held(&mut self, key: char, down: bool) {
        match key {
            'w' => self.held.forward = down,
            's' => self.held.back = down,
            'a' => self.held.turn_left = down,
            'd' => self.held.turn_right = down,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_track_down_and_up() {
        let mut input = InputState::new();
        assert_eq!(input.process(InputEvent::KeyDown('w')), None);
        assert_eq!(input.process(InputEvent::KeyDown('A')), None);
        let held = input.held();
        assert!(held.forward && held.turn_left);
        assert!(!held.back && !held.turn_right);

        input.process(InputEvent::KeyUp('W'));
        assert!(!input.held().forward);
        assert!(input.held().turn_left);

        input.release_all();
        assert!(input.held().is_idle());
    }

    #[test]
    fn test_commands() {
        let mut input = InputState::new();
        assert_eq!(input.process(InputEvent::KeyDown('r')), Some(Command::Reset));
        assert_eq!(input.process(InputEvent::KeyDown('F')), Some(Command::Quit));
        assert_eq!(input.process(InputEvent::KeyDown(ESCAPE)), Some(Command::Quit));
        assert_eq!(
            input.process(InputEvent::Special(SpecialKey::Left)),
            Some(Command::CameraLeft)
        );
        assert_eq!(
            input.process(InputEvent::Special(SpecialKey::Right)),
            Some(Command::CameraRight)
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut input = InputState::new();
        assert_eq!(input.process(InputEvent::KeyDown('q')), None);
        assert_eq!(input.process(InputEvent::KeyUp('z')), None);
        assert_eq!(input.process(InputEvent::Special(SpecialKey::Up)), None);
        assert!(input.held().is_idle());
    }
}
