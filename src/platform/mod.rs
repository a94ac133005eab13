//! Platform abstraction layer
//!
//! Handles the window-system side of the game loop:
//! - Input events (key presses, held keys, discrete commands)
//! - Frame timing

pub mod input;
pub mod time;

pub use input::{InputEvent, InputState, SpecialKey};
pub use time::FrameClock;
