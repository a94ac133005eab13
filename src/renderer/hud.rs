//! HUD text layout
//!
//! Screen-space text in pixels, origin at the bottom-left corner.

use super::Viewport;
use crate::sim::GameState;

const LEFT: f32 = 12.0;
const FIRST_LINE: f32 = 28.0;
const LINE_SPACING: f32 = 24.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Whole seconds left, rounded toward zero
pub fn seconds_left(time_left: f32) -> i32 {
    time_left.trunc() as i32
}

/// Score, lives and clock down the top-left corner, plus a centered
/// banner once the game is over
pub fn hud_lines(state: &GameState, viewport: &Viewport) -> Vec<HudLine> {
    let height = viewport.height as f32;
    let texts = [
        format!("Score: {}", state.score),
        format!("Lives: {}", state.lives),
        format!("Time: {}s", seconds_left(state.time_left)),
    ];

    let mut lines: Vec<HudLine> = texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| HudLine {
            x: LEFT,
            y: height - FIRST_LINE - i as f32 * LINE_SPACING,
            text,
        })
        .collect();

    if state.is_game_over() {
        let text = format!("GAME OVER - {} caught - press R to play again", state.score);
        lines.push(HudLine {
            x: (viewport.width as f32 / 2.0 - 180.0).max(LEFT),
            y: height / 2.0,
            text,
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_hud_layout() {
        let mut state = GameState::with_seed(1);
        state.score = 4;
        state.time_left = 41.9;
        let lines = hud_lines(&state, &Viewport::new(1000, 700));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "Score: 4");
        assert_eq!(lines[0].y, 672.0);
        assert_eq!(lines[1].text, "Lives: 3");
        assert_eq!(lines[1].y, 648.0);
        assert_eq!(lines[2].text, "Time: 41s");
        assert_eq!(lines[2].y, 624.0);
    }

    #[test]
    fn test_game_over_banner_and_negative_clock() {
        let mut state = GameState::with_seed(1);
        state.time_left = -0.03;
        state.phase = GamePhase::GameOver;
        let lines = hud_lines(&state, &Viewport::new(1000, 700));
        assert_eq!(lines[2].text, "Time: 0s");
        assert_eq!(lines.len(), 4);
        assert!(lines[3].text.starts_with("GAME OVER"));
    }
}
