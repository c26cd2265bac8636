//! Status text for the 16x2 character display
//!
//! Every line is padded to the display width so a redraw overwrites the
//! previous text completely.

use crate::consts::LCD_COLS;
use crate::sim::{GamePhase, GameState};

/// Two display lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLines {
    pub top: String,
    pub bottom: String,
}

impl StatusLines {
    pub fn new(top: &str, bottom: &str) -> Self {
        Self {
            top: fit(top),
            bottom: fit(bottom),
        }
    }
}

/// Pad or cut to exactly `LCD_COLS` characters
fn fit(text: &str) -> String {
    format!("{:<width$.width$}", text, width = LCD_COLS)
}

/// Title card shown while the game is being selected
pub fn intro() -> StatusLines {
    StatusLines::new("BRICK", "BREAKER")
}

/// Lines for the current session
pub fn status_lines(state: &GameState) -> StatusLines {
    let score = format!("Score: {}", state.score());
    match state.phase {
        GamePhase::Waiting => StatusLines::new(&score, "Press Jump/Start"),
        GamePhase::Playing => StatusLines::new(&score, "Running..."),
        GamePhase::GameOver => StatusLines::new("GAME OVER!", "Btn to Restart"),
        GamePhase::Victory => StatusLines::new("YOU WIN!", ""),
    }
}

/// Anything that can show the status lines
pub trait TextDisplay {
    fn show(&mut self, lines: &StatusLines);
}
