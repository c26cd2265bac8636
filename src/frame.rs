//! Bitmap composition for the 12x8 LED matrix
//!
//! Turns a `RenderModel` into the one-byte-per-pixel frame the matrix driver
//! expects. End-of-game screens replace the playfield with an icon.

use bytemuck::{Pod, Zeroable};

use crate::consts::{BRICK_ROWS, GRID_H, GRID_W, PADDLE_ROW};
use crate::sim::{GamePhase, RenderModel};

/// Smiley shown on victory, `(row, col)`
const SMILEY: [(usize, usize); 8] = [
    (2, 3),
    (2, 8),
    (5, 3),
    (6, 4),
    (6, 5),
    (6, 6),
    (6, 7),
    (5, 8),
];

/// Cross shown on game over, `(row, col)`
const CROSS: [(usize, usize); 10] = [
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 5),
    (5, 6),
    (5, 2),
    (4, 3),
    (3, 4),
    (2, 5),
    (1, 6),
];

/// Matrix bitmap indexed `[row][col]`, 1 = lit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct Frame(pub [[u8; GRID_W]; GRID_H]);

impl Default for Frame {
    fn default() -> Self {
        Self::blank()
    }
}

impl Frame {
    /// All pixels off
    pub fn blank() -> Self {
        Self::zeroed()
    }

    #[inline]
    pub fn set(&mut self, col: usize, row: usize) {
        if row < GRID_H && col < GRID_W {
            self.0[row][col] = 1;
        }
    }

    #[inline]
    pub fn is_lit(&self, col: usize, row: usize) -> bool {
        row < GRID_H && col < GRID_W && self.0[row][col] != 0
    }

    pub fn lit_count(&self) -> usize {
        self.as_bytes().iter().filter(|&&p| p != 0).count()
    }

    /// Row-major bytes, as pushed to the matrix driver
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    fn plot(&mut self, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            self.set(col, row);
        }
    }
}

/// Compose the frame for the current render model
pub fn compose(model: &RenderModel) -> Frame {
    let mut frame = Frame::blank();

    match model.phase {
        GamePhase::Victory => frame.plot(&SMILEY),
        GamePhase::GameOver => frame.plot(&CROSS),
        GamePhase::Waiting | GamePhase::Playing => {
            for (row, bricks) in model.bricks.iter().enumerate().take(BRICK_ROWS) {
                for (col, _) in bricks.iter().enumerate().filter(|(_, intact)| **intact) {
                    frame.set(col, row);
                }
            }

            for col in model.paddle_x..model.paddle_x + model.paddle_width {
                frame.set(col, PADDLE_ROW);
            }

            if let Some((col, row)) = model.ball {
                frame.set(col, row);
            }
        }
    }

    frame
}

/// Anything that can show a matrix frame (the LED driver, a terminal, ...)
pub trait MatrixDisplay {
    fn render_bitmap(&mut self, frame: &Frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn model(phase: GamePhase) -> RenderModel {
        let mut state = GameState::new(Tuning::default(), 0);
        state.phase = phase;
        state.paddle.x = 4;
        state.render_model()
    }

    #[test]
    fn test_blank_frame() {
        let frame = Frame::blank();
        assert_eq!(frame.lit_count(), 0);
        assert_eq!(frame.as_bytes().len(), GRID_W * GRID_H);
    }

    #[test]
    fn test_playfield() {
        let frame = compose(&model(GamePhase::Waiting));
        // 36 bricks + 3 paddle + ball
        assert_eq!(frame.lit_count(), 40);
        assert!(frame.is_lit(0, 0) && frame.is_lit(11, 2));
        assert!(!frame.is_lit(0, 3));
        assert!(frame.is_lit(4, 7) && frame.is_lit(6, 7));
        assert!(!frame.is_lit(3, 7) && !frame.is_lit(7, 7));
        assert!(frame.is_lit(6, 6));
    }

    #[test]
    fn test_destroyed_brick_is_dark() {
        let mut state = GameState::new(Tuning::default(), 0);
        state.bricks.destroy(5, 1);
        state.ball.pos = Vec2::new(0.5, 4.9);
        let frame = compose(&state.render_model());
        assert!(!frame.is_lit(5, 1));
        assert!(frame.is_lit(0, 4));
    }

    #[test]
    fn test_ball_over_brick_row() {
        let mut state = GameState::new(Tuning::default(), 0);
        state.bricks.destroy(6, 2);
        state.ball.pos = Vec2::new(6.5, 2.5);
        let frame = compose(&state.render_model());
        assert!(frame.is_lit(6, 2));
    }

    #[test]
    fn test_victory_icon() {
        let frame = compose(&model(GamePhase::Victory));
        assert_eq!(frame.lit_count(), SMILEY.len());
        assert!(frame.is_lit(3, 2) && frame.is_lit(8, 2));
        // Playfield not drawn
        assert!(!frame.is_lit(4, 7));
    }

    #[test]
    fn test_game_over_icon() {
        let frame = compose(&model(GamePhase::GameOver));
        // (3, 4) is plotted twice
        assert_eq!(frame.lit_count(), CROSS.len() - 1);
        assert!(frame.is_lit(2, 1) && frame.is_lit(6, 1));
        assert!(frame.is_lit(4, 3));
    }

    #[test]
    fn test_bytes_are_row_major() {
        let mut frame = Frame::blank();
        frame.set(1, 2);
        assert_eq!(frame.as_bytes()[2 * GRID_W + 1], 1);
    }
}
