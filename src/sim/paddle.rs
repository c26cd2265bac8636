//! Paddle driven by the analog knob
//!
//! The knob is mounted mirrored, so a low reading puts the paddle on the
//! right edge of the matrix.

use serde::{Deserialize, Serialize};

use crate::consts::{ANALOG_MAX, PADDLE_MAX_X, PADDLE_WIDTH};

/// The player's paddle on the bottom row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Leftmost column covered
    pub x: usize,
}

impl Default for Paddle {
    fn default() -> Self {
        Self { x: PADDLE_MAX_X / 2 }
    }
}

impl Paddle {
    /// Position the paddle from a raw analog sample with a 0..=1023 range
    pub fn update(&mut self, raw: i32) {
        self.update_scaled(raw, ANALOG_MAX);
    }

    /// Position the paddle from a raw sample with a `0..=analog_max` range.
    ///
    /// Integer mapping truncates toward zero, then the column is clamped, so
    /// any reading (including negative or over-range) lands on the matrix.
    pub fn update_scaled(&mut self, raw: i32, analog_max: i32) {
        let max_x = PADDLE_MAX_X as i64;
        let in_max = i64::from(analog_max.max(1));
        // map(raw, 0, in_max, max_x, 0)
        let mapped = (i64::from(raw) * -max_x) / in_max + max_x;
        self.x = mapped.clamp(0, max_x) as usize;
    }

    /// Columns covered, `x..x + PADDLE_WIDTH`
    #[inline]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.x..self.x + PADDLE_WIDTH
    }

    #[inline]
    pub fn covers(&self, col: usize) -> bool {
        self.span().contains(&col)
    }

    #[inline]
    pub fn is_left_edge(&self, col: usize) -> bool {
        col == self.x
    }

    #[inline]
    pub fn is_right_edge(&self, col: usize) -> bool {
        col == self.x + PADDLE_WIDTH - 1
    }
}
