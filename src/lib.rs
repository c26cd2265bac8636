//! Block Breaker - breakout on a 12x8 LED matrix
//!
//! Core modules:
//! - `sim`: Ball physics, brick field, paddle and the game state machine
//! - `frame`: Render model to bitmap conversion
//! - `hud`: Status text for the 16x2 character display
//! - `tuning`: Data-driven game constants

pub mod frame;
pub mod hud;
pub mod sim;
pub mod tuning;

pub use frame::{Frame, MatrixDisplay, compose};
pub use hud::{StatusLines, TextDisplay};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (LED matrix columns x rows)
    pub const GRID_W: usize = 12;
    pub const GRID_H: usize = 8;

    /// Brick rows occupy the top of the matrix
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COUNT: u32 = (GRID_W * BRICK_ROWS) as u32;

    /// Paddle sits on the bottom row
    pub const PADDLE_WIDTH: usize = 3;
    pub const PADDLE_ROW: usize = GRID_H - 1;
    pub const PADDLE_MAX_X: usize = GRID_W - PADDLE_WIDTH;

    /// Full-scale reading of the 10-bit ADC
    pub const ANALOG_MAX: i32 = 1023;

    /// Milliseconds between physics steps
    pub const STEP_INTERVAL_MS: u64 = 250;

    /// Ball spawn state
    pub const SPAWN_POS: (f32, f32) = (6.0, 6.0);
    pub const SPAWN_VEL: (f32, f32) = (0.5, -1.0);

    /// Horizontal speed forced by a hit on a paddle edge
    pub const PADDLE_EDGE_BIAS: f32 = 0.7;

    /// Button hold-off after a start / restart press
    pub const START_HOLDOFF_MS: u64 = 200;
    pub const RESTART_HOLDOFF_MS: u64 = 500;

    /// Character display width
    pub const LCD_COLS: usize = 16;
}

/// Grid cell containing a continuous position, or `None` when outside the matrix
#[inline]
pub fn cell_of(x: f32, y: f32) -> Option<(usize, usize)> {
    use consts::{GRID_H, GRID_W};
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let (col, row) = (x as usize, y as usize);
    (col < GRID_W && row < GRID_H).then_some((col, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_of_truncates() {
        assert_eq!(cell_of(6.5, 5.0), Some((6, 5)));
        assert_eq!(cell_of(11.99, 7.99), Some((11, 7)));
        assert_eq!(cell_of(0.0, 0.0), Some((0, 0)));
    }

    #[test]
    fn test_cell_of_outside() {
        assert_eq!(cell_of(-0.1, 3.0), None);
        assert_eq!(cell_of(12.0, 3.0), None);
        assert_eq!(cell_of(3.0, 8.0), None);
    }
}
