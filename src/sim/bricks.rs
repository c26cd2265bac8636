//! Destructible brick field
//!
//! Three rows of bricks across the top of the matrix. A brick is cleared at
//! most once per session; only a full re-initialise brings it back.

use serde::{Deserialize, Serialize};

use crate::consts::{BRICK_COUNT, BRICK_ROWS, GRID_W};

/// Brick grid indexed `[row][col]`, `true` = intact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickField {
    cells: [[bool; GRID_W]; BRICK_ROWS],
    remaining: u32,
}

impl Default for BrickField {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickField {
    /// Full field, every brick intact
    pub fn new() -> Self {
        Self {
            cells: [[true; GRID_W]; BRICK_ROWS],
            remaining: BRICK_COUNT,
        }
    }

    /// Restore every brick
    pub fn initialize(&mut self) {
        *self = Self::new();
    }

    /// Whether `(col, row)` holds an intact brick. Cells outside the field never do.
    #[inline]
    pub fn is_intact(&self, col: usize, row: usize) -> bool {
        row < BRICK_ROWS && col < GRID_W && self.cells[row][col]
    }

    /// Clear the brick at `(col, row)`.
    ///
    /// Returns `true` when this was the last brick. Already-cleared cells are
    /// left alone; coordinates outside the field are ignored.
    pub fn destroy(&mut self, col: usize, row: usize) -> bool {
        debug_assert!(
            row < BRICK_ROWS && col < GRID_W,
            "brick ({col}, {row}) outside field"
        );
        if !self.is_intact(col, row) {
            return false;
        }
        self.cells[row][col] = false;
        self.remaining -= 1;
        self.remaining == 0
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Bricks cleared so far (the score)
    #[inline]
    pub fn destroyed(&self) -> u32 {
        BRICK_COUNT - self.remaining
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.remaining == 0
    }

    /// Read-only view for rendering
    pub fn rows(&self) -> &[[bool; GRID_W]; BRICK_ROWS] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_full() {
        let field = BrickField::new();
        assert_eq!(field.remaining(), 36);
        assert_eq!(field.destroyed(), 0);
        assert!(field.rows().iter().flatten().all(|&b| b));
    }

    #[test]
    fn test_destroy_clears_once() {
        let mut field = BrickField::new();
        assert!(!field.destroy(3, 1));
        assert!(!field.is_intact(3, 1));
        assert_eq!(field.remaining(), 35);

        // Second hit on the same cell is a no-op
        assert!(!field.destroy(3, 1));
        assert_eq!(field.remaining(), 35);
    }

    #[test]
    fn test_last_brick_reports_cleared() {
        let mut field = BrickField::new();
        let mut cleared = Vec::new();
        for row in 0..BRICK_ROWS {
            for col in 0..GRID_W {
                cleared.push(field.destroy(col, row));
            }
        }
        assert_eq!(cleared.iter().filter(|&&c| c).count(), 1);
        assert!(*cleared.last().unwrap());
        assert!(field.is_cleared());
        assert_eq!(field.destroyed(), 36);
    }

    #[test]
    fn test_initialize_restores() {
        let mut field = BrickField::new();
        field.destroy(0, 0);
        field.destroy(11, 2);
        field.initialize();
        assert_eq!(field, BrickField::new());
    }

    #[test]
    fn test_is_intact_outside_field() {
        let field = BrickField::new();
        assert!(!field.is_intact(12, 0));
        assert!(!field.is_intact(0, 3));
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_destroy_outside_field_is_ignored() {
        let mut field = BrickField::new();
        assert!(!field.destroy(0, 5));
        assert_eq!(field.remaining(), 36);
    }
}
