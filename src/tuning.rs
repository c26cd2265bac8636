//! Data-driven game constants
//!
//! Defaults match the shipped firmware. A JSON override may replace any
//! subset of fields; missing fields keep their defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure to load a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Milliseconds that must elapse between physics steps
    pub step_interval_ms: u64,
    /// Ball position at the start of each session
    pub spawn_pos: Vec2,
    /// Ball velocity at the start of each session (cells per step)
    pub spawn_vel: Vec2,
    /// Horizontal speed forced by a paddle edge hit
    pub paddle_edge_bias: f32,
    /// Full-scale analog reading
    pub analog_max: i32,

    // === Button handling ===
    /// Presses ignored for this long after starting a game
    pub start_holdoff_ms: u64,
    /// Presses ignored for this long after a restart
    pub restart_holdoff_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            step_interval_ms: STEP_INTERVAL_MS,
            spawn_pos: Vec2::new(SPAWN_POS.0, SPAWN_POS.1),
            spawn_vel: Vec2::new(SPAWN_VEL.0, SPAWN_VEL.1),
            paddle_edge_bias: PADDLE_EDGE_BIAS,
            analog_max: ANALOG_MAX,

            start_holdoff_ms: START_HOLDOFF_MS,
            restart_holdoff_ms: RESTART_HOLDOFF_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a template file)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the collision pipeline cannot handle.
    ///
    /// Collision checks assume at most one boundary per axis is crossed in a
    /// step, so no velocity component may exceed one cell.
    pub fn validate(&self) -> Result<(), TuningError> {
        let p = self.spawn_pos;
        if !(p.x >= 0.0 && p.x < GRID_W as f32 && p.y >= 0.0 && p.y < PADDLE_ROW as f32) {
            return Err(TuningError::Invalid("spawn position must be inside the grid above the paddle row"));
        }
        let v = self.spawn_vel;
        if !(v.x.abs() <= 1.0 && v.y.abs() <= 1.0) {
            return Err(TuningError::Invalid("spawn velocity must not exceed one cell per step"));
        }
        if v.y == 0.0 {
            return Err(TuningError::Invalid("spawn velocity needs a vertical component"));
        }
        if !(self.paddle_edge_bias.abs() <= 1.0) {
            return Err(TuningError::Invalid("paddle edge bias must not exceed one cell per step"));
        }
        if self.analog_max <= 0 {
            return Err(TuningError::Invalid("analog_max must be positive"));
        }
        Ok(())
    }
}
