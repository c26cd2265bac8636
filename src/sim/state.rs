//! Game state and core simulation types
//!
//! Everything a session needs lives on `GameState`, including the clocks
//! used for time gating. Nothing is kept in statics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::BrickField;
use super::paddle::Paddle;
use crate::cell_of;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Field set up, waiting for the start press
    #[default]
    Waiting,
    /// Ball in motion
    Playing,
    /// Ball went out through the floor
    GameOver,
    /// Every brick destroyed
    Victory,
}

/// Inputs that can move the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fresh press of the action button
    ActionPressed,
    /// Physics reported a floor exit
    BallLost,
    /// Physics destroyed the last brick
    FieldCleared,
}

impl GamePhase {
    /// Transition table. `None` means the trigger is ignored in this phase.
    pub fn on(self, trigger: Trigger) -> Option<GamePhase> {
        use GamePhase::*;
        use Trigger::*;
        match (self, trigger) {
            (Waiting, ActionPressed) => Some(Playing),
            (Playing, BallLost) => Some(GameOver),
            (Playing, FieldCleared) => Some(Victory),
            (GameOver | Victory, ActionPressed) => Some(Waiting),
            _ => None,
        }
    }

    /// Ball frozen and waiting for a restart press
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Cells per physics step
    pub vel: Vec2,
}

impl Ball {
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.spawn_pos,
            vel: tuning.spawn_vel,
        }
    }

    /// Matrix cell the ball is drawn in
    pub fn cell(&self) -> Option<(usize, usize)> {
        cell_of(self.pos.x, self.pos.y)
    }
}

/// Notifications emitted during a poll, for the status display and sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start press accepted
    Started,
    /// Ball bounced off a side wall
    WallBounce,
    /// Ball bounced off the ceiling
    CeilingBounce,
    /// Ball bounced off the paddle; `edge` is set when the angle was forced
    PaddleHit { column: usize, edge: bool },
    /// Brick cleared; `score` is the running total
    BrickDestroyed { col: usize, row: usize, score: u32 },
    GameOver,
    Victory,
    /// Session reset after a restart press
    Reset,
}

/// Elapsed-time gate: fires when strictly more than `interval_ms` has passed
/// since the last firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepClock {
    last_ms: u64,
}

impl StepClock {
    pub fn new(now_ms: u64) -> Self {
        Self { last_ms: now_ms }
    }

    /// Restart the interval from `now_ms`
    pub fn stamp(&mut self, now_ms: u64) {
        self.last_ms = now_ms;
    }

    /// Check the gate and re-arm it if due. A clock that runs backwards is
    /// never due.
    pub fn due(&mut self, now_ms: u64, interval_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_ms) > interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// Rising-edge detector for the action button with a post-press hold-off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionLatch {
    was_pressed: bool,
    ignore_until_ms: u64,
}

impl ActionLatch {
    /// Feed the current level. Returns `true` only on a fresh press outside
    /// the hold-off window.
    pub fn press(&mut self, pressed: bool, now_ms: u64) -> bool {
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        edge && now_ms >= self.ignore_until_ms
    }

    /// Ignore presses for `holdoff_ms` from `now_ms`
    pub fn hold_off(&mut self, now_ms: u64, holdoff_ms: u64) {
        self.ignore_until_ms = now_ms.saturating_add(holdoff_ms);
    }
}

/// Read-only snapshot handed to the renderer each poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub bricks: [[bool; crate::consts::GRID_W]; crate::consts::BRICK_ROWS],
    /// Truncated ball position, `None` if somehow off the matrix
    pub ball: Option<(usize, usize)>,
    pub paddle_x: usize,
    pub paddle_width: usize,
    pub phase: GamePhase,
    pub score: u32,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
    pub bricks: BrickField,
    pub paddle: Paddle,
    pub tuning: Tuning,
    /// Gate for physics steps
    pub step_clock: StepClock,
    pub action: ActionLatch,
    /// Physics steps taken this session
    pub steps: u64,
    /// Events from the most recent poll
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session in `Waiting`, clocks started at `now_ms`
    pub fn new(tuning: Tuning, now_ms: u64) -> Self {
        Self {
            phase: GamePhase::Waiting,
            ball: Ball::spawn(&tuning),
            bricks: BrickField::new(),
            paddle: Paddle::default(),
            step_clock: StepClock::new(now_ms),
            action: ActionLatch::default(),
            steps: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Back to `Waiting` with a full field and the ball on its spawn point.
    /// The paddle is left alone; the next poll recomputes it from input.
    pub fn reset(&mut self, now_ms: u64) {
        self.phase = GamePhase::Waiting;
        self.bricks.initialize();
        self.ball = Ball::spawn(&self.tuning);
        self.step_clock.stamp(now_ms);
        self.steps = 0;
    }

    /// Bricks destroyed this session
    pub fn score(&self) -> u32 {
        self.bricks.destroyed()
    }

    /// Events produced by the most recent `tick`
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn render_model(&self) -> RenderModel {
        RenderModel {
            bricks: *self.bricks.rows(),
            ball: self.ball.cell(),
            paddle_x: self.paddle.x,
            paddle_width: crate::consts::PADDLE_WIDTH,
            phase: self.phase,
            score: self.score(),
        }
    }
}
