//! Ball physics: one step through an ordered collision pipeline
//!
//! Each step proposes `next = pos + vel` and hands it to the checks in a
//! fixed order: side walls, ceiling, floor, paddle, bricks. Later checks see
//! the `next` already corrected by earlier ones. Reflection is resolved one
//! axis at a time; with at most one cell of travel per step a ball can cross
//! only one boundary per axis, so no swept test is needed.

use glam::Vec2;

use super::bricks::BrickField;
use super::paddle::Paddle;
use super::state::{Ball, GamePhase};
use crate::consts::{GRID_H, GRID_W, PADDLE_ROW};

/// Ball motion for the step being resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Candidate position, corrected by each check
    pub next: Vec2,
}

impl Motion {
    pub fn new(ball: &Ball) -> Self {
        Self {
            pos: ball.pos,
            vel: ball.vel,
            next: ball.pos + ball.vel,
        }
    }

    fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
        self.next.x = self.pos.x + self.vel.x;
    }

    fn reflect_y(&mut self) {
        self.vel.y = -self.vel.y;
        self.next.y = self.pos.y + self.vel.y;
    }
}

/// The world the ball collides with
pub struct Arena<'a> {
    pub paddle: &'a Paddle,
    pub bricks: &'a mut BrickField,
    /// Horizontal speed forced by a paddle edge hit
    pub edge_bias: f32,
}

/// What the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Wall,
    Ceiling,
    Paddle { column: usize, edge: bool },
    Brick { col: usize, row: usize },
}

/// Outcome of a single collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing hit
    Clear,
    /// Velocity corrected
    Bounce(Contact),
    /// Phase change requested
    Transition {
        phase: GamePhase,
        contact: Option<Contact>,
    },
}

/// A named collision rule
pub type Check = fn(&mut Motion, &mut Arena<'_>) -> Resolution;

/// Collision rules in resolution order
pub const PIPELINE: [(&str, Check); 5] = [
    ("side_walls", side_walls),
    ("ceiling", ceiling),
    ("floor", floor),
    ("paddle", paddle),
    ("bricks", bricks),
];

/// Side walls: single reflection of the horizontal component
pub fn side_walls(m: &mut Motion, _arena: &mut Arena<'_>) -> Resolution {
    if m.next.x < 0.0 || m.next.x >= GRID_W as f32 {
        m.reflect_x();
        return Resolution::Bounce(Contact::Wall);
    }
    Resolution::Clear
}

pub fn ceiling(m: &mut Motion, _arena: &mut Arena<'_>) -> Resolution {
    if m.next.y < 0.0 {
        m.reflect_y();
        return Resolution::Bounce(Contact::Ceiling);
    }
    Resolution::Clear
}

/// Floor exit ends the game
pub fn floor(m: &mut Motion, _arena: &mut Arena<'_>) -> Resolution {
    if m.next.y >= GRID_H as f32 {
        return Resolution::Transition {
            phase: GamePhase::GameOver,
            contact: None,
        };
    }
    Resolution::Clear
}

/// Paddle bounce for a descending ball reaching the paddle row.
///
/// Edge columns override the horizontal speed rather than adding to it.
pub fn paddle(m: &mut Motion, arena: &mut Arena<'_>) -> Resolution {
    if m.vel.y <= 0.0 || m.next.y < PADDLE_ROW as f32 || m.next.x < 0.0 {
        return Resolution::Clear;
    }
    let column = m.next.x as usize;
    let paddle = arena.paddle;
    if !paddle.covers(column) {
        return Resolution::Clear;
    }

    let mut edge = true;
    if paddle.is_left_edge(column) {
        m.vel.x = -arena.edge_bias;
    } else if paddle.is_right_edge(column) {
        m.vel.x = arena.edge_bias;
    } else {
        edge = false;
    }
    m.reflect_y();
    Resolution::Bounce(Contact::Paddle { column, edge })
}

/// Brick hit: clear the cell and bounce vertically. `next` stays in the
/// brick cell; the flipped velocity carries the ball out on the next step.
pub fn bricks(m: &mut Motion, arena: &mut Arena<'_>) -> Resolution {
    if m.next.x < 0.0 || m.next.y < 0.0 {
        return Resolution::Clear;
    }
    let (col, row) = (m.next.x as usize, m.next.y as usize);
    if !arena.bricks.is_intact(col, row) {
        return Resolution::Clear;
    }

    let cleared = arena.bricks.destroy(col, row);
    m.vel.y = -m.vel.y;
    let contact = Contact::Brick { col, row };
    if cleared {
        Resolution::Transition {
            phase: GamePhase::Victory,
            contact: Some(contact),
        }
    } else {
        Resolution::Bounce(contact)
    }
}

/// Result of one physics step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Contacts in pipeline order
    pub contacts: Vec<Contact>,
    /// Phase change requested by the pipeline
    pub transition: Option<GamePhase>,
}

/// Advance the ball one step.
///
/// A floor exit stops the pipeline and leaves the ball untouched. Every
/// other outcome, including clearing the last brick, commits `next`.
pub fn step_ball(ball: &mut Ball, arena: &mut Arena<'_>) -> StepReport {
    let mut motion = Motion::new(ball);
    let mut report = StepReport::default();

    for (name, check) in PIPELINE {
        match check(&mut motion, arena) {
            Resolution::Clear => {}
            Resolution::Bounce(contact) => {
                log::trace!("{name}: {contact:?}");
                report.contacts.push(contact);
            }
            Resolution::Transition { phase, contact } => {
                log::trace!("{name}: transition to {phase:?}");
                report.contacts.extend(contact);
                report.transition = Some(phase);
                if phase == GamePhase::GameOver {
                    return report;
                }
            }
        }
    }

    debug_assert!(
        motion.next.x >= 0.0
            && motion.next.x < GRID_W as f32
            && motion.next.y >= 0.0
            && motion.next.y < GRID_H as f32,
        "ball left the grid: {:?}",
        motion.next
    );
    ball.pos = motion.next;
    ball.vel = motion.vel;
    report
}
