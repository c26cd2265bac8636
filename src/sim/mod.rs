//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module draws or touches
//! hardware:
//! - Time only enters through `TickInput::now_ms`
//! - Physics advances in fixed steps gated by elapsed time
//! - Collision rules run in a fixed order

pub mod bricks;
pub mod collision;
pub mod paddle;
pub mod state;
pub mod tick;

pub use bricks::BrickField;
pub use collision::{Contact, PIPELINE, Resolution, StepReport, step_ball};
pub use paddle::Paddle;
pub use state::{Ball, GameEvent, GamePhase, GameState, RenderModel, Trigger};
pub use tick::{TickInput, tick};
