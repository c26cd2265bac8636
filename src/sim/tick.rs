//! Poll-driven game loop
//!
//! `tick` is called as often as the firmware loop likes. The paddle follows
//! the knob on every call; the ball only moves when the step interval has
//! elapsed.

use super::collision::{Arena, Contact, step_ball};
use super::state::{GameEvent, GamePhase, GameState, Trigger};

/// Inputs sampled for a single poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Monotonic timestamp (milliseconds)
    pub now_ms: u64,
    /// Raw paddle knob reading
    pub analog: i32,
    /// Action button level (already debounced)
    pub action: bool,
}

/// Advance the session by one poll
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    state
        .paddle
        .update_scaled(input.analog, state.tuning.analog_max);

    let pressed = state.action.press(input.action, input.now_ms);

    match state.phase {
        GamePhase::Waiting => {
            if pressed {
                apply(state, Trigger::ActionPressed, input.now_ms);
            }
        }
        GamePhase::Playing => {
            if state
                .step_clock
                .due(input.now_ms, state.tuning.step_interval_ms)
            {
                physics_step(state, input.now_ms);
            }
        }
        GamePhase::GameOver | GamePhase::Victory => {
            if pressed {
                apply(state, Trigger::ActionPressed, input.now_ms);
            }
        }
    }
}

/// Run the collision pipeline once and feed its outcome to the state machine
fn physics_step(state: &mut GameState, now_ms: u64) {
    let report = {
        let mut arena = Arena {
            paddle: &state.paddle,
            bricks: &mut state.bricks,
            edge_bias: state.tuning.paddle_edge_bias,
        };
        step_ball(&mut state.ball, &mut arena)
    };
    state.steps += 1;

    for contact in &report.contacts {
        let event = match *contact {
            Contact::Wall => GameEvent::WallBounce,
            Contact::Ceiling => GameEvent::CeilingBounce,
            Contact::Paddle { column, edge } => GameEvent::PaddleHit { column, edge },
            Contact::Brick { col, row } => {
                let score = state.score();
                log::debug!("Brick ({col}, {row}) destroyed, score {score}");
                GameEvent::BrickDestroyed { col, row, score }
            }
        };
        state.events.push(event);
    }

    match report.transition {
        Some(GamePhase::GameOver) => apply(state, Trigger::BallLost, now_ms),
        Some(GamePhase::Victory) => apply(state, Trigger::FieldCleared, now_ms),
        _ => {}
    }
}

/// Look up the transition table and perform the entry actions of the new phase
fn apply(state: &mut GameState, trigger: Trigger, now_ms: u64) {
    let Some(next) = state.phase.on(trigger) else {
        return;
    };
    let from = state.phase;

    match next {
        GamePhase::Playing => {
            state.phase = GamePhase::Playing;
            state.step_clock.stamp(now_ms);
            state
                .action
                .hold_off(now_ms, state.tuning.start_holdoff_ms);
            state.events.push(GameEvent::Started);
        }
        GamePhase::GameOver => {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver);
        }
        GamePhase::Victory => {
            state.phase = GamePhase::Victory;
            state.events.push(GameEvent::Victory);
        }
        GamePhase::Waiting => {
            state.reset(now_ms);
            state
                .action
                .hold_off(now_ms, state.tuning.restart_holdoff_ms);
            state.events.push(GameEvent::Reset);
        }
    }

    log::info!(
        "{from:?} -> {next:?} after {} steps, score {}",
        state.steps,
        state.score()
    );
}
