//! Block Breaker headless demo
//!
//! Runs one session on a simulated clock with an autopilot on the paddle
//! knob and draws the matrix and status display in the terminal.
//!
//! Usage: `block-breaker [TUNING.json | --print-tuning]`

use std::io::Write;

use block_breaker::consts::PADDLE_MAX_X;
use block_breaker::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use block_breaker::{Frame, MatrixDisplay, StatusLines, TextDisplay, Tuning, compose, hud};

/// Firmware loop period being simulated
const POLL_MS: u64 = 20;
/// Give up after this many polls (about ten minutes of play)
const MAX_POLLS: u64 = 30_000;

/// Terminal stand-in for the LED matrix and character display
struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> MatrixDisplay for Terminal<W> {
    fn render_bitmap(&mut self, frame: &Frame) {
        for row in frame.0.iter() {
            let line: String = row.iter().map(|&p| if p != 0 { '#' } else { '.' }).collect();
            let _ = writeln!(self.out, "  {line}");
        }
    }
}

impl<W: Write> TextDisplay for Terminal<W> {
    fn show(&mut self, lines: &StatusLines) {
        let _ = writeln!(self.out, "  +----------------+");
        let _ = writeln!(self.out, "  |{}|", lines.top);
        let _ = writeln!(self.out, "  |{}|", lines.bottom);
        let _ = writeln!(self.out, "  +----------------+");
    }
}

/// Knob reading that puts the paddle centre under the ball
fn autopilot(state: &GameState, analog_max: i32) -> i32 {
    let max_x = PADDLE_MAX_X as i32;
    let target = (state.ball.pos.x as i32 - 1).clamp(0, max_x);
    // Inverse of the paddle mapping, rounded up so truncation lands on `target`
    ((max_x - target) * analog_max + max_x - 1) / max_x
}

fn load_tuning() -> Option<Tuning> {
    let Some(arg) = std::env::args().nth(1) else {
        return Some(Tuning::default());
    };

    if arg == "--print-tuning" {
        match Tuning::default().to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize tuning: {e}"),
        }
        return None;
    }

    match std::fs::read_to_string(&arg).map_err(|e| e.to_string()).and_then(|json| {
        Tuning::from_json(&json).map_err(|e| e.to_string())
    }) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {arg}");
            Some(tuning)
        }
        Err(e) => {
            log::warn!("Ignoring tuning file {arg}: {e}");
            Some(Tuning::default())
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Block Breaker (headless) starting...");

    let Some(tuning) = load_tuning() else {
        return;
    };
    let analog_max = tuning.analog_max;

    let mut term = Terminal {
        out: std::io::stdout().lock(),
    };
    term.show(&hud::intro());

    let mut now = 0;
    let mut state = GameState::new(tuning, now);
    term.show(&hud::status_lines(&state));
    term.render_bitmap(&compose(&state.render_model()));

    for poll in 0..MAX_POLLS {
        now += POLL_MS;
        let input = TickInput {
            now_ms: now,
            analog: autopilot(&state, analog_max),
            // Tap the button once to launch
            action: poll == 5,
        };
        let steps_before = state.steps;
        tick(&mut state, &input);

        let scored = state
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::BrickDestroyed { .. } | GameEvent::Started));
        if scored {
            term.show(&hud::status_lines(&state));
        }
        if state.steps != steps_before {
            let _ = writeln!(term.out, "  step {}", state.steps);
            term.render_bitmap(&compose(&state.render_model()));
        }

        if state.phase.is_finished() {
            term.show(&hud::status_lines(&state));
            term.render_bitmap(&compose(&state.render_model()));
            break;
        }
    }

    match state.phase {
        GamePhase::Victory => log::info!("Cleared the field in {} steps", state.steps),
        GamePhase::GameOver => log::info!("Ball lost with score {}", state.score()),
        phase => log::warn!("Stopped in {phase:?} after {MAX_POLLS} polls"),
    }

    // Blank the matrix on exit, like leaving the game menu
    term.render_bitmap(&Frame::blank());
}
