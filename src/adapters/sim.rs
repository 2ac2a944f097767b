//! Host-side simulation adapters.
//!
//! - [`SimButtons`]: a latched-edge button source driven by test code or
//!   a script.
//! - [`RecordingLeds`]: remembers the last output written to each LED.
//! - [`RecordingSink`]: collects every emitted [`AppEvent`].
//! - [`Step`] / [`parse_script`] / [`run_script`]: a tiny whitespace
//!   separated script language used by the `bitpad-sim` binary.
//!
//! ```text
//!   A B C D        tap a button (edge latched, level unchanged), one tick
//!   wait:N         N ticks with no input
//!   hold:AB:N      hold the listed buttons for N ticks, then release
//! ```

use crate::app::events::AppEvent;
use crate::app::ports::{ButtonId, ButtonSource, EventSink, LedId, LedSink};
use crate::app::service::AppService;
use crate::error::{Error, Result};
use crate::fsm::context::LedOutput;

use super::hardware::HardwareAdapter;

// ───────────────────────────────────────────────────────────────
// Buttons
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone)]
pub struct SimButtons {
    held: [bool; 4],
    latched: [bool; 4],
}

impl SimButtons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press and keep holding.  Latches an edge if the button was up.
    pub fn press(&mut self, id: ButtonId) {
        let i = id.index();
        if !self.held[i] {
            self.latched[i] = true;
        }
        self.held[i] = true;
    }

    pub fn release(&mut self, id: ButtonId) {
        self.held[id.index()] = false;
    }

    /// A press and release that both happened between two ticks.
    pub fn tap(&mut self, id: ButtonId) {
        self.latched[id.index()] = true;
    }

    /// Change the level without latching an edge.
    pub fn set_level(&mut self, id: ButtonId, held: bool) {
        self.held[id.index()] = held;
    }

    pub fn pending_edges(&self) -> usize {
        self.latched.iter().filter(|&&l| l).count()
    }
}

impl ButtonSource for SimButtons {
    fn is_held(&mut self, id: ButtonId) -> bool {
        self.held[id.index()]
    }

    fn peek_edge(&mut self, id: ButtonId) -> bool {
        self.latched[id.index()]
    }

    fn take_edge(&mut self, id: ButtonId) -> bool {
        core::mem::take(&mut self.latched[id.index()])
    }
}

// ───────────────────────────────────────────────────────────────
// LEDs
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone)]
pub struct RecordingLeds {
    outputs: [Option<LedOutput>; 4],
    /// Total port calls received.
    pub writes: u64,
}

impl RecordingLeds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last output written to `id`, if any.
    pub fn output(&self, id: LedId) -> Option<LedOutput> {
        self.outputs[id.index()]
    }
}

impl LedSink for RecordingLeds {
    fn set_digital(&mut self, id: LedId, on: bool) {
        self.outputs[id.index()] = Some(LedOutput::Digital(on));
        self.writes += 1;
    }

    fn set_brightness(&mut self, id: LedId, percent: u8) {
        self.outputs[id.index()] = Some(LedOutput::Brightness(percent));
        self.writes += 1;
    }
}

/// Simulated board: scripted buttons plus recording LEDs.
pub type SimBoard = HardwareAdapter<SimButtons, RecordingLeds>;

// ───────────────────────────────────────────────────────────────
// Events
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

/// Forwards every event to two sinks.
pub struct Tee<'a, A, B>(pub &'a mut A, pub &'a mut B);

impl<A: EventSink, B: EventSink> EventSink for Tee<'_, A, B> {
    fn emit(&mut self, event: &AppEvent) {
        self.0.emit(event);
        self.1.emit(event);
    }
}

// ───────────────────────────────────────────────────────────────
// Script
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Tap(ButtonId),
    Wait(u32),
    Hold { buttons: [bool; 4], ticks: u32 },
}

fn parse_button(c: char) -> Result<ButtonId> {
    match c.to_ascii_uppercase() {
        'A' => Ok(ButtonId::A),
        'B' => Ok(ButtonId::B),
        'C' => Ok(ButtonId::C),
        'D' => Ok(ButtonId::D),
        _ => Err(Error::Script("button must be one of A, B, C, D")),
    }
}

fn parse_ticks(s: &str) -> Result<u32> {
    s.parse()
        .map_err(|_| Error::Script("tick count must be a non-negative integer"))
}

pub fn parse_script(script: &str) -> Result<Vec<Step>> {
    script.split_whitespace().map(parse_step).collect()
}

fn parse_step(token: &str) -> Result<Step> {
    let mut parts = token.split(':');
    let head = parts.next().unwrap_or_default();
    let step = match head.to_ascii_lowercase().as_str() {
        "wait" => {
            let n = parts.next().ok_or(Error::Script("wait needs a tick count"))?;
            Step::Wait(parse_ticks(n)?)
        }
        "hold" => {
            let names = parts.next().ok_or(Error::Script("hold needs buttons"))?;
            let n = parts.next().ok_or(Error::Script("hold needs a tick count"))?;
            if names.is_empty() {
                return Err(Error::Script("hold needs buttons"));
            }
            let mut buttons = [false; 4];
            for c in names.chars() {
                buttons[parse_button(c)?.index()] = true;
            }
            Step::Hold {
                buttons,
                ticks: parse_ticks(n)?,
            }
        }
        _ => {
            let mut chars = head.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Step::Tap(parse_button(c)?),
                _ => return Err(Error::Script("unknown token")),
            }
        }
    };
    if parts.next().is_some() {
        return Err(Error::Script("too many ':' fields"));
    }
    Ok(step)
}

/// Drive `app` through `steps`, one tick per tap.
pub fn run_script(
    steps: &[Step],
    app: &mut AppService,
    board: &mut SimBoard,
    sink: &mut impl EventSink,
) {
    for step in steps {
        match *step {
            Step::Tap(id) => {
                board.buttons.tap(id);
                app.tick(board, sink);
            }
            Step::Wait(ticks) => {
                for _ in 0..ticks {
                    app.tick(board, sink);
                }
            }
            Step::Hold { buttons, ticks } => {
                let held = ButtonId::ALL.into_iter().filter(|id| buttons[id.index()]);
                for id in held.clone() {
                    board.buttons.press(id);
                }
                for _ in 0..ticks {
                    app.tick(board, sink);
                }
                for id in held {
                    board.buttons.release(id);
                }
            }
        }
    }
}
