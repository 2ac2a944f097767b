//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the FSM engine and exposes the host-loop contract.
//! All I/O flows through port traits injected at call sites, making the
//! entire service testable with mock adapters.
//!
//! ```text
//!  ButtonSource ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                   │       AppService        │
//!       LedSink ◀── │  Fsm · EngineContext    │
//!                   └────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::fsm::context::{LedOutput, Notice};
use crate::fsm::{Fsm, StateId, Transition};

use super::commands::AppCommand;
use super::events::{AppEvent, EngineSnapshot};
use super::ports::{ButtonSource, EventSink, LedId, LedSink};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService {
    fsm: Fsm,
}

impl AppService {
    /// Validate `config` and build the engine in `Input`.
    ///
    /// Does **not** run the initial entry action; call [`start`](Self::start)
    /// next.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Ok(Self {
            fsm: Fsm::new(config)?,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Enter the initial state and drive the LEDs to match.  Call exactly
    /// once, before the first [`tick`](Self::tick).
    pub fn start(&mut self, hw: &mut (impl ButtonSource + LedSink), sink: &mut impl EventSink) {
        self.fsm.start(hw);
        self.apply_leds(hw);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("AppService started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one engine step: poll buttons → state update → LEDs → events.
    ///
    /// `hw` satisfies **both** [`ButtonSource`] and [`LedSink`] through a
    /// single `&mut`.
    pub fn tick(&mut self, hw: &mut (impl ButtonSource + LedSink), sink: &mut impl EventSink) {
        let transition = self.fsm.tick(hw);

        self.drain_notice(sink);
        self.apply_leds(hw);

        if let Some(Transition { from, to }) = transition {
            sink.emit(&AppEvent::StateChanged { from, to });
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command.  Only `UpdateConfig` can fail.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        hw: &mut (impl ButtonSource + LedSink),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        match cmd {
            AppCommand::ForceState(target) => {
                if let Some(Transition { from, to }) = self.fsm.force_transition(target, hw) {
                    self.apply_leds(hw);
                    sink.emit(&AppEvent::StateChanged { from, to });
                }
            }
            AppCommand::ClearText => {
                self.fsm.ctx_mut().clear_text();
                sink.emit(&AppEvent::TextCleared);
            }
            AppCommand::EmitText => {
                sink.emit(&AppEvent::TextEmitted(self.fsm.ctx().text.clone()));
            }
            AppCommand::UpdateConfig(new_config) => {
                if let Err(e) = new_config.validate() {
                    warn!("Rejected configuration update: {}", e);
                    return Err(e);
                }
                self.fsm.ctx_mut().apply_config(new_config);
                info!("Configuration updated at runtime");
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// State that Standby will resume.
    pub fn last_state(&self) -> StateId {
        self.fsm.last_state()
    }

    /// Characters stored so far.
    pub fn text(&self) -> &[u8] {
        &self.fsm.ctx().text
    }

    /// Total engine ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.fsm.tick_count()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.fsm.ctx().config
    }

    /// Requested output of one LED after the last tick.
    pub fn led_output(&self, id: LedId) -> LedOutput {
        self.fsm.ctx().commands.get(id)
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let ctx = self.fsm.ctx();
        EngineSnapshot {
            state: ctx.current_state,
            last_state: ctx.last_state,
            bit_buffer: ctx.bit_buffer,
            bit_index: ctx.bit_index,
            text_len: ctx.text.len(),
            standby_hold_count: ctx.hold.count,
            total_ticks: self.fsm.tick_count(),
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate the engine's LED requests into port calls.
    fn apply_leds(&self, leds: &mut impl LedSink) {
        let cmds = &self.fsm.ctx().commands;
        for id in LedId::ALL {
            match cmds.get(id) {
                LedOutput::Digital(on) => leds.set_digital(id, on),
                LedOutput::Brightness(percent) => leds.set_brightness(id, percent),
            }
        }
    }

    fn drain_notice(&mut self, sink: &mut impl EventSink) {
        let Some(notice) = self.fsm.ctx_mut().notice.take() else {
            return;
        };
        let event = match notice {
            Notice::Committed { code, len } => AppEvent::CharacterCommitted { code, len },
            Notice::Dropped { code } => AppEvent::CharacterDropped { code },
            Notice::Cleared => AppEvent::TextCleared,
            Notice::Emitted(text) => AppEvent::TextEmitted(text),
        };
        sink.emit(&event);
    }
}
