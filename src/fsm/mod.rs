//! Tick-driven finite state machine engine.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Fsm                                                     │
//! │  ┌─────────────┐   tick()   ┌──────────────────────────┐ │
//! │  │ EngineContext│ ────────▶ │ states::on_update(state) │ │
//! │  │  state       │ ◀──────── │   -> Option<StateId>     │ │
//! │  │  blink/hold/ │           └──────────────────────────┘ │
//! │  │  pulse/text  │  transition: states::on_enter(next)    │
//! │  └─────────────┘                                         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Each tick the engine calls the update handler for the **current**
//! state.  If it returns `Some(next_id)`, the engine switches the current
//! state and runs the entry action of the next one.  Handlers receive the
//! owned [`EngineContext`] and the [`ButtonSource`] to poll.

pub mod blink;
pub mod context;
pub mod hold;
pub mod pulse;
pub mod states;

use context::EngineContext;
use log::{info, warn};

use crate::app::ports::ButtonSource;
use crate::config::EngineConfig;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    Input = 0,
    Menu = 1,
    Saved = 2,
    Standby = 3,
}

impl StateId {
    pub const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] = [Self::Input, Self::Menu, Self::Saved, Self::Standby];

    /// Convert an index back to `StateId`.  Panics on out-of-range in
    /// debug builds; returns `Input` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Input,
            1 => Self::Menu,
            2 => Self::Saved,
            3 => Self::Standby,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Input
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Menu => "Menu",
            Self::Saved => "Saved",
            Self::Standby => "Standby",
        }
    }
}

/// A completed state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.  Owns its context; any number of
/// independent engines can coexist.
pub struct Fsm {
    ctx: EngineContext,
    started: bool,
    /// Monotonically increasing tick counter.
    tick_count: u64,
    /// Tick at which the current state was entered.
    state_entry_tick: u64,
}

impl Fsm {
    /// Validate `config` and construct an engine in `Input`.  Call
    /// [`start`](Self::start) before the first [`tick`](Self::tick).
    pub fn new(config: EngineConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self {
            ctx: EngineContext::new(config),
            started: false,
            tick_count: 0,
            state_entry_tick: 0,
        })
    }

    /// Run the entry action of the initial state.
    pub fn start(&mut self, buttons: &mut impl ButtonSource) {
        info!("FSM starting in state: {}", self.ctx.current_state.name());
        states::on_enter(self.ctx.current_state, &mut self.ctx, buttons);
        self.started = true;
    }

    /// Advance the machine by exactly one tick.
    ///
    /// 1. Run the current state's update handler.
    /// 2. If it requests a transition, enter the next state.
    pub fn tick(&mut self, buttons: &mut impl ButtonSource) -> Option<Transition> {
        if !self.started {
            warn!("FSM ticked before start; running initial entry now");
            self.start(buttons);
        }
        self.tick_count += 1;

        let current = self.ctx.current_state;
        let next = states::on_update(current, &mut self.ctx, buttons)?;
        self.transition(next, buttons)
    }

    /// Jump to `next` regardless of what the handlers would do.  Forcing
    /// Standby records the current state as the resume target.
    pub fn force_transition(
        &mut self,
        next: StateId,
        buttons: &mut impl ButtonSource,
    ) -> Option<Transition> {
        if next == self.ctx.current_state {
            return None;
        }
        self.transition(next, buttons)
    }

    pub fn current_state(&self) -> StateId {
        self.ctx.current_state
    }

    pub fn last_state(&self) -> StateId {
        self.ctx.last_state
    }

    /// Ticks executed since start.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// How many ticks the FSM has been in the current state.
    pub fn ticks_in_current_state(&self) -> u64 {
        self.tick_count - self.state_entry_tick
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub(crate) fn ctx_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next: StateId, buttons: &mut impl ButtonSource) -> Option<Transition> {
        let from = self.ctx.current_state;
        if next == from {
            return None;
        }

        info!("FSM transition: {} -> {}", from.name(), next.name());

        // Only non-Standby states get here as `from` when entering Standby.
        if next == StateId::Standby {
            self.ctx.last_state = from;
        }
        self.ctx.current_state = next;
        self.state_entry_tick = self.tick_count;
        states::on_enter(next, &mut self.ctx, buttons);

        Some(Transition { from, to: next })
    }
}
