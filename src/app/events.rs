//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log to serial, record in a test.

use crate::fsm::StateId;
use crate::fsm::context::TextBuffer;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The engine has started (carries initial state).
    Started(StateId),

    /// The engine transitioned between states.
    StateChanged { from: StateId, to: StateId },

    /// A completed character was appended to the text.
    CharacterCommitted { code: u8, len: usize },

    /// A completed character was discarded because the text is full.
    CharacterDropped { code: u8 },

    /// The text buffer was emptied.
    TextCleared,

    /// The current text, re-emitted on request.
    TextEmitted(TextBuffer),
}

/// A point-in-time view of the engine, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub state: StateId,
    pub last_state: StateId,
    pub bit_buffer: u8,
    pub bit_index: u8,
    pub text_len: usize,
    pub standby_hold_count: u32,
    pub total_ticks: u64,
}
