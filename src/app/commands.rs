//! Inbound commands to the application service.
//!
//! These represent actions requested from outside the button/LED loop
//! (a debug console, a test harness) that the
//! [`AppService`](super::service::AppService) interprets and acts upon.

use crate::config::EngineConfig;
use crate::fsm::StateId;

#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Force the engine into a specific state (debug / testing only).
    /// Forcing Standby records the current state as the resume target.
    ForceState(StateId),

    /// Empty the text buffer without changing state.
    ClearText,

    /// Emit the current text through the event sink.
    EmitText,

    /// Hot-reload timing configuration.  Rejected if invalid.
    UpdateConfig(EngineConfig),
}
