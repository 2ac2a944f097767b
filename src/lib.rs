//! Bitpad library.
//!
//! A tick-driven state machine that turns taps on four buttons into
//! 8-bit characters, with status LEDs and a dual-button Standby mode.
//! Hardware is reached only through the port traits in [`app::ports`];
//! [`adapters`] holds embedded-hal, logging and host-simulation
//! implementations of them.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;

pub use app::service::AppService;
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use fsm::StateId;
