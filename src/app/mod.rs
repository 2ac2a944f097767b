//! Application core — engine orchestration, zero I/O.
//!
//! [`service::AppService`] is the host-loop contract: construct it once,
//! call `start` once, then `tick` at the fixed cadence.  All interaction
//! with buttons, LEDs and the console happens through the **port traits**
//! in [`ports`], keeping this layer fully testable without hardware.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
