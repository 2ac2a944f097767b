//! Port traits — the hexagonal boundary between the engine and the device.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (buttons, LEDs, event sinks) implement these traits.
//! The [`AppService`](super::service::AppService) and the state handlers
//! consume them via generics, so the engine never touches GPIO directly.

use crate::error::Error;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Logical ids
// ───────────────────────────────────────────────────────────────

/// The four logical buttons.  Their meaning depends on the active state:
///
/// | Button | Input          | Menu        | Saved       | Standby |
/// |--------|----------------|-------------|-------------|---------|
/// | `A`    | enter bit 0    | back        | —           | wake    |
/// | `B`    | enter bit 1    | back        | —           | wake    |
/// | `C`    | abort char     | clear text  | clear text  | wake    |
/// | `D`    | force complete | save        | re-emit     | wake    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ButtonId {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl ButtonId {
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for ButtonId {
    type Error = Error;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        match idx {
            0 => Ok(Self::A),
            1 => Ok(Self::B),
            2 => Ok(Self::C),
            3 => Ok(Self::D),
            other => Err(Error::InvalidButton(other)),
        }
    }
}

/// The four logical LEDs.  `Led0`/`Led1` mirror buttons A/B during bit
/// entry, `Led3` is the blinking status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LedId {
    Led0 = 0,
    Led1 = 1,
    Led2 = 2,
    Led3 = 3,
}

impl LedId {
    pub const ALL: [Self; 4] = [Self::Led0, Self::Led1, Self::Led2, Self::Led3];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for LedId {
    type Error = Error;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        match idx {
            0 => Ok(Self::Led0),
            1 => Ok(Self::Led1),
            2 => Ok(Self::Led2),
            3 => Ok(Self::Led3),
            other => Err(Error::InvalidLed(other)),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Button port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: level and latched rising-edge queries per button.
pub trait ButtonSource {
    /// Is the button currently pressed?  Idempotent.
    fn is_held(&mut self, id: ButtonId) -> bool;

    /// Is a rising edge latched?  Does not clear the latch.
    fn peek_edge(&mut self, id: ButtonId) -> bool;

    /// Return and clear the latched rising edge.  True at most once per
    /// physical press.
    fn take_edge(&mut self, id: ButtonId) -> bool;
}

// ───────────────────────────────────────────────────────────────
// LED port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: fire-and-forget LED output.
pub trait LedSink {
    /// Drive the LED fully on or off.
    fn set_digital(&mut self, id: LedId, on: bool);

    /// Drive the LED at `percent` brightness (0–100).
    fn set_brightness(&mut self, id: LedId, percent: u8);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / console)
// ───────────────────────────────────────────────────────────────

/// The engine emits structured [`AppEvent`]s through this port.  Adapters
/// decide where they go (serial log, test recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
