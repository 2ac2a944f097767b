//! embedded-hal GPIO/PWM adapters.
//!
//! ## Buttons
//!
//! [`GpioButtons`] wraps four `InputPin`s.  The host loop calls
//! [`sample`](GpioButtons::sample) once per tick, before
//! `AppService::tick`; a released→pressed change between two samples
//! latches an edge that stays set until a state handler takes it.
//! Debouncing is the board's job (RC filter or a debounced pin driver).
//!
//! ## LEDs
//!
//! [`PwmLeds`] drives four `SetDutyCycle` channels, so Standby can pulse.
//! [`GpioLeds`] drives four plain `OutputPin`s; brightness requests are
//! thresholded at 50 %.
//!
//! Pin errors are logged and otherwise ignored: LED output is
//! fire-and-forget, and a failed button read counts as released.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::{ButtonId, ButtonSource, LedId, LedSink};

/// Electrical level that means "pressed" / "lit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    High,
    Low,
}

// ───────────────────────────────────────────────────────────────
// Buttons
// ───────────────────────────────────────────────────────────────

pub struct GpioButtons<P> {
    pins: [P; 4],
    active: ActiveLevel,
    held: [bool; 4],
    latched: [bool; 4],
}

impl<P: InputPin> GpioButtons<P> {
    /// `pins` are indexed by [`ButtonId`]: A, B, C, D.
    pub fn new(pins: [P; 4], active: ActiveLevel) -> Self {
        Self {
            pins,
            active,
            held: [false; 4],
            latched: [false; 4],
        }
    }

    /// Read every pin once and latch rising edges.
    pub fn sample(&mut self) {
        for id in ButtonId::ALL {
            let i = id.index();
            let pressed = match self.active {
                ActiveLevel::High => self.pins[i].is_high(),
                ActiveLevel::Low => self.pins[i].is_low(),
            }
            .unwrap_or_else(|e| {
                warn!("button {:?}: read failed ({:?}), treating as released", id, e);
                false
            });
            if pressed && !self.held[i] {
                self.latched[i] = true;
            }
            self.held[i] = pressed;
        }
    }

    pub fn release(self) -> [P; 4] {
        self.pins
    }
}

impl<P: InputPin> ButtonSource for GpioButtons<P> {
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

pub struct PwmLeds<P> {
    channels: [P; 4],
}

impl<P: SetDutyCycle> PwmLeds<P> {
    /// `channels` are indexed by [`LedId`].
    pub fn new(channels: [P; 4]) -> Self {
        Self { channels }
    }

    pub fn release(self) -> [P; 4] {
        self.channels
    }
}

impl<P: SetDutyCycle> LedSink for PwmLeds<P> {
    fn set_digital(&mut self, id: LedId, on: bool) {
        let ch = &mut self.channels[id.index()];
        let res = if on {
            ch.set_duty_cycle_fully_on()
        } else {
            ch.set_duty_cycle_fully_off()
        };
        if let Err(e) = res {
            warn!("LED {:?}: PWM write failed ({:?})", id, e);
        }
    }

    fn set_brightness(&mut self, id: LedId, percent: u8) {
        if let Err(e) = self.channels[id.index()].set_duty_cycle_percent(percent.min(100)) {
            warn!("LED {:?}: PWM write failed ({:?})", id, e);
        }
    }
}

pub struct GpioLeds<P> {
    pins: [P; 4],
    active: ActiveLevel,
}

impl<P: OutputPin> GpioLeds<P> {
    pub fn new(pins: [P; 4], active: ActiveLevel) -> Self {
        Self { pins, active }
    }

    pub fn release(self) -> [P; 4] {
        self.pins
    }
}

impl<P: OutputPin> LedSink for GpioLeds<P> {
    fn set_digital(&mut self, id: LedId, on: bool) {
        let pin = &mut self.pins[id.index()];
        let drive_high = on == (self.active == ActiveLevel::High);
        let res = if drive_high {
            pin.set_high()
        } else {
            pin.set_low()
        };
        if let Err(e) = res {
            warn!("LED {:?}: GPIO write failed ({:?})", id, e);
        }
    }

    fn set_brightness(&mut self, id: LedId, percent: u8) {
        self.set_digital(id, percent >= 50);
    }
}
