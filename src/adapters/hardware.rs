//! Hardware adapter — bundles a button source and an LED sink.
//!
//! [`AppService::tick`](crate::app::service::AppService::tick) takes one
//! `&mut` that satisfies both ports; this wrapper provides it for any pair
//! of concrete adapters (GPIO on target, simulation on host).

use crate::app::ports::{ButtonId, ButtonSource, LedId, LedSink};

#[derive(Debug, Default)]
pub struct HardwareAdapter<B, L> {
    pub buttons: B,
    pub leds: L,
}

impl<B: ButtonSource, L: LedSink> HardwareAdapter<B, L> {
    pub fn new(buttons: B, leds: L) -> Self {
        Self { buttons, leds }
    }
}

// ── ButtonSource implementation ───────────────────────────────

impl<B: ButtonSource, L> ButtonSource for HardwareAdapter<B, L> {
    fn is_held(&mut self, id: ButtonId) -> bool {
        self.buttons.is_held(id)
    }

    fn peek_edge(&mut self, id: ButtonId) -> bool {
        self.buttons.peek_edge(id)
    }

    fn take_edge(&mut self, id: ButtonId) -> bool {
        self.buttons.take_edge(id)
    }
}

// ── LedSink implementation ────────────────────────────────────

impl<B, L: LedSink> LedSink for HardwareAdapter<B, L> {
    fn set_digital(&mut self, id: LedId, on: bool) {
        self.leds.set_digital(id, on);
    }

    fn set_brightness(&mut self, id: LedId, percent: u8) {
        self.leds.set_brightness(id, percent);
    }
}
