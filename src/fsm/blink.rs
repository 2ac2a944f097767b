//! Square-wave toggle derived from the tick time base.

use crate::config::EngineConfig;

/// Flips `on` every `half_period_ticks + 1` calls to [`advance`](Self::advance).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlinkTimer {
    /// Ticks since the last toggle (or since state entry).
    pub tick_count: u32,
    /// Current LED phase.
    pub on: bool,
}

impl BlinkTimer {
    pub const fn new() -> Self {
        Self {
            tick_count: 0,
            on: false,
        }
    }

    /// Restart the blink cleanly: counter to zero, LED phase off.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Count one tick toward `target_hz`.  Returns `true` when `on` flipped.
    pub fn advance(&mut self, config: &EngineConfig, target_hz: u32) -> bool {
        let half_period_ticks = config.half_period_ticks(target_hz);
        self.tick_count += 1;
        if self.tick_count > half_period_ticks {
            self.tick_count = 0;
            self.on = !self.on;
            true
        } else {
            false
        }
    }
}
