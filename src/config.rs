//! Engine timing configuration
//!
//! Every tick-count threshold the state machine uses is derived from these
//! values, so changing the tick rate rescales blink periods and the Standby
//! hold time without touching any handler code.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tunable timing parameters for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // --- Time base ---
    /// Engine steps per second (1000 = one tick per millisecond)
    pub tick_rate_hz: u32,

    // --- Feedback LED blink rates ---
    /// Blink rate while entering bits
    pub input_blink_hz: u32,
    /// Blink rate after a character has been completed
    pub menu_blink_hz: u32,
    /// Blink rate once the text has been saved
    pub saved_blink_hz: u32,

    // --- Standby ---
    /// How long both combo buttons must be held to enter Standby (ms)
    pub standby_hold_ms: u32,
    /// Number of steps from dark to full brightness in the Standby pulse
    pub pulse_max: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 1000,

            input_blink_hz: 1,
            menu_blink_hz: 4,
            saved_blink_hz: 16,

            standby_hold_ms: 3000,
            pulse_max: 1000,
        }
    }
}

impl EngineConfig {
    /// Ticks per half blink period for `target_hz`.  Truncates toward zero,
    /// so the observed frequency only approximates the target.
    pub fn half_period_ticks(&self, target_hz: u32) -> u32 {
        self.tick_rate_hz / target_hz.saturating_mul(2)
    }

    /// Consecutive held ticks needed to enter Standby.  Saturates at
    /// `u32::MAX`; [`validate`](Self::validate) rejects configs that would.
    pub fn standby_hold_ticks(&self) -> u32 {
        u32::try_from(self.standby_hold_ticks_wide()).unwrap_or(u32::MAX)
    }

    fn standby_hold_ticks_wide(&self) -> u64 {
        u64::from(self.standby_hold_ms) * u64::from(self.tick_rate_hz) / 1000
    }

    /// Reject configurations that would divide by zero or make a timer
    /// degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_hz == 0 {
            return Err(Error::Config("tick_rate_hz must be non-zero"));
        }
        for hz in [self.input_blink_hz, self.menu_blink_hz, self.saved_blink_hz] {
            if hz == 0 {
                return Err(Error::Config("blink rates must be non-zero"));
            }
            if hz.saturating_mul(2) > self.tick_rate_hz {
                return Err(Error::Config("blink rate exceeds half the tick rate"));
            }
        }
        if self.pulse_max == 0 {
            return Err(Error::Config("pulse_max must be non-zero"));
        }
        match u32::try_from(self.standby_hold_ticks_wide()) {
            Ok(0) => return Err(Error::Config("standby_hold_ms is shorter than one tick")),
            Ok(_) => {}
            Err(_) => return Err(Error::Config("standby hold exceeds the tick counter range")),
        }
        Ok(())
    }
}
