//! Standby hold-detector: an unbroken dual-button hold for a fixed number
//! of ticks requests Standby.

use super::StateId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoldDetector {
    /// Consecutive ticks both combo buttons have been held.
    pub count: u32,
}

impl HoldDetector {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Feed one tick of button levels.  Returns `true` on the tick the hold
    /// reaches `threshold`; the counter is cleared at that point.  Any tick
    /// where either button is up clears the counter (no partial credit).
    pub fn check(&mut self, both_held: bool, threshold: u32) -> bool {
        if !both_held {
            self.count = 0;
            return false;
        }
        self.count += 1;
        if self.count >= threshold {
            self.count = 0;
            return true;
        }
        false
    }
}

/// Run the detector for a non-Standby state.  On trigger, `last_state` is
/// set to `current` and Standby is returned as the next state.
pub fn standby_requested(
    detector: &mut HoldDetector,
    last_state: &mut StateId,
    current: StateId,
    both_held: bool,
    threshold: u32,
) -> Option<StateId> {
    debug_assert!(current != StateId::Standby);
    if detector.check(both_held, threshold) {
        *last_state = current;
        Some(StateId::Standby)
    } else {
        None
    }
}
