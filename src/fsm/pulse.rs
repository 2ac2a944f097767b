//! Triangle-wave brightness ramp for the Standby idle indication.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseDirection {
    Rising,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseGenerator {
    pub level: u32,
    pub direction: PulseDirection,
}

impl Default for PulseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseGenerator {
    pub const fn new() -> Self {
        Self {
            level: 0,
            direction: PulseDirection::Rising,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Step the level by one toward the current bound and return the
    /// brightness as a truncated percentage of `max`.
    ///
    /// Direction flips on the very step that reaches a bound, so the wave
    /// has no flat top or bottom.
    pub fn advance(&mut self, max: u32) -> u8 {
        match self.direction {
            PulseDirection::Rising => {
                self.level = (self.level + 1).min(max);
                if self.level == max {
                    self.direction = PulseDirection::Falling;
                }
            }
            PulseDirection::Falling => {
                self.level = self.level.saturating_sub(1);
                if self.level == 0 {
                    self.direction = PulseDirection::Rising;
                }
            }
        }
        self.brightness(max)
    }

    /// `level * 100 / max`, truncating.  A level above `max` reads as 100.
    pub fn brightness(&self, max: u32) -> u8 {
        let level = u64::from(self.level.min(max));
        (level * 100 / u64::from(max)) as u8
    }

    /// Pull the level back inside `0..=max` after the amplitude shrinks.
    /// The ramp turns downward from the new peak.
    pub fn clamp_to(&mut self, max: u32) {
        if self.level >= max {
            self.level = max;
            self.direction = PulseDirection::Falling;
        }
    }
}
