//! Mutable context owned by the engine and threaded through every handler.
//!
//! `EngineContext` is the single struct that state handlers read from and
//! write to: the current/resume states, the three timing helpers, the bit
//! accumulator, the text buffer, and the LED output requests that the
//! service applies after each tick.

use heapless::Vec;

use crate::app::ports::LedId;
use crate::config::EngineConfig;

use super::StateId;
use super::blink::BlinkTimer;
use super::hold::HoldDetector;
use super::pulse::PulseGenerator;

/// Maximum number of characters the text buffer holds.
pub const TEXT_CAPACITY: usize = 32;

/// Completed characters, in entry order.
pub type TextBuffer = Vec<u8, TEXT_CAPACITY>;

/// Bits per character.
pub const BITS_PER_CHAR: u8 = 8;

// ---------------------------------------------------------------------------
// LED output requests (written by state handlers; applied by the service)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedOutput {
    Digital(bool),
    /// 0–100 percent.
    Brightness(u8),
}

/// Requested output for each of the four LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedCommands {
    pub outputs: [LedOutput; 4],
}

impl Default for LedCommands {
    fn default() -> Self {
        Self::all_off()
    }
}

impl LedCommands {
    pub const fn all_off() -> Self {
        Self {
            outputs: [LedOutput::Digital(false); 4],
        }
    }

    pub fn set(&mut self, id: LedId, output: LedOutput) {
        self.outputs[id.index()] = output;
    }

    pub fn get(&self, id: LedId) -> LedOutput {
        self.outputs[id.index()]
    }
}

// ---------------------------------------------------------------------------
// Text notices (one per tick at most; drained by the service)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A character was appended; carries its code and the new length.
    Committed { code: u8, len: usize },
    /// A character was completed while the buffer was full.
    Dropped { code: u8 },
    /// The text buffer was emptied.
    Cleared,
    /// The saved text was re-emitted.
    Emitted(TextBuffer),
}

// ---------------------------------------------------------------------------
// EngineContext
// ---------------------------------------------------------------------------

pub struct EngineContext {
    // -- State --
    pub current_state: StateId,
    /// Where Standby resumes to.  Never `Standby`.
    pub last_state: StateId,

    // -- Timing helpers --
    pub blink: BlinkTimer,
    pub hold: HoldDetector,
    pub pulse: PulseGenerator,

    // -- Character entry --
    /// Partial character, filled most-significant bit first.
    pub bit_buffer: u8,
    /// Bits entered so far (0–8).
    pub bit_index: u8,
    pub text: TextBuffer,

    // -- Outputs --
    pub commands: LedCommands,
    pub notice: Option<Notice>,

    // -- Configuration --
    pub config: EngineConfig,
}

impl EngineContext {
    /// Fresh context: every counter zero, state `Input`.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            current_state: StateId::Input,
            last_state: StateId::Input,
            blink: BlinkTimer::new(),
            hold: HoldDetector::new(),
            pulse: PulseGenerator::new(),
            bit_buffer: 0,
            bit_index: 0,
            text: TextBuffer::new(),
            commands: LedCommands::all_off(),
            notice: None,
            config,
        }
    }

    /// Write `bit` at position `7 - bit_index` and advance the index.
    pub fn push_bit(&mut self, bit: bool) {
        if self.bit_index >= BITS_PER_CHAR {
            return;
        }
        let mask = 1u8 << (BITS_PER_CHAR - 1 - self.bit_index);
        if bit {
            self.bit_buffer |= mask;
        } else {
            self.bit_buffer &= !mask;
        }
        self.bit_index += 1;
    }

    pub fn clear_bits(&mut self) {
        self.bit_buffer = 0;
        self.bit_index = 0;
    }

    pub fn char_complete(&self) -> bool {
        self.bit_index >= BITS_PER_CHAR
    }

    /// Append the accumulated byte to the text and reset the accumulator.
    /// A full buffer drops the byte.  Returns the notice describing the
    /// outcome.
    pub fn commit_char(&mut self) -> Notice {
        let code = self.bit_buffer;
        self.clear_bits();
        match self.text.push(code) {
            Ok(()) => Notice::Committed {
                code,
                len: self.text.len(),
            },
            Err(_) => Notice::Dropped { code },
        }
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    /// Swap in an already-validated config.  Running timers are kept but
    /// pulled back inside the new bounds.
    pub fn apply_config(&mut self, config: EngineConfig) {
        self.pulse.clamp_to(config.pulse_max);
        self.config = config;
    }
}
