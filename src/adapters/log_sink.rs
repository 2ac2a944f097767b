//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (UART / RTT / stdout depending on the installed
//! backend).  Emitted text is printed as ASCII where printable and as
//! `\xNN` escapes otherwise.

use core::fmt;

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            AppEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            AppEvent::CharacterCommitted { code, len } => {
                info!("CHAR  | 0x{:02X} '{}' stored, len={}", code, Escaped(&[*code]), len);
            }
            AppEvent::CharacterDropped { code } => {
                warn!("CHAR  | 0x{:02X} dropped, text buffer full", code);
            }
            AppEvent::TextCleared => {
                info!("TEXT  | cleared");
            }
            AppEvent::TextEmitted(text) => {
                info!("TEXT  | \"{}\" ({} bytes)", Escaped(text), text.len());
            }
        }
    }
}

/// Renders bytes as printable ASCII with `\xNN` escapes.
pub struct Escaped<'a>(pub &'a [u8]);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02X}", b)?;
            }
        }
        Ok(())
    }
}
