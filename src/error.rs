//! Unified error type for the bitpad crate.
//!
//! The engine itself never fails at runtime: LED writes are fire-and-forget
//! and a full text buffer is handled by dropping the character.  Errors only
//! arise at the edges: validating configuration, converting raw indices into
//! typed ids, and parsing simulation scripts.  All variants are `Copy`.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration failed validation.  Carries the offending rule.
    Config(&'static str),
    /// A raw index did not name one of the four buttons.
    InvalidButton(u8),
    /// A raw index did not name one of the four LEDs.
    InvalidLed(u8),
    /// A simulation script token could not be parsed.
    Script(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::InvalidButton(idx) => write!(f, "invalid button index {idx}"),
            Self::InvalidLed(idx) => write!(f, "invalid LED index {idx}"),
            Self::Script(msg) => write!(f, "script: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
