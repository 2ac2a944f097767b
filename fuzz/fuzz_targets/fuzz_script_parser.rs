//! Fuzz target: simulator script parser
//!
//! Feeds arbitrary UTF-8 to `parse_script`.  It must return `Ok` or
//! `Err(Error::Script)` and never panic.
//!
//! cargo fuzz run fuzz_script_parser

#![no_main]

use bitpad::adapters::sim::parse_script;
use bitpad::error::Error;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    match parse_script(text) {
        Ok(steps) => assert!(steps.len() <= text.split_whitespace().count()),
        Err(e) => assert!(matches!(e, Error::Script(_))),
    }
});
