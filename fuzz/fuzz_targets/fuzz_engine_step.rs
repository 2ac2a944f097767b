//! Fuzz target: engine step
//!
//! Each input byte is one tick: the low nibble is the held-button mask,
//! the high nibble the buttons tapped since the previous tick.  Checks:
//! - No panics for any input sequence
//! - The bit accumulator never reports a full character between ticks
//! - The text never exceeds its capacity
//! - Standby is never recorded as the resume target
//!
//! cargo fuzz run fuzz_engine_step

#![no_main]

use bitpad::adapters::sim::{RecordingSink, SimBoard};
use bitpad::app::ports::ButtonId;
use bitpad::config::EngineConfig;
use bitpad::fsm::StateId;
use bitpad::fsm::context::TEXT_CAPACITY;
use bitpad::AppService;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let config = EngineConfig {
        standby_hold_ms: 8,
        pulse_max: 16,
        ..EngineConfig::default()
    };
    let Ok(mut app) = AppService::new(config) else {
        return;
    };
    let mut board = SimBoard::default();
    let mut sink = RecordingSink::new();
    app.start(&mut board, &mut sink);

    for &byte in data {
        for id in ButtonId::ALL {
            let bit = 1 << id.index();
            board.buttons.set_level(id, byte & bit != 0);
            if (byte >> 4) & bit != 0 {
                board.buttons.tap(id);
            }
        }
        app.tick(&mut board, &mut sink);

        let snap = app.snapshot();
        assert!(snap.bit_index < 8);
        assert!(snap.text_len <= TEXT_CAPACITY);
        assert_ne!(snap.last_state, StateId::Standby);
    }
});
