//! Bit entry in Input: accumulation, commit, abort, forced completion,
//! buffer-full policy, and the Input LED indications.

use crate::mock_hw::{LedCall, enter_byte, idle, make_app, tap};

use bitpad::app::events::AppEvent;
use bitpad::app::ports::{ButtonId, LedId};
use bitpad::fsm::StateId;
use bitpad::fsm::context::TEXT_CAPACITY;

#[test]
fn alternating_bits_commit_0xaa_then_open_menu() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_byte(&mut app, &mut hw, &mut sink, 0xAA);

    assert_eq!(app.state(), StateId::Menu);
    assert_eq!(app.text(), &[0xAA]);
    assert_eq!(
        &sink.events[1..],
        &[
            AppEvent::CharacterCommitted { code: 0xAA, len: 1 },
            AppEvent::StateChanged {
                from: StateId::Input,
                to: StateId::Menu
            },
        ]
    );
}

#[test]
fn seven_bits_stay_in_input() {
    let (mut app, mut hw, mut sink) = make_app();
    for _ in 0..7 {
        tap(&mut app, &mut hw, &mut sink, ButtonId::B);
    }
    let snap = app.snapshot();
    assert_eq!(app.state(), StateId::Input);
    assert_eq!(snap.bit_index, 7);
    assert_eq!(snap.bit_buffer, 0b1111_1110);
    assert!(app.text().is_empty());
}

#[test]
fn clear_discards_partial_character_only() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_byte(&mut app, &mut hw, &mut sink, b'x');
    tap(&mut app, &mut hw, &mut sink, ButtonId::A);
    assert_eq!(app.state(), StateId::Input);

    tap(&mut app, &mut hw, &mut sink, ButtonId::B);
    tap(&mut app, &mut hw, &mut sink, ButtonId::C);

    let snap = app.snapshot();
    assert_eq!((snap.bit_index, snap.bit_buffer), (0, 0));
    assert_eq!(app.text(), b"x", "stored text survives a bit-level clear");
}

#[test]
fn force_complete_with_no_bits_stores_nul() {
    let (mut app, mut hw, mut sink) = make_app();
    tap(&mut app, &mut hw, &mut sink, ButtonId::D);
    assert_eq!(app.state(), StateId::Menu);
    assert_eq!(app.text(), &[0x00]);
}

#[test]
fn full_buffer_drops_character_but_still_opens_menu() {
    let (mut app, mut hw, mut sink) = make_app();
    for i in 0..TEXT_CAPACITY {
        enter_byte(&mut app, &mut hw, &mut sink, b'a' + (i % 26) as u8);
        tap(&mut app, &mut hw, &mut sink, ButtonId::A);
    }
    assert_eq!(app.text().len(), TEXT_CAPACITY);
    assert_eq!(app.state(), StateId::Input);

    enter_byte(&mut app, &mut hw, &mut sink, b'!');
    assert_eq!(app.state(), StateId::Menu);
    assert_eq!(app.text().len(), TEXT_CAPACITY);
    assert_eq!(app.text()[0], b'a');
    assert_eq!(
        sink.events[sink.events.len() - 2],
        AppEvent::CharacterDropped { code: b'!' }
    );
}

#[test]
fn held_a_and_b_light_their_leds() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.press(ButtonId::A);
    app.tick(&mut hw, &mut sink);
    assert!(hw.is_lit(LedId::Led0));
    assert!(!hw.is_lit(LedId::Led1));

    hw.release(ButtonId::A);
    hw.press(ButtonId::B);
    app.tick(&mut hw, &mut sink);
    assert!(!hw.is_lit(LedId::Led0));
    assert!(hw.is_lit(LedId::Led1));
}

#[test]
fn every_tick_drives_all_four_leds() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.calls.clear();
    idle(&mut app, &mut hw, &mut sink, 3);
    assert_eq!(hw.calls.len(), 12);
    assert!(
        hw.calls
            .iter()
            .all(|c| matches!(c, LedCall::Digital { .. })),
        "Input never dims"
    );
}

#[test]
fn status_led_blinks_at_one_hz() {
    let (mut app, mut hw, mut sink) = make_app();
    idle(&mut app, &mut hw, &mut sink, 500);
    assert!(!hw.is_lit(LedId::Led3));
    idle(&mut app, &mut hw, &mut sink, 1);
    assert!(hw.is_lit(LedId::Led3));
    idle(&mut app, &mut hw, &mut sink, 500);
    assert!(hw.is_lit(LedId::Led3));
    idle(&mut app, &mut hw, &mut sink, 1);
    assert!(!hw.is_lit(LedId::Led3));
}
