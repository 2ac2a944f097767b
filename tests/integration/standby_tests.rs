//! Dual-button hold into Standby, the pulse, and wake-up.

use crate::mock_hw::{LedCall, enter_byte, idle, make_app, make_app_with, tap};

use bitpad::app::commands::AppCommand;
use bitpad::app::events::AppEvent;
use bitpad::app::ports::{ButtonId, LedId};
use bitpad::config::EngineConfig;
use bitpad::fsm::StateId;

#[test]
fn three_second_hold_from_input() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.held = [true, true, false, false];
    idle(&mut app, &mut hw, &mut sink, 2999);
    assert_eq!(app.state(), StateId::Input);
    assert_eq!(app.snapshot().standby_hold_count, 2999);

    idle(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Standby);
    assert_eq!(app.last_state(), StateId::Input);
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::StateChanged {
            from: StateId::Input,
            to: StateId::Standby
        })
    );
}

#[test]
fn interrupted_hold_starts_over() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.held = [true, true, false, false];
    idle(&mut app, &mut hw, &mut sink, 2000);
    hw.held[1] = false;
    idle(&mut app, &mut hw, &mut sink, 1);
    hw.held[1] = true;
    idle(&mut app, &mut hw, &mut sink, 2999);
    assert_eq!(app.state(), StateId::Input);
    idle(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Standby);
}

#[test]
fn other_buttons_do_not_count_toward_hold() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.held = [false, false, true, true];
    idle(&mut app, &mut hw, &mut sink, 5000);
    assert_eq!(app.state(), StateId::Input);
}

#[test]
fn standby_from_saved_resumes_saved() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_byte(&mut app, &mut hw, &mut sink, b'q');
    tap(&mut app, &mut hw, &mut sink, ButtonId::D);
    assert_eq!(app.state(), StateId::Saved);

    hw.held = [true, true, false, false];
    idle(&mut app, &mut hw, &mut sink, 3000);
    assert_eq!(app.state(), StateId::Standby);
    assert_eq!(app.last_state(), StateId::Saved);

    hw.held = [false; 4];
    idle(&mut app, &mut hw, &mut sink, 50);
    assert_eq!(app.state(), StateId::Standby);

    tap(&mut app, &mut hw, &mut sink, ButtonId::D);
    assert_eq!(app.state(), StateId::Saved);
    assert_eq!(app.text(), b"q");
    assert!(
        !sink
            .events
            .iter()
            .any(|e| matches!(e, AppEvent::TextEmitted(_))),
        "wake press is consumed, not replayed in Saved"
    );
}

#[test]
fn standby_abandons_partial_character() {
    let (mut app, mut hw, mut sink) = make_app();
    tap(&mut app, &mut hw, &mut sink, ButtonId::B);
    tap(&mut app, &mut hw, &mut sink, ButtonId::B);
    app.handle_command(AppCommand::ForceState(StateId::Standby), &mut hw, &mut sink)
        .unwrap();
    assert_eq!(app.snapshot().bit_index, 0);
    tap(&mut app, &mut hw, &mut sink, ButtonId::C);
    assert_eq!(app.state(), StateId::Input);
    assert_eq!(app.snapshot().bit_buffer, 0);
}

#[test]
fn pulse_ramps_all_leds_together() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::ForceState(StateId::Standby), &mut hw, &mut sink)
        .unwrap();

    idle(&mut app, &mut hw, &mut sink, 500);
    for led in LedId::ALL {
        assert_eq!(hw.last_for(led), Some(LedCall::Brightness { led, percent: 50 }));
    }

    idle(&mut app, &mut hw, &mut sink, 500);
    assert_eq!(app.led_output(LedId::Led2), bitpad::fsm::context::LedOutput::Brightness(100));

    idle(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(
        hw.last_for(LedId::Led0),
        Some(LedCall::Brightness {
            led: LedId::Led0,
            percent: 99
        })
    );

    idle(&mut app, &mut hw, &mut sink, 999);
    assert_eq!(
        hw.last_for(LedId::Led3),
        Some(LedCall::Brightness {
            led: LedId::Led3,
            percent: 0
        })
    );
}

#[test]
fn hold_inside_standby_does_not_re_enter() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::ForceState(StateId::Standby), &mut hw, &mut sink)
        .unwrap();
    hw.held = [true, true, false, false];
    idle(&mut app, &mut hw, &mut sink, 4000);
    assert_eq!(app.state(), StateId::Standby);
    assert_eq!(app.last_state(), StateId::Input);
}

#[test]
fn shorter_hold_from_config() {
    let config = EngineConfig {
        standby_hold_ms: 500,
        ..EngineConfig::default()
    };
    let (mut app, mut hw, mut sink) = make_app_with(config);
    hw.held = [true, true, false, false];
    idle(&mut app, &mut hw, &mut sink, 499);
    assert_eq!(app.state(), StateId::Input);
    idle(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Standby);
}

#[test]
fn slower_tick_rate_rescales_hold() {
    let config = EngineConfig {
        tick_rate_hz: 100,
        ..EngineConfig::default()
    };
    let (mut app, mut hw, mut sink) = make_app_with(config);
    hw.held = [true, true, false, false];
    idle(&mut app, &mut hw, &mut sink, 299);
    assert_eq!(app.state(), StateId::Input);
    idle(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Standby);
}
