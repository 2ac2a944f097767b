//! Menu and Saved: resume, clear, save, re-emit, and external commands.

use crate::mock_hw::{enter_byte, idle, make_app, tap};

use bitpad::app::commands::AppCommand;
use bitpad::app::events::AppEvent;
use bitpad::app::ports::{ButtonId, LedId};
use bitpad::fsm::StateId;

#[test]
fn two_characters_then_save_and_re_emit() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_byte(&mut app, &mut hw, &mut sink, b'h');
    tap(&mut app, &mut hw, &mut sink, ButtonId::B);
    enter_byte(&mut app, &mut hw, &mut sink, b'i');
    tap(&mut app, &mut hw, &mut sink, ButtonId::D);
    assert_eq!(app.state(), StateId::Saved);

    tap(&mut app, &mut hw, &mut sink, ButtonId::D);
    tap(&mut app, &mut hw, &mut sink, ButtonId::D);
    assert_eq!(app.state(), StateId::Saved);

    let emitted: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::TextEmitted(t) => Some(t.as_slice()),
            _ => None,
        })
        .collect();
    assert_eq!(emitted, [b"hi".as_slice(), b"hi".as_slice()]);
}

#[test]
fn menu_clear_returns_to_input_with_empty_text() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_byte(&mut app, &mut hw, &mut sink, 0x7E);
    tap(&mut app, &mut hw, &mut sink, ButtonId::C);

    assert_eq!(app.state(), StateId::Input);
    assert!(app.text().is_empty());
    assert!(sink.events.contains(&AppEvent::TextCleared));
}

#[test]
fn saved_clear_returns_to_input_with_empty_text() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_byte(&mut app, &mut hw, &mut sink, 0x01);
    tap(&mut app, &mut hw, &mut sink, ButtonId::D);
    tap(&mut app, &mut hw, &mut sink, ButtonId::C);

    assert_eq!(app.state(), StateId::Input);
    assert!(app.text().is_empty());
}

#[test]
fn saved_ignores_a_and_b() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_byte(&mut app, &mut hw, &mut sink, 0x01);
    tap(&mut app, &mut hw, &mut sink, ButtonId::D);
    tap(&mut app, &mut hw, &mut sink, ButtonId::A);
    tap(&mut app, &mut hw, &mut sink, ButtonId::B);
    assert_eq!(app.state(), StateId::Saved);
}

#[test]
fn menu_blinks_at_four_hz() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_byte(&mut app, &mut hw, &mut sink, 0x00);
    assert!(!hw.is_lit(LedId::Led3), "entry turns LEDs off");
    idle(&mut app, &mut hw, &mut sink, 125);
    assert!(!hw.is_lit(LedId::Led3));
    idle(&mut app, &mut hw, &mut sink, 1);
    assert!(hw.is_lit(LedId::Led3));
}

#[test]
fn saved_blinks_at_sixteen_hz() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_byte(&mut app, &mut hw, &mut sink, 0x00);
    tap(&mut app, &mut hw, &mut sink, ButtonId::D);
    idle(&mut app, &mut hw, &mut sink, 31);
    assert!(!hw.is_lit(LedId::Led3));
    idle(&mut app, &mut hw, &mut sink, 1);
    assert!(hw.is_lit(LedId::Led3));
}

#[test]
fn commands_clear_and_emit_without_moving() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_byte(&mut app, &mut hw, &mut sink, b'z');

    app.handle_command(AppCommand::EmitText, &mut hw, &mut sink)
        .unwrap();
    app.handle_command(AppCommand::ClearText, &mut hw, &mut sink)
        .unwrap();

    assert_eq!(app.state(), StateId::Menu);
    assert!(app.text().is_empty());
    let tail = &sink.events[sink.events.len() - 2..];
    assert!(matches!(&tail[0], AppEvent::TextEmitted(t) if t.as_slice() == b"z"));
    assert_eq!(tail[1], AppEvent::TextCleared);
}

#[test]
fn force_state_emits_change_and_runs_entry() {
    let (mut app, mut hw, mut sink) = make_app();
    idle(&mut app, &mut hw, &mut sink, 600);
    assert!(hw.is_lit(LedId::Led3));

    app.handle_command(AppCommand::ForceState(StateId::Saved), &mut hw, &mut sink)
        .unwrap();
    assert_eq!(app.state(), StateId::Saved);
    assert!(!hw.is_lit(LedId::Led3));
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::StateChanged {
            from: StateId::Input,
            to: StateId::Saved
        })
    );

    let before = sink.events.len();
    app.handle_command(AppCommand::ForceState(StateId::Saved), &mut hw, &mut sink)
        .unwrap();
    assert_eq!(sink.events.len(), before, "forcing the current state is a no-op");
}
