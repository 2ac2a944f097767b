//! Concrete state handlers, dispatched by `match` on [`StateId`].
//!
//! ```text
//!  INPUT ──[8th bit / D]──▶ MENU ──[D]──▶ SAVED
//!    ▲                       │  │           │
//!    └────────[A|B]──────────┘  │           │
//!    └────────[C: clear]────────┘           │
//!    └────────[C: clear]────────────────────┘
//!
//!  Input/Menu/Saved ──[A+B held 3 s]──▶ STANDBY ──[any edge]──▶ last state
//! ```
//!
//! Handlers only consume the edges they act on.  Anything else stays
//! latched in the [`ButtonSource`] until a later state takes it, except
//! that entering Input discards everything pending and entering Standby
//! discards the combo edges.

use log::{debug, info, warn};

use super::StateId;
use super::context::{BITS_PER_CHAR, EngineContext, LedCommands, LedOutput, Notice};
use super::hold::standby_requested;
use crate::app::ports::{ButtonId, ButtonSource, LedId};

/// Buttons that must be held together to enter Standby.
///
/// Both are also action buttons.  Input still records their press edges as
/// bits (Standby entry clears the accumulator); Menu swallows them while the
/// whole combo is down so the hold can resume Menu.
pub const STANDBY_COMBO: [ButtonId; 2] = [ButtonId::A, ButtonId::B];

/// Status LED driven by the blink timer.
pub const BLINK_LED: LedId = LedId::Led3;

// ═══════════════════════════════════════════════════════════════════════════
//  Dispatch
// ═══════════════════════════════════════════════════════════════════════════

/// Entry action.  Every state restarts the blink and turns all LEDs off.
pub fn on_enter(state: StateId, ctx: &mut EngineContext, buttons: &mut impl ButtonSource) {
    ctx.blink.reset();
    ctx.commands = LedCommands::all_off();

    match state {
        StateId::Input => {
            // A character only starts from presses made in Input.
            for id in ButtonId::ALL {
                buttons.take_edge(id);
            }
            info!(
                "INPUT: bit entry ({}/8), LED at {} Hz",
                ctx.bit_index, ctx.config.input_blink_hz
            );
        }
        StateId::Menu => info!(
            "MENU: {} char(s) stored, LED at {} Hz",
            ctx.text.len(),
            ctx.config.menu_blink_hz
        ),
        StateId::Saved => info!("SAVED: LED at {} Hz", ctx.config.saved_blink_hz),
        StateId::Standby => standby_enter(ctx, buttons),
    }
}

/// Per-tick handler.  Returns `Some(next)` to request a transition.
pub fn on_update(
    state: StateId,
    ctx: &mut EngineContext,
    buttons: &mut impl ButtonSource,
) -> Option<StateId> {
    match state {
        StateId::Input => input_update(ctx, buttons),
        StateId::Menu => menu_update(ctx, buttons),
        StateId::Saved => saved_update(ctx, buttons),
        StateId::Standby => standby_update(ctx, buttons),
    }
}

/// Shared prologue of every non-Standby state: hold detection, then the
/// status LED blink at `hz`.
fn common_update(
    ctx: &mut EngineContext,
    buttons: &mut impl ButtonSource,
    hz: u32,
) -> Option<StateId> {
    let both_held = STANDBY_COMBO.iter().all(|&b| buttons.is_held(b));
    let threshold = ctx.config.standby_hold_ticks();
    if let Some(next) = standby_requested(
        &mut ctx.hold,
        &mut ctx.last_state,
        ctx.current_state,
        both_held,
        threshold,
    ) {
        info!(
            "{:?}: combo held for {} ticks -> standby",
            ctx.current_state, threshold
        );
        return Some(next);
    }

    ctx.blink.advance(&ctx.config, hz);
    ctx.commands.set(BLINK_LED, LedOutput::Digital(ctx.blink.on));
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  INPUT — accumulate bits, most significant first
// ═══════════════════════════════════════════════════════════════════════════

fn input_update(ctx: &mut EngineContext, buttons: &mut impl ButtonSource) -> Option<StateId> {
    let hz = ctx.config.input_blink_hz;
    if let Some(next) = common_update(ctx, buttons, hz) {
        return Some(next);
    }

    ctx.commands
        .set(LedId::Led0, LedOutput::Digital(buttons.is_held(ButtonId::A)));
    ctx.commands
        .set(LedId::Led1, LedOutput::Digital(buttons.is_held(ButtonId::B)));

    if buttons.take_edge(ButtonId::A) {
        ctx.push_bit(false);
        debug!("INPUT: bit 0 ({}/8)", ctx.bit_index);
    }
    if buttons.take_edge(ButtonId::B) {
        ctx.push_bit(true);
        debug!("INPUT: bit 1 ({}/8)", ctx.bit_index);
    }
    if buttons.take_edge(ButtonId::C) {
        ctx.clear_bits();
        debug!("INPUT: character aborted");
    }
    if buttons.take_edge(ButtonId::D) {
        ctx.bit_index = BITS_PER_CHAR;
        debug!("INPUT: forced completion of 0x{:02X}", ctx.bit_buffer);
    }

    if !ctx.char_complete() {
        return None;
    }

    let notice = ctx.commit_char();
    match notice {
        Notice::Committed { code, len } => {
            info!("INPUT: stored 0x{:02X} ({}/{})", code, len, ctx.text.capacity());
        }
        Notice::Dropped { code } => {
            warn!("INPUT: text buffer full, dropped 0x{:02X}", code);
        }
        Notice::Cleared | Notice::Emitted(_) => {}
    }
    ctx.notice = Some(notice);
    Some(StateId::Menu)
}

// ═══════════════════════════════════════════════════════════════════════════
//  MENU — character done; continue, clear, or save
// ═══════════════════════════════════════════════════════════════════════════

fn menu_update(ctx: &mut EngineContext, buttons: &mut impl ButtonSource) -> Option<StateId> {
    let hz = ctx.config.menu_blink_hz;
    if let Some(next) = common_update(ctx, buttons, hz) {
        return Some(next);
    }

    // Non-short-circuit: a simultaneous A+B press is consumed as one action.
    let combo_down = STANDBY_COMBO.iter().all(|&b| buttons.is_held(b));
    if (buttons.take_edge(ButtonId::A) | buttons.take_edge(ButtonId::B)) && !combo_down {
        return Some(StateId::Input);
    }
    if buttons.take_edge(ButtonId::C) {
        ctx.clear_text();
        ctx.notice = Some(Notice::Cleared);
        info!("MENU: text cleared");
        return Some(StateId::Input);
    }
    if buttons.take_edge(ButtonId::D) {
        return Some(StateId::Saved);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  SAVED — text committed; clear or re-emit
// ═══════════════════════════════════════════════════════════════════════════

fn saved_update(ctx: &mut EngineContext, buttons: &mut impl ButtonSource) -> Option<StateId> {
    let hz = ctx.config.saved_blink_hz;
    if let Some(next) = common_update(ctx, buttons, hz) {
        return Some(next);
    }

    if buttons.take_edge(ButtonId::C) {
        ctx.clear_text();
        ctx.notice = Some(Notice::Cleared);
        info!("SAVED: text cleared");
        return Some(StateId::Input);
    }
    if buttons.take_edge(ButtonId::D) {
        ctx.notice = Some(Notice::Emitted(ctx.text.clone()));
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  STANDBY — pulse all LEDs until any button is pressed
// ═══════════════════════════════════════════════════════════════════════════

fn standby_enter(ctx: &mut EngineContext, buttons: &mut impl ButtonSource) {
    ctx.clear_bits();
    ctx.pulse.reset();
    // The presses that started the combo are still latched.
    for id in STANDBY_COMBO {
        buttons.take_edge(id);
    }
    info!("STANDBY: will resume {:?}", ctx.last_state);
}

fn standby_update(ctx: &mut EngineContext, buttons: &mut impl ButtonSource) -> Option<StateId> {
    let percent = ctx.pulse.advance(ctx.config.pulse_max);
    for id in LedId::ALL {
        ctx.commands.set(id, LedOutput::Brightness(percent));
    }

    let woke = ButtonId::ALL.iter().any(|&b| buttons.peek_edge(b));
    if !woke {
        return None;
    }
    // The wake press must not leak into the resumed state.
    for id in ButtonId::ALL {
        buttons.take_edge(id);
    }
    info!("STANDBY: woken, resuming {:?}", ctx.last_state);
    Some(ctx.last_state)
}
