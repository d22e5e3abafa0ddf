use ctwire_core::CtTerminal;
use ctwire_core::MeterTerminal;
use ctwire_core::Outcome;
use ctwire_core::SelectionState;
use ctwire_core::StatusColor;
use ctwire_core::Terminal;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;

use super::AppState;
use super::AppStateProps;
use super::ScreenAreas;
use crate::domain::models::Action;
use crate::domain::models::Event;

const S1: Terminal = Terminal::Ct(CtTerminal::S1);
const S2: Terminal = Terminal::Ct(CtTerminal::S2);
const M1: Terminal = Terminal::Meter(MeterTerminal::M1);
const L1: Terminal = Terminal::Meter(MeterTerminal::L1);

fn app_state() -> AppState {
    let mut app_state = AppState::new(AppStateProps {
        marker: Marker::Braille,
    });
    app_state.set_rect(Rect::new(0, 0, 80, 24));
    return app_state;
}

fn press(app_state: &mut AppState, terminals: &[Terminal]) {
    for terminal in terminals {
        assert!(!app_state.handle_event(Event::KeyboardTerminal(*terminal)));
    }
}

#[test]
fn it_lays_out_the_screen() {
    let areas = ScreenAreas::new(Rect::new(0, 0, 80, 24));

    assert_eq!(areas.title, Rect::new(0, 0, 80, 1));
    assert_eq!(areas.canvas, Rect::new(0, 1, 80, 20));
    assert_eq!(areas.canvas_inner, Rect::new(1, 2, 78, 18));
    assert_eq!(areas.status, Rect::new(0, 21, 80, 1));
    assert_eq!(areas.reset_button, Rect::new(0, 22, 9, 1));
    assert_eq!(areas.check_button, Rect::new(11, 22, 16, 1));
}

#[test]
fn it_resolves_mouse_clicks() {
    let app_state = app_state();

    // S1 is drawn at column 1 + 19, row 2 + 5.
    assert_eq!(
        app_state.action_for(&Event::MouseClick { column: 20, row: 7 }),
        Some(Action::SelectTerminal(S1))
    );
    assert_eq!(
        app_state.action_for(&Event::MouseClick { column: 3, row: 22 }),
        Some(Action::Reset)
    );
    assert_eq!(
        app_state.action_for(&Event::MouseClick { column: 15, row: 22 }),
        Some(Action::Check)
    );
    assert_eq!(
        app_state.action_for(&Event::MouseClick { column: 40, row: 12 }),
        None
    );
}

#[test]
fn it_wires_and_checks_from_the_keyboard() {
    let mut app_state = app_state();
    press(&mut app_state, &[S1, M1, L1, S2]);
    assert!(!app_state.handle_event(Event::KeyboardCheck));

    let status = app_state.trainer.status();
    assert_eq!(status.text(), Outcome::CorrectPolarity.message());
    assert_eq!(status.color(), StatusColor::Success);
    assert_eq!(app_state.trainer.surface().wire_count(), 2);
}

#[test]
fn it_highlights_pending_selection() {
    let mut app_state = app_state();
    press(&mut app_state, &[M1]);

    assert_eq!(app_state.trainer.board().state(), SelectionState::Selecting(M1));
    assert!(app_state.trainer.surface().is_selected(M1));

    press(&mut app_state, &[L1]);
    assert!(!app_state.trainer.surface().is_selected(M1));
    assert_eq!(app_state.trainer.status().color(), StatusColor::Error);
}

#[test]
fn it_resets_from_the_button() {
    let mut app_state = app_state();
    press(&mut app_state, &[S2, M1]);
    assert!(!app_state.handle_event(Event::MouseClick { column: 3, row: 22 }));

    assert_eq!(app_state.trainer.surface().wire_count(), 0);
    assert!(app_state.trainer.board().connections().is_empty());
}

#[test]
fn it_quits() {
    let mut app_state = app_state();
    assert!(app_state.handle_event(Event::KeyboardQuit));
    assert!(app_state.handle_event(Event::KeyboardCTRLC));
}

#[test]
fn it_redraws_only_after_changes() {
    let mut app_state = app_state();
    assert!(app_state.needs_redraw());
    assert!(!app_state.needs_redraw());

    app_state.handle_event(Event::MouseClick { column: 40, row: 12 });
    assert!(!app_state.needs_redraw());

    app_state.handle_event(Event::UIResize);
    assert!(app_state.needs_redraw());

    press(&mut app_state, &[S1]);
    assert!(app_state.needs_redraw());
}

#[test]
fn it_ignores_ticks() {
    let mut app_state = app_state();
    assert!(app_state.needs_redraw());

    assert_eq!(app_state.action_for(&Event::UITick), None);
    assert!(!app_state.handle_event(Event::UITick));
    assert!(!app_state.needs_redraw());
}
