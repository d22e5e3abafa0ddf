use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use ctwire_core::CtTerminal;
use ctwire_core::MeterTerminal;
use ctwire_core::Terminal;

use super::map_crossterm;
use crate::domain::models::Event;

fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
    return CrosstermEvent::Key(KeyEvent::new(code, modifiers));
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    return CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

#[test]
fn it_maps_number_keys_to_terminals() {
    assert_eq!(
        map_crossterm(key(KeyCode::Char('1'), KeyModifiers::NONE)),
        Some(Event::KeyboardTerminal(Terminal::Ct(CtTerminal::S1)))
    );
    assert_eq!(
        map_crossterm(key(KeyCode::Char('4'), KeyModifiers::NONE)),
        Some(Event::KeyboardTerminal(Terminal::Meter(MeterTerminal::L1)))
    );
    assert_eq!(map_crossterm(key(KeyCode::Char('5'), KeyModifiers::NONE)), None);
}

#[test]
fn it_maps_commands() {
    assert_eq!(
        map_crossterm(key(KeyCode::Char('r'), KeyModifiers::NONE)),
        Some(Event::KeyboardReset)
    );
    assert_eq!(
        map_crossterm(key(KeyCode::Enter, KeyModifiers::NONE)),
        Some(Event::KeyboardCheck)
    );
    assert_eq!(
        map_crossterm(key(KeyCode::Esc, KeyModifiers::NONE)),
        Some(Event::KeyboardQuit)
    );
}

#[test]
fn it_prefers_ctrl_c_over_check() {
    assert_eq!(
        map_crossterm(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Event::KeyboardCTRLC)
    );
    assert_eq!(
        map_crossterm(key(KeyCode::Char('c'), KeyModifiers::NONE)),
        Some(Event::KeyboardCheck)
    );
}

#[test]
fn it_ignores_key_releases() {
    let mut release = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;

    assert_eq!(map_crossterm(CrosstermEvent::Key(release)), None);
}

#[test]
fn it_maps_left_clicks_only() {
    assert_eq!(
        map_crossterm(mouse(MouseEventKind::Down(MouseButton::Left), 12, 5)),
        Some(Event::MouseClick { column: 12, row: 5 })
    );
    assert_eq!(
        map_crossterm(mouse(MouseEventKind::Down(MouseButton::Right), 12, 5)),
        None
    );
    assert_eq!(map_crossterm(mouse(MouseEventKind::Moved, 12, 5)), None);
}
