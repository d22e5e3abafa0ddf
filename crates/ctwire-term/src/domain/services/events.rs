#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEventKind;
use ctwire_core::Terminal;
use futures::StreamExt;
use tokio::time;

use crate::domain::models::Event;

const TICK_INTERVAL: time::Duration = time::Duration::from_millis(500);

/// Translates a raw terminal event into a trainer event.
pub fn map_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Resize(_, _) => {
            return Some(Event::UIResize);
        }
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                return Some(Event::MouseClick {
                    column: mouseevent.column,
                    row: mouseevent.row,
                });
            }
            _ => {
                return None;
            }
        },
        CrosstermEvent::Key(keyevent) => {
            if keyevent.kind != KeyEventKind::Press {
                return None;
            }

            if keyevent.modifiers.contains(KeyModifiers::CONTROL) {
                if keyevent.code == KeyCode::Char('c') {
                    return Some(Event::KeyboardCTRLC);
                }
                return None;
            }

            let event = match keyevent.code {
                KeyCode::Char(c @ '1'..='4') => {
                    let idx = c as usize - '1' as usize;
                    Event::KeyboardTerminal(Terminal::ALL[idx])
                }
                KeyCode::Char('r') | KeyCode::Char('R') => Event::KeyboardReset,
                KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Enter => Event::KeyboardCheck,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Event::KeyboardQuit,
                _ => return None,
            };

            return Some(event);
        }
        _ => return None,
    }
}

pub struct EventsService {
    crossterm_events: EventStream,
}

impl Default for EventsService {
    fn default() -> Self {
        return EventsService::new();
    }
}

impl EventsService {
    pub fn new() -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => map_crossterm(input),
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "failed to read terminal event");
                        None
                    }
                    None => bail!("terminal event stream closed"),
                },
                _ = time::sleep(TICK_INTERVAL) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
