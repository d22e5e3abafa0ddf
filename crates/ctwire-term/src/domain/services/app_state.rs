use ctwire_core::Trainer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::Block;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::infrastructure::surface::CanvasSurface;
use crate::infrastructure::surface::StatusLine;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub const RESET_LABEL: &str = "[ Reset ]";
pub const CHECK_LABEL: &str = "[ Check Wiring ]";

pub struct AppStateProps {
    pub marker: Marker,
}

/// Where each part of the screen was drawn last, used to resolve mouse clicks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub canvas: Rect,
    pub canvas_inner: Rect,
    pub status: Rect,
    pub reset_button: Rect,
    pub check_button: Rect,
    pub hints: Rect,
}

impl ScreenAreas {
    pub fn new(area: Rect) -> ScreenAreas {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        let buttons = Layout::horizontal([
            Constraint::Length(RESET_LABEL.chars().count() as u16),
            Constraint::Length(2),
            Constraint::Length(CHECK_LABEL.chars().count() as u16),
            Constraint::Min(0),
        ])
        .split(rows[3]);

        return ScreenAreas {
            title: rows[0],
            canvas: rows[1],
            canvas_inner: Block::bordered().inner(rows[1]),
            status: rows[2],
            reset_button: buttons[0],
            check_button: buttons[2],
            hints: rows[4],
        };
    }
}

pub struct AppState {
    pub trainer: Trainer<CanvasSurface, StatusLine>,
    pub areas: ScreenAreas,
    last_known_rect: Rect,
    resized: bool,
}

impl AppState {
    pub fn new(props: AppStateProps) -> AppState {
        return AppState {
            trainer: Trainer::new(CanvasSurface::new(props.marker), StatusLine::default()),
            areas: ScreenAreas::default(),
            last_known_rect: Rect::default(),
            resized: true,
        };
    }

    pub fn set_rect(&mut self, rect: Rect) {
        if rect == self.last_known_rect {
            return;
        }

        self.last_known_rect = rect;
        self.areas = ScreenAreas::new(rect);
        self.resized = true;
    }

    /// Resolves an input event to a trainer command, if it names one.
    pub fn action_for(&self, event: &Event) -> Option<Action> {
        let action = match event {
            Event::MouseClick { column, row } => {
                let position = Position::new(*column, *row);
                if self.areas.reset_button.contains(position) {
                    Action::Reset
                } else if self.areas.check_button.contains(position) {
                    Action::Check
                } else {
                    let terminal = self.trainer.surface().terminal_at(
                        self.areas.canvas_inner,
                        *column,
                        *row,
                    )?;
                    Action::SelectTerminal(terminal)
                }
            }
            Event::KeyboardTerminal(terminal) => Action::SelectTerminal(*terminal),
            Event::KeyboardReset => Action::Reset,
            Event::KeyboardCheck => Action::Check,
            Event::KeyboardQuit | Event::KeyboardCTRLC => Action::Quit,
            Event::UIResize | Event::UITick => return None,
        };

        return Some(action);
    }

    /// Applies an event. Returns true when the UI loop should stop.
    pub fn handle_event(&mut self, event: Event) -> bool {
        if event == Event::UIResize {
            self.resized = true;
            return false;
        }

        let Some(action) = self.action_for(&event) else {
            return false;
        };
        tracing::debug!(?event, ?action, "handling action");

        match action {
            Action::SelectTerminal(terminal) => self.trainer.click(terminal),
            Action::Reset => self.trainer.reset(),
            Action::Check => {
                self.trainer.check();
            }
            Action::Quit => return true,
        }

        return false;
    }

    /// Returns whether anything visible changed since the last call.
    pub fn needs_redraw(&mut self) -> bool {
        let surface_dirty = self.trainer.surface_mut().take_dirty();
        let status_changed = self.trainer.status_mut().take_changed();
        let resized = std::mem::replace(&mut self.resized, false);

        return surface_dirty || status_changed || resized;
    }
}
