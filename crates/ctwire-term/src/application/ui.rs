#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::prelude::Backend;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::Terminal;

use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::EventsService;
use crate::domain::services::CHECK_LABEL;
use crate::domain::services::RESET_LABEL;

const TITLE: &str = "CT → 1-Phase Meter Wiring Trainer";
const HINTS: &str = "click two terminals to draw a wire | 1-4 select S1 S2 M1 L1 | r reset | c check | q quit";

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub fn draw(frame: &mut Frame, app_state: &AppState) {
    let areas = &app_state.areas;
    let button_style = Style::default().add_modifier(Modifier::REVERSED);

    frame.render_widget(
        Paragraph::new(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        areas.title,
    );
    app_state.trainer.surface().render(frame, areas.canvas);
    frame.render_widget(app_state.trainer.status().widget(), areas.status);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(RESET_LABEL, button_style))),
        areas.reset_button,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(CHECK_LABEL, button_style))),
        areas.check_button,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(HINTS, Style::default().fg(Color::DarkGray))),
        areas.hints,
    );
}

/// Redraws when something changed and feeds events until the user quits.
pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
) -> Result<()> {
    let mut app_state = AppState::new(app_state_props);
    let mut events = EventsService::new();

    loop {
        if app_state.needs_redraw() {
            terminal.draw(|frame| {
                app_state.set_rect(frame.area());
                draw(frame, &app_state);
            })?;
        }

        let event = events.next().await?;
        if app_state.handle_event(event) {
            break;
        }
    }

    tracing::info!("trainer closed");

    return Ok(());
}
