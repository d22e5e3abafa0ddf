use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ctwire_term::application::ui::start_loop;
use ctwire_term::infrastructure::surface::parse_marker;
use ctwire_term::AppStateProps;
use ctwire_term::Config;
use ctwire_term::ConfigKey;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Takes over the terminal, runs the trainer and restores the terminal.
pub async fn start_ui() -> Result<()> {
    let app_state_props = AppStateProps {
        marker: parse_marker(&Config::get(ConfigKey::Marker))?,
    };

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, app_state_props).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    return result;
}
