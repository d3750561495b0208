//! Terminal UI for the job-search bar.
//!
//! `run` owns the terminal session: raw mode, alternate screen, and mouse
//! capture are acquired on entry and released on exit, so the global mouse
//! observer lives exactly as long as the widget.

pub mod app;
pub mod colors;
pub mod popover;
pub mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::error::Result;
use crate::logging;
use app::App;

/// Run the widget until the user quits, restoring the terminal afterwards
pub fn run(app: &mut App, tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    logging::info("TUI", "terminal session started");

    let result = app.run(&mut terminal, tick_rate);

    // Teardown must happen even when the loop errored
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    logging::info("TUI", "terminal session ended");

    result
}
