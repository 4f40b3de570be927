//! Terminal setup and restore

use std::io::{stdout, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use tbgen_core::prelude::*;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode + alternate screen and build the terminal handle
pub fn init() -> Result<Tui> {
    enable_raw_mode().map_err(|e| Error::TerminalInit(e.to_string()))?;
    execute!(stdout(), EnterAlternateScreen).map_err(|e| Error::TerminalInit(e.to_string()))?;
    Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave the alternate screen and disable raw mode
pub fn restore() -> Result<()> {
    execute!(stdout(), LeaveAlternateScreen)
        .map_err(|e| Error::TerminalRestore(e.to_string()))?;
    disable_raw_mode().map_err(|e| Error::TerminalRestore(e.to_string()))?;
    Ok(())
}
