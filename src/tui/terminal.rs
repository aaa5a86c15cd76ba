//! Terminal ownership for the lifetime of the game

use crossterm::{
    cursor,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};

/// Owns the terminal while the game runs. Construction switches to raw
/// mode on the alternate screen with the cursor hidden; dropping the
/// value restores the terminal, including on early returns and panics.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Take over the terminal.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?.execute(cursor::Hide)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        terminal.clear()?;
        Ok(Self { terminal })
    }

    /// Draw one frame.
    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    // Undoes new() in reverse order.
    fn restore() -> io::Result<()> {
        stdout().execute(cursor::Show)?.execute(LeaveAlternateScreen)?;
        disable_raw_mode()
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = Self::restore();
    }
}
