//! rackety - a word-tile board game for the terminal
//!
//! Place words, chase premium squares, and outscore an automated
//! opponent that searches the whole dictionary every turn.

mod app;
mod game;
mod tui;

use app::App;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use game::board::StandardLayout;
use game::dictionary::Dictionary;
use game::engine::{Game, PlayerKind};
use std::io;
use std::time::Duration;
use tui::Tui;

fn main() -> io::Result<()> {
    // Take over the terminal; Tui::drop restores it
    let mut terminal = Tui::new()?;

    // One human against the automated opponent, standard board
    let game = Game::new(
        vec![
            ("You".to_string(), PlayerKind::Human),
            ("CPU".to_string(), PlayerKind::Automated),
        ],
        Dictionary::embedded(),
        &StandardLayout,
    );
    let mut app = App::new(game);

    // Main event loop
    loop {
        // Render
        terminal.draw(|frame| tui::render(frame, &app))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => {
                            app.quit();
                        }
                        KeyCode::Enter => {
                            app.on_submit();
                        }
                        KeyCode::Backspace => {
                            app.on_backspace();
                        }
                        KeyCode::Char(c) => {
                            // Commands are letters, digits, `*`, and spaces
                            if c.is_ascii_alphanumeric() || c == ' ' || c == '*' {
                                app.on_char(c.to_ascii_uppercase());
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        // Check for quit
        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
