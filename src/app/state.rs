//! Application state: drives the game from parsed commands

use crate::app::command::{self, Command};
use crate::game::engine::{Game, PlayerKind};
use crate::game::search::Move;
use std::collections::VecDeque;

/// Most recent feed entries kept on screen.
const FEED_MAX: usize = 8;

/// Terminal application state: the live game plus the command line and
/// the action feed shown next to the board.
pub struct App {
    pub game: Game,
    /// Current command-line input.
    pub input: String,
    /// Feedback from the last submitted command.
    pub feedback: String,
    /// Recent action descriptions, newest last.
    pub feed: VecDeque<String>,
    /// Whether the application should quit.
    pub should_quit: bool,
}

impl App {
    pub fn new(game: Game) -> Self {
        let mut app = Self {
            game,
            input: String::new(),
            feedback: String::new(),
            feed: VecDeque::new(),
            should_quit: false,
        };
        // If automated players open the game, let them act right away.
        app.run_automated_turns();
        app
    }

    pub fn on_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Parse and run the current input line, then let any automated
    /// players take their turns.
    pub fn on_submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        let cmd = match command::parse(&line, self.game.is_first_move()) {
            Ok(cmd) => cmd,
            Err(err) => {
                self.feedback = err.message();
                return;
            }
        };
        self.dispatch(cmd);
    }

    fn dispatch(&mut self, cmd: Command) {
        match cmd {
            Command::Exit => self.quit(),
            Command::Undo => {
                self.game.undo();
                self.feedback = "Undid last action.".to_string();
            }
            Command::Redo => {
                self.game.redo();
                self.feedback = "Redid last action.".to_string();
            }
            Command::Pass => {
                let checkpoint = self.game.snapshot();
                let name = self.game.current_player().name.clone();
                self.game.pass_turn();
                self.game.record_checkpoint(checkpoint);
                self.push_feed(format!("{} passed.", name));
                self.feedback.clear();
                self.run_automated_turns();
            }
            Command::Swap(letters) => {
                // Snapshot first, record only on success: a rejected
                // command must not disturb the undo/redo history.
                let checkpoint = self.game.snapshot();
                let name = self.game.current_player().name.clone();
                match self.game.swap_tiles(&letters) {
                    Ok(()) => {
                        self.game.record_checkpoint(checkpoint);
                        self.push_feed(format!("{} swapped {} tiles.", name, letters.len()));
                        self.feedback.clear();
                        self.run_automated_turns();
                    }
                    Err(err) => self.feedback = err.message().to_string(),
                }
            }
            Command::Place {
                word,
                row,
                col,
                horizontal,
                blanks,
            } => {
                let checkpoint = self.game.snapshot();
                let name = self.game.current_player().name.clone();
                let result = match blanks {
                    Some(blanks) => self
                        .game
                        .place_word_with_blanks(&word, row, col, horizontal, &blanks),
                    None => self.game.place_word(&word, row, col, horizontal),
                };
                match result {
                    Ok(gained) => {
                        self.game.record_checkpoint(checkpoint);
                        self.push_feed(describe_move(&name, &word, row, col, horizontal, gained));
                        self.feedback.clear();
                        self.run_automated_turns();
                    }
                    Err(err) => self.feedback = err.message().to_string(),
                }
            }
        }
    }

    /// Let automated players act until a human is on turn again.
    fn run_automated_turns(&mut self) {
        while self.game.current_player().kind == PlayerKind::Automated {
            let name = self.game.current_player().name.clone();
            match self.game.play_automated_turn() {
                Some(Move {
                    word,
                    row,
                    col,
                    horizontal,
                    score,
                }) => self.push_feed(describe_move(&name, &word, row, col, horizontal, score)),
                None => self.push_feed(format!("{} passed.", name)),
            }
        }
    }

    fn push_feed(&mut self, entry: String) {
        self.feed.push_back(entry);
        while self.feed.len() > FEED_MAX {
            self.feed.pop_front();
        }
    }
}

/// Human-readable cell name, e.g. row 7 col 7 -> "8H".
fn cell_name(row: usize, col: usize) -> String {
    format!("{}{}", row + 1, (b'A' + col as u8) as char)
}

fn describe_move(
    name: &str,
    word: &str,
    row: usize,
    col: usize,
    horizontal: bool,
    score: u32,
) -> String {
    format!(
        "{} played {} at {} {} for {} points.",
        name,
        word,
        cell_name(row, col),
        if horizontal { "across" } else { "down" },
        score
    )
}
