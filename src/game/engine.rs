#![allow(dead_code)]
//! Turn machine: players, actions, undo/redo history, observers
//!
//! All mutations flow through [`Game`]. Every action validates fully
//! before touching state; a rejection only records a message on the
//! acting player. Successful actions advance the turn cyclically and
//! push a synchronous notification to registered observers.

use rand::Rng;

use super::board::{Board, BonusLayout, PlayError};
use super::dictionary::Dictionary;
use super::search::{self, Move};
use super::{score, Bag, Rack, RACK_SIZE, WILDCARD_CHAR};

/// How a player's turns are decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves come from outside (the command line).
    Human,
    /// Moves come from the exhaustive best-move search.
    Automated,
}

/// One participant: a rack of tiles, a running score, and the message
/// from their most recent rejected action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
    pub rack: Rack,
    pub score: u32,
    pub last_error: Option<String>,
}

impl Player {
    fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            rack: Rack::new(),
            score: 0,
            last_error: None,
        }
    }
}

/// Receives a synchronous push after every state-changing action,
/// including snapshot restores. Observers are called in registration
/// order.
pub trait GameObserver {
    fn update(&mut self, board: &Board, players: &[Player], current: usize);
}

/// A deep copy of everything mutable. Restoring one replaces the live
/// state wholesale; nothing in a snapshot aliases the live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    board: Board,
    players: Vec<Player>,
    bag: Bag,
    current: usize,
    first_move: bool,
}

/// The running game: board, players, bag, turn pointer, history.
pub struct Game {
    board: Board,
    players: Vec<Player>,
    bag: Bag,
    current: usize,
    first_move: bool,
    dictionary: Dictionary,
    observers: Vec<Box<dyn GameObserver>>,
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl Game {
    /// Start a game: shuffled standard bag, 7 tiles drawn per player in
    /// seating order, first player to move.
    pub fn new(
        names: Vec<(String, PlayerKind)>,
        dictionary: Dictionary,
        layout: &dyn BonusLayout,
    ) -> Self {
        Self::new_with_rng(names, dictionary, layout, &mut rand::rng())
    }

    /// Start a game with a caller-supplied RNG (seeded in tests).
    pub fn new_with_rng<R: Rng>(
        names: Vec<(String, PlayerKind)>,
        dictionary: Dictionary,
        layout: &dyn BonusLayout,
        rng: &mut R,
    ) -> Self {
        let mut bag = Bag::standard_with_rng(rng);
        let players = names
            .into_iter()
            .map(|(name, kind)| {
                let mut player = Player::new(name, kind);
                player.rack.refill(&mut bag, RACK_SIZE);
                player
            })
            .collect();
        Self {
            board: Board::new(layout),
            players,
            bag,
            current: 0,
            first_move: true,
            dictionary,
            observers: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// Register an observer; it is called after every state change.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Push the current state to all observers (also used to deliver the
    /// initial state after setup).
    pub fn publish(&mut self) {
        let current = self.current;
        for observer in &mut self.observers {
            observer.update(&self.board, &self.players, current);
        }
    }

    /// Place a word for the current player. On success returns the
    /// points gained and advances the turn; on rejection nothing changes
    /// except the player's last-error message.
    pub fn place_word(
        &mut self,
        word: &str,
        row: usize,
        col: usize,
        horizontal: bool,
    ) -> Result<u32, PlayError> {
        self.place(word, row, col, horizontal, None)
    }

    /// Place a word using wildcard tiles. `blank_letters` declares, in
    /// left-to-right order, the letters the wildcards stand for; each
    /// wildcard use consumes one declared letter.
    pub fn place_word_with_blanks(
        &mut self,
        word: &str,
        row: usize,
        col: usize,
        horizontal: bool,
        blank_letters: &str,
    ) -> Result<u32, PlayError> {
        self.place(word, row, col, horizontal, Some(blank_letters))
    }

    fn place(
        &mut self,
        word: &str,
        row: usize,
        col: usize,
        horizontal: bool,
        blank_letters: Option<&str>,
    ) -> Result<u32, PlayError> {
        if !self.dictionary.is_valid_word(word) {
            return Err(self.reject(PlayError::InvalidWord));
        }

        let rack = &self.players[self.current].rack;
        let plan = match self.board.plan_placement(
            word,
            row,
            col,
            horizontal,
            rack,
            self.first_move,
            blank_letters,
        ) {
            Ok(plan) => plan,
            Err(err) => return Err(self.reject(err)),
        };

        // Scored against the pre-placement board so premiums gate on
        // cells still being empty.
        let gained = score::score_plan(&self.board, &plan);
        let player = &mut self.players[self.current];
        if !self.board.apply_plan(&plan, &mut player.rack) {
            // The plan came from this exact rack, so this cannot fire.
            return Err(self.reject(PlayError::InsufficientTiles));
        }
        player.score += gained;
        player.rack.refill(&mut self.bag, plan.newly_placed());
        player.last_error = None;
        self.first_move = false;
        self.advance_turn();
        Ok(gained)
    }

    /// Swap rack tiles for fresh ones from the bag. Requested letters
    /// must be in the rack exactly (a wildcard only satisfies `*`).
    /// Counts as a full turn.
    pub fn swap_tiles(&mut self, letters: &str) -> Result<(), PlayError> {
        let letters = letters.to_uppercase();

        let mut copy = self.players[self.current].rack.clone();
        for letter in letters.chars() {
            let available = if letter == WILDCARD_CHAR {
                copy.take_wildcard()
            } else {
                copy.take_exact(letter)
            };
            if available.is_none() {
                return Err(self.reject(PlayError::InvalidSwap));
            }
        }

        let player = &mut self.players[self.current];
        let mut returned = 0;
        for letter in letters.chars() {
            let tile = if letter == WILDCARD_CHAR {
                player.rack.take_wildcard()
            } else {
                player.rack.take_exact(letter)
            };
            if let Some(tile) = tile {
                self.bag.put_back(tile);
                returned += 1;
            }
        }
        player.rack.refill(&mut self.bag, returned);
        player.last_error = None;
        self.advance_turn();
        Ok(())
    }

    /// Give up the turn. Never mutates board, racks, or scores.
    pub fn pass_turn(&mut self) {
        self.advance_turn();
    }

    /// Run one turn for an automated player: search for the best legal
    /// move and place it, or pass when nothing is playable. Returns the
    /// move made, if any.
    pub fn play_automated_turn(&mut self) -> Option<Move> {
        let rack = &self.players[self.current].rack;
        let best = search::best_move(&self.board, &self.dictionary, rack, self.first_move);
        match best {
            Some(mv) => {
                if self
                    .place_word(&mv.word, mv.row, mv.col, mv.horizontal)
                    .is_err()
                {
                    // Search only yields validated moves; pass defensively.
                    self.pass_turn();
                    return None;
                }
                Some(mv)
            }
            None => {
                self.pass_turn();
                None
            }
        }
    }

    /// Record the current state on the undo stack. Any new checkpoint
    /// invalidates forward (redo) history.
    pub fn save_checkpoint(&mut self) {
        let snapshot = self.snapshot();
        self.record_checkpoint(snapshot);
    }

    /// Push a snapshot taken earlier onto the undo stack. Callers that
    /// attempt an action that may be rejected snapshot first and record
    /// only on success, so a rejection leaves the history untouched.
    pub fn record_checkpoint(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Restore the most recent checkpoint; no-op when there is none.
    pub fn undo(&mut self) {
        if let Some(previous) = self.undo_stack.pop() {
            let now = self.snapshot();
            self.redo_stack.push(now);
            self.restore(previous);
        }
    }

    /// Re-apply the state undone last; no-op when there is none.
    pub fn redo(&mut self) {
        if let Some(next) = self.redo_stack.pop() {
            let now = self.snapshot();
            self.undo_stack.push(now);
            self.restore(next);
        }
    }

    /// Deep copy of all mutable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            players: self.players.clone(),
            bag: self.bag.clone(),
            current: self.current,
            first_move: self.first_move,
        }
    }

    /// Replace the live state with a snapshot and notify observers.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.players = snapshot.players;
        self.bag = snapshot.bag;
        self.current = snapshot.current;
        self.first_move = snapshot.first_move;
        self.publish();
    }

    /// Replace a player's rack outright (rigged game states in tests).
    #[cfg(test)]
    pub(crate) fn set_rack_for_test(&mut self, index: usize, rack: Rack) {
        self.players[index].rack = rack;
    }

    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        self.publish();
    }

    fn reject(&mut self, err: PlayError) -> PlayError {
        self.players[self.current].last_error = Some(err.message().to_string());
        self.publish();
        err
    }
}
