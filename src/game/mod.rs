#![allow(dead_code)]
//! Game logic: tiles, bag, racks, board, scoring, turns, move search

pub mod board;
pub mod dictionary;
pub mod engine;
pub mod score;
pub mod search;

use once_cell::sync::Lazy;
use rand::prelude::*;
use std::collections::{HashMap, VecDeque};

/// Maximum number of tiles a player holds at once.
pub const RACK_SIZE: usize = 7;

/// Placeholder letter shown on a wildcard tile before it is bound.
pub const WILDCARD_CHAR: char = '*';

/// Standard tile distribution: (letter, copies in the bag).
/// Two wildcard tiles are added on top of these for a 100-tile bag.
const TILE_DISTRIBUTION: [(char, usize); 26] = [
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

/// Number of wildcard tiles in a standard bag.
const WILDCARD_COUNT: usize = 2;

/// Point value for each letter. Built once at first use and immutable
/// thereafter; wildcards score 0 and never consult this table.
pub static LETTER_VALUES: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    let mut values = HashMap::new();
    for letter in ['A', 'E', 'I', 'O', 'U', 'L', 'N', 'S', 'T', 'R'] {
        values.insert(letter, 1);
    }
    for letter in ['D', 'G'] {
        values.insert(letter, 2);
    }
    for letter in ['B', 'C', 'M', 'P'] {
        values.insert(letter, 3);
    }
    for letter in ['F', 'H', 'V', 'W', 'Y'] {
        values.insert(letter, 4);
    }
    values.insert('K', 5);
    for letter in ['J', 'X'] {
        values.insert(letter, 8);
    }
    for letter in ['Q', 'Z'] {
        values.insert(letter, 10);
    }
    values
});

/// Point value of a letter, case-insensitive. Unknown characters score 0.
pub fn letter_value(letter: char) -> u32 {
    LETTER_VALUES
        .get(&letter.to_ascii_uppercase())
        .copied()
        .unwrap_or(0)
}

/// A single letter tile. Wildcards carry no inherent letter: they show
/// `*` in the rack, are rebound to a chosen letter when placed, and
/// always score 0 no matter what they display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    letter: char,
    value: u32,
    wildcard: bool,
}

impl Tile {
    /// Create a regular tile for a letter, with its standard value.
    pub fn new(letter: char) -> Self {
        let letter = letter.to_ascii_uppercase();
        Self {
            letter,
            value: letter_value(letter),
            wildcard: false,
        }
    }

    /// Create an unbound wildcard tile.
    pub fn wildcard() -> Self {
        Self {
            letter: WILDCARD_CHAR,
            value: 0,
            wildcard: true,
        }
    }

    /// A wildcard rebound to the letter it will display on the board.
    /// The tile stays a wildcard and keeps scoring 0.
    pub fn bound_wildcard(letter: char) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            value: 0,
            wildcard: true,
        }
    }

    /// The letter this tile displays.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The tile's point value (always 0 for wildcards).
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether this tile is a wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }
}

/// The bag of undrawn tiles. Draw order is fixed at construction by a
/// single shuffle; swapped-out tiles rejoin at the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    tiles: VecDeque<Tile>,
}

impl Bag {
    /// Build a full standard bag, shuffled with the thread RNG.
    pub fn standard() -> Self {
        Self::standard_with_rng(&mut rand::rng())
    }

    /// Build a full standard bag using a specific RNG (for seeding in tests).
    pub fn standard_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut tiles = Vec::new();
        for (letter, count) in TILE_DISTRIBUTION {
            for _ in 0..count {
                tiles.push(Tile::new(letter));
            }
        }
        for _ in 0..WILDCARD_COUNT {
            tiles.push(Tile::wildcard());
        }
        tiles.shuffle(rng);
        Self {
            tiles: tiles.into(),
        }
    }

    /// An empty bag (useful for rigging game states in tests).
    pub fn empty() -> Self {
        Self {
            tiles: VecDeque::new(),
        }
    }

    /// Draw the next tile, or None if the bag is empty.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop_front()
    }

    /// Return a tile to the back of the bag (used by swaps).
    pub fn put_back(&mut self, tile: Tile) {
        self.tiles.push_back(tile);
    }

    /// Number of tiles remaining.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the bag is out of tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// A player's hand of up to [`RACK_SIZE`] tiles, held in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    /// An empty rack.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rack holding the given tiles (tests and rigged setups).
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// The tiles currently held.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles held.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the rack is empty.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The displayed letters, in rack order (wildcards show `*`).
    pub fn letters(&self) -> Vec<char> {
        self.tiles.iter().map(|t| t.letter()).collect()
    }

    /// Remove and return one non-wildcard tile showing `letter`, if any.
    pub fn take_exact(&mut self, letter: char) -> Option<Tile> {
        let letter = letter.to_ascii_uppercase();
        let idx = self
            .tiles
            .iter()
            .position(|t| !t.is_wildcard() && t.letter() == letter)?;
        Some(self.tiles.remove(idx))
    }

    /// Remove and return one wildcard tile, if any.
    pub fn take_wildcard(&mut self) -> Option<Tile> {
        let idx = self.tiles.iter().position(|t| t.is_wildcard())?;
        Some(self.tiles.remove(idx))
    }

    /// Add a tile to the rack. Refill logic keeps the rack at or below
    /// [`RACK_SIZE`]; this does not enforce it.
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Draw from the bag until the rack holds [`RACK_SIZE`] tiles, the
    /// bag empties, or `count` tiles have been drawn.
    pub fn refill(&mut self, bag: &mut Bag, mut count: usize) {
        while self.tiles.len() < RACK_SIZE && count > 0 {
            match bag.draw() {
                Some(tile) => self.tiles.push(tile),
                None => break,
            }
            count -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_standard_bag_has_100_tiles() {
        let bag = Bag::standard();
        assert_eq!(bag.len(), 100);
    }

    #[test]
    fn test_standard_bag_letter_counts() {
        let mut bag = Bag::standard();
        let mut counts: HashMap<char, usize> = HashMap::new();
        let mut wildcards = 0;
        while let Some(tile) = bag.draw() {
            if tile.is_wildcard() {
                wildcards += 1;
            } else {
                *counts.entry(tile.letter()).or_insert(0) += 1;
            }
        }
        assert_eq!(wildcards, WILDCARD_COUNT);
        for (letter, expected) in TILE_DISTRIBUTION {
            assert_eq!(counts.get(&letter), Some(&expected), "count for {}", letter);
        }
    }

    #[test]
    fn test_seeded_bags_draw_identically() {
        let mut bag1 = Bag::standard_with_rng(&mut StdRng::seed_from_u64(7));
        let mut bag2 = Bag::standard_with_rng(&mut StdRng::seed_from_u64(7));
        while let Some(tile) = bag1.draw() {
            assert_eq!(Some(tile), bag2.draw());
        }
        assert!(bag2.is_empty());
    }

    #[test]
    fn test_wildcard_scores_zero_even_when_bound() {
        let tile = Tile::bound_wildcard('Q');
        assert_eq!(tile.letter(), 'Q');
        assert_eq!(tile.value(), 0);
        assert!(tile.is_wildcard());
    }

    #[test]
    fn test_letter_values_match_standard_distribution() {
        assert_eq!(letter_value('A'), 1);
        assert_eq!(letter_value('d'), 2);
        assert_eq!(letter_value('C'), 3);
        assert_eq!(letter_value('F'), 4);
        assert_eq!(letter_value('K'), 5);
        assert_eq!(letter_value('J'), 8);
        assert_eq!(letter_value('Z'), 10);
        assert_eq!(letter_value('*'), 0);
    }

    #[test]
    fn test_rack_refill_caps_at_seven() {
        let mut bag = Bag::standard_with_rng(&mut StdRng::seed_from_u64(1));
        let mut rack = Rack::new();
        rack.refill(&mut bag, 99);
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(bag.len(), 100 - RACK_SIZE);
    }

    #[test]
    fn test_rack_refill_stops_on_empty_bag() {
        let mut bag = Bag::empty();
        bag.put_back(Tile::new('A'));
        bag.put_back(Tile::new('B'));
        let mut rack = Rack::new();
        rack.refill(&mut bag, 5);
        assert_eq!(rack.len(), 2);
        assert!(bag.is_empty());
    }

    #[test]
    fn test_take_exact_prefers_real_tiles_over_wildcards() {
        let mut rack = Rack::from_tiles(vec![Tile::wildcard(), Tile::new('A')]);
        let taken = rack.take_exact('A').unwrap();
        assert!(!taken.is_wildcard());
        assert_eq!(rack.len(), 1);
        assert!(rack.tiles()[0].is_wildcard());
    }

    #[test]
    fn test_take_exact_does_not_consume_wildcards() {
        let mut rack = Rack::from_tiles(vec![Tile::wildcard()]);
        assert!(rack.take_exact('A').is_none());
        assert_eq!(rack.len(), 1);
    }
}
