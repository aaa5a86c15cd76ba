//! Scoring engine: letter values, premium gating, bingo bonus
//!
//! Scores are computed against the board *before* the move's tiles are
//! placed: premium cells only count while still empty, so a premium is
//! consumed by the first word to fill it. Cells already holding a tile
//! contribute that tile's stored value, which keeps placed wildcards at
//! 0 points forever.

use super::board::{line_cell, Board, Bonus, PlacementPlan};
use super::{letter_value, RACK_SIZE};

/// Flat bonus for emptying a full rack in one move.
pub const BINGO_BONUS: u32 = 50;

/// Score a word along a line of the board. `wildcard_positions` lists
/// the word positions (0-based) covered by wildcard tiles; they score 0.
/// The caller must have validated the placement; every cell of the line
/// is expected to be on the board.
pub fn score_word(
    board: &Board,
    word: &str,
    row: usize,
    col: usize,
    horizontal: bool,
    wildcard_positions: &[usize],
) -> u32 {
    let mut total = 0;
    let mut word_multiplier = 1;

    for (i, letter) in word.chars().enumerate() {
        let (r, c) = line_cell(row, col, horizontal, i);
        let square = board.square(r, c);
        match square.tile() {
            // Reused tile: its premium was consumed when it was placed.
            Some(tile) => total += tile.value(),
            None => {
                let mut value = if wildcard_positions.contains(&i) {
                    0
                } else {
                    letter_value(letter)
                };
                match square.bonus() {
                    Bonus::DoubleLetter => value *= 2,
                    Bonus::TripleLetter => value *= 3,
                    Bonus::DoubleWord => word_multiplier *= 2,
                    Bonus::TripleWord => word_multiplier *= 3,
                    Bonus::None => {}
                }
                total += value;
            }
        }
    }

    total * word_multiplier
}

/// Score a validated placement plan, including the bingo bonus when the
/// move lays down a full rack of tiles. The bonus lands after the word
/// multiplier.
pub fn score_plan(board: &Board, plan: &PlacementPlan) -> u32 {
    let base = score_word(
        board,
        &plan.word,
        plan.row,
        plan.col,
        plan.horizontal,
        &plan.wildcard_positions(),
    );
    if plan.newly_placed() == RACK_SIZE {
        base + BINGO_BONUS
    } else {
        base
    }
}
