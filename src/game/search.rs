//! Exhaustive best-move search for automated players
//!
//! Brute force: every dictionary word that the rack can assemble is
//! tried at every origin and both orientations, validated with the same
//! placement rules and scored with the same engine as human moves.
//! Strictly-greater comparison means the earliest candidate in
//! enumeration order (dictionary order, then row-major, then horizontal
//! before vertical) wins ties, which keeps the search deterministic.
//!
//! Cost is O(|dictionary| * 225 * 2 * word length) per turn, acceptable
//! for the embedded word list. A larger dictionary would want an index
//! keyed by letter multiset, with the same enumeration order preserved.

use super::board::{Board, BOARD_SIZE, CENTER};
use super::dictionary::Dictionary;
use super::score;
use super::Rack;

/// A candidate move chosen by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub horizontal: bool,
    pub score: u32,
}

/// Whether the rack can assemble `word` outright, spending exact tiles
/// first and wildcards only for letters the rack lacks.
fn rack_can_form(word: &str, rack: &Rack) -> bool {
    let mut copy = rack.clone();
    word.chars()
        .all(|letter| copy.take_exact(letter).is_some() || copy.take_wildcard().is_some())
}

/// Find the highest-scoring legal move for `rack`, or None when every
/// candidate is illegal (the caller then passes). On the first move only
/// the center origin is tried: any legal first word must cover center,
/// so other origins cannot beat it under this enumeration.
pub fn best_move(
    board: &Board,
    dictionary: &Dictionary,
    rack: &Rack,
    first_move: bool,
) -> Option<Move> {
    let mut best: Option<Move> = None;

    for word in dictionary.words() {
        if !rack_can_form(word, rack) {
            continue;
        }
        if first_move {
            for horizontal in [true, false] {
                consider(
                    board, word, CENTER.0, CENTER.1, horizontal, rack, true, &mut best,
                );
            }
        } else {
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    for horizontal in [true, false] {
                        consider(board, word, row, col, horizontal, rack, false, &mut best);
                    }
                }
            }
        }
    }

    best
}

#[allow(clippy::too_many_arguments)]
fn consider(
    board: &Board,
    word: &str,
    row: usize,
    col: usize,
    horizontal: bool,
    rack: &Rack,
    first_move: bool,
    best: &mut Option<Move>,
) {
    let plan = match board.plan_placement(word, row, col, horizontal, rack, first_move, None) {
        Ok(plan) => plan,
        Err(_) => return,
    };
    let score = score::score_plan(board, &plan);
    if best.as_ref().is_none_or(|b| score > b.score) {
        *best = Some(Move {
            word: plan.word,
            row,
            col,
            horizontal,
            score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{PlainLayout, StandardLayout};
    use crate::game::Tile;

    fn rack_of(letters: &str) -> Rack {
        Rack::from_tiles(
            letters
                .chars()
                .map(|c| {
                    if c == '*' {
                        Tile::wildcard()
                    } else {
                        Tile::new(c)
                    }
                })
                .collect(),
        )
    }

    fn place_first(board: &mut Board, word: &str) {
        let mut rack = rack_of(word);
        let plan = board
            .plan_placement(word, 7, 7, true, &rack, true, None)
            .expect("setup placement should be legal");
        assert!(board.apply_plan(&plan, &mut rack));
    }

    #[test]
    fn test_first_move_is_anchored_at_center() {
        let board = Board::new(&StandardLayout);
        let dict = Dictionary::from_words(["CAT"]);
        let mv = best_move(&board, &dict, &rack_of("TACPPPP"), true).unwrap();
        assert_eq!((mv.row, mv.col), CENTER);
        assert_eq!(mv.word, "CAT");
        assert_eq!(mv.score, 10);
    }

    #[test]
    fn test_highest_scoring_word_wins() {
        let board = Board::new(&StandardLayout);
        // JO (8+1)*2 = 18 beats CAT (3+1+1)*2 = 10 despite coming later.
        let dict = Dictionary::from_words(["CAT", "JO"]);
        let mv = best_move(&board, &dict, &rack_of("CATJO"), true).unwrap();
        assert_eq!(mv.word, "JO");
        assert_eq!(mv.score, 18);
    }

    #[test]
    fn test_ties_go_to_the_earliest_candidate() {
        let board = Board::new(&StandardLayout);
        // CAT and DOG both score 10 from the center; CAT enumerates first.
        let dict = Dictionary::from_words(["CAT", "DOG"]);
        let mv = best_move(&board, &dict, &rack_of("CATDOG"), true).unwrap();
        assert_eq!(mv.word, "CAT");
        assert!(mv.horizontal);
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = Board::new(&StandardLayout);
        let dict = Dictionary::from_words(["CAT", "DOG", "JO", "TO"]);
        let rack = rack_of("CATDOJG");
        let first = best_move(&board, &dict, &rack, true);
        let second = best_move(&board, &dict, &rack, true);
        assert_eq!(first, second);
    }

    #[test]
    fn test_later_moves_extend_existing_words() {
        let mut board = Board::new(&PlainLayout);
        place_first(&mut board, "CAT");
        // The prefilter needs the whole word from the rack, even though
        // the placement will reuse board tiles for part of it.
        let dict = Dictionary::from_words(["CATS"]);
        let mv = best_move(&board, &dict, &rack_of("SCATXYZ"), false).unwrap();
        assert_eq!(mv.word, "CATS");
        // Earliest legal origin in row-major order: vertical through the
        // T of CAT, starting at (5,9).
        assert_eq!((mv.row, mv.col), (5, 9));
        assert!(!mv.horizontal);
        assert_eq!(mv.score, 6);
    }

    #[test]
    fn test_no_legal_move_yields_none() {
        let mut board = Board::new(&PlainLayout);
        place_first(&mut board, "CAT");
        // DOG is formable but cannot touch the existing word anywhere
        // without conflicting or sitting alongside it.
        let dict = Dictionary::from_words(["DOG"]);
        assert_eq!(best_move(&board, &dict, &rack_of("DOG"), false), None);
    }

    #[test]
    fn test_wildcards_extend_the_rack() {
        let board = Board::new(&StandardLayout);
        let dict = Dictionary::from_words(["CAT"]);
        let mv = best_move(&board, &dict, &rack_of("C*T"), true).unwrap();
        assert_eq!(mv.word, "CAT");
        // The wildcard covers the A and scores 0: (3+0+1)*2.
        assert_eq!(mv.score, 8);
    }
}
