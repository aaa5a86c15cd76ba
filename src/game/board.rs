#![allow(dead_code)]
//! The 15x15 board: premium squares, permanent tile placement, and the
//! placement validator shared by human moves and the automated search.
//!
//! Validation produces a [`PlacementPlan`] describing exactly which cells
//! receive new tiles and which of those are wildcards. Scoring and
//! execution both consume the plan, so legality, score, and the tiles
//! actually removed from the rack can never disagree.

use super::{Rack, Tile};

/// Board edge length.
pub const BOARD_SIZE: usize = 15;

/// The mandatory anchor cell for the first move.
pub const CENTER: (usize, usize) = (7, 7);

/// Premium classification of a board cell. Letter premiums multiply one
/// tile's value; word premiums multiply the whole word. A premium is
/// consumed the first (and only) time its cell is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bonus {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

/// Why a move or swap was rejected. All variants are recoverable and
/// surfaced to the acting player; none aborts the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    /// The word is not in the dictionary.
    InvalidWord,
    /// Part of the word falls outside the board.
    OutOfBounds,
    /// A letter disagrees with a tile already on the board.
    ConflictWithBoard,
    /// The rack cannot supply the needed letters, even with wildcards.
    InsufficientTiles,
    /// A wildcard was needed but the declared blank letters ran out.
    MissingBlankAssignment,
    /// First move misses the center, or a later move touches no tile.
    Disconnected,
    /// A newly placed tile would sit next to an existing tile
    /// perpendicular to the word (cross-words are not supported).
    AdjacencyViolation,
    /// A swap asked for letters the rack does not hold.
    InvalidSwap,
}

impl PlayError {
    /// The player-visible message for this rejection.
    pub fn message(&self) -> &'static str {
        match self {
            PlayError::InvalidWord => "Not in dictionary.",
            PlayError::OutOfBounds => "Word does not fit on the board.",
            PlayError::ConflictWithBoard => "Conflicts with tiles already on the board.",
            PlayError::InsufficientTiles => "You don't have the tiles for this word.",
            PlayError::MissingBlankAssignment => "Not enough blank letters declared.",
            PlayError::Disconnected => {
                "Word must cover the center on the first move, or touch an existing tile."
            }
            PlayError::AdjacencyViolation => {
                "New tiles cannot sit directly alongside existing words."
            }
            PlayError::InvalidSwap => "You don't have those tiles to swap.",
        }
    }
}

/// One cell of the board. The occupant is set at most once; premiums are
/// fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Square {
    bonus: Bonus,
    tile: Option<Tile>,
}

impl Square {
    /// This cell's premium classification.
    pub fn bonus(&self) -> Bonus {
        self.bonus
    }

    /// The tile on this cell, if any.
    pub fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    /// Whether a tile occupies this cell.
    pub fn has_tile(&self) -> bool {
        self.tile.is_some()
    }

    /// Place a tile permanently. Overwriting an occupied cell is a
    /// programming error: planned placements only target empty cells.
    fn occupy(&mut self, tile: Tile) {
        assert!(self.tile.is_none(), "square already occupied");
        self.tile = Some(tile);
    }
}

/// Supplies the premium classification for each cell at board
/// construction. Keeps the board independent of where layouts come from.
pub trait BonusLayout {
    fn bonus_at(&self, row: usize, col: usize) -> Bonus;
}

/// The classic premium-square arrangement.
pub struct StandardLayout;

const TRIPLE_WORD: [(usize, usize); 8] = [
    (0, 0),
    (0, 7),
    (0, 14),
    (7, 0),
    (7, 14),
    (14, 0),
    (14, 7),
    (14, 14),
];

const DOUBLE_WORD: [(usize, usize); 17] = [
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (1, 13),
    (2, 12),
    (3, 11),
    (4, 10),
    (10, 4),
    (11, 3),
    (12, 2),
    (13, 1),
    (10, 10),
    (11, 11),
    (12, 12),
    (13, 13),
    (7, 7),
];

const TRIPLE_LETTER: [(usize, usize); 12] = [
    (1, 5),
    (1, 9),
    (5, 1),
    (5, 5),
    (5, 9),
    (5, 13),
    (9, 1),
    (9, 5),
    (9, 9),
    (9, 13),
    (13, 5),
    (13, 9),
];

const DOUBLE_LETTER: [(usize, usize); 24] = [
    (0, 3),
    (0, 11),
    (2, 6),
    (2, 8),
    (3, 0),
    (3, 7),
    (3, 14),
    (6, 2),
    (6, 6),
    (6, 8),
    (6, 12),
    (7, 3),
    (7, 11),
    (8, 2),
    (8, 6),
    (8, 8),
    (8, 12),
    (11, 0),
    (11, 7),
    (11, 14),
    (12, 6),
    (12, 8),
    (14, 3),
    (14, 11),
];

impl BonusLayout for StandardLayout {
    fn bonus_at(&self, row: usize, col: usize) -> Bonus {
        let cell = (row, col);
        if TRIPLE_WORD.contains(&cell) {
            Bonus::TripleWord
        } else if DOUBLE_WORD.contains(&cell) {
            Bonus::DoubleWord
        } else if TRIPLE_LETTER.contains(&cell) {
            Bonus::TripleLetter
        } else if DOUBLE_LETTER.contains(&cell) {
            Bonus::DoubleLetter
        } else {
            Bonus::None
        }
    }
}

/// A layout with no premium cells (plain scoring).
pub struct PlainLayout;

impl BonusLayout for PlainLayout {
    fn bonus_at(&self, _row: usize, _col: usize) -> Bonus {
        Bonus::None
    }
}

/// One newly placed tile within a validated move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlacement {
    /// Position of this letter within the word (0-based).
    pub index: usize,
    pub row: usize,
    pub col: usize,
    /// The letter the placed tile will display.
    pub letter: char,
    /// Whether a wildcard rack tile covers this position.
    pub wildcard: bool,
}

/// A validated placement: the word line plus the cells that actually
/// receive new tiles. Positions of the word that reuse board tiles do
/// not appear in `placements`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementPlan {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub horizontal: bool,
    pub placements: Vec<TilePlacement>,
}

impl PlacementPlan {
    /// How many tiles this move adds to the board.
    pub fn newly_placed(&self) -> usize {
        self.placements.len()
    }

    /// Word positions covered by wildcard tiles (they score 0).
    pub fn wildcard_positions(&self) -> Vec<usize> {
        self.placements
            .iter()
            .filter(|p| p.wildcard)
            .map(|p| p.index)
            .collect()
    }
}

/// Cell of letter `i` for a word starting at (row, col) in the given
/// orientation. May run off the board; callers bounds-check.
pub fn line_cell(row: usize, col: usize, horizontal: bool, i: usize) -> (usize, usize) {
    if horizontal {
        (row, col + i)
    } else {
        (row + i, col)
    }
}

/// The playing board. Owns all 225 squares; tiles placed on it are
/// permanent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec<Vec<Square>>,
}

impl Board {
    /// Build an empty board with premiums from the given layout.
    pub fn new(layout: &dyn BonusLayout) -> Self {
        let grid = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| Square {
                        bonus: layout.bonus_at(row, col),
                        tile: None,
                    })
                    .collect()
            })
            .collect();
        Self { grid }
    }

    /// Whether (row, col) is on the board.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// The square at (row, col). Panics if out of bounds.
    pub fn square(&self, row: usize, col: usize) -> &Square {
        &self.grid[row][col]
    }

    /// Whether an in-bounds cell holds a tile (false off the board).
    pub fn has_tile(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.grid[row][col].has_tile()
    }

    /// The displayed letter at a cell, or None if empty/out of bounds.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        if self.in_bounds(row, col) {
            self.grid[row][col].tile().map(|t| t.letter())
        } else {
            None
        }
    }

    /// Validate a whole move without touching any state.
    ///
    /// Works on a consumable copy of the rack: each rack tile satisfies
    /// at most one letter, exact tiles before wildcards. `blank_letters`
    /// is the with-blanks side channel: when present, every wildcard use
    /// must consume one declared letter, in order. Checks, in order:
    /// bounds and board conflicts per cell, rack satisfiability,
    /// connectivity (center on the first move, overlap after), then the
    /// perpendicular-adjacency restriction on newly placed cells.
    pub fn plan_placement(
        &self,
        word: &str,
        row: usize,
        col: usize,
        horizontal: bool,
        rack: &Rack,
        first_move: bool,
        blank_letters: Option<&str>,
    ) -> Result<PlacementPlan, PlayError> {
        let word = word.to_uppercase();
        let mut rack_copy = rack.clone();
        let mut blanks_remaining = blank_letters.map(|b| b.len());
        let mut placements = Vec::new();
        let mut overlaps_existing = false;
        let mut covers_center = false;

        for (i, letter) in word.chars().enumerate() {
            let (r, c) = line_cell(row, col, horizontal, i);
            if !self.in_bounds(r, c) {
                return Err(PlayError::OutOfBounds);
            }
            if (r, c) == CENTER {
                covers_center = true;
            }
            match self.grid[r][c].tile() {
                Some(tile) => {
                    if tile.letter() != letter {
                        return Err(PlayError::ConflictWithBoard);
                    }
                    overlaps_existing = true;
                }
                None => {
                    let wildcard = if rack_copy.take_exact(letter).is_some() {
                        false
                    } else {
                        if let Some(remaining) = blanks_remaining.as_mut() {
                            if *remaining == 0 {
                                return Err(PlayError::MissingBlankAssignment);
                            }
                            *remaining -= 1;
                        }
                        if rack_copy.take_wildcard().is_none() {
                            return Err(PlayError::InsufficientTiles);
                        }
                        true
                    };
                    placements.push(TilePlacement {
                        index: i,
                        row: r,
                        col: c,
                        letter,
                        wildcard,
                    });
                }
            }
        }

        if first_move {
            if !covers_center {
                return Err(PlayError::Disconnected);
            }
        } else if !overlaps_existing {
            return Err(PlayError::Disconnected);
        }

        for placement in &placements {
            let (r, c) = (placement.row, placement.col);
            let blocked = if horizontal {
                (r > 0 && self.has_tile(r - 1, c)) || self.has_tile(r + 1, c)
            } else {
                (c > 0 && self.has_tile(r, c - 1)) || self.has_tile(r, c + 1)
            };
            if blocked {
                return Err(PlayError::AdjacencyViolation);
            }
        }

        Ok(PlacementPlan {
            word,
            row,
            col,
            horizontal,
            placements,
        })
    }

    /// Convenience legality check without needing the plan.
    pub fn can_place(
        &self,
        word: &str,
        row: usize,
        col: usize,
        horizontal: bool,
        rack: &Rack,
        first_move: bool,
    ) -> bool {
        self.plan_placement(word, row, col, horizontal, rack, first_move, None)
            .is_ok()
    }

    /// Execute a validated plan: remove the planned tiles from the rack
    /// and write them permanently onto the board. Atomic: if any tile is
    /// missing (a plan computed against a different rack), the rack is
    /// restored and neither board nor rack changes.
    pub fn apply_plan(&mut self, plan: &PlacementPlan, rack: &mut Rack) -> bool {
        let mut taken = Vec::with_capacity(plan.placements.len());
        for placement in &plan.placements {
            let tile = if placement.wildcard {
                rack.take_wildcard()
            } else {
                rack.take_exact(placement.letter)
            };
            match tile {
                Some(tile) => taken.push(tile),
                None => {
                    for tile in taken {
                        rack.add(tile);
                    }
                    return false;
                }
            }
        }
        for (placement, tile) in plan.placements.iter().zip(taken) {
            let placed = if tile.is_wildcard() {
                Tile::bound_wildcard(placement.letter)
            } else {
                tile
            };
            self.grid[placement.row][placement.col].occupy(placed);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn place(board: &mut Board, word: &str, row: usize, col: usize, horizontal: bool) {
        let mut rack = rack_of(word);
        let plan = board
            .plan_placement(word, row, col, horizontal, &rack, board_is_empty(board), None)
            .expect("placement should be legal");
        assert!(board.apply_plan(&plan, &mut rack));
    }

    fn board_is_empty(board: &Board) -> bool {
        (0..BOARD_SIZE).all(|r| (0..BOARD_SIZE).all(|c| !board.has_tile(r, c)))
    }

    #[test]
    fn test_word_running_off_the_board_is_out_of_bounds() {
        let board = Board::new(&PlainLayout);
        let rack = rack_of("HELLO");
        let err = board
            .plan_placement("HELLO", 7, 12, true, &rack, true, None)
            .unwrap_err();
        assert_eq!(err, PlayError::OutOfBounds);
    }

    #[test]
    fn test_first_move_must_cover_center() {
        let board = Board::new(&PlainLayout);
        let rack = rack_of("CAT");
        let err = board
            .plan_placement("CAT", 0, 0, true, &rack, true, None)
            .unwrap_err();
        assert_eq!(err, PlayError::Disconnected);
        assert!(board.can_place("CAT", 7, 5, true, &rack, true));
        assert!(board.can_place("CAT", 7, 7, true, &rack, true));
    }

    #[test]
    fn test_later_moves_must_overlap_existing_tiles() {
        let mut board = Board::new(&PlainLayout);
        place(&mut board, "CAT", 7, 7, true);
        let rack = rack_of("DOG");
        let err = board
            .plan_placement("DOG", 0, 0, true, &rack, false, None)
            .unwrap_err();
        assert_eq!(err, PlayError::Disconnected);
    }

    #[test]
    fn test_overlap_reuses_board_tile_without_consuming_rack() {
        let mut board = Board::new(&PlainLayout);
        place(&mut board, "CAT", 7, 7, true);
        // "TO" downward reusing the T at (7,9); rack only supplies the O.
        let rack = rack_of("O");
        let plan = board
            .plan_placement("TO", 7, 9, false, &rack, false, None)
            .expect("overlap placement should be legal");
        assert_eq!(plan.newly_placed(), 1);
        assert_eq!(plan.placements[0].letter, 'O');
        assert_eq!((plan.placements[0].row, plan.placements[0].col), (8, 9));
    }

    #[test]
    fn test_conflicting_board_letter_rejects_move() {
        let mut board = Board::new(&PlainLayout);
        place(&mut board, "CAT", 7, 7, true);
        let rack = rack_of("DOG");
        // "DOG" vertical through (7,7) would need D over the existing C.
        let err = board
            .plan_placement("DOG", 7, 7, false, &rack, false, None)
            .unwrap_err();
        assert_eq!(err, PlayError::ConflictWithBoard);
    }

    #[test]
    fn test_missing_letters_are_insufficient_tiles() {
        let board = Board::new(&PlainLayout);
        let rack = rack_of("CA");
        let err = board
            .plan_placement("CAT", 7, 7, true, &rack, true, None)
            .unwrap_err();
        assert_eq!(err, PlayError::InsufficientTiles);
    }

    #[test]
    fn test_wildcard_fills_missing_letter() {
        let board = Board::new(&PlainLayout);
        let rack = rack_of("CA*");
        let plan = board
            .plan_placement("CAT", 7, 7, true, &rack, true, None)
            .expect("wildcard should cover the T");
        assert_eq!(plan.wildcard_positions(), vec![2]);
    }

    #[test]
    fn test_each_rack_tile_satisfies_at_most_one_letter() {
        let board = Board::new(&PlainLayout);
        // One O cannot cover both Os of "ZOO"; the wildcard covers one.
        let rack = rack_of("ZO*");
        let plan = board
            .plan_placement("ZOO", 7, 7, true, &rack, true, None)
            .expect("Z + O + wildcard covers ZOO");
        assert_eq!(plan.wildcard_positions(), vec![2]);

        let rack = rack_of("ZO");
        let err = board
            .plan_placement("ZOO", 7, 7, true, &rack, true, None)
            .unwrap_err();
        assert_eq!(err, PlayError::InsufficientTiles);
    }

    #[test]
    fn test_declared_blanks_gate_wildcard_use() {
        let board = Board::new(&PlainLayout);
        let rack = rack_of("C**");
        let plan = board
            .plan_placement("CAT", 7, 7, true, &rack, true, Some("AT"))
            .expect("two declared blanks cover A and T");
        assert_eq!(plan.wildcard_positions(), vec![1, 2]);

        let err = board
            .plan_placement("CAT", 7, 7, true, &rack, true, Some("A"))
            .unwrap_err();
        assert_eq!(err, PlayError::MissingBlankAssignment);
    }

    #[test]
    fn test_declared_blank_without_wildcard_tile_is_insufficient() {
        let board = Board::new(&PlainLayout);
        let rack = rack_of("CA");
        let err = board
            .plan_placement("CAT", 7, 7, true, &rack, true, Some("T"))
            .unwrap_err();
        assert_eq!(err, PlayError::InsufficientTiles);
    }

    #[test]
    fn test_perpendicular_neighbor_rejects_new_tile() {
        let mut board = Board::new(&PlainLayout);
        place(&mut board, "CAT", 7, 7, true);
        place(&mut board, "ATE", 7, 8, false);
        // "TON" down from the T of CAT overlaps it, but its new O at
        // (8,9) would sit right of the T placed at (8,8).
        let rack = rack_of("ON");
        let err = board
            .plan_placement("TON", 7, 9, false, &rack, false, None)
            .unwrap_err();
        assert_eq!(err, PlayError::AdjacencyViolation);
    }

    #[test]
    fn test_reused_cells_are_exempt_from_adjacency_check() {
        let mut board = Board::new(&PlainLayout);
        place(&mut board, "CAT", 7, 7, true);
        // "ATE" downward from the A of CAT: the A is reused (its
        // perpendicular neighbors C and T don't matter), and the new
        // T/E below have empty left/right neighbors.
        let rack = rack_of("TE");
        let plan = board
            .plan_placement("ATE", 7, 8, false, &rack, false, None)
            .expect("extension through an existing tile is legal");
        assert_eq!(plan.newly_placed(), 2);
    }

    #[test]
    fn test_apply_plan_binds_wildcard_to_display_letter() {
        let mut board = Board::new(&PlainLayout);
        let mut rack = rack_of("CA*");
        let plan = board
            .plan_placement("CAT", 7, 7, true, &rack, true, None)
            .unwrap();
        assert!(board.apply_plan(&plan, &mut rack));
        let tile = board.square(7, 9).tile().unwrap();
        assert_eq!(tile.letter(), 'T');
        assert!(tile.is_wildcard());
        assert_eq!(tile.value(), 0);
        assert!(rack.is_empty());
    }

    #[test]
    fn test_apply_plan_against_wrong_rack_changes_nothing() {
        let mut board = Board::new(&PlainLayout);
        let rack = rack_of("CAT");
        let plan = board
            .plan_placement("CAT", 7, 7, true, &rack, true, None)
            .unwrap();
        let mut other = rack_of("CA");
        assert!(!board.apply_plan(&plan, &mut other));
        assert_eq!(other, rack_of("CA"));
        assert!(!board.has_tile(7, 7));
    }

    #[test]
    fn test_standard_layout_premiums() {
        let board = Board::new(&StandardLayout);
        assert_eq!(board.square(7, 7).bonus(), Bonus::DoubleWord);
        assert_eq!(board.square(0, 0).bonus(), Bonus::TripleWord);
        assert_eq!(board.square(5, 5).bonus(), Bonus::TripleLetter);
        assert_eq!(board.square(0, 3).bonus(), Bonus::DoubleLetter);
        assert_eq!(board.square(7, 8).bonus(), Bonus::None);
    }
}
