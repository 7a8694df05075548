use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::{Multiplier, Position};

const TRIPLE_WORD: &[(usize, usize)] = &[
    (0, 0), (0, 7), (0, 14),
    (7, 0), (7, 14),
    (14, 0), (14, 7), (14, 14),
];

const DOUBLE_WORD: &[(usize, usize)] = &[
    (1, 1), (1, 13), (2, 2), (2, 12), (3, 3), (3, 11), (4, 4), (4, 10),
    (7, 7),
    (10, 4), (10, 10), (11, 3), (11, 11), (12, 2), (12, 12), (13, 1), (13, 13),
];

const TRIPLE_LETTER: &[(usize, usize)] = &[
    (1, 5), (1, 9),
    (5, 1), (5, 5), (5, 9), (5, 13),
    (9, 1), (9, 5), (9, 9), (9, 13),
    (13, 5), (13, 9),
];

const DOUBLE_LETTER: &[(usize, usize)] = &[
    (0, 3), (0, 11),
    (2, 6), (2, 8),
    (3, 0), (3, 7), (3, 14),
    (6, 2), (6, 6), (6, 8), (6, 12),
    (7, 3), (7, 11),
    (8, 2), (8, 6), (8, 8), (8, 12),
    (11, 0), (11, 7), (11, 14),
    (12, 6), (12, 8),
    (14, 3), (14, 11),
];

static STANDARD: Lazy<PremiumSquares> = Lazy::new(|| {
    let mut squares = PremiumSquares::empty();
    for &(row, col) in TRIPLE_WORD {
        squares.set_word(Position::new(row, col), 3);
    }
    for &(row, col) in DOUBLE_WORD {
        squares.set_word(Position::new(row, col), 2);
    }
    for &(row, col) in TRIPLE_LETTER {
        squares.set_letter(Position::new(row, col), 3);
    }
    for &(row, col) in DOUBLE_LETTER {
        squares.set_letter(Position::new(row, col), 2);
    }
    squares
});

/// Letter and word multiplier tables keyed by board coordinate.
/// Squares missing from a table multiply by 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PremiumSquares {
    letter: HashMap<Position, u32>,
    word: HashMap<Position, u32>,
}

impl PremiumSquares {
    /// The standard board layout
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// A board with no premium squares at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn set_letter(&mut self, pos: Position, multiplier: u32) {
        self.letter.insert(pos, multiplier);
    }

    pub fn set_word(&mut self, pos: Position, multiplier: u32) {
        self.word.insert(pos, multiplier);
    }

    pub fn letter_multiplier(&self, pos: Position) -> u32 {
        self.letter.get(&pos).copied().unwrap_or(1)
    }

    pub fn word_multiplier(&self, pos: Position) -> u32 {
        self.word.get(&pos).copied().unwrap_or(1)
    }

    /// Premium shown on a square, for rendering
    pub fn premium_at(&self, pos: Position) -> Option<Multiplier> {
        match (self.word_multiplier(pos), self.letter_multiplier(pos)) {
            (3, _) => Some(Multiplier::TripleWord),
            (2, _) => Some(Multiplier::DoubleWord),
            (_, 3) => Some(Multiplier::TripleLetter),
            (_, 2) => Some(Multiplier::DoubleLetter),
            _ => None,
        }
    }
}
