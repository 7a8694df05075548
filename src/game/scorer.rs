use std::collections::HashSet;

use crate::{
    game::premium::PremiumSquares,
    models::{Letter, Position, BINGO_BONUS, RACK_SIZE},
};

pub struct Scorer;

impl Scorer {
    /// Score a single word given every cell it spans, in order.
    ///
    /// Scoring rules:
    /// - Each letter has a base value
    /// - A letter placed this turn on a DL/TL square counts 2x/3x
    /// - A letter placed this turn on a DW/TW square multiplies the whole
    ///   word by 2/3, after all letters are summed
    /// - Letters already on the board count at face value; their squares
    ///   were used up on the turn they were played
    pub fn score_word(
        cells: &[(Position, Letter)],
        new_tiles: &HashSet<Position>,
        premiums: &PremiumSquares,
    ) -> u32 {
        let mut score = 0;
        let mut word_multiplier = 1;

        for &(pos, letter) in cells {
            if new_tiles.contains(&pos) {
                score += letter.value() * premiums.letter_multiplier(pos);
                word_multiplier *= premiums.word_multiplier(pos);
            } else {
                score += letter.value();
            }
        }

        score * word_multiplier
    }

    /// Total for a move: every word it formed plus the bingo bonus
    pub fn turn_score<I: IntoIterator<Item = u32>>(word_scores: I, tiles_placed: usize) -> u32 {
        word_scores.into_iter().sum::<u32>() + Self::bingo_bonus(tiles_placed)
    }

    /// Flat bonus for emptying a full rack in one move
    fn bingo_bonus(tiles_placed: usize) -> u32 {
        if tiles_placed == RACK_SIZE { BINGO_BONUS } else { 0 }
    }
}
