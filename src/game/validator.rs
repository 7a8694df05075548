use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::{
    dictionary::Lexicon,
    game::{board::Board, error::GameError, premium::PremiumSquares, rack::Rack, scorer::Scorer},
    models::{Letter, Placement, Position, ScoredWord, RACK_SIZE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Index that changes when moving along this axis
    fn coord(self, pos: Position) -> usize {
        match self {
            Axis::Horizontal => pos.col,
            Axis::Vertical => pos.row,
        }
    }

    /// Neighbouring cell along this axis, `None` past the board edge
    fn step(self, pos: Position, forward: bool) -> Option<Position> {
        let next = match (self, forward) {
            (Axis::Horizontal, true) => Position::new(pos.row, pos.col + 1),
            (Axis::Horizontal, false) => Position::new(pos.row, pos.col.checked_sub(1)?),
            (Axis::Vertical, true) => Position::new(pos.row + 1, pos.col),
            (Axis::Vertical, false) => Position::new(pos.row.checked_sub(1)?, pos.col),
        };
        next.in_bounds().then_some(next)
    }
}

/// What a legal move would be worth if committed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEvaluation {
    pub words: Vec<ScoredWord>,
    pub tiles_placed: usize,
    pub bingo: bool,
    pub score: u32,
}

/// Checks a candidate move against the board, the player's rack and the
/// lexicon. Never mutates anything it is given.
pub struct MoveValidator<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
    premiums: &'a PremiumSquares,
}

impl<'a> MoveValidator<'a> {
    pub fn new(board: &'a Board, lexicon: &'a Lexicon, premiums: &'a PremiumSquares) -> Self {
        Self {
            board,
            lexicon,
            premiums,
        }
    }

    /// Run every legality check in order and stop at the first failure.
    ///
    /// The order is fixed so the same bad move always reports the same
    /// reason: rack, colinearity, uniqueness, contiguity, connection, words.
    pub fn validate(
        &self,
        rack: &Rack,
        placements: &[Placement],
        first_move: bool,
    ) -> Result<MoveEvaluation, GameError> {
        let result = self.run_checks(rack, placements, first_move);
        if let Err(e) = &result {
            tracing::debug!("Validation: move of {} tiles rejected: {}", placements.len(), e);
        }
        result
    }

    fn run_checks(
        &self,
        rack: &Rack,
        placements: &[Placement],
        first_move: bool,
    ) -> Result<MoveEvaluation, GameError> {
        Self::check_shape(placements)?;
        Self::check_rack(rack, placements)?;
        let axis = Self::check_colinear(placements)?;
        self.check_unique(placements)?;
        self.check_contiguous(placements, axis)?;
        self.check_connected(placements, first_move)?;
        let words = self.collect_words(placements, axis)?;

        let score = Scorer::turn_score(words.iter().map(|w| w.score), placements.len());
        Ok(MoveEvaluation {
            words,
            tiles_placed: placements.len(),
            bingo: placements.len() == RACK_SIZE,
            score,
        })
    }

    fn check_shape(placements: &[Placement]) -> Result<(), GameError> {
        if placements.is_empty() {
            return Err(GameError::EmptyMove);
        }
        match placements.iter().map(Placement::position).find(|p| !p.in_bounds()) {
            Some(pos) => Err(GameError::OutOfBounds(pos)),
            None => Ok(()),
        }
    }

    /// Claimed letters must come out of a copy of the rack
    fn check_rack(rack: &Rack, placements: &[Placement]) -> Result<(), GameError> {
        let letters: Vec<Letter> = placements.iter().map(|p| p.letter).collect();
        rack.without(&letters)
            .map(|_| ())
            .ok_or(GameError::IllegalRackUse)
    }

    /// All columns equal reads as vertical, which includes a lone tile
    fn check_colinear(placements: &[Placement]) -> Result<Axis, GameError> {
        let first = placements[0];
        if placements.iter().all(|p| p.col == first.col) {
            Ok(Axis::Vertical)
        } else if placements.iter().all(|p| p.row == first.row) {
            Ok(Axis::Horizontal)
        } else {
            Err(GameError::NonLinearPlacement)
        }
    }

    fn check_unique(&self, placements: &[Placement]) -> Result<(), GameError> {
        let mut seen = HashSet::with_capacity(placements.len());
        for pos in placements.iter().map(Placement::position) {
            if !seen.insert(pos) || self.board.is_occupied(pos) {
                return Err(GameError::DuplicateOrOccupiedCell(pos));
            }
        }
        Ok(())
    }

    fn check_contiguous(&self, placements: &[Placement], axis: Axis) -> Result<(), GameError> {
        let placed: HashSet<Position> = placements.iter().map(Placement::position).collect();
        let (first, last) = Self::extremes(placements, axis);

        let mut pos = first;
        while pos != last {
            pos = match axis.step(pos, true) {
                Some(next) => next,
                None => break,
            };
            if !placed.contains(&pos) && !self.board.is_occupied(pos) {
                return Err(GameError::DiscontinuousPlacement(pos));
            }
        }
        Ok(())
    }

    fn check_connected(&self, placements: &[Placement], first_move: bool) -> Result<(), GameError> {
        let connected = if first_move {
            placements.iter().any(|p| p.position() == Position::CENTER)
        } else {
            placements
                .iter()
                .any(|p| p.position().neighbors().any(|n| self.board.is_occupied(n)))
        };

        if connected {
            Ok(())
        } else {
            Err(GameError::DisconnectedFromBoard)
        }
    }

    /// Find, check and score the main word and every cross word
    fn collect_words(&self, placements: &[Placement], axis: Axis) -> Result<Vec<ScoredWord>, GameError> {
        let new_tiles: HashMap<Position, Letter> =
            placements.iter().map(|p| (p.position(), p.letter)).collect();
        let new_positions: HashSet<Position> = new_tiles.keys().copied().collect();
        let mut words = Vec::new();

        let (first, last) = Self::extremes(placements, axis);
        let (start, end) = self.word_span(first, last, axis);
        if start != end {
            words.push(self.check_word(start, end, axis, &new_tiles, &new_positions)?);
        }

        let cross = axis.perpendicular();
        for pos in placements.iter().map(Placement::position) {
            let (start, end) = self.word_span(pos, pos, cross);
            if start == end {
                continue;
            }
            words.push(self.check_word(start, end, cross, &new_tiles, &new_positions)?);
        }

        // A lone tile touching nothing in either direction spells no word
        if words.is_empty() {
            let lone: String = placements.iter().map(|p| p.letter.as_char()).collect();
            return Err(GameError::InvalidWord(lone));
        }

        Ok(words)
    }

    fn check_word(
        &self,
        start: Position,
        end: Position,
        axis: Axis,
        new_tiles: &HashMap<Position, Letter>,
        new_positions: &HashSet<Position>,
    ) -> Result<ScoredWord, GameError> {
        let cells = self.span_cells(start, end, axis, new_tiles);
        let word: String = cells.iter().map(|(_, l)| l.as_char()).collect();

        if !self.lexicon.is_valid_word(&word) {
            return Err(GameError::InvalidWord(word));
        }

        let score = Scorer::score_word(&cells, new_positions, self.premiums);
        Ok(ScoredWord {
            word,
            start,
            end,
            score,
        })
    }

    /// Grow `[first, last]` outward along `axis` over occupied cells
    fn word_span(&self, first: Position, last: Position, axis: Axis) -> (Position, Position) {
        let mut start = first;
        while let Some(prev) = axis.step(start, false) {
            if !self.board.is_occupied(prev) {
                break;
            }
            start = prev;
        }

        let mut end = last;
        while let Some(next) = axis.step(end, true) {
            if !self.board.is_occupied(next) {
                break;
            }
            end = next;
        }

        (start, end)
    }

    fn span_cells(
        &self,
        start: Position,
        end: Position,
        axis: Axis,
        new_tiles: &HashMap<Position, Letter>,
    ) -> Vec<(Position, Letter)> {
        let mut cells = Vec::new();
        let mut cursor = Some(start);
        while let Some(pos) = cursor {
            if let Some(letter) = new_tiles.get(&pos).copied().or_else(|| self.board.at(pos)) {
                cells.push((pos, letter));
            }
            if pos == end {
                break;
            }
            cursor = axis.step(pos, true);
        }
        cells
    }

    /// Lowest and highest placed cell along `axis`
    fn extremes(placements: &[Placement], axis: Axis) -> (Position, Position) {
        let mut first = placements[0].position();
        let mut last = first;
        for pos in placements.iter().map(Placement::position) {
            if axis.coord(pos) < axis.coord(first) {
                first = pos;
            }
            if axis.coord(pos) > axis.coord(last) {
                last = pos;
            }
        }
        (first, last)
    }
}
