use rand::{rngs::StdRng, seq::SliceRandom};

use crate::{models::Letter, utils::letters::TILE_DISTRIBUTION};

/// The bag of undrawn tiles.
///
/// Tiles are kept shuffled and drawn from the end, so every draw is uniform
/// without replacement.
#[derive(Debug, Clone)]
pub struct TilePool {
    tiles: Vec<Letter>,
    rng: StdRng,
}

impl TilePool {
    /// Fill a bag with the standard 100-tile distribution
    pub fn standard(rng: StdRng) -> Self {
        let mut tiles = Vec::with_capacity(100);
        for &(ch, count) in TILE_DISTRIBUTION.iter() {
            if let Ok(letter) = Letter::new(ch) {
                tiles.extend(std::iter::repeat(letter).take(count));
            }
        }
        Self::from_letters(tiles, rng)
    }

    /// Fill a bag with an explicit set of tiles
    pub fn from_letters(tiles: Vec<Letter>, rng: StdRng) -> Self {
        let mut pool = Self { tiles, rng };
        pool.shuffle();
        pool
    }

    pub fn shuffle(&mut self) {
        self.tiles.shuffle(&mut self.rng);
    }

    /// Remove up to `n` tiles. Returns fewer when the bag runs out.
    pub fn draw(&mut self, n: usize) -> Vec<Letter> {
        let take = n.min(self.tiles.len());
        let split = self.tiles.len() - take;
        self.tiles.split_off(split)
    }

    /// Put tiles back and reshuffle before anything else is drawn
    pub fn return_tiles<I: IntoIterator<Item = Letter>>(&mut self, letters: I) {
        self.tiles.extend(letters);
        self.shuffle();
    }

    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }
}
