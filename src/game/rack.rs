use serde::{Deserialize, Serialize};

use crate::models::{Letter, RACK_SIZE};

/// The tiles a player holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rack {
    tiles: Vec<Letter>,
}

impl Rack {
    pub fn new(tiles: Vec<Letter>) -> Self {
        Self { tiles }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles needed to fill the rack back up
    pub fn missing(&self) -> usize {
        RACK_SIZE.saturating_sub(self.tiles.len())
    }

    /// Copy of this rack with `letters` taken out, or `None` if any letter is
    /// not available. Repeated letters need repeated tiles.
    pub fn without(&self, letters: &[Letter]) -> Option<Rack> {
        let mut remaining = self.tiles.clone();
        for letter in letters {
            let idx = remaining.iter().position(|l| l == letter)?;
            remaining.swap_remove(idx);
        }
        Some(Rack { tiles: remaining })
    }

    pub fn add<I: IntoIterator<Item = Letter>>(&mut self, letters: I) {
        self.tiles.extend(letters);
    }
}
