use rand::seq::SliceRandom;
use rand::Rng;

use crate::position::{Tile, STANDARD_DISTRIBUTION};

/// The undrawn tiles. Draws are taken from the end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bag {
    tiles: Vec<Tile>,
}

impl Bag {
    /// The standard 100 tiles, shuffled.
    pub fn standard<R: Rng>(rng: &mut R) -> Self {
        let mut tiles = Vec::with_capacity(100);
        for (letter, count) in STANDARD_DISTRIBUTION {
            if let Some(tile) = Tile::standard(letter) {
                tiles.extend(std::iter::repeat(tile).take(count as usize));
            }
        }
        tiles.shuffle(rng);
        Bag { tiles }
    }

    /// A bag holding exactly `tiles`, drawn from the back.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Bag { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw up to `n` tiles. Returns fewer if the bag runs out.
    pub fn draw(&mut self, n: usize) -> Vec<Tile> {
        let split = self.tiles.len().saturating_sub(n);
        let mut drawn = self.tiles.split_off(split);
        drawn.reverse();
        drawn
    }

    /// Undo a `draw`: `drawn` goes back on top in the order it was drawn, so the
    /// bag is exactly as it was before.
    pub fn put_back(&mut self, drawn: &[Tile]) {
        self.tiles.extend(drawn.iter().rev());
    }

    /// Put tiles back and reshuffle.
    pub fn return_tiles<R: Rng>(&mut self, tiles: &[Tile], rng: &mut R) {
        self.tiles.extend_from_slice(tiles);
        self.tiles.shuffle(rng);
    }
}
