//! A player's rack of up to seven tiles.

use std::fmt;
use std::mem;

use arrayvec::ArrayVec;
use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::position::{Tile, BLANK, RACK_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("hand {hand} does not contain the letters {requested}")]
    MissingLetters { requested: String, hand: String },
    #[error("cannot add {adding} tiles to a hand of {size}")]
    Overflow { size: usize, adding: usize },
    #[error("a hand must be initialized with exactly 7 tiles, got {0}")]
    WrongInitialSize(usize),
    #[error("unexpected hand size {0} after exchange")]
    UnexpectedSize(usize),
}

/// Tiles held by a player, in display order.
///
/// Recording mutations fill the recently-added and recently-removed shadow
/// lists, which `roll_back` uses to restore the previous contents and order.
/// Removed tiles are kept with the rack index they were taken from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    tiles: ArrayVec<Tile, RACK_SIZE>,
    recently_added: Vec<Tile>,
    recently_removed: Vec<(usize, Tile)>,
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "[{}]", tile)?;
        }
        Ok(())
    }
}

/// Whether `ch` selects `tile` from a rack. Lowercase letters select a blank.
fn selects(ch: char, tile: Tile) -> bool {
    if ch == BLANK || ch.is_ascii_lowercase() {
        tile.is_blank()
    } else {
        tile.letter() == ch
    }
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.is_full()
    }

    /// Letters of the rack as a string, blanks shown as `_`
    pub fn letters(&self) -> String {
        self.tiles.iter().map(|tile| tile.letter()).collect()
    }

    pub fn total_points(&self) -> u32 {
        self.tiles.iter().map(|tile| tile.points() as u32).sum()
    }

    pub fn recently_added(&self) -> &[Tile] {
        &self.recently_added
    }

    pub fn recently_removed(&self) -> &[(usize, Tile)] {
        &self.recently_removed
    }

    /// Forget the shadow lists, making the current contents the rollback point.
    pub fn clear_history(&mut self) {
        self.recently_added.clear();
        self.recently_removed.clear();
    }

    /// Add tiles to the end of the rack. Fails without changes if the rack would overflow.
    /// With `record`, the tiles replace the recently-added shadow list.
    pub fn add_tiles(&mut self, tiles: &[Tile], record: bool) -> Result<(), HandError> {
        if self.tiles.len() + tiles.len() > RACK_SIZE {
            return Err(HandError::Overflow {
                size: self.tiles.len(),
                adding: tiles.len(),
            });
        }
        self.tiles.extend(tiles.iter().copied());
        if record {
            self.recently_added = tiles.to_vec();
        }
        Ok(())
    }

    /// Whether every letter can be taken from the rack, counting duplicates.
    pub fn contains_letters(&self, letters: &[char]) -> bool {
        self.find_letters(letters).is_some()
    }

    /// Rack indices that `letters` select, each index at most once.
    fn find_letters(&self, letters: &[char]) -> Option<ArrayVec<usize, RACK_SIZE>> {
        let mut taken: ArrayVec<usize, RACK_SIZE> = ArrayVec::new();
        for ch in letters {
            let index = (0..self.tiles.len())
                .find(|i| !taken.contains(i) && selects(*ch, self.tiles[*i]))?;
            taken.try_push(index).ok()?;
        }
        Some(taken)
    }

    /// Remove one tile per letter, duplicates counted separately.
    ///
    /// Fails without changes if any letter is missing. With `record`, the removed
    /// tiles replace the recently-removed shadow list.
    pub fn remove_letters(&mut self, letters: &[char], record: bool) -> Result<Vec<Tile>, HandError> {
        let indices = self
            .find_letters(letters)
            .ok_or_else(|| HandError::MissingLetters {
                requested: letters.iter().collect(),
                hand: self.letters(),
            })?;
        let removed: Vec<Tile> = indices.iter().map(|i| self.tiles[*i]).collect();

        if record {
            self.recently_removed = indices.iter().map(|i| (*i, self.tiles[*i])).collect();
            self.recently_removed.sort_unstable_by_key(|(i, _)| *i);
        }

        let mut sorted = indices;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        for i in sorted {
            self.tiles.remove(i);
        }
        Ok(removed)
    }

    /// Undo the recorded mutations: take back the recently added tiles from the end
    /// of the rack, then put the recently removed ones back where they were.
    /// Clears both shadow lists.
    pub fn roll_back(&mut self) {
        let added = mem::take(&mut self.recently_added);
        let split = self.tiles.len().saturating_sub(added.len());
        if self.tiles[split..] == added[..] {
            self.tiles.truncate(split);
        } else {
            warn!(
                "Rollback expected {:?} at the end of hand {}",
                added, self
            );
            let letters: Vec<char> = added.iter().map(|tile| tile.letter()).collect();
            if let Err(err) = self.remove_letters(&letters, false) {
                warn!("Rollback couldn't take back added tiles: {}", err);
            }
        }

        for (i, tile) in mem::take(&mut self.recently_removed) {
            if self.tiles.is_full() {
                warn!("Rollback couldn't return {} to a full hand", tile);
                break;
            }
            self.tiles.insert(i.min(self.tiles.len()), tile);
        }
        self.clear_history();
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
    }
}
