#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use super::BOARD_SIZE;

/// Scoring multiplier of a cell. Fixed when the board is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Premium {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// Scores as a double word, and is the only anchor of an empty board
    Center,
}

impl Premium {
    pub fn letter_multiplier(self) -> u32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }

    pub fn word_multiplier(self) -> u32 {
        match self {
            Premium::DoubleWord | Premium::Center => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }

    pub(crate) fn display_char(self) -> char {
        match self {
            Premium::None => '.',
            Premium::DoubleLetter => '2',
            Premium::TripleLetter => '3',
            Premium::DoubleWord => '@',
            Premium::TripleWord => '#',
            Premium::Center => '*',
        }
    }
}

/// Premium of `square` on the standard 15x15 board.
///
/// The layout is symmetric in both axes and the diagonal, so every square is
/// folded into the upper-left octant before the lookup.
pub fn standard_premium(square: Square) -> Premium {
    let mid = BOARD_SIZE as u8 / 2;
    let (mut row, mut col) = (square.row(), square.col());
    if row == mid && col == mid {
        return Premium::Center;
    }
    if row > mid {
        row = BOARD_SIZE as u8 - 1 - row;
    }
    if col > mid {
        col = BOARD_SIZE as u8 - 1 - col;
    }
    if col > row {
        (row, col) = (col, row);
    }

    match (row, col) {
        (0, 0) | (7, 0) => Premium::TripleWord,
        (3, 0) | (6, 2) | (7, 3) | (6, 6) => Premium::DoubleLetter,
        (5, 1) | (5, 5) => Premium::TripleLetter,
        (r, c) if r == c => Premium::DoubleWord,
        _ => Premium::None,
    }
}
