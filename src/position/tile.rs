use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The letter carried by an unbound wildcard tile.
pub const BLANK: char = '_';

/// A letter tile. Tiles are plain values; two tiles with the same letter are interchangeable.
///
/// A blank is a zero-point tile whose letter is `BLANK` while it sits in a rack.
/// Once placed it is bound to a face letter, but keeps its zero point value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    letter: char,
    points: u8,
}

impl Tile {
    pub const fn new(letter: char, points: u8) -> Self {
        Tile { letter, points }
    }

    /// A tile with the standard English point value for `letter`.
    /// Returns `None` for characters that have no tile.
    pub fn standard(letter: char) -> Option<Self> {
        if letter == BLANK {
            return Some(Tile::blank());
        }
        letter_value(letter).map(|points| Tile::new(letter.to_ascii_uppercase(), points))
    }

    pub const fn blank() -> Self {
        Tile::new(BLANK, 0)
    }

    pub fn letter(self) -> char {
        self.letter
    }

    pub fn points(self) -> u8 {
        self.points
    }

    pub fn is_blank(self) -> bool {
        self.letter == BLANK
    }

    /// Bind a blank to a face letter. The point value is kept as is.
    pub fn bind(self, face: char) -> Option<Self> {
        if self.is_blank() && face.is_ascii_alphabetic() {
            Some(Tile::new(face.to_ascii_uppercase(), self.points))
        } else {
            None
        }
    }

    /// Whether the tile can be written to a cell, i.e. carries a real letter.
    pub fn is_placeable(self) -> bool {
        self.letter.is_ascii_alphabetic()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.points)
    }
}

/// Standard English point value of a letter.
pub fn letter_value(letter: char) -> Option<u8> {
    let points = match letter.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'O' | 'U' | 'L' | 'N' | 'S' | 'T' | 'R' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => return None,
    };
    Some(points)
}

/// Number of copies of each tile in a standard 100 tile set, blanks included.
pub const STANDARD_DISTRIBUTION: [(char, u8); 27] = [
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
    (BLANK, 2),
];
