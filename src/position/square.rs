use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::BOARD_SIZE;

/// The two axes a word can be laid along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        self == Direction::Horizontal
    }

    /// The crossing axis
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

/// A location on the board, stored as zero-based row and column.
///
/// In notation, rows are numbered `1..=15` and columns lettered `A..=O`.
/// The canonical form writes the row first (`"8H"`). Vertical plays write
/// the column first (`"H8"`), and that transposition is only ever done by
/// `to_oriented_string` and `parse_oriented`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Square { row, col }
    }

    pub const fn center() -> Self {
        Square::new(BOARD_SIZE as u8 / 2, BOARD_SIZE as u8 / 2)
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    pub(crate) const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// The next square along `direction`, or `None` at the edge of the board.
    pub fn next(self, direction: Direction) -> Option<Self> {
        self.jump(direction, 1)
    }

    /// The previous square along `direction`, or `None` at the edge of the board.
    pub fn prev(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Horizontal => self.col.checked_sub(1).map(|col| Square::new(self.row, col)),
            Direction::Vertical => self.row.checked_sub(1).map(|row| Square::new(row, self.col)),
        }
    }

    pub fn jump(self, direction: Direction, len: usize) -> Option<Self> {
        let (row, col) = match direction {
            Direction::Horizontal => (self.row as usize, self.col as usize + len),
            Direction::Vertical => (self.row as usize + len, self.col as usize),
        };
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All orthogonal neighbours that are on the board.
    pub fn neighbours(self) -> impl Iterator<Item = Square> {
        [
            self.prev(Direction::Vertical),
            self.prev(Direction::Horizontal),
            self.next(Direction::Horizontal),
            self.next(Direction::Vertical),
        ]
        .into_iter()
        .flatten()
    }

    /// Format for a play along `direction`: `"8H"` horizontally, `"H8"` vertically.
    pub fn to_oriented_string(self, direction: Direction) -> String {
        match direction {
            Direction::Horizontal => self.to_string(),
            Direction::Vertical => format!("{}{}", self.col_char(), self.row + 1),
        }
    }

    /// Parse a square in canonical row-first notation.
    pub fn parse_square(input: &str) -> Result<Square, pgn_traits::Error> {
        match Self::parse_oriented(input)? {
            (square, Direction::Horizontal) => Ok(square),
            (_, Direction::Vertical) => Err(pgn_traits::Error::new_parse_error(format!(
                "Couldn't parse square \"{}\", expected row before column",
                input
            ))),
        }
    }

    /// Parse either notation. A leading digit means a horizontal play, a
    /// leading letter a vertical one.
    pub fn parse_oriented(input: &str) -> Result<(Square, Direction), pgn_traits::Error> {
        let input = input.trim();
        let first_char = input.chars().next().ok_or_else(|| {
            pgn_traits::Error::new_parse_error("Couldn't parse empty square".to_string())
        })?;
        let (digits, letter, direction) = if first_char.is_ascii_digit() {
            let split = input
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(input.len());
            let (digits, rest) = input.split_at(split);
            (digits, rest, Direction::Horizontal)
        } else {
            let (letter, digits) = input.split_at(first_char.len_utf8());
            (digits, letter, Direction::Vertical)
        };

        let mut letters = letter.chars();
        let col = match (letters.next(), letters.next()) {
            (Some(ch), None) if ch.is_ascii_alphabetic() => {
                ch.to_ascii_uppercase() as u8 - b'A'
            }
            _ => {
                return Err(pgn_traits::Error::new_parse_error(format!(
                    "Couldn't parse square \"{}\": bad column",
                    input
                )))
            }
        };
        let row = match digits.parse::<u8>() {
            Ok(row) if (1..=BOARD_SIZE as u8).contains(&row) => row - 1,
            _ => {
                return Err(pgn_traits::Error::new_parse_error(format!(
                    "Couldn't parse square \"{}\": bad row",
                    input
                )))
            }
        };
        if col as usize >= BOARD_SIZE {
            return Err(pgn_traits::Error::new_parse_error(format!(
                "Couldn't parse square \"{}\": column outside the board",
                input
            )));
        }
        Ok((Square::new(row, col), direction))
    }

    fn col_char(self) -> char {
        (b'A' + self.col) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row + 1, self.col_char())
    }
}

/// Iterates over all board squares, row by row.
pub fn squares_iterator() -> impl Iterator<Item = Square> {
    (0..(BOARD_SIZE * BOARD_SIZE))
        .map(|i| Square::new((i / BOARD_SIZE) as u8, (i % BOARD_SIZE) as u8))
}
