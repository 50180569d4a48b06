//! The board, with anchor computation, tile placement, word validation and scoring.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use arrayvec::ArrayVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;

pub use premium::{standard_premium, Premium};
pub use square::{squares_iterator, Direction, Square};
pub use tile::{letter_value, Tile, BLANK, STANDARD_DISTRIBUTION};

pub mod premium;
pub mod square;
pub mod tile;

pub const BOARD_SIZE: usize = 15;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
/// Maximum number of tiles in a rack
pub const RACK_SIZE: usize = 7;
/// Awarded for using every tile of a full rack in one play
pub const BINGO_BONUS: u32 = 50;

/// A contiguous run of occupied squares along one axis.
pub type Word = ArrayVec<Square, BOARD_SIZE>;

/// The dictionary handle shared between a board and its scratch copies.
pub type SharedDictionary = Arc<dyn Dictionary + Send + Sync>;

/// One board position. The premium is fixed at creation, the occupant is written at most once per game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    occupant: Option<Tile>,
    premium: Premium,
}

impl Cell {
    pub fn occupant(&self) -> Option<Tile> {
        self.occupant
    }

    pub fn premium(&self) -> Premium {
        self.premium
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Tiles written to the board by a single `place_tiles` call.
///
/// Only squares that were empty before the call are listed in `placed`. A
/// tile whose target already held the same letter is matched, not placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    start: Square,
    direction: Direction,
    placed: ArrayVec<(Square, Tile), BOARD_SIZE>,
}

impl Placement {
    pub fn start(&self) -> Square {
        self.start
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Newly written squares, in placement order
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.placed.iter().map(|(square, _)| *square)
    }

    /// Tiles actually taken from the rack
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.placed.iter().map(|(_, tile)| *tile)
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    fn contains(&self, square: Square) -> bool {
        self.placed.iter().any(|(sq, _)| *sq == square)
    }
}

/// Complete state of a board, plus the dictionary used to validate words on it.
#[derive(Clone)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
    first_play: bool,
    dictionary: SharedDictionary,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.first_play == other.first_play
    }
}

impl Eq for Board {}

impl Index<Square> for Board {
    type Output = Cell;

    fn index(&self, square: Square) -> &Self::Output {
        &self.cells[square.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE as u8 {
            write!(f, " {}", (b'A' + col) as char)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE as u8 {
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..BOARD_SIZE as u8 {
                let cell = self[Square::new(row, col)];
                match cell.occupant {
                    Some(tile) => write!(f, " {}", tile.letter())?,
                    None => write!(f, " {}", cell.premium.display_char())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)?;
        writeln!(f, "First play: {}", self.first_play)
    }
}

impl Board {
    /// An empty board with the standard premium layout.
    pub fn new(dictionary: SharedDictionary) -> Self {
        Self::with_layout(dictionary, standard_premium)
    }

    pub fn with_layout(dictionary: SharedDictionary, layout: impl Fn(Square) -> Premium) -> Self {
        let mut cells = [Cell::default(); NUM_SQUARES];
        for square in squares_iterator() {
            cells[square.index()].premium = layout(square);
        }
        Board {
            cells,
            first_play: true,
            dictionary,
        }
    }

    /// Build a standard board from one string per row, `.` for empty cells.
    /// Lowercase letters are blanks bound to that letter.
    pub fn from_rows(dictionary: SharedDictionary, rows: &[&str]) -> Result<Self, pgn_traits::Error> {
        if rows.len() != BOARD_SIZE {
            return Err(pgn_traits::Error::new_parse_error(format!(
                "Couldn't parse board, had {} rows instead of {}",
                rows.len(),
                BOARD_SIZE
            )));
        }
        let mut board = Board::new(dictionary);
        for (row, row_str) in rows.iter().enumerate() {
            let chars: Vec<char> = row_str.trim().chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(pgn_traits::Error::new_parse_error(format!(
                    "Couldn't parse row \"{}\", had {} cells instead of {}",
                    row_str,
                    chars.len(),
                    BOARD_SIZE
                )));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let tile = match ch {
                    '.' => continue,
                    'A'..='Z' => Tile::standard(ch),
                    'a'..='z' => Tile::blank().bind(ch),
                    _ => None,
                }
                .ok_or_else(|| {
                    pgn_traits::Error::new_parse_error(format!(
                        "Unexpected '{}' in row \"{}\"",
                        ch, row_str
                    ))
                })?;
                board.cells[Square::new(row as u8, col as u8).index()].occupant = Some(tile);
                board.first_play = false;
            }
        }
        Ok(board)
    }

    /// The inverse of `from_rows`. Blanks are not distinguished from regular tiles.
    pub fn to_rows(&self) -> Vec<String> {
        (0..BOARD_SIZE as u8)
            .map(|row| {
                (0..BOARD_SIZE as u8)
                    .map(|col| {
                        self[Square::new(row, col)]
                            .occupant
                            .map_or('.', |tile| tile.letter())
                    })
                    .collect()
            })
            .collect()
    }

    pub fn dictionary(&self) -> &SharedDictionary {
        &self.dictionary
    }

    pub fn occupant(&self, square: Square) -> Option<Tile> {
        self[square].occupant
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self[square].occupant.is_some()
    }

    /// True until the first tile is committed
    pub fn is_first_play(&self) -> bool {
        self.first_play
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Overwrite this board with another board's state, without reallocating.
    pub fn copy_from(&mut self, other: &Board) {
        self.cells = other.cells;
        self.first_play = other.first_play;
        self.dictionary = Arc::clone(&other.dictionary);
    }

    /// Whether a play may start on `square`. Before the first committed play only the
    /// centre qualifies, otherwise any empty square next to a tile.
    pub fn is_anchor(&self, square: Square) -> bool {
        if self.first_play {
            square == Square::center()
        } else {
            !self.is_occupied(square)
                && square
                    .neighbours()
                    .any(|neighbour| self.is_occupied(neighbour))
        }
    }

    /// Every anchor square, with the orientation that extends its neighbouring tiles.
    ///
    /// Horizontal when a tile is to the left or right, otherwise vertical.
    /// Before the first committed play this is only the centre, horizontal.
    pub fn playable_squares(&self) -> BTreeMap<Square, Direction> {
        let mut anchors = BTreeMap::new();
        if self.first_play {
            anchors.insert(Square::center(), Direction::Horizontal);
            return anchors;
        }
        for square in squares_iterator() {
            if !self.is_anchor(square) {
                continue;
            }
            let horizontal_neighbour = [
                square.prev(Direction::Horizontal),
                square.next(Direction::Horizontal),
            ]
            .into_iter()
            .flatten()
            .any(|neighbour| self.is_occupied(neighbour));
            let direction = if horizontal_neighbour {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            anchors.insert(square, direction);
        }
        anchors
    }

    /// Write `tiles` into consecutive cells from `start` along `direction`.
    ///
    /// A cell already holding the same letter is passed over without consuming
    /// the tile. Fails without touching the board if `start` is not an anchor,
    /// the run leaves the board, a cell holds a different letter, a tile is an
    /// unbound blank, or nothing would be written.
    pub fn place_tiles(
        &mut self,
        start: Square,
        tiles: &[Tile],
        direction: Direction,
    ) -> Option<Placement> {
        if tiles.is_empty()
            || tiles.len() > BOARD_SIZE
            || !tiles.iter().all(|tile| tile.is_placeable())
            || !self.is_anchor(start)
        {
            return None;
        }

        let mut placed = ArrayVec::new();
        for (i, tile) in tiles.iter().enumerate() {
            let square = start.jump(direction, i)?;
            match self.occupant(square) {
                None => placed.push((square, *tile)),
                Some(existing) if existing.letter() == tile.letter() => (),
                Some(_) => return None,
            }
        }
        if placed.is_empty() {
            return None;
        }

        for (square, tile) in placed.iter() {
            self.cells[square.index()].occupant = Some(*tile);
        }
        Some(Placement {
            start,
            direction,
            placed,
        })
    }

    /// Clear the cells written by `placement`.
    pub(crate) fn retract(&mut self, placement: &Placement) {
        for (square, tile) in placement.placed.iter() {
            let cell = &mut self.cells[square.index()];
            assert_eq!(
                cell.occupant,
                Some(*tile),
                "Tried to retract {} from {}, which holds {:?}",
                tile,
                square,
                cell.occupant
            );
            cell.occupant = None;
        }
    }

    /// Mark a placement as permanent.
    pub(crate) fn commit(&mut self, placement: &Placement) {
        debug_assert!(placement
            .squares()
            .all(|square| self.is_occupied(square)));
        self.first_play = false;
    }

    /// The full run of occupied squares through `square` along `direction`.
    pub fn run_through(&self, square: Square, direction: Direction) -> Word {
        let mut first = square;
        while let Some(prev) = first.prev(direction) {
            if !self.is_occupied(prev) {
                break;
            }
            first = prev;
        }
        let mut word = Word::new();
        let mut current = Some(first);
        while let Some(square) = current {
            if !self.is_occupied(square) {
                break;
            }
            word.push(square);
            current = square.next(direction);
        }
        word
    }

    /// The main word of `placement` followed by every crossing word of two or more letters.
    ///
    /// The main word is always included, even when it is a single letter.
    pub fn words_formed(&self, placement: &Placement) -> Vec<Word> {
        let mut words = Vec::with_capacity(placement.len() + 1);
        if let Some(first) = placement.squares().next() {
            words.push(self.run_through(first, placement.direction));
        }
        let cross_direction = placement.direction.perpendicular();
        for square in placement.squares() {
            let cross_word = self.run_through(square, cross_direction);
            if cross_word.len() >= 2 {
                words.push(cross_word);
            }
        }
        words
    }

    pub fn word_string(&self, word: &[Square]) -> String {
        word.iter()
            .filter_map(|square| self.occupant(*square))
            .map(Tile::letter)
            .collect()
    }

    /// Validate every word formed by `placement` against the dictionary.
    ///
    /// The main word must have at least two letters. Does not modify the board.
    pub fn check_words(&self, placement: &Placement) -> bool {
        let words = self.words_formed(placement);
        match words.first() {
            Some(main_word) if main_word.len() >= 2 => (),
            _ => return false,
        }
        words
            .iter()
            .all(|word| self.dictionary.is_valid_word(&self.word_string(word)))
    }

    /// Score of one word. Letter multipliers are summed in first, then word
    /// multipliers are applied. Premiums only count on squares in `newly_placed`.
    pub fn word_score(&self, word: &[Square], newly_placed: &Placement) -> u32 {
        let mut letter_sum = 0;
        let mut word_multiplier = 1;
        for square in word {
            let cell = self[*square];
            let points = cell.occupant.map_or(0, |tile| tile.points() as u32);
            if newly_placed.contains(*square) {
                letter_sum += points * cell.premium.letter_multiplier();
                word_multiplier *= cell.premium.word_multiplier();
            } else {
                letter_sum += points;
            }
        }
        letter_sum * word_multiplier
    }

    /// Total score of a placement: main word, every crossing word, and the bingo bonus.
    pub fn move_score(&self, placement: &Placement) -> u32 {
        let words_score: u32 = self
            .words_formed(placement)
            .iter()
            .filter(|word| word.len() >= 2)
            .map(|word| self.word_score(word, placement))
            .sum();
        if placement.len() == RACK_SIZE {
            words_score + BINGO_BONUS
        } else {
            words_score
        }
    }
}
