#[cfg(test)]
mod bag_tests;
#[cfg(test)]
mod board_tests;
#[cfg(test)]
mod dictionary_tests;
#[cfg(test)]
mod play_move_tests;
#[cfg(test)]
mod square_tests;

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::bag::Bag;
#[cfg(test)]
use crate::dictionary::WordList;
#[cfg(test)]
use crate::hand::Hand;
#[cfg(test)]
use crate::position::{Board, SharedDictionary, Square, Tile, BOARD_SIZE};

#[cfg(test)]
const TEST_WORDS: &[&str] = &[
    "AA", "AB", "AT", "BA", "TA", "ACT", "BAT", "CAT", "TAB", "ACTS", "CATS", "SCAT", "RETAINS",
];

#[cfg(test)]
fn test_dictionary() -> SharedDictionary {
    Arc::new(TEST_WORDS.iter().copied().collect::<WordList>())
}

#[cfg(test)]
fn tiles(letters: &str) -> Vec<Tile> {
    letters
        .chars()
        .map(|ch| Tile::standard(ch).unwrap())
        .collect()
}

#[cfg(test)]
fn hand(letters: &str) -> Hand {
    let mut hand = Hand::new();
    hand.add_tiles(&tiles(letters), false).unwrap();
    hand
}

/// A bag that deals `letters` in order.
#[cfg(test)]
fn bag_dealing(letters: &str) -> Bag {
    let mut bag_tiles = tiles(letters);
    bag_tiles.reverse();
    Bag::from_tiles(bag_tiles)
}

/// A standard board holding each word at its oriented coordinate, e.g. `("CAT", "8H")`.
#[cfg(test)]
fn board_with_words(words: &[(&str, &str)]) -> Board {
    let mut rows = vec![vec!['.'; BOARD_SIZE]; BOARD_SIZE];
    for (word, coordinate) in words {
        let (start, direction) = Square::parse_oriented(coordinate).unwrap();
        for (i, letter) in word.chars().enumerate() {
            let square = start.jump(direction, i).unwrap();
            rows[square.row() as usize][square.col() as usize] = letter;
        }
    }
    let rows: Vec<String> = rows.into_iter().map(|row| row.into_iter().collect()).collect();
    let row_strs: Vec<&str> = rows.iter().map(String::as_str).collect();
    Board::from_rows(test_dictionary(), &row_strs).unwrap()
}
