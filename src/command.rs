//! Turn commands, and the boundary through which players submit them.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::{Direction, Square};

/// An action submitted to the game on a player's turn.
///
/// Text notation:
/// * `play CAT 8H` places `C`, `A`, `T` from row 8, column H, rightwards.
///   `play CAT H8` goes downwards. Lowercase letters are blanks.
/// * `pass`
/// * `exchange A,B,E`, commas optional
/// * `shuffle`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    Play {
        letters: String,
        square: Square,
        direction: Direction,
    },
    Pass,
    Exchange(Vec<char>),
    Shuffle,
}

impl Command {
    pub fn play(letters: &str, square: Square, direction: Direction) -> Self {
        Command::Play {
            letters: letters.to_string(),
            square,
            direction,
        }
    }

    /// Whether the command hands the turn to the next player.
    pub fn ends_turn(&self) -> bool {
        !matches!(self, Command::Shuffle)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Play {
                letters,
                square,
                direction,
            } => write!(
                f,
                "play {} {}",
                letters,
                square.to_oriented_string(*direction)
            ),
            Command::Pass => write!(f, "pass"),
            Command::Exchange(letters) => {
                write!(f, "exchange ")?;
                for (i, letter) in letters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", letter)?;
                }
                Ok(())
            }
            Command::Shuffle => write!(f, "shuffle"),
        }
    }
}

impl FromStr for Command {
    type Err = pgn_traits::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = input.split_whitespace().collect();
        match words.first().map(|word| word.to_ascii_lowercase()).as_deref() {
            Some("play") => {
                let (letters, coordinate) = match words[1..] {
                    [letters, coordinate] => (letters, coordinate),
                    _ => {
                        return Err(pgn_traits::Error::new_parse_error(format!(
                            "Couldn't parse \"{}\", expected play <letters> <square>",
                            input
                        )))
                    }
                };
                if !letters.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(pgn_traits::Error::new_parse_error(format!(
                        "Couldn't parse letters \"{}\"",
                        letters
                    )));
                }
                let (square, direction) = Square::parse_oriented(coordinate)?;
                Ok(Command::Play {
                    letters: letters.to_string(),
                    square,
                    direction,
                })
            }
            Some("pass") if words.len() == 1 => Ok(Command::Pass),
            Some("shuffle") if words.len() == 1 => Ok(Command::Shuffle),
            Some("exchange") => {
                let letters: Vec<char> = words[1..]
                    .iter()
                    .flat_map(|word| word.chars())
                    .filter(|ch| *ch != ',')
                    .map(|ch| ch.to_ascii_uppercase())
                    .collect();
                if letters.is_empty() {
                    return Err(pgn_traits::Error::new_parse_error(
                        "Exchange needs at least one letter".to_string(),
                    ));
                }
                Ok(Command::Exchange(letters))
            }
            _ => Err(pgn_traits::Error::new_parse_error(format!(
                "Couldn't parse command \"{}\"",
                input
            ))),
        }
    }
}

/// The turn manager's side of the command boundary.
pub trait CommandSink {
    /// Queue one tile for removal from the submitting player's hand.
    fn remove_letter_from_hand(&mut self, letter: char);

    fn process_command(&mut self, command: Command);
}

/// A `CommandSink` that records what was submitted, to be applied later.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordedTurn {
    pub removals: Vec<char>,
    pub commands: Vec<Command>,
}

impl CommandSink for RecordedTurn {
    fn remove_letter_from_hand(&mut self, letter: char) {
        self.removals.push(letter);
    }

    fn process_command(&mut self, command: Command) {
        self.commands.push(command);
    }
}
