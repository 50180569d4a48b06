//! Word validity oracle consumed by the board when checking plays.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use thiserror::Error;

/// Answers whether a string is a playable word. Lookups must be fast and free of side effects.
pub trait Dictionary {
    fn is_valid_word(&self, word: &str) -> bool;
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("couldn't read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("word list {0} contained no words")]
    Empty(String),
}

/// A fixed set of words, compared case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one word per line. Blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_ascii_uppercase());
        }
        Ok(WordList { words })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path_name = path.as_ref().display().to_string();
        let file = File::open(path.as_ref()).map_err(|source| DictionaryError::Io {
            path: path_name.clone(),
            source,
        })?;
        let word_list =
            Self::from_reader(BufReader::new(file)).map_err(|source| DictionaryError::Io {
                path: path_name.clone(),
                source,
            })?;
        if word_list.is_empty() {
            return Err(DictionaryError::Empty(path_name));
        }
        debug!("Loaded {} words from {}", word_list.len(), path_name);
        Ok(word_list)
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_ascii_uppercase());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for WordList {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        WordList {
            words: iter.into_iter().map(str::to_ascii_uppercase).collect(),
        }
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        if word.bytes().all(|b| !b.is_ascii_lowercase()) {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_ascii_uppercase())
        }
    }
}
