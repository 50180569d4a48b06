use std::io::Cursor;

use crate::dictionary::{Dictionary, WordList};

#[test]
fn word_list_is_case_insensitive_test() {
    let words: WordList = ["cat", "Act"].into_iter().collect();
    assert!(words.is_valid_word("CAT"));
    assert!(words.is_valid_word("cat"));
    assert!(words.is_valid_word("aCt"));
    assert!(!words.is_valid_word("TAC"));
    assert!(!words.is_valid_word(""));
}

#[test]
fn read_word_list_test() {
    let input = "# comment\ncat\n\n  dog  \nCATS\n";
    let words = WordList::from_reader(Cursor::new(input)).unwrap();
    assert_eq!(words.len(), 3);
    assert!(words.is_valid_word("DOG"));
    assert!(!words.is_valid_word("# COMMENT"));
}

#[test]
fn missing_word_list_file_test() {
    assert!(WordList::from_file("this/word/list/does/not/exist.txt").is_err());
}
