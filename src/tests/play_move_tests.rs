use crate::play_move::PlayMove;
use crate::position::{Board, Direction, Square};
use crate::tests::{board_with_words, test_dictionary, tiles};

#[test]
fn new_does_not_touch_board_test() {
    let mut board = board_with_words(&[("CAT", "8H")]);
    let before = board.clone();
    let cats = tiles("S");
    let play_move = PlayMove::new(Square::new(7, 10), &cats, &mut board, Direction::Horizontal);
    assert_eq!(play_move.score(), None);
    assert!(play_move.words().is_empty());
    drop(play_move);
    assert_eq!(board, before);
}

#[test]
fn legal_move_can_be_committed_test() {
    let mut board = board_with_words(&[("CAT", "8H")]);
    let s = tiles("S");
    let mut play_move = PlayMove::new(Square::new(7, 10), &s, &mut board, Direction::Horizontal);
    assert!(play_move.place_tile());
    assert!(play_move.check_word());
    assert_eq!(play_move.score(), Some(6));
    assert_eq!(play_move.words(), vec!["CATS"]);

    let (placement, score) = play_move.commit().unwrap();
    assert_eq!(score, 6);
    assert_eq!(placement.len(), 1);
    assert_eq!(board.to_rows()[7], ".......CATS....");
}

#[test]
fn commit_sets_first_play_test() {
    let mut board = Board::new(test_dictionary());
    let cat = tiles("CAT");
    let mut play_move = PlayMove::new(Square::center(), &cat, &mut board, Direction::Vertical);
    assert!(play_move.place_tile() && play_move.check_word());
    assert!(play_move.commit().is_some());
    assert!(!board.is_first_play());
    assert!(!board.is_empty());
}

#[test]
fn invalid_word_leaves_board_identical_test() {
    let mut board = board_with_words(&[("CAT", "8H")]);
    let before = board.clone();
    let at = tiles("AT");

    let mut play_move = PlayMove::new(Square::new(8, 8), &at, &mut board, Direction::Horizontal);
    assert!(play_move.place_tile());
    assert!(!play_move.check_word(), "TT is not a word");
    assert_eq!(play_move.score(), None);
    assert!(play_move.commit().is_none());

    assert_eq!(board, before, "Board changed by a rejected move:\n{:?}", board);
    assert_eq!(board.to_rows(), before.to_rows());
}

#[test]
fn failed_placement_leaves_board_identical_test() {
    let mut board = board_with_words(&[("CAT", "8H")]);
    let before = board.clone();
    let tiles = tiles("AB");

    let mut play_move = PlayMove::new(Square::new(6, 8), &tiles, &mut board, Direction::Vertical);
    assert!(!play_move.place_tile());
    assert!(!play_move.check_word(), "Word check without placement must fail");
    drop(play_move);

    assert_eq!(board, before);
}

#[test]
fn dropping_unchecked_move_retracts_tiles_test() {
    let mut board = Board::new(test_dictionary());
    let cat = tiles("CAT");
    {
        let mut play_move = PlayMove::new(Square::center(), &cat, &mut board, Direction::Horizontal);
        assert!(play_move.place_tile());
        assert!(play_move.check_word());
    }
    assert!(board.is_empty());
    assert!(board.is_first_play());
}

#[test]
fn protocol_calls_are_idempotent_test() {
    let mut board = Board::new(test_dictionary());
    let cat = tiles("CAT");
    let mut play_move = PlayMove::new(Square::center(), &cat, &mut board, Direction::Horizontal);
    assert!(play_move.place_tile());
    assert!(play_move.place_tile());
    assert!(play_move.check_word());
    assert!(play_move.check_word());
    assert_eq!(play_move.score(), Some(10));
}
