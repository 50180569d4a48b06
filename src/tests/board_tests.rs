use crate::position::{Board, Direction, Premium, Square, Tile};
use crate::tests::{board_with_words, test_dictionary, tiles};

#[test]
fn default_board_test() {
    let board = Board::new(test_dictionary());
    assert!(board.is_empty());
    assert!(board.is_first_play());
    assert_eq!(board[Square::center()].premium(), Premium::Center);
    assert_eq!(board.to_rows(), vec![".".repeat(15); 15]);
}

#[test]
fn empty_board_has_only_center_anchor_test() {
    let board = Board::new(test_dictionary());
    let anchors = board.playable_squares();
    assert_eq!(anchors.len(), 1);
    assert_eq!(anchors.get(&Square::center()), Some(&Direction::Horizontal));
}

#[test]
fn single_tile_anchors_test() {
    let board = board_with_words(&[("A", "5D")]);
    let anchors = board.playable_squares();
    assert_eq!(
        anchors.into_iter().collect::<Vec<_>>(),
        vec![
            (Square::new(3, 3), Direction::Vertical),
            (Square::new(4, 2), Direction::Horizontal),
            (Square::new(4, 4), Direction::Horizontal),
            (Square::new(5, 3), Direction::Vertical),
        ],
        "Wrong anchors on board\n{:?}",
        board
    );
}

#[test]
fn anchors_follow_board_edge_test() {
    let board = board_with_words(&[("A", "1A")]);
    let anchors = board.playable_squares();
    assert_eq!(anchors.len(), 2);
    assert_eq!(anchors.get(&Square::new(0, 1)), Some(&Direction::Horizontal));
    assert_eq!(anchors.get(&Square::new(1, 0)), Some(&Direction::Vertical));
}

#[test]
fn word_anchors_test() {
    let board = board_with_words(&[("CAT", "8H")]);
    let anchors = board.playable_squares();
    // Three squares above, three below, one at each end
    assert_eq!(anchors.len(), 8);
    assert_eq!(anchors.get(&Square::new(7, 6)), Some(&Direction::Horizontal));
    assert_eq!(anchors.get(&Square::new(7, 10)), Some(&Direction::Horizontal));
    assert_eq!(anchors.get(&Square::new(6, 8)), Some(&Direction::Vertical));
    assert!(!board.is_anchor(Square::new(7, 8)));
}

#[test]
fn place_tiles_writes_consecutive_cells_test() {
    let mut board = Board::new(test_dictionary());
    let placement = board
        .place_tiles(Square::center(), &tiles("CAT"), Direction::Vertical)
        .unwrap();
    assert_eq!(placement.len(), 3);
    assert_eq!(board.to_rows()[7], ".......C.......");
    assert_eq!(board.to_rows()[8], ".......A.......");
    assert_eq!(board.to_rows()[9], ".......T.......");
    assert!(board.is_first_play(), "Placing alone must not commit");
}

#[test]
fn anchors_wait_for_first_commit_test() {
    let mut board = Board::new(test_dictionary());
    let placement = board
        .place_tiles(Square::center(), &tiles("CAT"), Direction::Horizontal)
        .unwrap();
    assert!(!board.is_empty());
    let anchors = board.playable_squares();
    assert_eq!(anchors.len(), 1);
    assert_eq!(anchors.get(&Square::center()), Some(&Direction::Horizontal));
    assert!(!board.is_anchor(Square::new(7, 10)));

    board.commit(&placement);
    assert!(!board.is_first_play());
    let anchors = board.playable_squares();
    assert_eq!(anchors.len(), 8);
    assert!(!anchors.contains_key(&Square::center()));
    assert!(board.is_anchor(Square::new(7, 10)));
}

#[test]
fn place_tiles_rejects_without_mutation_test() {
    let mut board = board_with_words(&[("CAT", "8H")]);
    let before = board.clone();

    // Not an anchor
    assert!(board
        .place_tiles(Square::new(0, 0), &tiles("AT"), Direction::Horizontal)
        .is_none());
    // Runs off the board
    assert!(board
        .place_tiles(Square::new(7, 10), &tiles("SSSSSS"), Direction::Horizontal)
        .is_none());
    // Second tile hits a different letter
    assert!(board
        .place_tiles(Square::new(6, 8), &tiles("AB"), Direction::Vertical)
        .is_none());
    // Unbound blank
    assert!(board
        .place_tiles(Square::new(7, 10), &[Tile::blank()], Direction::Horizontal)
        .is_none());
    // Nothing
    assert!(board
        .place_tiles(Square::new(7, 10), &[], Direction::Horizontal)
        .is_none());

    assert_eq!(board, before);
}

#[test]
fn place_tiles_passes_over_same_letter_test() {
    let mut board = board_with_words(&[("CAT", "8H")]);
    let placement = board
        .place_tiles(Square::new(6, 9), &tiles("AT"), Direction::Vertical)
        .unwrap();
    assert_eq!(placement.squares().collect::<Vec<_>>(), vec![Square::new(6, 9)]);
    assert_eq!(board.word_string(&board.run_through(Square::new(6, 9), Direction::Vertical)), "AT");
}

#[test]
fn crossing_words_are_checked_test() {
    let mut board = board_with_words(&[("CAT", "8H")]);

    let placement = board
        .place_tiles(Square::new(8, 8), &tiles("AT"), Direction::Horizontal)
        .unwrap();
    let words: Vec<String> = board
        .words_formed(&placement)
        .iter()
        .map(|word| board.word_string(word))
        .collect();
    assert_eq!(words, vec!["AT", "AA", "TT"]);
    assert!(!board.check_words(&placement), "TT is not a word");
}

#[test]
fn single_letter_main_word_is_rejected_test() {
    let mut board = Board::new(test_dictionary());
    let placement = board
        .place_tiles(Square::center(), &tiles("A"), Direction::Horizontal)
        .unwrap();
    assert!(!board.check_words(&placement));
}

#[test]
fn first_play_score_doubles_on_center_test() {
    let mut board = Board::new(test_dictionary());
    let placement = board
        .place_tiles(Square::center(), &tiles("CAT"), Direction::Horizontal)
        .unwrap();
    assert!(board.check_words(&placement));
    assert_eq!(board.move_score(&placement), 10);
}

#[test]
fn letter_premium_before_word_premium_test() {
    let layout = |square: Square| match (square.row(), square.col()) {
        (7, 8) => Premium::DoubleLetter,
        (7, 9) => Premium::TripleWord,
        _ => Premium::None,
    };
    let mut board = Board::with_layout(test_dictionary(), layout);
    let placement = board
        .place_tiles(Square::center(), &tiles("ACT"), Direction::Horizontal)
        .unwrap();
    let main_word = board.run_through(Square::center(), Direction::Horizontal);

    // (1 + 3 * 2 + 1) * 3, of which the C contributes 18
    assert_eq!(board.word_score(&main_word, &placement), 24);
    assert_eq!(board.move_score(&placement), 24);
}

#[test]
fn word_premiums_multiply_test() {
    let layout = |square: Square| match (square.row(), square.col()) {
        (7, 7) | (7, 9) => Premium::DoubleWord,
        _ => Premium::None,
    };
    let mut board = Board::with_layout(test_dictionary(), layout);
    let placement = board
        .place_tiles(Square::center(), &tiles("CAT"), Direction::Horizontal)
        .unwrap();
    assert_eq!(board.move_score(&placement), 5 * 2 * 2);
}

#[test]
fn premiums_only_count_when_newly_covered_test() {
    let mut board = board_with_words(&[("CAT", "8H")]);
    let placement = board
        .place_tiles(Square::new(7, 10), &tiles("S"), Direction::Horizontal)
        .unwrap();
    assert!(board.check_words(&placement));
    // The centre C was covered by an earlier play
    assert_eq!(board.move_score(&placement), 6);
}

#[test]
fn crossing_words_are_scored_test() {
    let mut board = board_with_words(&[("CAT", "8H")]);
    let placement = board
        .place_tiles(Square::new(8, 8), &tiles("TA"), Direction::Horizontal)
        .unwrap();
    assert!(board.check_words(&placement));
    // TA with T on a double letter, then AT and TA down
    assert_eq!(board.move_score(&placement), 3 + 3 + 2);
}

#[test]
fn bingo_bonus_test() {
    let mut board = Board::with_layout(test_dictionary(), |_| Premium::None);
    let placement = board
        .place_tiles(Square::center(), &tiles("RETAINS"), Direction::Horizontal)
        .unwrap();
    assert!(board.check_words(&placement));
    assert_eq!(board.move_score(&placement), 7 + 50);
}

#[test]
fn blank_scores_zero_test() {
    let mut board = Board::new(test_dictionary());
    let blank_c = Tile::blank().bind('c').unwrap();
    let mut cat = tiles("CAT");
    cat[0] = blank_c;
    let placement = board
        .place_tiles(Square::center(), &cat, Direction::Horizontal)
        .unwrap();
    assert!(board.check_words(&placement));
    assert_eq!(board.move_score(&placement), 4);
}

#[test]
fn from_rows_rejects_bad_input_test() {
    assert!(Board::from_rows(test_dictionary(), &["..."]).is_err());
    let mut rows = vec!["..............."; 15];
    rows[3] = ".......1.......";
    assert!(Board::from_rows(test_dictionary(), &rows).is_err());
}
