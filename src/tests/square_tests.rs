use crate::position::{squares_iterator, standard_premium, Direction, Premium, Square};

#[test]
fn parse_horizontal_square_test() {
    assert_eq!(
        Square::parse_oriented("8H").unwrap(),
        (Square::new(7, 7), Direction::Horizontal)
    );
    assert_eq!(
        Square::parse_oriented("15A").unwrap(),
        (Square::new(14, 0), Direction::Horizontal)
    );
    assert_eq!(Square::parse_square("1o").unwrap(), Square::new(0, 14));
}

#[test]
fn parse_vertical_square_test() {
    assert_eq!(
        Square::parse_oriented("H8").unwrap(),
        (Square::new(7, 7), Direction::Vertical)
    );
    assert_eq!(
        Square::parse_oriented("A15").unwrap(),
        (Square::new(14, 0), Direction::Vertical)
    );
    assert!(Square::parse_square("H8").is_err());
}

#[test]
fn parse_bad_square_test() {
    for input in ["", "8", "H", "16A", "0A", "8P", "P8", "8HH", "H", "88"] {
        assert!(
            Square::parse_oriented(input).is_err(),
            "Parsed invalid square \"{}\"",
            input
        );
    }
}

#[test]
fn oriented_string_transposes_vertical_test() {
    let square = Square::new(11, 2);
    assert_eq!(square.to_string(), "12C");
    assert_eq!(square.to_oriented_string(Direction::Horizontal), "12C");
    assert_eq!(square.to_oriented_string(Direction::Vertical), "C12");

    for square in squares_iterator() {
        for direction in [Direction::Horizontal, Direction::Vertical] {
            assert_eq!(
                Square::parse_oriented(&square.to_oriented_string(direction)).unwrap(),
                (square, direction)
            );
        }
    }
}

#[test]
fn jump_stays_on_board_test() {
    let square = Square::new(7, 13);
    assert_eq!(square.jump(Direction::Horizontal, 1), Some(Square::new(7, 14)));
    assert_eq!(square.jump(Direction::Horizontal, 2), None);
    assert_eq!(square.jump(Direction::Vertical, 7), Some(Square::new(14, 13)));
    assert_eq!(square.jump(Direction::Vertical, 8), None);
    assert_eq!(Square::new(0, 0).prev(Direction::Vertical), None);
    assert_eq!(Square::new(0, 0).neighbours().count(), 2);
    assert_eq!(Square::center().neighbours().count(), 4);
}

#[test]
fn standard_premium_counts_test() {
    let count = |premium: Premium| {
        squares_iterator()
            .filter(|square| standard_premium(*square) == premium)
            .count()
    };
    assert_eq!(count(Premium::TripleWord), 8);
    assert_eq!(count(Premium::DoubleWord), 16);
    assert_eq!(count(Premium::TripleLetter), 12);
    assert_eq!(count(Premium::DoubleLetter), 24);
    assert_eq!(count(Premium::Center), 1);
    assert_eq!(standard_premium(Square::center()), Premium::Center);
    assert_eq!(standard_premium(Square::new(0, 0)), Premium::TripleWord);
    assert_eq!(standard_premium(Square::new(14, 7)), Premium::TripleWord);
    assert_eq!(standard_premium(Square::new(8, 8)), Premium::DoubleLetter);
    assert_eq!(standard_premium(Square::new(1, 5)), Premium::TripleLetter);
}
