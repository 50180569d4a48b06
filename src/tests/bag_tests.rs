use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bag::Bag;
use crate::position::{Tile, BLANK};
use crate::tests::bag_dealing;

#[test]
fn standard_bag_test() {
    let mut rng = StdRng::seed_from_u64(42);
    let bag = Bag::standard(&mut rng);
    assert_eq!(bag.len(), 100);

    let mut bag = bag;
    let tiles = bag.draw(100);
    assert!(bag.is_empty());
    assert_eq!(tiles.iter().filter(|tile| tile.is_blank()).count(), 2);
    assert_eq!(tiles.iter().filter(|tile| tile.letter() == 'E').count(), 12);
    let total_points: u32 = tiles.iter().map(|tile| tile.points() as u32).sum();
    assert_eq!(total_points, 187);
}

#[test]
fn same_seed_same_bag_test() {
    let first = Bag::standard(&mut StdRng::seed_from_u64(7));
    let second = Bag::standard(&mut StdRng::seed_from_u64(7));
    assert_eq!(first, second);
}

#[test]
fn draw_in_order_test() {
    let mut bag = bag_dealing("CATS");
    assert_eq!(
        bag.draw(3),
        vec![
            Tile::standard('C').unwrap(),
            Tile::standard('A').unwrap(),
            Tile::standard('T').unwrap()
        ]
    );
    assert_eq!(bag.draw(5), vec![Tile::standard('S').unwrap()]);
    assert!(bag.draw(1).is_empty());
}

#[test]
fn return_tiles_test() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut bag = bag_dealing("AB");
    bag.return_tiles(&[Tile::blank()], &mut rng);
    assert_eq!(bag.len(), 3);
    let mut letters: Vec<char> = bag.draw(3).iter().map(|tile| tile.letter()).collect();
    letters.sort_unstable();
    assert_eq!(letters, vec!['A', 'B', BLANK]);
}

#[test]
fn put_back_undoes_draw_test() {
    let mut bag = bag_dealing("ABCDE");
    let before = bag.clone();
    let drawn = bag.draw(3);
    assert_eq!(drawn.iter().map(|tile| tile.letter()).collect::<String>(), "ABC");
    bag.put_back(&drawn);
    assert_eq!(bag, before);
}
