use std::mem::size_of;

use damka_core::board::{Board, BoardError};
use damka_core::types::{Player, Square, Stone};
use damka_core::SQUARES;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("valid square")
}

#[test]
fn board_size_is_cache_friendly() {
    assert!(
        size_of::<Board>() <= 128,
        "board too large: {}",
        size_of::<Board>()
    );
}

#[test]
fn board_new_builds_the_standard_setup() {
    let board = Board::new();

    assert_eq!(board.count(Player::Black), 12);
    assert_eq!(board.count(Player::White), 12);

    assert_eq!(board.get(sq(0, 1)), Some(Stone::man(Player::Black)));
    assert_eq!(board.get(sq(2, 7)), Some(Stone::man(Player::Black)));
    assert_eq!(board.get(sq(5, 0)), Some(Stone::man(Player::White)));
    assert_eq!(board.get(sq(7, 6)), Some(Stone::man(Player::White)));

    for square in SQUARES {
        if square.row == 3 || square.row == 4 {
            assert_eq!(board.get(square), None);
        }
    }
}

#[test]
fn stones_stand_only_on_playable_squares() {
    let board = Board::new();
    for (square, _) in board.stones() {
        assert!(square.is_playable());
    }
}

#[test]
fn put_and_remove_round_trip() {
    let mut board = Board::empty();
    let square = sq(4, 3);
    let stone = Stone::king(Player::White);

    board.put(stone, square).unwrap();
    assert_eq!(board.get(square), Some(stone));
    assert_eq!(board.remove(square).unwrap(), Some(stone));
    assert_eq!(board.get(square), None);
    assert_eq!(board.remove(square).unwrap(), None);
}

#[test]
fn put_validates_bounds_parity_and_occupancy() {
    let mut board = Board::new();

    assert_eq!(
        board.put(Stone::man(Player::White), Square::new_unchecked(8, 1)),
        Err(BoardError::OutOfBounds)
    );
    assert_eq!(
        board.put(Stone::man(Player::White), sq(4, 4)),
        Err(BoardError::NotPlayable)
    );
    assert_eq!(
        board.put(Stone::man(Player::White), sq(0, 1)),
        Err(BoardError::Occupied)
    );
}

#[test]
fn out_of_bounds_queries_are_empty() {
    let mut board = Board::new();
    assert_eq!(board.get(Square::new_unchecked(8, 8)), None);
    assert_eq!(
        board.remove(Square::new_unchecked(0, 8)),
        Err(BoardError::OutOfBounds)
    );
}
