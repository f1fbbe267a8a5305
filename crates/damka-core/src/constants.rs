use crate::types::Square;

pub const SIZE: u8 = 8;

/// The four diagonal directions, as (row, col) deltas. Generation probes
/// them in this order, which fixes the child order of every move tree.
pub const DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Every playable square, in row-major order. Stones only ever stand on
/// these 32 squares.
pub const SQUARES: [Square; 32] = playable_squares();

const fn playable_squares() -> [Square; 32] {
    let mut squares = [Square::new_unchecked(0, 0); 32];
    let mut idx = 0;
    let mut row = 0u8;
    while row < SIZE {
        let mut col = 0u8;
        while col < SIZE {
            if (row + col) % 2 == 1 {
                squares[idx] = Square::new_unchecked(row, col);
                idx += 1;
            }
            col += 1;
        }
        row += 1;
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_square_is_playable_and_unique() {
        for (i, square) in SQUARES.iter().enumerate() {
            assert!(square.is_playable());
            for other in &SQUARES[i + 1..] {
                assert_ne!(square, other);
            }
        }
    }

    #[test]
    fn dirs_are_the_four_diagonals() {
        assert_eq!(DIRS, [(-1, -1), (-1, 1), (1, -1), (1, 1)]);
    }
}
