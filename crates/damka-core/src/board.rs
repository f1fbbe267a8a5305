use thiserror::Error;

use crate::constants::{SIZE, SQUARES};
use crate::types::{Player, Square, Stone};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("square out of bounds")]
    OutOfBounds,
    #[error("square is not playable")]
    NotPlayable,
    #[error("square is already occupied")]
    Occupied,
}

/// The authoritative stone grid. At most one stone per square, stones only
/// on playable squares; mutation goes through `put`/`remove` so both
/// invariants hold for every reachable board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Stone>; SIZE as usize]; SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening setup: three ranks of men per side on the playable
    /// squares, Black on rows 0..3, White on rows 5..8.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for square in SQUARES {
            if square.row < 3 {
                let _ = board.put(Stone::man(Player::Black), square);
            } else if square.row > 4 {
                let _ = board.put(Stone::man(Player::White), square);
            }
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; SIZE as usize]; SIZE as usize],
        }
    }

    pub fn get(&self, square: Square) -> Option<Stone> {
        let (r, c) = square_coords(square)?;
        self.squares[r][c]
    }

    pub fn put(&mut self, stone: Stone, square: Square) -> Result<(), BoardError> {
        let (r, c) = square_coords(square).ok_or(BoardError::OutOfBounds)?;
        if !square.is_playable() {
            return Err(BoardError::NotPlayable);
        }
        if self.squares[r][c].is_some() {
            return Err(BoardError::Occupied);
        }
        self.squares[r][c] = Some(stone);
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Result<Option<Stone>, BoardError> {
        let (r, c) = square_coords(square).ok_or(BoardError::OutOfBounds)?;
        Ok(self.squares[r][c].take())
    }

    /// Occupied squares in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Square, Stone)> + '_ {
        SQUARES
            .into_iter()
            .filter_map(move |square| self.get(square).map(|stone| (square, stone)))
    }

    pub fn count(&self, player: Player) -> usize {
        self.stones()
            .filter(|(_, stone)| stone.owner == player)
            .count()
    }
}

fn square_coords(square: Square) -> Option<(usize, usize)> {
    if square.row >= SIZE || square.col >= SIZE {
        return None;
    }
    Some((usize::from(square.row), usize::from(square.col)))
}
