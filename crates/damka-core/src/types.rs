#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::SIZE;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    pub const fn to_code(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'w' => Some(Self::White),
            'b' => Some(Self::Black),
            _ => None,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a forward step. White's home is the high rows and it
    /// advances toward row 0; Black advances toward row SIZE - 1.
    pub const fn forward(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// The row farthest from this player's home side. A man reaching it
    /// is promoted.
    pub const fn crown_row(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => SIZE - 1,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stone {
    pub owner: Player,
    pub king: bool,
}

impl Stone {
    pub const fn man(owner: Player) -> Self {
        Self { owner, king: false }
    }

    pub const fn king(owner: Player) -> Self {
        Self { owner, king: true }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < SIZE && col < SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Only squares of odd coordinate parity carry stones; every diagonal
    /// step and jump preserves the parity.
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Offsets the square by a direction, scaled by `dist`. `None` when the
    /// result falls off the board.
    pub fn offset(self, dir: (i8, i8), dist: i8) -> Option<Self> {
        let row = (self.row as i8).checked_add(dir.0 * dist)?;
        let col = (self.col as i8).checked_add(dir.1 * dist)?;
        if !(0..SIZE as i8).contains(&row) || !(0..SIZE as i8).contains(&col) {
            return None;
        }
        Some(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Stable string form used as the turn-table and cache key.
    pub fn key(self) -> String {
        format!("{}-{}", self.row, self.col)
    }

    pub fn parse(input: &str) -> Option<Self> {
        let (row, col) = input.split_once('-')?;
        let row = row.parse::<u8>().ok()?;
        let col = col.parse::<u8>().ok()?;
        Self::new(row, col)
    }
}

/// Rule options left open by the common ruleset. `forced_capture` makes
/// capturing mandatory across the whole side: when any stone of the player
/// on turn can capture, stones without a capture are not movable that turn.
/// The per-stone rule that a started chain must run to exhaustion holds
/// regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rules {
    pub forced_capture: bool,
}
