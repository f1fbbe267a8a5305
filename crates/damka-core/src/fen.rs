use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::constants::SIZE;
use crate::types::{Player, Square, Stone};

/// Standard opening setup, Black to move. Lowercase letters are men,
/// uppercase kings, digits are runs of empty squares.
pub const START_POSITION: &str = "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1 b";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFen {
    pub board: Board,
    pub turn: Player,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid fen")]
    Invalid,
    #[error("{0}")]
    Validation(String),
    #[error("board error")]
    Board(#[from] BoardError),
}

pub fn validate_fen(fen: &str) -> Result<(), FenError> {
    let parts: Vec<&str> = fen.split(' ').collect();
    if parts.len() != 2 {
        return Err(FenError::Validation(format!(
            "expected 2 fields, received {}",
            parts.len()
        )));
    }

    let rows: Vec<&str> = parts[0].split('/').collect();
    if rows.len() != usize::from(SIZE) {
        return Err(FenError::Validation(format!(
            "1st field (stone positions) is invalid [expected {} rows, received {}]",
            SIZE,
            rows.len()
        )));
    }

    for (i, row) in rows.iter().enumerate() {
        let mut count = 0u32;
        for ch in row.chars() {
            if let Some(digit) = ch.to_digit(10) {
                if digit == 0 || digit > u32::from(SIZE) {
                    return Err(FenError::Validation(
                        "1st field (stone positions) is invalid [bad empty run]".to_string(),
                    ));
                }
                count += digit;
            } else if stone_from_code(ch).is_some() {
                count += 1;
            } else {
                return Err(FenError::Validation(format!(
                    "1st field (stone positions) is invalid [invalid stone '{ch}']"
                )));
            }
            // Bail as soon as the row is too wide so arbitrarily long
            // inputs cannot run the count up.
            if count > u32::from(SIZE) {
                return Err(FenError::Validation(format!(
                    "1st field (stone positions) is invalid [expected {} squares, received {}] in row {}",
                    SIZE,
                    count,
                    i + 1
                )));
            }
        }
        if count != u32::from(SIZE) {
            return Err(FenError::Validation(format!(
                "1st field (stone positions) is invalid [expected {} squares, received {}] in row {}",
                SIZE,
                count,
                i + 1
            )));
        }
    }

    let mut turn = parts[1].chars();
    match (turn.next().and_then(Player::from_code), turn.next()) {
        (Some(_), None) => Ok(()),
        _ => Err(FenError::Validation(
            "2nd field (turn) is invalid [expected 'w' or 'b']".to_string(),
        )),
    }
}

pub fn parse_fen(fen: &str) -> Result<ParsedFen, FenError> {
    validate_fen(fen)?;

    let (grid, turn) = fen.split_once(' ').ok_or(FenError::Invalid)?;
    let turn = turn
        .chars()
        .next()
        .and_then(Player::from_code)
        .ok_or(FenError::Invalid)?;

    let mut board = Board::empty();
    for (row, row_text) in grid.split('/').enumerate() {
        let mut col = 0u8;
        for ch in row_text.chars() {
            if let Some(digit) = ch.to_digit(10) {
                col += digit as u8;
            } else {
                let stone = stone_from_code(ch).ok_or(FenError::Invalid)?;
                // Rejects stones on non-playable squares.
                board.put(stone, Square::new_unchecked(row as u8, col))?;
                col += 1;
            }
        }
    }

    Ok(ParsedFen { board, turn })
}

pub fn encode_fen(board: &Board, turn: Player) -> String {
    let mut out = String::new();
    for row in 0..SIZE {
        if row > 0 {
            out.push('/');
        }
        let mut empty = 0u8;
        for col in 0..SIZE {
            match board.get(Square::new_unchecked(row, col)) {
                Some(stone) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(stone_code(stone));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
    }
    out.push(' ');
    out.push(turn.to_code());
    out
}

const fn stone_code(stone: Stone) -> char {
    match (stone.owner, stone.king) {
        (Player::White, false) => 'w',
        (Player::White, true) => 'W',
        (Player::Black, false) => 'b',
        (Player::Black, true) => 'B',
    }
}

const fn stone_from_code(code: char) -> Option<Stone> {
    match code {
        'w' => Some(Stone::man(Player::White)),
        'W' => Some(Stone::king(Player::White)),
        'b' => Some(Stone::man(Player::Black)),
        'B' => Some(Stone::king(Player::Black)),
        _ => None,
    }
}
