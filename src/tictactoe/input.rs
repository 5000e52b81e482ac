use crate::tictactoe::board::{self, BoardPosition, ROW_LEN};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_MOVE: u8 = 1;
pub const MAX_MOVE: u8 = (ROW_LEN * ROW_LEN) as u8;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a number. Enter a number between 1 and 9.")]
    NotANumber(String),
    #[error("{0} is out of range. Enter a number between 1 and 9.")]
    OutOfRange(i64),
}

// A square number as typed by the player:
//   1 | 2 | 3
//   4 | 5 | 6
//   7 | 8 | 9
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move(u8);

impl Move {
    pub fn new(n: i64) -> Result<Self, InputError> {
        if n < MIN_MOVE as i64 || n > MAX_MOVE as i64 {
            return Err(InputError::OutOfRange(n));
        }
        Ok(Move(n as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn position(&self) -> BoardPosition {
        let idx = (self.0 - 1) as usize;
        BoardPosition::from_index(idx)
    }
}

impl From<BoardPosition> for Move {
    fn from(pos: BoardPosition) -> Self {
        Move((pos.row() * ROW_LEN + pos.col() + 1) as u8)
    }
}

impl FromStr for Move {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let n: i64 = trimmed
            .parse()
            .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
        Move::new(n)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// The square numbers laid out the way they appear on the board
pub struct SquareLayout;

impl fmt::Display for SquareLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        board::write_grid(f, |row, col| {
            Move::from(BoardPosition::from_index(row * ROW_LEN + col)).to_string()
        })
    }
}
