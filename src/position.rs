//! Board coordinates and the `AX,BY` move input format.
//!
//! A position is a row letter `A`..`H` and a column number `1`..`8`. The row
//! letter picks the board row (`A` is row 0, Black's back rank) and the column
//! number minus one picks the column. Letters are uppercase only.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::board::SIZE;

/// Errors produced while parsing coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("unknown row '{0}', expected A-H")]
    InvalidRow(char),
    #[error("unknown column '{0}', expected 1-8")]
    InvalidColumn(char),
    #[error("malformed square '{0}', expected a letter and a digit like A1")]
    MalformedSquare(String),
    #[error("malformed move '{0}', expected AX,BY")]
    MalformedMove(String),
}

/// Board row letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Row {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Row {
    /// All rows in board order.
    pub const ALL: [Row; SIZE] = [Row::A, Row::B, Row::C, Row::D, Row::E, Row::F, Row::G, Row::H];

    /// Board row index (`A` = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_char(c: char) -> Result<Row, PositionError> {
        match c {
            'A'..='H' => Ok(Self::ALL[(c as u8 - b'A') as usize]),
            _ => Err(PositionError::InvalidRow(c)),
        }
    }

    pub const fn letter(self) -> char {
        (b'A' + self as u8) as char
    }
}

/// Column number, always within `1..=8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Column(u8);

impl Column {
    pub fn new(number: u8) -> Option<Column> {
        (1..=SIZE as u8).contains(&number).then_some(Column(number))
    }

    pub fn from_char(c: char) -> Result<Column, PositionError> {
        c.to_digit(10)
            .and_then(|d| Column::new(d as u8))
            .ok_or(PositionError::InvalidColumn(c))
    }

    /// The 1-based number as written.
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Board column index (`1` = 0).
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

/// A square on the board, addressed by row letter and column number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: Row,
    pub column: Column,
}

impl Position {
    pub const fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// Zero-based `(row, col)` into the board grid.
    pub const fn indices(self) -> (usize, usize) {
        (self.row.index(), self.column.index())
    }

    /// Every square, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        Row::ALL.into_iter().flat_map(|row| {
            (1..=SIZE as u8)
                .filter_map(move |n| Column::new(n).map(|column| Position::new(row, column)))
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row.letter(), self.column.number())
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parse a two-character square such as `A1` or `H8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(c), None) => {
                Ok(Position::new(Row::from_char(r)?, Column::from_char(c)?))
            }
            _ => Err(PositionError::MalformedSquare(s.to_string())),
        }
    }
}

/// A source/destination pair read from one input line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveInput {
    pub from: Position,
    pub to: Position,
}

impl fmt::Display for MoveInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.from, self.to)
    }
}

impl FromStr for MoveInput {
    type Err = PositionError;

    /// Parse `AX,BY`. Surrounding whitespace is ignored, nothing else is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (from, to) = line
            .split_once(',')
            .ok_or_else(|| PositionError::MalformedMove(line.to_string()))?;
        Ok(MoveInput {
            from: from.parse()?,
            to: to.parse()?,
        })
    }
}
