//! Board model: the 8x8 grid of optional pieces and its text rendering.
//!
//! Row 0 is Black's back rank and row 7 is White's. No chess rules live
//! here; the board only knows where pieces sit and how to draw them.

use std::fmt;

/// Side owning a piece (and whose turn it is).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Chess piece type. Purely descriptive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece is a plain value; moving it copies the value into the new square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// Unicode chess symbol for this piece.
    ///
    /// Black uses the solid glyphs, White the outline ones.
    pub const fn glyph(self) -> char {
        match (self.color, self.rank) {
            (Color::Black, Rank::Pawn) => '\u{265F}',
            (Color::Black, Rank::Knight) => '\u{265E}',
            (Color::Black, Rank::Bishop) => '\u{265D}',
            (Color::Black, Rank::Rook) => '\u{265C}',
            (Color::Black, Rank::Queen) => '\u{265B}',
            (Color::Black, Rank::King) => '\u{265A}',
            (Color::White, Rank::Pawn) => '\u{2659}',
            (Color::White, Rank::Knight) => '\u{2658}',
            (Color::White, Rank::Bishop) => '\u{2657}',
            (Color::White, Rank::Rook) => '\u{2656}',
            (Color::White, Rank::Queen) => '\u{2655}',
            (Color::White, Rank::King) => '\u{2654}',
        }
    }
}

/// A board cell: empty or holding exactly one piece.
pub type Square = Option<Piece>;

/// Board dimension (rows and columns).
pub const SIZE: usize = 8;

/// Glyph for an empty square whose row and column parity match.
///
/// The filled/outline pair is deliberately inverted so that on a dark
/// terminal the "dark" squares come out light.
pub const EMPTY_EVEN: char = '\u{25A0}';

/// Glyph for an empty square whose row and column parity differ.
pub const EMPTY_ODD: char = '\u{25A1}';

const BACK_RANK: [Rank; SIZE] = [
    Rank::Rook,
    Rank::Knight,
    Rank::Bishop,
    Rank::Queen,
    Rank::King,
    Rank::Bishop,
    Rank::Knight,
    Rank::Rook,
];

fn back_rank(color: Color) -> [Square; SIZE] {
    BACK_RANK.map(|rank| Some(Piece::new(color, rank)))
}

fn pawns(color: Color) -> [Square; SIZE] {
    [Some(Piece::new(color, Rank::Pawn)); SIZE]
}

/// Map a square and its coordinates to the character drawn for it.
pub fn render_square(square: Square, row: usize, col: usize) -> char {
    match square {
        Some(piece) => piece.glyph(),
        None if row % 2 == col % 2 => EMPTY_EVEN,
        None => EMPTY_ODD,
    }
}

/// The 8x8 grid, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Square; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn new() -> Self {
        let empty = [None; SIZE];
        Self {
            cells: [
                back_rank(Color::Black),
                pawns(Color::Black),
                empty,
                empty,
                empty,
                empty,
                pawns(Color::White),
                back_rank(Color::White),
            ],
        }
    }

    /// A board with no pieces at all.
    pub fn empty() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Panics if `row` or `col` is not below [`SIZE`].
    pub fn get(&self, row: usize, col: usize) -> Square {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, square: Square) {
        self.cells[row][col] = square;
    }

    /// Iterate over the rows, top (row 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square; SIZE]> {
        self.cells.iter()
    }

    /// Number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|sq| sq.is_some()).count()
    }

    /// Render every row as a line of space-prefixed glyphs.
    pub fn render_rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .enumerate()
            .map(|(row, squares)| {
                squares
                    .iter()
                    .enumerate()
                    .fold(String::new(), |mut line, (col, &square)| {
                        line.push(' ');
                        line.push(render_square(square, row, col));
                        line
                    })
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_rows() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
