//! Game state and the move transition.
//!
//! A [`Game`] owns its [`Board`] and is threaded through the interaction loop
//! by value: [`Game::move_piece`] consumes the current game and hands back the
//! next one. No chess rules are applied. Any square may be moved to any other
//! square, the destination is simply overwritten, and the turn never changes.

use std::fmt;

use log::trace;

use crate::board::{Board, Color, SIZE};
use crate::position::Position;

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    /// Side to move. Always White: moves do not alternate turns.
    pub turn: Color,
    pub board: Board,
    /// Winner by checkmate. Nothing detects mate, so this stays `None`.
    pub mate: Option<Color>,
    /// Reason the last move was refused. Moves are never refused, so this stays `None`.
    pub move_error: Option<String>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// White to move on the standard starting board.
    pub fn new() -> Self {
        Self {
            turn: Color::White,
            board: Board::new(),
            mate: None,
            move_error: None,
        }
    }

    /// Relocate whatever is on `from` to `to` and return the updated game.
    ///
    /// The source square is cleared and the destination receives a copy of
    /// the source's previous contents. Moving from an empty square therefore
    /// empties the destination as well; moving a square onto itself leaves it
    /// as it was.
    pub fn move_piece(mut self, from: Position, to: Position) -> Game {
        let (from_row, from_col) = from.indices();
        let (to_row, to_col) = to.indices();

        let moving = self.board.get(from_row, from_col);
        self.board.set(from_row, from_col, None);
        self.board.set(to_row, to_col, moving);

        trace!("{from} -> {to}: {moving:?}");
        self
    }

    /// Turn banner followed by the board, one string per output line.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(1 + SIZE);
        lines.push(format!("{} to move...", self.turn));
        lines.extend(self.board.render_rows());
        lines
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
