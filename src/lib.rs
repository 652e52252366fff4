//! Text-chess: a minimal console chess board.
//!
//! The board starts in the standard layout and any piece can be moved to any
//! square. There is no rules engine: no legality checks, no turn alternation,
//! no check or mate detection. Whatever stands on the source square replaces
//! whatever stands on the destination.
//!
//! ## Modules
//!
//! - [`board`] - Pieces, the 8x8 grid and glyph rendering
//! - [`position`] - Row/column coordinates and `AX,BY` input parsing
//! - [`game`] - Game state and the move transition
//! - [`session`] - The prompt/read/move console loop
//!
//! ## Example
//!
//! ```
//! use text_chess::game::Game;
//! use text_chess::position::MoveInput;
//!
//! let mv: MoveInput = "A1,A3".parse().unwrap();
//! let game = Game::new().move_piece(mv.from, mv.to);
//! println!("{game}");
//! ```

pub mod board;
pub mod game;
pub mod position;
pub mod session;
