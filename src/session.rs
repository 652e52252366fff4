//! Interactive console loop.
//!
//! Each iteration prints the game, prompts for a move in `AX,BY` form, blocks
//! until one line of input arrives and then applies it. A line consisting of
//! just `q` ends the loop. Lines that do not parse print a notice and leave the
//! game untouched.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use text_chess::session::Session;
//!
//! let mut out = Vec::new();
//! let mut session = Session::new(Cursor::new("A1,A3\nq\n"), &mut out);
//! session.run().unwrap();
//! assert!(session.game().board.get(0, 0).is_none());
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, info};
use thiserror::Error;

use crate::game::Game;
use crate::position::{MoveInput, PositionError};

/// Printed once before the first board.
pub const GREETING: &str = "Press q at any time to exit";

/// Written (without newline) right before each blocking read.
pub const PROMPT: &str = "Please enter start/end location in AX,BY format:";

/// Printed when a line is neither a move nor the quit command.
pub const INVALID_INPUT: &str = "Invalid input, try again.";

/// Input line that ends the session.
pub const QUIT_COMMAND: &str = "q";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed before quit command")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What a single input line did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Moved(MoveInput),
    Invalid(PositionError),
    Quit,
}

/// Console session state: the live game plus its input and output streams.
pub struct Session<R, W> {
    input: R,
    output: W,
    game: Game,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session on a fresh game.
    pub fn new(input: R, output: W) -> Self {
        Self::with_game(input, output, Game::new())
    }

    pub fn with_game(input: R, output: W, game: Game) -> Self {
        Self { input, output, game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Hand back the game, dropping the streams.
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Run until the quit command.
    ///
    /// Running out of input before `q` is an error.
    pub fn run(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "{GREETING}")?;

        loop {
            write!(self.output, "{}", self.game)?;
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let line = self.read_line()?;
            match self.execute(&line) {
                Outcome::Quit => break,
                Outcome::Invalid(_) => writeln!(self.output, "{INVALID_INPUT}")?,
                Outcome::Moved(_) => {}
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Read one line. Bytes that are not UTF-8 are replaced rather than
    /// rejected, so they reach the parser and fail as invalid input.
    fn read_line(&mut self) -> Result<String, SessionError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Interpret one raw input line against the current game.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        if line == QUIT_COMMAND {
            debug!("quit requested");
            return Outcome::Quit;
        }

        match line.parse::<MoveInput>() {
            Ok(mv) => {
                debug!("applying move {mv}");
                self.game = std::mem::take(&mut self.game).move_piece(mv.from, mv.to);
                Outcome::Moved(mv)
            }
            Err(err) => {
                info!("rejected input {line:?}: {err}");
                Outcome::Invalid(err)
            }
        }
    }
}
