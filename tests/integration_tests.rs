//! Integration tests for text-chess
//!
//! These drive the public API end to end: full console sessions over in-memory
//! streams, and move properties checked over every square pair.

use std::io::Cursor;

use text_chess::board::{Board, Color, EMPTY_EVEN, EMPTY_ODD, Piece, Rank, render_square};
use text_chess::game::Game;
use text_chess::position::Position;
use text_chess::session::{GREETING, INVALID_INPUT, PROMPT, Session, SessionError};

// =============================================================================
// Helper functions
// =============================================================================

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

/// Run a full session over `input` and return the final game plus everything printed.
fn play(input: &str) -> (Result<(), SessionError>, Game, String) {
    let mut out = Vec::new();
    let mut session = Session::new(Cursor::new(input), &mut out);
    let result = session.run();
    let game = session.into_game();
    (result, game, String::from_utf8(out).unwrap())
}

/// Split session output into the board snapshots printed before each prompt.
fn boards(output: &str) -> Vec<Vec<&str>> {
    output
        .split(PROMPT)
        .filter(|chunk| chunk.contains("to move..."))
        .map(|chunk| {
            chunk
                .lines()
                .skip_while(|l| !l.ends_with("to move..."))
                .skip(1)
                .take(8)
                .collect()
        })
        .collect()
}

// =============================================================================
// End-to-end sessions
// =============================================================================

#[test]
fn test_quit_immediately() {
    let (result, game, out) = play("q\n");
    assert!(result.is_ok());
    assert_eq!(game, Game::new());
    assert!(out.starts_with(GREETING));
    assert_eq!(out.matches(PROMPT).count(), 1);
    assert_eq!(out.matches("White to move...").count(), 1);
    assert!(!out.contains(INVALID_INPUT));
}

#[test]
fn test_move_black_rook() {
    let (result, game, out) = play("A1,A3\nq\n");
    assert!(result.is_ok());
    assert_eq!(game.board.get(0, 0), None);
    assert_eq!(game.board.get(0, 2), Some(Piece::new(Color::Black, Rank::Rook)));

    let snapshots = boards(&out);
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0][0], " ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
    // Rook glyph at column 3, checkerboard glyph at column 1
    assert_eq!(snapshots[1][0], " ■ ♞ ♜ ♛ ♚ ♝ ♞ ♜");
}

#[test]
fn test_invalid_input_reprompts() {
    let (result, game, out) = play("Z9,A1\nq\n");
    assert!(result.is_ok());
    assert_eq!(game, Game::new());
    assert_eq!(out.matches(INVALID_INPUT).count(), 1);
    assert_eq!(out.matches(PROMPT).count(), 2);

    let snapshots = boards(&out);
    assert_eq!(snapshots[0], snapshots[1]);
}

#[test]
fn test_mixed_input_sequence() {
    let input = "G5,E5\nnonsense\n  B5,D5  \nA1;A3\nH4,A4\nq\n";
    let (result, game, out) = play(input);
    assert!(result.is_ok());
    assert_eq!(out.matches(INVALID_INPUT).count(), 2);
    assert_eq!(out.matches(PROMPT).count(), 6);

    assert_eq!(game.board.get(4, 4), Some(Piece::new(Color::White, Rank::Pawn)));
    assert_eq!(game.board.get(3, 4), Some(Piece::new(Color::Black, Rank::Pawn)));
    assert_eq!(game.board.get(0, 3), Some(Piece::new(Color::White, Rank::Queen)));
    assert_eq!(game.board.get(7, 3), None);
    assert_eq!(game.turn, Color::White);
}

#[test]
fn test_non_utf8_line_is_invalid_input() {
    let mut out = Vec::new();
    let mut session = Session::new(Cursor::new(&b"A\xff,A3\nq\n"[..]), &mut out);
    let result = session.run();
    let game = session.into_game();
    let out = String::from_utf8(out).unwrap();

    assert!(result.is_ok());
    assert_eq!(game, Game::new());
    assert_eq!(out.matches(INVALID_INPUT).count(), 1);
    assert_eq!(out.matches(PROMPT).count(), 2);
}

#[test]
fn test_lines_after_quit_are_ignored() {
    let (result, game, _) = play("q\nA1,A3\n");
    assert!(result.is_ok());
    assert_eq!(game, Game::new());
}

#[test]
fn test_eof_without_quit_is_error() {
    let (result, game, _) = play("A1,A3\n");
    assert!(matches!(result, Err(SessionError::InputClosed)));
    assert_eq!(game.board.get(0, 2), Some(Piece::new(Color::Black, Rank::Rook)));
}

// =============================================================================
// Move properties over every square pair
// =============================================================================

#[test]
fn test_move_onto_same_square_is_noop() {
    for p in Position::all() {
        let game = Game::new().move_piece(p, p);
        assert_eq!(game, Game::new(), "moving {p} onto itself changed the game");
    }
}

#[test]
fn test_move_relocates_and_overwrites() {
    let start = Board::new();
    for from in Position::all() {
        let (fr, fc) = from.indices();
        for to in Position::all().filter(|&to| to != from) {
            let (tr, tc) = to.indices();
            let game = Game::new().move_piece(from, to);

            assert_eq!(game.board.get(fr, fc), None, "{from} should be empty after {from},{to}");
            assert_eq!(
                game.board.get(tr, tc),
                start.get(fr, fc),
                "{to} should hold {from}'s piece"
            );

            // Nothing else on the board moves
            for other in Position::all().filter(|&o| o != from && o != to) {
                let (r, c) = other.indices();
                assert_eq!(game.board.get(r, c), start.get(r, c));
            }
        }
    }
}

#[test]
fn test_move_from_empty_square_empties_both() {
    for from in Position::all().filter(|p| (2..6).contains(&p.row.index())) {
        for to in Position::all() {
            let game = Game::new().move_piece(from, to);
            let (fr, fc) = from.indices();
            let (tr, tc) = to.indices();
            assert_eq!(game.board.get(fr, fc), None);
            assert_eq!(game.board.get(tr, tc), None);
        }
    }
}

#[test]
fn test_random_moves_never_touch_status() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let squares: Vec<Position> = Position::all().collect();

    let mut game = Game::new();
    let mut previous_count = game.board.piece_count();
    for _ in 0..500 {
        let from = squares[rng.usize(..squares.len())];
        let to = squares[rng.usize(..squares.len())];
        game = game.move_piece(from, to);

        assert_eq!(game.turn, Color::White);
        assert_eq!(game.mate, None);
        assert_eq!(game.move_error, None);

        // Pieces can disappear but never appear
        let count = game.board.piece_count();
        assert!(count <= previous_count);
        previous_count = count;
    }
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_rendering_is_pure() {
    let game = Game::new().move_piece(pos("B3"), pos("E6"));
    assert_eq!(game.render(), game.render());
    assert_eq!(game.to_string(), game.to_string());

    for p in Position::all() {
        let (r, c) = p.indices();
        let sq = game.board.get(r, c);
        assert_eq!(render_square(sq, r, c), render_square(sq, r, c));
    }
}

#[test]
fn test_empty_board_is_checkerboard() {
    let rows = Board::empty().render_rows();
    for (r, row) in rows.iter().enumerate() {
        let glyphs: Vec<char> = row.chars().skip(1).step_by(2).collect();
        assert_eq!(glyphs.len(), 8);
        for (c, &g) in glyphs.iter().enumerate() {
            let expected = if r % 2 == c % 2 { EMPTY_EVEN } else { EMPTY_ODD };
            assert_eq!(g, expected);
        }
        assert!(row.chars().step_by(2).all(|ch| ch == ' '));
    }
}
