//! Text-chess: move pieces around a console chess board.
//!
//! ## Usage
//!
//! - `text-chess` - Play interactively on stdin/stdout
//! - `text-chess play` - Same as above
//! - `text-chess demo --moves 5 --seed 7` - Apply random moves and print each board

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};

use text_chess::game::Game;
use text_chess::position::Position;
use text_chess::session::Session;

/// Text-chess: a console chess board with no rules
#[derive(Parser)]
#[command(name = "text-chess")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log verbosity written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read moves in AX,BY format from stdin until `q`
    Play,
    /// Apply pseudo-random moves to a new game and print each board
    Demo {
        /// Number of moves to apply
        #[arg(long, default_value_t = 5)]
        moves: usize,
        /// Seed for move selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level)?;

    match cli.command {
        Some(Commands::Play) | None => run_play(),
        Some(Commands::Demo { moves, seed }) => {
            run_demo(moves, seed);
            Ok(())
        }
    }
}

fn setup_logging(level: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

fn run_play() -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    session.run()?;
    info!("session ended");
    Ok(())
}

fn run_demo(moves: usize, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let squares: Vec<Position> = Position::all().collect();

    let mut game = Game::new();
    println!("{game}");

    for _ in 0..moves {
        let from = squares[rng.usize(..squares.len())];
        let to = squares[rng.usize(..squares.len())];
        println!("{from},{to}");
        game = game.move_piece(from, to);
        println!("{game}");
    }
}
