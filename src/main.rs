use std::io::{self, Write};

use chessvar::chess::game::Game;
use clap::Parser;

/// Moves played when none are given on the command line.
const DEMONSTRATION_MOVES: [&str; 1] = ["e2e4"];

/// Plays a sequence of moves of the type elimination chess variant from the
/// starting position and prints the board after each of them.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Moves in `<file><rank><file><rank>` notation, e.g. "e2e4". Rejected
    /// moves are reported and skipped.
    moves: Vec<String>,
    /// Only print the final board and game state.
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("CHESSVAR_LOG", "warn"))
        .init();
    let config = Config::parse();
    log::debug!("{config:?}");

    let moves = if config.moves.is_empty() {
        DEMONSTRATION_MOVES.iter().map(ToString::to_string).collect()
    } else {
        config.moves
    };

    if !config.quiet {
        chessvar::print_engine_info();
        chessvar::print_binary_info();
    }

    let mut stdout = io::stdout().lock();
    let mut game = Game::new();
    if !config.quiet {
        writeln!(stdout, "Initial Board:")?;
        writeln!(stdout, "{}\n", game.render())?;
    }
    for next_move in &moves {
        if let Err(e) = game.apply_move(next_move) {
            writeln!(stdout, "Rejected {next_move}: {e}")?;
        }
        if !config.quiet {
            writeln!(stdout, "{}\n", game.render())?;
        }
    }
    if config.quiet {
        writeln!(stdout, "{}\n", game.render())?;
    }
    writeln!(stdout, "Game State: {}", game.game_state())?;
    Ok(())
}
