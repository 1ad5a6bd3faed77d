//! Engine for a two-player chess variant where a player loses as soon as all
//! pieces of any single kind are gone.
//!
//! ```
//! use chessvar::chess::game::{Game, GameResult};
//!
//! let mut game = Game::new();
//! let _ = game.apply_move("e2e4").unwrap();
//! assert_eq!(game.game_state(), GameResult::InProgress);
//! println!("{}", game.render());
//! ```

pub mod chess;

use shadow_rs::shadow;

shadow!(build);

/// Returns the full engine version that can be used to identify how it was
/// built in the first place.
#[must_use]
pub fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints the engine name and version.
pub fn print_engine_info() {
    println!("chessvar {}", engine_version());
}

/// Prints the build type and whether the build is clean.
pub fn print_binary_info() {
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
