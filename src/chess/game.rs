//! The game engine: applies moves to the board, keeps the piece counts up to
//! date and decides the winner.
//!
//! A player loses as soon as the count of *any* of their piece kinds drops to
//! zero ("type elimination"), there is no check or checkmate. Move
//! application is deliberately permissive: it only verifies that the player to
//! move owns the piece on the origin square. Use
//! [`Game::candidate_destinations`] to find out where a piece may go according
//! to its movement rules.

use std::fmt;

use thiserror::Error;

use crate::chess::board::Board;
use crate::chess::core::{Move, Piece, PieceKind, Player, Square};
use crate::chess::counter::{CountError, PieceCounts};
use crate::chess::rules::Destinations;

/// Reasons for rejecting a move. The game is left untouched whenever a move is
/// rejected.
#[derive(Debug, Error)]
pub enum MoveError {
    /// The move text is not a `<file><rank><file><rank>` token.
    #[error("invalid move format '{input}': {reason}")]
    InvalidMoveFormat {
        #[allow(missing_docs)]
        input: String,
        #[allow(missing_docs)]
        reason: anyhow::Error,
    },
    /// The origin square is empty or holds a piece of the other player.
    #[error("{square} does not hold a piece of {player}")]
    NotYourPiece {
        #[allow(missing_docs)]
        square: Square,
        #[allow(missing_docs)]
        player: Player,
    },
    /// Applying the move would take the piece counts below zero.
    #[error("piece count inconsistency: {0}")]
    CountInconsistency(#[from] CountError),
    /// The game has already been decided.
    #[error("the game is over: {winner} won")]
    GameOver {
        #[allow(missing_docs)]
        winner: Player,
    },
}

/// Outcome of the game as seen from outside of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    #[allow(missing_docs)]
    InProgress,
    #[allow(missing_docs)]
    WhiteWon,
    #[allow(missing_docs)]
    BlackWon,
}

impl GameResult {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl From<Option<Player>> for GameResult {
    fn from(winner: Option<Player>) -> Self {
        match winner {
            None => Self::InProgress,
            Some(Player::White) => Self::WhiteWon,
            Some(Player::Black) => Self::BlackWon,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "IN_PROGRESS",
            Self::WhiteWon => "WHITE_WON",
            Self::BlackWon => "BLACK_WON",
        })
    }
}

/// Summary of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece that moved.
    pub moved: Piece,
    /// The piece that stood on the destination square, if any.
    pub captured: Option<Piece>,
    /// The game state after the move.
    pub result: GameResult,
}

/// Complete state of a single game: the board, piece counts of both players,
/// the player to move and the winner once there is one.
///
/// There is no shared state between games: independent games are independent
/// values.
#[derive(Clone)]
pub struct Game {
    board: Board,
    counts: PieceCounts,
    side_to_move: Player,
    winner: Option<Player>,
}

impl Game {
    /// Starts a new game from the standard position with White to move.
    ///
    /// ```
    /// use chessvar::chess::game::{Game, GameResult};
    ///
    /// let mut game = Game::new();
    /// assert_eq!(game.game_state(), GameResult::InProgress);
    /// let _ = game.apply_move("e2e4").unwrap();
    /// assert!(game.apply_move("e4e5").is_err(), "it is Black's turn");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            counts: PieceCounts::starting(),
            side_to_move: Player::White,
            winner: None,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn counts(&self) -> &PieceCounts {
        &self.counts
    }

    /// The player whose turn it is. Once the game is over this is the player
    /// who made the last move.
    #[must_use]
    pub const fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn game_state(&self) -> GameResult {
        GameResult::from(self.winner)
    }

    /// Text grid of the board: 8 lines of 8 space-separated cells.
    #[must_use]
    pub fn render(&self) -> String {
        self.board.to_string()
    }

    /// Parses the move token (e.g. "e2e4") and applies it.
    ///
    /// # Errors
    ///
    /// See [`MoveError`]; the game is not modified when an error is returned.
    pub fn apply_move(&mut self, input: &str) -> Result<MoveOutcome, MoveError> {
        let input = input.trim();
        let next_move = Move::from_uci(input).map_err(|reason| MoveError::InvalidMoveFormat {
            input: input.to_string(),
            reason,
        })?;
        self.make_move(next_move)
    }

    /// Applies the move if the player to move owns the piece on its origin
    /// square. The piece's movement rules are not consulted.
    ///
    /// Piece counts are updated as follows:
    ///
    /// - The mover loses one piece of the kind that moved.
    /// - Unless a pawn moved, the opponent also loses one piece of that kind,
    ///   whether or not anything was captured.
    /// - If the destination was occupied, the opponent loses one piece of the
    ///   captured kind.
    ///
    /// # Errors
    ///
    /// See [`MoveError`]; the game is not modified when an error is returned.
    pub fn make_move(&mut self, next_move: Move) -> Result<MoveOutcome, MoveError> {
        if let Some(winner) = self.winner {
            return Err(MoveError::GameOver { winner });
        }
        let us = self.side_to_move;
        let they = us.opponent();
        let moved = match self.board.at(next_move.from()) {
            Some(piece) if piece.owner == us => piece,
            _ => {
                log::debug!("rejected {next_move}: {} has no piece of {us}", next_move.from());
                return Err(MoveError::NotYourPiece {
                    square: next_move.from(),
                    player: us,
                });
            },
        };
        let captured = self.board.at(next_move.to());
        // Counts are updated on a copy first so that an inconsistency does not
        // leave the game half-updated.
        let mut counts = self.counts;
        counts.decrement(us, moved.kind)?;
        if moved.kind != PieceKind::Pawn {
            counts.decrement(they, moved.kind)?;
        }
        if let Some(captured) = captured {
            counts.decrement(they, captured.kind)?;
        }

        self.board.place(next_move.from(), None);
        self.board.place(next_move.to(), Some(moved));
        self.counts = counts;
        log::debug!(
            "{us} played {next_move} ({}{}), counts: {:?}",
            moved.kind,
            captured.map_or_else(String::new, |piece| format!(" takes {}", piece.kind)),
            self.counts
        );

        match self.counts.winner() {
            Some(winner) => {
                log::info!("{winner} won after {next_move}");
                self.winner = Some(winner);
            },
            None => self.side_to_move = they,
        }
        Ok(MoveOutcome {
            moved,
            captured,
            result: self.game_state(),
        })
    }

    /// Squares the piece of the player to move standing on `square` can move
    /// to according to its movement rules. Empty if the square does not hold a
    /// piece of the player to move.
    #[must_use]
    pub fn candidate_destinations(&self, square: Square) -> Destinations {
        match self.board.at(square) {
            Some(piece) if piece.owner == self.side_to_move => piece
                .kind
                .rules()
                .candidate_destinations(&self.board, square, piece.owner),
            _ => Destinations::new(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", &self.board)?;
        writeln!(f, "Player to move: {}", &self.side_to_move)?;
        writeln!(f, "Piece counts: {:?}", &self.counts)?;
        write!(f, "State: {}", self.game_state())
    }
}
