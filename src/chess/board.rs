//! Square-centric ("mailbox") board representation.
//!
//! The [`Board`] is a passive grid: it knows nothing about turns, legality or
//! piece counts. [`crate::chess::game::Game`] is the only component mutating
//! it during play.

use std::fmt::{self, Write};

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::chess::core::{File, Piece, PieceKind, Player, Rank, Square, BOARD_SIZE};

/// Back rank of the starting position from [`File::A`] to [`File::H`]. Both
/// players use the same order.
const BACKRANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8×8 grid where each square is either empty or holds exactly one piece.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Standard starting position: each player has 16 pieces, White occupies
    /// the first two ranks and Black the last two.
    ///
    /// ```
    /// use chessvar::chess::board::Board;
    /// use chessvar::chess::core::{Piece, PieceKind, Player, Square};
    ///
    /// let board = Board::starting();
    /// assert_eq!(
    ///     board.at(Square::E1),
    ///     Some(Piece::new(Player::White, PieceKind::King))
    /// );
    /// assert!(board.is_empty(Square::E4));
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for player in Player::iter() {
            let backrank = Rank::backrank(player);
            let pawns = Rank::pawns_starting(player);
            for (file, kind) in File::iter().zip(BACKRANK) {
                board.place(Square::new(file, backrank), Some(Piece::new(player, kind)));
                board.place(
                    Square::new(file, pawns),
                    Some(Piece::new(player, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    /// Returns the piece standing on the square, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    /// Overwrites the contents of the square unconditionally.
    pub fn place(&mut self, square: Square, content: Option<Piece>) {
        self.squares[square as usize] = content;
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_empty(&self, square: Square) -> bool {
        self.at(square).is_none()
    }

    /// Returns true if the square holds a piece of the given player.
    #[must_use]
    pub fn is_owned_by(&self, square: Square, player: Player) -> bool {
        self.at(square).is_some_and(|piece| piece.owner == player)
    }

    /// Iterates over the squares occupied by the player's pieces, from A1 to
    /// H8.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| match self.at(square) {
            Some(piece) if piece.owner == player => Some((square, piece)),
            _ => None,
        })
    }

    /// Number of pieces the player has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.pieces(player).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Display for Board {
    /// Prints the board as 8 lines of 8 space-separated cells, starting from
    /// the eighth rank: algebraic symbol for pieces (uppercase for White,
    /// lowercase for Black) and a space for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let line = File::iter()
                .map(|file| match self.at(Square::new(file, rank)) {
                    Some(piece) => piece.to_string(),
                    None => EMPTY_SQUARE.to_string(),
                })
                .join(SQUARE_SEPARATOR);
            f.write_str(&line)?;
            if rank != Rank::One {
                f.write_str(LINE_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Same grid as [`fmt::Display`] but with '.' for empty squares, which is
    /// easier to read in test failures.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if file != File::H {
                    f.write_str(SQUARE_SEPARATOR)?;
                }
            }
            if rank != Rank::One {
                f.write_str(LINE_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

const EMPTY_SQUARE: char = ' ';
const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
