//! Movement rules of each piece kind.
//!
//! Every kind answers two independent questions through [`PieceRules`]:
//!
//! - Whether a transition has the right *shape* for the piece. Sliding pieces
//!   do not look at the squares between the origin and the destination here,
//!   pawns do not look at the square they jump over when advancing twice.
//! - Which squares the piece could land on given the current occupancy. Here
//!   sliding pieces stop at the first occupied square of each ray and only
//!   include it when it holds an opposing piece.
//!
//! The two answers are not derived from each other and
//! [`crate::chess::game::Game::apply_move`] uses neither of them: move
//! application only checks ownership of the origin square. The generator
//! exists for callers that want to show or restrict legal destinations.

use arrayvec::ArrayVec;

use crate::chess::board::Board;
use crate::chess::core::{Direction, PieceKind, Player, Rank, Square};

/// A queen in the middle of an empty board reaches 27 squares, no piece can do
/// better.
pub const MAX_DESTINATIONS: usize = 27;

/// Squares a piece can move to, in generation order.
pub type Destinations = ArrayVec<Square, MAX_DESTINATIONS>;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Shape check and destination generation for a single piece kind.
pub trait PieceRules {
    /// Tests whether moving from `from` to `to` has the right shape for the
    /// piece. Only pawns consult the board: their moves depend on whether the
    /// destination is empty or holds an opposing piece.
    fn is_geometrically_valid(
        &self,
        board: &Board,
        from: Square,
        to: Square,
        mover: Player,
    ) -> bool;

    /// Enumerates the squares the piece standing on `from` and owned by
    /// `mover` can move to. Never includes squares occupied by `mover`'s own
    /// pieces.
    fn candidate_destinations(&self, board: &Board, from: Square, mover: Player) -> Destinations;
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug)]
pub struct Pawn;

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug)]
pub struct Rook;

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug)]
pub struct Knight;

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug)]
pub struct Bishop;

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug)]
pub struct Queen;

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug)]
pub struct King;

impl PieceKind {
    /// Returns the movement rules of this kind.
    ///
    /// ```
    /// use chessvar::chess::board::Board;
    /// use chessvar::chess::core::{PieceKind, Player, Square};
    ///
    /// let board = Board::starting();
    /// let knight = PieceKind::Knight.rules();
    /// assert!(knight.is_geometrically_valid(&board, Square::G1, Square::F3, Player::White));
    /// assert_eq!(
    ///     knight.candidate_destinations(&board, Square::G1, Player::White).len(),
    ///     2
    /// );
    /// ```
    #[must_use]
    pub fn rules(self) -> &'static dyn PieceRules {
        match self {
            Self::Pawn => &Pawn,
            Self::Rook => &Rook,
            Self::Knight => &Knight,
            Self::Bishop => &Bishop,
            Self::Queen => &Queen,
            Self::King => &King,
        }
    }
}

impl PieceRules for Pawn {
    /// Pawns advance one square onto an empty square, two squares from their
    /// starting rank onto an empty square (the square in between is not
    /// checked) or capture one square diagonally forward.
    fn is_geometrically_valid(
        &self,
        board: &Board,
        from: Square,
        to: Square,
        mover: Player,
    ) -> bool {
        let (_, forward) = mover.push_direction().delta();
        let file_delta = (to.file() as i8 - from.file() as i8).abs();
        let rank_delta = to.rank() as i8 - from.rank() as i8;
        match file_delta {
            0 if rank_delta == forward => board.is_empty(to),
            0 if rank_delta == 2 * forward => {
                from.rank() == Rank::pawns_starting(mover) && board.is_empty(to)
            },
            1 if rank_delta == forward => board
                .at(to)
                .is_some_and(|piece| piece.owner == mover.opponent()),
            _ => false,
        }
    }

    fn candidate_destinations(&self, board: &Board, from: Square, mover: Player) -> Destinations {
        let (_, forward) = mover.push_direction().delta();
        [(0, forward), (0, 2 * forward), (-1, forward), (1, forward)]
            .into_iter()
            .filter_map(|(file_delta, rank_delta)| from.offset(file_delta, rank_delta))
            .filter(|&to| self.is_geometrically_valid(board, from, to, mover))
            .collect()
    }
}

impl PieceRules for Rook {
    fn is_geometrically_valid(
        &self,
        _board: &Board,
        from: Square,
        to: Square,
        _mover: Player,
    ) -> bool {
        from != to && (from.file() == to.file() || from.rank() == to.rank())
    }

    fn candidate_destinations(&self, board: &Board, from: Square, mover: Player) -> Destinations {
        let mut destinations = Destinations::new();
        slide(board, from, mover, &Direction::ORTHOGONAL, &mut destinations);
        destinations
    }
}

impl PieceRules for Bishop {
    fn is_geometrically_valid(
        &self,
        _board: &Board,
        from: Square,
        to: Square,
        _mover: Player,
    ) -> bool {
        let (files, ranks) = from.distance(to);
        files == ranks && files != 0
    }

    fn candidate_destinations(&self, board: &Board, from: Square, mover: Player) -> Destinations {
        let mut destinations = Destinations::new();
        slide(board, from, mover, &Direction::DIAGONAL, &mut destinations);
        destinations
    }
}

impl PieceRules for Queen {
    fn is_geometrically_valid(
        &self,
        board: &Board,
        from: Square,
        to: Square,
        mover: Player,
    ) -> bool {
        Rook.is_geometrically_valid(board, from, to, mover)
            || Bishop.is_geometrically_valid(board, from, to, mover)
    }

    fn candidate_destinations(&self, board: &Board, from: Square, mover: Player) -> Destinations {
        let mut destinations = Destinations::new();
        slide(board, from, mover, &Direction::ORTHOGONAL, &mut destinations);
        slide(board, from, mover, &Direction::DIAGONAL, &mut destinations);
        destinations
    }
}

impl PieceRules for Knight {
    fn is_geometrically_valid(
        &self,
        _board: &Board,
        from: Square,
        to: Square,
        _mover: Player,
    ) -> bool {
        matches!(from.distance(to), (1, 2) | (2, 1))
    }

    fn candidate_destinations(&self, board: &Board, from: Square, mover: Player) -> Destinations {
        leap(board, from, mover, &KNIGHT_OFFSETS)
    }
}

impl PieceRules for King {
    fn is_geometrically_valid(
        &self,
        _board: &Board,
        from: Square,
        to: Square,
        _mover: Player,
    ) -> bool {
        let (files, ranks) = from.distance(to);
        files <= 1 && ranks <= 1 && from != to
    }

    fn candidate_destinations(&self, board: &Board, from: Square, mover: Player) -> Destinations {
        leap(board, from, mover, &KING_OFFSETS)
    }
}

/// Casts a ray in each direction until it leaves the board or hits a piece.
/// The square of the first piece on the ray is included only if that piece
/// belongs to the opponent.
fn slide(
    board: &Board,
    from: Square,
    mover: Player,
    directions: &[Direction],
    destinations: &mut Destinations,
) {
    for &direction in directions {
        let mut current = from;
        while let Some(next) = current.shift(direction) {
            match board.at(next) {
                None => destinations.push(next),
                Some(piece) => {
                    if piece.owner != mover {
                        destinations.push(next);
                    }
                    break;
                },
            }
            current = next;
        }
    }
}

/// Single-step moves by fixed offsets that stay on the board and do not land
/// on our own pieces.
fn leap(board: &Board, from: Square, mover: Player, offsets: &[(i8, i8)]) -> Destinations {
    offsets
        .iter()
        .filter_map(|&(file_delta, rank_delta)| from.offset(file_delta, rank_delta))
        .filter(|&to| !board.is_owned_by(to, mover))
        .collect()
}
