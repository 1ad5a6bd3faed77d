//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::mem;

use anyhow::bail;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A request to move whatever stands on `from` to `to`.
///
/// The move carries no information about the piece or the capture: it is
/// interpreted by [`crate::chess::game::Game`] against its current board. The
/// text representation is the four-character `<file><rank><file><rank>` token
/// (e.g. "e2e4"), the same as in [UCI] without promotions.
///
/// [UCI]: http://wbec-ridderkerk.nl/html/UCIProtocol.html
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Square the moving piece leaves.
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Square the moving piece lands on.
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Parses the four-character move token.
    ///
    /// ```
    /// use chessvar::chess::core::{Move, Square};
    ///
    /// let parsed = Move::from_uci("e2e4").unwrap();
    /// assert_eq!(parsed, Move::new(Square::E2, Square::E4));
    /// assert!(Move::from_uci("e2e").is_err());
    /// assert!(Move::from_uci("e2e9").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// If the token is not exactly four characters long, if either file is not
    /// within 'a'..='h' or if either rank is not within '1'..='8'.
    pub fn from_uci(input: &str) -> anyhow::Result<Self> {
        let Some((from_file, from_rank, to_file, to_rank)) = input.chars().collect_tuple() else {
            bail!(
                "move should be four chars, got '{input}' with {} chars",
                input.chars().count()
            );
        };
        Ok(Self::new(
            Square::new(from_file.try_into()?, from_rank.try_into()?),
            Square::new(to_file.try_into()?, to_rank.try_into()?),
        ))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Board squares: from left to right, from bottom to the top:
///
/// ```
/// use chessvar::chess::core::Square;
///
/// assert_eq!(Square::A1 as u8, 0);
/// assert_eq!(Square::E1 as u8, 4);
/// assert_eq!(Square::H1 as u8, 7);
/// assert_eq!(Square::A4 as u8, 8 * 3);
/// assert_eq!(Square::H8 as u8, 63);
/// ```
///
/// Square is a compact representation using only one byte.
///
/// ```
/// use chessvar::chess::core::Square;
///
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// ```
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter, strum::FromRepr,
)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        unsafe { mem::transmute(file as u8 + (rank as u8) * BOARD_WIDTH) }
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        unsafe { mem::transmute(self as u8 % BOARD_WIDTH) }
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        unsafe { mem::transmute(self as u8 / BOARD_WIDTH) }
    }

    /// Index of the grid row the square belongs to when the board is printed:
    /// row 0 is the eighth rank (Black's back rank), row 7 is the first one.
    #[must_use]
    pub const fn row(self) -> u8 {
        BOARD_WIDTH - 1 - self.rank() as u8
    }

    /// Index of the grid column: column 0 is [`File::A`].
    #[must_use]
    pub const fn column(self) -> u8 {
        self.file() as u8
    }

    /// Inverse of [`Square::row`] and [`Square::column`].
    ///
    /// ```
    /// use chessvar::chess::core::Square;
    ///
    /// assert_eq!(Square::from_grid(0, 0).unwrap(), Square::A8);
    /// assert_eq!(Square::from_grid(6, 4).unwrap(), Square::E2);
    /// assert!(Square::from_grid(8, 0).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// If either index is outside 0..[`BOARD_WIDTH`].
    pub fn from_grid(row: u8, column: u8) -> anyhow::Result<Self> {
        if row >= BOARD_WIDTH {
            bail!("row should be within 0..BOARD_WIDTH, got {row}");
        }
        Ok(Self::new(
            File::try_from(column)?,
            Rank::try_from(BOARD_WIDTH - 1 - row)?,
        ))
    }

    /// Returns the square `file_delta` files and `rank_delta` ranks away or
    /// [`None`] if it falls off the board.
    #[must_use]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = u8::try_from(self.file() as i8 + file_delta).ok()?;
        let rank = u8::try_from(self.rank() as i8 + rank_delta).ok()?;
        Some(Self::new(
            File::try_from(file).ok()?,
            Rank::try_from(rank).ok()?,
        ))
    }

    /// Neighbouring square in the given direction, if any.
    #[must_use]
    pub fn shift(self, direction: Direction) -> Option<Self> {
        let (file_delta, rank_delta) = direction.delta();
        self.offset(file_delta, rank_delta)
    }

    /// Absolute file and rank distances between two squares.
    #[must_use]
    pub const fn distance(self, other: Self) -> (u8, u8) {
        (
            (self.file() as u8).abs_diff(other.file() as u8),
            (self.rank() as u8).abs_diff(other.rank() as u8),
        )
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    /// Creates a square given its position on the board.
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> anyhow::Result<Self> {
        match Self::from_repr(square_index) {
            Some(square) => Ok(square),
            None => bail!("square index should be in 0..BOARD_SIZE, got {square_index}"),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let (file, rank) = match square.chars().collect_tuple() {
            Some((file, rank)) => (file, rank),
            None => bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            ),
        };
        Ok(Self::new(file.try_into()?, rank.try_into()?))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, strum::EnumIter, strum::FromRepr)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(char::from(b'a' + *self as u8))
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Self::try_from(file as u8 - b'a'),
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = anyhow::Error;

    fn try_from(column: u8) -> anyhow::Result<Self> {
        match Self::from_repr(column) {
            Some(file) => Ok(file),
            None => bail!("file should be within 0..BOARD_WIDTH, got {column}"),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, strum::EnumIter, strum::FromRepr)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    /// The rank player's pieces other than pawns start on.
    #[must_use]
    pub const fn backrank(player: Player) -> Self {
        match player {
            Player::White => Self::One,
            Player::Black => Self::Eight,
        }
    }

    /// The rank player's pawns start on. Pawns standing here may advance two
    /// squares at once.
    #[must_use]
    pub const fn pawns_starting(player: Player) -> Self {
        match player {
            Player::White => Self::Two,
            Player::Black => Self::Seven,
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Self::try_from(rank as u8 - b'1'),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;

    fn try_from(row: u8) -> anyhow::Result<Self> {
        match Self::from_repr(row) {
            Some(rank) => Ok(rank),
            None => bail!("rank should be within 0..BOARD_WIDTH, got {row}"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// The game is played between two players: White (having the advantage of the
/// first turn) and Black. Iteration order is White first: when both players
/// lose a piece kind on the same move, White's elimination is found first.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Pawns of White advance towards the eighth rank, pawns of Black towards
    /// the first one.
    #[must_use]
    pub const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }

    pub(super) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match &self {
            Self::White => "white",
            Self::Black => "black",
        })
    }
}

/// Standard [chess pieces]. Every player starts with a fixed number of each
/// kind and loses the game as soon as any kind runs out.
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter, strum::EnumCount,
)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Number of pieces of this kind each player has in the starting position.
    #[must_use]
    pub const fn starting_count(self) -> u8 {
        match self {
            Self::Pawn => 8,
            Self::Rook | Self::Knight | Self::Bishop => 2,
            Self::Queen | Self::King => 1,
        }
    }

    /// Rooks, bishops and queens move any number of squares along their rays.
    #[must_use]
    pub const fn is_sliding(self) -> bool {
        matches!(self, Self::Rook | Self::Bishop | Self::Queen)
    }

    pub(super) const fn index(self) -> usize {
        self as usize
    }

    const fn symbol(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Rook => 'r',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match &self {
            Self::Pawn => "pawn",
            Self::Rook => "rook",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
        })
    }
}

/// Represents a specific piece owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    /// Parses the algebraic symbol: uppercase for White, lowercase for Black.
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let kind = match symbol.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => bail!("piece symbol should be within \"PRNBQKprnbqk\", got '{symbol}'"),
        };
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Ok(Self { owner, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.symbol();
        f.write_char(match self.owner {
            // White player: uppercase symbols.
            Player::White => symbol.to_ascii_uppercase(),
            // Black player: lowercase symbols.
            Player::Black => symbol,
        })
    }
}

/// Directions on the board from a perspective of White player.
///
/// Traditionally those are North (Up), West (Left), East (Right), South (Down)
/// and their combinations. However, using cardinal directions is confusing,
/// hence they are replaced by relative directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::EnumIter)]
pub enum Direction {
    /// Also known as NorthWest.
    UpLeft,
    /// Also known as North.
    Up,
    /// Also known as NorthEast.
    UpRight,
    /// Also known as East.
    Right,
    /// Also known as West.
    Left,
    /// Also known as SouthWest.
    DownLeft,
    /// Also known as South.
    Down,
    /// Also known as SouthEast.
    DownRight,
}

impl Direction {
    /// Rook rays.
    pub const ORTHOGONAL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];
    /// Bishop rays.
    pub const DIAGONAL: [Self; 4] = [Self::UpLeft, Self::UpRight, Self::DownRight, Self::DownLeft];

    /// (file, rank) step of a single move in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (-1, 1),
            Self::Up => (0, 1),
            Self::UpRight => (1, 1),
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::DownLeft => (-1, -1),
            Self::Down => (0, -1),
            Self::DownRight => (1, -1),
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::UpLeft => Self::DownRight,
            Self::Up => Self::Down,
            Self::UpRight => Self::DownLeft,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::DownLeft => Self::UpRight,
            Self::Down => Self::Up,
            Self::DownRight => Self::UpLeft,
        }
    }
}

#[cfg(test)]
mod test {
    use std::mem::size_of;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn rank() {
        assert_eq!(
            ('0'..='9')
                .filter_map(|ch| Rank::try_from(ch).ok())
                .collect::<Vec<Rank>>(),
            Rank::iter().collect::<Vec<Rank>>()
        );
        assert_eq!(
            (0..=BOARD_WIDTH)
                .filter_map(|idx| Rank::try_from(idx).ok())
                .collect::<Vec<Rank>>(),
            vec![
                Rank::One,
                Rank::Two,
                Rank::Three,
                Rank::Four,
                Rank::Five,
                Rank::Six,
                Rank::Seven,
                Rank::Eight,
            ]
        );
    }

    #[test]
    #[should_panic(expected = "rank should be within '1'..='8', got '9'")]
    fn rank_from_incorrect_char() {
        let _ = Rank::try_from('9').unwrap();
    }

    #[test]
    #[should_panic(expected = "rank should be within '1'..='8', got '0'")]
    fn rank_from_incorrect_char_zero() {
        let _ = Rank::try_from('0').unwrap();
    }

    #[test]
    #[should_panic(expected = "rank should be within 0..BOARD_WIDTH, got 8")]
    fn rank_from_incorrect_index() {
        let _ = Rank::try_from(BOARD_WIDTH).unwrap();
    }

    #[test]
    fn file() {
        assert_eq!(
            ('a'..='i')
                .filter_map(|ch| File::try_from(ch).ok())
                .collect::<Vec<File>>(),
            vec![
                File::A,
                File::B,
                File::C,
                File::D,
                File::E,
                File::F,
                File::G,
                File::H,
            ]
        );
        assert_eq!(
            (0..=BOARD_WIDTH)
                .filter_map(|idx| File::try_from(idx).ok())
                .collect::<Vec<File>>(),
            File::iter().collect::<Vec<File>>()
        );
    }

    #[test]
    #[should_panic(expected = "file should be within 'a'..='h', got 'i'")]
    fn file_from_incorrect_char() {
        let _ = File::try_from('i').unwrap();
    }

    #[test]
    #[should_panic(expected = "file should be within 0..BOARD_WIDTH, got 8")]
    fn file_from_incorrect_index() {
        let _ = File::try_from(BOARD_WIDTH).unwrap();
    }

    #[test]
    fn square() {
        let squares: Vec<_> = [
            0u8,
            BOARD_SIZE - 1,
            BOARD_WIDTH - 1,
            BOARD_WIDTH,
            BOARD_WIDTH * 2 + 5,
            BOARD_SIZE,
        ]
        .iter()
        .filter_map(|square| Square::try_from(*square).ok())
        .collect();
        assert_eq!(
            squares,
            vec![Square::A1, Square::H8, Square::H1, Square::A2, Square::F3]
        );
        let squares: Vec<_> = [
            (File::B, Rank::Three),
            (File::F, Rank::Five),
            (File::H, Rank::Eight),
            (File::E, Rank::Four),
        ]
        .iter()
        .map(|(file, rank)| Square::new(*file, *rank))
        .collect();
        assert_eq!(
            squares,
            vec![Square::B3, Square::F5, Square::H8, Square::E4]
        );
    }

    #[test]
    #[should_panic(expected = "square index should be in 0..BOARD_SIZE, got 64")]
    fn square_from_incorrect_index() {
        let _ = Square::try_from(BOARD_SIZE).unwrap();
    }

    #[test]
    fn square_text_round_trip() {
        for square in Square::iter() {
            let text = square.to_string();
            assert_eq!(Square::try_from(text.as_str()).unwrap(), square);
        }
        assert_eq!(Square::try_from("e4").unwrap().to_string(), "e4");
        assert!(Square::try_from("e").is_err());
        assert!(Square::try_from("e44").is_err());
        assert!(Square::try_from("z4").is_err());
    }

    #[test]
    fn grid_coordinates() {
        assert_eq!((Square::A8.row(), Square::A8.column()), (0, 0));
        assert_eq!((Square::H1.row(), Square::H1.column()), (7, 7));
        assert_eq!((Square::E2.row(), Square::E2.column()), (6, 4));
        for square in Square::iter() {
            assert_eq!(
                Square::from_grid(square.row(), square.column()).unwrap(),
                square
            );
        }
        assert!(Square::from_grid(0, 8).is_err());
    }

    #[test]
    fn primitive_size() {
        assert_eq!(size_of::<Square>(), 1);
        assert_eq!(size_of::<PieceKind>(), size_of::<Option<PieceKind>>());
        assert_eq!(size_of::<Option<Piece>>(), 2);
    }

    #[test]
    fn piece_symbols() {
        for symbol in "PRNBQKprnbqk".chars() {
            let piece = Piece::try_from(symbol).unwrap();
            assert_eq!(piece.to_string(), symbol.to_string());
        }
        assert_eq!(
            Piece::try_from('N').unwrap(),
            Piece::new(Player::White, PieceKind::Knight)
        );
        assert_eq!(
            Piece::try_from('q').unwrap(),
            Piece::new(Player::Black, PieceKind::Queen)
        );
        assert!(Piece::try_from('x').is_err());
        assert!(Piece::try_from(' ').is_err());
    }

    #[test]
    fn starting_counts() {
        let total: u8 = PieceKind::iter().map(PieceKind::starting_count).sum();
        assert_eq!(total, 16);
    }

    #[test]
    fn parse_moves() {
        assert_eq!(
            Move::from_uci("e2e4").unwrap(),
            Move::new(Square::E2, Square::E4)
        );
        assert_eq!(
            Move::from_uci("a8h1").unwrap(),
            Move::new(Square::A8, Square::H1)
        );
        assert_eq!(Move::from_uci("g1f3").unwrap().to_string(), "g1f3");
        assert!(Move::from_uci("").is_err());
        assert!(Move::from_uci("e2e4e5").is_err());
        assert!(Move::from_uci("22e4").is_err());
        assert!(Move::from_uci("e2ee").is_err());
        assert!(Move::from_uci("i2e4").is_err());
        assert!(Move::from_uci("e0e4").is_err());
        // Multi-byte characters must not trip up the parser.
        assert!(Move::from_uci("eé4").is_err());
        assert!(Move::from_uci("é2e4").is_err());
    }

    #[test]
    #[should_panic(expected = "move should be four chars, got 'e2e' with 3 chars")]
    fn short_move() {
        let _ = Move::from_uci("e2e").unwrap();
    }

    #[test]
    fn within_board_shift() {
        let square = Square::E4;
        assert_eq!(square.shift(Direction::Left), Some(Square::D4));
        assert_eq!(square.shift(Direction::Up), Some(Square::E5));
        assert_eq!(square.shift(Direction::UpRight), Some(Square::F5));
        assert_eq!(square.shift(Direction::UpLeft), Some(Square::D5));
        assert_eq!(square.shift(Direction::Right), Some(Square::F4));
        assert_eq!(square.shift(Direction::Down), Some(Square::E3));
        assert_eq!(square.shift(Direction::DownRight), Some(Square::F3));
        assert_eq!(square.shift(Direction::DownLeft), Some(Square::D3));
    }

    #[test]
    fn opposite_directions_cancel_out() {
        for direction in Direction::iter() {
            assert_eq!(
                Square::E4
                    .shift(direction)
                    .and_then(|square| square.shift(direction.opposite())),
                Some(Square::E4)
            );
        }
    }

    #[test]
    fn corner_squares_shift() {
        let square = Square::A1;
        assert_eq!(square.shift(Direction::Up), Some(Square::A2));
        assert_eq!(square.shift(Direction::UpRight), Some(Square::B2));
        assert_eq!(square.shift(Direction::Right), Some(Square::B1));
        for direction in [
            Direction::Left,
            Direction::UpLeft,
            Direction::Down,
            Direction::DownRight,
            Direction::DownLeft,
        ] {
            assert_eq!(square.shift(direction), None);
        }

        let square = Square::H8;
        assert_eq!(square.shift(Direction::Left), Some(Square::G8));
        assert_eq!(square.shift(Direction::Down), Some(Square::H7));
        assert_eq!(square.shift(Direction::DownLeft), Some(Square::G7));
        for direction in [
            Direction::Up,
            Direction::UpRight,
            Direction::UpLeft,
            Direction::DownRight,
            Direction::Right,
        ] {
            assert_eq!(square.shift(direction), None);
        }
    }

    #[test]
    fn distance() {
        assert_eq!(Square::B1.distance(Square::C3), (1, 2));
        assert_eq!(Square::C3.distance(Square::B1), (1, 2));
        assert_eq!(Square::A1.distance(Square::H8), (7, 7));
        assert_eq!(Square::E4.distance(Square::E4), (0, 0));
    }
}
