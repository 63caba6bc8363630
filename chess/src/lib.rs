//! Board geometry, bitboards and legal move generation for the caffeine engine.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]

use std::ops;
use std::fmt;
use std::mem;
use std::str::FromStr;
use std::convert::TryFrom;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Which side a piece or player is on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// The number of sides
    pub const COUNT: usize = 2;

    /// Returns the direction this side's pawns advance in
    ///
    /// # Example
    /// ```
    /// use chess::{Side, Direction};
    /// assert_eq!(Side::White.forward(), Direction::North);
    /// assert_eq!(Side::Black.forward(), Direction::South);
    /// ```
    pub fn forward(self) -> Direction {
        match self {
            Side::White => Direction::North,
            Side::Black => Direction::South,
        }
    }
}

impl ops::Not for Side {
    type Output = Side;

    /// Returns the opposing side
    fn not(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => "w",
            Side::Black => "b",
        }.fmt(f)
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "w" => Ok(Side::White),
            "b" => Ok(Side::Black),
            _   => Err(Error::ParseSide(s.to_owned())),
        }
    }
}

impl Default for Side {
    fn default() -> Self {
        Side::White
    }
}

impl TryFrom<usize> for Side {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Side>(value as u8)) }
        } else {
            Err(Error::TryFromIntError)
        }
    }
}

impl From<Side> for usize {
    fn from(value: Side) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The type of a chess piece
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// The number of piece types
    pub const COUNT: usize = Piece::King as usize + 1;

    /// Every piece type, from pawn to king
    pub const ALL: [Piece; Piece::COUNT] = [
        Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King,
    ];

    /// Returns the letter for the piece in the case used for `side`
    pub fn to_char(self, side: Side) -> char {
        let c = match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        };

        match side {
            Side::White => c,
            Side::Black => c.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_char(Side::White).fmt(f)
    }
}

impl FromStr for Piece {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "P"|"p" => Ok(Piece::Pawn),
            "N"|"n" => Ok(Piece::Knight),
            "B"|"b" => Ok(Piece::Bishop),
            "R"|"r" => Ok(Piece::Rook),
            "Q"|"q" => Ok(Piece::Queen),
            "K"|"k" => Ok(Piece::King),
            _       => Err(Error::ParsePiece(s.to_owned())),
        }
    }
}

impl TryFrom<usize> for Piece {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Piece>(value as u8)) }
        } else {
            Err(Error::TryFromIntError)
        }
    }
}

impl From<Piece> for usize {
    fn from(value: Piece) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Vertical column of the board, labeled `A` through `H` from white's left to right.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum File {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    A = 0, B = 1, C = 2, D = 3, E = 4, F = 5, G = 6, H = 7,
}

impl File {
    /// The number of files
    pub const COUNT: usize = File::H as usize + 1;
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ((b'a' + *self as u8) as char).fmt(f)
    }
}

impl FromStr for File {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.as_bytes() {
            [c @ b'a' ..= b'h'] => File::try_from((c - b'a') as usize),
            _ => Err(Error::ParseSquare(s.to_owned())),
        }
    }
}

impl TryFrom<usize> for File {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, File>(value as u8)) }
        } else {
            Err(Error::TryFromIntError)
        }
    }
}

impl From<File> for usize {
    fn from(value: File) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Horizontal row of the board, numbered `R1` through `R8` starting from white's side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Rank {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    R1 = 0, R2 = 1, R3 = 2, R4 = 3, R5 = 4, R6 = 5, R7 = 6, R8 = 7,
}

impl Rank {
    /// The number of ranks
    pub const COUNT: usize = Rank::R8 as usize + 1;
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ((b'1' + *self as u8) as char).fmt(f)
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.as_bytes() {
            [c @ b'1' ..= b'8'] => Rank::try_from((c - b'1') as usize),
            _ => Err(Error::ParseSquare(s.to_owned())),
        }
    }
}

impl TryFrom<usize> for Rank {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Rank>(value as u8)) }
        } else {
            Err(Error::TryFromIntError)
        }
    }
}

impl From<Rank> for usize {
    fn from(value: Rank) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A specific square on the board, indexed as `file + 8 * rank`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Square {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    A1 =  0, B1 =  1, C1 =  2, D1 =  3, E1 =  4, F1 =  5, G1 =  6, H1 =  7,
    A2 =  8, B2 =  9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

impl Square {
    /// The number of squares
    pub const COUNT: usize = Square::H8 as usize + 1;

    /// Returns a square from its file and rank
    pub fn from_coord(file: File, rank: Rank) -> Square {
        Square::try_from(file as usize + ((rank as usize) << 3)).expect("INFALLIBLE")
    }

    /// Returns the square's file
    pub fn file(self) -> File {
        File::try_from((self as usize) & 7).expect("INFALLIBLE")
    }

    /// Returns the square's rank
    pub fn rank(self) -> Rank {
        Rank::try_from((self as usize) >> 3).expect("INFALLIBLE")
    }

    /// Returns the square `delta` index steps away, or `None` if that falls off the board.
    ///
    /// Only the index is checked, so a step east from the h-file lands on the a-file of the
    /// next rank.
    pub fn offset(self, delta: i8) -> Option<Square> {
        let index = self as i8 + delta;

        if index >= 0 {
            Square::try_from(index as usize).ok()
        } else {
            None
        }
    }

    /// Returns the number of files between two squares
    pub fn file_distance(self, other: Square) -> u8 {
        (self.file() as i8 - other.file() as i8).abs() as u8
    }

    /// Returns the number of ranks between two squares
    pub fn rank_distance(self, other: Square) -> u8 {
        (self.rank() as i8 - other.rank() as i8).abs() as u8
    }

    /// Returns an iterator over all squares from a1 to h8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::COUNT).map(|i| Square::try_from(i).expect("INFALLIBLE"))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.file().to_string() + &self.rank().to_string()).fmt(f)
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() == 2 && s.is_char_boundary(1) {
            let file = s[..1].parse().map_err(|_| Error::ParseSquare(s.to_owned()))?;
            let rank = s[1..].parse().map_err(|_| Error::ParseSquare(s.to_owned()))?;
            Ok(Square::from_coord(file, rank))
        } else {
            Err(Error::ParseSquare(s.to_owned()))
        }
    }
}

impl TryFrom<usize> for Square {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Square>(value as u8)) }
        } else {
            Err(Error::TryFromIntError)
        }
    }
}

impl From<Square> for usize {
    fn from(value: Square) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// One of the eight compass directions, valued as the change in square index for one step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i8)]
#[allow(missing_docs)]
pub enum Direction {
    North = 8,
    South = -8,
    East = 1,
    West = -1,
    NorthEast = 9,
    NorthWest = 7,
    SouthEast = -7,
    SouthWest = -9,
}

impl Direction {
    /// All eight directions
    pub const ALL: [Direction; 8] = [
        Direction::North, Direction::South, Direction::East, Direction::West,
        Direction::NorthEast, Direction::NorthWest, Direction::SouthEast, Direction::SouthWest,
    ];

    /// The directions a bishop moves in
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast, Direction::NorthWest, Direction::SouthEast, Direction::SouthWest,
    ];

    /// The directions a rook moves in
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North, Direction::South, Direction::East, Direction::West,
    ];

    /// Returns the change in square index for one step in this direction
    pub fn offset(self) -> i8 {
        self as i8
    }

    /// Returns the direction pointing the other way
    pub fn opposite(self) -> Direction {
        use Direction::*;

        match self {
            North => South,
            South => North,
            East => West,
            West => East,
            NorthEast => SouthWest,
            NorthWest => SouthEast,
            SouthEast => NorthWest,
            SouthWest => NorthEast,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The set of castling rights still available to both players.
///
/// Stored as four bits: white king-side (8), white queen-side (4), black king-side (2) and black
/// queen-side (1). The text form is always the canonical subsequence of `KQkq`, or `-` when no
/// rights remain.
///
/// ```
/// use chess::CastlingRights;
///
/// let rights: CastlingRights = "Kq".parse()?;
/// assert_eq!(rights.to_string(), "Kq");
/// assert!("qK".parse::<CastlingRights>().is_err());
/// # Ok::<(), chess::Error>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    pub const NONE: CastlingRights = CastlingRights(0);
    /// Black may castle queen-side
    pub const BLACK_QUEEN_SIDE: CastlingRights = CastlingRights(1);
    /// Black may castle king-side
    pub const BLACK_KING_SIDE: CastlingRights = CastlingRights(2);
    /// White may castle queen-side
    pub const WHITE_QUEEN_SIDE: CastlingRights = CastlingRights(4);
    /// White may castle king-side
    pub const WHITE_KING_SIDE: CastlingRights = CastlingRights(8);
    /// Every castling right
    pub const ALL: CastlingRights = CastlingRights(15);

    /// Returns the king-side right for `side`
    pub fn king_side(side: Side) -> CastlingRights {
        match side {
            Side::White => CastlingRights::WHITE_KING_SIDE,
            Side::Black => CastlingRights::BLACK_KING_SIDE,
        }
    }

    /// Returns the queen-side right for `side`
    pub fn queen_side(side: Side) -> CastlingRights {
        match side {
            Side::White => CastlingRights::WHITE_QUEEN_SIDE,
            Side::Black => CastlingRights::BLACK_QUEEN_SIDE,
        }
    }

    /// Returns both rights for `side`
    pub fn both(side: Side) -> CastlingRights {
        CastlingRights::king_side(side) | CastlingRights::queen_side(side)
    }

    /// Returns `true` if every right in `other` is also in `self`
    pub fn contains(self, other: CastlingRights) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if any right in `other` is also in `self`
    pub fn intersects(self, other: CastlingRights) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if no rights remain
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the rights as an integer from 0 to 15
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl ops::BitAnd for CastlingRights {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        CastlingRights(self.0 & rhs.0)
    }
}

impl ops::BitOr for CastlingRights {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        CastlingRights(self.0 | rhs.0)
    }
}

impl ops::Not for CastlingRights {
    type Output = Self;

    fn not(self) -> Self::Output {
        CastlingRights(!self.0 & CastlingRights::ALL.0)
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return "-".fmt(f);
        }

        let mut s = String::with_capacity(4);
        for (right, c) in &[
            (CastlingRights::WHITE_KING_SIDE, 'K'),
            (CastlingRights::WHITE_QUEEN_SIDE, 'Q'),
            (CastlingRights::BLACK_KING_SIDE, 'k'),
            (CastlingRights::BLACK_QUEEN_SIDE, 'q'),
        ] {
            if self.contains(*right) {
                s.push(*c);
            }
        }

        s.fmt(f)
    }
}

impl FromStr for CastlingRights {
    type Err = Error;

    /// Only the canonical spelling of each set of rights is accepted.
    fn from_str(s: &str) -> Result<Self> {
        (0..=CastlingRights::ALL.0)
            .map(CastlingRights)
            .find(|rights| rights.to_string() == s)
            .ok_or_else(|| Error::ParseCastling(s.to_owned()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
pub mod bitboard;
pub mod error;
mod moves;
mod position;
pub mod variations;

pub use error::{Error, FenField, Result};
pub use moves::{Move, MoveList, MAX_MOVES};
pub use position::{Position, MAX_FRAMES};
pub use position::move_iter::MoveOrder;
