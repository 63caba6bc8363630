//! Provides a representation of sets of squares
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! # Moves and Attacks
//! Bitboards are useful for quickly computing the moves or attacks available to a piece based on
//! its location on the board. Along with the [`Bitboard`](struct.Bitboard.html) type, this module
//! provides lookup functions for the attacks of every piece and the [`ray`](fn.ray.html) and
//! [`between`](fn.between.html) tables used to find pins.
//!
//! ## Direct attacks (Pawns, Knights and Kings)
//! These pieces move directly to their destinations without passing through any other squares,
//! so their attacks depend only on the origin square (and side, for pawns):
//!
//! ```rust
//! use chess::Square;
//! use chess::bitboard::knight_attacks;
//!
//! let mut attacks = knight_attacks(Square::H1);
//! assert_eq!(attacks.pop(), Some(Square::F2));
//! assert_eq!(attacks.pop(), Some(Square::G3));
//! assert_eq!(attacks.pop(), None);
//! ```
//!
//! ## Sliding Attacks (Bishops, Rooks and Queens)
//! Moves by sliding pieces can be blocked by pieces in the path. For this reason, the functions for
//! sliding attacks require an additional argument: a `Bitboard` of occupied squares.
//!
//! ```rust
//! use chess::Square;
//! use chess::bitboard::{Bitboard, orthogonal_attacks};
//!
//! let occ = Bitboard::from(Square::A2) | Square::C1.into();
//! let mut attacks = orthogonal_attacks(Square::A1, occ);
//! assert_eq!(attacks.pop(), Some(Square::B1));
//! assert_eq!(attacks.pop(), Some(Square::C1));
//! assert_eq!(attacks.pop(), Some(Square::A2));
//! assert_eq!(attacks.pop(), None);
//! ```
//!
//! ## Shifting
//! The attacks of many pawns at once can be computed with
//! [`Bitboard::shift`](struct.Bitboard.html#method.shift). Squares shifted off the edge of the
//! board disappear rather than wrapping around to the other side.
//!
//! ```rust
//! use chess::{Square, Direction};
//! use chess::bitboard::Bitboard;
//!
//! let pawns = Bitboard::from(Square::A2) | Square::H2.into();
//! let mut attacks = pawns.shift(Direction::NorthEast);
//! assert_eq!(attacks.pop(), Some(Square::B3));
//! assert_eq!(attacks.pop(), None);
//! ```
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::{TryFrom, TryInto};
use std::iter::FusedIterator;
use std::iter::{FromIterator, Extend};
use std::ops;
use std::fmt;
use lazy_static::lazy_static;
use super::*;

mod attacks;
pub use attacks::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A set of squares with each bit representing one square
///
/// A `Bitboard` is, essentially, a set of [`Square`](../enum.Square.html)s stored in a 64-bit
/// integer. Each bit corresponds to one `Square`. If the bit is set, that `Square` is present. If
/// it is clear, the `Square` is not present. The diagram below shows the layout of the bits.
///
/// ```text
///      a    b    c    d    e    f    g    h
///    ---------------------------------------
/// 8 | 56 | 57 | 58 | 59 | 60 | 61 | 62 | 63 | 8
///    ---------------------------------------
/// 7 | 48 | 49 | 50 | 51 | 52 | 53 | 54 | 55 | 7
///    ---------------------------------------
///   |              . . .                    |
///    ---------------------------------------
/// 2 | 08 | 09 | 10 | 11 | 12 | 13 | 14 | 15 | 2
///    ---------------------------------------
/// 1 | 00 | 01 | 02 | 03 | 04 | 05 | 06 | 07 | 1
///    ---------------------------------------
///      a    b    c    d    e    f    g    h
/// ```
///
/// `Bitboard` implements all the bit-wise logic operators: `|`, `&`, `^`, `!`, `|=`, `&=`, and
/// `^=`. It also has methods that are typical for sets and collections, such as `insert`, `remove`,
/// `len`, and `contains`. It implements IntoIterator. Since it's only a 64-bit value, it
/// implements `Copy`, and there's no need for the borrowing iterator methods `iter` and
/// `iter_mut`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(u64);

const NOT_A_FILE: u64 = !0x0101_0101_0101_0101;
const NOT_H_FILE: u64 = !0x8080_8080_8080_8080;

impl Bitboard {
    /// Creates a new, empty bitboard
    pub fn new() -> Bitboard {
        Default::default()
    }

    /// Returns the bitboard as a 64-bit integer
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Returns the number of squares in the bitboard
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the bitboard is empty
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the bitboard contains `sq`
    pub fn contains(self, sq: Square) -> bool {
        !(self & sq.into()).is_empty()
    }

    /// Returns `true` if `self` intersects `other`
    pub fn intersects(self, other: Bitboard) -> bool {
        !(self & other).is_empty()
    }

    /// Returns `true` if `self` does not intersect `other`
    pub fn is_disjoint(self, other: Bitboard) -> bool {
        (self & other).is_empty()
    }

    /// Returns `true` if the bitboard holds more than one square
    pub fn has_many(self) -> bool {
        self.0 & self.0.wrapping_sub(1) != 0
    }

    /// Adds a square to the bitboard if it is not already present
    pub fn insert(&mut self, sq: Square) {
        *self |= sq.into();
    }

    /// Removes a square from the bitboard if it is present
    pub fn remove(&mut self, sq: Square) {
        *self &= !Bitboard::from(sq);
    }

    /// Toggles a square in the bitboard
    pub fn toggle(&mut self, sq: Square) {
        *self ^= sq.into();
    }

    /// Removes the lowest square from the bitboard and returns it
    pub fn pop(&mut self) -> Option<Square> {
        let sq = self.peek();
        // clear the least significant bit
        self.0 &= self.0.wrapping_sub(1);
        sq
    }

    /// Returns the square that would be removed by a pop command
    pub fn peek(self) -> Option<Square> {
        if self.0 != 0 {
            Some((self.0.trailing_zeros() as usize).try_into().expect("INFALLIBLE"))
        } else {
            None
        }
    }

    /// Returns a bitboard with every square moved one step in direction `dir`
    ///
    /// Squares that would leave the board, including across the a and h files, are dropped.
    ///
    /// ```rust
    /// # use chess::{Square, Direction};
    /// # use chess::bitboard::Bitboard;
    /// #
    /// assert_eq!(Bitboard::from(Square::H4).shift(Direction::East), Bitboard::new());
    /// assert_eq!(Bitboard::from(Square::A4).shift(Direction::NorthWest), Bitboard::new());
    /// assert_eq!(Bitboard::from(Square::E8).shift(Direction::North), Bitboard::new());
    /// let e4 = Bitboard::from(Square::E4);
    /// assert_eq!(e4.shift(Direction::SouthEast), Bitboard::from(Square::F3));
    /// ```
    pub fn shift(self, dir: Direction) -> Bitboard {
        let offset = dir.offset();
        let bits = if offset > 0 { self.0 << offset } else { self.0 >> -offset };

        match dir {
            Direction::East | Direction::NorthEast | Direction::SouthEast => {
                Bitboard(bits & NOT_A_FILE)
            },
            Direction::West | Direction::NorthWest | Direction::SouthWest => {
                Bitboard(bits & NOT_H_FILE)
            },
            _ => Bitboard(bits),
        }
    }

    /// Returns the bitboard extended up to seven steps in direction `dir`, ignoring blockers
    fn fill(self, dir: Direction) -> Bitboard {
        let mut bd = self;
        for _ in 0..7 {
            bd |= bd.shift(dir);
        }
        bd
    }
}

impl ops::Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl ops::BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0
    }
}

impl ops::BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl ops::BitXor for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl ops::BitXorAssign for Bitboard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0
    }
}

impl fmt::Display for Bitboard {
    /// Draws the board from white's side with `x` for each member square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in (0..Rank::COUNT).rev() {
            for c in 0..File::COUNT {
                let sq = Square::try_from(c + r * File::COUNT).expect("INFALLIBLE");
                write!(f, "{}", if self.contains(sq) { 'x' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl From<u64> for Bitboard {
    fn from(val: u64) -> Bitboard {
        Bitboard(val)
    }
}

impl From<Square> for Bitboard {
    fn from(sq: Square) -> Bitboard {
        Bitboard(1 << sq as u64)
    }
}

impl From<Option<Square>> for Bitboard {
    fn from(sq: Option<Square>) -> Bitboard {
        sq.map(Bitboard::from).unwrap_or_default()
    }
}

impl From<File> for Bitboard {
    fn from(f: File) -> Bitboard {
        Bitboard(0x0101_0101_0101_0101 << f as u64)
    }
}

impl From<Rank> for Bitboard {
    fn from(r: Rank) -> Bitboard {
        Bitboard(0x0000_0000_0000_00ff << (8 * r as u64))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item=Square>>(iter: I) -> Self {
        let mut bd = Bitboard::new();
        bd.extend(iter);
        bd
    }
}

impl Extend<Square> for Bitboard {
    fn extend<I: IntoIterator<Item=Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

/// Iterator over the squares of a `Bitboard`, from a1 to h8
#[derive(Debug, Copy, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl ExactSizeIterator for IntoIter { }

impl FusedIterator for IntoIter { }

////////////////////////////////////////////////////////////////////////////////////////////////////
struct Lines {
    ray: [[Bitboard; Square::COUNT]; Square::COUNT],
    between: [[Bitboard; Square::COUNT]; Square::COUNT],
}

impl Lines {
    fn new() -> Box<Lines> {
        let mut lines = Box::new(Lines {
            ray: [[Bitboard::new(); Square::COUNT]; Square::COUNT],
            between: [[Bitboard::new(); Square::COUNT]; Square::COUNT],
        });

        for src in Square::all() {
            for dir in Direction::ALL.iter().copied() {
                let ray = Bitboard::from(src).fill(dir).shift(dir);

                for tgt in ray {
                    let behind = Bitboard::from(tgt).fill(dir.opposite()).shift(dir.opposite());
                    lines.ray[src as usize][tgt as usize] = ray;
                    lines.between[src as usize][tgt as usize] = ray & behind;
                }
            }
        }

        lines
    }
}

lazy_static! {
    static ref LINES: Box<Lines> = Lines::new();
}

/// Returns every square beyond `src` in the direction of `tgt`, up to the edge of the board.
///
/// Empty if the squares don't share a rank, file or diagonal.
///
/// ```rust
/// use chess::Square;
/// use chess::bitboard::{Bitboard, ray};
///
/// let expected: Bitboard = vec![Square::F2, Square::G3, Square::H4].into_iter().collect();
/// assert_eq!(ray(Square::E1, Square::G3), expected);
/// assert!(ray(Square::E1, Square::F3).is_empty());
/// ```
pub fn ray(src: Square, tgt: Square) -> Bitboard {
    LINES.ray[src as usize][tgt as usize]
}

/// Returns the squares strictly between `src` and `tgt` on their shared line.
///
/// Empty if the squares are adjacent or don't share a rank, file or diagonal.
pub fn between(src: Square, tgt: Square) -> Bitboard {
    LINES.between[src as usize][tgt as usize]
}
