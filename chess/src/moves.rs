//! Contains the packed `Move` type and the fixed-capacity `MoveList`
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use std::ops::Deref;
use lazy_static::lazy_static;
use regex::Regex;
use super::*;

const SQUARE_MASK: u16 = 0x3f;
const TARGET_SHIFT: u16 = 6;
const PROMOTION_SHIFT: u16 = 12;
const NO_PROMOTION: u16 = 7;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A move, packed into 16 bits: the source square, the target square and an optional promotion
/// piece.
///
/// A `Move` knows nothing about the position it is played in. Whether it is legal is a question
/// for [`Position::is_legal`](struct.Position.html#method.is_legal), and the moving piece, any
/// capture, castling and en-passant are all worked out by the position when the move is made.
///
/// ```rust
/// use chess::{Move, Piece, Square};
///
/// let mv: Move = "e7e8q".parse()?;
/// assert_eq!(mv.source(), Square::E7);
/// assert_eq!(mv.target(), Square::E8);
/// assert_eq!(mv.promotion(), Some(Piece::Queen));
/// assert_eq!(mv, Move::with_promotion(Square::E7, Square::E8, Piece::Queen));
/// # Ok::<(), chess::Error>(())
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a move from `src` to `tgt` with no promotion
    pub fn new(src: Square, tgt: Square) -> Move {
        Move(src as u16 | (tgt as u16) << TARGET_SHIFT | NO_PROMOTION << PROMOTION_SHIFT)
    }

    /// Creates a pawn move from `src` to `tgt` which promotes to `piece`
    pub fn with_promotion(src: Square, tgt: Square, piece: Piece) -> Move {
        Move(src as u16 | (tgt as u16) << TARGET_SHIFT | (piece as u16) << PROMOTION_SHIFT)
    }

    /// Returns the square the piece moves from
    pub fn source(self) -> Square {
        Square::try_from((self.0 & SQUARE_MASK) as usize).expect("INFALLIBLE")
    }

    /// Returns the square the piece moves to
    pub fn target(self) -> Square {
        Square::try_from((self.0 >> TARGET_SHIFT & SQUARE_MASK) as usize).expect("INFALLIBLE")
    }

    /// Returns the piece a pawn promotes to, if any
    pub fn promotion(self) -> Option<Piece> {
        Piece::try_from((self.0 >> PROMOTION_SHIFT) as usize).ok()
    }

    /// Returns the move as its packed integer value
    pub fn bits(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = format!("{}{}", self.source(), self.target());
        if let Some(piece) = self.promotion() {
            s.push(piece.to_char(Side::Black));
        }
        s.fmt(f)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

lazy_static! {
    static ref MOVE_REGEX: Regex = Regex::new("^([a-h][1-8])([a-h][1-8])([nbrq]?)$")
        .expect("INFALLIBLE");
}

impl FromStr for Move {
    type Err = Error;

    /// Parses coordinate notation such as `g1f3` or `b2b1n`.
    fn from_str(s: &str) -> Result<Self> {
        let caps = MOVE_REGEX.captures(s).ok_or_else(|| Error::ParseMove(s.to_owned()))?;

        let src = caps[1].parse()?;
        let tgt = caps[2].parse()?;

        match &caps[3] {
            "" => Ok(Move::new(src, tgt)),
            promotion => Ok(Move::with_promotion(src, tgt, promotion.parse()?)),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The most moves a `MoveList` can hold.
///
/// No legal chess position has more than 218 legal moves, and the pseudo-legal lists built by the
/// generator stay well below this bound.
pub const MAX_MOVES: usize = 256;

/// A fixed-capacity list of moves that never allocates.
///
/// `MoveList` dereferences to a slice, so the usual slice methods (`iter`, `contains`, indexing and
/// so on) are all available.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Creates an empty list
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move(NO_PROMOTION << PROMOTION_SHIFT); MAX_MOVES],
            len: 0,
        }
    }

    /// Appends a move to the end of the list
    ///
    /// # Panics
    /// Panics if the list already holds `MAX_MOVES` moves.
    pub fn push(&mut self, mv: Move) {
        assert!(self.len < MAX_MOVES, "move list overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Removes every move from the list
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Deref for MoveList {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        &self.moves[..self.len]
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_survive_packing() {
        let mv = Move::new(Square::G1, Square::F3);
        assert_eq!(mv.source(), Square::G1);
        assert_eq!(mv.target(), Square::F3);
        assert_eq!(mv.promotion(), None);

        let mv = Move::with_promotion(Square::H2, Square::H1, Piece::Knight);
        assert_eq!(mv.source(), Square::H2);
        assert_eq!(mv.target(), Square::H1);
        assert_eq!(mv.promotion(), Some(Piece::Knight));
        assert_ne!(mv, Move::new(Square::H2, Square::H1));
    }

    #[test]
    fn display_uses_coordinate_notation() {
        assert_eq!(Move::new(Square::E2, Square::E4).to_string(), "e2e4");
        assert_eq!(Move::with_promotion(Square::A7, Square::B8, Piece::Rook).to_string(), "a7b8r");
        assert_eq!(format!("{:6}|", Move::new(Square::A1, Square::A8)), "a1a8  |");
    }

    #[test]
    fn parse_accepts_coordinate_notation() {
        assert_eq!("e1g1".parse::<Move>(), Ok(Move::new(Square::E1, Square::G1)));
        assert_eq!("c2c1b".parse::<Move>(),
            Ok(Move::with_promotion(Square::C2, Square::C1, Piece::Bishop)));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for s in &["", "e2", "e2e4 ", "e2-e4", "e7e8k", "e7e8Q", "i2i4", "e0e1", "Nf3", "e2e4e5"] {
            assert_eq!(s.parse::<Move>(), Err(Error::ParseMove(s.to_string())));
        }
    }

    #[test]
    fn move_list_derefs_to_its_contents() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        list.push(Move::new(Square::E2, Square::E4));
        list.push(Move::new(Square::D2, Square::D4));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], Move::new(Square::D2, Square::D4));
        assert!(list.contains(&Move::new(Square::E2, Square::E4)));
        assert_eq!((&list).into_iter().count(), 2);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    #[should_panic(expected = "move list overflow")]
    fn move_list_panics_when_full() {
        let mut list = MoveList::new();
        for _ in 0..=MAX_MOVES {
            list.push(Move::new(Square::A1, Square::A2));
        }
    }
}
