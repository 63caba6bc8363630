//! Contains the `Position` and its make/undo state machine.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use std::fmt;
use super::*;

use bitboard::*;

use Side::*;
use Piece::*;

mod movegen;
pub mod move_iter;

/// The most frames a position's history can hold, enough for two plies per search depth
pub const MAX_FRAMES: usize = 254;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The state that changes with every move, kept on a stack so that `undo` can restore it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Frame {
    turn: Side,
    castling: CastlingRights,
    ep_square: Option<Square>,
    reversible_moves: u32,
    move_number: u32,
    // piece captured by `last_move`, not counting en-passant
    captured: Option<Piece>,
    last_move: Option<Move>,
    checkers: Bitboard,
    pinned: Bitboard,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A mutable chess position: the pieces on the board, the side to move, castling rights, the
/// en-passant square and the move counters.
///
/// # Instantiation
///  -  [`new`](#method.new) (or `default`) creates the standard starting position.
///  -  [`from_fen_str`](#method.from_fen_str), along with `str::parse`, reads [Forsyth-Edwards
///     Notation (FEN)](https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation). Trailing
///     fields may be left off.
///
/// # Making Moves
/// A `Position` is changed in place. [`make`](#method.make) plays a move and
/// [`undo`](#method.undo) takes it back; calls must be strictly nested, and `undo` must be given
/// the same move that was last made. The squares giving check and the pinned pieces are worked
/// out once per `make` and are simply read back after an `undo`.
///
/// ```rust
/// use chess::{Position, MoveOrder};
///
/// let mut pos = Position::new();
/// let mut moves = MoveOrder::new();
/// moves.setup(&pos);
///
/// while let Some(mv) = moves.next(&pos) {
///     pos.make(mv);
///     // do something useful
///     pos.undo(mv);
/// }
/// assert_eq!(pos, Position::new());
/// ```
#[derive(Clone)]
pub struct Position {
    by_side: [Bitboard; Side::COUNT],
    by_piece: [Bitboard; Piece::COUNT],
    squares: [Option<Piece>; Square::COUNT],
    kings: [Square; Side::COUNT],
    frames: Vec<Frame>,
}

impl Position {
    /// Returns the standard starting position.
    pub fn new() -> Position {
        Position::from_fen_str(START_FEN).expect("INFALLIBLE")
    }

    /// Returns an empty board with white to move and no history.
    fn empty() -> Position {
        let mut frames = Vec::with_capacity(MAX_FRAMES);
        frames.push(Frame {
            turn: White,
            castling: CastlingRights::NONE,
            ep_square: None,
            reversible_moves: 0,
            move_number: 1,
            captured: None,
            last_move: None,
            checkers: Bitboard::new(),
            pinned: Bitboard::new(),
        });

        Position {
            by_side: [Bitboard::new(); Side::COUNT],
            by_piece: [Bitboard::new(); Piece::COUNT],
            squares: [None; Square::COUNT],
            kings: [Square::E1, Square::E8],
            frames,
        }
    }

    /// Parse a position from a string containing [Forsyth-Edwards
    /// Notation (FEN)](https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation).
    ///
    /// Only the piece placement is required. Missing fields default to white to move, no castling
    /// rights, no en-passant square, a reversible move count of 0 and move number 1.
    ///
    /// ```rust
    /// use chess::{Position, Side};
    ///
    /// let pos = Position::from_fen_str("4k3/8/8/8/8/8/8/4K2R")?;
    /// assert_eq!(pos.turn(), Side::White);
    /// assert_eq!(pos.to_fen_str(), "4k3/8/8/8/8/8/8/4K2R w - - 0 1");
    /// # Ok::<(), chess::Error>(())
    /// ```
    pub fn from_fen_str(s: &str) -> Result<Position> {
        let mut pos = Position::empty();
        let mut fields = s.split_whitespace();

        let placement = fields.next().unwrap_or_default();
        pos.parse_placement(placement)
            .ok_or_else(|| Error::ParseFen(FenField::Placement, placement.to_owned()))?;

        let frame = &mut pos.frames[0];

        if let Some(turn) = fields.next() {
            frame.turn = turn.parse()
                .map_err(|_| Error::ParseFen(FenField::Side, turn.to_owned()))?;
        }

        if let Some(castling) = fields.next() {
            frame.castling = castling.parse()
                .map_err(|_| Error::ParseFen(FenField::Castling, castling.to_owned()))?;
        }

        match fields.next() {
            None | Some("-") => {},
            Some(ep) => {
                frame.ep_square = Some(ep.parse()
                    .map_err(|_| Error::ParseFen(FenField::EnPassant, ep.to_owned()))?);
            },
        }

        if let Some(count) = fields.next() {
            frame.reversible_moves = count.parse()
                .map_err(|_| Error::ParseFen(FenField::ReversibleMoves, count.to_owned()))?;
        }

        if let Some(number) = fields.next() {
            frame.move_number = number.parse()
                .map_err(|_| Error::ParseFen(FenField::MoveNumber, number.to_owned()))?;
        }

        pos.validate()?;
        pos.update_checks();
        Ok(pos)
    }

    /// Fills the board from the placement field, returning `None` if it's malformed.
    fn parse_placement(&mut self, placement: &str) -> Option<()> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != Rank::COUNT {
            return None;
        }

        for (r, text) in ranks.iter().rev().enumerate() {
            let rank = Rank::try_from(r).ok()?;
            let mut f = 0;

            for c in text.chars() {
                match c {
                    '1' ..= '8' => {
                        f += c.to_digit(10)? as usize;
                    },
                    _ => {
                        let file = File::try_from(f).ok()?;
                        let piece = c.to_string().parse().ok()?;
                        let side = if c.is_ascii_uppercase() { White } else { Black };
                        self.put_piece(side, piece, Square::from_coord(file, rank));
                        f += 1;
                    },
                }
                if f > File::COUNT {
                    return None;
                }
            }

            if f != File::COUNT {
                return None;
            }
        }

        Some(())
    }

    /// Checks that the parsed position is one that play could actually reach.
    fn validate(&mut self) -> Result<()> {
        use Error::*;

        for side in [White, Black].iter().copied() {
            let king = self.occupied_by_piece(side, King);
            if king.len() != 1 {
                return Err(InvalidKingCount);
            }
            self.kings[side as usize] = king.peek().expect("INFALLIBLE");
        }

        let back_ranks = Bitboard::from(Rank::R1) | Rank::R8.into();
        if self.pieces(Pawn).intersects(back_ranks) {
            return Err(InvalidPawnRank);
        }

        let us = self.turn();
        if self.is_attacked(self.king(!us), us) {
            return Err(KingCapturable);
        }

        let rights = self.castling_rights();
        for side in [White, Black].iter().copied() {
            let (king, rooks) = match side {
                White => (Square::E1, [(Square::H1, true), (Square::A1, false)]),
                Black => (Square::E8, [(Square::H8, true), (Square::A8, false)]),
            };

            for (rook, king_side) in rooks.iter().copied() {
                let right = if king_side {
                    CastlingRights::king_side(side)
                } else {
                    CastlingRights::queen_side(side)
                };
                if rights.contains(right) && (self.kings[side as usize] != king
                    || self.piece_at(rook) != Some((side, Rook)))
                {
                    return Err(InvalidCastlingFlags);
                }
            }
        }

        if let Some(ep) = self.en_passant_square() {
            let ep_rank = match us {
                White => Rank::R6,
                Black => Rank::R3,
            };
            let pushed = Bitboard::from(ep).shift((!us).forward());

            if self.occupied().contains(ep) {
                return Err(EnPassantSquareOccupied);
            } else if ep.rank() != ep_rank
                || pushed.is_disjoint(self.occupied_by_piece(!us, Pawn))
            {
                return Err(MissingEnPassantPawn);
            }
        }

        Ok(())
    }

    /// Converts the position to a FEN string.
    pub fn to_fen_str(&self) -> String {
        let mut board = String::new();

        for r in (0..Rank::COUNT).rev() {
            let mut empty = 0;

            for f in 0..File::COUNT {
                let sq = Square::try_from(f + r * File::COUNT).expect("INFALLIBLE");
                if let Some((side, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        board += &empty.to_string();
                        empty = 0;
                    }
                    board.push(piece.to_char(side));
                } else {
                    empty += 1;
                }
            }

            if empty > 0 {
                board += &empty.to_string();
            }
            if r > 0 {
                board.push('/');
            }
        }

        let ep_square = match self.en_passant_square() {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };

        format!("{} {} {} {} {} {}", board, self.turn(), self.castling_rights(), ep_square,
            self.reversible_moves(), self.move_number())
    }

    /// Draws the board as text from white's side, marking the en-passant square with `*`.
    ///
    /// The board is followed by a line giving the side to move, the castling rights and the
    /// reversible move count.
    pub fn diagram(&self) -> String {
        let border = "  +-----------------+\n";
        let mut s = String::from(border);

        for r in (0..Rank::COUNT).rev() {
            s += &format!("{} |", r + 1);
            for f in 0..File::COUNT {
                let sq = Square::try_from(f + r * File::COUNT).expect("INFALLIBLE");
                let c = match self.piece_at(sq) {
                    Some((side, piece)) => piece.to_char(side),
                    None if Some(sq) == self.en_passant_square() => '*',
                    None => '.',
                };
                s.push(' ');
                s.push(c);
            }
            s += " |\n";
        }

        s += border;
        s += "    a b c d e f g h\n";
        s += &format!("{} {} {}\n", self.turn(), self.castling_rights(), self.reversible_moves());
        s
    }

    fn frame(&self) -> &Frame {
        self.frames.last().expect("INFALLIBLE")
    }

    /// Returns the side whose turn it is.
    pub fn turn(&self) -> Side {
        self.frame().turn
    }

    /// Returns the castling rights still available to both sides.
    pub fn castling_rights(&self) -> CastlingRights {
        self.frame().castling
    }

    /// Returns the square a pawn can capture en passant on, if any.
    pub fn en_passant_square(&self) -> Option<Square> {
        self.frame().ep_square
    }

    /// Returns the number of moves since the last capture or pawn move.
    pub fn reversible_moves(&self) -> u32 {
        self.frame().reversible_moves
    }

    /// Returns the full move number.
    pub fn move_number(&self) -> u32 {
        self.frame().move_number
    }

    /// Returns the number of moves made since the position was set up.
    pub fn ply(&self) -> usize {
        self.frames.len() - 1
    }

    /// Returns how many more moves can be made before the history is full.
    pub fn remaining_plies(&self) -> usize {
        MAX_FRAMES - self.frames.len()
    }

    /// Returns the last move made, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.frame().last_move
    }

    /// Returns the squares of the pieces giving check to the side to move.
    pub fn checkers(&self) -> Bitboard {
        self.frame().checkers
    }

    /// Returns the squares of the pieces pinned to the king of the side to move.
    pub fn pinned(&self) -> Bitboard {
        self.frame().pinned
    }

    /// Returns `true` if the side to move is in check.
    pub fn in_check(&self) -> bool {
        !self.checkers().is_empty()
    }

    /// Returns a `Bitboard` of all occupied squares.
    pub fn occupied(&self) -> Bitboard {
        self.by_side[White as usize] | self.by_side[Black as usize]
    }

    /// Returns a `Bitboard` of squares occupied by `side`.
    pub fn occupied_by(&self, side: Side) -> Bitboard {
        self.by_side[side as usize]
    }

    /// Returns a `Bitboard` of squares occupied by `piece`, of either side.
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.by_piece[piece as usize]
    }

    /// Returns a `Bitboard` of squares occupied by the given `Piece` and `Side`.
    pub fn occupied_by_piece(&self, side: Side, piece: Piece) -> Bitboard {
        self.by_side[side as usize] & self.by_piece[piece as usize]
    }

    /// Returns the square of the king of the given side.
    pub fn king(&self, side: Side) -> Square {
        self.kings[side as usize]
    }

    /// Returns the side and type of piece, if any, at the given square.
    pub fn piece_at(&self, sq: Square) -> Option<(Side, Piece)> {
        let piece = self.squares[sq as usize]?;
        let side = if self.by_side[White as usize].contains(sq) { White } else { Black };
        Some((side, piece))
    }

    fn diagonal_sliders(&self, side: Side) -> Bitboard {
        self.occupied_by(side) & (self.pieces(Bishop) | self.pieces(Queen))
    }

    fn orthogonal_sliders(&self, side: Side) -> Bitboard {
        self.occupied_by(side) & (self.pieces(Rook) | self.pieces(Queen))
    }

    /// Returns `true` if any piece of side `by` attacks `sq`.
    ///
    /// The king of the other side does not block slider attacks, so a square behind the king on
    /// the line of a checking slider counts as attacked.
    pub fn is_attacked(&self, sq: Square, by: Side) -> bool {
        let occ = self.occupied() ^ self.king(!by).into();

        pawn_attacks(sq, !by).intersects(self.occupied_by_piece(by, Pawn))
            || knight_attacks(sq).intersects(self.occupied_by_piece(by, Knight))
            || king_attacks(sq).intersects(self.occupied_by_piece(by, King))
            || diagonal_attacks(sq, occ).intersects(self.diagonal_sliders(by))
            || orthogonal_attacks(sq, occ).intersects(self.orthogonal_sliders(by))
    }

    /// Recomputes the checkers and pinned pieces of the current frame.
    fn update_checks(&mut self) {
        let us = self.turn();
        let them = !us;
        let king = self.king(us);
        let occ = self.occupied();
        let blockers = occ ^ king.into();

        let checkers = (pawn_attacks(king, us) & self.occupied_by_piece(them, Pawn))
            | (knight_attacks(king) & self.occupied_by_piece(them, Knight))
            | (diagonal_attacks(king, blockers) & self.diagonal_sliders(them))
            | (orthogonal_attacks(king, blockers) & self.orthogonal_sliders(them));

        let snipers = (diagonal_xray(king, occ) & self.diagonal_sliders(them))
            | (orthogonal_xray(king, occ) & self.orthogonal_sliders(them));
        let friends = self.occupied_by(us);
        let pinned = snipers.into_iter()
            .fold(Bitboard::new(), |pinned, sniper| pinned | (between(king, sniper) & friends));

        let frame = self.frames.last_mut().expect("INFALLIBLE");
        frame.checkers = checkers;
        frame.pinned = pinned;
    }

    fn put_piece(&mut self, side: Side, piece: Piece, sq: Square) {
        self.by_side[side as usize].insert(sq);
        self.by_piece[piece as usize].insert(sq);
        self.squares[sq as usize] = Some(piece);
    }

    fn remove_piece(&mut self, side: Side, piece: Piece, sq: Square) {
        self.by_side[side as usize].remove(sq);
        self.by_piece[piece as usize].remove(sq);
        self.squares[sq as usize] = None;
    }

    fn move_piece(&mut self, side: Side, piece: Piece, src: Square, tgt: Square) {
        let squares = Bitboard::from(src) | tgt.into();
        self.by_side[side as usize] ^= squares;
        self.by_piece[piece as usize] ^= squares;
        self.squares[src as usize] = None;
        self.squares[tgt as usize] = Some(piece);

        if piece == King {
            self.kings[side as usize] = tgt;
        }
    }

    /// Plays `mv` for the side to move.
    ///
    /// `mv` must be pseudo-legal, as produced by the move generator, and should normally pass
    /// [`is_legal`](#method.is_legal) as well.
    ///
    /// # Panics
    /// Panics if there is no piece on the source square or if the history already holds
    /// `MAX_FRAMES` frames.
    pub fn make(&mut self, mv: Move) {
        assert!(self.frames.len() < MAX_FRAMES, "position history is full");

        let prev = *self.frame();
        let us = prev.turn;
        let them = !us;
        let src = mv.source();
        let tgt = mv.target();
        let piece = match self.squares[src as usize] {
            Some(piece) => piece,
            None => panic!("no piece on {} to make {} in {}", src, mv, self),
        };
        let captured = self.squares[tgt as usize];

        let mut frame = Frame {
            turn: them,
            castling: prev.castling & castling_mask(src) & castling_mask(tgt),
            ep_square: None,
            reversible_moves: prev.reversible_moves.saturating_add(1),
            move_number: prev.move_number.saturating_add(if us == Black { 1 } else { 0 }),
            captured,
            last_move: Some(mv),
            checkers: Bitboard::new(),
            pinned: Bitboard::new(),
        };

        if let Some(victim) = captured {
            self.remove_piece(them, victim, tgt);
            frame.reversible_moves = 0;
        }
        self.move_piece(us, piece, src, tgt);

        match piece {
            Pawn => {
                frame.reversible_moves = 0;
                let behind = Bitboard::from(tgt).shift(us.forward().opposite());

                if Some(tgt) == prev.ep_square {
                    let victim = behind.peek().expect("INFALLIBLE");
                    self.remove_piece(them, Pawn, victim);
                } else if src.rank_distance(tgt) == 2 {
                    let beside = Bitboard::from(tgt).shift(Direction::East)
                        | Bitboard::from(tgt).shift(Direction::West);
                    if beside.intersects(self.occupied_by_piece(them, Pawn)) {
                        frame.ep_square = behind.peek();
                    }
                } else if let Some(promotion) = mv.promotion() {
                    self.remove_piece(us, Pawn, tgt);
                    self.put_piece(us, promotion, tgt);
                }
            },
            King if src.file_distance(tgt) == 2 => {
                let (rook_src, rook_tgt) = castling_rook(src, tgt);
                self.move_piece(us, Rook, rook_src, rook_tgt);
            },
            _ => {},
        }

        self.frames.push(frame);
        self.update_checks();
    }

    /// Takes back `mv`, which must be the last move made.
    ///
    /// # Panics
    /// Panics if no move has been made or if `mv` is not the last move made.
    pub fn undo(&mut self, mv: Move) {
        assert!(self.frames.len() > 1, "no move to undo");
        assert_eq!(self.last_move(), Some(mv), "undo must be given the last move made");

        let frame = self.frames.pop().expect("INFALLIBLE");
        let prev = *self.frame();
        let us = prev.turn;
        let src = mv.source();
        let tgt = mv.target();

        let piece = match mv.promotion() {
            Some(promotion) => {
                self.remove_piece(us, promotion, tgt);
                self.put_piece(us, Pawn, tgt);
                Pawn
            },
            None => self.squares[tgt as usize].expect("INFALLIBLE"),
        };

        self.move_piece(us, piece, tgt, src);
        if let Some(victim) = frame.captured {
            self.put_piece(!us, victim, tgt);
        }

        match piece {
            Pawn if Some(tgt) == prev.ep_square => {
                let victim = Bitboard::from(tgt).shift(us.forward().opposite());
                self.put_piece(!us, Pawn, victim.peek().expect("INFALLIBLE"));
            },
            King if src.file_distance(tgt) == 2 => {
                let (rook_src, rook_tgt) = castling_rook(src, tgt);
                self.move_piece(us, Rook, rook_tgt, rook_src);
            },
            _ => {},
        }
    }

    /// Parses a move in coordinate notation and checks that it is legal in this position.
    pub fn parse_move(&self, s: &str) -> Result<Move> {
        let mv: Move = s.parse()?;

        if self.legal_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(Error::IllegalMove(mv))
        }
    }

    /// Parses a move like [`parse_move`](#method.parse_move) and makes it, returning the move.
    ///
    /// Fails with `HistoryFull` rather than panicking once the history has no room left.
    pub fn play(&mut self, s: &str) -> Result<Move> {
        let mv = self.parse_move(s)?;
        if self.remaining_plies() == 0 {
            return Err(Error::HistoryFull);
        }
        self.make(mv);
        Ok(mv)
    }

    /// Returns every legal move in the position.
    pub fn legal_moves(&self) -> MoveList {
        let mut order = MoveOrder::new();
        let mut moves = MoveList::new();

        order.setup(self);
        while let Some(mv) = order.next(self) {
            moves.push(mv);
        }

        moves
    }
}

/// Returns the castling rights that survive a move to or from `sq`.
fn castling_mask(sq: Square) -> CastlingRights {
    match sq {
        Square::E1 => CastlingRights::both(Black),
        Square::H1 => !CastlingRights::WHITE_KING_SIDE,
        Square::A1 => !CastlingRights::WHITE_QUEEN_SIDE,
        Square::E8 => CastlingRights::both(White),
        Square::H8 => !CastlingRights::BLACK_KING_SIDE,
        Square::A8 => !CastlingRights::BLACK_QUEEN_SIDE,
        _ => CastlingRights::ALL,
    }
}

/// Returns the source and target of the rook for a castling king move from `src` to `tgt`.
fn castling_rook(src: Square, tgt: Square) -> (Square, Square) {
    let (from, to) = if src < tgt { (3, 1) } else { (-4, -1) };
    (src.offset(from).expect("INFALLIBLE"), src.offset(to).expect("INFALLIBLE"))
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl PartialEq for Position {
    /// Positions are equal when the board and the current frame match; earlier history is ignored.
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.frame(), other.frame());

        self.by_side == other.by_side
            && self.by_piece == other.by_piece
            && self.squares[..] == other.squares[..]
            && self.kings == other.kings
            && a.turn == b.turn
            && a.castling == b.castling
            && a.ep_square == b.ep_square
            && a.reversible_moves == b.reversible_moves
            && a.move_number == b.move_number
            && a.checkers == b.checkers
            && a.pinned == b.pinned
    }
}

impl Eq for Position { }

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_fen_str().fmt(f)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Position::from_fen_str(s)
    }
}
