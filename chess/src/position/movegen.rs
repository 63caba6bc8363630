//! Pseudo-legal move generation and the legality filter
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

const ALL_PROMOTIONS: [Piece; 4] = [Queen, Rook, Bishop, Knight];
const UNDER_PROMOTIONS: [Piece; 3] = [Rook, Bishop, Knight];

impl Position {
    /// Adds captures and queen promotions to `moves`, returning how many were added.
    ///
    /// Only meant for positions where the side to move is not in check.
    pub fn tactical_moves(&self, moves: &mut MoveList) -> usize {
        let start = moves.len();
        let us = self.turn();
        let enemies = self.occupied_by(!us);
        let empty = !self.occupied();
        let promotion_ranks = Bitboard::from(Rank::R1) | Rank::R8.into();

        self.pawn_moves(moves, empty & promotion_ranks,
            enemies | self.en_passant_square().into(), &[Queen]);
        self.piece_moves(moves, enemies, true);

        moves.len() - start
    }

    /// Adds non-captures, under-promotions and castling to `moves`, returning how many were added.
    ///
    /// Only meant for positions where the side to move is not in check. Castling moves are fully
    /// legal when generated; everything else still needs [`is_legal`](#method.is_legal).
    pub fn quiet_moves(&self, moves: &mut MoveList) -> usize {
        let start = moves.len();
        let us = self.turn();
        let enemies = self.occupied_by(!us);
        let empty = !self.occupied();
        let promotion_ranks = Bitboard::from(Rank::R1) | Rank::R8.into();

        self.pawn_moves(moves, empty, enemies & promotion_ranks, &UNDER_PROMOTIONS);
        self.piece_moves(moves, empty, true);
        self.castling_moves(moves);

        moves.len() - start
    }

    /// Adds the moves that might get the side to move out of check, returning how many were added.
    ///
    /// With a single checker, pieces may capture it or block its line. In double check only the
    /// king can move.
    pub fn evasion_moves(&self, moves: &mut MoveList) -> usize {
        let start = moves.len();
        let us = self.turn();
        let king = self.king(us);
        let checkers = self.checkers();

        if !checkers.has_many() {
            if let Some(checker) = checkers.peek() {
                let block = between(king, checker);

                self.pawn_moves(moves, block, checkers | self.en_passant_square().into(),
                    &ALL_PROMOTIONS);
                self.piece_moves(moves, block | checkers, false);
            }
        }

        for tgt in king_attacks(king) & !self.occupied_by(us) {
            moves.push(Move::new(king, tgt));
        }

        moves.len() - start
    }

    /// Returns `true` if the pseudo-legal move `mv` does not leave the mover's king in check.
    ///
    /// Castling is checked when it is generated and always passes here.
    pub fn is_legal(&self, mv: Move) -> bool {
        let us = self.turn();
        let them = !us;
        let king = self.king(us);
        let src = mv.source();
        let tgt = mv.target();

        if src == king {
            return !self.is_attacked(tgt, them);
        }

        if Some(tgt) == self.en_passant_square() && self.squares[src as usize] == Some(Pawn) {
            let captured = Bitboard::from(tgt).shift(us.forward().opposite());
            let occ = self.occupied() ^ src.into() ^ tgt.into() ^ captured;

            return diagonal_attacks(king, occ).is_disjoint(self.diagonal_sliders(them))
                && orthogonal_attacks(king, occ).is_disjoint(self.orthogonal_sliders(them))
                && (self.checkers() & !captured)
                    .is_disjoint(self.pieces(Knight) | self.pieces(Pawn));
        }

        !self.pinned().contains(src) || ray(king, src).contains(tgt)
    }

    /// Adds pawn moves: pushes landing in `push`, captures landing in `capture`.
    ///
    /// A move onto the last rank is added once for each piece in `promotions`.
    fn pawn_moves(&self, moves: &mut MoveList, push: Bitboard, capture: Bitboard,
        promotions: &[Piece])
    {
        let us = self.turn();
        let forward = us.forward();
        let empty = !self.occupied();
        let double_rank = Bitboard::from(match us {
            White => Rank::R4,
            Black => Rank::R5,
        });

        let advanced = self.occupied_by_piece(us, Pawn).shift(forward);
        let singles = advanced & empty & push;
        let doubles = (advanced & empty).shift(forward) & empty & double_rank & push;

        for tgt in singles {
            let src = tgt.offset(-forward.offset()).expect("INFALLIBLE");
            add_pawn_move(moves, src, tgt, promotions);
        }

        for tgt in doubles {
            let src = tgt.offset(-2 * forward.offset()).expect("INFALLIBLE");
            moves.push(Move::new(src, tgt));
        }

        for side in [Direction::East, Direction::West].iter().copied() {
            for tgt in advanced.shift(side) & capture {
                let src = tgt.offset(-forward.offset() - side.offset()).expect("INFALLIBLE");
                add_pawn_move(moves, src, tgt, promotions);
            }
        }
    }

    /// Adds knight, bishop, rook and queen moves landing in `targets`, and king moves too when
    /// `with_king` is set.
    fn piece_moves(&self, moves: &mut MoveList, targets: Bitboard, with_king: bool) {
        let us = self.turn();
        let occ = self.occupied();

        for src in self.occupied_by_piece(us, Knight) {
            add_moves(moves, src, knight_attacks(src) & targets);
        }

        for src in self.diagonal_sliders(us) {
            add_moves(moves, src, diagonal_attacks(src, occ) & targets);
        }

        for src in self.orthogonal_sliders(us) {
            add_moves(moves, src, orthogonal_attacks(src, occ) & targets);
        }

        if with_king {
            let king = self.king(us);
            add_moves(moves, king, king_attacks(king) & targets);
        }
    }

    /// Adds castling moves which are legal: the right is held, the squares between king and rook
    /// are empty, and the king is not in check and doesn't pass through or land on an attacked
    /// square.
    fn castling_moves(&self, moves: &mut MoveList) {
        let us = self.turn();
        let them = !us;
        let rights = self.castling_rights();

        if self.in_check() || !rights.intersects(CastlingRights::both(us)) {
            return;
        }

        let (king, rooks) = match us {
            White => (Square::E1, [(Square::H1, Square::F1, Square::G1),
                                   (Square::A1, Square::D1, Square::C1)]),
            Black => (Square::E8, [(Square::H8, Square::F8, Square::G8),
                                   (Square::A8, Square::D8, Square::C8)]),
        };
        let rights_needed = [CastlingRights::king_side(us), CastlingRights::queen_side(us)];

        for (right, (rook, transit, tgt)) in rights_needed.iter().zip(rooks.iter()) {
            if rights.contains(*right)
                && between(king, *rook).is_disjoint(self.occupied())
                && !self.is_attacked(*transit, them)
                && !self.is_attacked(*tgt, them)
            {
                moves.push(Move::new(king, *tgt));
            }
        }
    }
}

fn add_moves(moves: &mut MoveList, src: Square, targets: Bitboard) {
    for tgt in targets {
        moves.push(Move::new(src, tgt));
    }
}

fn add_pawn_move(moves: &mut MoveList, src: Square, tgt: Square, promotions: &[Piece]) {
    match tgt.rank() {
        Rank::R1 | Rank::R8 => {
            for piece in promotions {
                moves.push(Move::with_promotion(src, tgt, *piece));
            }
        },
        _ => moves.push(Move::new(src, tgt)),
    }
}
