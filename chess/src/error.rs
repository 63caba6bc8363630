//! Defines the error types needed by the chess crate
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use crate::Move;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The fields of a FEN string, in order
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FenField {
    Placement,
    Side,
    Castling,
    EnPassant,
    ReversibleMoves,
    MoveNumber,
}

impl fmt::Display for FenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FenField::*;

        match self {
            Placement => "piece placement",
            Side => "side to move",
            Castling => "castling rights",
            EnPassant => "en-passant square",
            ReversibleMoves => "reversible move count",
            MoveNumber => "move number",
        }.fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error type used throughout the `chess` crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cannot parse a side to move
    ParseSide(String),
    /// Cannot parse a piece letter
    ParsePiece(String),
    /// Cannot parse a square, file or rank
    ParseSquare(String),
    /// Cannot parse castling rights
    ParseCastling(String),
    /// Cannot parse a move
    ParseMove(String),
    /// A field of a FEN string is malformed
    ParseFen(FenField, String),
    /// Failed to convert an integer to an another type
    TryFromIntError,
    /// The move is not legal in the position
    IllegalMove(Move),
    /// No more moves can be made without exceeding the position history
    HistoryFull,
    /// Player can capture opponent's king
    KingCapturable,
    /// Missing king or multiple kings of the same color
    InvalidKingCount,
    /// Pawn on first or last rank
    InvalidPawnRank,
    /// Castling flags aren't valid for this position
    InvalidCastlingFlags,
    /// En-passant square without capturable pawn
    MissingEnPassantPawn,
    /// En-passant square is occupied
    EnPassantSquareOccupied,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            ParseSide(s) => write!(f, "cannot parse side to move: {:?}", s),
            ParsePiece(s) => write!(f, "cannot parse piece: {:?}", s),
            ParseSquare(s) => write!(f, "cannot parse square: {:?}", s),
            ParseCastling(s) => write!(f, "cannot parse castling rights: {:?}", s),
            ParseMove(s) => write!(f, "cannot parse move: {:?}", s),
            ParseFen(field, s) => write!(f, "bad FEN ({}): {:?}", field, s),
            TryFromIntError => "integer out of range".fmt(f),
            IllegalMove(mv) => write!(f, "illegal move: {}", mv),
            HistoryFull => "too many moves for the position history".fmt(f),
            KingCapturable => "king is under attack on opponent's move".fmt(f),
            InvalidKingCount => "missing king or multiple kings of the same color".fmt(f),
            InvalidPawnRank => "pawn on first or last rank".fmt(f),
            InvalidCastlingFlags => "castling flags aren't valid for this position".fmt(f),
            MissingEnPassantPawn => "en-passant square without capturable pawn".fmt(f),
            EnPassantSquareOccupied => "en-passant square is occupied".fmt(f),
        }
    }
}

impl std::error::Error for Error { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Result type used throughout the `chess` crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_errors_name_the_field_and_the_input() {
        let err = Error::ParseFen(FenField::Castling, "KQx".to_owned());
        assert_eq!(err.to_string(), "bad FEN (castling rights): \"KQx\"");
    }

    #[test]
    fn parse_errors_quote_the_input() {
        assert_eq!(Error::ParseSquare("z9".to_owned()).to_string(), "cannot parse square: \"z9\"");
    }
}
