//! Scores and the pluggable evaluation used at the leaves of the search.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::ops;
use chess::Position;
use super::MAX_PLY;

/// The score for giving checkmate on the current move. Mates further away score less.
pub const MATE: i32 = 32767;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Score, from the point of view of the side to move
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i32);

impl Score {
    /// Returns the score for a draw
    pub fn draw() -> Self {
        Score(0)
    }

    /// Returns the greatest possible score
    pub fn mate() -> Self {
        Score(MATE)
    }

    /// Returns the score for being checkmated `ply` plies from the root
    pub fn mated_in(ply: usize) -> Self {
        Score(ply as i32 - MATE)
    }

    /// Returns the score for checkmating the opponent `ply` plies from the root
    pub fn mates_in(ply: usize) -> Self {
        Score(MATE - ply as i32)
    }

    /// Returns true if the score announces a forced mate for either side.
    ///
    /// ```
    /// use caffeine::engine::Score;
    ///
    /// assert!(Score::mates_in(3).is_mate());
    /// assert!(Score::mated_in(10).is_mate());
    /// assert!(!Score::from(250).is_mate());
    /// ```
    pub fn is_mate(self) -> bool {
        self.0.abs() >= MATE - MAX_PLY as i32
    }
}

impl ops::Neg for Score {
    type Output = Score;

    fn neg(self) -> Self {
        Score(-self.0)
    }
}

impl From<i32> for Score {
    fn from(val: i32) -> Self {
        Score(val)
    }
}

impl From<Score> for i32 {
    fn from(val: Score) -> Self {
        val.0
    }
}

/// Formats the score as `cp N`, or `mate N` with N counted in full moves (negative when being
/// mated).
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_mate() {
            write!(f, "cp {}", self.0)
        } else if self.0 > 0 {
            write!(f, "mate {}", (MATE - self.0 + 1) / 2)
        } else {
            write!(f, "mate {}", -(self.0 + MATE + 1) / 2)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Static evaluation of a position from the point of view of the side to move.
///
/// Implementations must keep their scores strictly between `-(MATE - MAX_PLY)` and
/// `MATE - MAX_PLY`, so they cannot be mistaken for mate scores.
pub trait Evaluate {
    /// Returns the estimated score of `pos`
    fn evaluate(&self, pos: &Position) -> Score;
}

impl<F> Evaluate for F where F: Fn(&Position) -> Score {
    fn evaluate(&self, pos: &Position) -> Score {
        self(pos)
    }
}

/// An evaluation which considers every position equal
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Placeholder;

impl Evaluate for Placeholder {
    fn evaluate(&self, _pos: &Position) -> Score {
        Score::draw()
    }
}
