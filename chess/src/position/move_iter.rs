//! Contains the `MoveOrder` cursor over the legal moves of a position
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A reusable cursor which hands out the legal moves of a position one at a time.
///
/// [`setup`](#method.setup) fills the cursor with pseudo-legal moves: evasions when the side to
/// move is in check, otherwise captures and queen promotions followed by the remaining moves.
/// [`next`](#method.next) then skips over any move that fails
/// [`Position::is_legal`](struct.Position.html#method.is_legal).
///
/// A search keeps one `MoveOrder` per ply so nothing is allocated while it runs. The cursor does
/// not borrow the position between calls, which leaves the caller free to make and undo moves
/// while iterating, as long as the position is back where it started whenever `next` is called.
#[derive(Debug, Clone, Default)]
pub struct MoveOrder {
    moves: MoveList,
    index: usize,
}

impl MoveOrder {
    /// Creates an empty cursor
    pub fn new() -> MoveOrder {
        Default::default()
    }

    /// Generates the pseudo-legal moves of `pos` and rewinds the cursor
    pub fn setup(&mut self, pos: &Position) {
        self.moves.clear();
        self.index = 0;

        if pos.in_check() {
            pos.evasion_moves(&mut self.moves);
        } else {
            pos.tactical_moves(&mut self.moves);
            pos.quiet_moves(&mut self.moves);
        }
    }

    /// Returns the next legal move, or `None` once every move has been handed out
    pub fn next(&mut self, pos: &Position) -> Option<Move> {
        while let Some(mv) = self.moves.get(self.index).copied() {
            self.index += 1;
            if pos.is_legal(mv) {
                return Some(mv);
            }
        }

        None
    }
}
