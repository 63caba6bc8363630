//! Module for counting and printing the number of variations from a given position
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

/// Print the number of variations of the given `depth` for each legal move from `pos`, returning
/// the total
///
/// Each line gives the move, its count and the position after the move.
pub fn print(pos: &mut Position, depth: usize) -> u64 {
    if depth < 1 {
        return 1;
    }

    let mut cursors = vec![MoveOrder::new(); depth];
    let (root, rest) = cursors.split_at_mut(1);
    let root = &mut root[0];
    let mut total = 0;

    root.setup(pos);
    while let Some(mv) = root.next(pos) {
        pos.make(mv);
        let count = count_with(pos, depth - 1, rest);
        println!("\t{:7}\t{:12}\t{}", mv, count, pos);
        pos.undo(mv);
        total += count;
    }

    total
}

/// Count the number of variations of the given `depth` from `pos`
///
/// ```rust
/// use chess::{variations, Position};
///
/// let mut pos = Position::new();
/// assert_eq!(variations::count(&mut pos, 3), 8902);
/// assert_eq!(pos, Position::new());
/// ```
pub fn count(pos: &mut Position, depth: usize) -> u64 {
    let mut cursors = vec![MoveOrder::new(); depth];
    count_with(pos, depth, &mut cursors)
}

fn count_with(pos: &mut Position, depth: usize, cursors: &mut [MoveOrder]) -> u64 {
    let (cursor, rest) = match cursors.split_first_mut() {
        Some(split) if depth > 0 => split,
        _ => return 1,
    };
    let mut total = 0;

    cursor.setup(pos);
    if depth == 1 {
        while cursor.next(pos).is_some() {
            total += 1;
        }
        return total;
    }

    while let Some(mv) = cursor.next(pos) {
        pos.make(mv);
        total += count_with(pos, depth - 1, rest);
        pos.undo(mv);
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_counts_the_position_itself() {
        assert_eq!(count(&mut Position::new(), 0), 1);
        assert_eq!(print(&mut Position::new(), 0), 1);
    }

    #[test]
    fn print_and_count_agree() {
        let mut pos = Position::from_fen_str("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("valid fen");
        let counted = count(&mut pos, 2);
        assert_eq!(print(&mut pos, 2), counted);
        assert_eq!(counted, 568);
    }

    #[test]
    fn checkmate_has_no_variations() {
        let mut pos = Position::from_fen_str("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1")
            .expect("valid fen");
        assert_eq!(count(&mut pos, 1), 0);
        assert_eq!(count(&mut pos, 3), 0);
    }
}
