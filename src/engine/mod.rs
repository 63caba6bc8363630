//! The engine
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::cmp::{max, min};
use std::time::Instant;
use log::{debug, info};
use chess::{MoveOrder, Position};

mod eval;
mod thinking;
pub use eval::{Evaluate, Placeholder, Score, MATE};
pub use thinking::{InfoWriter, Observer, Thinking};

/// The deepest the search will go, in plies
pub const MAX_PLY: usize = 127;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A fixed-depth negamax search with alpha-beta pruning.
///
/// The search owns one move cursor per ply, allocated once, and borrows the position mutably
/// for the duration of [`run`](#method.run). Every move it makes is undone before it returns.
#[derive(Debug)]
pub struct Search<E> {
    eval: E,
    cursors: Vec<MoveOrder>,
    nodes: u64,
    start_time: Instant,
}

impl Default for Search<Placeholder> {
    fn default() -> Self {
        Search::new(Placeholder)
    }
}

impl<E: Evaluate> Search<E> {
    /// Creates a new search which scores its leaves with `eval`.
    pub fn new(eval: E) -> Self {
        Search {
            eval,
            cursors: vec![MoveOrder::new(); MAX_PLY + 1],
            nodes: 0,
            start_time: Instant::now(),
        }
    }

    /// Searches `pos` to `depth` plies, clamped to `1..=MAX_PLY`, returning the best move and
    /// its score.
    ///
    /// `observer` hears about every new best move found at the root. When the side to move has
    /// no legal move, the result has no best move and scores either as a draw or as mate.
    ///
    /// # Panics
    /// Panics if the history of `pos` has no room for `depth` more moves. Check
    /// `Position::remaining_plies` first when the position comes from user input.
    pub fn run<O>(&mut self, pos: &mut Position, depth: usize, observer: &mut O) -> Thinking
    where O: Observer + ?Sized {
        let depth = min(max(depth, 1), MAX_PLY);
        assert!(depth <= pos.remaining_plies(),
            "no room in the position history to search {} plies", depth);
        let mut thinking = Thinking::new(depth);
        let mut alpha = Score::mated_in(0);
        let beta = Score::mate();

        self.nodes = 1;
        self.start_time = Instant::now();
        debug!("searching {} to depth {}", pos, depth);

        self.cursors[0].setup(pos);
        while let Some(mv) = self.cursors[0].next(pos) {
            pos.make(mv);
            let score = -self.search(pos, 1, depth - 1, -beta, -alpha);
            pos.undo(mv);

            if score > alpha {
                alpha = score;
                thinking.score = score;
                thinking.best_move = Some(mv);
                thinking.time = self.start_time.elapsed();
                thinking.nodes = self.nodes;
                observer.observe(&thinking);
            }
        }

        if thinking.best_move.is_none() && !pos.in_check() {
            thinking.score = Score::draw();
        }

        thinking.time = self.start_time.elapsed();
        thinking.nodes = self.nodes;
        info!("{}", thinking);

        thinking
    }

    /// Returns the number of nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches the position `ply` plies below the root to the given `depth`, looking for a
    /// score above `alpha` but below `beta`. Fails hard: the result never leaves the window.
    fn search(&mut self, pos: &mut Position, ply: usize, depth: usize,
              alpha: Score, beta: Score) -> Score {
        self.nodes += 1;

        if depth == 0 {
            return self.leaf(pos, ply);
        }

        // mate distance pruning
        let mut alpha = max(alpha, Score::mated_in(ply));
        let beta = min(beta, Score::from(MATE - ply as i32 + 1));
        if alpha >= beta {
            return alpha;
        }

        let mut best = Score::mated_in(ply);
        let mut found = false;

        self.cursors[ply].setup(pos);
        while let Some(mv) = self.cursors[ply].next(pos) {
            found = true;
            pos.make(mv);
            let score = -self.search(pos, ply + 1, depth - 1, -beta, -alpha);
            pos.undo(mv);

            if score >= beta {
                return beta;
            } else if score > alpha {
                alpha = score;
                best = score;
            } else if score > best {
                best = score;
            }
        }

        if !found && !pos.in_check() {
            best = Score::draw();
        }

        best
    }

    /// Scores a position at the horizon. Checkmate is still recognized here.
    fn leaf(&mut self, pos: &Position, ply: usize) -> Score {
        if pos.in_check() {
            let cursor = &mut self.cursors[ply];
            cursor.setup(pos);
            if cursor.next(pos).is_none() {
                return Score::mated_in(ply);
            }
        }

        let score = self.eval.evaluate(pos);
        debug_assert!(!score.is_mate(), "evaluation returned a mate score: {}", score);
        score
    }
}
