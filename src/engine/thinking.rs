//! Progress reports sent out while the search runs
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::io::Write;
use std::time::Duration;
use log::warn;
use chess::Move;
use super::Score;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Thinking output
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Thinking {
    pub(super) depth: usize,
    pub(super) score: Score,
    pub(super) time: Duration,
    pub(super) nodes: u64,
    pub(super) best_move: Option<Move>,
}

impl Thinking {
    pub(super) fn new(depth: usize) -> Self {
        Thinking {
            depth,
            score: Score::mated_in(0),
            time: Duration::from_secs(0),
            nodes: 0,
            best_move: None,
        }
    }

    /// Returns the depth of the search.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the score of the best move.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the time spent searching so far.
    pub fn time(&self) -> Duration {
        self.time
    }

    /// Returns the number of nodes searched so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns the best move found, or `None` if there is no legal move.
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }
}

/// Formats the record as the body of an `info` line, with the time in milliseconds.
impl fmt::Display for Thinking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "depth {} score {} time {} nodes {}",
            self.depth, self.score, self.time.as_millis(), self.nodes)?;
        if let Some(mv) = self.best_move {
            write!(f, " pv {}", mv)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Receives a report each time the search finds a new best move at the root.
pub trait Observer {
    /// Called with the current state of the search
    fn observe(&mut self, thinking: &Thinking);
}

impl Observer for () {
    fn observe(&mut self, _thinking: &Thinking) { }
}

impl Observer for Vec<Thinking> {
    fn observe(&mut self, thinking: &Thinking) {
        self.push(*thinking);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An observer which writes each report as an `info` line.
///
/// ```
/// use caffeine::engine::{InfoWriter, Placeholder, Search};
/// use chess::Position;
///
/// let mut pos: Position = "k7/8/1K6/8/8/8/8/7R w - - 0 1".parse().unwrap();
/// let mut out = InfoWriter::new(Vec::new());
/// Search::new(Placeholder).run(&mut pos, 1, &mut out);
///
/// let text = String::from_utf8(out.into_inner()).unwrap();
/// let last = text.lines().last().unwrap();
/// assert!(last.starts_with("info depth 1 score mate 1 time "));
/// assert!(last.ends_with(" pv h1h8"));
/// ```
#[derive(Debug)]
pub struct InfoWriter<W> {
    out: W,
}

impl<W: Write> InfoWriter<W> {
    /// Creates an `InfoWriter` writing to `out`
    pub fn new(out: W) -> Self {
        InfoWriter { out }
    }

    /// Consumes the writer, returning the underlying output
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for InfoWriter<W> {
    fn observe(&mut self, thinking: &Thinking) {
        if let Err(err) = writeln!(self.out, "info {}", thinking).and_then(|_| self.out.flush()) {
            warn!("unable to write thinking output: {}", err);
        }
    }
}
