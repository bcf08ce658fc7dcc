// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Branch-and-bound search engine.
//!
//! This module implements the depth-first search over move sequences. Each
//! call to [`SearchEngine::explore`] handles one node of the tree:
//!
//! 1. **Prune**: if the moves made so far plus a lower bound on the moves
//!    still needed exceed the registry's best length, give up on this branch.
//! 2. **Goal**: if every square is covered, offer the path to the registry.
//! 3. **Branch**: for each direction, in the context's order, take the move if
//!    it stays off the boundary and is admissible, recurse, then undo it.
//!
//! The lower bound is `ceil(remaining / 3)` since no move covers more than
//! three new squares. Every admissible move covers at least one new square,
//! so the recursion depth is bounded by the number of squares.
//!
//! The frame is mutated in place; undo happens when the
//! [`Step`](crate::state::Step) guard for a move goes out of scope.
//!
//! # Example
//!
//! ```
//! use grid_cover_search::context::SearchContext;
//! use grid_cover_search::engine::SearchEngine;
//! use grid_cover_search::geometry::{Path, Point};
//! use grid_cover_search::registry::BestRegistry;
//! use grid_cover_search::seeds::Seed;
//! use grid_cover_search::state::Statistics;
//!
//! let ctx = SearchContext::new(4);
//! let registry = BestRegistry::new(16);
//! let engine = SearchEngine::new(&ctx, &registry);
//! let seed = Seed::new(&ctx, Path::from(vec![Point::new(1, 1)])).unwrap();
//!
//! let mut stats = Statistics::new();
//! engine.run_seed(&seed, &mut stats);
//! assert_eq!(registry.best(), 6);
//! ```

pub mod admissibility;

pub use admissibility::Admissibility;

use crate::context::{Rejection, SearchContext};
use crate::geometry::MAX_NEW_SQUARES;
use crate::registry::BestRegistry;
use crate::seeds::Seed;
use crate::state::{Counters, SearchFrame, Statistics};
use log::{debug, trace};

/// Admissible estimate of the moves needed to cover `remaining` squares.
#[inline]
pub fn lower_bound(remaining: usize) -> usize {
    remaining.div_ceil(MAX_NEW_SQUARES)
}

/// Lower bound on the length of any cover of an `size` × `size` grid.
///
/// The first vertex touches at most four squares; every move after that
/// touches at most three new ones.
pub fn theoretical_lower_bound(size: usize) -> usize {
    let total = size * size;
    lower_bound(total - total.min(4))
}

/// Depth-first search over covers, sharing its bound through a registry.
///
/// An engine only borrows its inputs, so each worker thread creates its own.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    ctx: &'a SearchContext,
    registry: &'a BestRegistry,
}

impl<'a> SearchEngine<'a> {
    pub fn new(ctx: &'a SearchContext, registry: &'a BestRegistry) -> Self {
        Self { ctx, registry }
    }

    /// Search the whole subtree below `seed`.
    pub fn run_seed(&self, seed: &Seed, stats: &mut Statistics) {
        debug!("searching seed {} (best {})", seed.path(), self.registry.best());
        let mut frame = SearchFrame::new(&self.ctx.memo, seed.path());
        self.explore(&mut frame, stats);
        stats.increment(Counters::Seeds);
        trace!("seed {} done", seed.path());
    }

    /// Explore every admissible continuation of `frame`.
    ///
    /// The frame is left exactly as it was found.
    pub fn explore(&self, frame: &mut SearchFrame, stats: &mut Statistics) {
        stats.increment(Counters::Nodes);

        let length = frame.moves();
        let total = self.ctx.memo.total_squares();
        let covered = frame.covered();
        if length + lower_bound(total - covered) > self.registry.best() {
            stats.increment(Counters::BoundPrunes);
            return;
        }

        if covered == total {
            stats.increment(Counters::CompleteCovers);
            if self.registry.try_commit(length, frame.path()) {
                stats.increment(Counters::Commits);
            }
            return;
        }

        let head = frame.head();
        for &direction in &self.ctx.directions {
            match self.ctx.extend(head, frame.mask(), direction) {
                Ok((dest, added)) => {
                    let mut step = frame.advance(dest, added);
                    self.explore(&mut step, stats);
                }
                Err(Rejection::Boundary) => stats.increment(Counters::BoundaryRejects),
                Err(Rejection::Inadmissible { .. }) => {
                    stats.increment(Counters::InadmissibleRejects)
                }
            }
        }
    }
}
