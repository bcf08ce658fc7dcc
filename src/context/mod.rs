// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Read-only inputs shared by every search worker.
//!
//! The SearchContext bundles the grid model (MEMO data), the direction order
//! and the admissibility rule. It is built once per run and borrowed by all
//! workers; nothing in it changes during search. The mutable part of a search
//! lives in [`SearchFrame`](crate::state::SearchFrame), one per worker.

use crate::engine::Admissibility;
use crate::geometry::{Direction, DirectionOrder, Point, SquareSet};
use crate::memo::GridMemo;

/// Why a candidate move was not taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The destination is on the outer ring or outside the lattice.
    Boundary,
    /// The move does not newly cover enough squares.
    Inadmissible { new_squares: usize },
}

/// Immutable search inputs for one grid size.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Adjacency and boundary tables.
    pub memo: GridMemo,
    /// Directions in the order the engine tries them.
    pub directions: [Direction; 8],
    /// Move legality rule for this grid size.
    pub admissibility: Admissibility,
}

impl SearchContext {
    /// Create a context with the default (diagonals first) direction order.
    pub fn new(size: usize) -> Self {
        Self::with_order(size, DirectionOrder::default())
    }

    pub fn with_order(size: usize, order: DirectionOrder) -> Self {
        Self {
            memo: GridMemo::new(size),
            directions: order.directions(),
            admissibility: Admissibility::for_grid(size),
        }
    }

    pub fn size(&self) -> usize {
        self.memo.size()
    }

    /// Try the move from `head` in `direction` against the coverage `mask`.
    ///
    /// On success returns the destination and the squares it newly covers.
    #[inline]
    pub fn extend(
        &self,
        head: Point,
        mask: &SquareSet,
        direction: Direction,
    ) -> Result<(Point, SquareSet), Rejection> {
        let dest = head.step(direction);
        if self.memo.is_boundary(dest) {
            return Err(Rejection::Boundary);
        }
        let added = self.memo.adjacency(dest).difference(mask);
        let new_squares = added.count();
        if !self.admissibility.admits(direction, new_squares) {
            return Err(Rejection::Inadmissible { new_squares });
        }
        Ok((dest, added))
    }
}
