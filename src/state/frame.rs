// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The search frame and its scoped moves.
//!
//! A [`SearchFrame`] is the coverage mask plus the path that produced it.
//! Descending one level goes through [`SearchFrame::advance`], which returns a
//! [`Step`] guard. The guard gives mutable access to the extended frame and undoes
//! the move when it is dropped, so the frame is restored on every exit path of
//! the recursion, including early returns after a prune.
//!
//! # Example
//!
//! ```
//! use grid_cover_search::geometry::{Path, Point};
//! use grid_cover_search::memo::GridMemo;
//! use grid_cover_search::state::SearchFrame;
//!
//! let memo = GridMemo::new(4);
//! let mut frame = SearchFrame::new(&memo, &Path::from(vec![Point::new(1, 1)]));
//! let added = memo.adjacency(Point::new(2, 2)).difference(frame.mask());
//! {
//!     let step = frame.advance(Point::new(2, 2), added);
//!     assert_eq!(step.covered(), 7);
//!     assert_eq!(step.moves(), 1);
//! }
//! assert_eq!(frame.covered(), 4); // restored
//! assert_eq!(frame.moves(), 0);
//! ```

use crate::geometry::{Path, Point, SquareSet};
use crate::memo::GridMemo;
use std::ops::{Deref, DerefMut};

/// Coverage mask and path of one active search.
///
/// Invariant: `mask` is exactly the union of the adjacency masks of the
/// vertices on `path`, and `covered == mask.count()`.
#[derive(Debug, Clone)]
pub struct SearchFrame {
    mask: SquareSet,
    path: Path,
    covered: usize,
}

impl SearchFrame {
    /// Build the frame for a starting path.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty or leaves the lattice.
    pub fn new(memo: &GridMemo, path: &Path) -> Self {
        assert!(!path.is_empty(), "search frame needs at least one vertex");
        let mask = memo.mask_of(path);
        let covered = mask.count();
        let mut owned = Path::with_capacity(path.len() + memo.total_squares() / 2);
        for &point in path {
            owned.push(point);
        }
        Self {
            mask,
            path: owned,
            covered,
        }
    }

    pub fn mask(&self) -> &SquareSet {
        &self.mask
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of squares covered so far.
    #[inline]
    pub fn covered(&self) -> usize {
        self.covered
    }

    /// Number of moves made so far.
    #[inline]
    pub fn moves(&self) -> usize {
        self.path.moves()
    }

    /// The vertex the path currently ends at.
    #[inline]
    pub fn head(&self) -> Point {
        // Never empty: construction requires a vertex and steps pop only what they push.
        self.path.points()[self.path.len() - 1]
    }

    /// Move to `dest`, covering the squares in `added`.
    ///
    /// `added` must be disjoint from the current mask; it is what gets removed
    /// again when the returned guard is dropped.
    #[inline]
    pub fn advance(&mut self, dest: Point, added: SquareSet) -> Step<'_> {
        debug_assert!(added.is_disjoint(&self.mask));
        self.mask.union_with(&added);
        self.covered += added.count();
        self.path.push(dest);
        debug_assert_eq!(self.covered, self.mask.count());
        Step { frame: self, added }
    }
}

/// A move applied to a [`SearchFrame`], undone on drop.
#[derive(Debug)]
pub struct Step<'a> {
    frame: &'a mut SearchFrame,
    added: SquareSet,
}

impl Step<'_> {
    /// Squares this move newly covered.
    pub fn added(&self) -> &SquareSet {
        &self.added
    }
}

impl Deref for Step<'_> {
    type Target = SearchFrame;

    fn deref(&self) -> &SearchFrame {
        self.frame
    }
}

impl DerefMut for Step<'_> {
    fn deref_mut(&mut self) -> &mut SearchFrame {
        self.frame
    }
}

impl Drop for Step<'_> {
    fn drop(&mut self) {
        self.frame.mask.subtract(&self.added);
        self.frame.covered -= self.added.count();
        self.frame.path.pop();
        debug_assert_eq!(self.frame.covered, self.frame.mask.count());
    }
}
