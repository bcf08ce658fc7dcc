// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO data for the grid (immutable, precomputed).
//!
//! For a grid of size `n` this holds, per lattice vertex:
//! - the mask of the up to four squares the vertex touches
//! - whether the vertex lies on the outer ring of the lattice
//!
//! Both are pure functions of `n`, computed once and shared read-only by every
//! search worker.

use crate::geometry::{Path, Point, SquareIndex, SquareSet};
use log::debug;

/// Adjacency and boundary tables for one grid size.
#[derive(Debug, Clone)]
pub struct GridMemo {
    size: usize,
    /// Squares touched by each vertex, indexed by `x * (n + 1) + y`.
    adjacency: Vec<SquareSet>,
    /// Outer-ring flag for each vertex, same indexing as `adjacency`.
    boundary: Vec<bool>,
    full: SquareSet,
}

impl GridMemo {
    /// Build the tables for an `size` × `size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero; grid sizes are validated by the configuration
    /// layer before any search starts.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        let side = size + 1;
        let total = size * size;

        let mut adjacency = Vec::with_capacity(side * side);
        let mut boundary = Vec::with_capacity(side * side);
        for x in 0..side {
            for y in 0..side {
                let mut mask = SquareSet::empty(total);
                if x > 0 && y > 0 {
                    mask.insert((x - 1) * size + (y - 1));
                }
                if x > 0 && y < size {
                    mask.insert((x - 1) * size + y);
                }
                if x < size && y > 0 {
                    mask.insert(x * size + (y - 1));
                }
                if x < size && y < size {
                    mask.insert(x * size + y);
                }
                adjacency.push(mask);
                boundary.push(x == 0 || y == 0 || x == size || y == size);
            }
        }

        debug!(
            "grid memo for n={}: {} squares, {} vertices, {} interior",
            size,
            total,
            side * side,
            boundary.iter().filter(|&&b| !b).count()
        );

        Self {
            size,
            adjacency,
            boundary,
            full: SquareSet::full(total),
        }
    }

    /// Side length `n` of the grid, in squares.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares to cover, `n * n`.
    pub fn total_squares(&self) -> usize {
        self.size * self.size
    }

    /// The mask with every square set.
    pub fn full_mask(&self) -> &SquareSet {
        &self.full
    }

    /// Linear index of the square in column `x`, row `y`.
    pub fn square_index(&self, x: usize, y: usize) -> SquareIndex {
        debug_assert!(x < self.size && y < self.size);
        x * self.size + y
    }

    /// True if the point is a vertex of the `(n + 1) × (n + 1)` lattice.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        let limit = self.size as i32;
        (0..=limit).contains(&point.x) && (0..=limit).contains(&point.y)
    }

    /// True for vertices on the outer ring, and for anything outside the
    /// lattice. Moves never land on such a vertex.
    #[inline]
    pub fn is_boundary(&self, point: Point) -> bool {
        !self.contains(point) || self.boundary[self.vertex_index(point)]
    }

    /// Squares touched by a lattice vertex.
    ///
    /// # Panics
    ///
    /// Panics if the point lies outside the lattice.
    #[inline]
    pub fn adjacency(&self, point: Point) -> &SquareSet {
        assert!(self.contains(point), "vertex {} outside the lattice", point);
        &self.adjacency[self.vertex_index(point)]
    }

    /// Union of the adjacency masks of every vertex on the path.
    pub fn mask_of(&self, path: &Path) -> SquareSet {
        let mut mask = SquareSet::empty(self.total_squares());
        for &point in path {
            mask.union_with(self.adjacency(point));
        }
        mask
    }

    /// Every vertex not on the outer ring, in `(x, y)` order.
    pub fn interior_vertices(&self) -> impl Iterator<Item = Point> + '_ {
        let side = self.size as i32 + 1;
        (0..side)
            .flat_map(move |x| (0..side).map(move |y| Point::new(x, y)))
            .filter(|&p| !self.is_boundary(p))
    }

    #[inline]
    fn vertex_index(&self, point: Point) -> usize {
        point.x as usize * (self.size + 1) + point.y as usize
    }
}
