// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the covering search.
//!
//! This module contains type-safe representations of the grid primitives:
//! - Point: a lattice vertex `(x, y)` with `0 <= x, y <= n`
//! - Path: an ordered sequence of points
//! - SquareSet: a runtime-sized bitset of unit squares (the coverage mask)
//! - Direction: one of the eight unit moves between lattice vertices

pub mod direction;
pub mod point;
pub mod square_set;

// Re-export for convenience
pub use direction::{Direction, DirectionOrder, DIRECTIONS, MAX_NEW_SQUARES};
pub use point::{Path, Point, SquareIndex};
pub use square_set::SquareSet;
