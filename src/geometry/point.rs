// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice points and paths.
//!
//! A grid of size `n` has `n * n` unit squares and `(n + 1) * (n + 1)` lattice
//! vertices. A vertex `(x, y)` touches the up to four squares
//! `(x-1, y-1)`, `(x-1, y)`, `(x, y-1)` and `(x, y)`.
//!
//! # Examples
//!
//! ```
//! use grid_cover_search::geometry::{Path, Point};
//!
//! let path = Path::from(vec![Point::new(1, 1), Point::new(1, 2), Point::new(2, 2)]);
//! assert_eq!(path.moves(), 2);
//! assert_eq!(format!("{}", path), "(1,1)(1,2)(2,2)");
//! ```

use crate::geometry::Direction;
use std::fmt;

/// Linear index `x * n + y` of the square in column `x`, row `y`.
pub type SquareIndex = usize;

/// A lattice vertex.
///
/// Coordinates are signed so that a step in any direction can be taken from
/// any vertex; whether the result is inside the lattice is decided by the
/// grid model, not by the point itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The vertex one move away in the given direction.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        Self {
            x: self.x + direction.dx,
            y: self.y + direction.dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    /// Format a point as "(x,y)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// An ordered sequence of vertices. Its length is the number of moves,
/// one less than the number of vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<Point>);

impl Path {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Number of moves in the path (zero for a single vertex).
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Number of vertices in the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, point: Point) {
        self.0.push(point);
    }

    pub fn pop(&mut self) -> Option<Point> {
        self.0.pop()
    }

    pub fn first(&self) -> Option<Point> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.0.last().copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.0.iter()
    }

    /// The same vertices visited in the opposite order.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl From<&[(i32, i32)]> for Path {
    fn from(coordinates: &[(i32, i32)]) -> Self {
        Self(coordinates.iter().map(|&c| Point::from(c)).collect())
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    /// Format a path as the concatenation of its points, "(1,1)(1,2)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.0 {
            write!(f, "{}", point)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DIRECTIONS;

    #[test]
    fn test_step_in_every_direction() {
        let origin = Point::new(3, 3);
        for direction in DIRECTIONS {
            let next = origin.step(direction);
            assert_eq!((next.x - origin.x).abs().max((next.y - origin.y).abs()), 1);
        }
    }

    #[test]
    fn test_moves_counts_edges() {
        assert_eq!(Path::new().moves(), 0);
        assert_eq!(Path::from(vec![Point::new(1, 1)]).moves(), 0);
        let path = Path::from(&[(1, 1), (1, 2), (2, 2), (2, 1)][..]);
        assert_eq!(path.moves(), 3);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_push_pop() {
        let mut path = Path::with_capacity(4);
        assert!(path.is_empty());
        path.push(Point::new(1, 1));
        path.push(Point::new(2, 2));
        assert_eq!(path.last(), Some(Point::new(2, 2)));
        assert_eq!(path.pop(), Some(Point::new(2, 2)));
        assert_eq!(path.first(), Some(Point::new(1, 1)));
    }

    #[test]
    fn test_reversed() {
        let path = Path::from(&[(1, 1), (1, 2), (2, 2)][..]);
        let reversed = path.reversed();
        assert_eq!(reversed.points(), &[Point::new(2, 2), Point::new(1, 2), Point::new(1, 1)]);
        assert_eq!(reversed.reversed(), path);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Point::new(4, 0)), "(4,0)");
        assert_eq!(format!("{}", Path::new()), "");
        let path = Path::from(&[(1, 1), (1, 2)][..]);
        assert_eq!(format!("{}", path), "(1,1)(1,2)");
    }
}
