// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The move table.
//!
//! A move goes from a vertex to one of its eight neighbours. Each direction
//! carries the minimum number of previously uncovered squares the move has to
//! touch to be worth making: two for orthogonal moves, three for diagonal ones.
//! Three is also the most any single move can add, since the destination shares
//! at least one square with the vertex it came from.

use crate::geometry::Point;

/// Upper bound on the number of squares a single move can newly cover.
pub const MAX_NEW_SQUARES: usize = 3;

/// One of the eight unit moves between lattice vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
    /// Minimum newly covered squares for the move to be admissible.
    pub threshold: usize,
}

impl Direction {
    const fn diagonal(dx: i32, dy: i32) -> Self {
        Self { dx, dy, threshold: 3 }
    }

    const fn orthogonal(dx: i32, dy: i32) -> Self {
        Self { dx, dy, threshold: 2 }
    }

    pub const fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dy != 0
    }

    /// The direction that takes `from` to `to`, if they are neighbours.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        DIRECTIONS.into_iter().find(|d| d.dx == dx && d.dy == dy)
    }
}

/// All eight directions, diagonals first.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::diagonal(-1, 1),
    Direction::diagonal(-1, -1),
    Direction::diagonal(1, -1),
    Direction::diagonal(1, 1),
    Direction::orthogonal(0, -1),
    Direction::orthogonal(1, 0),
    Direction::orthogonal(0, 1),
    Direction::orthogonal(-1, 0),
];

/// Order in which the search engine tries the eight directions.
///
/// The order never changes which covers exist, only how early good bounds
/// are found and therefore how much of the tree gets pruned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionOrder {
    #[default]
    DiagonalsFirst,
    OrthogonalsFirst,
}

impl DirectionOrder {
    pub fn directions(self) -> [Direction; 8] {
        match self {
            DirectionOrder::DiagonalsFirst => DIRECTIONS,
            DirectionOrder::OrthogonalsFirst => {
                let mut directions = DIRECTIONS;
                directions.rotate_left(4);
                directions
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        for direction in DIRECTIONS {
            if direction.is_diagonal() {
                assert_eq!(direction.threshold, 3);
            } else {
                assert_eq!(direction.threshold, 2);
            }
            assert!(direction.threshold <= MAX_NEW_SQUARES);
        }
    }

    #[test]
    fn test_directions_are_distinct_unit_steps() {
        for (i, a) in DIRECTIONS.iter().enumerate() {
            assert!(a.dx.abs() <= 1 && a.dy.abs() <= 1);
            assert!(a.dx != 0 || a.dy != 0);
            for b in &DIRECTIONS[i + 1..] {
                assert_ne!((a.dx, a.dy), (b.dx, b.dy));
            }
        }
    }

    #[test]
    fn test_between() {
        let origin = Point::new(2, 2);
        for direction in DIRECTIONS {
            assert_eq!(Direction::between(origin, origin.step(direction)), Some(direction));
        }
        assert_eq!(Direction::between(origin, origin), None);
        assert_eq!(Direction::between(origin, Point::new(4, 2)), None);
    }

    #[test]
    fn test_orthogonals_first_order() {
        let directions = DirectionOrder::OrthogonalsFirst.directions();
        assert!(directions[..4].iter().all(|d| !d.is_diagonal()));
        assert!(directions[4..].iter().all(|d| d.is_diagonal()));
        assert_eq!(DirectionOrder::default().directions(), DIRECTIONS);
    }
}
