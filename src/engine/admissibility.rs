// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-grid-size move admissibility.
//!
//! A move is only worth making if it touches enough squares that are not yet
//! covered. The general rule compares the count against the direction's
//! threshold. The 3×3 grid has its own row in the table: its shortest covers
//! end with an orthogonal move that adds a single square.

use crate::geometry::Direction;

/// Which admissibility rule applies to a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admissibility {
    /// New squares must reach the direction's threshold (2 orthogonal, 3 diagonal).
    Standard,
    /// 3×3 grid: no diagonal moves; an orthogonal move must add at least one square.
    SmallGrid,
}

impl Admissibility {
    /// Look up the rule for an `size` × `size` grid.
    pub fn for_grid(size: usize) -> Self {
        match size {
            3 => Admissibility::SmallGrid,
            _ => Admissibility::Standard,
        }
    }

    /// True if a move in `direction` that newly covers `new_squares` squares is legal.
    #[inline]
    pub fn admits(self, direction: Direction, new_squares: usize) -> bool {
        match self {
            Admissibility::Standard => new_squares >= direction.threshold,
            Admissibility::SmallGrid => !direction.is_diagonal() && new_squares > 0,
        }
    }
}
