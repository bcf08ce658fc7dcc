// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Independent checking of paths.
//!
//! These checks recompute everything from the grid model instead of trusting
//! the search frame: the mask is rebuilt by unioning adjacency masks, and
//! every step is re-derived from the two vertices it joins.

use crate::context::{Rejection, SearchContext};
use crate::geometry::{Direction, Path, Point, SquareSet};
use thiserror::Error;

/// The first rule a path breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathViolation {
    #[error("path has no vertices")]
    Empty,

    #[error("vertex {index} {point} is outside the lattice")]
    OutsideLattice { index: usize, point: Point },

    #[error("vertex {index} {point} is on the boundary")]
    OnBoundary { index: usize, point: Point },

    #[error("step {index} from {from} to {to} is not a single move")]
    NotAdjacent { index: usize, from: Point, to: Point },

    #[error("step {index} from {from} to {to} covers {new_squares} new squares, below the threshold")]
    Inadmissible {
        index: usize,
        from: Point,
        to: Point,
        new_squares: usize,
    },

    #[error("{missing} squares left uncovered")]
    Uncovered { missing: usize },
}

/// Check that `path` is a legal partial path and return the mask it covers.
///
/// Every vertex must lie in the lattice and, for grids of size two or more,
/// off the outer ring. Every step must be one of the eight moves and be
/// admissible against the squares covered before it.
pub fn check_prefix(ctx: &SearchContext, path: &Path) -> Result<SquareSet, PathViolation> {
    let memo = &ctx.memo;
    let first = path.first().ok_or(PathViolation::Empty)?;
    check_vertex(ctx, 0, first)?;

    let mut mask = memo.adjacency(first).clone();
    for (index, pair) in path.points().windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        check_vertex(ctx, index + 1, to)?;
        let direction =
            Direction::between(from, to).ok_or(PathViolation::NotAdjacent { index, from, to })?;
        match ctx.extend(from, &mask, direction) {
            Ok((_, added)) => mask.union_with(&added),
            Err(Rejection::Boundary) => {
                return Err(PathViolation::OnBoundary {
                    index: index + 1,
                    point: to,
                })
            }
            Err(Rejection::Inadmissible { new_squares }) => {
                return Err(PathViolation::Inadmissible {
                    index,
                    from,
                    to,
                    new_squares,
                })
            }
        }
    }
    Ok(mask)
}

/// Check that `path` is a legal complete cover and return its length in moves.
pub fn validate_path(ctx: &SearchContext, path: &Path) -> Result<usize, PathViolation> {
    let mask = check_prefix(ctx, path)?;
    debug_assert_eq!(mask, ctx.memo.mask_of(path));
    let missing = ctx.memo.total_squares() - mask.count();
    if missing > 0 {
        return Err(PathViolation::Uncovered { missing });
    }
    Ok(path.moves())
}

fn check_vertex(ctx: &SearchContext, index: usize, point: Point) -> Result<(), PathViolation> {
    if !ctx.memo.contains(point) {
        return Err(PathViolation::OutsideLattice { index, point });
    }
    // On a single square grid every vertex is on the ring
    if ctx.size() > 1 && ctx.memo.is_boundary(point) {
        return Err(PathViolation::OnBoundary { index, point });
    }
    Ok(())
}
