// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Seeds: the independent units of work handed to the scheduler.
//!
//! A seed is a short, validated partial path. The search engine does not care
//! how a seed was produced; this module provides the usual ways:
//!
//! - `octant_starts`: one starting vertex per symmetry class, using the
//!   eight-fold symmetry of the square grid
//! - `all_starts`: every interior vertex, with no symmetry assumption
//! - `force_obvious_moves`: extend starts along a fixed opening that is known
//!   to begin an optimal cover
//! - `unroll`: replace each seed by all of its admissible one-move
//!   continuations, to get more seeds for load balancing

use crate::context::SearchContext;
use crate::error::{ConfigError, ConfigResult};
use crate::geometry::{Direction, Path, Point};
use crate::state::SearchFrame;
use crate::validation::check_prefix;
use log::debug;

/// A validated partial path from which a search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    path: Path,
}

impl Seed {
    /// Validate `path` against the grid and admissibility rule of `ctx`.
    pub fn new(ctx: &SearchContext, path: Path) -> ConfigResult<Self> {
        Self::at(ctx, 0, path)
    }

    fn at(ctx: &SearchContext, index: usize, path: Path) -> ConfigResult<Self> {
        check_prefix(ctx, &path).map_err(|violation| ConfigError::InvalidSeed { index, violation })?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Moves already made by the seed.
    pub fn moves(&self) -> usize {
        self.path.moves()
    }
}

/// How starting vertices are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedStrategy {
    /// One vertex per symmetry class, from a single octant of the grid.
    #[default]
    Octant,
    /// Every interior vertex.
    Exhaustive,
}

/// Starting vertices restricted to one octant of the grid.
///
/// Takes `x` in `1..=n/2` and `y` in `1..=x`, skipping the central vertex
/// `(n/2, n/2)` for `n > 3` and the vertex `(2, 2)`. Grids smaller than
/// three get the single vertex `(1, 1)`.
pub fn octant_starts(size: usize) -> Vec<Point> {
    if size < 3 {
        return vec![Point::new(1, 1)];
    }
    let max_x = (size / 2) as i32;
    let mut starts = Vec::new();
    for x in 1..=max_x {
        for y in 1..=x {
            let centre = size > 3 && x == max_x && y == max_x;
            if centre || (x == 2 && y == 2) {
                continue;
            }
            starts.push(Point::new(x, y));
        }
    }
    starts
}

/// Every interior vertex; `(1, 1)` alone for grids smaller than three.
pub fn all_starts(size: usize) -> Vec<Point> {
    if size < 3 {
        return vec![Point::new(1, 1)];
    }
    let side = size as i32;
    (1..side)
        .flat_map(|x| (1..side).map(move |y| Point::new(x, y)))
        .collect()
}

/// Extend each single-vertex start along the fixed opening.
///
/// A start on row 2 first steps down to row 1. From row 1, starts in columns
/// one to four follow the chain `(3,2) → (2,1) → (1,1) → (1,2)` from the
/// point matching their column. The opening stops early at the first move
/// that would not be admissible. Grids smaller than three are left alone.
pub fn force_obvious_moves(ctx: &SearchContext, paths: &mut [Path]) {
    if ctx.size() < 3 {
        return;
    }
    const CHAIN: [(i32, i32); 4] = [(3, 2), (2, 1), (1, 1), (1, 2)];

    for path in paths.iter_mut() {
        let Some(Point { x, y }) = path.last() else {
            continue;
        };
        let mut opening = Vec::new();
        if y == 2 {
            opening.push(Point::new(x, 1));
        }
        if y == 1 || y == 2 {
            let skip = match x {
                4 => 0,
                3 => 1,
                2 => 2,
                1 => 3,
                _ => CHAIN.len(),
            };
            opening.extend(CHAIN[skip..].iter().map(|&step| Point::from(step)));
        }

        let mut mask = ctx.memo.mask_of(path);
        for next in opening {
            let Some(head) = path.last() else { break };
            let Some(direction) = Direction::between(head, next) else {
                break;
            };
            match ctx.extend(head, &mask, direction) {
                Ok((dest, added)) => {
                    mask.union_with(&added);
                    path.push(dest);
                }
                Err(_) => {
                    debug!("opening from {} stops before {}", path, next);
                    break;
                }
            }
        }
    }
}

/// Replace every incomplete seed by all its admissible one-move extensions,
/// `levels` times. Seeds that already cover the grid are kept as they are.
pub fn unroll(ctx: &SearchContext, seeds: Vec<Seed>, levels: usize) -> Vec<Seed> {
    let mut current = seeds;
    for level in 0..levels {
        let mut next = Vec::with_capacity(current.len() * 4);
        for seed in current {
            let frame = SearchFrame::new(&ctx.memo, seed.path());
            if frame.covered() == ctx.memo.total_squares() {
                next.push(seed);
                continue;
            }
            for &direction in &ctx.directions {
                if let Ok((dest, _)) = ctx.extend(frame.head(), frame.mask(), direction) {
                    let mut path = seed.path.clone();
                    path.push(dest);
                    next.push(Seed { path });
                }
            }
        }
        debug!("unrolled level {}: {} seeds", level + 1, next.len());
        current = next;
    }
    current
}

/// Build and validate the seed list for a run.
///
/// Fails if a start is not a legal prefix or there are no starts at all. The
/// list may still come back empty after unrolling.
pub fn generate(
    ctx: &SearchContext,
    strategy: SeedStrategy,
    forced_prefix: bool,
    unroll_levels: usize,
) -> ConfigResult<Vec<Seed>> {
    let size = ctx.size();
    let starts = match strategy {
        SeedStrategy::Octant => octant_starts(size),
        SeedStrategy::Exhaustive => all_starts(size),
    };
    let mut paths: Vec<Path> = starts.into_iter().map(|p| Path::from(vec![p])).collect();
    if forced_prefix {
        force_obvious_moves(ctx, &mut paths);
    }

    let seeds = paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| Seed::at(ctx, index, path))
        .collect::<ConfigResult<Vec<_>>>()?;
    if seeds.is_empty() {
        return Err(ConfigError::EmptySeedList);
    }

    // Unrolling may leave nothing when every seed is a dead end. That is a
    // search with no covers, not a configuration error.
    let seeds = unroll(ctx, seeds, unroll_levels);
    debug!("{} seeds for n={}", seeds.len(), size);
    Ok(seeds)
}
