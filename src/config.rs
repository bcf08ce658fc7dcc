// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! A [`SearchConfig`] is built with chained `with_*` calls and checked by
//! [`SearchConfig::validate`] before any search state is created.
//!
//! ```
//! use grid_cover_search::config::{Mode, SearchConfig};
//!
//! let config = SearchConfig::new(6).with_bound(14).with_mode(Mode::Prove);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.bound(), 14);
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::geometry::DirectionOrder;
use crate::registry::DEFAULT_KEEP_LIMIT;
use crate::seeds::SeedStrategy;
use std::num::NonZeroUsize;
use std::thread;

/// Largest supported grid side.
pub const MAX_GRID_SIZE: usize = 64;

/// What a run is trying to establish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Report the shortest cover no longer than the bound.
    #[default]
    Find,
    /// Establish whether any cover no longer than the bound exists.
    Prove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    size: usize,
    bound: Option<usize>,
    mode: Mode,
    threads: Option<usize>,
    seeds: SeedStrategy,
    forced_prefix: bool,
    unroll: usize,
    order: DirectionOrder,
    keep: usize,
}

impl SearchConfig {
    /// Defaults: bound of `size * size` moves, octant seeds with the forced
    /// opening, one thread per available core.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            bound: None,
            mode: Mode::Find,
            threads: None,
            seeds: SeedStrategy::Octant,
            forced_prefix: true,
            unroll: 0,
            order: DirectionOrder::default(),
            keep: DEFAULT_KEEP_LIMIT,
        }
    }

    /// Longest cover, in moves, that will be accepted.
    pub fn with_bound(mut self, bound: usize) -> Self {
        self.bound = Some(bound);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Worker thread limit; `None` uses the available parallelism.
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_seeds(mut self, seeds: SeedStrategy) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn with_forced_prefix(mut self, forced_prefix: bool) -> Self {
        self.forced_prefix = forced_prefix;
        self
    }

    /// Split every seed into its one-move continuations this many times.
    pub fn with_unroll(mut self, levels: usize) -> Self {
        self.unroll = levels;
        self
    }

    pub fn with_order(mut self, order: DirectionOrder) -> Self {
        self.order = order;
        self
    }

    /// Number of optimal paths kept for reporting.
    pub fn with_keep(mut self, keep: usize) -> Self {
        self.keep = keep;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn bound(&self) -> usize {
        self.bound.unwrap_or(self.size * self.size)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn seeds(&self) -> SeedStrategy {
        self.seeds
    }

    pub fn forced_prefix(&self) -> bool {
        self.forced_prefix
    }

    pub fn unroll(&self) -> usize {
        self.unroll
    }

    pub fn order(&self) -> DirectionOrder {
        self.order
    }

    pub fn keep(&self) -> usize {
        self.keep
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.threads == Some(0) {
            return Err(ConfigError::NoParallelism);
        }
        Ok(())
    }

    /// Requested thread count, or the machine's available parallelism.
    pub fn thread_count(&self) -> ConfigResult<usize> {
        match self.threads {
            Some(0) => Err(ConfigError::NoParallelism),
            Some(n) => Ok(n),
            None => thread::available_parallelism()
                .map(NonZeroUsize::get)
                .map_err(|_| ConfigError::NoParallelism),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::new(5);
        assert_eq!(config.bound(), 25);
        assert_eq!(config.mode(), Mode::Find);
        assert_eq!(config.seeds(), SeedStrategy::Octant);
        assert!(config.forced_prefix());
        assert_eq!(config.unroll(), 0);
        assert_eq!(config.order(), DirectionOrder::DiagonalsFirst);
        assert_eq!(config.keep(), DEFAULT_KEEP_LIMIT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::new(8)
            .with_bound(25)
            .with_mode(Mode::Prove)
            .with_threads(Some(3))
            .with_seeds(SeedStrategy::Exhaustive)
            .with_forced_prefix(false)
            .with_unroll(2)
            .with_order(DirectionOrder::OrthogonalsFirst)
            .with_keep(4);
        assert_eq!(config.bound(), 25);
        assert_eq!(config.mode(), Mode::Prove);
        assert_eq!(config.thread_count(), Ok(3));
        assert_eq!(config.seeds(), SeedStrategy::Exhaustive);
        assert!(!config.forced_prefix());
        assert_eq!(config.unroll(), 2);
        assert_eq!(config.order(), DirectionOrder::OrthogonalsFirst);
        assert_eq!(config.keep(), 4);
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        assert_eq!(SearchConfig::new(0).validate(), Err(ConfigError::ZeroGridSize));
        assert_eq!(
            SearchConfig::new(65).validate(),
            Err(ConfigError::GridTooLarge { size: 65, max: 64 })
        );
        assert!(SearchConfig::new(64).validate().is_ok());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = SearchConfig::new(4).with_threads(Some(0));
        assert_eq!(config.validate(), Err(ConfigError::NoParallelism));
        assert_eq!(config.thread_count(), Err(ConfigError::NoParallelism));
    }

    #[test]
    fn test_available_parallelism_is_positive() {
        assert!(SearchConfig::new(4).thread_count().unwrap() >= 1);
    }
}
