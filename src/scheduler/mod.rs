// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Distribution of seeds over worker threads.
//!
//! Seeds are assigned up front, round-robin: worker `i` of `w` searches seeds
//! `i`, `i + w`, `i + 2w`, and so on. There is no work stealing and no shared
//! queue; the only thing workers share while running is the
//! [`BestRegistry`]. Each worker keeps its own [`Statistics`], which are
//! summed once all workers have joined.

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::engine::SearchEngine;
use crate::error::{ConfigError, ConfigResult};
use crate::registry::{BestRegistry, Solution, SolutionObserver};
use crate::seeds::{self, Seed};
use crate::state::Statistics;
use log::{info, trace};
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

/// Fixed-size pool of scoped worker threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkScheduler {
    threads: usize,
}

impl WorkScheduler {
    /// A scheduler using at most `threads` workers (at least one).
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
        }
    }

    /// Workers actually started for `seeds` seeds.
    pub fn worker_count(&self, seeds: usize) -> usize {
        self.threads.min(seeds).max(1)
    }

    /// Indices of the seeds worker `worker` of `workers` is responsible for.
    pub fn assigned(worker: usize, workers: usize, seeds: usize) -> impl Iterator<Item = usize> {
        (worker..seeds).step_by(workers.max(1))
    }

    /// Search every seed and return the merged statistics and worker count.
    ///
    /// A panic in a worker is propagated to the caller once the scope ends.
    pub fn run(
        &self,
        ctx: &SearchContext,
        registry: &BestRegistry,
        seeds: &[Seed],
    ) -> ConfigResult<(Statistics, usize)> {
        if seeds.is_empty() {
            return Err(ConfigError::EmptySeedList);
        }
        let workers = self.worker_count(seeds.len());
        info!("searching {} seeds on {} threads", seeds.len(), workers);

        let results = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|worker| {
                    scope.spawn(move || {
                        let engine = SearchEngine::new(ctx, registry);
                        let mut stats = Statistics::new();
                        for index in Self::assigned(worker, workers, seeds.len()) {
                            engine.run_seed(&seeds[index], &mut stats);
                        }
                        trace!("worker {} finished", worker);
                        stats
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Vec<_>>()
        });

        let mut total = Statistics::new();
        for result in results {
            match result {
                Ok(stats) => total.merge(&stats),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        Ok((total, workers))
    }
}

/// Outcome of a complete run.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub size: usize,
    pub bound: usize,
    /// Best cover length, `None` when nothing within the bound exists.
    pub best: Option<usize>,
    /// Kept covers of the best length, in commit order.
    pub solutions: Vec<Solution>,
    /// Commits at the best length, including ones beyond the keep limit.
    pub solution_count: u64,
    /// Optimal covers distinct up to symmetry and reversal, over all commits.
    pub symmetry_classes: usize,
    pub statistics: Statistics,
    pub workers: usize,
    pub seeds: usize,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn found(&self) -> bool {
        self.best.is_some()
    }
}

/// Validate `config`, generate seeds and search them all.
///
/// `observer` sees every committed cover as it is found.
pub fn search(
    config: &SearchConfig,
    observer: Option<Box<dyn SolutionObserver>>,
) -> ConfigResult<SearchReport> {
    config.validate()?;
    let ctx = SearchContext::with_order(config.size(), config.order());
    let seeds = seeds::generate(&ctx, config.seeds(), config.forced_prefix(), config.unroll())?;
    search_seeds(config, &ctx, &seeds, observer)
}

/// Search an explicit seed list under the bound, keep limit and thread count
/// of `config`.
///
/// An empty seed list is a search with no covers, reported with no workers.
pub fn search_seeds(
    config: &SearchConfig,
    ctx: &SearchContext,
    seeds: &[Seed],
    observer: Option<Box<dyn SolutionObserver>>,
) -> ConfigResult<SearchReport> {
    config.validate()?;
    let start = Instant::now();
    let mut registry = BestRegistry::new(config.bound())
        .with_keep_limit(config.keep())
        .with_grid_size(config.size());
    if let Some(observer) = observer {
        registry = registry.with_observer(observer);
    }
    info!(
        "n={} bound={} mode={:?} seeds={}",
        config.size(),
        config.bound(),
        config.mode(),
        seeds.len()
    );

    let (statistics, workers) = if seeds.is_empty() {
        info!("no seeds survive unrolling; nothing to search");
        (Statistics::new(), 0)
    } else {
        WorkScheduler::new(config.thread_count()?).run(ctx, &registry, seeds)?
    };
    let outcome = registry.into_outcome();
    let elapsed = start.elapsed();
    info!("search finished in {:.3}s, best {:?}", elapsed.as_secs_f64(), outcome.best);

    Ok(SearchReport {
        size: config.size(),
        bound: config.bound(),
        best: outcome.best,
        solutions: outcome.solutions,
        solution_count: outcome.solution_count,
        symmetry_classes: outcome.symmetry_classes.unwrap_or(0),
        statistics,
        workers,
        seeds: seeds.len(),
        elapsed,
    })
}
