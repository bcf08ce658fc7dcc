// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use grid_cover_search::context::SearchContext;
use grid_cover_search::registry::{Solution, SolutionObserver};
use grid_cover_search::{search, validate_path, SearchConfig, SearchReport};
use std::sync::Mutex;

/// Known shortest cover lengths, indexed by grid size.
pub const OPTIMA: [(usize, usize); 6] = [(1, 0), (2, 0), (3, 3), (4, 6), (5, 10), (6, 14)];

/// Run a search and panic on configuration errors.
pub fn run(config: SearchConfig) -> SearchReport {
    search(&config, None).unwrap_or_else(|e| panic!("search failed: {}", e))
}

/// Every kept solution must independently validate at the reported length.
pub fn assert_solutions_valid(report: &SearchReport) {
    let ctx = SearchContext::new(report.size);
    for solution in &report.solutions {
        assert_eq!(
            validate_path(&ctx, &solution.path),
            Ok(solution.length),
            "n={} path {}",
            report.size,
            solution.path
        );
        assert_eq!(Some(solution.length), report.best);
    }
}

/// An observer that records every commit it sees.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub seen: Mutex<Vec<(usize, bool)>>,
}

impl SolutionObserver for RecordingObserver {
    fn on_solution(&self, solution: &Solution, improved: bool) {
        self.seen.lock().unwrap().push((solution.length, improved));
    }
}
