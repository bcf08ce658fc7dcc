// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The best-result registry shared by all search workers.
//!
//! # Sharing discipline
//!
//! - Reads of the best length are a single relaxed atomic load. A worker may
//!   see a value that is one update old; that only means it explores a branch
//!   a fresher value would have pruned.
//! - Commits go through a mutex and re-check the best length under the lock,
//!   so a path found against a stale value can never replace a shorter one
//!   committed in between.
//! - Paths of the same length as the best are accepted too, so every optimal
//!   cover is reported, not just the first.
//!
//! The best length only ever decreases during a run.
//!
//! # Example
//!
//! ```
//! use grid_cover_search::geometry::Path;
//! use grid_cover_search::registry::BestRegistry;
//!
//! let registry = BestRegistry::new(10);
//! let path = Path::from(&[(1, 1), (1, 2), (2, 2), (2, 1)][..]);
//! assert!(registry.try_commit(3, &path));
//! assert_eq!(registry.best(), 3);
//! assert!(!registry.try_commit(4, &path)); // longer than the best
//! ```

use crate::geometry::Path;
use crate::symmetry::canonical;
use log::info;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Default number of distinct optimal paths kept in memory.
pub const DEFAULT_KEEP_LIMIT: usize = 64;

/// A complete cover and its length in moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub length: usize,
    pub path: Path,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "New best: {}, Path: {}", self.length, self.path)
    }
}

/// Receives every committed solution, in commit order.
///
/// Called while the registry lock is held, so implementations see commits
/// one at a time and must not call back into the registry.
pub trait SolutionObserver: Send + Sync {
    /// `improved` is true when the solution is strictly shorter than any
    /// previously committed one (or is the first).
    fn on_solution(&self, solution: &Solution, improved: bool);
}

impl<T: SolutionObserver + ?Sized> SolutionObserver for std::sync::Arc<T> {
    fn on_solution(&self, solution: &Solution, improved: bool) {
        (**self).on_solution(solution, improved);
    }
}

/// Everything the registry knows after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOutcome {
    /// Length of the best cover, `None` if nothing was found within the bound.
    pub best: Option<usize>,
    /// Up to the keep limit of distinct paths of that length.
    pub solutions: Vec<Solution>,
    /// Number of commits at the best length, including ones not kept.
    pub solution_count: u64,
    /// Commits at the best length that are distinct up to symmetry and
    /// reversal, counted over every commit rather than only the kept paths.
    /// `None` unless the registry was given a grid size.
    pub symmetry_classes: Option<usize>,
}

#[derive(Debug, Default)]
struct Committed {
    solutions: Vec<Solution>,
    count: u64,
    classes: BTreeSet<Path>,
}

/// Process-wide best length and winning paths.
pub struct BestRegistry {
    best: AtomicUsize,
    found: AtomicBool,
    keep_limit: usize,
    grid_size: Option<usize>,
    committed: Mutex<Committed>,
    observer: Option<Box<dyn SolutionObserver>>,
}

impl BestRegistry {
    /// Create a registry whose starting ceiling is `initial_bound`.
    ///
    /// Covers of length up to and including the bound are accepted.
    pub fn new(initial_bound: usize) -> Self {
        Self {
            best: AtomicUsize::new(initial_bound),
            found: AtomicBool::new(false),
            keep_limit: DEFAULT_KEEP_LIMIT,
            grid_size: None,
            committed: Mutex::new(Committed::default()),
            observer: None,
        }
    }

    /// Keep at most `limit` distinct paths of the best length.
    pub fn with_keep_limit(mut self, limit: usize) -> Self {
        self.keep_limit = limit;
        self
    }

    /// Track symmetry classes of committed paths on a grid of this size.
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = Some(size);
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn SolutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Current best length (or the initial bound if nothing was found yet).
    #[inline]
    pub fn best(&self) -> usize {
        self.best.load(Ordering::Relaxed)
    }

    /// True once any cover has been committed.
    pub fn found(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }

    /// Offer a complete cover of `length` moves.
    ///
    /// Returns true if it was recorded, i.e. `length` was still no longer than
    /// the best when checked under the lock.
    pub fn try_commit(&self, length: usize, path: &Path) -> bool {
        if length > self.best() {
            return false;
        }

        let mut committed = self.lock();
        let current = self.best.load(Ordering::Relaxed);
        if length > current {
            return false;
        }

        let improved = length < current || !self.found.load(Ordering::Relaxed);
        if length < current {
            committed.solutions.clear();
            committed.classes.clear();
            committed.count = 0;
        }
        self.best.store(length, Ordering::Release);
        self.found.store(true, Ordering::Release);
        committed.count += 1;
        if let Some(size) = self.grid_size {
            committed.classes.insert(canonical(size, path));
        }

        let solution = Solution {
            length,
            path: path.clone(),
        };
        if improved {
            info!("new best length {} ({})", length, path);
        }
        if let Some(observer) = &self.observer {
            observer.on_solution(&solution, improved);
        }
        if committed.solutions.len() < self.keep_limit
            && !committed.solutions.iter().any(|s| s.path == solution.path)
        {
            committed.solutions.push(solution);
        }
        true
    }

    /// Number of commits at the current best length.
    pub fn solution_count(&self) -> u64 {
        self.lock().count
    }

    /// Distinct symmetry classes among all commits at the current best
    /// length, if a grid size was given.
    pub fn symmetry_classes(&self) -> Option<usize> {
        let classes = self.lock().classes.len();
        self.grid_size.map(|_| classes)
    }

    /// Copies of the kept paths of the current best length.
    pub fn solutions(&self) -> Vec<Solution> {
        self.lock().solutions.clone()
    }

    pub fn into_outcome(self) -> RegistryOutcome {
        let found = self.found();
        let best = self.best();
        let committed = self
            .committed
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        RegistryOutcome {
            best: found.then_some(best),
            solutions: committed.solutions,
            solution_count: committed.count,
            symmetry_classes: self.grid_size.map(|_| committed.classes.len()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Committed> {
        // The solution list is only appended to after the length is stored,
        // so a poisoned lock still guards consistent data.
        self.committed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for BestRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BestRegistry")
            .field("best", &self.best())
            .field("found", &self.found())
            .field("keep_limit", &self.keep_limit)
            .field("grid_size", &self.grid_size)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn path(points: &[(i32, i32)]) -> Path {
        Path::from(points)
    }

    #[test]
    fn test_initial_state() {
        let registry = BestRegistry::new(25);
        assert_eq!(registry.best(), 25);
        assert!(!registry.found());
        assert_eq!(registry.solution_count(), 0);
        assert_eq!(registry.into_outcome().best, None);
    }

    #[test]
    fn test_commit_at_bound_is_accepted() {
        let registry = BestRegistry::new(3);
        assert!(registry.try_commit(3, &path(&[(1, 1), (1, 2), (2, 2), (2, 1)])));
        assert!(registry.found());
        assert_eq!(registry.best(), 3);
    }

    #[test]
    fn test_longer_commit_rejected() {
        let registry = BestRegistry::new(5);
        assert!(registry.try_commit(4, &path(&[(1, 1)])));
        assert!(!registry.try_commit(5, &path(&[(2, 2)])));
        assert_eq!(registry.best(), 4);
        assert_eq!(registry.solution_count(), 1);
    }

    #[test]
    fn test_equal_commits_are_all_recorded() {
        let registry = BestRegistry::new(10);
        assert!(registry.try_commit(6, &path(&[(1, 1)])));
        assert!(registry.try_commit(6, &path(&[(2, 1)])));
        assert!(registry.try_commit(6, &path(&[(2, 2)])));
        assert_eq!(registry.solution_count(), 3);
        assert_eq!(registry.solutions().len(), 3);
    }

    #[test]
    fn test_shorter_commit_clears_previous() {
        let registry = BestRegistry::new(10);
        registry.try_commit(8, &path(&[(1, 1)]));
        registry.try_commit(8, &path(&[(2, 1)]));
        registry.try_commit(7, &path(&[(3, 1)]));
        let outcome = registry.into_outcome();
        assert_eq!(outcome.best, Some(7));
        assert_eq!(outcome.solution_count, 1);
        assert_eq!(outcome.solutions[0].path, path(&[(3, 1)]));
    }

    #[test]
    fn test_keep_limit_caps_stored_paths() {
        let registry = BestRegistry::new(10).with_keep_limit(2);
        for x in 1..=5 {
            assert!(registry.try_commit(5, &path(&[(x, 1)])));
        }
        assert_eq!(registry.solution_count(), 5);
        assert_eq!(registry.solutions().len(), 2);
    }

    #[test]
    fn test_duplicate_path_counted_once_in_storage() {
        let registry = BestRegistry::new(10);
        registry.try_commit(5, &path(&[(1, 1)]));
        registry.try_commit(5, &path(&[(1, 1)]));
        assert_eq!(registry.solution_count(), 2);
        assert_eq!(registry.solutions().len(), 1);
    }

    #[test]
    fn test_symmetry_classes_ignore_keep_limit() {
        // Two images of one 3×3 cover and one genuinely different cover
        let a = path(&[(1, 1), (1, 2), (2, 2), (2, 1)]);
        let b = path(&[(2, 2), (2, 1), (1, 1), (1, 2)]);
        let c = path(&[(1, 1), (2, 1), (2, 2)]);
        let registry = BestRegistry::new(9).with_keep_limit(1).with_grid_size(3);
        for p in [&a, &b, &c] {
            assert!(registry.try_commit(3, p));
        }
        assert_eq!(registry.solutions().len(), 1);
        assert_eq!(registry.symmetry_classes(), Some(2));
        let outcome = registry.into_outcome();
        assert_eq!(outcome.solution_count, 3);
        assert_eq!(outcome.symmetry_classes, Some(2));
    }

    #[test]
    fn test_shorter_commit_resets_symmetry_classes() {
        let registry = BestRegistry::new(10).with_grid_size(4);
        registry.try_commit(8, &path(&[(1, 1)]));
        registry.try_commit(8, &path(&[(2, 1)]));
        assert_eq!(registry.symmetry_classes(), Some(2));
        registry.try_commit(7, &path(&[(3, 3)]));
        assert_eq!(registry.symmetry_classes(), Some(1));
        assert_eq!(BestRegistry::new(10).symmetry_classes(), None);
    }

    struct Recording(Mutex<Vec<(usize, bool)>>);

    impl SolutionObserver for Recording {
        fn on_solution(&self, solution: &Solution, improved: bool) {
            self.0.lock().unwrap().push((solution.length, improved));
        }
    }

    #[test]
    fn test_observer_sees_commits_in_order() {
        let recording = Arc::new(Recording(Mutex::new(Vec::new())));
        let registry = BestRegistry::new(10).with_observer(Box::new(Arc::clone(&recording)));
        registry.try_commit(9, &path(&[(1, 1)]));
        registry.try_commit(9, &path(&[(1, 2)]));
        registry.try_commit(11, &path(&[(1, 3)]));
        registry.try_commit(7, &path(&[(1, 4)]));
        let seen = recording.0.lock().unwrap().clone();
        assert_eq!(seen, vec![(9, true), (9, false), (7, true)]);
    }

    #[test]
    fn test_display_solution() {
        let solution = Solution {
            length: 1,
            path: path(&[(1, 1), (2, 2)]),
        };
        assert_eq!(format!("{}", solution), "New best: 1, Path: (1,1)(2,2)");
    }
}
