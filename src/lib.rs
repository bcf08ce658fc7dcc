// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Branch-and-bound search for short grid covers.
//!
//! An n×n grid of unit squares has an (n+1)×(n+1) lattice of vertices. A
//! vertex touches the (up to four) squares around it. A cover is a path of
//! vertices, each step one of the eight king moves, whose vertices together
//! touch every square. The search looks for the cover with the fewest moves.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed for a grid size and shared by every worker:
//! - Square adjacency mask of every vertex ([`memo::GridMemo`])
//! - Boundary table
//! - Move table and admissibility rule ([`context::SearchContext`])
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Owned by one worker and changed in place during search:
//! - Covered mask and current path ([`state::SearchFrame`]), restored by a
//!   guard when each move is undone
//! - Per-worker counters ([`state::Statistics`])
//!
//! The one piece of shared mutable state is the [`registry::BestRegistry`],
//! which holds the best length found so far and is used by every worker to
//! prune.
//!
//! # Search Algorithm
//!
//! 1. Seeds are generated: short validated partial paths, by default one
//!    per symmetry class of starting vertex, extended along a fixed opening.
//! 2. The [`scheduler::WorkScheduler`] deals seeds round-robin to worker
//!    threads.
//! 3. Each worker runs a depth-first [`engine::SearchEngine`] from each of its
//!    seeds, pruning with `moves + ceil(uncovered / 3) > best`.
//!
//! # Example
//!
//! ```
//! use grid_cover_search::{search, SearchConfig};
//!
//! let report = search(&SearchConfig::new(5).with_threads(Some(2)), None).unwrap();
//! assert_eq!(report.best, Some(10));
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod memo;
pub mod registry;
pub mod report;
pub mod scheduler;
pub mod seeds;
pub mod state;
pub mod symmetry;
pub mod validation;

// Re-export commonly used types
pub use config::{Mode, SearchConfig};
pub use context::SearchContext;
pub use engine::SearchEngine;
pub use error::ConfigError;
pub use registry::{BestRegistry, Solution, SolutionObserver};
pub use scheduler::{search, search_seeds, SearchReport, WorkScheduler};
pub use validation::{validate_path, PathViolation};
