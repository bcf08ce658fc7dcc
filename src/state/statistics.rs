// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Each worker keeps its own counters while it searches; the scheduler adds
//! them together once all workers have finished.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{AsRefStr, EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, AsRefStr, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Calls to `explore`.
    Nodes,
    /// Branches abandoned because the lower bound exceeded the best length.
    BoundPrunes,
    /// Candidate moves onto the outer ring.
    BoundaryRejects,
    /// Candidate moves that did not cover enough new squares.
    InadmissibleRejects,
    /// Complete covers reached.
    CompleteCovers,
    /// Complete covers accepted by the registry.
    Commits,
    /// Seeds searched to exhaustion.
    Seeds,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Add another worker's counters into this one.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }

    /// All counters with their snake_case names.
    pub fn entries(&self) -> impl Iterator<Item = (Counters, u64)> + '_ {
        Counters::iter().map(move |counter| (counter, self.get(counter)))
    }
}
