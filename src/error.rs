// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Errors reported before a search starts.
//!
//! Once the search is running there is nothing left to fail: all indices come
//! from validated vertices, and anything inconsistent after that point is a
//! bug, caught by assertions rather than returned.

use crate::validation::PathViolation;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be positive")]
    ZeroGridSize,

    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },

    #[error("no seeds to search")]
    EmptySeedList,

    #[error("no worker threads available")]
    NoParallelism,

    #[error("seed {index} is invalid: {violation}")]
    InvalidSeed {
        index: usize,
        #[source]
        violation: PathViolation,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
