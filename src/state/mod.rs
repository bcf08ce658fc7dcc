// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DYNAMIC state (mutable, owned by one worker).
//!
//! - `frame`: the coverage mask and path of the search in progress, mutated
//!   in place on descent and restored on backtrack
//! - `statistics`: per-worker search counters
//!
//! Neither is ever shared between threads.

pub mod frame;
pub mod statistics;

pub use frame::{SearchFrame, Step};
pub use statistics::{Counters, Statistics};
