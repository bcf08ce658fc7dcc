// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SquareSet type for representing sets of grid squares as bitsets.
//!
//! A SquareSet is sized at runtime to the `n * n` squares of the grid, so a
//! single build handles every grid size. Bit `i` is set when the square with
//! linear index `i` is in the set. Up to 256 squares (n <= 16) are stored
//! inline without touching the heap.
//!
//! # Examples
//!
//! ```
//! use grid_cover_search::geometry::SquareSet;
//!
//! let mut covered = SquareSet::empty(9);
//! covered.insert(0);
//! covered.insert(4);
//!
//! let touched = SquareSet::from_indices(9, &[0, 1, 3, 4]);
//! let added = touched.difference(&covered);
//! assert_eq!(added.count(), 2);
//! assert_eq!(format!("{}", added), "{1,3}");
//! ```

use crate::geometry::SquareIndex;
use smallvec::SmallVec;
use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// A set of squares represented as a bitset over `len` squares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SquareSet {
    words: SmallVec<[u64; 4]>,
    len: usize,
}

impl SquareSet {
    /// Create an empty set over `len` squares.
    pub fn empty(len: usize) -> Self {
        let mut words = SmallVec::new();
        words.resize(len.div_ceil(WORD_BITS), 0);
        Self { words, len }
    }

    /// Create a set containing all `len` squares.
    pub fn full(len: usize) -> Self {
        let mut set = Self::empty(len);
        for word in set.words.iter_mut() {
            *word = u64::MAX;
        }
        set.clear_padding();
        set
    }

    /// Create a set from a slice of square indices.
    pub fn from_indices(len: usize, indices: &[SquareIndex]) -> Self {
        let mut set = Self::empty(len);
        for &index in indices {
            set.insert(index);
        }
        set
    }

    /// Number of squares the set ranges over (not the number present).
    pub fn universe(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn contains(&self, index: SquareIndex) -> bool {
        self.check(index);
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 != 0
    }

    #[inline]
    pub fn insert(&mut self, index: SquareIndex) {
        self.check(index);
        self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    #[inline]
    pub fn remove(&mut self, index: SquareIndex) {
        self.check(index);
        self.words[index / WORD_BITS] &= !(1 << (index % WORD_BITS));
    }

    /// Number of squares in the set (population count).
    #[inline]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// True when every square of the universe is present.
    pub fn is_full(&self) -> bool {
        self.count() == self.len
    }

    /// Add every square of `other` to this set.
    #[inline]
    pub fn union_with(&mut self, other: &SquareSet) {
        debug_assert_eq!(self.len, other.len);
        for (word, &bits) in self.words.iter_mut().zip(other.words.iter()) {
            *word |= bits;
        }
    }

    /// Remove every square of `other` from this set.
    #[inline]
    pub fn subtract(&mut self, other: &SquareSet) {
        debug_assert_eq!(self.len, other.len);
        for (word, &bits) in self.words.iter_mut().zip(other.words.iter()) {
            *word &= !bits;
        }
    }

    /// The squares of `self` that are not in `other`.
    #[inline]
    pub fn difference(&self, other: &SquareSet) -> SquareSet {
        let mut result = self.clone();
        result.subtract(other);
        result
    }

    pub fn is_disjoint(&self, other: &SquareSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(&a, &b)| a & b == 0)
    }

    /// Iterate over the squares in the set in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = SquareIndex> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(w * WORD_BITS + bit)
            })
        })
    }

    fn clear_padding(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }

    #[inline]
    fn check(&self, index: SquareIndex) {
        assert!(
            index < self.len,
            "square index {} out of range for {} squares",
            index,
            self.len
        );
    }
}

impl fmt::Display for SquareSet {
    /// Format a square set as "{0,4,8}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, index) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = SquareSet::empty(64);
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert_eq!(set.universe(), 64);
        assert!(!set.is_full());
    }

    #[test]
    fn test_full_respects_universe() {
        for len in [1, 4, 9, 63, 64, 65, 100, 256, 300] {
            let set = SquareSet::full(len);
            assert_eq!(set.count(), len, "len {}", len);
            assert!(set.is_full());
        }
    }

    #[test]
    fn test_insert_contains_remove() {
        let mut set = SquareSet::empty(100);
        set.insert(0);
        set.insert(63);
        set.insert(64);
        set.insert(99);
        assert!(set.contains(63));
        assert!(set.contains(64));
        assert!(!set.contains(65));
        assert_eq!(set.count(), 4);

        set.remove(63);
        set.remove(63); // Remove again - should be idempotent
        assert!(!set.contains(63));
        assert_eq!(set.count(), 3);
    }

    #[test]
    fn test_union_and_subtract_restore() {
        let mut mask = SquareSet::from_indices(16, &[0, 1, 4, 5]);
        let original = mask.clone();
        let touched = SquareSet::from_indices(16, &[5, 6, 9, 10]);

        let added = touched.difference(&mask);
        assert_eq!(added.count(), 3);
        assert!(added.is_disjoint(&mask));

        mask.union_with(&touched);
        assert_eq!(mask.count(), 7);

        mask.subtract(&added);
        assert_eq!(mask, original);
    }

    #[test]
    fn test_iter_ascending() {
        let set = SquareSet::from_indices(200, &[150, 3, 64, 0, 199]);
        let indices: Vec<_> = set.iter().collect();
        assert_eq!(indices, vec![0, 3, 64, 150, 199]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SquareSet::empty(4)), "{}");
        assert_eq!(format!("{}", SquareSet::full(4)), "{0,1,2,3}");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_index_panics() {
        let mut set = SquareSet::empty(9);
        set.insert(9);
    }
}
