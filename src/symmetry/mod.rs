// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetries of the square grid.
//!
//! The dihedral group of the square has eight elements: four rotations and
//! four reflections. Each maps lattice vertices to lattice vertices, maps
//! interior vertices to interior vertices and preserves the move table, so
//! the image of a cover is again a cover of the same length. This is what
//! allows the search to start from a single octant.
//!
//! Solutions are also compared up to symmetry (and reversal) when reporting
//! how many genuinely different optimal covers were found.

use crate::geometry::{Path, Point};
use std::collections::BTreeSet;
use strum_macros::EnumIter;

/// One element of the dihedral group of the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Symmetry {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    /// Reflect in the vertical axis: `x ↦ n - x`.
    FlipX,
    /// Reflect in the horizontal axis: `y ↦ n - y`.
    FlipY,
    /// Reflect in the main diagonal: swap `x` and `y`.
    Transpose,
    /// Reflect in the anti-diagonal.
    AntiTranspose,
}

impl Symmetry {
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::FlipX,
        Symmetry::FlipY,
        Symmetry::Transpose,
        Symmetry::AntiTranspose,
    ];

    /// Image of a vertex of a grid of size `size`.
    pub fn apply(self, size: usize, point: Point) -> Point {
        let n = size as i32;
        let Point { x, y } = point;
        match self {
            Symmetry::Identity => Point::new(x, y),
            Symmetry::Rotate90 => Point::new(n - y, x),
            Symmetry::Rotate180 => Point::new(n - x, n - y),
            Symmetry::Rotate270 => Point::new(y, n - x),
            Symmetry::FlipX => Point::new(n - x, y),
            Symmetry::FlipY => Point::new(x, n - y),
            Symmetry::Transpose => Point::new(y, x),
            Symmetry::AntiTranspose => Point::new(n - y, n - x),
        }
    }

    /// Image of every vertex of a path, in the same order.
    pub fn apply_path(self, size: usize, path: &Path) -> Path {
        path.iter().map(|&p| self.apply(size, p)).collect()
    }

    /// The element that undoes this one.
    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rotate90 => Symmetry::Rotate270,
            Symmetry::Rotate270 => Symmetry::Rotate90,
            other => other,
        }
    }
}

/// Smallest image of `path` under the eight symmetries and reversal.
///
/// Two covers have the same canonical form exactly when one can be turned
/// into the other by rotating, reflecting or walking it backwards.
pub fn canonical(size: usize, path: &Path) -> Path {
    let reversed = path.reversed();
    Symmetry::ALL
        .iter()
        .flat_map(|&s| [s.apply_path(size, path), s.apply_path(size, &reversed)])
        .min()
        .unwrap_or_default()
}

/// Number of distinct paths once symmetric images and reversals are identified.
pub fn distinct_up_to_symmetry<'a>(size: usize, paths: impl IntoIterator<Item = &'a Path>) -> usize {
    paths
        .into_iter()
        .map(|p| canonical(size, p))
        .collect::<BTreeSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_matches_iteration_order() {
        let iterated: Vec<_> = Symmetry::iter().collect();
        assert_eq!(iterated, Symmetry::ALL.to_vec());
    }

    #[test]
    fn test_corners_map_to_corners() {
        let corners = [Point::new(0, 0), Point::new(0, 5), Point::new(5, 0), Point::new(5, 5)];
        for s in Symmetry::ALL {
            for corner in corners {
                assert!(corners.contains(&s.apply(5, corner)), "{:?} {}", s, corner);
            }
        }
    }

    #[test]
    fn test_rotation_of_point() {
        assert_eq!(Symmetry::Rotate90.apply(4, Point::new(1, 0)), Point::new(4, 1));
        assert_eq!(Symmetry::Rotate180.apply(4, Point::new(1, 0)), Point::new(3, 4));
        assert_eq!(Symmetry::Transpose.apply(4, Point::new(1, 3)), Point::new(3, 1));
    }

    #[test]
    fn test_inverse_undoes() {
        let p = Point::new(2, 5);
        for s in Symmetry::ALL {
            assert_eq!(s.inverse().apply(7, s.apply(7, p)), p, "{:?}", s);
        }
    }

    #[test]
    fn test_images_are_distinct() {
        // A point off every axis of symmetry has eight distinct images
        let p = Point::new(1, 2);
        let images: BTreeSet<_> = Symmetry::ALL.iter().map(|s| s.apply(6, p)).collect();
        assert_eq!(images.len(), 8);
    }

    #[test]
    fn test_canonical_identifies_images_and_reversal() {
        let path = Path::from(&[(1, 1), (1, 2), (2, 2), (2, 1)][..]);
        let c = canonical(3, &path);
        for s in Symmetry::ALL {
            assert_eq!(canonical(3, &s.apply_path(3, &path)), c);
            assert_eq!(canonical(3, &s.apply_path(3, &path.reversed())), c);
        }
    }

    #[test]
    fn test_distinct_up_to_symmetry() {
        let a = Path::from(&[(1, 1), (1, 2), (2, 2), (2, 1)][..]);
        let b = Symmetry::Rotate90.apply_path(3, &a);
        let c = Path::from(&[(1, 1), (2, 1), (2, 2)][..]);
        assert_eq!(distinct_up_to_symmetry(3, [&a, &b]), 1);
        assert_eq!(distinct_up_to_symmetry(3, [&a, &b, &c]), 2);
    }
}
