// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::run;
use grid_cover_search::context::SearchContext;
use grid_cover_search::seeds::SeedStrategy;
use grid_cover_search::symmetry::{canonical, distinct_up_to_symmetry, Symmetry};
use grid_cover_search::{validate_path, SearchConfig};

#[test]
fn test_images_of_covers_are_covers() {
    for size in [3, 4, 5, 6] {
        let report = run(SearchConfig::new(size));
        let ctx = SearchContext::new(size);
        for solution in &report.solutions {
            for symmetry in Symmetry::ALL {
                let image = symmetry.apply_path(size, &solution.path);
                assert_eq!(
                    validate_path(&ctx, &image),
                    Ok(solution.length),
                    "n={} {:?} of {}",
                    size,
                    symmetry,
                    solution.path
                );
            }
        }
    }
}

#[test]
fn test_octant_seeds_reach_every_symmetry_class() {
    // Restricting starts to one octant loses no cover up to symmetry
    for size in [4, 5] {
        let all = run(
            SearchConfig::new(size)
                .with_seeds(SeedStrategy::Exhaustive)
                .with_forced_prefix(false),
        );
        let octant = run(SearchConfig::new(size).with_forced_prefix(false));
        assert_eq!(octant.best, all.best);
        let classes = |report: &grid_cover_search::SearchReport| {
            distinct_up_to_symmetry(size, report.solutions.iter().map(|s| &s.path))
        };
        assert!(classes(&octant) <= classes(&all));
        assert!(classes(&octant) >= 1);
    }
}

#[test]
fn test_canonical_form_is_stable() {
    let report = run(SearchConfig::new(5));
    for solution in &report.solutions {
        let c = canonical(5, &solution.path);
        assert!(c <= solution.path);
        assert_eq!(c.moves(), 10);
        assert_eq!(canonical(5, &c), c);
        for symmetry in Symmetry::ALL {
            assert_eq!(canonical(5, &symmetry.apply_path(5, &solution.path)), c);
        }
    }
}

#[test]
fn test_class_count_unaffected_by_keep_limit() {
    let base = SearchConfig::new(6)
        .with_seeds(SeedStrategy::Exhaustive)
        .with_forced_prefix(false);
    let uncapped = run(base.clone().with_keep(100_000));
    let capped = run(base.with_keep(2));
    assert_eq!(capped.solutions.len(), 2);
    assert_eq!(capped.solution_count, uncapped.solution_count);
    assert_eq!(
        uncapped.symmetry_classes,
        distinct_up_to_symmetry(6, uncapped.solutions.iter().map(|s| &s.path))
    );
    assert_eq!(capped.symmetry_classes, uncapped.symmetry_classes);
    assert_eq!(uncapped.symmetry_classes, 3);
}
