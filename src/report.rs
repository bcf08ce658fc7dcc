// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Human readable summaries of a finished run, and a text plot of a path.

use crate::config::Mode;
use crate::engine::theoretical_lower_bound;
use crate::geometry::{Path, Point};
use crate::scheduler::SearchReport;
use std::collections::HashMap;
use std::fmt::Write;

/// The verdict line(s) for `report` under `mode`.
pub fn summary(report: &SearchReport, mode: Mode) -> String {
    let mut out = String::new();
    let lower = theoretical_lower_bound(report.size);
    match (mode, report.best) {
        (Mode::Find, None) => out.push_str("No solution found."),
        (Mode::Find, Some(best)) => {
            let _ = write!(
                out,
                "Best length {} for n={} ({} optimal paths, {} up to symmetry)",
                best,
                report.size,
                report.solution_count,
                report.symmetry_classes,
            );
        }
        (Mode::Prove, None) => {
            let _ = write!(
                out,
                "No cover of length <= {} exists for n={}; the optimum is at least {} (lower bound {})",
                report.bound,
                report.size,
                report.bound + 1,
                lower,
            );
        }
        (Mode::Prove, Some(best)) => {
            let _ = write!(
                out,
                "Bound {} is achievable for n={}: found a cover of length {} (lower bound {})",
                report.bound, report.size, best, lower,
            );
        }
    }
    out
}

/// One line per counter, then timing.
pub fn statistics(report: &SearchReport) -> String {
    let mut out = String::new();
    for (counter, value) in report.statistics.entries() {
        let _ = writeln!(out, "{:>22}: {}", counter.as_ref(), value);
    }
    let _ = write!(
        out,
        "{} seeds on {} threads in {:.3}s",
        report.seeds,
        report.workers,
        report.elapsed.as_secs_f64()
    );
    out
}

/// Draw the lattice of a `size` × `size` grid with the path on it.
///
/// Rows run from `y = size` at the top down to `y = 0`. A visited vertex
/// shows the index of its first visit along the path; every other vertex is
/// a `.`. Points outside the lattice are ignored.
pub fn render(size: usize, path: &Path) -> String {
    let mut order: HashMap<Point, usize> = HashMap::new();
    for (index, &point) in path.iter().enumerate() {
        order.entry(point).or_insert(index);
    }
    let width = path.len().saturating_sub(1).to_string().len();
    let side = size as i32;

    let rows: Vec<String> = (0..=side)
        .rev()
        .map(|y| {
            (0..=side)
                .map(|x| match order.get(&Point::new(x, y)) {
                    Some(index) => format!("{:>width$}", index),
                    None => format!("{:>width$}", "."),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    rows.join("\n")
}
