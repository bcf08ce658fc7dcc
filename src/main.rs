// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use grid_cover_search::config::{Mode, SearchConfig};
use grid_cover_search::context::SearchContext;
use grid_cover_search::geometry::DirectionOrder;
use grid_cover_search::registry::{Solution, SolutionObserver, DEFAULT_KEEP_LIMIT};
use grid_cover_search::seeds::SeedStrategy;
use grid_cover_search::{report, search, validate_path};
use log::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Search for the shortest vertex path touching every square of an n×n grid"
)]
struct Cli {
    /// Grid side length
    #[arg(short = 'n', long, default_value_t = 8)]
    size: usize,

    /// Longest cover, in moves, to accept (defaults to n²)
    #[arg(short, long)]
    bound: Option<usize>,

    /// Report whether any cover within the bound exists
    #[arg(long)]
    prove: bool,

    /// Worker threads (defaults to available parallelism)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Start from every interior vertex instead of one octant
    #[arg(long)]
    exhaustive_seeds: bool,

    /// Do not extend starts along the fixed opening
    #[arg(long)]
    no_forced_prefix: bool,

    /// Split seeds into their one-move continuations this many times
    #[arg(long, default_value_t = 0)]
    unroll: usize,

    /// Order in which moves are tried
    #[arg(long, value_enum, default_value_t = Order::Diagonals)]
    order: Order,

    /// Optimal paths kept for the final report
    #[arg(long, default_value_t = DEFAULT_KEEP_LIMIT)]
    keep: usize,

    /// Re-check every reported path independently of the search
    #[arg(long)]
    verify: bool,

    /// Print search counters at the end
    #[arg(long)]
    stats: bool,

    /// Draw the first optimal path on the lattice
    #[arg(long)]
    plot: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Order {
    Diagonals,
    Orthogonals,
}

impl From<Order> for DirectionOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Diagonals => DirectionOrder::DiagonalsFirst,
            Order::Orthogonals => DirectionOrder::OrthogonalsFirst,
        }
    }
}

/// Prints each committed cover as it is found.
struct PrintSolutions;

impl SolutionObserver for PrintSolutions {
    fn on_solution(&self, solution: &Solution, _improved: bool) {
        println!("{}", solution);
    }
}

fn build_config(cli: &Cli) -> SearchConfig {
    let mode = if cli.prove { Mode::Prove } else { Mode::Find };
    let seeds = if cli.exhaustive_seeds {
        SeedStrategy::Exhaustive
    } else {
        SeedStrategy::Octant
    };
    let config = SearchConfig::new(cli.size)
        .with_mode(mode)
        .with_threads(cli.threads)
        .with_seeds(seeds)
        .with_forced_prefix(!cli.no_forced_prefix)
        .with_unroll(cli.unroll)
        .with_order(cli.order.into())
        .with_keep(cli.keep);
    match cli.bound {
        Some(bound) => config.with_bound(bound),
        None => config,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = build_config(&cli);
    let mode = config.mode();

    info!("Starting search: {:?}", config);
    let result = search(&config, Some(Box::new(PrintSolutions))).context("search failed")?;

    println!("{}", report::summary(&result, mode));
    if cli.stats {
        println!("{}", report::statistics(&result));
    }
    if cli.plot {
        if let Some(solution) = result.solutions.first() {
            println!("{}", report::render(config.size(), &solution.path));
        }
    }

    if cli.verify {
        let ctx = SearchContext::new(config.size());
        for solution in &result.solutions {
            match validate_path(&ctx, &solution.path) {
                Ok(length) if length == solution.length => {}
                Ok(length) => bail!(
                    "path {} has {} moves, reported as {}",
                    solution.path,
                    length,
                    solution.length
                ),
                Err(violation) => {
                    return Err(violation).with_context(|| format!("invalid path {}", solution.path))
                }
            }
        }
        println!("Verified {} paths", result.solutions.len());
    }
    Ok(())
}
