//! Command-line driver for the exhaustive claim verification.
//!
//! Exits non-zero if any expectation is violated.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use disjoint_tours::claims::{self, ClaimReport, Expectation};
use disjoint_tours::enumerate::{cycle_count, path_count, CycleEnumerator, PathEnumerator};
use disjoint_tours::search::{find_disjoint_cycles, find_disjoint_paths, SearchCriteria};
use disjoint_tours::{Tour, TourKind};

#[derive(Parser)]
#[command(name = "verify-claims")]
#[command(about = "Exhaustive verification of edge-disjoint Hamiltonian tour claims", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify Claims 3.1 and 4.1 and print a report
    Claims {
        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Skip expectations with more than this many points
        #[arg(long)]
        max_n: Option<usize>,
    },
    /// Search for one edge-disjoint pair and print it
    Search {
        /// Tour family to search
        #[arg(value_enum)]
        kind: KindArg,

        /// Number of points
        #[arg(short, long)]
        n: usize,

        /// Strict upper bound on the combined cost
        #[arg(short, long)]
        bound: Option<f64>,

        /// Only pair odd-depth cycles
        #[arg(long, default_value_t = false)]
        odd_depth: bool,

        /// Print the witness as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the size of the canonical tour set
    Enumerate {
        /// Tour family to enumerate
        #[arg(value_enum)]
        kind: KindArg,

        /// Number of points
        #[arg(short, long)]
        n: usize,

        /// Print every tour, one per line
        #[arg(long, default_value_t = false)]
        list: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Paths,
    Cycles,
}

impl From<KindArg> for TourKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Paths => TourKind::Path,
            KindArg::Cycles => TourKind::Cycle,
        }
    }
}

#[cfg(feature = "log-subscriber")]
fn enable_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn check_size(kind: TourKind, n: usize) -> Result<()> {
    if n < kind.min_vertices() {
        bail!("{} need at least {} points, got n = {n}", kind.plural(), kind.min_vertices());
    }
    Ok(())
}

fn select_expectations(max_n: Option<usize>) -> Result<Vec<Expectation>> {
    let expectations: Vec<_> = claims::all_expectations()
        .into_iter()
        .filter(|e| max_n.map_or(true, |max| e.n <= max))
        .collect();
    if expectations.is_empty() {
        bail!("no expectations left to verify with --max-n {}", max_n.unwrap_or_default());
    }
    Ok(expectations)
}

fn run_claims(json: bool, max_n: Option<usize>) -> Result<bool> {
    let report: ClaimReport = claims::verify(select_expectations(max_n)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&report).context("serialising report")?);
    } else {
        print!("{report}");
        let failures = report.failures().count();
        if failures == 0 {
            println!("All {} expectations held.", report.outcomes.len());
        } else {
            println!("{failures} of {} expectations violated.", report.outcomes.len());
        }
    }
    Ok(report.all_held())
}

fn run_search(kind: TourKind, n: usize, bound: Option<f64>, odd_depth: bool, json: bool) -> Result<()> {
    check_size(kind, n)?;
    if odd_depth && kind == TourKind::Path {
        bail!("--odd-depth only applies to cycles");
    }

    let criteria = SearchCriteria {
        bound,
        odd_depth_only: odd_depth,
    };
    let witness = match kind {
        TourKind::Path => find_disjoint_paths(n, criteria),
        TourKind::Cycle => find_disjoint_cycles(n, criteria),
    };

    match (witness, json) {
        (Some(witness), true) => {
            println!("{}", serde_json::to_string_pretty(&witness).context("serialising witness")?);
        }
        (None, true) => println!("null"),
        (Some(witness), false) => println!("Edge-disjoint {} found: {witness}", kind.plural()),
        (None, false) => println!("No qualifying pair of {} for n = {n}.", kind.plural()),
    }
    Ok(())
}

fn print_tour(tour: &impl Tour) {
    let labels: Vec<String> = tour.vertices().iter().map(ToString::to_string).collect();
    println!("{} (cost {})", labels.join(" "), tour.cost());
}

fn run_enumerate(kind: TourKind, n: usize, list: bool) -> Result<()> {
    check_size(kind, n)?;
    let count = match kind {
        TourKind::Path => path_count(n),
        TourKind::Cycle => cycle_count(n),
    };
    println!("{count} canonical {} for n = {n}", kind.plural());

    if list {
        match kind {
            TourKind::Path => PathEnumerator::new(n).for_each(|path| print_tour(&path)),
            TourKind::Cycle => CycleEnumerator::new(n).for_each(|cycle| print_tour(&cycle)),
        }
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    #[cfg(feature = "log-subscriber")]
    enable_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Claims { json, max_n } => {
            if !run_claims(json, max_n)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Search {
            kind,
            n,
            bound,
            odd_depth,
            json,
        } => run_search(kind.into(), n, bound, odd_depth, json)?,
        Commands::Enumerate { kind, n, list } => run_enumerate(kind.into(), n, list)?,
    }

    Ok(ExitCode::SUCCESS)
}
