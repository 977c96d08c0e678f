//! The `riskpath` CLI: parse a digit risk map, optionally expand it,
//! and report the lowest total risk between two cells.
//!
//! The core crates never print; everything user-facing happens here.
//! The total risk goes to stdout (last line, for scripts); diagnostics
//! and the `--debug` finalization trace go to stderr via `tracing`.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use riskpath::{expand, Coord, MapError, RiskMap, Search, SearchError};

/// Find the lowest-total-risk route across a digit risk map.
#[derive(Parser)]
#[command(name = "riskpath", version)]
struct Cli {
    /// Text file with one row of digits '1'-'9' per line.
    file: PathBuf,

    /// Starting vertex row.
    #[arg(long, default_value_t = 0)]
    start_row: u32,

    /// Starting vertex column.
    #[arg(long, default_value_t = 0)]
    start_column: u32,

    /// Ending vertex row (default: last row of the expanded map).
    #[arg(long)]
    end_row: Option<u32>,

    /// Ending vertex column (default: last column of the expanded map).
    #[arg(long)]
    end_column: Option<u32>,

    /// Tile the map this many times along each axis before searching.
    #[arg(short = 'e', long, default_value_t = 1)]
    expansion_factor: u32,

    /// Print the reconstructed route, one coordinate per line, before
    /// the total.
    #[arg(long)]
    route: bool,

    /// Refuse to search maps with more than this many cells.
    #[arg(long)]
    max_vertices: Option<usize>,

    /// Trace every finalized vertex to stderr while searching.
    #[arg(long)]
    debug: bool,
}

/// Anything that can end a CLI run with exit code 1.
#[derive(Debug)]
enum CliError {
    Io { path: PathBuf, source: io::Error },
    Map(MapError),
    Search(SearchError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Map(err) => write!(f, "{err}"),
            Self::Search(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Map(err) => Some(err),
            Self::Search(err) => Some(err),
        }
    }
}

impl From<MapError> for CliError {
    fn from(err: MapError) -> Self {
        Self::Map(err)
    }
}

impl From<SearchError> for CliError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

fn init_tracing(debug: bool) {
    // RISKPATH_LOG / RUST_LOG override the --debug default.
    let filter = EnvFilter::try_from_env("RISKPATH_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(if debug { "riskpath=debug" } else { "riskpath=warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let start_time = Instant::now();

    let text = fs::read_to_string(&cli.file).map_err(|source| CliError::Io {
        path: cli.file.clone(),
        source,
    })?;
    let parsed = RiskMap::parse(&text)?;
    tracing::debug!(
        rows = parsed.rows(),
        cols = parsed.cols(),
        elapsed = ?start_time.elapsed(),
        "parsed map"
    );

    let expand_time = Instant::now();
    let map = expand(&parsed, cli.expansion_factor)?;
    if cli.expansion_factor > 1 {
        tracing::debug!(
            factor = cli.expansion_factor,
            rows = map.rows(),
            cols = map.cols(),
            elapsed = ?expand_time.elapsed(),
            "expanded map"
        );
    }

    // Defaults apply to the expanded map, matching the usual
    // corner-to-corner query.
    let start = Coord::new(cli.start_row, cli.start_column);
    let end = Coord::new(
        cli.end_row.unwrap_or(map.rows() - 1),
        cli.end_column.unwrap_or(map.cols() - 1),
    );

    let mut search = Search::new(&map).record_route(cli.route);
    if let Some(budget) = cli.max_vertices {
        search = search.vertex_budget(budget);
    }

    let search_time = Instant::now();
    let result = if cli.debug {
        search.run_traced(start, end, |coord, risk| {
            tracing::debug!(%coord, risk, "finalized");
        })?
    } else {
        search.run(start, end)?
    };
    tracing::debug!(
        finalized = result.finalized,
        elapsed = ?search_time.elapsed(),
        "search complete"
    );

    if let Some(route) = &result.route {
        for coord in route {
            println!("{coord}");
        }
    }
    println!("{}", result.total_risk);
    tracing::info!(
        total_risk = result.total_risk,
        %start,
        %end,
        elapsed = ?start_time.elapsed(),
        "done"
    );

    Ok(())
}
