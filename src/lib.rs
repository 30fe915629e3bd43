//! End-to-end test harness for the `json` command-line tool
//!
//! Each immediate subdirectory of a test root holding a `cmd` script is a test
//! case. Running a case executes `bash cmd` inside that directory and compares
//! the exit code and standard output against the optional `expected.exitCode`
//! and `expected.stdout` fixtures.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{CaseOutcome, ExecutionResult, ExitCode, Fixtures, TestCase};
pub use services::filter::FilterSpec;

use std::path::Path;
use std::result;
use std::time::SystemTime;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
    System(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::System(msg) => write!(f, "System error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Options for a suite run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub filter: FilterSpec,
    /// Worker count; `None` uses the pool default, `Some(1)` runs sequentially.
    pub jobs: Option<usize>,
}

/// Aggregated result of running every selected case
#[derive(Debug)]
pub struct SuiteReport {
    pub root: String,
    pub filter: FilterSpec,
    pub outcomes: Vec<CaseOutcome>,
    pub started_at: SystemTime,
    pub finished_at: SystemTime,
}

impl SuiteReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Discover the cases under `root` without running them
///
/// # Errors
/// Fails when the root cannot be listed; see [`services::discover::discover`].
pub fn list_cases<P: AsRef<Path>>(root: P, filter: &FilterSpec) -> Result<Vec<TestCase>> {
    services::discover::discover(root, filter)
}

/// Discover and run every selected case under `root`
///
/// # Arguments
/// * `root` - The directory holding one subdirectory per case
/// * `opts` - Selection and concurrency options
///
/// # Returns
/// A report with one outcome per case, in discovery order. Case failures are
/// recorded in the report; only discovery problems are returned as errors.
pub fn run_suite<P: AsRef<Path>>(root: P, opts: &RunOptions) -> Result<SuiteReport> {
    let root_path = root.as_ref().to_string_lossy().to_string();
    let started_at = SystemTime::now();

    let cases = services::discover::discover(&root, &opts.filter)?;
    log::info!("Running {} case(s) from {root_path}", cases.len());

    let outcomes = services::runner::run_cases(&cases, opts.jobs)?;

    Ok(SuiteReport {
        root: root_path,
        filter: opts.filter.clone(),
        outcomes,
        started_at,
        finished_at: SystemTime::now(),
    })
}
