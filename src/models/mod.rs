//! Data models for test cases, fixtures, execution results and outcomes

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the script every case directory must contain.
pub const CMD_FILE: &str = "cmd";
/// Optional fixture holding the expected exit status.
pub const EXPECTED_EXIT_CODE_FILE: &str = "expected.exitCode";
/// Optional fixture holding the exact expected standard output.
pub const EXPECTED_STDOUT_FILE: &str = "expected.stdout";

/// A single discovered test case: one subdirectory of the test root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub dir: PathBuf,
}

impl TestCase {
    #[must_use]
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
        }
    }

    #[must_use]
    pub fn cmd_path(&self) -> PathBuf {
        self.dir.join(CMD_FILE)
    }

    #[must_use]
    pub fn fixture_path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Exit status as seen by the assertion layer.
///
/// `Unset` is the "no value" sentinel: the expectation when no
/// `expected.exitCode` fixture exists, and the observed value for a clean exit.
/// `Signal` is a termination without an exit code; it carries no value either.
///
/// Equality:
/// - `Unset` and `Signal` match each other.
/// - `Code(a)` matches `Code(b)` when `a == b`.
/// - `Unset` also matches `Code(0)`, a clean exit against a declared zero.
/// - `Signal` never matches a `Code`, and `Invalid` matches nothing.
#[derive(Debug, Clone)]
pub enum ExitCode {
    Unset,
    Code(i32),
    Signal(i32),
    Invalid(String),
}

impl ExitCode {
    /// Parse the text of an `expected.exitCode` fixture.
    ///
    /// Surrounding whitespace is ignored and an empty fixture reads as zero.
    #[must_use]
    pub fn parse_fixture(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ExitCode::Code(0);
        }
        match trimmed.parse::<i32>() {
            Ok(code) => ExitCode::Code(code),
            Err(_) => ExitCode::Invalid(trimmed.to_string()),
        }
    }

    fn is_valueless(&self) -> bool {
        matches!(self, ExitCode::Unset | ExitCode::Signal(_))
    }
}

impl PartialEq for ExitCode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ExitCode::Code(a), ExitCode::Code(b)) => a == b,
            (ExitCode::Unset, ExitCode::Code(0)) | (ExitCode::Code(0), ExitCode::Unset) => true,
            (a, b) => a.is_valueless() && b.is_valueless(),
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Unset => write!(f, "null"),
            ExitCode::Code(code) => write!(f, "{code}"),
            ExitCode::Signal(signal) => write!(f, "null (signal {signal})"),
            ExitCode::Invalid(raw) => write!(f, "invalid({raw})"),
        }
    }
}

/// Expectations loaded from a case directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixtures {
    pub expected_exit_code: ExitCode,
    pub expected_stdout: Option<String>,
}

impl Fixtures {
    /// Number of assertions a run of this case performs.
    #[must_use]
    pub fn assertion_count(&self) -> usize {
        if self.expected_stdout.is_some() { 2 } else { 1 }
    }
}

/// Observed outcome of running a case's `cmd` script once.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub exit_code: ExitCode,
    pub stdout: String,
    pub stderr: String,
    /// Rendering of the subprocess failure; `None` after a clean zero exit.
    pub error: Option<String>,
}

impl ExecutionResult {
    /// Diagnostic bundle attached to every assertion for failure triage.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        format!(
            "\n-- return value:\n{}\n-- stdout:\n{}\n-- stderr:\n{}",
            self.error.as_deref().unwrap_or("null"),
            self.stdout,
            self.stderr
        )
    }
}

/// A single failed assertion within a case.
#[derive(Debug, Clone, Serialize)]
pub struct AssertionFailure {
    pub label: String,
    pub expected: String,
    pub actual: String,
    pub message: String,
}

/// Result of one case, as reported by the assertion collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub passed: bool,
    pub expected_assertions: Option<usize>,
    pub performed_assertions: usize,
    pub failures: Vec<AssertionFailure>,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: Duration,
}

fn serialize_duration<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}
