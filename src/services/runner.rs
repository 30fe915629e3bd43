//! Case runner: fixtures, execution and assertions for one case, plus the
//! pool that overlaps cases

use super::assert::TestContext;
use super::exec::execute;
use super::fixtures::load_fixtures;
use crate::models::{CaseOutcome, TestCase};
use crate::{Error, Result};
use rayon::prelude::*;

/// Run a single case to completion.
///
/// Fixtures are read at invocation time, not at discovery time. The exit code
/// is always asserted; with no `expected.exitCode` fixture the expectation is
/// the unset sentinel, which only a clean exit satisfies. Stdout is asserted
/// byte-for-byte when an `expected.stdout` fixture exists.
#[must_use]
pub fn run_case(case: &TestCase) -> CaseOutcome {
    let fixtures = load_fixtures(case);

    let mut ctx = TestContext::new(case.name.clone());
    ctx.expect(fixtures.assertion_count());

    let result = execute(case);
    let diagnostic = result.diagnostic();

    ctx.equal(
        "exit code",
        &result.exit_code,
        &fixtures.expected_exit_code,
        &diagnostic,
    );
    if let Some(expected_stdout) = &fixtures.expected_stdout {
        ctx.equal("stdout", &result.stdout, expected_stdout, &diagnostic);
    }

    let outcome = ctx.done();
    log::debug!(
        "{}: {} ({} assertion(s))",
        outcome.name,
        if outcome.passed { "ok" } else { "FAIL" },
        outcome.performed_assertions
    );
    outcome
}

/// Run `cases`, overlapping them on a pool of `jobs` workers.
///
/// Each case blocks its own worker until its script exits; outcomes come back
/// in the order of `cases`. `None` uses the default pool width.
///
/// # Errors
/// Returns `Error::System` when the worker pool cannot be built.
pub fn run_cases(cases: &[TestCase], jobs: Option<usize>) -> Result<Vec<CaseOutcome>> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs.max(1));
    }
    let pool = builder
        .build()
        .map_err(|e| Error::System(format!("failed to build worker pool: {e}")))?;

    Ok(pool.install(|| cases.par_iter().map(run_case).collect()))
}
