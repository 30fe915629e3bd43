//! Output formatting for CLI

use crate::models::{CaseOutcome, TestCase};
use crate::SuiteReport;
use std::fmt::Write;

/// Render one line per case, followed by the diagnostic of every failure.
#[must_use]
pub fn format_outcome(outcome: &CaseOutcome) -> String {
    let mut out = String::new();
    let status = if outcome.passed { "ok" } else { "FAIL" };
    let _ = writeln!(
        out,
        "{status:>4}  {} ({:.2}s)",
        outcome.name,
        outcome.duration.as_secs_f64()
    );

    for failure in &outcome.failures {
        let _ = writeln!(
            out,
            "      {}: expected {}, got {}{}",
            failure.label, failure.expected, failure.actual, failure.message
        );
    }

    out
}

/// Human-readable report: per-case lines then a summary.
#[must_use]
pub fn format_text(report: &SuiteReport, quiet: bool) -> String {
    let mut out = String::new();

    for outcome in &report.outcomes {
        if quiet && outcome.passed {
            continue;
        }
        out.push_str(&format_outcome(outcome));
    }

    if report.outcomes.is_empty() {
        let _ = writeln!(out, "No test cases found under {}", report.root);
    }

    let elapsed = report
        .finished_at
        .duration_since(report.started_at)
        .unwrap_or_default();
    let verdict = if report.is_success() { "OK" } else { "FAILURES!" };
    let _ = writeln!(
        out,
        "\n{verdict}: {} passed, {} failed ({} total, {:.2}s)",
        report.passed(),
        report.failed(),
        report.outcomes.len(),
        elapsed.as_secs_f64()
    );

    out
}

/// Format the report as JSON
pub fn format_json(report: &SuiteReport) -> String {
    let output = serde_json::json!({
        "root": report.root,
        "filter": report.filter,
        "passed": report.passed(),
        "failed": report.failed(),
        "total": report.outcomes.len(),
        "cases": report.outcomes,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Format discovered cases, one name per line or as a JSON array.
pub fn format_case_list(cases: &[TestCase], json: bool) -> String {
    if json {
        let names: Vec<&str> = cases.iter().map(|c| c.name.as_str()).collect();
        return serde_json::to_string_pretty(&names).unwrap_or_else(|_| "[]".to_string());
    }

    cases.iter().fold(String::new(), |mut out, case| {
        let _ = writeln!(out, "{}", case.name);
        out
    })
}
