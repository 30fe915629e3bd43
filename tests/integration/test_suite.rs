//! Integration tests for whole-suite runs

use crate::fixtures::{CaseFixture, create_suite_fixture};
use jsontest::{FilterSpec, RunOptions};
use tempfile::TempDir;

#[test]
fn test_suite_reports_each_case_in_discovery_order() {
    let temp_dir = TempDir::new().unwrap();
    create_suite_fixture(temp_dir.path()).unwrap();

    let report = jsontest::run_suite(temp_dir.path(), &RunOptions::default()).unwrap();

    let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["clean-exit", "exit-three", "hello", "wrong-stdout"]);
    assert_eq!(report.passed(), 3);
    assert_eq!(report.failed(), 1);
    assert!(!report.is_success());

    let failed = report.outcomes.iter().find(|o| !o.passed).unwrap();
    assert_eq!(failed.name, "wrong-stdout");
}

#[test]
fn test_sequential_and_parallel_runs_agree() {
    let temp_dir = TempDir::new().unwrap();
    create_suite_fixture(temp_dir.path()).unwrap();

    let sequential = RunOptions {
        jobs: Some(1),
        ..RunOptions::default()
    };
    let parallel = RunOptions {
        jobs: Some(4),
        ..RunOptions::default()
    };

    let a = jsontest::run_suite(temp_dir.path(), &sequential).unwrap();
    let b = jsontest::run_suite(temp_dir.path(), &parallel).unwrap();

    let summary = |r: &jsontest::SuiteReport| {
        r.outcomes
            .iter()
            .map(|o| (o.name.clone(), o.passed))
            .collect::<Vec<_>>()
    };
    assert_eq!(summary(&a), summary(&b));
}

#[test]
fn test_filtered_suite_runs_only_selected_cases() {
    let temp_dir = TempDir::new().unwrap();
    create_suite_fixture(temp_dir.path()).unwrap();

    let opts = RunOptions {
        filter: FilterSpec::parse("-wrong-stdout"),
        jobs: None,
    };
    let report = jsontest::run_suite(temp_dir.path(), &opts).unwrap();

    assert_eq!(report.outcomes.len(), 3);
    assert!(report.is_success());
}

#[test]
fn test_empty_suite_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let report = jsontest::run_suite(temp_dir.path(), &RunOptions::default()).unwrap();
    assert!(report.outcomes.is_empty());
    assert!(report.is_success());
}

#[test]
fn test_one_failure_does_not_stop_other_cases() {
    let temp_dir = TempDir::new().unwrap();
    CaseFixture::new("a-fails", "exit 1\n").write(temp_dir.path()).unwrap();
    CaseFixture::new("b-passes", "exit 0\n").write(temp_dir.path()).unwrap();

    let report = jsontest::run_suite(temp_dir.path(), &RunOptions::default()).unwrap();
    assert_eq!(report.outcomes.len(), 2);
    assert!(!report.outcomes[0].passed);
    assert!(report.outcomes[1].passed);
}

#[test]
fn test_missing_root_aborts_the_run() {
    let result = jsontest::run_suite("/definitely/does/not/exist/jsontest", &RunOptions::default());
    assert!(matches!(result, Err(jsontest::Error::InvalidInput(_))));
}
