//! Integration tests for case discovery

use crate::fixtures::{CaseFixture, create_suite_fixture};
use jsontest::FilterSpec;
use jsontest::services::discover::discover;
use std::fs;
use tempfile::{NamedTempFile, TempDir};

fn names(root: &std::path::Path, filter: &FilterSpec) -> Vec<String> {
    discover(root, filter)
        .expect("discover cases")
        .into_iter()
        .map(|c| c.name)
        .collect()
}

#[test]
fn test_discovers_only_directories_with_cmd() {
    let temp_dir = TempDir::new().unwrap();
    create_suite_fixture(temp_dir.path()).unwrap();

    let found = names(temp_dir.path(), &FilterSpec::default());
    assert_eq!(found, ["clean-exit", "exit-three", "hello", "wrong-stdout"]);
    assert!(!found.iter().any(|n| n == "no-cmd" || n == "README"));
}

#[test]
fn test_case_paths_point_into_root() {
    let temp_dir = TempDir::new().unwrap();
    CaseFixture::new("alpha", "true\n").write(temp_dir.path()).unwrap();

    let cases = discover(temp_dir.path(), &FilterSpec::default()).unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].dir, temp_dir.path().join("alpha"));
    assert_eq!(cases[0].cmd_path(), temp_dir.path().join("alpha/cmd"));
}

#[test]
fn test_empty_root_yields_no_cases() {
    let temp_dir = TempDir::new().unwrap();
    let cases = discover(temp_dir.path(), &FilterSpec::default()).unwrap();
    assert!(cases.is_empty());
}

#[test]
fn test_exclusion_beats_inclusion() {
    let temp_dir = TempDir::new().unwrap();
    create_suite_fixture(temp_dir.path()).unwrap();

    let filter = FilterSpec::parse("hello exit-three -hello");
    assert_eq!(names(temp_dir.path(), &filter), ["exit-three"]);
}

#[test]
fn test_exclusions_only_keep_remaining_cases() {
    let temp_dir = TempDir::new().unwrap();
    create_suite_fixture(temp_dir.path()).unwrap();

    let filter = FilterSpec::parse("-wrong-stdout -clean-exit");
    assert_eq!(names(temp_dir.path(), &filter), ["exit-three", "hello"]);
}

#[test]
fn test_inclusion_of_non_case_selects_nothing_extra() {
    let temp_dir = TempDir::new().unwrap();
    create_suite_fixture(temp_dir.path()).unwrap();

    let filter = FilterSpec::parse("no-cmd hello");
    assert_eq!(names(temp_dir.path(), &filter), ["hello"]);
}

#[test]
fn test_rediscovery_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    create_suite_fixture(temp_dir.path()).unwrap();

    let first = names(temp_dir.path(), &FilterSpec::default());
    let second = names(temp_dir.path(), &FilterSpec::default());
    assert_eq!(first, second);
}

#[test]
fn test_missing_root_is_an_error() {
    let result = discover("/definitely/does/not/exist/jsontest", &FilterSpec::default());
    let err = result.expect_err("missing root should fail");
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_file_root_is_an_error() {
    let temp_file = NamedTempFile::new().unwrap();
    let err = discover(temp_file.path(), &FilterSpec::default()).expect_err("file root");
    assert!(err.to_string().contains("not a directory"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_case_directory_is_followed() {
    let temp_dir = TempDir::new().unwrap();
    let real = TempDir::new().unwrap();
    fs::write(real.path().join("cmd"), "true\n").unwrap();
    std::os::unix::fs::symlink(real.path(), temp_dir.path().join("linked")).unwrap();

    assert_eq!(names(temp_dir.path(), &FilterSpec::default()), ["linked"]);
}
