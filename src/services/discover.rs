//! Test discovery: immediate subdirectories of the root holding a `cmd` script

use super::filter::FilterSpec;
use crate::models::{CMD_FILE, TestCase};
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Enumerate the cases under `root` selected by `filter`.
///
/// Only immediate children are considered. A child is a case when it passes
/// the filter, is a directory (symlinks are followed) and contains `cmd`.
/// Any failure to list the root or stat a selected entry aborts discovery.
/// Cases are returned sorted by name.
///
/// # Errors
/// Returns `Error::InvalidInput` when `root` is missing or not a directory,
/// and `Error::Io` when the directory listing fails.
pub fn discover<P: AsRef<Path>>(root: P, filter: &FilterSpec) -> Result<Vec<TestCase>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(Error::InvalidInput(format!(
            "Test root does not exist: {}",
            root.display()
        )));
    }

    if !root.is_dir() {
        return Err(Error::InvalidInput(format!(
            "Test root is not a directory: {}",
            root.display()
        )));
    }

    let mut cases = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if !filter.is_selected(&name) {
            log::debug!("Skipping {name}: filtered out");
            continue;
        }

        let dir = entry.path();
        if !fs::metadata(&dir)?.is_dir() {
            continue;
        }

        if fs::metadata(dir.join(CMD_FILE)).is_err() {
            log::debug!("Skipping {name}: no {CMD_FILE} script");
            continue;
        }

        cases.push(TestCase::new(name, dir));
    }

    cases.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("Discovered {} case(s) under {}", cases.len(), root.display());

    Ok(cases)
}
