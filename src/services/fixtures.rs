//! Lazy loading of `expected.*` fixtures from a case directory

use crate::models::{EXPECTED_EXIT_CODE_FILE, EXPECTED_STDOUT_FILE, ExitCode, Fixtures, TestCase};
use std::fs;

/// Load the expectations for `case`.
///
/// Missing or unreadable fixtures mean "nothing declared": the exit code stays
/// `ExitCode::Unset` and the stdout expectation stays `None`.
#[must_use]
pub fn load_fixtures(case: &TestCase) -> Fixtures {
    let expected_exit_code = match fs::read(case.fixture_path(EXPECTED_EXIT_CODE_FILE)) {
        Ok(bytes) => {
            let parsed = ExitCode::parse_fixture(&String::from_utf8_lossy(&bytes));
            log::debug!("{}: expected exit code {parsed}", case.name);
            parsed
        }
        Err(_) => ExitCode::Unset,
    };

    let expected_stdout = match fs::read(case.fixture_path(EXPECTED_STDOUT_FILE)) {
        Ok(bytes) => {
            log::debug!("{}: expected stdout fixture ({} bytes)", case.name, bytes.len());
            Some(String::from_utf8_lossy(&bytes).into_owned())
        }
        Err(_) => None,
    };

    Fixtures {
        expected_exit_code,
        expected_stdout,
    }
}
