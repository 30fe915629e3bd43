//! Subprocess execution of a case's `cmd` script

use crate::models::{CMD_FILE, ExecutionResult, ExitCode, TestCase};
use std::process::{Command, ExitStatus, Stdio};

/// Shell used to interpret every `cmd` script.
pub const SHELL: &str = "bash";

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> Option<i32> {
    None
}

/// Run `bash cmd` inside the case directory and capture its outcome.
///
/// Blocks the calling thread until the script exits. Failures are returned as
/// data: a non-zero exit becomes `ExitCode::Code`, a signal becomes
/// `ExitCode::Signal`, a spawn failure becomes `ExitCode::Invalid`, and a clean
/// exit leaves `ExitCode::Unset`.
#[must_use]
pub fn execute(case: &TestCase) -> ExecutionResult {
    log::debug!("{}: spawning {SHELL} {CMD_FILE} in {}", case.name, case.dir().display());

    let output = Command::new(SHELL)
        .arg(CMD_FILE)
        .current_dir(case.dir())
        .stdin(Stdio::null())
        .output();

    let output = match output {
        Ok(output) => output,
        Err(err) => {
            log::warn!("{}: failed to spawn {SHELL}: {err}", case.name);
            return ExecutionResult {
                exit_code: ExitCode::Invalid(format!("{:?}", err.kind())),
                stdout: String::new(),
                stderr: String::new(),
                error: Some(format!("failed to spawn {SHELL} {CMD_FILE}: {err}")),
            };
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    log::trace!(
        "{}: captured {} bytes stdout, {} bytes stderr",
        case.name,
        stdout.len(),
        stderr.len()
    );

    let (exit_code, error) = match output.status.code() {
        Some(0) => (ExitCode::Unset, None),
        Some(code) => (ExitCode::Code(code), Some(format!("exit status: {code}"))),
        None => match signal_of(output.status) {
            Some(signal) => (
                ExitCode::Signal(signal),
                Some(format!("terminated by signal {signal}")),
            ),
            None => (
                ExitCode::Unset,
                Some("terminated without an exit code".to_string()),
            ),
        },
    };

    ExecutionResult {
        exit_code,
        stdout,
        stderr,
        error,
    }
}
