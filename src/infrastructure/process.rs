//! Helpers shared by the process-backed adapters

use std::process::ExitStatus;

/// Human-readable form of a non-success exit status
pub(crate) fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {code}"),
        None => "a signal".to_string(),
    }
}
