//! Shared external-process invocation

use std::process::Command;
use tracing::debug;

use crate::error::{DeployError, Result};

/// Runs `command` to completion and returns its stdout.
///
/// A non-zero exit becomes a tool error carrying the exit code and both
/// output streams; stderr of successful invocations is logged at debug.
pub(crate) fn capture(tool: &str, command: &mut Command) -> Result<String> {
    let output = command
        .output()
        .map_err(|e| DeployError::tool(tool, format!("failed to execute: {e}")))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !stderr.trim().is_empty() {
        debug!("{} stderr: {}", tool, stderr.trim());
    }

    if !output.status.success() {
        let exit_code = output.status.code().unwrap_or(-1);
        return Err(DeployError::tool(
            tool,
            format!(
                "exit_code={}, stdout='{}', stderr='{}'",
                exit_code,
                stdout.trim(),
                stderr.trim()
            ),
        ));
    }

    Ok(stdout.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_returns_stdout() {
        let out = capture("echo", Command::new("echo").arg("hello")).unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[test]
    fn test_capture_missing_binary_is_tool_error() {
        let err = capture("missing", &mut Command::new("slipway-no-such-binary")).unwrap_err();
        match err {
            DeployError::Tool { tool, output } => {
                assert_eq!(tool, "missing");
                assert!(output.contains("failed to execute"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_capture_nonzero_exit_carries_output() {
        let err = capture(
            "sh",
            Command::new("sh").args(["-c", "echo oops >&2; exit 3"]),
        )
        .unwrap_err();
        match err {
            DeployError::Tool { output, .. } => {
                assert!(output.contains("exit_code=3"));
                assert!(output.contains("oops"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
