//! Process helpers for invoking the multiplexer CLI.

use std::process::Stdio;
use tokio::process::Command;

use crate::error::AutomationError;

/// Captured result of one finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Spawn and wait for a process with piped output.
pub(super) async fn run_process(
    program: &str,
    args: &[String],
) -> Result<ExecOutput, AutomationError> {
    let mut cmd = Command::new(program);
    cmd.kill_on_drop(true);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let output = cmd.output().await.map_err(|source| AutomationError::Spawn {
        program: program.to_string(),
        source,
    })?;

    Ok(ExecOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Convert non-zero status into a contextual automation error.
pub(super) fn ensure_success(
    output: ExecOutput,
    context: impl FnOnce() -> String,
) -> Result<ExecOutput, AutomationError> {
    if output.exit_code == 0 {
        return Ok(output);
    }

    let mut details = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };
    if details.is_empty() {
        details = format!("exited with {}", output.exit_code);
    }

    Err(AutomationError::CommandFailed(format!(
        "{}: {details}",
        context()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(exit_code: i32, stdout: &str, stderr: &str) -> ExecOutput {
        ExecOutput {
            exit_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn success_passes_output_through() {
        let out = ensure_success(output(0, "%3\n", ""), || "split".into()).expect("ok");
        assert_eq!(out.stdout, "%3\n");
    }

    #[test]
    fn failure_prefers_stderr_details() {
        let err = ensure_success(output(1, "noise", "can't find pane: %9\n"), || {
            "tmux send-keys".into()
        })
        .expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "automation call failed: tmux send-keys: can't find pane: %9"
        );
    }

    #[test]
    fn failure_without_output_reports_exit_code() {
        let err = ensure_success(output(2, "", ""), || "tmux".into()).expect_err("should fail");
        assert!(err.to_string().ends_with("exited with 2"), "got: {err}");
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let err = run_process("devgrid-definitely-missing-binary", &[])
            .await
            .expect_err("spawn should fail");
        assert!(matches!(err, AutomationError::Spawn { .. }));
    }
}
