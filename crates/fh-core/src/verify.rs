//! External checksum cross-check.
//!
//! Runs a checksum tool (`sha256sum <path>` style) as a subprocess, takes the
//! first whitespace-delimited token of its first output line as the reference
//! digest, and compares it against the in-process digest. Tool problems are
//! never fatal for a run; they degrade to [`Verification::Skipped`].

use std::io;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Error from a single external tool invocation. The run sequence treats
/// every variant as non-fatal.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Tool missing, not executable, or the wait on it failed.
    #[error("checksum tool I/O error: {0}")]
    Io(#[from] io::Error),
    /// Tool did not finish within the deadline.
    #[error("checksum tool timed out after {0:?}")]
    Timeout(Duration),
    /// Tool exited without producing a digest line.
    #[error("no output from checksum tool")]
    NoOutput,
    /// Tool exited non-zero.
    #[error("checksum tool failed (exit {code:?}): {stderr}")]
    ToolFailed { code: Option<i32>, stderr: String },
}

/// Outcome of one cross-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// External digest equals the in-process digest.
    Match { digest: String },
    /// The two digests differ.
    Mismatch { computed: String, reported: String },
    /// The external tool was unavailable or misbehaved; cross-check skipped.
    Skipped { reason: String },
}

/// Run `<tool> <path>` and return the first whitespace-delimited token of the
/// first stdout line (standard checksum output: `<digest>  <filename>`).
pub async fn run_tool(tool: &str, path: &Path, timeout: Duration) -> Result<String, VerifyError> {
    let child = Command::new(tool)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let output = tokio::time::timeout(timeout, child.wait_with_output())
        .await
        .map_err(|_| VerifyError::Timeout(timeout))??;

    if !output.status.success() {
        return Err(VerifyError::ToolFailed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_string)
        .ok_or(VerifyError::NoOutput)
}

/// Cross-check `computed` against the digest the external tool reports for
/// `path`. Both digests and the verdict are logged; tool problems degrade to
/// `Skipped` with a warning instead of failing the caller.
pub async fn verify_on_disk(
    tool: &str,
    path: &Path,
    computed: &str,
    timeout: Duration,
) -> Verification {
    match run_tool(tool, path, timeout).await {
        Ok(reported) => {
            tracing::info!("file hash: {}", computed);
            tracing::info!("{} hash: {}", tool, reported);
            if reported == computed {
                tracing::info!("checksums match");
                Verification::Match {
                    digest: computed.to_string(),
                }
            } else {
                tracing::warn!("checksums do not match");
                Verification::Mismatch {
                    computed: computed.to_string(),
                    reported,
                }
            }
        }
        Err(err) => {
            tracing::warn!("verification skipped: {}", err);
            Verification::Skipped {
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn temp_file() -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"payload\n").unwrap();
        f.flush().unwrap();
        f
    }

    #[tokio::test]
    async fn run_tool_missing_tool() {
        let f = temp_file();
        let err = run_tool("fh-no-such-tool", f.path(), TIMEOUT).await.unwrap_err();
        assert!(matches!(err, VerifyError::Io(_)));
    }

    #[tokio::test]
    async fn run_tool_silent_tool() {
        // `true` ignores its argument and prints nothing.
        let f = temp_file();
        let err = run_tool("true", f.path(), TIMEOUT).await.unwrap_err();
        assert!(matches!(err, VerifyError::NoOutput));
    }

    #[tokio::test]
    async fn run_tool_failing_tool() {
        let f = temp_file();
        let err = run_tool("false", f.path(), TIMEOUT).await.unwrap_err();
        assert!(matches!(err, VerifyError::ToolFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_tool_times_out() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("slow.sh");
        std::fs::write(&script, "#!/bin/sh\nsleep 5\n").unwrap();
        let mut perm = std::fs::metadata(&script).unwrap().permissions();
        perm.set_mode(0o755);
        std::fs::set_permissions(&script, perm).unwrap();

        let f = temp_file();
        let err = run_tool(
            script.to_str().unwrap(),
            f.path(),
            Duration::from_millis(100),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, VerifyError::Timeout(_)));
    }

    #[tokio::test]
    async fn verify_on_disk_skips_on_tool_error() {
        let f = temp_file();
        let outcome = verify_on_disk("fh-no-such-tool", f.path(), "00", TIMEOUT).await;
        assert!(matches!(outcome, Verification::Skipped { .. }));
    }

    #[tokio::test]
    async fn verify_on_disk_reports_mismatch() {
        // `echo <path>` exits zero and prints the path, which is not a digest.
        let f = temp_file();
        let outcome = verify_on_disk("echo", f.path(), "00", TIMEOUT).await;
        match outcome {
            Verification::Mismatch { computed, reported } => {
                assert_eq!(computed, "00");
                assert_eq!(reported, f.path().to_string_lossy());
            }
            other => panic!("expected Mismatch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn verify_on_disk_matches_real_tool() {
        if std::process::Command::new("sha256sum")
            .arg("--version")
            .output()
            .is_err()
        {
            // Host has no sha256sum; the skip path is covered elsewhere.
            return;
        }
        let f = temp_file();
        let computed = crate::checksum::sha256_path(f.path()).unwrap();
        let outcome = verify_on_disk("sha256sum", f.path(), &computed, TIMEOUT).await;
        assert_eq!(outcome, Verification::Match { digest: computed });
    }
}
