use std::process::{Command, Stdio};

use crate::git::GitError;

/// Abstraction over git CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
pub trait GitExecutor {
    /// Execute a git command and capture stdout.
    fn exec(&self, args: &[String]) -> Result<String, GitError>;
}

/// Real git CLI executor. Runs in the process working directory.
pub struct RealExecutor;

impl GitExecutor for RealExecutor {
    fn exec(&self, args: &[String]) -> Result<String, GitError> {
        tracing::debug!(?args, "running git");

        let output = Command::new("git")
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| GitError::NotFound { source: e })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| GitError::InvalidUtf8 { source: e })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            Err(GitError::CommandFailed {
                args: args.to_vec(),
                stderr,
            })
        }
    }
}
