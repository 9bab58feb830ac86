use crate::executor::{GitExecutor, RealExecutor};

/// Git queries, parameterized over the executor for testability.
pub struct GitClient<E: GitExecutor = RealExecutor> {
    executor: E,
}

impl GitClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for GitClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GitExecutor> GitClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Name of the checked-out branch, via `git rev-parse --abbrev-ref HEAD`.
    ///
    /// Trailing whitespace is stripped. A detached HEAD yields `"HEAD"`.
    pub fn current_branch(&self) -> Result<String, GitError> {
        let stdout = self
            .executor
            .exec(&args(["rev-parse", "--abbrev-ref", "HEAD"]))?;
        Ok(stdout.trim_end().to_owned())
    }
}

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("git CLI not found, install: https://git-scm.com/downloads")]
    NotFound { source: std::io::Error },

    #[error("git command failed: {args:?}\n{stderr}")]
    CommandFailed { args: Vec<String>, stderr: String },

    #[error("git output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },
}
