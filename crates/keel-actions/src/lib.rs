//! Branch resolution and GitHub Actions plumbing for keel.
//!
//! Git is reached through the [`GitExecutor`] trait so the resolver can be
//! driven by mocks in tests. Workflow commands and step outputs go through
//! [`Workflow`], which writes to any `io::Write`.

pub mod executor;
pub mod git;
pub mod metadata;
pub mod workflow;

pub use executor::{GitExecutor, RealExecutor};
pub use git::{GitClient, GitError};
pub use metadata::{MetadataError, Resolution, resolve};
pub use workflow::{GITHUB_OUTPUT_ENV, Workflow, WorkflowError};
