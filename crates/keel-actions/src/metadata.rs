//! Deployment metadata for the current branch.
//!
//! ```text
//! keel metadata
//!   1. Branch      ── git rev-parse --abbrev-ref HEAD
//!   2. Notice      ── Current branch is '<branch>'
//!   3. Output      ── deployment-name  (nightly | staging | production | empty)
//!   4. Output      ── kms-alias        (api_integration | api_stage | api_production | empty)
//! ```

use std::io::Write;

use keel_core::Deployment;

use crate::executor::GitExecutor;
use crate::git::{GitClient, GitError};
use crate::workflow::{Workflow, WorkflowError};

pub const DEPLOYMENT_NAME_OUTPUT: &str = "deployment-name";
pub const KMS_ALIAS_OUTPUT: &str = "kms-alias";

/// Values derived from one branch name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub branch: String,
    pub deployment_name: Option<&'static str>,
    pub kms_alias: Option<&'static str>,
}

/// Map a branch name to its deployment name and KMS alias.
pub fn resolve(branch: &str) -> Resolution {
    let deployment = Deployment::from_branch(branch);
    Resolution {
        branch: branch.to_owned(),
        deployment_name: deployment.map(Deployment::name),
        kms_alias: deployment.map(Deployment::kms_alias),
    }
}

/// Query the current branch and publish both outputs.
///
/// The branch is read before anything is published, so a git failure
/// leaves no outputs behind.
pub fn run<E: GitExecutor, W: Write>(
    git: &GitClient<E>,
    workflow: &mut Workflow<W>,
) -> Result<Resolution, MetadataError> {
    let branch = git
        .current_branch()
        .map_err(|e| MetadataError::Branch { source: e })?;
    workflow.notice(&format!("Current branch is '{branch}'"))?;

    let resolution = resolve(&branch);
    tracing::info!(
        branch = %resolution.branch,
        deployment_name = ?resolution.deployment_name,
        kms_alias = ?resolution.kms_alias,
        "resolved deployment metadata"
    );

    workflow.notice(&format!(
        "Deployment name is '{}'",
        display_value(resolution.deployment_name)
    ))?;
    workflow.set_output(DEPLOYMENT_NAME_OUTPUT, resolution.deployment_name)?;

    workflow.notice(&format!(
        "KMS alias is '{}'",
        display_value(resolution.kms_alias)
    ))?;
    workflow.set_output(KMS_ALIAS_OUTPUT, resolution.kms_alias)?;

    Ok(resolution)
}

fn display_value(value: Option<&str>) -> &str {
    // arch-lint: allow(no-silent-result-drop) reason="Option fallback, not a Result; absent values are displayed as null"
    value.unwrap_or("null")
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("failed to read the current branch")]
    Branch { source: GitError },

    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}
