//! Branch-to-deployment mapping.
//!
//! Only three branches deploy anywhere. Every other branch resolves to
//! `None`, which is a normal outcome rather than an error.
//!
//! | branch    | deployment name | KMS alias         |
//! |-----------|-----------------|-------------------|
//! | `main`    | `nightly`       | `api_integration` |
//! | `staging` | `staging`       | `api_stage`       |
//! | `release` | `production`    | `api_production`  |

use std::fmt;

/// Deployment environment targeted by a branch.
///
/// # Examples
///
/// ```
/// use keel_core::Deployment;
///
/// let deployment = Deployment::from_branch("release").unwrap();
/// assert_eq!(deployment.name(), "production");
/// assert_eq!(deployment.kms_alias(), "api_production");
///
/// assert!(Deployment::from_branch("feature/x").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deployment {
    Nightly,
    Staging,
    Production,
}

/// Branches that map to a deployment. Matching is exact and case-sensitive.
const BRANCHES: &[(&str, Deployment)] = &[
    ("main", Deployment::Nightly),
    ("staging", Deployment::Staging),
    ("release", Deployment::Production),
];

impl Deployment {
    pub const ALL: [Deployment; 3] = [
        Deployment::Nightly,
        Deployment::Staging,
        Deployment::Production,
    ];

    /// Look up the deployment for a branch name.
    pub fn from_branch(branch: &str) -> Option<Self> {
        BRANCHES
            .iter()
            .find(|(name, _)| *name == branch)
            .map(|(_, deployment)| *deployment)
    }

    /// Deployment name published as the `deployment-name` output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Nightly => "nightly",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// KMS key alias published as the `kms-alias` output.
    pub fn kms_alias(self) -> &'static str {
        match self {
            Self::Nightly => "api_integration",
            Self::Staging => "api_stage",
            Self::Production => "api_production",
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
