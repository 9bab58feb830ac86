use keel_actions::{GITHUB_OUTPUT_ENV, GitClient, Workflow};
use std::path::PathBuf;
use std::process::ExitCode;

/// Resolve the current branch and publish its deployment outputs.
///
/// Any failure is reported as an `::error::` workflow command and turns into
/// exit status 1. Outputs published before the failure stay published.
pub fn metadata() -> anyhow::Result<ExitCode> {
    let output_file = std::env::var_os(GITHUB_OUTPUT_ENV)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);
    let mut workflow = Workflow::stdout(output_file);
    let git = GitClient::new();

    match keel_actions::metadata::run(&git, &mut workflow) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            let message = format!("{:#}", anyhow::Error::new(e));
            tracing::error!(%message, "metadata run failed");
            workflow.set_failed(&message)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
