mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "keel", about = "CI helpers for branch deployments and Dockerfile generation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish deployment-name and kms-alias outputs for the current branch
    Metadata,
    /// Render the Dockerfile template with params.json
    Dockerfile,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // arch-lint: allow(no-silent-result-drop) reason="missing or invalid RUST_LOG falls back to the default info filter"
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Metadata => commands::metadata(),
        Commands::Dockerfile => {
            commands::dockerfile()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
