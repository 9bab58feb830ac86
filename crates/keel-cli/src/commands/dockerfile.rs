use chrono::Utc;
use keel_build::{DockerfileGenerator, write_dockerfile};
use keel_core::{KeelConfig, RenderParams};
use std::path::PathBuf;

pub fn dockerfile() -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let config = KeelConfig::load(&project_dir)?;
    let paths = config.dockerfile.resolve(&project_dir);

    let generator = DockerfileGenerator::from_file(&paths.template)?;
    let mut params = RenderParams::load(&paths.params)?;
    params.stamp(Utc::now());

    let rendered = generator.render(&params)?;
    write_dockerfile(&paths.output, &rendered)?;

    tracing::info!(
        template = %paths.template.display(),
        output = %paths.output.display(),
        "rendered Dockerfile"
    );
    println!("Wrote {}", paths.output.display());
    Ok(())
}
