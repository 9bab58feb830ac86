use keel_core::{DockerfileConfig, KeelConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = KeelConfig::load(tmp.path()).unwrap();

    assert_eq!(
        config.dockerfile.template,
        PathBuf::from("res/ECR.Dockerfile.hbs")
    );
    assert_eq!(config.dockerfile.params, PathBuf::from("params.json"));
    assert_eq!(config.dockerfile.output, PathBuf::from("Dockerfile"));
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[dockerfile]
template = "templates/api.Dockerfile.hbs"
params = "ci/params.json"
output = "build/Dockerfile"
"#;
    std::fs::write(tmp.path().join("keel.toml"), toml).unwrap();

    let config = KeelConfig::load(tmp.path()).unwrap();

    assert_eq!(
        config.dockerfile.template,
        PathBuf::from("templates/api.Dockerfile.hbs")
    );
    assert_eq!(config.dockerfile.params, PathBuf::from("ci/params.json"));
    assert_eq!(config.dockerfile.output, PathBuf::from("build/Dockerfile"));
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[dockerfile]
output = "out/Dockerfile"
"#;
    std::fs::write(tmp.path().join("keel.toml"), toml).unwrap();

    let config = KeelConfig::load(tmp.path()).unwrap();

    assert_eq!(
        config.dockerfile.template,
        PathBuf::from("res/ECR.Dockerfile.hbs")
    );
    assert_eq!(config.dockerfile.params, PathBuf::from("params.json"));
    assert_eq!(config.dockerfile.output, PathBuf::from("out/Dockerfile"));
}

#[test]
fn load_empty_file_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("keel.toml"), "").unwrap();

    let config = KeelConfig::load(tmp.path()).unwrap();
    assert_eq!(config.dockerfile, DockerfileConfig::default());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("keel.toml"), "[dockerfile\noutput = ").unwrap();

    let err = KeelConfig::load(tmp.path()).unwrap_err();
    assert!(matches!(err, keel_core::Error::ConfigParse { .. }));
    assert!(err.to_string().contains("keel.toml"));
}

#[test]
fn resolve_joins_relative_paths() {
    let resolved = DockerfileConfig::default().resolve(Path::new("/work"));

    assert_eq!(
        resolved.template,
        PathBuf::from("/work/res/ECR.Dockerfile.hbs")
    );
    assert_eq!(resolved.params, PathBuf::from("/work/params.json"));
    assert_eq!(resolved.output, PathBuf::from("/work/Dockerfile"));
}

#[test]
fn resolve_keeps_absolute_paths() {
    let config = DockerfileConfig {
        output: PathBuf::from("/tmp/Dockerfile"),
        ..Default::default()
    };
    let resolved = config.resolve(Path::new("/work"));

    assert_eq!(resolved.output, PathBuf::from("/tmp/Dockerfile"));
}
