use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "keel.toml";

/// keel.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeelConfig {
    #[serde(default)]
    pub dockerfile: DockerfileConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerfileConfig {
    /// Template rendered into the Dockerfile
    #[serde(default = "default_template")]
    pub template: PathBuf,
    /// JSON object supplying template parameters
    #[serde(default = "default_params")]
    pub params: PathBuf,
    /// Rendered output, overwritten on every run
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for DockerfileConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            params: default_params(),
            output: default_output(),
        }
    }
}

impl DockerfileConfig {
    /// Resolve all paths against `base`. Absolute paths are kept as-is.
    pub fn resolve(&self, base: &Path) -> Self {
        Self {
            template: base.join(&self.template),
            params: base.join(&self.params),
            output: base.join(&self.output),
        }
    }
}

impl KeelConfig {
    /// Load from keel.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_template() -> PathBuf {
    PathBuf::from("res/ECR.Dockerfile.hbs")
}

fn default_params() -> PathBuf {
    PathBuf::from("params.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("Dockerfile")
}
