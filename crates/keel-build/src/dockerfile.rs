use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use keel_core::RenderParams;
use serde_json::{Map, Number, Value};

/// Renders a Dockerfile template against [`RenderParams`].
pub struct DockerfileGenerator {
    name: String,
    registry: Handlebars<'static>,
}

impl DockerfileGenerator {
    /// Compile `source` under `name`. The name only appears in diagnostics.
    pub fn new(name: impl Into<String>, source: impl AsRef<str>) -> Result<Self, RenderError> {
        let name = name.into();
        let mut registry = Handlebars::new();
        registry
            .register_template_string(&name, source)
            .map_err(|e| RenderError::Compile {
                name: name.clone(),
                source: e,
            })?;

        Ok(Self { name, registry })
    }

    /// Load and compile the template at `path`.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        tracing::debug!(path = %path.display(), "loading template");
        let source = std::fs::read_to_string(path).map_err(|e| RenderError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::new(path.display().to_string(), source)
    }

    pub fn render(&self, params: &RenderParams) -> Result<String, RenderError> {
        let data = template_data(params.as_map());
        self.registry
            .render(&self.name, &data)
            .map_err(|e| RenderError::Render {
                name: self.name.clone(),
                source: e,
            })
    }
}

/// Rewrite values into the form Handlebars prints them in.
///
/// Objects stay structured so dotted paths resolve. Arrays collapse to their
/// comma-joined string and whole-number floats lose the `.0`.
fn template_data(values: &Map<String, Value>) -> Value {
    Value::Object(
        values
            .iter()
            .map(|(key, value)| (key.clone(), template_value(value)))
            .collect(),
    )
}

fn template_value(value: &Value) -> Value {
    match value {
        Value::Object(values) => template_data(values),
        Value::Array(_) => Value::String(display_string(value)),
        Value::Number(n) => Value::Number(whole_number(n)),
        other => other.clone(),
    }
}

/// String form of a value inside an array. Null elements print nothing and
/// nested arrays are flattened.
fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => whole_number(n).to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

fn whole_number(n: &Number) -> Number {
    // Beyond 2^53 a float no longer holds every integer exactly.
    const MAX_EXACT: f64 = (1u64 << 53) as f64;
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT => {
            Number::from(f as i64)
        }
        _ => n.clone(),
    }
}

/// Write the rendered Dockerfile, replacing any existing file.
pub fn write_dockerfile(path: &Path, content: &str) -> Result<(), RenderError> {
    std::fs::write(path, content).map_err(|e| RenderError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote Dockerfile");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to read template at {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to compile template {name}")]
    Compile {
        name: String,
        source: handlebars::TemplateError,
    },
    #[error("failed to render template {name}")]
    Render {
        name: String,
        source: handlebars::RenderError,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
