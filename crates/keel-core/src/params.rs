//! Render parameters loaded from `params.json`.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Identifier written into every rendered Dockerfile as `generator`.
pub const GENERATOR: &str = "ecr-dockerfile-generator";

/// String-keyed template parameters.
///
/// Values are arbitrary JSON. `generator` and `timestamp` are overwritten by
/// [`RenderParams::stamp`] before rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderParams(Map<String, Value>);

impl RenderParams {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    /// Read and parse a JSON object from `path`.
    pub fn load(path: &Path) -> crate::Result<Self> {
        tracing::debug!(path = %path.display(), "loading render parameters");
        let load_err = |detail: String| crate::Error::ParamsLoad {
            path: path.to_path_buf(),
            detail,
        };

        let content = std::fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        Self::parse(&content).map_err(load_err)
    }

    fn parse(content: &str) -> Result<Self, String> {
        match serde_json::from_str::<Value>(content).map_err(|e| e.to_string())? {
            Value::Object(values) => Ok(Self(values)),
            other => Err(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            )),
        }
    }

    /// Set `generator` and `timestamp`, replacing any values from the file.
    pub fn stamp(&mut self, now: DateTime<Utc>) {
        self.0
            .insert("generator".to_owned(), Value::String(GENERATOR.to_owned()));
        self.0.insert(
            "timestamp".to_owned(),
            Value::String(iso_timestamp(now)),
        );
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2026-10-18T09:41:07.512Z`.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
