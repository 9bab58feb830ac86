//! GitHub Actions workflow commands.
//!
//! Messages are written to stdout as `::command key=value::data` lines.
//! Step outputs go to the file named by `GITHUB_OUTPUT` when the runner
//! provides one, and fall back to the `set-output` command otherwise.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Environment variable holding the step output file path.
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Writer for workflow commands and step outputs.
pub struct Workflow<W: Write = io::Stdout> {
    out: W,
    output_file: Option<PathBuf>,
}

impl Workflow<io::Stdout> {
    pub fn stdout(output_file: Option<PathBuf>) -> Self {
        Self::new(io::stdout(), output_file)
    }
}

impl<W: Write> Workflow<W> {
    pub fn new(out: W, output_file: Option<PathBuf>) -> Self {
        Self { out, output_file }
    }

    pub fn notice(&mut self, message: &str) -> Result<(), WorkflowError> {
        self.command("notice", &[], message)
    }

    pub fn error(&mut self, message: &str) -> Result<(), WorkflowError> {
        self.command("error", &[], message)
    }

    /// Publish a step output. `None` is published as the empty string.
    pub fn set_output(&mut self, name: &str, value: Option<&str>) -> Result<(), WorkflowError> {
        // arch-lint: allow(no-silent-result-drop) reason="Option fallback, not a Result; None is published as the empty string"
        let value = value.unwrap_or("");
        tracing::debug!(output = name, value, "setting output");

        if let Some(path) = &self.output_file {
            return append_output(path, name, value);
        }
        self.command("set-output", &[("name", name)], value)
    }

    /// Report the run as failed. The caller decides the exit status.
    pub fn set_failed(&mut self, message: &str) -> Result<(), WorkflowError> {
        self.error(message)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn command(
        &mut self,
        command: &str,
        properties: &[(&str, &str)],
        message: &str,
    ) -> Result<(), WorkflowError> {
        let line = format_command(command, properties, message);
        writeln!(self.out, "{line}").map_err(|e| WorkflowError::Stdout { source: e })
    }
}

/// Render one `::command props::message` line without the trailing newline.
pub fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{command}");
    if !properties.is_empty() {
        let props = properties
            .iter()
            .map(|(key, value)| format!("{key}={}", escape_property(value)))
            .collect::<Vec<_>>()
            .join(",");
        line.push(' ');
        line.push_str(&props);
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Append `name<<DELIM\nvalue\nDELIM\n` to the output file.
fn append_output(path: &Path, name: &str, value: &str) -> Result<(), WorkflowError> {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(WorkflowError::DelimiterCollision {
            name: name.to_owned(),
        });
    }

    let write_err = |e| WorkflowError::OutputFile {
        path: path.to_path_buf(),
        source: e,
    };

    // The runner creates the file; a missing file means GITHUB_OUTPUT is wrong.
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(write_err)?;
    write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n").map_err(write_err)
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("failed to write workflow command to stdout")]
    Stdout { source: io::Error },

    #[error("failed to append step output to {path}")]
    OutputFile { path: PathBuf, source: io::Error },

    #[error("output '{name}' collides with the generated delimiter")]
    DelimiterCollision { name: String },
}
