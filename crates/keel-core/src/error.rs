use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Render parameters ──
    /// Absent, unreadable, malformed, and non-object parameter files all
    /// surface through this one variant so the message shape stays the same.
    #[error("failed to load render parameters from {path}: {detail}")]
    ParamsLoad { path: PathBuf, detail: String },
}
