use std::path::PathBuf;

/// Errors surfaced by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid module JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Gocue(#[from] gocue_lib::Error),
}
