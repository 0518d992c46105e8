//! Error types for alias configuration and the console loop.
//!
//! Command-resolution misses (unknown verbs, absent items, locked paths)
//! are not errors; they are ordinary output lines.

use std::path::PathBuf;

/// Errors raised while loading an alias table.
#[derive(Debug, thiserror::Error)]
pub enum AliasError {
    #[error("failed to read alias table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed alias table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("alias #{0} has an empty phrase")]
    EmptyPhrase(usize),
}

/// Errors that end the console loop.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error("line editor failed: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
