//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a [`ChartsConfig`](crate::ChartsConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML, unknown scale mode or bad color string
    #[error("invalid chart config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Parsed fine but describes an unusable widget
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
