//! Setup-time failures.
//!
//! Only configuration loading can fail. A constructed device has no error
//! paths: state transitions and attribute writes are infallible by design.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not a valid [`TabletConfig`](crate::config::TabletConfig).
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
