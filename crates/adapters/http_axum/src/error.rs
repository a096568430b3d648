//! Host adapter errors.

use std::path::PathBuf;

/// The client build output could not be read.
#[derive(Debug, thiserror::Error)]
pub enum AssetsError {
    /// `index.html` exists but could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
