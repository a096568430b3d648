//! Shared application state for axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use techblog_app::config::ClientConfig;

use crate::error::AssetsError;
use crate::spa;

/// Where the client build lives and the shell every client route gets.
///
/// `Clone` only bumps reference counts.
#[derive(Debug, Clone)]
pub struct AppState {
    assets_dir: Arc<Path>,
    index_html: Arc<str>,
}

impl AppState {
    /// Build state from an already-loaded shell. The API URL is injected here.
    pub fn new(assets_dir: impl Into<PathBuf>, index_html: &str, client: &ClientConfig) -> Self {
        let assets_dir: PathBuf = assets_dir.into();
        Self {
            assets_dir: assets_dir.into(),
            index_html: spa::inject_api_url(index_html, client.api_base_url()).into(),
        }
    }

    /// Read `index.html` from `assets_dir`, falling back to
    /// [`spa::DEFAULT_SHELL`] when the client has not been built.
    ///
    /// # Errors
    ///
    /// Returns [`AssetsError::Io`] if the file exists but cannot be read.
    pub fn load(assets_dir: impl Into<PathBuf>, client: &ClientConfig) -> Result<Self, AssetsError> {
        let assets_dir: PathBuf = assets_dir.into();
        let path = assets_dir.join("index.html");
        let index = match std::fs::read_to_string(&path) {
            Ok(index) => index,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "no client build found, serving placeholder shell");
                spa::DEFAULT_SHELL.to_string()
            }
            Err(source) => return Err(AssetsError::Io { path, source }),
        };
        Ok(Self::new(assets_dir, &index, client))
    }

    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// The shell with the API URL already injected.
    #[must_use]
    pub fn index_html(&self) -> &str {
        &self.index_html
    }
}
