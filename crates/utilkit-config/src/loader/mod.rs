//! Format detection and path resolution for document loading

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;
use utilkit_core::error::UtilError;
use utilkit_core::User;

use crate::{toml::Document, ConfigResult};

/// Document formats understood by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a file extension (case-insensitive)
    pub fn from_path(path: &Utf8Path) -> ConfigResult<Self> {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("toml") => Ok(DocumentFormat::Toml),
            _ => Err(UtilError::RecordValidation {
                field: "path".to_string(),
                reason: format!("'{}' is neither a .json nor a .toml file", path),
            }),
        }
    }
}

/// Loads documents relative to a base directory
pub struct DocumentLoader {
    base_dir: Utf8PathBuf,
}

impl DocumentLoader {
    /// Create a new loader resolving relative paths against `base_dir`
    pub fn new(base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }

    /// Absolute paths are kept; relative ones are joined to the base directory
    pub fn resolve(&self, path: &Utf8Path) -> Utf8PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Load a document, choosing the parser from the file extension
    pub async fn load(&self, path: impl AsRef<Utf8Path>) -> ConfigResult<Document> {
        let path = self.resolve(path.as_ref());
        let format = DocumentFormat::from_path(&path)?;
        debug!(%path, ?format, "loading document");

        match format {
            DocumentFormat::Json => crate::json::load_from_file(&path).await,
            DocumentFormat::Toml => crate::toml::load_from_file(&path).await,
        }
    }

    /// Load only the users of a document
    pub async fn load_users(&self, path: impl AsRef<Utf8Path>) -> ConfigResult<Vec<User>> {
        self.load(path).await.map(|document| document.users)
    }
}
