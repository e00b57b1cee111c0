use crate::domain::error::{AppError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// A file chosen by the user, read in full
#[derive(Debug, Clone, PartialEq)]
pub struct PickedFile {
    pub name: String,
    pub content: String,
}

/// Source of user-chosen CSV text, abstracting over picking mechanics.
///
/// `Ok(None)` means the user dismissed the picker; the caller keeps its
/// current state. Storage failures surface as `ReadError` once, with no
/// retries.
#[async_trait]
pub trait FileSource {
    async fn acquire(&self) -> Result<Option<PickedFile>>;
}

/// File source backed by a local filesystem path
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FileSource for LocalFileSource {
    async fn acquire(&self) -> Result<Option<PickedFile>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::ReadError(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        // UTF-8 first, lossy fallback for stray bytes
        let content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).to_string(),
        };

        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string());

        Ok(Some(PickedFile { name, content }))
    }
}
