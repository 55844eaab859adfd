use std::path::{Path, PathBuf};

use crate::foundation::error::{StrokeError, StrokeResult};

/// Destination for a finished scene document.
///
/// `write_document` is called exactly once per conversion, after every shape entry has been
/// appended.
pub trait SceneSink {
    /// Store the complete document text.
    fn write_document(&mut self, text: &str) -> StrokeResult<()>;
}

/// Writes the document to a file, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink targeting `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SceneSink for FileSink {
    fn write_document(&mut self, text: &str) -> StrokeResult<()> {
        ensure_parent_dir(&self.path)?;
        std::fs::write(&self.path, text).map_err(|e| {
            StrokeError::io(format!("write scene '{}': {e}", self.path.display()))
        })?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "wrote scene");
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    text: Option<String>,
}

impl InMemorySink {
    /// Create an empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Document captured by `write_document`, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl SceneSink for InMemorySink {
    fn write_document(&mut self, text: &str) -> StrokeResult<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> StrokeResult<()> {
    if let Some(parent) = path.parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(parent).map_err(|e| {
            StrokeError::io(format!(
                "create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sink.rs"]
mod tests;
