use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{PublishError, Result};

/// Default directory holding one `<version>.md` file per release.
pub const DEFAULT_NOTES_DIR: &str = "release_notes";

/// Supplies the release notes for a version.
#[async_trait]
pub trait NotesStore {
    /// Where the notes for `version` are expected, for error reporting.
    fn location(&self, version: &str) -> PathBuf;

    /// Returns the notes text for `version`, or `None` if there are none.
    async fn load(&self, version: &str) -> Result<Option<String>>;
}

/// Reads release notes from `<dir>/<version>.md`.
#[derive(Debug, Clone)]
pub struct DirNotesStore {
    dir: PathBuf,
}

impl DirNotesStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for DirNotesStore {
    fn default() -> Self {
        Self::new(DEFAULT_NOTES_DIR)
    }
}

#[async_trait]
impl NotesStore for DirNotesStore {
    fn location(&self, version: &str) -> PathBuf {
        self.dir.join(format!("{version}.md"))
    }

    async fn load(&self, version: &str) -> Result<Option<String>> {
        if !is_safe_file_key(version) {
            return Err(PublishError::InvalidVersion(version.to_string()));
        }

        let path = self.location(version);
        match tokio::fs::read_to_string(&path).await {
            Ok(notes) => {
                tracing::debug!(path = %path.display(), bytes = notes.len(), "loaded release notes");
                Ok(Some(notes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// A version may only name a file directly inside the notes directory.
fn is_safe_file_key(version: &str) -> bool {
    !version.is_empty()
        && version != "."
        && version != ".."
        && !version.contains(['/', '\\', '\0'])
}
