use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::Result;

/// Supplies the version to release.
#[async_trait]
pub trait VersionResolver {
    /// Returns the current version, or `None` when there is nothing to release.
    async fn resolve(&self) -> Result<Option<String>>;
}

/// Resolves the version from the most recent tag reachable from HEAD.
#[derive(Debug, Clone)]
pub struct GitTagResolver {
    repo_dir: PathBuf,
}

impl GitTagResolver {
    /// Creates a resolver that runs git inside `repo_dir`.
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }
}

#[async_trait]
impl VersionResolver for GitTagResolver {
    async fn resolve(&self) -> Result<Option<String>> {
        let output = Command::new("git")
            .current_dir(&self.repo_dir)
            .args(["describe", "--tags", "--abbrev=0"])
            .output()
            .await?;

        // Non-zero exit means no tag (or no repository); both are "nothing to release".
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(
                dir = %self.repo_dir.display(),
                stderr = %stderr.trim(),
                "git describe found no tag"
            );
            return Ok(None);
        }

        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!tag.is_empty()).then_some(tag))
    }
}

/// A version supplied up front, e.g. from the command line.
#[derive(Debug, Clone)]
pub struct FixedVersion(Option<String>);

impl FixedVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(Some(version.into()))
    }

    /// A resolver that never finds a version.
    pub fn none() -> Self {
        Self(None)
    }
}

#[async_trait]
impl VersionResolver for FixedVersion {
    async fn resolve(&self) -> Result<Option<String>> {
        Ok(self.0.clone())
    }
}
