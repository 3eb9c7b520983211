use crate::error::{PublishError, Result};
use crate::notes::NotesStore;
use crate::registry::ReleaseRegistry;
use crate::types::{NewRelease, PublishOutcome};
use crate::version::VersionResolver;

/// Publishes a release for the current version unless one already exists.
pub struct ReleasePublisher<V, N, R> {
    resolver: V,
    notes: N,
    registry: R,
}

impl<V, N, R> ReleasePublisher<V, N, R>
where
    V: VersionResolver,
    N: NotesStore,
    R: ReleaseRegistry,
{
    pub fn new(resolver: V, notes: N, registry: R) -> Self {
        Self {
            resolver,
            notes,
            registry,
        }
    }

    /// Runs the publish workflow once.
    ///
    /// Fails before touching the network when there is no version or no
    /// release notes for it. Makes exactly one list call, then at most one
    /// create call. Nothing is retried; running again is the recovery path.
    pub async fn publish(&self) -> Result<PublishOutcome> {
        let version = self
            .resolver
            .resolve()
            .await?
            .filter(|v| !v.trim().is_empty())
            .ok_or(PublishError::NoVersionFound)?;
        tracing::debug!(%version, "version resolved");

        let notes = self
            .notes
            .load(&version)
            .await?
            .ok_or_else(|| PublishError::NotesNotFound {
                path: self.notes.location(&version),
                version: version.clone(),
            })?;
        tracing::debug!(%version, "release notes loaded");

        let releases = self.registry.list_releases().await?;
        tracing::debug!(%version, count = releases.len(), "existing releases listed");

        if let Some(existing) = releases.into_iter().find(|r| r.tag_name == version) {
            tracing::info!(%version, "release already exists, skipping creation");
            return Ok(PublishOutcome::Skipped { version, existing });
        }

        tracing::info!(%version, "creating release");
        let candidate = NewRelease::for_version(version.as_str(), notes);
        match self.registry.create_release(&candidate).await {
            Ok(release) => {
                let url = release.as_ref().map(|r| r.html_url.as_str()).unwrap_or_default();
                tracing::info!(%version, %url, "release created");
                Ok(PublishOutcome::Created { version, release })
            }
            Err(e) => {
                tracing::warn!(%version, error = %e, "release creation failed");
                Err(e)
            }
        }
    }
}
