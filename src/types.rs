use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Configuration for talking to the release registry.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// The repository in "owner/repo" format.
    pub repo: String,
    /// Optional GitHub API token, sent as a bearer credential.
    pub token: Option<String>,
    /// Base URL for GitHub API. Defaults to "https://api.github.com".
    pub(crate) base_url: String,
}

impl PublisherConfig {
    /// Creates a new config for the given repository.
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            token: None,
            base_url: "https://api.github.com".to_string(),
        }
    }

    /// Sets a custom base URL (GitHub Enterprise, or a mock server in tests).
    #[doc(hidden)]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the GitHub API token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// A release as reported by GitHub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// The release tag name (e.g., "2.3.0").
    pub tag_name: String,
    /// The release name/title.
    #[serde(default)]
    pub name: Option<String>,
    /// The release body/description.
    #[serde(default)]
    pub body: Option<String>,
    /// Whether this is a prerelease.
    #[serde(default)]
    pub prerelease: bool,
    /// Whether this is a draft release.
    #[serde(default)]
    pub draft: bool,
    /// The URL to the release page.
    #[serde(default)]
    pub html_url: String,
    /// When the release was published. Drafts have none.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Request body for creating a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRelease {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl NewRelease {
    /// Builds the release for `version`: tag and name are both the version,
    /// and the release is always published (never a draft or prerelease).
    pub fn for_version(version: impl Into<String>, notes: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            tag_name: version.clone(),
            name: version,
            body: notes.into(),
            draft: false,
            prerelease: false,
        }
    }
}

/// What a successful publish run did.
#[derive(Debug, Clone)]
pub enum PublishOutcome {
    /// A release with this tag already existed; nothing was written.
    Skipped { version: String, existing: Release },
    /// A new release was created. `release` is `None` when the registry
    /// confirmed creation but its reply could not be read.
    Created {
        version: String,
        release: Option<Release>,
    },
}

impl PublishOutcome {
    /// The version this run was about.
    pub fn version(&self) -> &str {
        match self {
            Self::Skipped { version, .. } | Self::Created { version, .. } => version,
        }
    }

    /// Human-readable status line for the run.
    pub fn message(&self) -> String {
        match self {
            Self::Skipped { version, .. } => {
                format!("Found release {version}, skipping creation!")
            }
            Self::Created {
                version,
                release: Some(release),
            } if !release.html_url.is_empty() => {
                format!("Release {version} created successfully: {}", release.html_url)
            }
            Self::Created { version, .. } => format!("Release {version} created successfully."),
        }
    }
}
