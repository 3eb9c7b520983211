use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use url::Url;

use crate::error::{PublishError, Result};
use crate::types::{NewRelease, PublisherConfig, Release};

/// Largest page GitHub serves for the releases listing.
const RELEASES_PER_PAGE: u32 = 100;

/// The remote side of publishing: list existing releases, create new ones.
#[async_trait]
pub trait ReleaseRegistry {
    /// Lists releases in the order the registry returns them.
    async fn list_releases(&self) -> Result<Vec<Release>>;

    /// Creates `release`. Returns the stored record when the registry's
    /// reply could be read; `None` still means the release was created.
    async fn create_release(&self, release: &NewRelease) -> Result<Option<Release>>;
}

/// Release registry backed by the GitHub REST API.
pub struct GitHubRegistry {
    config: PublisherConfig,
    client: Client,
}

impl GitHubRegistry {
    /// Creates a registry client for the configured repository.
    pub fn new(config: PublisherConfig) -> Result<Self> {
        // Validate repo format
        if !is_valid_repo_format(&config.repo) {
            return Err(PublishError::InvalidRepo(config.repo.clone()));
        }

        // Validate base URL
        if Url::parse(&config.base_url).is_err() {
            return Err(PublishError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = Client::builder().user_agent("relpublish").build()?;

        Ok(Self { config, client })
    }

    fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/releases",
            self.config.base_url.trim_end_matches('/'),
            self.config.repo
        )
    }

    /// Adds the GitHub API headers and credential to a request.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");

        match self.config.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ReleaseRegistry for GitHubRegistry {
    /// Only the first page is read. Repositories with more releases than one
    /// page holds can miss an existing tag.
    async fn list_releases(&self) -> Result<Vec<Release>> {
        let request = self
            .client
            .get(self.releases_url())
            .query(&[("per_page", RELEASES_PER_PAGE)]);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| PublishError::RegistryListFailed {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PublishError::RegistryListFailed {
                status: Some(status.as_u16()),
                message,
            });
        }

        response
            .json::<Vec<Release>>()
            .await
            .map_err(|e| PublishError::RegistryListFailed {
                status: Some(status.as_u16()),
                message: format!("unexpected response body: {e}"),
            })
    }

    async fn create_release(&self, release: &NewRelease) -> Result<Option<Release>> {
        let request = self.client.post(self.releases_url()).json(release);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| PublishError::RegistryCreateFailed {
                status: None,
                message: e.to_string(),
            })?;

        // GitHub answers 201 for a new release; anything else is a failure.
        let status = response.status();
        if status != StatusCode::CREATED {
            let message = response.text().await.unwrap_or_default();
            return Err(PublishError::RegistryCreateFailed {
                status: Some(status.as_u16()),
                message,
            });
        }

        // The release exists once GitHub said 201, whatever the body holds.
        match response.json::<Release>().await {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                tracing::warn!(error = %e, "release created but response body was unreadable");
                Ok(None)
            }
        }
    }
}

/// Checks `repo` against GitHub's naming rules for "owner/repo".
///
/// Owners are up to 39 ASCII alphanumerics or hyphens, with no hyphen at
/// either end. Repository names are up to 100 ASCII alphanumerics, `-`, `_`
/// or `.`, and cannot be `.` or `..`.
fn is_valid_repo_format(repo: &str) -> bool {
    let mut parts = repo.split('/');
    let (Some(owner), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    let owner_ok = (1..=39).contains(&owner.len())
        && !owner.starts_with('-')
        && !owner.ends_with('-')
        && owner.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-');

    let name_ok = (1..=100).contains(&name.len())
        && !matches!(name, "." | "..")
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'));

    owner_ok && name_ok
}
