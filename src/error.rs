use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while publishing a release.
#[derive(Error, Debug)]
pub enum PublishError {
    /// The version resolver found no tag to release.
    #[error("No version found: the repository has no git tag to release")]
    NoVersionFound,

    /// No release notes document exists for the resolved version.
    #[error("Release notes not found for {version}: expected {}", .path.display())]
    NotesNotFound { version: String, path: PathBuf },

    /// The version cannot be used as a notes file name.
    #[error("Invalid version '{0}': not usable as a release notes file name")]
    InvalidVersion(String),

    /// Listing existing releases failed.
    #[error("Failed to list releases{}: {message}", status_suffix(.status))]
    RegistryListFailed { status: Option<u16>, message: String },

    /// Creating the release failed.
    #[error("Failed to create release{}: {message}", status_suffix(.status))]
    RegistryCreateFailed { status: Option<u16>, message: String },

    /// Invalid repository format.
    #[error("Invalid repository format: expected 'owner/repo', got '{0}'")]
    InvalidRepo(String),

    /// Invalid base URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Error setting up the HTTP client.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error (notes files, git process).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|code| format!(" (status {code})"))
        .unwrap_or_default()
}

/// Result type alias for publishing operations.
pub type Result<T> = std::result::Result<T, PublishError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_failed_message_includes_status() {
        let err = PublishError::RegistryCreateFailed {
            status: Some(422),
            message: "Validation Failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to create release (status 422): Validation Failed"
        );
    }

    #[test]
    fn test_list_failed_message_without_status() {
        let err = PublishError::RegistryListFailed {
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to list releases: connection refused");
    }
}
