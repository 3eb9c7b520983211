//! # relpublish
//!
//! Publishes a GitHub release for the latest git tag, using the release notes
//! in `release_notes/<version>.md`. Publishing is idempotent: if a release for
//! the tag already exists, nothing is written.
//!
//! ## Example
//!
//! ```no_run
//! use relpublish::{
//!     DirNotesStore, GitHubRegistry, GitTagResolver, PublisherConfig, ReleasePublisher,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PublisherConfig::new("owner/repo")
//!         .token(std::env::var("GITHUB_TOKEN")?);
//!
//!     let publisher = ReleasePublisher::new(
//!         GitTagResolver::new("."),
//!         DirNotesStore::default(),
//!         GitHubRegistry::new(config)?,
//!     );
//!
//!     let outcome = publisher.publish().await?;
//!     println!("{}", outcome.message());
//!
//!     Ok(())
//! }
//! ```

mod error;
mod notes;
mod publisher;
mod registry;
mod types;
mod version;

pub use error::{PublishError, Result};
pub use notes::{DirNotesStore, NotesStore, DEFAULT_NOTES_DIR};
pub use publisher::ReleasePublisher;
pub use registry::{GitHubRegistry, ReleaseRegistry};
pub use types::{NewRelease, PublishOutcome, PublisherConfig, Release};
pub use version::{FixedVersion, GitTagResolver, VersionResolver};
