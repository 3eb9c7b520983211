use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use relpublish::{
    DirNotesStore, FixedVersion, GitHubRegistry, GitTagResolver, PublishOutcome,
    PublisherConfig, ReleasePublisher, Result, VersionResolver, DEFAULT_NOTES_DIR,
};
use tracing_subscriber::EnvFilter;

/// Publish a GitHub release for the latest git tag, once
#[derive(Parser, Debug)]
#[command(name = "relpublish", version, about, long_about = None)]
struct Cli {
    /// Target repository in "owner/repo" format
    #[arg(long, env = "RELPUBLISH_REPO")]
    repo: String,

    /// GitHub token with write access to the repository
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Directory containing <version>.md release notes
    #[arg(long, default_value = DEFAULT_NOTES_DIR)]
    notes_dir: PathBuf,

    /// Release this version instead of the latest git tag
    #[arg(long = "release-version", value_name = "VERSION")]
    release_version: Option<String>,

    /// Git working tree to read tags from
    #[arg(long, default_value = ".")]
    git_dir: PathBuf,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    api_url: String,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RELPUBLISH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run<V: VersionResolver>(resolver: V, cli: &Cli) -> Result<PublishOutcome> {
    let mut config = PublisherConfig::new(&cli.repo).base_url(&cli.api_url);
    if let Some(ref token) = cli.token {
        config = config.token(token);
    }

    let notes = DirNotesStore::new(&cli.notes_dir);
    tracing::debug!(dir = %notes.dir().display(), repo = %cli.repo, "publishing");

    ReleasePublisher::new(resolver, notes, GitHubRegistry::new(config)?)
        .publish()
        .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.release_version {
        Some(ref version) => run(FixedVersion::new(version), &cli).await,
        None => run(GitTagResolver::new(&cli.git_dir), &cli).await,
    };

    match result {
        Ok(outcome) => {
            println!("{}", outcome.message());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
