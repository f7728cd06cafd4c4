//! Release resolution: pick one release of a repository by version selector.

use anyhow::Result;
use log::{debug, info};

use crate::error::FetchError;
use crate::github::{GetReleases, GitHubRepo, PER_PAGE, Release};

/// Upper bound on pages fetched while searching for a tag (1000 releases).
pub const MAX_PAGES: u32 = 10;

/// Which release to target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelector {
    /// The first release in the service's most-recent-first listing.
    Latest,
    /// The release whose tag name equals this string exactly.
    Tag(String),
}

impl From<&str> for VersionSelector {
    fn from(s: &str) -> Self {
        if s == "latest" {
            VersionSelector::Latest
        } else {
            VersionSelector::Tag(s.to_string())
        }
    }
}

impl std::fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionSelector::Latest => write!(f, "latest"),
            VersionSelector::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

/// Selects a release from a most-recent-first list.
///
/// When several releases share the requested tag, the last one in the list
/// is returned.
pub fn select_release(
    releases: Vec<Release>,
    selector: &VersionSelector,
    repo: &GitHubRepo,
) -> Result<Release, FetchError> {
    match selector {
        VersionSelector::Latest => {
            releases
                .into_iter()
                .next()
                .ok_or_else(|| FetchError::NoReleases {
                    repo: repo.to_string(),
                })
        }
        // Searching from the back makes the last duplicate win.
        VersionSelector::Tag(tag) => releases
            .into_iter()
            .rev()
            .find(|r| r.tag_name == *tag)
            .ok_or_else(|| FetchError::ReleaseNotFound {
                repo: repo.to_string(),
                tag: tag.clone(),
            }),
    }
}

/// Fetches the release list for `repo`, page by page.
///
/// Stops after the first page when `all_pages` is false, on a short or empty
/// page, or after [`MAX_PAGES`].
#[tracing::instrument(skip(github))]
pub async fn fetch_releases<G: GetReleases + ?Sized>(
    github: &G,
    repo: &GitHubRepo,
    all_pages: bool,
) -> Result<Vec<Release>> {
    let mut releases = Vec::new();

    for page in 1..=MAX_PAGES {
        let parsed = github.get_releases_page(repo, page).await?;
        let len = parsed.len();
        releases.extend(parsed);

        if !all_pages || len < PER_PAGE {
            break;
        }
    }

    debug!("Fetched {} release(s) for {}", releases.len(), repo);
    Ok(releases)
}

/// Resolves `selector` to a single release of `repo`.
#[tracing::instrument(skip(github))]
pub async fn resolve<G: GetReleases + ?Sized>(
    github: &G,
    repo: &GitHubRepo,
    selector: &VersionSelector,
) -> Result<Release> {
    // Element 0 of the first page is the newest release, so "latest" never
    // needs more than one page.
    let all_pages = matches!(selector, VersionSelector::Tag(_));
    let releases = fetch_releases(github, repo, all_pages).await?;
    let release = select_release(releases, selector, repo)?;

    info!(
        "Resolved {} for {} to release {} (id {})",
        selector, repo, release.tag_name, release.id
    );
    Ok(release)
}
