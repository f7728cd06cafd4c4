//! Error kinds surfaced by the fetch workflow.

use reqwest::StatusCode;
use std::path::PathBuf;

/// Every way a release lookup or asset download can fail.
///
/// Workflow code returns these wrapped in `anyhow::Error`; callers recover
/// the kind with `downcast_ref::<FetchError>()`.
#[derive(Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    Fetch { url: String, source: reqwest::Error },
    /// The response body was not the JSON we expected.
    Decode {
        url: String,
        source: serde_json::Error,
    },
    /// The server answered with a non-2xx status.
    HttpStatus {
        url: String,
        status: StatusCode,
        rate_limited: bool,
    },
    /// "latest" was requested but the repository has no releases.
    NoReleases { repo: String },
    /// No release carries the requested tag.
    ReleaseNotFound { repo: String, tag: String },
    /// The selected release has no assets attached.
    NoAssets { tag: String },
    /// The selected release has assets, but none with the requested name.
    AssetNotFound {
        name: String,
        tag: String,
        available: Vec<String>,
    },
    /// Creating or writing the destination file failed.
    FileIo {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FetchError {
    fn status_hint(status: StatusCode, rate_limited: bool) -> Option<&'static str> {
        if rate_limited {
            return Some("Rate limit exceeded. Try again later or supply a token.");
        }
        match status {
            StatusCode::UNAUTHORIZED => {
                Some("Authentication failed. Check GITHUB_TOKEN or the --token value.")
            }
            StatusCode::FORBIDDEN => {
                Some("Access forbidden. The token may lack permission for this repository.")
            }
            StatusCode::NOT_FOUND => Some(
                "Not found. Check the repository name, or that the token can read this private repository.",
            ),
            _ => None,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Fetch { url, source } => {
                write!(f, "Failed to fetch {}: {}", url, source)
            }
            FetchError::Decode { url, source } => {
                write!(f, "Failed to parse JSON response from {}: {}", url, source)
            }
            FetchError::HttpStatus {
                url,
                status,
                rate_limited,
            } => {
                write!(f, "GitHub returned HTTP {} for {}", status, url)?;
                if let Some(hint) = FetchError::status_hint(*status, *rate_limited) {
                    write!(f, ". {}", hint)?;
                }
                Ok(())
            }
            FetchError::NoReleases { repo } => {
                write!(f, "No releases found for {}", repo)
            }
            FetchError::ReleaseNotFound { repo, tag } => {
                write!(f, "No release tagged '{}' found for {}", tag, repo)
            }
            FetchError::NoAssets { tag } => {
                write!(f, "Release {} has no assets", tag)
            }
            FetchError::AssetNotFound {
                name,
                tag,
                available,
            } => {
                write!(
                    f,
                    "No asset named '{}' in release {}. Available assets: {}",
                    name,
                    tag,
                    available.join(", ")
                )
            }
            FetchError::FileIo { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Fetch { source, .. } => Some(source),
            FetchError::Decode { source, .. } => Some(source),
            FetchError::FileIo { source, .. } => Some(source),
            _ => None,
        }
    }
}
