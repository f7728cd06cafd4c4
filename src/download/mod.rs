use crate::github::{GitHubRepo, ReleaseAsset, asset_url};
use crate::http::HttpClient;
use crate::runtime::Runtime;
use anyhow::Result;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Where a downloaded asset ended up and how big it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Downloaded {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Downloads `asset` of `repo` into `output_dir/<asset name>`.
///
/// The content is requested from the asset endpoint by id rather than from
/// the browser download URL, so private repositories work with a token.
/// An existing file with the same name is overwritten.
#[tracing::instrument(skip(runtime, http_client, asset), fields(asset = %asset.name))]
pub async fn download_asset<R: Runtime>(
    runtime: &R,
    http_client: &HttpClient,
    api_url: &str,
    repo: &GitHubRepo,
    asset: &ReleaseAsset,
    output_dir: &Path,
) -> Result<Downloaded> {
    let url = asset_url(api_url, repo, asset.id);
    let path = output_dir.join(&asset.name);

    info!("Downloading {} from {}...", asset.name, url);

    let bytes = http_client
        .download_file(&url, &path, |dest| runtime.create_file(dest))
        .await?;

    if asset.size > 0 && bytes != asset.size {
        warn!(
            "Downloaded {} bytes for {} but the release lists {} bytes",
            bytes, asset.name, asset.size
        );
    }

    info!("Download complete.");
    Ok(Downloaded { path, bytes })
}
