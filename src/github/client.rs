use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use super::repo::GitHubRepo;
use super::types::Release;
use crate::http::HttpClient;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Page size requested from the releases endpoint (the API maximum).
pub const PER_PAGE: usize = 100;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetReleases: Send + Sync {
    /// Fetches one 1-based page of the release list, newest first.
    async fn get_releases_page(&self, repo: &GitHubRepo, page: u32) -> Result<Vec<Release>>;
    fn api_url(&self) -> &str;
}

pub struct GitHub {
    pub http_client: HttpClient,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(http_client, api_url))]
    pub fn new(http_client: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http_client,
            api_url,
        }
    }
}

#[async_trait]
impl GetReleases for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn get_releases_page(&self, repo: &GitHubRepo, page: u32) -> Result<Vec<Release>> {
        GitHub::fetch_releases_page(repo, page, &self.http_client, &self.api_url).await
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl GitHub {
    #[tracing::instrument(skip(http_client, api_url))]
    pub async fn fetch_releases_page(
        repo: &GitHubRepo,
        page: u32,
        http_client: &HttpClient,
        api_url: &str,
    ) -> Result<Vec<Release>> {
        let url = format!("{}/repos/{}/{}/releases", api_url, repo.owner, repo.repo);

        debug!("Fetching releases page {} from {}...", page, url);

        let per_page = PER_PAGE.to_string();
        let page = page.to_string();
        let releases: Vec<Release> = http_client
            .get_json_with_query(&url, &[("per_page", per_page.as_str()), ("page", page.as_str())])
            .await?;

        debug!("Received {} release(s)", releases.len());
        Ok(releases)
    }
}

/// Binary content endpoint of an asset, addressed by repository and asset id.
pub fn asset_url(api_url: &str, repo: &GitHubRepo, asset_id: u64) -> String {
    format!(
        "{}/repos/{}/{}/releases/assets/{}",
        api_url, repo.owner, repo.repo, asset_id
    )
}
