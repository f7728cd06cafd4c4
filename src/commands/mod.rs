use anyhow::Result;
use log::debug;

use crate::{
    asset::locate_asset,
    download::{Downloaded, download_asset},
    github::{GetReleases, GitHubRepo},
    release::{VersionSelector, resolve},
    runtime::Runtime,
};

pub mod config;

use config::{ClientOptions, Config};

/// What to download: one named asset of one release of one repository.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Repository in `owner/repo` form.
    pub repo: String,
    /// Exact file name of the asset.
    pub asset_name: String,
    /// `latest` or an exact tag name.
    pub selector: String,
}

/// Resolve, locate and download in one go, reporting progress on stdout.
#[tracing::instrument(skip(runtime, options))]
pub async fn fetch<R: Runtime>(
    runtime: R,
    request: &FetchRequest,
    options: ClientOptions,
) -> Result<()> {
    let config = Config::new(runtime, options)?;
    let downloaded = run(request, &config).await?;
    println!(
        "Downloaded asset: {} ({} bytes)",
        downloaded.path.display(),
        downloaded.bytes
    );
    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime, G: GetReleases>(
    request: &FetchRequest,
    config: &Config<R, G>,
) -> Result<Downloaded> {
    let repo = request.repo.parse::<GitHubRepo>()?;
    let selector = VersionSelector::from(request.selector.as_str());

    let release = resolve(&config.github, &repo, &selector).await?;
    let asset = locate_asset(&release, &request.asset_name)?;
    debug!(
        "Selected asset {} ({} bytes, {})",
        asset.name, asset.size, asset.content_type
    );

    println!("Asset id: {}", asset.id);
    println!("Asset file name: {}", asset.name);

    download_asset(
        &config.runtime,
        &config.http_client,
        config.github.api_url(),
        &repo,
        asset,
        &config.output_dir,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::github::{MockGetReleases, Release, ReleaseAsset};
    use crate::http::HttpClient;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use reqwest::Client;
    use std::path::PathBuf;

    fn acme_releases() -> Vec<Release> {
        let release = |id: u64, tag: &str, asset_id: u64| Release {
            id,
            tag_name: tag.to_string(),
            assets: vec![ReleaseAsset {
                id: asset_id,
                name: "tool.bin".to_string(),
                content_type: "application/octet-stream".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        vec![release(2, "v2.0", 22), release(1, "v1.0", 11)]
    }

    fn request(selector: &str) -> FetchRequest {
        FetchRequest {
            repo: "acme/tool".to_string(),
            asset_name: "tool.bin".to_string(),
            selector: selector.to_string(),
        }
    }

    fn github_at(api_url: String) -> MockGetReleases {
        let mut github = MockGetReleases::new();
        github.expect_api_url().return_const(api_url);
        github
            .expect_get_releases_page()
            .returning(|_, _| Ok(acme_releases()));
        github
    }

    fn config_with(
        runtime: MockRuntime,
        github: MockGetReleases,
    ) -> Config<MockRuntime, MockGetReleases> {
        Config {
            runtime,
            github,
            http_client: HttpClient::new(Client::new()),
            output_dir: PathBuf::from("/work"),
        }
    }

    #[tokio::test]
    async fn test_run_latest_downloads_newest_release_asset() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/acme/tool/releases/assets/22")
            .with_status(200)
            .with_body("v2 bytes")
            .create_async()
            .await;

        let mut runtime = MockRuntime::new();
        runtime
            .expect_create_file()
            .with(eq(PathBuf::from("/work/tool.bin")))
            .times(1)
            .returning(|_| Ok(Box::new(std::io::sink())));

        let config = config_with(runtime, github_at(server.url()));
        let downloaded = run(&request("latest"), &config).await.unwrap();

        mock.assert_async().await;
        assert_eq!(downloaded.path, PathBuf::from("/work/tool.bin"));
        assert_eq!(downloaded.bytes, 8);
    }

    #[tokio::test]
    async fn test_run_tag_downloads_that_release_asset() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/acme/tool/releases/assets/11")
            .with_status(200)
            .with_body("v1 bytes")
            .create_async()
            .await;

        let mut runtime = MockRuntime::new();
        runtime
            .expect_create_file()
            .returning(|_| Ok(Box::new(std::io::sink())));

        let config = config_with(runtime, github_at(server.url()));
        run(&request("v1.0"), &config).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_run_unknown_tag_fails_before_download() {
        // Strict runtime: creating a file would panic.
        let config = config_with(MockRuntime::new(), github_at("http://unused".to_string()));

        let err = run(&request("v9.9"), &config).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::ReleaseNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_run_unknown_asset_fails_before_download() {
        let config = config_with(MockRuntime::new(), github_at("http://unused".to_string()));

        let mut req = request("latest");
        req.asset_name = "tool.exe".to_string();
        let err = run(&req, &config).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::AssetNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_run_invalid_repo() {
        let config = config_with(MockRuntime::new(), MockGetReleases::new());

        let mut req = request("latest");
        req.repo = "not-a-repo".to_string();
        let err = run(&req, &config).await.unwrap_err();
        assert!(err.to_string().contains("owner/repo"));
    }
}
