use anyhow::Result;
use clap::Parser;
use ghfetch::commands::{
    FetchRequest,
    config::{ClientOptions, DEFAULT_TIMEOUT_SECS},
    fetch,
};
use std::path::PathBuf;
use std::time::Duration;

/// ghfetch - download one asset from a GitHub release
///
/// Works with private repositories: the GITHUB_TOKEN environment variable is
/// used for authentication when set, otherwise the --token value.
///
/// Examples:
///   ghfetch -r acme/tool -a tool.bin             # Asset of the latest release
///   ghfetch -r acme/tool -a tool.bin -v v1.0     # Asset of the release tagged v1.0
#[derive(Parser, Debug)]
#[command(author, version = env!("GHFETCH_VERSION"), about)]
struct Cli {
    /// The GitHub repository in the format "owner/repo"
    #[arg(short = 'r', long = "repo", value_name = "OWNER/REPO")]
    pub repo: String,

    /// Exact file name of the asset to download
    #[arg(
        short = 'a',
        long = "asset",
        visible_alias = "asset-name",
        value_name = "NAME"
    )]
    pub asset: String,

    /// Release to download from: "latest" or an exact tag name
    #[arg(
        short = 'v',
        long = "release",
        visible_alias = "tag",
        value_name = "TAG",
        default_value = "latest"
    )]
    pub release: String,

    /// GitHub token, used when GITHUB_TOKEN is not set
    #[arg(short = 't', long = "token", value_name = "TOKEN")]
    pub token: Option<String>,

    /// Directory to write the asset into (defaults to the current directory)
    #[arg(short = 'o', long = "output-dir", value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Connect and read timeout in seconds
    #[arg(
        long = "timeout",
        env = "GHFETCH_TIMEOUT",
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub timeout: u64,
}

impl Cli {
    fn request(&self) -> FetchRequest {
        FetchRequest {
            repo: self.repo.clone(),
            asset_name: self.asset.clone(),
            selector: self.release.clone(),
        }
    }

    fn client_options(self) -> ClientOptions {
        ClientOptions {
            token: self.token,
            api_url: self.api_url,
            timeout: Duration::from_secs(self.timeout),
            output_dir: self.output_dir,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = ghfetch::runtime::RealRuntime;

    let request = cli.request();
    fetch(runtime, &request, cli.client_options()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_minimal_parsing() {
        let cli = Cli::try_parse_from(["ghfetch", "-r", "acme/tool", "-a", "tool.bin"]).unwrap();
        assert_eq!(cli.repo, "acme/tool");
        assert_eq!(cli.asset, "tool.bin");
        assert_eq!(cli.release, "latest");
        assert_eq!(cli.token, None);
        assert_eq!(cli.output_dir, None);
    }

    #[test]
    fn test_cli_long_flags_and_aliases() {
        let cli = Cli::try_parse_from([
            "ghfetch",
            "--repo",
            "acme/tool",
            "--asset-name",
            "tool.bin",
            "--tag",
            "v1.0",
            "--token",
            "secret",
            "--output-dir",
            "/tmp",
            "--api-url",
            "http://localhost:8080",
            "--timeout",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.release, "v1.0");
        assert_eq!(cli.token.as_deref(), Some("secret"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp")));

        let request = cli.request();
        assert_eq!(request.selector, "v1.0");
        assert_eq!(request.asset_name, "tool.bin");

        let options = cli.client_options();
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.api_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_cli_short_release_flag() {
        let cli =
            Cli::try_parse_from(["ghfetch", "-r", "acme/tool", "-a", "tool.bin", "-v", "v2.0"])
                .unwrap();
        assert_eq!(cli.release, "v2.0");
    }

    #[test]
    fn test_cli_requires_repo_and_asset() {
        assert!(Cli::try_parse_from(["ghfetch", "-a", "tool.bin"]).is_err());
        assert!(Cli::try_parse_from(["ghfetch", "-r", "acme/tool"]).is_err());
    }

    #[test]
    fn test_cli_rejects_non_numeric_timeout() {
        let result = Cli::try_parse_from([
            "ghfetch",
            "-r",
            "acme/tool",
            "-a",
            "tool.bin",
            "--timeout",
            "soon",
        ]);
        assert!(result.is_err());
    }
}
