use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use std::path::PathBuf;
use std::time::Duration;

use crate::{
    github::{GetReleases, GitHub},
    http::HttpClient,
    runtime::Runtime,
};

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const USER_AGENT: &str = "ghfetch-cli";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings supplied on the command line.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Value of `--token`; only used when `GITHUB_TOKEN` is unset or empty.
    pub token: Option<String>,
    pub api_url: Option<String>,
    /// Applied to connecting and to each read, not to the whole transfer.
    pub timeout: Duration,
    /// Defaults to the current working directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            token: None,
            api_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output_dir: None,
        }
    }
}

pub struct Config<R: Runtime, G: GetReleases> {
    pub runtime: R,
    pub github: G,
    pub http_client: HttpClient,
    pub output_dir: PathBuf,
}

impl<R: Runtime> Config<R, GitHub> {
    pub fn new(runtime: R, options: ClientOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = resolve_token(&runtime, options.token.as_deref()) {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
                .context("Token contains characters not allowed in an HTTP header")?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using token for authentication: {}", mask_token(&token));
        } else {
            debug!("No token supplied, sending unauthenticated requests");
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .connect_timeout(options.timeout)
            .read_timeout(options.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let http_client = HttpClient::new(client);
        let github = GitHub::new(http_client.clone(), options.api_url);

        let output_dir = match options.output_dir {
            Some(dir) => dir,
            None => runtime
                .current_dir()
                .context("Failed to determine the current directory")?,
        };

        Ok(Self {
            runtime,
            github,
            http_client,
            output_dir,
        })
    }
}

/// Picks the credential: `GITHUB_TOKEN` wins when set and non-empty,
/// otherwise the `--token` value.
pub fn resolve_token<R: Runtime>(runtime: &R, flag: Option<&str>) -> Option<String> {
    match runtime.env_var(TOKEN_ENV) {
        Ok(token) if !token.is_empty() => Some(token),
        _ => flag.filter(|t| !t.is_empty()).map(str::to_string),
    }
}

/// Keeps only enough of a token to tell tokens apart in debug output.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
