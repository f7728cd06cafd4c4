//! HTTP client for GitHub API reads and streaming asset downloads.

use log::debug;
use reqwest::{Client, header::ACCEPT};
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::Path;

use super::status::check_status;
use crate::error::FetchError;

/// Media type requested for release listings.
pub const ACCEPT_RAW_JSON: &str = "application/vnd.github.v3.raw";

/// Media type that makes the asset endpoint return the binary itself.
pub const ACCEPT_OCTET_STREAM: &str = "application/octet-stream";

/// Thin wrapper over a configured reqwest [`Client`].
///
/// Credentials and the user agent live in the client's default headers, so
/// nothing here ever sees the token.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    #[cfg(test)]
    pub(crate) fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request with query parameters and deserializes the JSON response.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_RAW_JSON)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let response = check_status(response, url)?;

        let body = response.bytes().await.map_err(|source| FetchError::Fetch {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Streams the body of `url` into the writer produced by `create_writer`.
    ///
    /// The writer is only created once the server has answered with a 2xx
    /// status, so a failed request never touches `dest`. Returns the number
    /// of bytes written.
    #[tracing::instrument(skip(self, create_writer))]
    pub async fn download_file<W, F>(
        &self,
        url: &str,
        dest: &Path,
        create_writer: F,
    ) -> Result<u64, FetchError>
    where
        W: Write,
        F: FnOnce(&Path) -> std::io::Result<W>,
    {
        debug!("Downloading file from {}...", url);

        let fetch_error = |source| FetchError::Fetch {
            url: url.to_string(),
            source,
        };
        let io_error = |source| FetchError::FileIo {
            path: dest.to_path_buf(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_OCTET_STREAM)
            .send()
            .await
            .map_err(fetch_error)?;

        let mut response = check_status(response, url)?;

        let mut writer = create_writer(dest).map_err(io_error)?;
        let mut downloaded_bytes: u64 = 0;

        while let Some(chunk) = response.chunk().await.map_err(fetch_error)? {
            writer.write_all(&chunk).map_err(io_error)?;
            downloaded_bytes += chunk.len() as u64;
        }
        writer.flush().map_err(io_error)?;

        debug!(
            "Downloaded {:.2} MB",
            downloaded_bytes as f64 / (1024.0 * 1024.0)
        );

        Ok(downloaded_bytes)
    }
}
