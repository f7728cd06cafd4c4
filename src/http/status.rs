//! Maps non-2xx responses onto [`FetchError::HttpStatus`].

use reqwest::{Response, StatusCode};

use crate::error::FetchError;

/// GitHub sets this to "0" on a 403 caused by an exhausted rate limit.
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Passes 2xx responses through and turns everything else into an error.
///
/// `url` is the URL that was requested, which may differ from
/// `response.url()` after a redirect to a storage host.
pub(crate) fn check_status(response: Response, url: &str) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let rate_limited = status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN
            && response
                .headers()
                .get(RATE_LIMIT_REMAINING)
                .is_some_and(|v| v == "0"));

    Err(FetchError::HttpStatus {
        url: url.to_string(),
        status,
        rate_limited,
    })
}
