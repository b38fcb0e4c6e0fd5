use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

/// The upstream panel only answers clients that look like the Android player
pub const MOBILE_USER_AGENT: &str = "Dalvik/2.1.0 (Linux; Android 10)";

/// Upper bound for a whole request, connect included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the HTTP client used against the Xtream API
///
/// # Errors
/// Errors when the TLS backend cannot be initialized
pub fn init_http_client() -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(MOBILE_USER_AGENT));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Building HTTP client")
}

/// Trims a string, returning `None` if nothing is left afterward
pub fn non_empty_trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
