//! Client configuration.
//!
//! # Design
//! The server URL is explicit per-instance state rather than a process-wide
//! global, so tests stay hermetic and concurrent clients can point at
//! different servers. Endpoint URLs are derived from a normalized base plus
//! named suffixes; the historical default was the full compile endpoint
//! (`http://localhost:5000/compile`), so normalization also strips a
//! trailing `/compile` segment and both forms configure the same endpoints.

use std::time::Duration;

/// Default compile endpoint the client targets when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000/compile";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration held by a `CompileClient` instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Normalized base URL, without trailing slash or `/compile` suffix.
    pub base_url: String,
    /// Timeout for establishing the TCP connection.
    pub connect_timeout: Duration,
    /// Overall deadline for the request, including reading the body.
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            connect_timeout: CONNECT_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

/// Strip a trailing slash and a trailing `/compile` segment.
pub(crate) fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    trimmed.strip_suffix("/compile").unwrap_or(trimmed).to_string()
}
