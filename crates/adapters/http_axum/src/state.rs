//! Shared application state for axum handlers.

use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::http::Uri;
use axum::http::uri::PathAndQuery;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// State shared by the proxy handler and the asset service.
///
/// `reqwest::Client` keeps its connection pool behind an `Arc`, so cloning the
/// state per request is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    client: reqwest::Client,
    upstream: String,
    assets_dir: PathBuf,
}

impl AppState {
    /// Create the state for a backend base URL and a directory of built
    /// dashboard assets.
    ///
    /// Redirects are handed back to the browser rather than followed.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(
        upstream: impl Into<String>,
        assets_dir: impl Into<PathBuf>,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        let upstream = upstream.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            upstream,
            assets_dir: assets_dir.into(),
        })
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Backend base URL, without a trailing slash.
    #[must_use]
    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Absolute backend URL for an incoming request URI, path and query kept.
    #[must_use]
    pub fn target(&self, uri: &Uri) -> String {
        let path = uri.path_and_query().map_or("/", PathAndQuery::as_str);
        format!("{}{path}", self.upstream)
    }
}
