//! HTTP client for the iconik REST API.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{
    assets::AssetsApi, collections::CollectionsApi, files::FilesApi, metadata::MetadataApi,
    search::SearchApi, types::ApiResponse, Error,
};

/// Default base address, the US production deployment.
pub const DEFAULT_BASE_URL: &str = "https://app.iconik.io";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the iconik API.
///
/// Holds the base address, credentials and one shared `reqwest::Client`.
/// Endpoint groups are reached through accessors: `client.files()`,
/// `client.collections()` and so on. No state is shared between calls; each
/// call is a single round trip with the configured timeout.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    auth_token: String,
}

impl Client {
    /// Creates a client pointing at the default production deployment.
    pub fn new(app_id: &str, auth_token: &str) -> Result<Self, Error> {
        Self::with_options(DEFAULT_BASE_URL, app_id, auth_token, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom base URL, for alternate regional
    /// deployments or testing with wiremock.
    pub fn with_base_url(base_url: &str, app_id: &str, auth_token: &str) -> Result<Self, Error> {
        Self::with_options(base_url, app_id, auth_token, DEFAULT_TIMEOUT)
    }

    /// Creates a client with explicit base URL and request timeout. The
    /// timeout applies uniformly to every underlying request; expiry surfaces
    /// as [`Error::Transport`].
    pub fn with_options(
        base_url: &str,
        app_id: &str,
        auth_token: &str,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: app_id.to_string(),
            auth_token: auth_token.to_string(),
        })
    }

    /// The configured base address, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn files(&self) -> FilesApi<'_> {
        FilesApi::new(self)
    }

    pub fn assets(&self) -> AssetsApi<'_> {
        AssetsApi::new(self)
    }

    pub fn collections(&self) -> CollectionsApi<'_> {
        CollectionsApi::new(self)
    }

    pub fn metadata(&self) -> MetadataApi<'_> {
        MetadataApi::new(self)
    }

    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Resolves a relative path against the base address with exactly one
    /// separating slash.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|e| {
            tracing::error!("invalid URL constructed from {:?}: {}", joined, e);
            Error::InvalidUrl(joined)
        })
    }

    /// Starts an authenticated API request. Credentials are attached here and
    /// only here; direct provider-upload requests bypass this.
    pub(crate) fn api(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("App-ID", &self.app_id)
            .header("Auth-Token", &self.auth_token)
            .header("accept", "application/json")
    }

    /// Raw HTTP client for requests against provider URLs (upload
    /// initiation), which must not carry iconik credentials.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Sends a request and wraps the raw response into an envelope.
    ///
    /// Only transport-level failures become errors. Non-2xx statuses and
    /// unparsable bodies are returned as envelope data so callers can decide
    /// severity per endpoint.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<ApiResponse<T>, Error> {
        let resp = req.send().await.map_err(|e| {
            tracing::error!("request failed: {}", e);
            Error::Transport(e)
        })?;
        let status: StatusCode = resp.status();
        let headers: HeaderMap = resp.headers().clone();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body: {}", e);
            Error::Transport(e)
        })?;
        if !status.is_success() {
            tracing::debug!("request returned status {}", status);
        }
        Ok(ApiResponse::wrap(status, headers, body))
    }
}
