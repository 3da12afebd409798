//! Main macaddress.io API client implementation.

use crate::api::LookupApi;
use async_trait::async_trait;
use macvendor_core::{LookupRequest, LookupResult, MacVendorError, Resolver, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// The macaddress.io API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.macaddress.io";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key
const AUTH_HEADER: &str = "X-Authentication-Token";

/// Main macaddress.io API client
///
/// The client holds no per-lookup state; the API key travels with each
/// [`LookupRequest`].
#[derive(Clone)]
pub struct MacVendorClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: Url,
    timeout: Duration,
}

impl MacVendorClient {
    /// Create a new client using default settings
    pub fn new() -> Result<Self> {
        MacVendorClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> MacVendorClientBuilder {
        MacVendorClientBuilder::new()
    }

    /// Access the vendor lookup endpoint
    #[must_use]
    pub const fn lookup(&self) -> LookupApi<'_> {
        LookupApi::new(self)
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Perform a GET request and decode the JSON body
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        api_key: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let body = self.get_text(path, api_key, params).await?;
        serde_json::from_str(&body).map_err(MacVendorError::Json)
    }

    /// Perform a GET request and return the raw body
    pub(crate) async fn get_text(
        &self,
        path: &str,
        api_key: &str,
        params: &[(&str, &str)],
    ) -> Result<String> {
        let url = self.build_url(path, params)?;
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .header(AUTH_HEADER, api_key)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.handle_response(response).await
    }

    /// Build a URL with query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{path}"))
            .map_err(|e| MacVendorError::InvalidUrl(e.to_string()))?;

        url.query_pairs_mut().extend_pairs(params);

        Ok(url)
    }

    /// Map a reqwest failure to the matching error kind
    fn transport_error(&self, err: &reqwest::Error) -> MacVendorError {
        if err.is_timeout() {
            MacVendorError::Timeout(self.inner.timeout)
        } else if err.is_connect() {
            MacVendorError::Connection(err.to_string())
        } else {
            MacVendorError::Http(err.to_string())
        }
    }

    /// Return the body of a successful response, or the matching error
    async fn handle_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if status.is_success() {
            response
                .text()
                .await
                .map_err(|e| self.transport_error(&e))
        } else {
            Err(Self::handle_error(status.as_u16(), response).await)
        }
    }

    /// Convert an error response to a `MacVendorError`
    async fn handle_error(status: u16, response: reqwest::Response) -> MacVendorError {
        let body = response.text().await.unwrap_or_default();
        let reason = service_reason(&body).unwrap_or_else(|| default_reason(status).to_string());

        debug!(status, reason = %reason, "error response");

        match status {
            401 | 403 => MacVendorError::Unauthorized {
                code: status,
                reason,
            },
            402 => MacVendorError::InsufficientCredits { reason },
            429 => {
                warn!("Rate limited by macaddress.io");
                MacVendorError::RateLimited { reason }
            }
            _ => MacVendorError::Api {
                code: status,
                reason,
            },
        }
    }
}

#[async_trait]
impl Resolver for MacVendorClient {
    #[instrument(skip_all, fields(mac = %request.mac_address()))]
    async fn resolve(&self, request: &LookupRequest) -> Result<LookupResult> {
        self.lookup().resolve(request).await
    }
}

/// Extract the reason given by the service: the `error` string of a JSON
/// body, otherwise the non-empty text body
fn service_reason(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("error")
            .and_then(|e| e.as_str())
            .map(String::from)
            .or_else(|| Some(body.to_string())),
        Err(_) => Some(body.to_string()),
    }
}

/// Description of a status code, used when the service gives none
const fn default_reason(status: u16) -> &'static str {
    match status {
        400 => "Invalid parameters.",
        401 | 403 => "Access restricted. Enter the correct API key.",
        402 => {
            "Access restricted. Check the credits balance of the account associated with the API key."
        }
        422 => "Invalid MAC address was received.",
        429 => "Too many requests. Try your call again later.",
        500 => "Internal server error. Try again or contact macaddress.io.",
        _ => "Unknown error.",
    }
}

/// Builder for configuring a [`MacVendorClient`]
pub struct MacVendorClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for MacVendorClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MacVendorClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("macvendor/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    ///
    /// Redirects are not followed, so the API key never leaves the configured
    /// host; a 3xx surfaces as [`MacVendorError::Api`].
    pub fn build(self) -> Result<MacVendorClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| MacVendorError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| MacVendorError::Http(e.to_string()))?;

        Ok(MacVendorClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}
