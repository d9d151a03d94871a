//! Client layer: authenticated request execution and credential management.

mod credentials;
#[cfg(test)]
pub(crate) mod testing;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use crate::domain::ValidationError;
use crate::service::{SimService, TariffService};

pub use credentials::{CredentialPair, Credentials};

/// Default SimPro v3 API root.
pub const DEFAULT_BASE_URL: &str = "https://simpro4.wirelesslogic.com/api/v3";
/// Timeout applied when [`ClientConfig::timeout`] is unset or zero.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_HEADER: &str = "x-api-key";
const API_CLIENT_HEADER: &str = "x-api-client";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    method: Method,
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self.client.request(request.method, &request.url);
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SimProClient`] and the resource services.
///
/// Nothing is retried or recovered internally; every failure reaches the caller.
pub enum SimProError {
    /// A caller-supplied argument was rejected before any network call.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request payload could not be encoded as JSON. No request was sent.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// HTTP client / transport failure (DNS, TLS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// SimPro answered with a status code of 400 or above.
    ///
    /// `body` is the raw response text; error payloads are not parsed.
    #[error("SimPro API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decoding {
        endpoint: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The configured base URL is not an absolute URL.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl SimProError {
    /// HTTP status of an [`SimProError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Clone, Default)]
/// Settings for [`SimProClient::new`].
///
/// Empty credentials are allowed: the matching header is simply not sent.
pub struct ClientConfig {
    /// API root; [`DEFAULT_BASE_URL`] when `None` or empty.
    pub base_url: Option<String>,
    pub api_key: String,
    pub api_client: String,
    /// Whole-request timeout; [`DEFAULT_TIMEOUT`] when `None` or zero.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key_set", &!self.api_key.is_empty())
            .field("api_client", &self.api_client)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
/// Builder for [`SimProClient`].
pub struct SimProClientBuilder {
    config: ClientConfig,
}

impl SimProClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Override the API root (default [`DEFAULT_BASE_URL`]).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self
    }

    pub fn api_client(mut self, api_client: impl Into<String>) -> Self {
        self.config.api_client = api_client.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SimProClient`].
    ///
    /// Fails with [`SimProError::InvalidBaseUrl`] if the base URL does not parse,
    /// or [`SimProError::Transport`] if the HTTP client cannot be created.
    pub fn build(self) -> Result<SimProClient, SimProError> {
        let ClientConfig {
            base_url,
            api_key,
            api_client,
            timeout,
            user_agent,
        } = self.config;

        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if let Err(source) = url::Url::parse(&base_url) {
            return Err(SimProError::InvalidBaseUrl {
                url: base_url,
                source,
            });
        }
        let base_url = base_url.trim_end_matches('/').to_owned();
        let timeout = timeout
            .filter(|timeout| !timeout.is_zero())
            .unwrap_or(DEFAULT_TIMEOUT);

        let mut builder = reqwest::Client::builder().timeout(timeout);
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| SimProError::Transport(Box::new(err)))?;

        Ok(SimProClient {
            base_url,
            timeout,
            credentials: Arc::new(Credentials::new(api_key, api_client)),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SimPro v3 client.
///
/// Owns the base URL, the HTTP transport and the runtime-mutable credentials.
/// Clones share credentials, so a key swapped through one clone is used by
/// the next request made through any of them. Resource services borrow a
/// client: see [`SimProClient::sims`] and [`SimProClient::tariffs`].
///
/// Requests are cancelled by dropping the returned future; the configured
/// timeout surfaces as [`SimProError::Transport`].
pub struct SimProClient {
    base_url: String,
    timeout: Duration,
    credentials: Arc<Credentials>,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for SimProClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimProClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl SimProClient {
    /// Create a client from a [`ClientConfig`].
    pub fn new(config: ClientConfig) -> Result<Self, SimProError> {
        SimProClientBuilder::from_config(config).build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> SimProClientBuilder {
        SimProClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Replace the API key used by subsequent requests.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.credentials.set_api_key(api_key);
    }

    /// Replace the API client identifier used by subsequent requests.
    pub fn set_api_client(&self, api_client: impl Into<String>) {
        self.credentials.set_api_client(api_client);
    }

    /// Replace both credentials at once.
    pub fn set_credentials(&self, api_key: impl Into<String>, api_client: impl Into<String>) {
        self.credentials.set(api_key, api_client);
    }

    /// SIM endpoints (`/sims`, `/sims/usage`, `/sims/{iccid}/location`).
    pub fn sims(&self) -> SimService<'_> {
        SimService::new(self)
    }

    /// Tariff endpoints (`/tariffs`).
    pub fn tariffs(&self) -> TariffService<'_> {
        TariffService::new(self)
    }

    /// Send one authenticated request and return the raw response body.
    ///
    /// `path` is appended to the base URL verbatim and must already carry any
    /// query string. `body`, when present, is sent as JSON.
    ///
    /// Errors:
    /// - [`SimProError::Serialization`] if `body` cannot be encoded (nothing is sent),
    /// - [`SimProError::Transport`] for connection failures and timeouts,
    /// - [`SimProError::Api`] for HTTP status codes of 400 and above.
    pub async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>, SimProError>
    where
        B: Serialize + ?Sized,
    {
        let credentials = self.credentials.snapshot();

        let body = match body {
            Some(body) => Some(serde_json::to_vec(body).map_err(|err| {
                debug!(error = %err, "failed to serialize SimPro request body");
                SimProError::Serialization(err)
            })?),
            None => None,
        };

        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "preparing SimPro request");

        let mut headers = vec![("content-type", "application/json".to_owned())];
        if !credentials.api_key().is_empty() {
            headers.push((API_KEY_HEADER, credentials.api_key().to_owned()));
            debug!("using API key for authentication");
        }
        if !credentials.api_client().is_empty() {
            headers.push((API_CLIENT_HEADER, credentials.api_client().to_owned()));
            debug!(api_client = credentials.api_client(), "using API client identifier");
        }

        let response = self
            .http
            .send(HttpRequest {
                method,
                url: url.clone(),
                headers,
                body,
            })
            .await
            .map_err(|err| {
                debug!(error = %err, %url, "SimPro request failed");
                SimProError::Transport(err)
            })?;

        if response.status >= 400 {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            debug!(status = response.status, %body, "SimPro API error response");
            return Err(SimProError::Api {
                status: response.status,
                body,
            });
        }

        debug!(status = response.status, %url, "SimPro request succeeded");
        Ok(response.body)
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Vec<u8>, SimProError> {
        self.execute::<()>(Method::GET, path, None).await
    }
}
