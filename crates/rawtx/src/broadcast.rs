//! Submission of signed transactions to a remote node proxy.
//!
//! The default endpoint is the public Etherscan proxy, which accepts
//! `eth_sendRawTransaction` as query parameters on an empty-bodied POST and
//! answers with a JSON-RPC style body. The body is handed back verbatim;
//! interpreting it is left to the user.

use std::time::Duration;

use rawtx_core::config::NetworkConfig;
use rawtx_core::error::{NetworkError, NetworkResult};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use tracing::{debug, info};

use crate::logging::redact_sensitive;

/// Something that can submit a raw transaction.
///
/// The `push` command only talks to this trait, so tests can substitute a
/// recorder for the HTTP client.
pub trait Broadcast {
    /// Submit `raw_hex` (canonical encoding, no `0x` prefix) and return the
    /// endpoint's response body.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] if the request fails or the endpoint answers
    /// with anything other than `200 OK`.
    fn broadcast(&self, raw_hex: &str) -> NetworkResult<String>;
}

impl<T: Broadcast + ?Sized> Broadcast for &T {
    fn broadcast(&self, raw_hex: &str) -> NetworkResult<String> {
        (**self).broadcast(raw_hex)
    }
}

/// [`Broadcast`] over HTTP using the Etherscan proxy API.
#[derive(Debug)]
pub struct EtherscanBroadcaster {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl EtherscanBroadcaster {
    /// Create a broadcaster for `endpoint`.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::InvalidEndpoint`] if `endpoint` is not an absolute URL
    /// - [`NetworkError::Request`] if the HTTP client cannot be built
    pub fn new(
        endpoint: &str,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> NetworkResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| NetworkError::invalid_endpoint(endpoint, e.to_string()))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| NetworkError::request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Create a broadcaster from the `[network]` configuration section.
    ///
    /// `endpoint_override` (the `--endpoint` flag) replaces the configured URL.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn from_config(
        config: &NetworkConfig,
        endpoint_override: Option<&str>,
    ) -> NetworkResult<Self> {
        Self::new(
            endpoint_override.unwrap_or(&config.broadcast_url),
            config.api_key.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    /// The endpoint requests are sent to, without query parameters.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the full request URL for `raw_hex`.
    #[must_use]
    pub fn request_url(&self, raw_hex: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("module", "proxy")
                .append_pair("action", "eth_sendRawTransaction")
                .append_pair("hex", raw_hex);
            if let Some(key) = &self.api_key {
                query.append_pair("apikey", key);
            }
        }
        url
    }
}

impl Broadcast for EtherscanBroadcaster {
    fn broadcast(&self, raw_hex: &str) -> NetworkResult<String> {
        info!(endpoint = %self.endpoint, "broadcasting transaction");
        if let Some(key) = &self.api_key {
            debug!(api_key = %redact_sensitive(key), "using API key");
        }

        // Errors are stripped of their URL; it carries the API key.
        let response = self
            .client
            .post(self.request_url(raw_hex))
            .send()
            .map_err(|e| NetworkError::request(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| NetworkError::read_body(e.without_url().to_string()))?;

        debug!(status = status.as_u16(), bytes = body.len(), "broadcast response");

        // Only 200 means the proxy took the transaction.
        if status != StatusCode::OK {
            return Err(NetworkError::status(status.as_u16(), body));
        }

        Ok(body)
    }
}
