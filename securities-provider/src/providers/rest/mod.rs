//! REST backend for the securities record service and template text service

mod error;
mod http;
mod provider;
/// REST wire types that are not part of the public model.
pub(crate) mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{
    DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client, normalize_base_url,
};

/// Provider backed by the securities REST API.
///
/// # Construction
///
/// ```rust,no_run
/// use securities_provider::RestProvider;
///
/// let provider = RestProvider::builder("http://localhost:8080/jax")
///     .max_retries(3)
///     .build()?;
/// # Ok::<(), securities_provider::ProviderError>(())
/// ```
pub struct RestProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) max_retries: u32,
}

/// Builder for [`RestProvider`] with configurable timeout and retry behavior.
pub struct RestProviderBuilder {
    base_url: String,
    timeout: Duration,
    max_retries: u32,
}

impl RestProviderBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: 2,
        }
    }

    /// Set the per-request timeout (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of automatic retries for transient errors (default: 2).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the [`RestProvider`] instance.
    pub fn build(self) -> Result<RestProvider> {
        Ok(RestProvider {
            client: create_http_client(RestProvider::NAME, self.timeout)?,
            base_url: normalize_base_url(&self.base_url),
            max_retries: self.max_retries,
        })
    }
}

impl RestProvider {
    pub(crate) const NAME: &'static str = "rest";

    /// Creates a provider with default settings (30s timeout, 2 retries).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(base_url: impl Into<String>) -> RestProviderBuilder {
        RestProviderBuilder::new(base_url)
    }
}
