//! Provider factory functions.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::providers::RestProvider;
use crate::traits::{SecurityProvider, TemplateSource};

/// Connection settings for the REST backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RestConfig {
    /// Base URL of the REST API, e.g. `http://localhost:8080/jax`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Automatic retries for transient errors.
    pub max_retries: u32,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/jax".to_string(),
            timeout_secs: 30,
            max_retries: 2,
        }
    }
}

/// The record service and template service, sharing one connection pool.
#[derive(Clone)]
pub struct Providers {
    pub records: Arc<dyn SecurityProvider>,
    pub templates: Arc<dyn TemplateSource>,
}

/// Creates the REST-backed services from the given configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use securities_provider::{create_providers, RestConfig};
///
/// let providers = create_providers(&RestConfig::default())?;
/// # Ok::<(), securities_provider::ProviderError>(())
/// ```
pub fn create_providers(config: &RestConfig) -> Result<Providers> {
    let provider = Arc::new(
        RestProvider::builder(config.base_url.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .max_retries(config.max_retries)
            .build()?,
    );
    log::info!(
        "[{}] using {} (timeout {}s, {} retries)",
        provider.id(),
        config.base_url,
        config.timeout_secs,
        config.max_retries
    );
    Ok(Providers {
        records: provider.clone(),
        templates: provider,
    })
}
