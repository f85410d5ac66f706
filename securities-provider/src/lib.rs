//! # securities-provider
//!
//! Remote collaborators of the securities view: the record service (fetch,
//! search, create and delete securities, plus the type taxonomy) and the template
//! text service, behind two async traits.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use securities_provider::{create_providers, GetSecurityRequest, RestConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let providers = create_providers(&RestConfig::default())?;
//!
//!     let meta = providers.records.get_meta().await?;
//!     println!("types: {:?}", meta.types);
//!
//!     let record = providers
//!         .records
//!         .get(&GetSecurityRequest::new("DbSec~1", None))
//!         .await?;
//!     println!("{} ({})", record.template_data.name, record.template_data.security_type);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError).
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried
//! with exponential backoff before they surface.

mod error;
mod factory;
mod providers;
mod traits;
mod types;

pub use error::{ProviderError, Result};

pub use factory::{Providers, RestConfig, create_providers};

// Internal error-mapping traits are not exported
pub use traits::{SecurityProvider, TemplateSource};

pub use types::{
    CreateSecuritiesRequest, CreatedSecurities, GetSecurityRequest, PaginatedResponse,
    SchemeType, SecurityMeta, SecurityQueryParams, SecurityRecord, SecuritySummary, TemplateData,
    object_id_of,
};

pub use providers::{RestProvider, RestProviderBuilder};
