//! Remote service implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod rest;

pub use rest::{RestProvider, RestProviderBuilder};
