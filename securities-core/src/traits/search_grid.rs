//! Search grid collaborator Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{FilterState, SearchQuery};

/// Filterable list widget.
#[async_trait]
pub trait SearchGrid: Send + Sync {
    /// (Re)build the grid with the given columns and run the query
    async fn load(&self, query: &SearchQuery) -> CoreResult<()>;

    /// Re-run the query with new filters against the existing columns
    async fn filter(&self, filter: &FilterState) -> CoreResult<()>;
}
