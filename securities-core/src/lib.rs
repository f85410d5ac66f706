//! Securities Core Library
//!
//! Route-driven master/detail view for a securities database:
//! - Route model (hash parsing, rendering and publishing)
//! - View controller state machine (`LIST`, `LIST_FILTERED`, `DETAIL`, `DETAIL_VERSIONED`)
//! - Detail loader, search controller and toolbar actions
//!
//! The library owns no UI. Rendering, dialogs, the search grid and gadgets are
//! reached through traits so any front end can host the view.

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{RetryPolicy, ViewConfig};
pub use error::{CoreError, CoreResult};
pub use routes::{RouteModel, Rules};
pub use services::{ActionOutcome, SecuritiesView, ViewContext, ViewHandle};
pub use traits::{
    CloseHandler, DialogService, Gadgets, HistoryStore, InMemoryHistoryStore, SearchGrid,
    TemplateRenderer, ViewRenderer,
};
