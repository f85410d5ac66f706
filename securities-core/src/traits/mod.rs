//! Collaborator abstraction trait definition
//!
//! The view controller drives rendering, dialogs, the search grid, history and
//! gadgets only through these traits; front-ends provide the implementations.

mod dialog_service;
mod gadgets;
mod history_store;
mod search_grid;
mod template_renderer;
mod view_renderer;

pub use dialog_service::DialogService;
pub use gadgets::Gadgets;
pub use history_store::{HistoryStore, InMemoryHistoryStore};
pub use search_grid::SearchGrid;
pub use template_renderer::TemplateRenderer;
pub use view_renderer::{CloseHandler, ViewRenderer};

// Remote collaborators live in the provider library
pub use securities_provider::{SecurityProvider, TemplateSource};
