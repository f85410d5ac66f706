//! Rendering collaborator Trait

use std::sync::Arc;

use crate::types::{DetailPanel, Notification, Region, RegionState, Toolbar};

/// Called when the user collapses a region by hand.
pub type CloseHandler = Arc<dyn Fn() + Send + Sync>;

/// Consumes render plans: layout regions, toolbar, detail panel, notifications.
///
/// Calls are synchronous and must not block; implementations typically forward
/// them to a UI thread.
pub trait ViewRenderer: Send + Sync {
    /// Open or close a layout region
    fn set_region(&self, region: Region, state: RegionState);

    /// Install (or remove) the handler run when the user closes `region`
    fn set_close_handler(&self, region: Region, handler: Option<CloseHandler>);

    /// Replace the toolbar
    fn render_toolbar(&self, toolbar: &Toolbar);

    /// Replace the detail panel
    fn render_detail(&self, panel: &DetailPanel);

    /// Remove detail content
    fn clear_detail(&self);

    /// Show a notification, or clear it with `None`
    fn notify(&self, notification: Option<&Notification>);

    /// Inline error notification
    fn show_error(&self, message: &str);

    /// Re-measure the layout
    fn resize(&self);
}
