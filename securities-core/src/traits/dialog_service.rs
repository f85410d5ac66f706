//! Modal dialog collaborator Trait

use async_trait::async_trait;

use crate::types::{ConfirmDialog, DialogValues, InputDialog};

/// Presents modal dialogs and waits for the user.
#[async_trait]
pub trait DialogService: Send + Sync {
    /// Show a form
    ///
    /// # Returns
    /// The submitted values, or `None` when cancelled
    async fn input(&self, dialog: InputDialog) -> Option<DialogValues>;

    /// Ask for confirmation
    async fn confirm(&self, dialog: ConfirmDialog) -> bool;

    /// Blocking error dialog
    async fn error(&self, title: &str, message: &str);
}
