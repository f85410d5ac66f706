//! 工具栏操作服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::routes::RouteModel;
use crate::services::{SearchController, ViewContext};
use crate::traits::CloseHandler;
use crate::types::{
    ActionId, ConfirmDialog, CreateSecuritiesRequest, DialogValues, HashEdit, InputDialog,
    Region, RegionState, RouteArgs, RuleKind, SchemeType, object_id_of,
};

/// Result of a dispatched toolbar action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user dismissed the dialog.
    Cancelled,
    /// The action navigated to this path.
    Navigated(String),
    /// The action failed; the message was already shown to the user.
    Failed(String),
}

/// Handlers for the toolbar actions.
pub struct ActionRegistry {
    ctx: Arc<ViewContext>,
    search: Arc<SearchController>,
}

impl ActionRegistry {
    #[must_use]
    pub fn new(ctx: Arc<ViewContext>, search: Arc<SearchController>) -> Self {
        Self { ctx, search }
    }

    pub async fn dispatch(&self, action: ActionId) -> CoreResult<ActionOutcome> {
        log::debug!("Dispatching action {}", action.as_str());
        match action {
            ActionId::New => self.create().await,
            ActionId::Delete => self.delete().await,
            ActionId::Versions => self.toggle_versions(),
            ActionId::Save | ActionId::SaveAs => {
                Err(CoreError::ActionUnavailable(action.as_str().to_string()))
            }
        }
    }

    /// Loads new securities from external identifiers.
    async fn create(&self) -> CoreResult<ActionOutcome> {
        let Some(values) = self.ctx.dialogs.input(InputDialog::add_securities()).await else {
            return Ok(ActionOutcome::Cancelled);
        };

        let request = match Self::create_request(&values) {
            Ok(request) => request,
            Err(e) => {
                let message = e.user_message();
                e.log("Add securities");
                self.ctx.dialogs.error("Add Securities", &message).await;
                return Ok(ActionOutcome::Failed(message));
            }
        };

        let ids = match self.ctx.records.create(&request).await {
            Ok(ids) => ids,
            Err(e) => {
                let e = CoreError::from(e);
                let message = e.user_message();
                e.log("Add securities");
                self.ctx.dialogs.error("Add Securities", &message).await;
                return Ok(ActionOutcome::Failed(message));
            }
        };
        log::info!("Created {} securities from {}", ids.len(), request.scheme_type);

        if let Err(e) = self.search.refresh().await {
            e.log("Refresh after create");
        }

        let routes = &self.ctx.routes;
        let path = match ids.as_slice() {
            [id] => routes.hash(
                RuleKind::LoadItem,
                &routes.current_args(),
                &HashEdit::new().add("id", object_id_of(id)).del("version"),
            )?,
            _ => routes.hash(RuleKind::Load, &RouteArgs::new(), &HashEdit::new())?,
        };
        routes.go(&path)?;
        Ok(ActionOutcome::Navigated(path))
    }

    fn create_request(values: &DialogValues) -> CoreResult<CreateSecuritiesRequest> {
        let scheme = values.get("scheme_type").unwrap_or_default();
        let scheme_type = SchemeType::parse(scheme)
            .ok_or_else(|| CoreError::ValidationError(format!("Unknown scheme type '{scheme}'")))?;
        let identifier = values
            .get("identifiers")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::ValidationError("No identifiers given".to_string()))?;
        Ok(CreateSecuritiesRequest {
            scheme_type,
            identifier: identifier.to_string(),
        })
    }

    /// Deletes the security the view is showing.
    async fn delete(&self) -> CoreResult<ActionOutcome> {
        // 先确定目标：确认期间路由可能变化
        let last = self.ctx.routes.last().ok_or(CoreError::NoSelection)?;
        let id = last.id().ok_or(CoreError::NoSelection)?.to_string();

        if !self.ctx.dialogs.confirm(ConfirmDialog::delete_security()).await {
            return Ok(ActionOutcome::Cancelled);
        }

        if let Err(e) = self.ctx.records.delete(&id).await {
            let e = CoreError::from(e);
            self.ctx.surface(&e, "Delete security");
            return Ok(ActionOutcome::Failed(e.user_message()));
        }
        log::info!("Deleted security {id}");

        let routes = &self.ctx.routes;
        let path = routes.hash(RuleKind::Load, &last.args, &HashEdit::new())?;
        routes.go(&path)?;
        Ok(ActionOutcome::Navigated(path))
    }

    /// Opens or closes the versions region by toggling `version:*`.
    fn toggle_versions(&self) -> CoreResult<ActionOutcome> {
        let routes = &self.ctx.routes;
        let current = routes.current().ok_or(CoreError::NoSelection)?;
        if current.id().is_none() {
            return Err(CoreError::NoSelection);
        }

        let opening = current.version().is_none();
        let edit = if opening {
            HashEdit::new().add("version", "*")
        } else {
            HashEdit::new().del("version")
        };
        let path = routes.hash(RuleKind::LoadItem, &current.args, &edit)?;

        let renderer = &self.ctx.renderer;
        renderer.set_region(Region::Versions, RegionState::from_open(opening));
        if opening {
            renderer.set_close_handler(
                Region::Versions,
                Some(versions_close_handler(routes.clone())),
            );
        }
        routes.go(&path)?;
        Ok(ActionOutcome::Navigated(path))
    }
}

/// Handler run when the user closes the versions region directly.
///
/// Navigates to the current route without its `version` argument.
pub fn versions_close_handler(routes: Arc<RouteModel>) -> CloseHandler {
    Arc::new(move || {
        let Some(current) = routes.current() else {
            return;
        };
        if current.version().is_none() {
            return;
        }
        let result = routes
            .hash(RuleKind::LoadItem, &current.args, &HashEdit::new().del("version"))
            .and_then(|path| routes.go(&path));
        if let Err(e) = result {
            e.log("Close versions");
        }
    })
}
