//! 视图控制器

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};

use crate::error::CoreResult;
use crate::services::{
    ActionOutcome, ActionRegistry, DetailLoader, SearchController, ViewContext, plan,
    versions_close_handler,
};
use crate::types::{
    ActionId, DetailRequest, Region, RenderPlan, Route, Toolbar, ToolbarVariant, ViewState,
};

/// The securities master/detail view.
///
/// Route changes drive a four-state machine (`LIST`, `LIST_FILTERED`, `DETAIL`,
/// `DETAIL_VERSIONED`). Transitions run one at a time; detail loads run in the
/// background and are dropped once a newer route supersedes them.
pub struct SecuritiesView {
    ctx: Arc<ViewContext>,
    search: Arc<SearchController>,
    detail: DetailLoader,
    actions: ActionRegistry,
    state: watch::Sender<Option<ViewState>>,
}

impl SecuritiesView {
    #[must_use]
    pub fn new(ctx: Arc<ViewContext>) -> Self {
        let search = Arc::new(SearchController::new(ctx.clone()));
        Self {
            detail: DetailLoader::new(ctx.clone()),
            actions: ActionRegistry::new(ctx.clone(), search.clone()),
            search,
            state: watch::channel(None).0,
            ctx,
        }
    }

    pub fn context(&self) -> &Arc<ViewContext> {
        &self.ctx
    }

    pub fn search(&self) -> &Arc<SearchController> {
        &self.search
    }

    pub fn state(&self) -> Option<ViewState> {
        *self.state.borrow()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<Option<ViewState>> {
        self.state.subscribe()
    }

    /// Moves the view to the state a route describes, without loading detail.
    ///
    /// Waits for the type taxonomy first; if it cannot be resolved the error
    /// is shown and the view stays where it was.
    pub async fn transition(&self, route: &Route) -> CoreResult<RenderPlan> {
        if let Err(e) = self.search.ready().await {
            self.ctx.surface(&e, "Resolve security types");
            return Err(e);
        }

        let previous = self.state();
        let plan = plan(previous, route.rule, &route.args);
        log::debug!("{previous:?} -> {:?} for {}", plan.state, route.path);
        self.state.send_replace(Some(plan.state));
        self.ctx.routes.mark_handled(route.clone());

        self.apply_layout(&plan);

        if let Err(e) = self.search.filter(&plan.filter).await {
            self.ctx.surface(&e, "Filter securities");
        }
        Ok(plan)
    }

    fn apply_layout(&self, plan: &RenderPlan) {
        let renderer = &self.ctx.renderer;
        if plan.leaving_detail {
            self.detail.invalidate();
            renderer.clear_detail();
        }

        renderer.set_region(Region::Detail, plan.detail_region);
        renderer.set_region(Region::Versions, plan.versions_region);
        renderer.set_close_handler(
            Region::Versions,
            plan.versions_region
                .is_open()
                .then(|| versions_close_handler(self.ctx.routes.clone())),
        );

        let toolbar = match plan.toolbar {
            ToolbarVariant::Default => Toolbar::default_variant(),
            ToolbarVariant::Active => Toolbar::active(true),
        };
        renderer.render_toolbar(&toolbar);
    }

    /// Transition followed by the detail load, both awaited.
    pub async fn handle_route(&self, route: &Route) -> CoreResult<RenderPlan> {
        let plan = self.transition(route).await?;
        if let Some(request) = &plan.detail {
            let generation = self.detail.begin();
            self.load_detail(generation, request).await?;
        }
        Ok(plan)
    }

    async fn load_detail(&self, generation: u64, request: &DetailRequest) -> CoreResult<()> {
        match self.detail.run(generation, request).await {
            Ok(_) => Ok(()),
            Err(e) => {
                if self.detail.is_current(generation) {
                    self.ctx.surface(&e, &format!("Load security {}", request.id));
                }
                Err(e)
            }
        }
    }

    pub async fn dispatch(&self, action: ActionId) -> CoreResult<ActionOutcome> {
        let result = self.actions.dispatch(action).await;
        if let Err(e) = &result {
            e.log(&format!("Action {}", action.as_str()));
        }
        result
    }

    /// Starts following the route model.
    ///
    /// The current route, if any, is handled immediately. The returned handle
    /// owns the listener; tearing it down (or dropping it) stops it.
    #[must_use]
    pub fn spawn(self: &Arc<Self>) -> ViewHandle {
        let view = Arc::clone(self);
        let mut routes = self.ctx.routes.subscribe();

        let task = tokio::spawn(async move {
            let mut loads = JoinSet::new();
            loop {
                let route = routes.borrow_and_update().clone();
                if let Some(route) = route {
                    // errors were already shown to the user
                    let request = view.transition(&route).await.ok().and_then(|p| p.detail);
                    if let Some(request) = request {
                        let generation = view.detail.begin();
                        let view = view.clone();
                        loads.spawn(async move {
                            let _ = view.load_detail(generation, &request).await;
                        });
                    }
                }
                while loads.try_join_next().is_some() {}

                if routes.changed().await.is_err() {
                    break;
                }
            }
            log::debug!("Route listener stopped");
        });

        ViewHandle {
            ctx: self.ctx.clone(),
            task: Some(task),
        }
    }
}

/// Owns a running view listener.
pub struct ViewHandle {
    ctx: Arc<ViewContext>,
    task: Option<JoinHandle<()>>,
}

impl ViewHandle {
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stops the listener and any detail loads in flight, and releases the
    /// renderer callbacks the view installed.
    pub async fn teardown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
        self.ctx.renderer.set_close_handler(Region::Versions, None);
        self.ctx.renderer.notify(None);
        log::debug!("View torn down");
    }
}

impl Drop for ViewHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
