//! 详情加载服务

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::Utc;
use securities_provider::ProviderError;

use crate::error::CoreResult;
use crate::services::ViewContext;
use crate::types::{
    DetailPanel, DetailRequest, GetSecurityRequest, HashEdit, HistoryEntry, IdentifierRow,
    Notification, RenderedTemplate, RouteArgs, RuleKind, SecurityRecord, Toolbar,
    UnderlyingLink,
};

/// Panel slot the time-series gadget attaches to.
pub const TIMESERIES_SLOT: &str = "timeseries";

/// Fetches a security, resolves its template and renders the detail panel.
///
/// Every load takes a new generation; a load whose generation is no longer
/// current when its fetches complete is dropped without touching the panel.
/// Its loading notification is still cleared unless a newer load owns it.
pub struct DetailLoader {
    ctx: Arc<ViewContext>,
    generation: AtomicU64,
    /// Generation whose loading notification is on screen, 0 if none.
    notifying: AtomicU64,
}

impl DetailLoader {
    #[must_use]
    pub fn new(ctx: Arc<ViewContext>) -> Self {
        Self {
            ctx,
            generation: AtomicU64::new(0),
            notifying: AtomicU64::new(0),
        }
    }

    /// Starts a new generation, superseding any load in flight.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Drops any load in flight.
    pub fn invalidate(&self) {
        self.begin();
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Loads and renders in a fresh generation.
    pub async fn load(&self, request: &DetailRequest) -> CoreResult<Option<DetailPanel>> {
        let generation = self.begin();
        self.run(generation, request).await
    }

    /// Loads and renders `request` under `generation`.
    ///
    /// # Returns
    /// * `Ok(Some(panel))` - the rendered panel
    /// * `Ok(None)` - superseded by a newer generation
    pub async fn run(
        &self,
        generation: u64,
        request: &DetailRequest,
    ) -> CoreResult<Option<DetailPanel>> {
        let ctx = &self.ctx;

        if request.show_versions {
            ctx.gadgets.load_versions(&request.id);
        }

        if !ctx.config.hide_loading {
            let escalate_after = Duration::from_millis(ctx.config.still_loading_after_ms);
            self.notifying.store(generation, Ordering::SeqCst);
            ctx.renderer
                .notify(Some(&Notification::loading(escalate_after)));
        }

        let fetched = ctx
            .records
            .get(&GetSecurityRequest::new(
                request.id.clone(),
                request.version.clone(),
            ))
            .await;
        if !self.is_current(generation) {
            log::debug!("Dropping stale load of {} (generation {generation})", request.id);
            self.clear_notification(generation);
            return Ok(None);
        }
        let record = fetched.inspect_err(|_| self.clear_notification(generation))?;

        self.remember(&record).await;

        let template = self
            .resolve_template(&record.template_data.security_type)
            .await;
        if !self.is_current(generation) {
            log::debug!("Dropping stale template for {} (generation {generation})", request.id);
            self.clear_notification(generation);
            return Ok(None);
        }
        let rendered = template
            .and_then(|text| ctx.template_renderer.render(&text, &record.template_data))
            .inspect_err(|_| self.clear_notification(generation))?;

        let panel = self.build_panel(request, record, rendered);
        ctx.renderer.render_detail(&panel);
        if panel.is_deleted() {
            ctx.renderer.render_toolbar(&Toolbar::active(false));
        }
        if let Some(hts_id) = &panel.timeseries {
            ctx.gadgets.attach_timeseries(TIMESERIES_SLOT, hts_id);
        }

        self.clear_notification(generation);

        // let the panel settle before measuring
        tokio::task::yield_now().await;
        if self.is_current(generation) {
            ctx.renderer.resize();
        }
        Ok(Some(panel))
    }

    /// Clears the loading notification if `generation` still owns it.
    fn clear_notification(&self, generation: u64) {
        let owned = self
            .notifying
            .compare_exchange(generation, 0, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();
        if owned {
            self.ctx.renderer.notify(None);
        }
    }

    /// Type-specific template, falling back once to the module default.
    async fn resolve_template(&self, security_type: &str) -> CoreResult<String> {
        let config = &self.ctx.config;
        let module = config.template_module(security_type);
        match self.ctx.templates.text(&module).await {
            Ok(text) => Ok(text),
            Err(ProviderError::TemplateNotFound { .. }) => {
                let fallback = config.default_template_module();
                log::warn!("Template {module} not found, falling back to {fallback}");
                Ok(self.ctx.templates.text(&fallback).await?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Records the security in recent history. Failures are only logged.
    async fn remember(&self, record: &SecurityRecord) {
        let routes = &self.ctx.routes;
        let Some(route) = routes.last().or_else(|| routes.current()) else {
            return;
        };
        let entry = HistoryEntry {
            name: record.template_data.name.clone(),
            item: self.ctx.config.history_item(),
            value: routes.href(&route.path),
            visited_at: Utc::now(),
        };
        if let Err(e) = self.ctx.history.put(entry).await {
            log::warn!("Failed to record history for {}: {e}", record.id);
        }
    }

    fn build_panel(
        &self,
        request: &DetailRequest,
        record: SecurityRecord,
        rendered: RenderedTemplate,
    ) -> DetailPanel {
        let data = &record.template_data;

        let mut identifiers: Vec<IdentifierRow> = record
            .identifiers
            .iter()
            .map(|(scheme, value)| IdentifierRow::new(scheme, value))
            .collect();
        if identifiers.is_empty() {
            identifiers.push(IdentifierRow::placeholder());
        }

        let underlying = data.underlying_oid.as_deref().and_then(|oid| {
            let text = data
                .underlying_name
                .clone()
                .or_else(|| data.underlying_external_id.clone())
                .unwrap_or_else(|| oid.to_string());
            self.underlying_href(oid)
                .map(|href| UnderlyingLink { href, text })
        });

        DetailPanel {
            id: request.id.clone(),
            version: request.version.clone(),
            name: data.name.clone(),
            security_type: data.security_type.clone(),
            header: rendered.header,
            content: rendered.content,
            deleted_banner: data
                .deleted
                .then(|| DetailPanel::DELETED_BANNER.to_string()),
            identifiers,
            underlying,
            timeseries: data.hts_id.clone().filter(|id| !id.is_empty()),
        }
    }

    /// Item route for the underlying, keeping the name/type filters of the
    /// handled route and dropping `version` and `filter`.
    fn underlying_href(&self, oid: &str) -> Option<String> {
        let routes = &self.ctx.routes;
        let args = routes.last().map_or_else(RouteArgs::new, |r| r.args);
        let edit = HashEdit::new().add("id", oid).del("version");
        match routes.hash(RuleKind::LoadItem, &args, &edit) {
            Ok(path) => Some(routes.href(&path)),
            Err(e) => {
                log::warn!("Cannot link underlying {oid}: {e}");
                None
            }
        }
    }
}
