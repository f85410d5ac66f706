//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use securities_provider::{
    PaginatedResponse, ProviderError, Result as ProviderResult, SecurityQueryParams,
};
use tokio::sync::{Notify, RwLock};

use crate::config::ViewConfig;
use crate::error::CoreResult;
use crate::routes::{RouteModel, Rules};
use crate::services::ViewContext;
use crate::traits::{
    CloseHandler, DialogService, Gadgets, InMemoryHistoryStore, SearchGrid, SecurityProvider,
    TemplateRenderer, TemplateSource, ViewRenderer,
};
use crate::types::{
    ConfirmDialog, CreateSecuritiesRequest, DetailPanel, DialogValues, FilterState,
    GetSecurityRequest, InputDialog, Notification, Region, RegionState, RenderedTemplate,
    SearchQuery, SecurityMeta, SecurityRecord, SecuritySummary, TemplateData, Toolbar,
};

fn network_error(detail: &str) -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: detail.to_string(),
    }
}

// ===== MockSecurityProvider =====

#[derive(Default)]
pub struct MockSecurityProvider {
    records: RwLock<HashMap<String, SecurityRecord>>,
    types: RwLock<Vec<String>>,
    /// 剩余失败次数
    meta_failures: AtomicU32,
    meta_calls: AtomicU32,
    /// 按 id 阻塞 get，直到 notify
    gates: RwLock<HashMap<String, Arc<Notify>>>,
    get_calls: RwLock<Vec<GetSecurityRequest>>,
    get_count: AtomicUsize,
    created_ids: RwLock<Vec<String>>,
    created: RwLock<Vec<CreateSecuritiesRequest>>,
    create_fails: AtomicBool,
    deleted: RwLock<Vec<String>>,
    delete_fails: AtomicBool,
}

impl MockSecurityProvider {
    pub async fn insert(&self, mut record: SecurityRecord) {
        if record.id.is_empty() {
            record.id = record.template_data.name.clone();
        }
        self.records.write().await.insert(record.id.clone(), record);
    }

    pub async fn set_types(&self, types: &[&str]) {
        *self.types.write().await = types.iter().map(ToString::to_string).collect();
    }

    /// Fails the next `n` metadata calls.
    pub fn fail_meta(&self, n: u32) {
        self.meta_failures.store(n, Ordering::SeqCst);
    }

    pub fn meta_calls(&self) -> u32 {
        self.meta_calls.load(Ordering::SeqCst)
    }

    /// Holds `get` for this id until the returned notify fires.
    pub async fn gate(&self, id: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.write().await.insert(id.to_string(), gate.clone());
        gate
    }

    pub async fn get_calls(&self) -> Vec<GetSecurityRequest> {
        self.get_calls.read().await.clone()
    }

    pub fn try_get_calls(&self) -> usize {
        self.get_count.load(Ordering::SeqCst)
    }

    pub async fn set_created(&self, ids: Vec<String>) {
        *self.created_ids.write().await = ids;
    }

    pub async fn created(&self) -> Vec<CreateSecuritiesRequest> {
        self.created.read().await.clone()
    }

    pub async fn fail_create(&self) {
        self.create_fails.store(true, Ordering::SeqCst);
    }

    pub async fn deleted(&self) -> Vec<String> {
        self.deleted.read().await.clone()
    }

    pub async fn fail_delete(&self) {
        self.delete_fails.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl SecurityProvider for MockSecurityProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn get(&self, request: &GetSecurityRequest) -> ProviderResult<SecurityRecord> {
        self.get_calls.write().await.push(request.clone());
        self.get_count.fetch_add(1, Ordering::SeqCst);

        let gate = self.gates.read().await.get(&request.id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.records
            .read()
            .await
            .get(&request.id)
            .cloned()
            .ok_or_else(|| ProviderError::RecordNotFound {
                provider: "mock".to_string(),
                record_id: request.id.clone(),
                raw_message: None,
            })
    }

    async fn get_meta(&self) -> ProviderResult<SecurityMeta> {
        self.meta_calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.meta_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.meta_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(network_error("connection refused"));
        }
        Ok(SecurityMeta {
            types: self.types.read().await.clone(),
        })
    }

    async fn search(
        &self,
        params: &SecurityQueryParams,
    ) -> ProviderResult<PaginatedResponse<SecuritySummary>> {
        let items: Vec<SecuritySummary> = self
            .records
            .read()
            .await
            .values()
            .map(|r| SecuritySummary {
                id: r.id.clone(),
                name: r.template_data.name.clone(),
                security_type: r.template_data.security_type.clone(),
            })
            .collect();
        let total = u32::try_from(items.len()).unwrap_or(u32::MAX);
        Ok(PaginatedResponse::new(items, params.page, params.page_size, total))
    }

    async fn create(&self, request: &CreateSecuritiesRequest) -> ProviderResult<Vec<String>> {
        if self.create_fails.load(Ordering::SeqCst) {
            return Err(network_error("create failed"));
        }
        self.created.write().await.push(request.clone());
        Ok(self.created_ids.read().await.clone())
    }

    async fn delete(&self, id: &str) -> ProviderResult<()> {
        if self.delete_fails.load(Ordering::SeqCst) {
            return Err(network_error("delete failed"));
        }
        self.deleted.write().await.push(id.to_string());
        Ok(())
    }
}

// ===== MockTemplateSource =====

#[derive(Default)]
pub struct MockTemplateSource {
    templates: RwLock<HashMap<String, String>>,
    requested: RwLock<Vec<String>>,
}

impl MockTemplateSource {
    pub async fn insert(&self, module: &str, text: &str) {
        self.templates
            .write()
            .await
            .insert(module.to_string(), text.to_string());
    }

    pub async fn requested(&self) -> Vec<String> {
        self.requested.read().await.clone()
    }
}

#[async_trait]
impl TemplateSource for MockTemplateSource {
    async fn text(&self, module: &str) -> ProviderResult<String> {
        self.requested.write().await.push(module.to_string());
        self.templates
            .read()
            .await
            .get(module)
            .cloned()
            .ok_or_else(|| ProviderError::TemplateNotFound {
                provider: "mock".to_string(),
                module: module.to_string(),
            })
    }
}

/// `header` is the record name, `content` is `<template>|<type>`.
pub struct StubTemplateRenderer;

impl TemplateRenderer for StubTemplateRenderer {
    fn render(&self, template: &str, data: &TemplateData) -> CoreResult<RenderedTemplate> {
        Ok(RenderedTemplate {
            header: data.name.clone(),
            content: format!("{template}|{}", data.security_type),
        })
    }
}

// ===== RecordingRenderer =====

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Region(Region, RegionState),
    CloseHandler(Region, bool),
    Toolbar(Toolbar),
    Detail(DetailPanel),
    ClearDetail,
    Notify(Option<String>),
    Error(String),
    Resize,
}

#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
    close_handlers: Mutex<HashMap<Region, CloseHandler>>,
}

impl RecordingRenderer {
    fn record(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn details(&self) -> Vec<DetailPanel> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Detail(panel) => Some(panel),
                _ => None,
            })
            .collect()
    }

    pub fn toolbars(&self) -> Vec<Toolbar> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Toolbar(toolbar) => Some(toolbar),
                _ => None,
            })
            .collect()
    }

    pub fn regions(&self, region: Region) -> Vec<RegionState> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Region(r, state) if r == region => Some(state),
                _ => None,
            })
            .collect()
    }

    pub fn close_handler(&self, region: Region) -> Option<CloseHandler> {
        self.close_handlers.lock().unwrap().get(&region).cloned()
    }

    /// Simulates the user closing a region.
    pub fn close(&self, region: Region) {
        if let Some(handler) = self.close_handler(region) {
            handler();
        }
    }
}

impl ViewRenderer for RecordingRenderer {
    fn set_region(&self, region: Region, state: RegionState) {
        self.record(RenderEvent::Region(region, state));
    }

    fn set_close_handler(&self, region: Region, handler: Option<CloseHandler>) {
        self.record(RenderEvent::CloseHandler(region, handler.is_some()));
        let mut handlers = self.close_handlers.lock().unwrap();
        match handler {
            Some(handler) => handlers.insert(region, handler),
            None => handlers.remove(&region),
        };
    }

    fn render_toolbar(&self, toolbar: &Toolbar) {
        self.record(RenderEvent::Toolbar(toolbar.clone()));
    }

    fn render_detail(&self, panel: &DetailPanel) {
        self.record(RenderEvent::Detail(panel.clone()));
    }

    fn clear_detail(&self) {
        self.record(RenderEvent::ClearDetail);
    }

    fn notify(&self, notification: Option<&Notification>) {
        self.record(RenderEvent::Notify(notification.map(|n| n.message.clone())));
    }

    fn show_error(&self, message: &str) {
        self.record(RenderEvent::Error(message.to_string()));
    }

    fn resize(&self) {
        self.record(RenderEvent::Resize);
    }
}

// ===== ScriptedDialogs =====

#[derive(Default)]
pub struct ScriptedDialogs {
    inputs: Mutex<VecDeque<Option<DialogValues>>>,
    confirms: Mutex<VecDeque<bool>>,
    confirm_gate: Mutex<Option<Arc<Notify>>>,
    confirm_pending: AtomicBool,
    errors: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn push_input(&self, values: Option<DialogValues>) {
        self.inputs.lock().unwrap().push_back(values);
    }

    pub fn push_confirm(&self, answer: bool) {
        self.confirms.lock().unwrap().push_back(answer);
    }

    /// Next confirm answers `answer`, but only once the returned notify fires.
    pub fn gate_confirm(&self, answer: bool) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.confirm_gate.lock().unwrap() = Some(gate.clone());
        self.push_confirm(answer);
        gate
    }

    pub fn confirm_pending(&self) -> bool {
        self.confirm_pending.load(Ordering::SeqCst)
    }

    /// Titles of the error dialogs shown.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

#[async_trait]
impl DialogService for ScriptedDialogs {
    async fn input(&self, _dialog: InputDialog) -> Option<DialogValues> {
        self.inputs.lock().unwrap().pop_front().flatten()
    }

    async fn confirm(&self, _dialog: ConfirmDialog) -> bool {
        let gate = self.confirm_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            self.confirm_pending.store(true, Ordering::SeqCst);
            gate.notified().await;
            self.confirm_pending.store(false, Ordering::SeqCst);
        }
        self.confirms.lock().unwrap().pop_front().unwrap_or(false)
    }

    async fn error(&self, title: &str, _message: &str) {
        self.errors.lock().unwrap().push(title.to_string());
    }
}

// ===== RecordingGrid / RecordingGadgets =====

#[derive(Default)]
pub struct RecordingGrid {
    loads: Mutex<Vec<SearchQuery>>,
    filters: Mutex<Vec<FilterState>>,
}

impl RecordingGrid {
    pub fn loads(&self) -> Vec<SearchQuery> {
        self.loads.lock().unwrap().clone()
    }

    pub fn filters(&self) -> Vec<FilterState> {
        self.filters.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchGrid for RecordingGrid {
    async fn load(&self, query: &SearchQuery) -> CoreResult<()> {
        self.loads.lock().unwrap().push(query.clone());
        Ok(())
    }

    async fn filter(&self, filter: &FilterState) -> CoreResult<()> {
        self.filters.lock().unwrap().push(filter.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingGadgets {
    versions: Mutex<Vec<String>>,
    timeseries: Mutex<Vec<(String, String)>>,
}

impl RecordingGadgets {
    pub fn versions(&self) -> Vec<String> {
        self.versions.lock().unwrap().clone()
    }

    pub fn timeseries(&self) -> Vec<(String, String)> {
        self.timeseries.lock().unwrap().clone()
    }
}

impl Gadgets for RecordingGadgets {
    fn load_versions(&self, id: &str) {
        self.versions.lock().unwrap().push(id.to_string());
    }

    fn attach_timeseries(&self, slot: &str, hts_id: &str) {
        self.timeseries
            .lock()
            .unwrap()
            .push((slot.to_string(), hts_id.to_string()));
    }
}

// ===== 工厂方法 =====

pub struct TestHarness {
    pub ctx: Arc<ViewContext>,
    pub provider: Arc<MockSecurityProvider>,
    pub templates: Arc<MockTemplateSource>,
    pub renderer: Arc<RecordingRenderer>,
    pub dialogs: Arc<ScriptedDialogs>,
    pub grid: Arc<RecordingGrid>,
    pub gadgets: Arc<RecordingGadgets>,
    pub history: Arc<InMemoryHistoryStore>,
}

impl TestHarness {
    /// Rebuilds the context with a different config, keeping the mocks.
    #[must_use]
    pub fn with_config(mut self, config: ViewConfig) -> Self {
        let routes = Arc::new(RouteModel::new(
            RouteModel::DEFAULT_PREFIX,
            Rules::for_page(&config.page_name),
        ));
        self.ctx = Arc::new(ViewContext {
            config,
            routes,
            records: self.provider.clone(),
            templates: self.templates.clone(),
            template_renderer: Arc::new(StubTemplateRenderer),
            renderer: self.renderer.clone(),
            dialogs: self.dialogs.clone(),
            grid: self.grid.clone(),
            history: self.history.clone(),
            gadgets: self.gadgets.clone(),
        });
        self
    }
}

/// 创建测试用 `ViewContext` 及其 mock
pub fn create_test_harness() -> TestHarness {
    let provider = Arc::new(MockSecurityProvider::default());
    let templates = Arc::new(MockTemplateSource::default());
    let renderer = Arc::new(RecordingRenderer::default());
    let dialogs = Arc::new(ScriptedDialogs::default());
    let grid = Arc::new(RecordingGrid::default());
    let gadgets = Arc::new(RecordingGadgets::default());
    let history = Arc::new(InMemoryHistoryStore::default());

    let ctx = Arc::new(ViewContext {
        config: ViewConfig::default(),
        routes: Arc::new(RouteModel::default()),
        records: provider.clone(),
        templates: templates.clone(),
        template_renderer: Arc::new(StubTemplateRenderer),
        renderer: renderer.clone(),
        dialogs: dialogs.clone(),
        grid: grid.clone(),
        history: history.clone(),
        gadgets: gadgets.clone(),
    });

    TestHarness {
        ctx,
        provider,
        templates,
        renderer,
        dialogs,
        grid,
        gadgets,
        history,
    }
}

/// 创建一个用于测试的 `SecurityRecord`，没有标识符
pub fn security(id: &str, security_type: &str, name: &str) -> SecurityRecord {
    SecurityRecord {
        id: id.to_string(),
        template_data: TemplateData {
            security_type: security_type.to_string(),
            name: name.to_string(),
            ..Default::default()
        },
        identifiers: Default::default(),
    }
}

/// Yields until `cond` holds, panicking if it never does.
pub async fn eventually(cond: impl Fn() -> bool) {
    for _ in 0..10_000 {
        if cond() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}
