//! 核心服务
//!
//! 封装 securities-core 的视图控制器，
//! 提供给 TUI 层使用的统一接口

use std::sync::Arc;

use anyhow::Result;
use securities_core::types::{ActionId, FilterState, HashEdit, Region, RuleKind};
use securities_core::{
    CoreError, HistoryStore, RouteModel, Rules, SecuritiesView, ViewContext, ViewHandle,
    ViewRenderer,
};
use securities_provider::create_providers;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::bridge::{TuiDialogs, TuiGadgets, TuiGrid, TuiRenderer, UiEvent, UiSender};
use super::config_service::AppConfig;
use super::history_repository::JsonHistoryRepository;
use super::template_renderer::PlaceholderTemplateRenderer;

/// 最近访问列表的条目数
const RECENT_LIMIT: usize = 10;

/// TUI 核心服务
///
/// 持有视图控制器及其协作者，UI 层通过它导航和触发操作
pub struct CoreService {
    view: Arc<SecuritiesView>,
    routes: Arc<RouteModel>,
    renderer: Arc<TuiRenderer>,
    history: Arc<dyn HistoryStore>,
    history_item: String,
    initial_route: String,
    tx: UiSender,
    events: mpsc::UnboundedReceiver<UiEvent>,
    handle: Option<ViewHandle>,
    route_events: Option<JoinHandle<()>>,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(config: &AppConfig) -> Result<Self> {
        // 1. 远程服务
        let providers = create_providers(&config.rest)?;

        // 2. UI 桥接
        let (tx, events) = UiSender::channel();
        let renderer = Arc::new(TuiRenderer::new(tx.clone()));
        let history: Arc<dyn HistoryStore> = Arc::new(JsonHistoryRepository::new());

        // 3. 路由与上下文
        let routes = Arc::new(RouteModel::new(
            config.route_prefix.clone(),
            Rules::for_page(&config.view.page_name),
        ));
        let ctx = Arc::new(ViewContext {
            config: config.view.clone(),
            routes: routes.clone(),
            records: providers.records.clone(),
            templates: providers.templates,
            template_renderer: Arc::new(PlaceholderTemplateRenderer::new()?),
            renderer: renderer.clone(),
            dialogs: Arc::new(TuiDialogs::new(tx.clone())),
            grid: Arc::new(TuiGrid::new(providers.records, tx.clone())),
            history: history.clone(),
            gadgets: Arc::new(TuiGadgets::new(tx.clone())),
        });

        Ok(Self {
            view: Arc::new(SecuritiesView::new(ctx)),
            routes,
            renderer,
            history,
            history_item: config.view.history_item(),
            initial_route: config.initial_route.clone(),
            tx,
            events,
            handle: None,
            route_events: None,
        })
    }

    /// 启动路由监听并打开初始路由
    ///
    /// 须在 tokio 运行时上下文中调用
    pub fn start(&mut self) {
        self.route_events = Some(follow_routes(self.routes.clone(), self.tx.clone()));
        self.handle = Some(self.view.spawn());
        let initial = self.initial_route.clone();
        self.go(&initial);
    }

    /// 取出一条待处理的后端事件
    pub fn try_recv(&mut self) -> Option<UiEvent> {
        self.events.try_recv().ok()
    }

    // ========== 导航 ==========

    pub fn go(&self, path: &str) {
        if let Err(e) = self.routes.go(path) {
            self.report(&e, "Navigate");
        }
    }

    /// 打开证券，保留当前的过滤条件
    pub fn open(&self, id: &str) {
        let edit = HashEdit::new().add("id", id).del("version");
        self.go_edited(RuleKind::LoadItem, &edit);
    }

    /// 应用列表过滤；空值表示不过滤
    pub fn filter(&self, name: &str, security_type: &str) {
        let showing_item = self.routes.current().is_some_and(|r| r.id().is_some());
        let rule = if showing_item {
            RuleKind::LoadItem
        } else {
            RuleKind::Load
        };
        let edit = HashEdit::new()
            .add("name", name.trim())
            .add("type", security_type);
        self.go_edited(rule, &edit);
    }

    /// 回到列表
    pub fn back_to_list(&self) {
        self.go_edited(RuleKind::Load, &HashEdit::new());
    }

    fn go_edited(&self, rule: RuleKind, edit: &HashEdit) {
        match self.routes.hash(rule, &self.routes.current_args(), edit) {
            Ok(path) => self.go(&path),
            Err(e) => self.report(&e, "Navigate"),
        }
    }

    // ========== 操作 ==========

    /// 在后台执行工具栏操作
    pub fn dispatch(&self, action: ActionId) {
        let view = self.view.clone();
        let renderer = self.renderer.clone();
        tokio::spawn(async move {
            if let Err(e) = view.dispatch(action).await {
                renderer.show_error(&e.user_message());
            }
        });
    }

    /// 用户关闭区域
    pub fn close_region(&self, region: Region) {
        self.renderer.close(region);
    }

    /// 加载最近访问列表
    pub fn load_recent(&self) {
        let history = self.history.clone();
        let item = self.history_item.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match history.recent(&item, RECENT_LIMIT).await {
                Ok(entries) => tx.send(UiEvent::Recent(entries)),
                Err(e) => {
                    e.log("Load recent");
                    tx.send(UiEvent::Error(e.user_message()));
                }
            }
        });
    }

    fn report(&self, e: &CoreError, context: &str) {
        e.log(context);
        self.tx.send(UiEvent::Error(e.user_message()));
    }

    /// 停止视图
    pub async fn shutdown(&mut self) {
        if let Some(task) = self.route_events.take() {
            task.abort();
        }
        if let Some(handle) = self.handle.take() {
            handle.teardown().await;
        }
    }
}

/// 将路由变化转发给 UI（标题栏与过滤表单）
///
/// 操作与关闭回调直接调用 `RouteModel::go`，因此订阅路由模型而不是在 `go` 中发送
fn follow_routes(routes: Arc<RouteModel>, tx: UiSender) -> JoinHandle<()> {
    let mut changes = routes.subscribe();
    tokio::spawn(async move {
        loop {
            let route = changes.borrow_and_update().clone();
            if let Some(route) = route {
                tx.send(UiEvent::Route {
                    href: routes.href(&route.path),
                    filter: FilterState::from_args(&route.args),
                });
            }
            if changes.changed().await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn next_route(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> (String, FilterState) {
        match rx.recv().await {
            Some(UiEvent::Route { href, filter }) => (href, filter),
            _ => panic!("expected a route event"),
        }
    }

    #[tokio::test]
    async fn route_changes_from_any_caller_reach_the_ui() {
        let routes = Arc::new(RouteModel::default());
        let (tx, mut rx) = UiSender::channel();
        let task = follow_routes(routes.clone(), tx);

        routes.go("/securities/foo123/name:ACME").unwrap();
        let (href, filter) = next_route(&mut rx).await;
        assert_eq!(href, "#/securities/foo123/name:ACME");
        assert_eq!(filter.name.as_deref(), Some("ACME"));

        // 如新增操作后回到列表
        let path = routes
            .hash(RuleKind::Load, &Default::default(), &HashEdit::new())
            .unwrap();
        routes.go(&path).unwrap();
        let (href, filter) = next_route(&mut rx).await;
        assert_eq!(href, "#/securities");
        assert_eq!(filter, FilterState::default());

        task.abort();
    }
}
