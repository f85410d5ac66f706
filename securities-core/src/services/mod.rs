//! 业务逻辑服务层

mod action_registry;
mod detail_loader;
mod search_controller;
mod transition;
mod view_controller;

pub use action_registry::{ActionOutcome, ActionRegistry, versions_close_handler};
pub use detail_loader::{DetailLoader, TIMESERIES_SLOT};
pub use search_controller::SearchController;
pub use transition::plan;
pub use view_controller::{SecuritiesView, ViewHandle};

use std::sync::Arc;

use crate::config::ViewConfig;
use crate::error::CoreError;
use crate::routes::RouteModel;
use crate::traits::{
    DialogService, Gadgets, HistoryStore, SearchGrid, SecurityProvider, TemplateRenderer,
    TemplateSource, ViewRenderer,
};

/// 服务上下文 - 持有所有依赖
///
/// 前端需要创建此上下文，并注入渲染、对话框、列表等平台实现。
pub struct ViewContext {
    pub config: ViewConfig,
    /// 路由模型（唯一状态来源）
    pub routes: Arc<RouteModel>,
    /// 远程记录服务
    pub records: Arc<dyn SecurityProvider>,
    /// 模板文本服务
    pub templates: Arc<dyn TemplateSource>,
    pub template_renderer: Arc<dyn TemplateRenderer>,
    pub renderer: Arc<dyn ViewRenderer>,
    pub dialogs: Arc<dyn DialogService>,
    pub grid: Arc<dyn SearchGrid>,
    pub history: Arc<dyn HistoryStore>,
    pub gadgets: Arc<dyn Gadgets>,
}

impl ViewContext {
    /// 记录错误并通过渲染器的错误通道展示给用户
    pub(crate) fn surface(&self, err: &CoreError, context: &str) {
        err.log(context);
        self.renderer.show_error(&err.user_message());
    }
}
