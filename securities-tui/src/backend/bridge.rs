//! 视图桥接
//!
//! 实现 securities-core 的渲染、对话框、列表与 gadget trait。
//! 控制器运行在 tokio 任务中，所有输出以 [`UiEvent`] 形式送往 UI 主循环；
//! 对话框通过 oneshot 通道等待用户回答。

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use securities_core::types::{
    ColumnDef, ConfirmDialog, DetailPanel, DialogValues, FilterState, HistoryEntry, InputDialog,
    Notification, Region, RegionState, SearchQuery, SecuritySummary, Toolbar,
};
use securities_core::{
    CloseHandler, CoreResult, DialogService, Gadgets, SearchGrid, ViewRenderer,
};
use securities_provider::{SecurityProvider, SecurityQueryParams};
use tokio::sync::{mpsc, oneshot};

/// 从后端送往 UI 的事件
pub enum UiEvent {
    Region(Region, RegionState),
    Toolbar(Toolbar),
    Detail(DetailPanel),
    ClearDetail,
    Notify(Option<Notification>),
    Error(String),
    Resize,

    Columns(Vec<ColumnDef>),
    Rows {
        rows: Vec<SecuritySummary>,
        total: u32,
    },

    Versions(String),
    Timeseries {
        slot: String,
        hts_id: String,
    },

    Input(InputDialog, oneshot::Sender<Option<DialogValues>>),
    Confirm(ConfirmDialog, oneshot::Sender<bool>),
    ErrorDialog {
        title: String,
        message: String,
    },

    Route {
        href: String,
        filter: FilterState,
    },
    Recent(Vec<HistoryEntry>),
}

/// 发送端，UI 已退出时丢弃事件
#[derive(Clone)]
pub struct UiSender(mpsc::UnboundedSender<UiEvent>);

impl UiSender {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self(tx), rx)
    }

    pub fn send(&self, event: UiEvent) {
        if self.0.send(event).is_err() {
            log::debug!("UI closed, dropping event");
        }
    }
}

// ===== ViewRenderer =====

pub struct TuiRenderer {
    tx: UiSender,
    close_handlers: Mutex<HashMap<Region, CloseHandler>>,
}

impl TuiRenderer {
    pub fn new(tx: UiSender) -> Self {
        Self {
            tx,
            close_handlers: Mutex::new(HashMap::new()),
        }
    }

    /// 用户直接关闭区域时调用
    pub fn close(&self, region: Region) {
        let handler = self
            .close_handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&region)
            .cloned();
        match handler {
            Some(handler) => handler(),
            None => log::debug!("No close handler for {region:?}"),
        }
    }
}

impl ViewRenderer for TuiRenderer {
    fn set_region(&self, region: Region, state: RegionState) {
        self.tx.send(UiEvent::Region(region, state));
    }

    fn set_close_handler(&self, region: Region, handler: Option<CloseHandler>) {
        let mut handlers = self
            .close_handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match handler {
            Some(handler) => {
                handlers.insert(region, handler);
            }
            None => {
                handlers.remove(&region);
            }
        }
    }

    fn render_toolbar(&self, toolbar: &Toolbar) {
        self.tx.send(UiEvent::Toolbar(toolbar.clone()));
    }

    fn render_detail(&self, panel: &DetailPanel) {
        self.tx.send(UiEvent::Detail(panel.clone()));
    }

    fn clear_detail(&self) {
        self.tx.send(UiEvent::ClearDetail);
    }

    fn notify(&self, notification: Option<&Notification>) {
        self.tx.send(UiEvent::Notify(notification.cloned()));
    }

    fn show_error(&self, message: &str) {
        self.tx.send(UiEvent::Error(message.to_string()));
    }

    fn resize(&self) {
        self.tx.send(UiEvent::Resize);
    }
}

// ===== DialogService =====

pub struct TuiDialogs {
    tx: UiSender,
}

impl TuiDialogs {
    pub fn new(tx: UiSender) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl DialogService for TuiDialogs {
    async fn input(&self, dialog: InputDialog) -> Option<DialogValues> {
        let (reply, answer) = oneshot::channel();
        self.tx.send(UiEvent::Input(dialog, reply));
        answer.await.ok().flatten()
    }

    async fn confirm(&self, dialog: ConfirmDialog) -> bool {
        let (reply, answer) = oneshot::channel();
        self.tx.send(UiEvent::Confirm(dialog, reply));
        answer.await.unwrap_or(false)
    }

    async fn error(&self, title: &str, message: &str) {
        self.tx.send(UiEvent::ErrorDialog {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

// ===== SearchGrid =====

/// 列表：每次过滤都向记录服务重新查询
pub struct TuiGrid {
    records: Arc<dyn SecurityProvider>,
    tx: UiSender,
}

impl TuiGrid {
    pub fn new(records: Arc<dyn SecurityProvider>, tx: UiSender) -> Self {
        Self { records, tx }
    }
}

#[async_trait]
impl SearchGrid for TuiGrid {
    async fn load(&self, query: &SearchQuery) -> CoreResult<()> {
        self.tx.send(UiEvent::Columns(query.columns.clone()));
        self.filter(&query.filter).await
    }

    async fn filter(&self, filter: &FilterState) -> CoreResult<()> {
        let params = SecurityQueryParams {
            name: filter.name.clone(),
            security_type: filter.security_type.clone(),
            ..Default::default()
        };
        let page = self.records.search(&params).await?;
        log::debug!(
            "Listed {} of {} securities",
            page.items.len(),
            page.total_count
        );
        self.tx.send(UiEvent::Rows {
            rows: page.items,
            total: page.total_count,
        });
        Ok(())
    }
}

// ===== Gadgets =====

pub struct TuiGadgets {
    tx: UiSender,
}

impl TuiGadgets {
    pub fn new(tx: UiSender) -> Self {
        Self { tx }
    }
}

impl Gadgets for TuiGadgets {
    fn load_versions(&self, id: &str) {
        self.tx.send(UiEvent::Versions(id.to_string()));
    }

    fn attach_timeseries(&self, slot: &str, hts_id: &str) {
        self.tx.send(UiEvent::Timeseries {
            slot: slot.to_string(),
            hts_id: hts_id.to_string(),
        });
    }
}
