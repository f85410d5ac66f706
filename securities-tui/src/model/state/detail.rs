//! 详情与版本面板状态

use securities_core::types::{DetailPanel, RegionState};

/// 详情面板状态
#[derive(Debug, Default)]
pub struct DetailState {
    /// 区域是否打开（由控制器决定）
    pub open: bool,
    /// 最近一次渲染的详情
    pub panel: Option<DetailPanel>,
    /// 附加的时间序列 id
    pub timeseries: Option<String>,
    /// 内容滚动偏移
    pub scroll: u16,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_region(&mut self, state: RegionState) {
        self.open = state.is_open();
    }

    pub fn show(&mut self, panel: DetailPanel) {
        // 换了证券才丢弃时间序列，它在详情之后才到
        if self.panel.as_ref().map(|p| &p.id) != Some(&panel.id) {
            self.timeseries = None;
        }
        self.panel = Some(panel);
        self.scroll = 0;
    }

    pub fn clear(&mut self) {
        self.panel = None;
        self.timeseries = None;
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

/// 版本面板状态
#[derive(Debug, Default)]
pub struct VersionsState {
    pub open: bool,
    /// 版本列表所属的证券
    pub id: Option<String>,
}

impl VersionsState {
    pub fn set_region(&mut self, state: RegionState) {
        self.open = state.is_open();
        if !self.open {
            self.id = None;
        }
    }
}
