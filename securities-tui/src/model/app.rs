//! 应用主状态结构

use securities_core::types::{FilterState, Toolbar};

use super::{DetailState, FocusPanel, ListState, ModalState, StatusState, VersionsState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 当前路由（带前缀），显示在标题栏
    pub route: String,

    /// 当前路由中的过滤条件
    pub filter: FilterState,

    /// 控制器要求重新布局
    pub needs_resize: bool,

    // === 区域状态 ===
    pub list: ListState,
    pub detail: DetailState,
    pub versions: VersionsState,
    pub toolbar: Toolbar,

    /// 状态栏
    pub status: StatusState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::List,
            route: String::new(),
            filter: FilterState::default(),
            needs_resize: false,
            list: ListState::new(),
            detail: DetailState::new(),
            versions: VersionsState::default(),
            toolbar: Toolbar::default_variant(),
            status: StatusState::new(),
            modal: ModalState::new(),
        }
    }

    /// 取出并清除重新布局标记
    pub fn take_resize(&mut self) -> bool {
        std::mem::take(&mut self.needs_resize)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
