//! 应用主消息枚举

use securities_core::types::ActionId;

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 路由导航消息
    Navigation(NavigationMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 工具栏操作
    Action(ActionId),

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
