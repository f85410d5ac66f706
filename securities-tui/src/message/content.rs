//! 内容面板消息
//!
//! 列表选择与详情滚动

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 打开选中的证券
    Open,

    // ========== 详情 ==========
    ScrollUp,
    ScrollDown,
}
