//! 路由导航消息

/// 导航消息：都会改写路由，由控制器执行状态转换
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 关闭详情回到列表（保留过滤条件）
    BackToList,
    /// 关闭版本区域
    CloseVersions,
    /// 跳转到详情中的标的证券
    FollowUnderlying,
    /// 打开过滤表单
    OpenFilter,
    /// 打开最近访问列表
    ShowRecent,
}
