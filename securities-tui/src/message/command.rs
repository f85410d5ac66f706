//! 交给 Backend 层执行的命令
//!
//! Update 层只修改 Model；需要路由或控制器参与的操作
//! 以 Command 返回，由 app.rs 调用 CoreService 执行。

use securities_core::types::{ActionId, Region};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 跳转到路由（可带前缀）
    Go(String),
    /// 打开证券
    Open(String),
    /// 应用列表过滤；空字符串表示不过滤
    Filter {
        name: String,
        security_type: String,
    },
    /// 回到列表
    BackToList,
    /// 执行工具栏操作
    Dispatch(ActionId),
    /// 用户关闭区域
    CloseRegion(Region),
    /// 读取最近访问
    LoadRecent,
}
