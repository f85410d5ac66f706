//! src/message/mod.rs
//! Message 层：Event 与 Update 之间的词汇
//!
//!     mod app;            // AppMessage，按键翻译的结果
//!     mod content;        // 列表选择 / 打开、详情滚动
//!     mod navigation;     // 会改写路由的意图：回到列表、关闭版本、标的、过滤、最近访问
//!     mod modal;          // 弹窗内的编辑与确认
//!     mod command;        // Update 层的输出
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 两个方向
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     按键 ──handle_event──▶ AppMessage ──update──▶ Model
//!                                            │
//!                                            └──▶ Option<Command> ──▶ CoreService
//!
//!     导航类 Command（Go、Open、Filter、BackToList）都变成 RouteModel::go；
//!     Dispatch(ActionId) 交给控制器的操作，操作完成后同样以路由结束。
//!     视图状态由 securities-core 根据路由决定，UI 不自行切换 LIST / DETAIL。
//!
//!     反方向的 UiEvent（渲染、对话框、路由变化）不经过 AppMessage：
//!     它们携带 oneshot 发送端，不能 Clone，由 update::apply_backend 直接处理。

mod app;
mod command;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use command::Command;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
