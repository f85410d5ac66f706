//! src/backend/mod.rs
//! Backend 层：视图控制器与协作者
//!
//! Backend 层与 UI 解耦，securities-core 的视图控制器运行在 tokio 任务中，
//! UI 主循环只通过 CoreService 的方法和 UiEvent 通道与它交互。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;           // 核心服务入口
//!         mod bridge;                 // 渲染/对话框/列表/gadget 的 trait 实现
//!         mod config_service;         // 配置文件
//!         mod history_repository;     // 最近访问（JSON 文件）
//!         mod template_renderer;      // 占位符模板渲染
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在列表中按 Enter
//!         ↓
//!     Update 层返回 Command::Open(id)
//!         ↓
//!     CoreService::open(id) 生成路由并调用 RouteModel::go
//!         ↓
//!     视图控制器任务收到路由通知，执行状态转换并加载详情
//!         ↓
//!     TuiRenderer 等将结果作为 UiEvent 送回
//!         ↓
//!     主循环取出 UiEvent，交给 Update 层修改 Model
//!         ↓
//!     View 层重新渲染
//!
//!     对话框（新增、删除确认）同理：控制器发出 UiEvent::Input / Confirm，
//!     附带 oneshot 发送端，用户回答后由 Update 层回传。

mod bridge;
mod config_service;
mod core_service;
mod history_repository;
mod template_renderer;

pub use bridge::UiEvent;
pub use config_service::{config_dir, AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
