//! src/event/mod.rs
//! Event 层：按键 → AppMessage
//!
//!     mod handler;        // poll_event / handle_event
//!     mod keymap;         // DefaultKeymap 与帮助文本 HELP_LINES
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 分发顺序
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Ctrl+c                       任何时候都退出
//!       ↓
//!     弹窗打开？                   handle_modal_keys → ModalMessage
//!       ↓                          （新增证券表单、删除确认、过滤、最近访问、帮助）
//!     全局键
//!         Alt+a / Alt+d / Alt+v    工具栏 new / delete / versions
//!         /                        过滤表单（名称 + 类型）
//!         h                        最近访问
//!         u                        跳转到标的证券
//!         Esc                      先关闭版本面板，再回到列表
//!       ↓
//!     焦点在列表                   ↑↓ / Home / End 选择，Enter 打开证券
//!     焦点在详情                   ↑↓ 滚动
//!
//!
//!     工具栏按键只产生 AppMessage::Action，是否可用由 update 层对照当前
//!     Toolbar 判断：列表状态下 delete 与 versions 不可用，已删除证券的
//!     delete 不可用。真正的操作在 securities-core 的 ActionRegistry 中执行，
//!     结果通过路由变化回到 UI。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::HELP_LINES;
