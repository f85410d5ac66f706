//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 标题栏 + 工具栏 + 列表/详情 + 状态栏
//!         mod components;     // 各区域组件与弹窗
//!         pub mod theme;      // 颜色与样式
//!
//!     布局随区域状态变化：
//!         LIST / LIST_FILTERED        只有列表
//!         DETAIL                      列表 | 详情
//!         DETAIL_VERSIONED            列表 | 详情 / 版本
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
pub use theme::Theme;
