//!
//! src/model/mod.rs
//! Model 层：终端上看到的一切
//!
//! 路由、状态机与加载都在 securities-core 的视图控制器中，
//! 这里只保存控制器送来的结果，以及光标、滚动、弹窗输入等纯界面状态。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（List / Detail）
//!
//!         pub mod state;      // 区域数据状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub route: String,                  // 当前路由（标题栏）
//!             pub filter: FilterState,            // 路由中的过滤条件（过滤表单初值）
//!             pub needs_resize: bool,             // 控制器请求重新测量
//!
//!             pub list: ListState,                // 证券列表
//!             pub detail: DetailState,            // 详情区域
//!             pub versions: VersionsState,        // 版本区域
//!             pub toolbar: Toolbar,               // 工具栏
//!             pub status: StatusState,            // 状态栏
//!
//!             pub modal: ModalState               // 弹窗状态
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、区域状态
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     区域的开关由控制器决定（UiEvent::Region），UI 不自行打开或关闭。
//!     用户关闭版本区域时，UI 只通知控制器，由它安装的关闭回调改写路由。
//!
//!     数据流：
//!         控制器 set_region(Detail, Open)
//!             ↓
//!         TuiRenderer 发送 UiEvent::Region
//!             ↓
//!         update/backend.rs 执行 app.detail.set_region(state)
//!             ↓
//!         view/layout.rs 根据 app.detail.open 划分布局
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Input / Confirm 弹窗携带 oneshot 发送端，控制器在另一端等待回答。
//!     关闭或被替换时按取消回答，控制器不会一直挂起。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{
    DetailState, FieldInput, FilterForm, InputForm, ListState, Modal, ModalState, StatusState,
    VersionsState,
};
