//! src/util/mod.rs
//! Util 层：终端与日志
//!
//!     mod logging;        // 写入 <配置目录>/securities-view.log
//!     mod terminal;       // 原始模式、备用屏幕、panic 恢复
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 生命周期
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     main.rs
//!       │
//!       ├─ init_logging(&config_dir())     终端被占用，日志只能写文件；
//!       │                                  securities-core / provider 的 log 记录
//!       │                                  经 tracing-log 进入同一订阅器
//!       │
//!       ├─ CoreService::start()            路由监听、初始路由（tokio 任务）
//!       │
//!       ├─ init_terminal()                 raw mode + 备用屏幕，安装 panic hook
//!       │     │
//!       │     └─ app::run(...)             同步主循环
//!       │
//!       ├─ restore_terminal()              run 返回错误也要先执行
//!       │
//!       └─ core.shutdown()                 拆除视图：停止监听、清除通知与关闭回调
//!
//!     panic 发生在主循环中时，hook 先退出 raw mode 和备用屏幕，
//!     再把 panic 信息记入日志，终端不会停留在不可用状态。

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
