//! Securities TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: UI 状态 (`model/`)
//! - **Message**: 事件消息与命令 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 视图控制器及其协作者 (`backend/`)
//!
//!
//! main.rs
//! Securities TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()  // 读取配置，首次运行写入默认配置
//!     init_logging()              // 文件日志
//!     Runtime::new()              // 视图控制器所在的 tokio 运行时
//!     CoreService::new/start()    // 创建视图并打开初始路由
//!     init_terminal()             // 初始化终端
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!     core.shutdown()             // 拆除视图：停止路由监听、撤销关闭回调
//!
//! }
//!
//!
//! 运行时在整个 main 中保持 enter 状态，
//! 因此同步的主循环也可以通过 CoreService 派生 tokio 任务。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use backend::{config_dir, ConfigService, CoreService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 配置
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;
    if !config_service.path().exists() {
        config_service.save(&config)?;
    }
    view::theme::set_theme(config.theme);

    // 2. 日志
    init_logging(&config_dir())?;
    log::info!(
        "Starting securities view against {}",
        config.rest.base_url
    );

    // 3. 后台运行时与视图控制器
    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let _guard = runtime.enter();
    let mut core = CoreService::new(&config)?;
    core.start();

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, &mut core);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 拆除视图
    runtime.block_on(core.shutdown());
    log::info!("Securities view stopped");

    result
}
