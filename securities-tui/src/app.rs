//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::List,                        // 当前焦点在哪个面板
//!     route: "",                                      // 由第一条 UiEvent::Route 填入
//!     list / detail / versions: 空,                   // 等待控制器的输出
//!     toolbar: Toolbar::default_variant(),
//!     modal: 无弹窗,
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     while let Some(event) = core.try_recv() {        // 取出视图控制器的全部输出
//!         update::apply_backend(&mut app, event, now)
//!     }
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         if let Some(cmd) = update::update(&mut app , msg) {
//!             execute(core, cmd)                          // 交给 CoreService
//!         }
//!     }
//! }
//!
//! 视图控制器运行在 tokio 任务中，主循环本身是同步的；
//! 100ms 的轮询间隔同时也是后端输出的最大显示延迟。

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::backend::CoreService;
use crate::event;
use crate::message::Command;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, core: &mut CoreService) -> Result<()> {
    loop {
        // 1. 应用后端事件
        while let Some(event) = core.try_recv() {
            update::apply_backend(app, event, Instant::now());
        }
        if app.take_resize() {
            terminal.autoresize()?;
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态，执行命令
            if let Some(command) = update::update(app, msg) {
                execute(core, command);
            }
        }
    }

    Ok(())
}

/// 把 Update 层的命令交给 CoreService
fn execute(core: &CoreService, command: Command) {
    log::debug!("Command {command:?}");
    match command {
        Command::Go(path) => core.go(&path),
        Command::Open(id) => core.open(&id),
        Command::Filter {
            name,
            security_type,
        } => core.filter(&name, &security_type),
        Command::BackToList => core.back_to_list(),
        Command::Dispatch(action) => core.dispatch(action),
        Command::CloseRegion(region) => core.close_region(region),
        Command::LoadRecent => core.load_recent(),
    }
}
