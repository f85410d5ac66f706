//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! 接收 Message，修改 Model。
//! 需要后端参与的操作（导航、工具栏操作、最近访问）不在这里执行，
//! 而是返回 Command，由 app.rs 交给 CoreService。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;        // UiEvent → Model
//!         mod content;        // 列表 / 详情
//!         mod modal;          // 弹窗
//!         mod navigation;     // 路由导航
//!
//!
//!     pub fn update(app: &mut App, msg: AppMessage) -> Option<Command>
//!     pub fn apply_backend(app: &mut App, event: UiEvent, now: Instant)
//!

mod backend;
mod content;
mod modal;
mod navigation;

use crate::message::{AppMessage, Command};
use crate::model::App;

pub use backend::apply as apply_backend;

/// 处理一条消息，返回需要后端执行的命令
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle(app.detail.open);
            }
            None
        }

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Action(action) => {
            if app.toolbar.is_enabled(action) {
                app.status.clear();
                Some(Command::Dispatch(action))
            } else {
                app.status
                    .set_message(format!("{} is not available here", action.label()));
                None
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::ClearStatus => {
            app.status.clear();
            None
        }

        AppMessage::Noop => None,
    }
}

#[cfg(test)]
mod tests {
    use securities_core::types::{ActionId, Toolbar};

    use super::*;

    #[test]
    fn disabled_actions_are_not_dispatched() {
        let mut app = App::new();
        assert_eq!(update(&mut app, AppMessage::Action(ActionId::Delete)), None);
        assert!(app.status.message.is_some());

        app.toolbar = Toolbar::active(true);
        assert_eq!(
            update(&mut app, AppMessage::Action(ActionId::Delete)),
            Some(Command::Dispatch(ActionId::Delete))
        );
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
