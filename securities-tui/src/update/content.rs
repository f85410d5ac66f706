//! 内容面板更新逻辑

use crate::message::{Command, ContentMessage};
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        ContentMessage::SelectPrevious => app.list.select_previous(),
        ContentMessage::SelectNext => app.list.select_next(),
        ContentMessage::SelectFirst => app.list.select_first(),
        ContentMessage::SelectLast => app.list.select_last(),

        ContentMessage::Open => {
            let id = app.list.selected_row()?.id.clone();
            app.status.clear();
            return Some(Command::Open(id));
        }

        ContentMessage::ScrollUp => app.detail.scroll_up(),
        ContentMessage::ScrollDown => app.detail.scroll_down(),
    }
    None
}
