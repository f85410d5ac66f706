//! 后端事件更新逻辑
//!
//! 控制器的输出（UiEvent）在主循环中取出后在此写入 Model。

use std::time::Instant;

use securities_core::types::Region;

use crate::backend::UiEvent;
use crate::model::{App, FocusPanel};

/// 应用一条后端事件
pub fn apply(app: &mut App, event: UiEvent, now: Instant) {
    match event {
        UiEvent::Region(Region::Detail, state) => {
            app.detail.set_region(state);
            if !app.detail.open {
                app.focus = FocusPanel::List;
            }
        }
        UiEvent::Region(Region::Versions, state) => app.versions.set_region(state),
        UiEvent::Toolbar(toolbar) => app.toolbar = toolbar,
        UiEvent::Detail(panel) => app.detail.show(panel),
        UiEvent::ClearDetail => app.detail.clear(),
        UiEvent::Notify(notification) => app.status.notify(notification, now),
        UiEvent::Error(message) => app.status.set_error(message),
        UiEvent::Resize => app.needs_resize = true,

        UiEvent::Columns(columns) => app.list.columns = columns,
        UiEvent::Rows { rows, total } => app.list.set_rows(rows, total),

        UiEvent::Versions(id) => app.versions.id = Some(id),
        UiEvent::Timeseries { slot, hts_id } => {
            log::debug!("Timeseries {hts_id} attached to {slot}");
            app.detail.timeseries = Some(hts_id);
        }

        UiEvent::Input(dialog, reply) => app.modal.show_input(dialog, reply),
        UiEvent::Confirm(dialog, reply) => app.modal.show_confirm(dialog, reply),
        UiEvent::ErrorDialog { title, message } => app.modal.show_error(&title, &message),

        UiEvent::Route { href, filter } => {
            app.route = href;
            app.filter = filter;
        }
        UiEvent::Recent(entries) => {
            if entries.is_empty() {
                app.status.set_message("No recently viewed securities");
            } else {
                app.modal.show_recent(entries);
            }
        }
    }
}
