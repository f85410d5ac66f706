//! 事件处理器
//!
//! 将 crossterm 事件翻译为 AppMessage。
//! 弹窗打开时，所有按键都交给弹窗。

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use securities_core::types::ActionId;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal};

/// 轮询事件，最长等待 timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal).map_or(AppMessage::Noop, AppMessage::Modal);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    // '?' 在多数终端带 SHIFT
    if key.code == DefaultKeymap::HELP.code {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // Esc：先关版本区域，再回到列表，最后清除状态栏
    if DefaultKeymap::BACK.matches(&key) {
        return if app.versions.open {
            AppMessage::Navigation(NavigationMessage::CloseVersions)
        } else if app.detail.open {
            AppMessage::Navigation(NavigationMessage::BackToList)
        } else {
            AppMessage::ClearStatus
        };
    }

    if DefaultKeymap::ACTION_NEW.matches(&key) {
        return AppMessage::Action(ActionId::New);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Action(ActionId::Delete);
    }
    if DefaultKeymap::ACTION_VERSIONS.matches(&key) {
        return AppMessage::Action(ActionId::Versions);
    }

    if DefaultKeymap::FILTER.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::OpenFilter);
    }
    if DefaultKeymap::RECENT.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::ShowRecent);
    }
    if DefaultKeymap::UNDERLYING.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::FollowUnderlying);
    }

    if app.focus.is_list() {
        handle_list_keys(key)
    } else {
        handle_detail_keys(key)
    }
}

fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Open),
        _ => AppMessage::Noop,
    }
}

fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> Option<ModalMessage> {
    if DefaultKeymap::BACK.matches(&key) {
        return Some(ModalMessage::Close);
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return Some(ModalMessage::Confirm);
    }

    let editing_text = match modal {
        Modal::Input { form, .. } => form.editing_text(),
        Modal::Filter(form) => form.focus == 0,
        _ => false,
    };

    let msg = match key.code {
        // 文本框中 Enter 换行，其余位置提交
        KeyCode::Enter if editing_text && matches!(modal, Modal::Input { .. }) => {
            ModalMessage::Newline
        }
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Tab => ModalMessage::NextField,
        KeyCode::BackTab => ModalMessage::PrevField,
        KeyCode::Backspace => ModalMessage::Backspace,
        KeyCode::Left => ModalMessage::PrevOption,
        KeyCode::Right => ModalMessage::NextOption,
        KeyCode::Up => ModalMessage::SelectPrevious,
        KeyCode::Down => ModalMessage::SelectNext,
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            if editing_text || matches!(modal, Modal::Confirm { .. }) {
                ModalMessage::Input(c)
            } else {
                match c {
                    'k' => ModalMessage::SelectPrevious,
                    'j' => ModalMessage::SelectNext,
                    _ => ModalMessage::Input(c),
                }
            }
        }
        _ => return None,
    };
    Some(msg)
}

#[cfg(test)]
mod tests {
    use securities_core::types::{InputDialog, RegionState};
    use tokio::sync::oneshot;

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn alt(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT))
    }

    #[test]
    fn toolbar_shortcuts() {
        let app = App::new();
        assert_eq!(handle_event(alt('a'), &app), AppMessage::Action(ActionId::New));
        assert_eq!(handle_event(alt('d'), &app), AppMessage::Action(ActionId::Delete));
        assert_eq!(handle_event(alt('v'), &app), AppMessage::Action(ActionId::Versions));
    }

    #[test]
    fn escape_unwinds_versions_then_detail() {
        let mut app = App::new();
        app.detail.set_region(RegionState::Open);
        app.versions.set_region(RegionState::Open);
        assert_eq!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Navigation(NavigationMessage::CloseVersions)
        );

        app.versions.set_region(RegionState::Closed);
        assert_eq!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Navigation(NavigationMessage::BackToList)
        );
    }

    #[test]
    fn list_keys_depend_on_focus() {
        let mut app = App::new();
        assert_eq!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Content(ContentMessage::SelectNext)
        );

        app.focus = crate::model::FocusPanel::Detail;
        assert_eq!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Content(ContentMessage::ScrollDown)
        );
    }

    #[test]
    fn modal_captures_keys() {
        let mut app = App::new();
        let (tx, _rx) = oneshot::channel();
        app.modal.show_input(InputDialog::add_securities(), tx);

        // 焦点在选择框：q 不退出
        assert_eq!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Modal(ModalMessage::Input('q'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
    }
}
