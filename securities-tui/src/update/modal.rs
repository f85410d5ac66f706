//! 弹窗更新逻辑

use crate::message::{Command, ModalMessage};
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    if msg == ModalMessage::Close {
        app.modal.close();
        return None;
    }

    match app.modal.active.as_mut()? {
        Modal::Input { form, .. } => match msg {
            ModalMessage::NextField => form.next_field(),
            ModalMessage::PrevField => form.prev_field(),
            ModalMessage::PrevOption => form.prev_option(),
            ModalMessage::NextOption => form.next_option(),
            ModalMessage::Input(c) => form.input(c),
            ModalMessage::Newline => form.input('\n'),
            ModalMessage::Backspace => form.backspace(),
            ModalMessage::Confirm => submit(app),
            _ => {}
        },

        Modal::Confirm {
            confirm_focused, ..
        } => match msg {
            ModalMessage::PrevOption | ModalMessage::NextOption | ModalMessage::NextField => {
                *confirm_focused = !*confirm_focused;
            }
            ModalMessage::Input('y' | 'Y') => {
                *confirm_focused = true;
                submit(app);
            }
            ModalMessage::Input('n' | 'N') => app.modal.close(),
            ModalMessage::Confirm => submit(app),
            _ => {}
        },

        Modal::Recent { entries, selected } => match msg {
            ModalMessage::SelectPrevious => *selected = selected.saturating_sub(1),
            ModalMessage::SelectNext => {
                if *selected + 1 < entries.len() {
                    *selected += 1;
                }
            }
            ModalMessage::Confirm => {
                let href = entries.get(*selected).map(|e| e.value.clone());
                app.modal.close();
                return href.map(Command::Go);
            }
            _ => {}
        },

        Modal::Filter(form) => match msg {
            ModalMessage::NextField | ModalMessage::PrevField => form.focus = 1 - form.focus,
            ModalMessage::Input(c) if form.focus == 0 => form.name.push(c),
            ModalMessage::Backspace if form.focus == 0 => {
                form.name.pop();
            }
            ModalMessage::PrevOption | ModalMessage::SelectPrevious => form.prev_type(),
            ModalMessage::NextOption | ModalMessage::SelectNext => form.next_type(),
            ModalMessage::Confirm => {
                let command = Command::Filter {
                    name: form.name.trim().to_string(),
                    security_type: form.selected_type().to_string(),
                };
                app.modal.close();
                return Some(command);
            }
            _ => {}
        },

        Modal::Error { .. } | Modal::Help => {
            if msg == ModalMessage::Confirm {
                app.modal.close();
            }
        }
    }
    None
}

/// 回答控制器等待中的对话框
fn submit(app: &mut App) {
    // 控制器可能已放弃等待（视图已拆除），发送失败可忽略
    match app.modal.take() {
        Some(Modal::Input { form, reply }) => {
            let _ = reply.send(Some(form.values()));
        }
        Some(Modal::Confirm {
            confirm_focused,
            reply,
            ..
        }) => {
            let _ = reply.send(confirm_focused);
        }
        other => app.modal.active = other,
    }
}
