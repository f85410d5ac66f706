//! 弹窗状态

use securities_core::types::{ConfirmDialog, DialogField, DialogValues, HistoryEntry, InputDialog};
use tokio::sync::oneshot;

/// 表单字段的输入值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// `(value, label)` 选项及选中索引
    Select {
        options: Vec<(String, String)>,
        index: usize,
    },
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub input: FieldInput,
}

/// 由 [`InputDialog`] 生成的可编辑表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputForm {
    pub title: String,
    pub confirm_label: String,
    pub fields: Vec<FormField>,
    /// 当前焦点字段
    pub focus: usize,
}

impl InputForm {
    pub fn from_dialog(dialog: InputDialog) -> Self {
        let fields = dialog
            .fields
            .into_iter()
            .map(|field| match field {
                DialogField::Select {
                    name,
                    label,
                    options,
                } => FormField {
                    name,
                    label,
                    input: FieldInput::Select { options, index: 0 },
                },
                DialogField::TextArea { name, label } => FormField {
                    name,
                    label,
                    input: FieldInput::Text(String::new()),
                },
            })
            .collect();
        Self {
            title: dialog.title,
            confirm_label: dialog.confirm_label,
            fields,
            focus: 0,
        }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    fn focused(&mut self) -> Option<&mut FieldInput> {
        self.fields.get_mut(self.focus).map(|f| &mut f.input)
    }

    /// 焦点是否在文本字段上
    pub fn editing_text(&self) -> bool {
        matches!(
            self.fields.get(self.focus).map(|f| &f.input),
            Some(FieldInput::Text(_))
        )
    }

    pub fn input(&mut self, c: char) {
        if let Some(FieldInput::Text(text)) = self.focused() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(FieldInput::Text(text)) = self.focused() {
            text.pop();
        }
    }

    pub fn prev_option(&mut self) {
        if let Some(FieldInput::Select { index, .. }) = self.focused() {
            *index = index.saturating_sub(1);
        }
    }

    pub fn next_option(&mut self) {
        if let Some(FieldInput::Select { options, index }) = self.focused() {
            if *index + 1 < options.len() {
                *index += 1;
            }
        }
    }

    /// 提交的值，按字段名索引
    pub fn values(&self) -> DialogValues {
        let mut values = DialogValues::new();
        for field in &self.fields {
            match &field.input {
                FieldInput::Select { options, index } => {
                    if let Some((value, _)) = options.get(*index) {
                        values.insert(field.name.clone(), value.clone());
                    }
                }
                FieldInput::Text(text) => values.insert(field.name.clone(), text.clone()),
            }
        }
        values
    }
}

/// 列表过滤表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    pub name: String,
    /// 可选类型；索引 0 表示不过滤
    pub types: Vec<String>,
    pub type_index: usize,
    /// 0 = 名称, 1 = 类型
    pub focus: usize,
}

impl FilterForm {
    pub fn new(name: &str, types: Vec<String>, current_type: Option<&str>) -> Self {
        let type_index = current_type
            .and_then(|t| types.iter().position(|x| x == t))
            .map_or(0, |i| i + 1);
        Self {
            name: name.to_string(),
            types,
            type_index,
            focus: 0,
        }
    }

    pub fn selected_type(&self) -> &str {
        self.type_index
            .checked_sub(1)
            .and_then(|i| self.types.get(i))
            .map_or("", String::as_str)
    }

    pub fn prev_type(&mut self) {
        self.type_index = self.type_index.saturating_sub(1);
    }

    pub fn next_type(&mut self) {
        if self.type_index < self.types.len() {
            self.type_index += 1;
        }
    }
}

/// 弹窗类型
#[derive(Debug)]
pub enum Modal {
    /// 控制器请求的输入表单
    Input {
        form: InputForm,
        reply: oneshot::Sender<Option<DialogValues>>,
    },
    /// 控制器请求的确认
    Confirm {
        dialog: ConfirmDialog,
        /// 焦点是否在确认按钮上
        confirm_focused: bool,
        reply: oneshot::Sender<bool>,
    },
    /// 错误提示
    Error { title: String, message: String },
    /// 帮助
    Help,
    /// 最近访问
    Recent {
        entries: Vec<HistoryEntry>,
        selected: usize,
    },
    /// 列表过滤
    Filter(FilterForm),
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗；被替换的对话框按取消回答
    pub fn show(&mut self, modal: Modal) {
        if let Some(previous) = self.active.replace(modal) {
            cancel(previous);
        }
    }

    /// 关闭弹窗，等待中的对话框按取消回答
    pub fn close(&mut self) {
        if let Some(modal) = self.active.take() {
            cancel(modal);
        }
    }

    /// 取出弹窗，由调用方处理回答
    pub fn take(&mut self) -> Option<Modal> {
        self.active.take()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_input(&mut self, dialog: InputDialog, reply: oneshot::Sender<Option<DialogValues>>) {
        self.show(Modal::Input {
            form: InputForm::from_dialog(dialog),
            reply,
        });
    }

    pub fn show_confirm(&mut self, dialog: ConfirmDialog, reply: oneshot::Sender<bool>) {
        self.show(Modal::Confirm {
            dialog,
            confirm_focused: false,
            reply,
        });
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    pub fn show_recent(&mut self, entries: Vec<HistoryEntry>) {
        self.show(Modal::Recent {
            entries,
            selected: 0,
        });
    }

    pub fn show_filter(&mut self, form: FilterForm) {
        self.show(Modal::Filter(form));
    }
}

fn cancel(modal: Modal) {
    // 控制器可能已不再等待，发送失败可忽略
    match modal {
        Modal::Input { reply, .. } => {
            let _ = reply.send(None);
        }
        Modal::Confirm { reply, .. } => {
            let _ = reply.send(false);
        }
        _ => {}
    }
}
