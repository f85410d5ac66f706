//! 快捷键配置
//!
//! 定义快捷键映射，帮助弹窗也从这里读取说明

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 列表
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 路由
    pub const FILTER: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const RECENT: KeyBinding = KeyBinding::key(KeyCode::Char('h'));
    pub const UNDERLYING: KeyBinding = KeyBinding::key(KeyCode::Char('u'));

    // 工具栏
    pub const ACTION_NEW: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const ACTION_VERSIONS: KeyBinding = KeyBinding::alt(KeyCode::Char('v'));

    // 弹窗
    pub const SUBMIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('s'));
}

/// 帮助弹窗中显示的快捷键说明
pub const HELP_LINES: &[(&str, &str)] = &[
    ("↑/↓ j/k", "Select security"),
    ("Enter", "Open selected security"),
    ("Tab", "Switch list / detail"),
    ("/", "Filter by name and type"),
    ("h", "Recently viewed"),
    ("u", "Open underlying security"),
    ("Alt+a", "Add securities"),
    ("Alt+d", "Delete security"),
    ("Alt+v", "Toggle versions"),
    ("Esc", "Close versions / back to list"),
    ("q / Ctrl+c", "Quit"),
];
