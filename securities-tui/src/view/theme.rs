//! 配色
//!
//! 主题在启动时从配置读取一次，之后各组件通过 `colors()` 取当前配色。

use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

static LIGHT: AtomicBool = AtomicBool::new(false);

/// 配置文件中的 `theme` 字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                text: Color::Rgb(220, 220, 215),
                muted: Color::Rgb(125, 130, 135),
                border: Color::Rgb(70, 74, 80),
                border_focused: Color::Rgb(86, 156, 214),
                accent: Color::Rgb(86, 156, 214),
                on_accent: Color::Rgb(250, 250, 250),
                selection: Color::Rgb(45, 75, 110),
                version: Color::Rgb(220, 170, 90),
                deleted: Color::Rgb(190, 60, 60),
                timeseries: Color::Rgb(110, 190, 140),
            },
            Self::Light => Palette {
                text: Color::Rgb(40, 42, 46),
                muted: Color::Rgb(120, 120, 120),
                border: Color::Rgb(200, 200, 200),
                border_focused: Color::Rgb(20, 100, 190),
                accent: Color::Rgb(20, 100, 190),
                on_accent: Color::Rgb(255, 255, 255),
                selection: Color::Rgb(200, 225, 250),
                version: Color::Rgb(160, 110, 0),
                deleted: Color::Rgb(200, 40, 50),
                timeseries: Color::Rgb(30, 130, 70),
            },
        }
    }
}

pub fn set_theme(theme: Theme) {
    LIGHT.store(theme == Theme::Light, Ordering::Relaxed);
}

pub fn colors() -> Palette {
    let theme = if LIGHT.load(Ordering::Relaxed) {
        Theme::Light
    } else {
        Theme::Dark
    };
    theme.palette()
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    /// 标题栏、状态栏底色与标的链接
    pub accent: Color,
    /// accent / deleted 底色上的文字
    pub on_accent: Color,
    pub selection: Color,
    /// 历史版本标记
    pub version: Color,
    /// 已删除横幅
    pub deleted: Color,
    pub timeseries: Color,
}

/// 组件共用样式
pub struct Styles;

impl Styles {
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 列表选中行
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selection)
            .fg(c.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().text).add_modifier(Modifier::BOLD)
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.accent).fg(c.on_accent)
    }

    /// 工具栏与状态栏中的按键
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().version)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 工具栏中不可用的操作
    pub fn disabled() -> Style {
        Style::default()
            .fg(colors().muted)
            .add_modifier(Modifier::DIM)
    }
}
