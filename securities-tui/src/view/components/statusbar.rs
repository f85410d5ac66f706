//! 底部状态栏组件

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 提示优先于错误，错误优先于普通消息
    let message = app
        .status
        .notification_text(Instant::now())
        .map(|text| (text, Color::White))
        .or_else(|| app.status.error.as_deref().map(|e| (e, Color::LightRed)))
        .or_else(|| app.status.message.as_deref().map(|m| (m, Color::Yellow)));
    if let Some((text, color)) = message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(text.to_string(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.detail.open {
        hints.push(("Tab", "Switch Panels"));
    }

    if app.focus.is_list() {
        hints.push(("↑↓", "Select"));
        hints.push(("Enter", "Open"));
    } else {
        hints.push(("↑↓", "Scroll"));
    }

    hints.push(("/", "Filter"));
    if app.versions.open {
        hints.push(("Esc", "Close Versions"));
    } else if app.detail.open {
        hints.push(("Esc", "Back"));
    }
    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));

    hints
}
