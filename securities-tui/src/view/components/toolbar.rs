//! 工具栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use securities_core::types::{ActionId, Toolbar};

use crate::view::theme::Styles;

/// 工具栏项对应的快捷键
fn shortcut(action: ActionId) -> Option<&'static str> {
    match action {
        ActionId::New => Some("Alt+a"),
        ActionId::Delete => Some("Alt+d"),
        ActionId::Versions => Some("Alt+v"),
        ActionId::Save | ActionId::SaveAs => None,
    }
}

pub fn render(toolbar: &Toolbar, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for item in &toolbar.items {
        if item.divider {
            spans.push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
        }
        if item.enabled {
            if let Some(key) = shortcut(item.action) {
                spans.push(Span::styled(key, Styles::hint_key()));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(item.action.label(), Styles::hint_desc()));
        } else {
            spans.push(Span::styled(item.action.label(), Styles::disabled()));
        }
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
