//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use securities_core::types::{ConfirmDialog, HistoryEntry};

use crate::event::HELP_LINES;
use crate::model::{App, FieldInput, FilterForm, InputForm, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Input { form, .. } => render_input(frame, form),
        Modal::Confirm {
            dialog,
            confirm_focused,
            ..
        } => render_confirm(frame, dialog, *confirm_focused),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
        Modal::Recent { entries, selected } => render_recent(frame, entries, *selected),
        Modal::Filter(form) => render_filter(frame, form),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并绘制边框，返回内部区域
fn frame_modal(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn button_style(focused: bool, color: Color) -> Style {
    if focused {
        Style::default().fg(Color::Black).bg(color)
    } else {
        Style::default().fg(color)
    }
}

/// 渲染控制器请求的输入表单
fn render_input(frame: &mut Frame, form: &InputForm) {
    let text_lines: u16 = form
        .fields
        .iter()
        .map(|f| match &f.input {
            FieldInput::Text(text) => u16::try_from(text.lines().count().max(1) + 1).unwrap_or(10),
            FieldInput::Select { .. } => 1,
        })
        .sum();
    let height = 4 + text_lines + 2 * u16::try_from(form.fields.len()).unwrap_or(2) + 2;
    let area = centered_rect(60, height, frame.area());
    let inner = frame_modal(frame, area, &form.title, Color::Cyan);

    let mut lines = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        lines.push(Line::styled(field.label.clone(), label_style(focused)));
        match &field.input {
            FieldInput::Select { options, index } => {
                let label = options.get(*index).map_or("", |(_, label)| label.as_str());
                lines.push(Line::from(vec![
                    Span::styled("  ◀ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(label.to_string(), Style::default().fg(Color::White)),
                    Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
                ]));
            }
            FieldInput::Text(text) => {
                let text_lines: Vec<&str> = text.split('\n').collect();
                let last = text_lines.len() - 1;
                for (n, line) in text_lines.into_iter().enumerate() {
                    let cursor = if focused && n == last { "▏" } else { "" };
                    lines.push(Line::styled(
                        format!("  {line}{cursor}"),
                        Style::default().fg(Color::White),
                    ));
                }
            }
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", form.confirm_label), button_style(true, Color::Green)),
        Span::styled(
            "  Ctrl+s submit · Tab next field · Esc cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染确认弹窗
fn render_confirm(frame: &mut Frame, dialog: &ConfirmDialog, confirm_focused: bool) {
    let area = centered_rect(50, 9, frame.area());
    let inner = frame_modal(frame, area, &dialog.title, Color::Red);

    let lines = vec![
        Line::from(""),
        Line::styled(dialog.message.clone(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", button_style(!confirm_focused, Color::White)),
            Span::raw("    "),
            Span::styled(
                format!(" {} ", dialog.confirm_label),
                button_style(confirm_focused, Color::Red),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 8, frame.area());
    let inner = frame_modal(frame, area, title, Color::Red);

    let lines = vec![
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            "Press Esc or Enter to close",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_help(frame: &mut Frame) {
    let height = u16::try_from(HELP_LINES.len()).unwrap_or(12) + 4;
    let area = centered_rect(50, height, frame.area());
    let inner = frame_modal(frame, area, "Keyboard Shortcuts", Color::Cyan);

    let mut lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("  {key:<12}"),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Press Esc to close",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_recent(frame: &mut Frame, entries: &[HistoryEntry], selected: usize) {
    let height = u16::try_from(entries.len()).unwrap_or(10) + 4;
    let area = centered_rect(60, height, frame.area());
    let inner = frame_modal(frame, area, "Recently Viewed", Color::Cyan);

    let mut lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!(" {} ", entry.name), style),
                Span::styled(
                    format!("  {}", entry.visited_at.format("%Y-%m-%d %H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        " Enter open · Esc close",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_filter(frame: &mut Frame, form: &FilterForm) {
    let area = centered_rect(50, 9, frame.area());
    let inner = frame_modal(frame, area, "Filter Securities", Color::Cyan);

    let type_label = if form.type_index == 0 {
        "Any"
    } else {
        form.selected_type()
    };
    let cursor = if form.focus == 0 { "▏" } else { "" };
    let lines = vec![
        Line::styled("Name", label_style(form.focus == 0)),
        Line::styled(
            format!("  {}{cursor}", form.name),
            Style::default().fg(Color::White),
        ),
        Line::styled("Type", label_style(form.focus == 1)),
        Line::from(vec![
            Span::styled("  ◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(type_label.to_string(), Style::default().fg(Color::White)),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::styled(
            "Enter apply · Tab next field · Esc cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
