//! 详情与版本区域组件

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染详情区域
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .title(" Detail ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_detail()));

    let Some(panel) = &app.detail.panel else {
        let paragraph = Paragraph::new(Line::styled("Loading...", Style::default().fg(c.muted)))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = Vec::new();

    // 标题
    lines.push(Line::styled(
        panel.header.clone(),
        Style::default().fg(c.text).add_modifier(Modifier::BOLD),
    ));
    let mut subtitle = vec![Span::styled(
        format!("{} · {}", panel.security_type, panel.id),
        Style::default().fg(c.muted),
    )];
    if let Some(version) = &panel.version {
        subtitle.push(Span::styled(
            format!(" · version {version}"),
            Style::default().fg(c.version),
        ));
    }
    lines.push(Line::from(subtitle));

    if let Some(banner) = &panel.deleted_banner {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!(" {banner} "),
            Style::default().fg(c.on_accent).bg(c.deleted).add_modifier(Modifier::BOLD),
        ));
    }

    lines.push(Line::from(""));
    lines.extend(panel.content.lines().map(|l| Line::raw(l.to_string())));

    // 标识符表
    lines.push(Line::from(""));
    lines.push(Line::styled("Identifiers", Styles::title()));
    let scheme_width = panel
        .identifiers
        .iter()
        .map(|row| row.scheme.chars().count())
        .max()
        .unwrap_or(0);
    for row in &panel.identifiers {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<scheme_width$}  ", row.scheme),
                Style::default().fg(c.muted),
            ),
            Span::styled(row.value.clone(), Style::default().fg(c.text)),
        ]));
    }

    if let Some(link) = &panel.underlying {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Underlying: ", Style::default().fg(c.muted)),
            Span::styled(
                link.text.clone(),
                Style::default()
                    .fg(c.accent)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled("  (u)", Styles::hint_desc()),
        ]));
    }

    if let Some(hts_id) = &app.detail.timeseries {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Time series: ", Style::default().fg(c.muted)),
            Span::styled(hts_id.clone(), Style::default().fg(c.timeseries)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// 渲染版本区域
pub fn render_versions(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .title(" Versions ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let lines = match &app.versions.id {
        Some(id) => vec![
            Line::from(vec![
                Span::styled("History of ", Style::default().fg(c.muted)),
                Span::styled(id.clone(), Style::default().fg(c.text)),
            ]),
            Line::styled("Esc to close", Styles::hint_desc()),
        ],
        None => vec![Line::styled("Loading versions...", Style::default().fg(c.muted))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 详情与版本的纵向划分
pub fn split(area: Rect, versions_open: bool) -> (Rect, Option<Rect>) {
    if !versions_open {
        return (area, None);
    }
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);
    (parts[0], Some(parts[1]))
}
