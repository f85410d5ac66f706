//! 证券列表组件

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染证券列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let list = &app.list;

    let title = match (&app.filter.name, &app.filter.security_type) {
        (None, None) => format!(" Securities ({}) ", list.total),
        (name, ty) => format!(
            " Securities ({}) [{}{}] ",
            list.total,
            name.as_deref().map(|n| format!("name: {n} ")).unwrap_or_default(),
            ty.as_deref().map(|t| format!("type: {t}")).unwrap_or_default(),
        ),
    };
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_list()));

    if list.rows.is_empty() {
        let text = if list.loading {
            "Loading securities..."
        } else {
            "No securities match the current filter"
        };
        let paragraph = Paragraph::new(Line::styled(text, Style::default().fg(c.muted))).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    // 列宽按列定义的比例分配
    let widths: Vec<Constraint> = if list.columns.is_empty() {
        vec![Constraint::Percentage(25), Constraint::Percentage(75)]
    } else {
        let total: u32 = list.columns.iter().map(|col| u32::from(col.width)).sum();
        list.columns
            .iter()
            .map(|col| Constraint::Ratio(u32::from(col.width), total.max(1)))
            .collect()
    };

    let header = Row::new(["Type", "Name"].map(|h| Cell::from(h).style(Styles::title())));
    let rows = list.rows.iter().map(|row| {
        Row::new([
            Cell::from(row.security_type.as_str()).style(Style::default().fg(c.muted)),
            Cell::from(row.name.as_str()).style(Style::default().fg(c.text)),
        ])
    });

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(list.selected));
    frame.render_stateful_widget(table, area, &mut state);
}
