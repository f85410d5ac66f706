//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 工具栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(1), // 工具栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    components::toolbar::render(&app.toolbar, frame, main_layout[1]);
    render_content(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏：应用名与当前路由
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" Securities "),
        Span::styled(format!(" {}", app.route), Style::default().fg(c.on_accent)),
    ]))
    .style(Style::default().bg(c.accent).fg(c.on_accent));
    frame.render_widget(title, area);
}

/// 列表始终显示，详情区域打开时在右侧分栏
fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    if !app.detail.open {
        components::list::render(app, frame, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // 列表
            Constraint::Percentage(65), // 详情
        ])
        .split(area);

    components::list::render(app, frame, columns[0]);

    let (detail_area, versions_area) = components::detail::split(columns[1], app.versions.open);
    components::detail::render(app, frame, detail_area);
    if let Some(versions_area) = versions_area {
        components::detail::render_versions(app, frame, versions_area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use securities_core::types::{
        DetailPanel, IdentifierRow, RegionState, SecuritySummary, UnderlyingLink,
    };

    use super::*;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn list_view_shows_rows_and_route() {
        let mut app = App::new();
        app.route = "#/securities".to_string();
        app.list.set_rows(
            vec![SecuritySummary {
                id: "A1".to_string(),
                name: "ACME Corp".to_string(),
                security_type: "EQUITY".to_string(),
            }],
            1,
        );

        let screen = rendered(&app);

        assert!(screen.contains("#/securities"));
        assert!(screen.contains("ACME Corp"));
        assert!(!screen.contains("Identifiers"));
    }

    #[test]
    fn detail_view_shows_banner_and_underlying() {
        let mut app = App::new();
        app.detail.set_region(RegionState::Open);
        app.detail.show(DetailPanel {
            id: "A1".to_string(),
            version: None,
            name: "ACME Corp".to_string(),
            security_type: "EQUITY".to_string(),
            header: "ACME Corp".to_string(),
            content: "Exchange: XNYS".to_string(),
            deleted_banner: Some(DetailPanel::DELETED_BANNER.to_string()),
            identifiers: vec![IdentifierRow::new("ISIN", "US0000000001")],
            underlying: Some(UnderlyingLink {
                href: "#/securities/EQ9".to_string(),
                text: "EQ9".to_string(),
            }),
            timeseries: None,
        });

        let screen = rendered(&app);

        assert!(screen.contains(DetailPanel::DELETED_BANNER));
        assert!(screen.contains("US0000000001"));
        assert!(screen.contains("Underlying: EQ9"));
    }
}
