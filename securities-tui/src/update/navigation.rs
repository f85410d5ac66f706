//! 导航更新逻辑
//!
//! 这里不直接改写 Model 中的区域状态：
//! 路由交给控制器，区域随后由 UiEvent::Region 更新。

use securities_core::types::Region;

use crate::message::{Command, NavigationMessage};
use crate::model::{App, FilterForm};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Command> {
    match msg {
        NavigationMessage::BackToList => app.detail.open.then_some(Command::BackToList),

        NavigationMessage::CloseVersions => app
            .versions
            .open
            .then_some(Command::CloseRegion(Region::Versions)),

        NavigationMessage::FollowUnderlying => {
            let href = app.detail.panel.as_ref()?.underlying.as_ref()?.href.clone();
            Some(Command::Go(href))
        }

        NavigationMessage::OpenFilter => {
            let form = FilterForm::new(
                app.filter.name.as_deref().unwrap_or_default(),
                app.list.type_options(),
                app.filter.security_type.as_deref(),
            );
            app.modal.show_filter(form);
            None
        }

        NavigationMessage::ShowRecent => Some(Command::LoadRecent),
    }
}

#[cfg(test)]
mod tests {
    use securities_core::types::{ColumnDef, FilterState, RegionState};

    use super::*;
    use crate::model::Modal;

    #[test]
    fn back_and_close_only_when_open() {
        let mut app = App::new();
        assert_eq!(update(&mut app, NavigationMessage::BackToList), None);
        assert_eq!(update(&mut app, NavigationMessage::CloseVersions), None);

        app.detail.set_region(RegionState::Open);
        app.versions.set_region(RegionState::Open);

        assert_eq!(
            update(&mut app, NavigationMessage::BackToList),
            Some(Command::BackToList)
        );
        assert_eq!(
            update(&mut app, NavigationMessage::CloseVersions),
            Some(Command::CloseRegion(Region::Versions))
        );
    }

    #[test]
    fn filter_form_starts_from_route_filter() {
        let mut app = App::new();
        app.list.columns = vec![ColumnDef::type_column(vec![
            "BOND".to_string(),
            "EQUITY".to_string(),
        ])];
        app.filter = FilterState {
            name: Some("acme".to_string()),
            security_type: Some("BOND".to_string()),
        };

        update(&mut app, NavigationMessage::OpenFilter);

        let Some(Modal::Filter(form)) = &app.modal.active else {
            panic!("expected filter form");
        };
        assert_eq!(form.name, "acme");
        assert_eq!(form.selected_type(), "BOND");
    }
}
