//! View state transition

use crate::types::{
    DetailRequest, FilterState, RegionState, RenderPlan, RouteArgs, RuleKind, ToolbarVariant,
    ViewState,
};

/// Computes the render plan for a route, given the state the view is leaving.
pub fn plan(previous: Option<ViewState>, rule: RuleKind, args: &RouteArgs) -> RenderPlan {
    let mut state = ViewState::from_args(args);
    if state == ViewState::List && rule == RuleKind::LoadFilter {
        state = ViewState::ListFiltered;
    }

    let detail_open = state.is_detail();
    let versions_open = state == ViewState::DetailVersioned;

    let detail = args
        .get("id")
        .filter(|_| detail_open)
        .map(|id| DetailRequest {
            id: id.to_string(),
            version: args
                .get("version")
                .filter(|v| *v != "*")
                .map(str::to_string),
            show_versions: versions_open,
        });

    RenderPlan {
        state,
        previous,
        detail_region: RegionState::from_open(detail_open),
        versions_region: RegionState::from_open(versions_open),
        toolbar: if detail_open {
            ToolbarVariant::Active
        } else {
            ToolbarVariant::Default
        },
        detail,
        filter: FilterState::from_args(args),
        leaving_detail: previous.is_some_and(ViewState::is_detail) && !detail_open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_without_version_is_detail() {
        let args = RouteArgs::new().with("id", "foo123");
        let plan = plan(None, RuleKind::LoadItem, &args);
        assert_eq!(plan.state, ViewState::Detail);
        assert_eq!(plan.detail_region, RegionState::Open);
        assert_eq!(plan.versions_region, RegionState::Closed);
        assert_eq!(plan.toolbar, ToolbarVariant::Active);
        assert_eq!(
            plan.detail,
            Some(DetailRequest {
                id: "foo123".to_string(),
                version: None,
                show_versions: false,
            })
        );
    }

    #[test]
    fn wildcard_version_opens_versions_without_pinning() {
        let args = RouteArgs::new().with("id", "foo123").with("version", "*");
        let plan = plan(Some(ViewState::Detail), RuleKind::LoadItem, &args);
        assert_eq!(plan.state, ViewState::DetailVersioned);
        assert_eq!(plan.versions_region, RegionState::Open);
        let request = plan.detail.unwrap();
        assert_eq!(request.version, None);
        assert!(request.show_versions);
    }

    #[test]
    fn pinned_version_is_passed_through() {
        let args = RouteArgs::new().with("id", "foo123").with("version", "7");
        let plan = plan(None, RuleKind::LoadItem, &args);
        assert_eq!(plan.detail.unwrap().version.as_deref(), Some("7"));
    }

    #[test]
    fn list_routes_close_everything() {
        let args = RouteArgs::new().with("name", "ACME");
        let plan = plan(Some(ViewState::DetailVersioned), RuleKind::Load, &args);
        assert_eq!(plan.state, ViewState::ListFiltered);
        assert_eq!(plan.detail_region, RegionState::Closed);
        assert_eq!(plan.versions_region, RegionState::Closed);
        assert_eq!(plan.toolbar, ToolbarVariant::Default);
        assert!(plan.detail.is_none());
        assert!(plan.leaving_detail);
        assert_eq!(plan.filter.name.as_deref(), Some("ACME"));
    }

    #[test]
    fn list_to_list_is_not_leaving_detail() {
        let plan = plan(Some(ViewState::List), RuleKind::Load, &RouteArgs::new());
        assert_eq!(plan.state, ViewState::List);
        assert!(!plan.leaving_detail);
    }

    #[test]
    fn filter_rule_without_args_is_filtered() {
        let plan = plan(None, RuleKind::LoadFilter, &RouteArgs::new());
        assert_eq!(plan.state, ViewState::ListFiltered);
    }
}
