//! View state and render plan types

use serde::{Deserialize, Serialize};

use super::route::RouteArgs;

/// The four states of the view controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewState {
    List,
    ListFiltered,
    Detail,
    DetailVersioned,
}

impl ViewState {
    /// Derives the state from route arguments alone.
    pub fn from_args(args: &RouteArgs) -> Self {
        if args.contains("id") {
            if args.contains("version") {
                Self::DetailVersioned
            } else {
                Self::Detail
            }
        } else if args.contains("filter") || args.contains("name") || args.contains("type") {
            Self::ListFiltered
        } else {
            Self::List
        }
    }

    pub fn is_detail(self) -> bool {
        matches!(self, Self::Detail | Self::DetailVersioned)
    }
}

/// Named layout regions owned by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Detail,
    Versions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionState {
    Open,
    Closed,
}

impl RegionState {
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarVariant {
    Default,
    Active,
}

/// What the detail loader is asked to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRequest {
    pub id: String,
    /// Pinned version; `None` for latest, including the `*` wildcard.
    pub version: Option<String>,
    /// Whether the versions region is open and its history should load.
    pub show_versions: bool,
}

/// List filters taken from the route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub name: Option<String>,
    pub security_type: Option<String>,
}

impl FilterState {
    pub fn from_args(args: &RouteArgs) -> Self {
        Self {
            name: args.get("name").map(str::to_string),
            security_type: args.get("type").map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.security_type.is_none()
    }
}

/// Declarative outcome of one state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub state: ViewState,
    pub previous: Option<ViewState>,
    pub detail_region: RegionState,
    pub versions_region: RegionState,
    pub toolbar: ToolbarVariant,
    pub detail: Option<DetailRequest>,
    pub filter: FilterState,
    /// Leaving a detail state: detail content and its bindings are cleared.
    pub leaving_detail: bool,
}
