//! 类型定义模块

mod detail;
mod dialog;
mod route;
mod search;
mod toolbar;
mod view;

pub use detail::{
    DetailPanel, HistoryEntry, IdentifierRow, Notification, RenderedTemplate, UnderlyingLink,
};
pub use dialog::{ConfirmDialog, DialogField, DialogValues, InputDialog};
pub use route::{HashEdit, Route, RouteArgs, RuleKind};
pub use search::{ColumnDef, ColumnFilter, SearchQuery, TypeColumn};
pub use toolbar::{ActionId, Toolbar, ToolbarItem};
pub use view::{
    DetailRequest, FilterState, Region, RegionState, RenderPlan, ToolbarVariant, ViewState,
};

// Re-export provider 库的公共类型
pub use securities_provider::{
    CreateSecuritiesRequest, GetSecurityRequest, SchemeType, SecurityMeta, SecurityRecord,
    SecuritySummary, TemplateData, object_id_of,
};
