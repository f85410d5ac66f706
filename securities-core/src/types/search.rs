//! Search grid column model

use serde::{Deserialize, Serialize};

use super::view::FilterState;

/// Tri-state of the `type` column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "types", rename_all = "snake_case")]
pub enum TypeColumn {
    #[default]
    Unresolved,
    Loading,
    Resolved(Vec<String>),
}

impl TypeColumn {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnFilter {
    /// Select control; the placeholder entry means "no filter".
    Select {
        placeholder: String,
        options: Vec<String>,
    },
    Text {
        placeholder: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Field (and filter argument) name.
    pub field: String,
    pub width: u16,
    pub filter: ColumnFilter,
}

impl ColumnDef {
    pub fn type_column(types: Vec<String>) -> Self {
        Self {
            field: "type".to_string(),
            width: 100,
            filter: ColumnFilter::Select {
                placeholder: "Type".to_string(),
                options: types,
            },
        }
    }

    pub fn name_column() -> Self {
        Self {
            field: "name".to_string(),
            width: 300,
            filter: ColumnFilter::Text {
                placeholder: "Name".to_string(),
            },
        }
    }
}

/// Full grid load: columns plus the initial filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub page: String,
    pub columns: Vec<ColumnDef>,
    pub filter: FilterState,
}
