//! Toolbar model

use serde::{Deserialize, Serialize};

/// Named user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionId {
    New,
    Save,
    SaveAs,
    Delete,
    Versions,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Save => "save",
            Self::SaveAs => "saveas",
            Self::Delete => "delete",
            Self::Versions => "versions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Save => "Save",
            Self::SaveAs => "Save as",
            Self::Delete => "Delete",
            Self::Versions => "Versions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarItem {
    pub action: ActionId,
    pub enabled: bool,
    /// Draw a divider before this item.
    pub divider: bool,
}

impl ToolbarItem {
    fn enabled(action: ActionId) -> Self {
        Self {
            action,
            enabled: true,
            divider: false,
        }
    }

    fn disabled(action: ActionId) -> Self {
        Self {
            action,
            enabled: false,
            divider: false,
        }
    }
}

/// One toolbar variant, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolbar {
    pub items: Vec<ToolbarItem>,
}

impl Toolbar {
    /// List view: only `new` is usable.
    pub fn default_variant() -> Self {
        Self {
            items: vec![
                ToolbarItem::enabled(ActionId::New),
                ToolbarItem::disabled(ActionId::Save),
                ToolbarItem::disabled(ActionId::SaveAs),
                ToolbarItem::disabled(ActionId::Delete),
            ],
        }
    }

    /// Detail view. `delete_enabled` is false for deleted records.
    pub fn active(delete_enabled: bool) -> Self {
        Self {
            items: vec![
                ToolbarItem::enabled(ActionId::New),
                ToolbarItem::disabled(ActionId::Save),
                ToolbarItem::disabled(ActionId::SaveAs),
                ToolbarItem {
                    action: ActionId::Delete,
                    enabled: delete_enabled,
                    divider: true,
                },
                ToolbarItem::enabled(ActionId::Versions),
            ],
        }
    }

    pub fn is_enabled(&self, action: ActionId) -> bool {
        self.items
            .iter()
            .any(|item| item.action == action && item.enabled)
    }
}
