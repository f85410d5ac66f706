//! Detail panel types

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Header and body produced by a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTemplate {
    pub header: String,
    pub content: String,
}

/// One row of the identifiers table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierRow {
    pub scheme: String,
    pub value: String,
}

impl IdentifierRow {
    /// Shown when a security has no identifiers; layouts expect at least one row.
    pub fn placeholder() -> Self {
        Self {
            scheme: "No identifiers".to_string(),
            value: String::new(),
        }
    }

    /// Strips a leading `<scheme>-` from the stored value.
    pub fn new(scheme: &str, value: &str) -> Self {
        let display = value
            .strip_prefix(scheme)
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(value);
        Self {
            scheme: scheme.to_string(),
            value: display.to_string(),
        }
    }
}

/// Link to the underlying security, as a route hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderlyingLink {
    pub href: String,
    pub text: String,
}

/// A fully populated detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailPanel {
    pub id: String,
    pub version: Option<String>,
    pub name: String,
    pub security_type: String,
    pub header: String,
    pub content: String,
    /// Deletion banner text, for deleted securities.
    pub deleted_banner: Option<String>,
    /// Never empty.
    pub identifiers: Vec<IdentifierRow>,
    pub underlying: Option<UnderlyingLink>,
    /// Time-series id the gadget was attached for.
    pub timeseries: Option<String>,
}

impl DetailPanel {
    pub const DELETED_BANNER: &'static str = "This security has been deleted";

    pub fn is_deleted(&self) -> bool {
        self.deleted_banner.is_some()
    }
}

/// Transient status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    /// Message that replaces `message` once `escalate_after` has elapsed.
    pub escalation: Option<(Duration, String)>,
}

impl Notification {
    pub fn loading(escalate_after: Duration) -> Self {
        Self {
            message: "loading...".to_string(),
            escalation: Some((escalate_after, "still loading...".to_string())),
        }
    }
}

/// Recent-items entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Record name
    pub name: String,
    /// History bucket, e.g. `history.securities.recent`
    pub item: String,
    /// Route hash that reopens the record
    pub value: String,
    pub visited_at: DateTime<Utc>,
}
