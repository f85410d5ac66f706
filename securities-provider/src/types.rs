use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============ Pagination ============

/// Query parameters for the security list, with optional name and type filters.
///
/// # Default
///
/// The default is `page = 1, page_size = 50`, with no filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityQueryParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Name filter, matched by the server (wildcards allowed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Security type filter, one of the values from [`SecurityMeta::types`].
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub security_type: Option<String>,
}

impl Default for SecurityQueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 50,
            name: None,
            security_type: None,
        }
    }
}

/// Paginated response wrapper for list operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response, automatically computing [`has_more`](Self::has_more).
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u32) -> Self {
        let has_more = page.saturating_mul(page_size) < total_count;
        Self {
            items,
            page,
            page_size,
            total_count,
            has_more,
        }
    }
}

// ============ Records ============

/// One row of the security list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecuritySummary {
    /// Object identifier, used as the `id` route argument.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Security type, e.g. `EQUITY`.
    #[serde(rename = "type")]
    pub security_type: String,
}

/// A security as returned by the record service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SecurityRecord {
    /// Object identifier; filled from the request when the payload omits it.
    #[serde(default)]
    pub id: String,
    /// Fields fed to the render template.
    pub template_data: TemplateData,
    /// External identifiers, keyed by scheme.
    #[serde(default)]
    pub identifiers: BTreeMap<String, String>,
}

/// Template fields of a security.
///
/// The well-known fields are typed; everything else the server sends is kept in
/// [`extra`](Self::extra) so type-specific templates can reference it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TemplateData {
    #[serde(rename = "securityType")]
    pub security_type: String,
    #[serde(default)]
    pub name: String,
    /// Historical time-series identifier, when one is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hts_id: Option<String>,
    #[serde(
        rename = "underlyingOid",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub underlying_oid: Option<String>,
    #[serde(
        rename = "underlyingName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub underlying_name: Option<String>,
    #[serde(
        rename = "underlyingExternalId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub underlying_external_id: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl TemplateData {
    /// Looks a field up by its wire name, rendering scalars as text.
    pub fn field(&self, key: &str) -> Option<String> {
        match key {
            "securityType" => Some(self.security_type.clone()),
            "name" => Some(self.name.clone()),
            "hts_id" => self.hts_id.clone(),
            "underlyingOid" => self.underlying_oid.clone(),
            "underlyingName" => self.underlying_name.clone(),
            "underlyingExternalId" => self.underlying_external_id.clone(),
            "deleted" => Some(self.deleted.to_string()),
            _ => match self.extra.get(key)? {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                Value::Bool(b) => Some(b.to_string()),
                Value::Number(n) => Some(n.to_string()),
                other => Some(other.to_string()),
            },
        }
    }
}

/// Metadata about the security master, used to populate the type filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityMeta {
    pub types: Vec<String>,
}

/// Request for one security, optionally pinned to a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSecurityRequest {
    pub id: String,
    pub version: Option<String>,
}

impl GetSecurityRequest {
    pub fn new(id: impl Into<String>, version: Option<String>) -> Self {
        Self {
            id: id.into(),
            version,
        }
    }
}

// ============ Creation ============

/// External identifier schemes accepted when loading new securities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SchemeType {
    #[serde(rename = "BLOOMBERG_TICKER")]
    BloombergTicker,
    #[serde(rename = "BLOOMBERG_TCM")]
    BloombergTcm,
    #[serde(rename = "BLOOMBERG_BUID")]
    BloombergBuid,
    #[serde(rename = "CUSIP")]
    Cusip,
    #[serde(rename = "ISIN")]
    Isin,
    #[serde(rename = "RIC")]
    Ric,
    #[serde(rename = "CSEDOL1")]
    Sedol,
}

impl SchemeType {
    /// All schemes in the order they are offered to the user.
    pub const ALL: [Self; 7] = [
        Self::BloombergTicker,
        Self::BloombergTcm,
        Self::BloombergBuid,
        Self::Cusip,
        Self::Isin,
        Self::Ric,
        Self::Sedol,
    ];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BloombergTicker => "BLOOMBERG_TICKER",
            Self::BloombergTcm => "BLOOMBERG_TCM",
            Self::BloombergBuid => "BLOOMBERG_BUID",
            Self::Cusip => "CUSIP",
            Self::Isin => "ISIN",
            Self::Ric => "RIC",
            Self::Sedol => "CSEDOL1",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::BloombergTicker => "Bloomberg Ticker",
            Self::BloombergTcm => "Bloomberg Ticker/Coupon/Maturity",
            Self::BloombergBuid => "Bloomberg BUID",
            Self::Cusip => "CUSIP",
            Self::Isin => "ISIN",
            Self::Ric => "RIC",
            Self::Sedol => "SEDOL",
        }
    }

    /// Parses a wire value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for SchemeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to load securities from an external data source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSecuritiesRequest {
    pub scheme_type: SchemeType,
    /// Free text list of identifiers, one per line.
    pub identifier: String,
}

/// Body returned by a create call: the unique ids of the stored securities.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedSecurities {
    #[serde(default)]
    pub data: Vec<String>,
}

/// Extracts the object id from a created unique id such as `DbSec|1234`.
///
/// Ids without a scheme separator are returned unchanged.
pub fn object_id_of(unique_id: &str) -> &str {
    match unique_id.split_once('|') {
        Some((_, rest)) => rest.split('|').next().unwrap_or(rest),
        None => unique_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_securities_body_lists_unique_ids() {
        let created: CreatedSecurities = serde_json::from_str(r#"{"data":["DB|X1"]}"#).unwrap();
        assert_eq!(created.data, ["DB|X1"]);
        assert_eq!(object_id_of(&created.data[0]), "X1");

        let empty: CreatedSecurities = serde_json::from_str("{}").unwrap();
        assert!(empty.data.is_empty());
    }

    #[test]
    fn record_deserializes_known_and_extra_fields() {
        let json = r#"{
            "template_data": {
                "securityType": "EQUITY",
                "name": "ACME Corp",
                "hts_id": "DbHts~7",
                "exchange": "XNYS",
                "lotSize": 100
            },
            "identifiers": {"BLOOMBERG_TICKER": "BLOOMBERG_TICKER-ACME US Equity"}
        }"#;
        let record: SecurityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.template_data.security_type, "EQUITY");
        assert_eq!(record.template_data.hts_id.as_deref(), Some("DbHts~7"));
        assert!(!record.template_data.deleted);
        assert_eq!(record.template_data.field("exchange").as_deref(), Some("XNYS"));
        assert_eq!(record.template_data.field("lotSize").as_deref(), Some("100"));
        assert_eq!(record.identifiers.len(), 1);
        assert!(record.id.is_empty());
    }

    #[test]
    fn record_deserializes_underlying_fields() {
        let json = r#"{
            "template_data": {
                "securityType": "EQUITY_OPTION",
                "name": "ACME C100",
                "underlyingOid": "DbSec~12",
                "underlyingExternalId": "BLOOMBERG_TICKER~ACME US Equity",
                "deleted": true
            }
        }"#;
        let record: SecurityRecord = serde_json::from_str(json).unwrap();
        let data = &record.template_data;
        assert_eq!(data.underlying_oid.as_deref(), Some("DbSec~12"));
        assert!(data.underlying_name.is_none());
        assert!(data.deleted);
        assert!(record.identifiers.is_empty());
    }

    #[test]
    fn scheme_type_round_trips_wire_value() {
        for scheme in SchemeType::ALL {
            assert_eq!(SchemeType::parse(scheme.as_str()), Some(scheme));
        }
        assert_eq!(SchemeType::parse("SEDOL"), None);
        assert_eq!(SchemeType::Sedol.label(), "SEDOL");
    }

    #[test]
    fn object_id_strips_scheme() {
        assert_eq!(object_id_of("DB|X1"), "X1");
        assert_eq!(object_id_of("DbSec|1234|2"), "1234");
        assert_eq!(object_id_of("X1"), "X1");
    }

    #[test]
    fn query_params_serialize_type_filter() {
        let params = SecurityQueryParams {
            security_type: Some("BOND".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["type"], "BOND");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn paginated_response_has_more() {
        let resp = PaginatedResponse::new(vec![1, 2, 3], 1, 3, 10);
        assert!(resp.has_more);
        let resp = PaginatedResponse::new(vec![1, 2], 2, 3, 5);
        assert!(!resp.has_more);
    }
}
