use serde::Deserialize;

use crate::types::SecuritySummary;

/// Error body returned by the REST API.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.is_empty())
    }
}

/// List body returned by `GET /securities`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSecuritiesResponse {
    #[serde(default)]
    pub data: Vec<SecuritySummary>,
    /// Absent when the server does not paginate; the page length is used instead.
    #[serde(default)]
    pub total_count: Option<u32>,
}

/// Body returned by `GET /text/{module}`.
#[derive(Debug, Deserialize)]
pub struct TemplateTextResponse {
    pub text: String,
}
