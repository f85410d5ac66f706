use serde::{Deserialize, Serialize};

/// Error from the securities record service or the template text service.
///
/// `provider` names the backend (`rest`, or `mock` in tests). Errors about a
/// single security carry its id; template errors carry the module name.
///
/// `NetworkError`, `Timeout` and `RateLimited` are [transient](Self::is_transient);
/// the REST transport retries them before they reach the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (connection refused, name resolution failure).
    NetworkError {
        /// Backend that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Backend that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Backend that produced the error.
        provider: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The requested security (or security version) does not exist.
    RecordNotFound {
        /// Backend that produced the error.
        provider: String,
        /// Identifier of the record that was not found.
        record_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// No template text exists for the requested module.
    TemplateNotFound {
        /// Backend that produced the error.
        provider: String,
        /// Template module name, e.g. `og.views.securities.equity`.
        module: String,
    },

    /// A request parameter was rejected (unknown scheme type, empty identifier list, ...).
    InvalidParameter {
        /// Backend that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The caller lacks permission for the requested operation.
    PermissionDenied {
        /// Backend that produced the error.
        provider: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Backend that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to build a request (bad base URL, client construction, ...).
    SerializationError {
        /// Backend that produced the error.
        provider: String,
        /// Details about the failure.
        detail: String,
    },

    /// An unrecognized error from the API.
    Unknown {
        /// Backend that produced the error.
        provider: String,
        /// Raw error code (HTTP status) from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 证券或模板不存在、参数或权限问题：记 `warn`，其余记 `error`。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::RecordNotFound { .. }
                | Self::TemplateNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::PermissionDenied { .. }
        )
    }

    /// 暂时性错误（网络、超时、限流），传输层会按退避重试。
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    /// Message suitable for showing to the user, without the backend tag.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::RecordNotFound {
                raw_message: Some(msg),
                ..
            }
            | Self::PermissionDenied {
                raw_message: Some(msg),
                ..
            } => msg.clone(),
            Self::Unknown { raw_message, .. } => raw_message.clone(),
            Self::InvalidParameter { detail, .. } => detail.clone(),
            other => {
                let text = other.to_string();
                match text.split_once("] ") {
                    Some((_, rest)) => rest.to_string(),
                    None => text,
                }
            }
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::RecordNotFound {
                provider,
                record_id,
                ..
            } => {
                write!(f, "[{provider}] Security '{record_id}' not found")
            }
            Self::TemplateNotFound { provider, module } => {
                write!(f, "[{provider}] Template '{module}' not found")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Request error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_failures_are_transient() {
        let timeout = ProviderError::Timeout {
            provider: "rest".into(),
            detail: "security DbSec~1: timed out".into(),
        };
        let limited = ProviderError::RateLimited {
            provider: "rest".into(),
            retry_after: Some(2),
            raw_message: None,
        };
        let missing = ProviderError::TemplateNotFound {
            provider: "rest".into(),
            module: "og.views.securities.bond".into(),
        };
        assert!(timeout.is_transient());
        assert!(limited.is_transient());
        assert!(!missing.is_transient());
    }

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "rest".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[rest] Network error: connection refused");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ProviderError::RateLimited {
            provider: "rest".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[rest] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_record_not_found() {
        let e = ProviderError::RecordNotFound {
            provider: "rest".to_string(),
            record_id: "DbSec~1".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[rest] Security 'DbSec~1' not found");
    }

    #[test]
    fn display_template_not_found() {
        let e = ProviderError::TemplateNotFound {
            provider: "rest".to_string(),
            module: "og.views.securities.swap".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[rest] Template 'og.views.securities.swap' not found"
        );
    }

    #[test]
    fn user_message_prefers_raw_message() {
        let e = ProviderError::Unknown {
            provider: "rest".to_string(),
            raw_code: Some("500".to_string()),
            raw_message: "database unavailable".to_string(),
        };
        assert_eq!(e.user_message(), "database unavailable");
    }

    #[test]
    fn user_message_strips_provider_tag() {
        let e = ProviderError::Timeout {
            provider: "rest".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.user_message(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn expected_errors_are_classified() {
        assert!(
            ProviderError::TemplateNotFound {
                provider: "rest".to_string(),
                module: "x".to_string(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::NetworkError {
                provider: "rest".to_string(),
                detail: "x".to_string(),
            }
            .is_expected()
        );
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ProviderError::RecordNotFound {
            provider: "rest".to_string(),
            record_id: "X1".to_string(),
            raw_message: None,
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "RecordNotFound");
        assert_eq!(json["record_id"], "X1");
    }
}
