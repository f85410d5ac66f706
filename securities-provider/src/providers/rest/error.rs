//! REST 错误映射
//!
//! The API reports failures through HTTP status codes, with an optional JSON body
//! carrying `message` (or `error`). Transport-level statuses (429, 502-504) never
//! reach this mapper; the transport in `http.rs` turns them into retryable errors.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::RestProvider;

impl ProviderErrorMapper for RestProvider {
    fn provider_name(&self) -> &'static str {
        Self::NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            Some("404") => match context.module {
                Some(module) => ProviderError::TemplateNotFound {
                    provider: self.provider_name().to_string(),
                    module,
                },
                None => ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    record_id: context.record_id.unwrap_or_default(),
                    raw_message: Some(raw.message).filter(|m| !m.is_empty()),
                },
            },

            Some("400" | "422") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: context.param.unwrap_or_else(|| "request".to_string()),
                detail: raw.message,
            },

            Some("401" | "403") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message).filter(|m| !m.is_empty()),
            },

            Some("408") => ProviderError::Timeout {
                provider: self.provider_name().to_string(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> RestProvider {
        RestProvider::new("http://localhost:8080").unwrap()
    }

    #[test]
    fn not_found_with_module_is_template_error() {
        let err = provider().map_error(
            RawApiError::with_code("404", ""),
            ErrorContext {
                module: Some("og.views.securities.bond".to_string()),
                ..Default::default()
            },
        );
        assert!(matches!(
            err,
            ProviderError::TemplateNotFound { ref module, .. } if module == "og.views.securities.bond"
        ));
    }

    #[test]
    fn not_found_without_module_is_record_error() {
        let err = provider().map_error(
            RawApiError::with_code("404", "no such security"),
            ErrorContext {
                record_id: Some("DbSec~9".to_string()),
                ..Default::default()
            },
        );
        match err {
            ProviderError::RecordNotFound {
                record_id,
                raw_message,
                ..
            } => {
                assert_eq!(record_id, "DbSec~9");
                assert_eq!(raw_message.as_deref(), Some("no such security"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bad_request_names_the_parameter() {
        let err = provider().map_error(
            RawApiError::with_code("400", "unknown scheme"),
            ErrorContext {
                param: Some("scheme_type".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(
            err.to_string(),
            "[rest] Invalid parameter 'scheme_type': unknown scheme"
        );
    }

    #[test]
    fn unmapped_status_falls_back_to_unknown() {
        let err = provider().map_error(
            RawApiError::with_code("500", "boom"),
            ErrorContext::default(),
        );
        assert!(matches!(
            err,
            ProviderError::Unknown { raw_code: Some(ref c), .. } if c == "500"
        ));
    }
}
