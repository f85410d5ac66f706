use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    CreateSecuritiesRequest, GetSecurityRequest, PaginatedResponse, SecurityMeta,
    SecurityQueryParams, SecurityRecord, SecuritySummary,
};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（HTTP 状态码）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录 ID（用于 `RecordNotFound`）
    pub record_id: Option<String>,
    /// 模板模块名（用于 `TemplateNotFound`）
    pub module: Option<String>,
    /// 参数名（用于 `InvalidParameter`）
    pub param: Option<String>,
}

/// 错误映射 Trait（内部使用）
/// 将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回后端标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Remote record service for securities.
#[async_trait]
pub trait SecurityProvider: Send + Sync {
    /// 后端标识符
    fn id(&self) -> &'static str;

    /// Fetches one security, at its latest version unless `version` is pinned.
    async fn get(&self, request: &GetSecurityRequest) -> Result<SecurityRecord>;

    /// Fetches security master metadata (the list of security types).
    async fn get_meta(&self) -> Result<SecurityMeta>;

    /// Lists securities matching the given filters.
    async fn search(
        &self,
        params: &SecurityQueryParams,
    ) -> Result<PaginatedResponse<SecuritySummary>>;

    /// Loads securities from an external source, returning the stored unique ids.
    async fn create(&self, request: &CreateSecuritiesRequest) -> Result<Vec<String>>;

    /// Deletes a security.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Template text service.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Returns the raw template text for a module such as `og.views.securities.equity`.
    ///
    /// A missing module yields [`ProviderError::TemplateNotFound`].
    async fn text(&self, module: &str) -> Result<String>;
}
