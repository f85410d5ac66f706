//! REST `SecurityProvider` / `TemplateSource` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::{build_query, encode_segment};
use crate::traits::{ErrorContext, SecurityProvider, TemplateSource};
use crate::types::{
    CreateSecuritiesRequest, CreatedSecurities, GetSecurityRequest, PaginatedResponse,
    SecurityMeta, SecurityQueryParams, SecurityRecord, SecuritySummary,
};

use super::RestProvider;
use super::types::{ListSecuritiesResponse, TemplateTextResponse};

impl RestProvider {
    /// `/securities/{id}` or `/securities/{id}/versions/{version}`
    pub(crate) fn security_path(request: &GetSecurityRequest) -> String {
        let id = encode_segment(&request.id);
        match request.version.as_deref() {
            Some(version) => format!("/securities/{id}/versions/{}", encode_segment(version)),
            None => format!("/securities/{id}"),
        }
    }

    pub(crate) fn search_path(params: &SecurityQueryParams) -> String {
        let query = build_query(&[
            ("page", Some(params.page.to_string())),
            ("pageSize", Some(params.page_size.to_string())),
            ("name", params.name.clone()),
            ("type", params.security_type.clone()),
        ]);
        format!("/securities?{query}")
    }
}

#[async_trait]
impl SecurityProvider for RestProvider {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    async fn get(&self, request: &GetSecurityRequest) -> Result<SecurityRecord> {
        let ctx = ErrorContext {
            record_id: Some(request.id.clone()),
            ..Default::default()
        };
        let mut record: SecurityRecord = self.get_json(&Self::security_path(request), ctx).await?;
        if record.id.is_empty() {
            record.id.clone_from(&request.id);
        }
        Ok(record)
    }

    async fn get_meta(&self) -> Result<SecurityMeta> {
        self.get_json("/securities/metaData", ErrorContext::default())
            .await
    }

    async fn search(
        &self,
        params: &SecurityQueryParams,
    ) -> Result<PaginatedResponse<SecuritySummary>> {
        let response: ListSecuritiesResponse = self
            .get_json(&Self::search_path(params), ErrorContext::default())
            .await?;
        let total = response.total_count.unwrap_or_else(|| {
            u32::try_from(response.data.len()).unwrap_or(u32::MAX)
        });
        Ok(PaginatedResponse::new(
            response.data,
            params.page,
            params.page_size,
            total,
        ))
    }

    async fn create(&self, request: &CreateSecuritiesRequest) -> Result<Vec<String>> {
        let form = [
            ("scheme_type", request.scheme_type.as_str()),
            ("identifier", request.identifier.as_str()),
        ];
        let ctx = ErrorContext {
            param: Some("identifier".to_string()),
            ..Default::default()
        };
        let created: CreatedSecurities = self.put_form("/securities", &form, ctx).await?;
        log::debug!(
            "[{}] created {} securities from {}",
            Self::NAME,
            created.data.len(),
            request.scheme_type
        );
        Ok(created.data)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let ctx = ErrorContext {
            record_id: Some(id.to_string()),
            ..Default::default()
        };
        self.delete_path(&format!("/securities/{}", encode_segment(id)), ctx)
            .await
    }
}

#[async_trait]
impl TemplateSource for RestProvider {
    async fn text(&self, module: &str) -> Result<String> {
        let ctx = ErrorContext {
            module: Some(module.to_string()),
            ..Default::default()
        };
        let response: TemplateTextResponse = self
            .get_json(&format!("/text/{}", encode_segment(module)), ctx)
            .await?;
        Ok(response.text)
    }
}
