//! REST 传输层
//!
//! 证券服务只有三种调用：GET（记录、列表、类型、模板文本）、PUT 表单（新增证券）
//! 和 DELETE。每次尝试都重新构建请求；429 与 502-504 视为暂时性错误，按退避重试，
//! 其余非 2xx 状态交给错误映射，映射时带上记录 id 或模板模块名。

use std::borrow::Cow;
use std::time::Duration;

use reqwest::RequestBuilder;
use reqwest::header::{ACCEPT, RETRY_AFTER};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::RestProvider;
use super::types::ErrorResponse;

/// 日志中保留的响应体字符数
const LOG_EXCERPT_CHARS: usize = 200;
const FIRST_RETRY_DELAY: Duration = Duration::from_millis(200);
const MAX_RETRY_DELAY: Duration = Duration::from_secs(5);
/// `Retry-After` 上限（秒）
const MAX_RETRY_AFTER_SECS: u64 = 30;

/// 一次 REST 调用
#[derive(Debug, Clone, Copy)]
pub(crate) enum Call<'a> {
    Get,
    /// 表单编码 body
    PutForm(&'a [(&'a str, &'a str)]),
    Delete,
}

impl Call<'_> {
    fn method(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::PutForm(_) => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// 尚未检查状态码的响应
struct RawResponse {
    status: u16,
    retry_after: Option<u64>,
    body: String,
}

impl RestProvider {
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, call: Call<'_>, url: &str) -> RequestBuilder {
        match call {
            Call::Get => self.client.get(url).header(ACCEPT, "application/json"),
            Call::PutForm(form) => self
                .client
                .put(url)
                .header(ACCEPT, "application/json")
                .form(form),
            Call::Delete => self.client.delete(url),
        }
    }

    /// 执行调用并返回 2xx 响应体，暂时性错误最多重试 `max_retries` 次
    async fn send(&self, call: Call<'_>, path: &str, ctx: &ErrorContext) -> Result<String> {
        let url = self.url(path);
        let mut attempt = 0;
        loop {
            let result = match self.attempt(call, &url, ctx).await {
                Ok(raw) => self.check_status(raw, ctx),
                Err(e) => Err(e),
            };
            match result {
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    let delay = retry_delay(&e, attempt);
                    attempt += 1;
                    log::warn!(
                        "[{}] {} {path} failed, retry {attempt}/{} in {}ms: {e}",
                        Self::NAME,
                        call.method(),
                        self.max_retries,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                other => return other,
            }
        }
    }

    async fn attempt(&self, call: Call<'_>, url: &str, ctx: &ErrorContext) -> Result<RawResponse> {
        log::debug!("[{}] {} {url}", Self::NAME, call.method());

        let response = self
            .request(call, url)
            .send()
            .await
            .map_err(|e| transport_error(&e, ctx))?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&e, ctx))?;

        log::debug!("[{}] HTTP {status}: {}", Self::NAME, excerpt(&body));
        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }

    fn check_status(&self, raw: RawResponse, ctx: &ErrorContext) -> Result<String> {
        match raw.status {
            200..=299 => Ok(raw.body),
            429 => {
                log::warn!("[{}] Rate limited, retry_after={:?}", Self::NAME, raw.retry_after);
                Err(ProviderError::RateLimited {
                    provider: Self::NAME.to_string(),
                    retry_after: raw.retry_after,
                    raw_message: Some(raw.body).filter(|b| !b.trim().is_empty()),
                })
            }
            502..=504 => Err(ProviderError::NetworkError {
                provider: Self::NAME.to_string(),
                detail: format!("{}HTTP {}: {}", subject(ctx), raw.status, excerpt(&raw.body)),
            }),
            status => {
                let message = serde_json::from_str::<ErrorResponse>(&raw.body)
                    .ok()
                    .and_then(ErrorResponse::into_message)
                    .unwrap_or_else(|| raw.body.trim().to_string());
                Err(self.map_error(
                    RawApiError::with_code(status.to_string(), message),
                    ctx.clone(),
                ))
            }
        }
    }

    fn parse<T: DeserializeOwned>(&self, body: &str, ctx: &ErrorContext) -> Result<T> {
        serde_json::from_str(body).map_err(|e| {
            log::error!("[{}] Unexpected body: {}", Self::NAME, excerpt(body));
            self.parse_error(format!("{}{e}", subject(ctx)))
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        ctx: ErrorContext,
    ) -> Result<T> {
        let body = self.send(Call::Get, path, &ctx).await?;
        self.parse(&body, &ctx)
    }

    pub(crate) async fn put_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
        ctx: ErrorContext,
    ) -> Result<T> {
        let body = self.send(Call::PutForm(form), path, &ctx).await?;
        self.parse(&body, &ctx)
    }

    pub(crate) async fn delete_path(&self, path: &str, ctx: ErrorContext) -> Result<()> {
        self.send(Call::Delete, path, &ctx).await.map(drop)
    }
}

fn transport_error(e: &reqwest::Error, ctx: &ErrorContext) -> ProviderError {
    let provider = RestProvider::NAME.to_string();
    let detail = format!("{}{e}", subject(ctx));
    if e.is_timeout() {
        ProviderError::Timeout { provider, detail }
    } else {
        ProviderError::NetworkError { provider, detail }
    }
}

/// 错误信息前缀，如 `security DbSec~1: `
fn subject(ctx: &ErrorContext) -> String {
    match (&ctx.record_id, &ctx.module) {
        (Some(id), _) => format!("security {id}: "),
        (None, Some(module)) => format!("template {module}: "),
        (None, None) => String::new(),
    }
}

/// `Retry-After` 优先，否则 200ms 起指数退避，上限 5s
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    match error {
        ProviderError::RateLimited {
            retry_after: Some(secs),
            ..
        } => Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS)),
        _ => FIRST_RETRY_DELAY
            .saturating_mul(2_u32.saturating_pow(attempt))
            .min(MAX_RETRY_DELAY),
    }
}

/// 截断响应体（模板全文、错误页）
fn excerpt(body: &str) -> Cow<'_, str> {
    match body.char_indices().nth(LOG_EXCERPT_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}... ({} bytes)", &body[..cut], body.len())),
        None => Cow::Borrowed(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CreatedSecurities;

    fn provider() -> RestProvider {
        RestProvider::new("http://localhost:8080/jax").unwrap()
    }

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            retry_after: None,
            body: body.to_string(),
        }
    }

    fn record(id: &str) -> ErrorContext {
        ErrorContext {
            record_id: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn template(module: &str) -> ErrorContext {
        ErrorContext {
            module: Some(module.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn success_returns_body() {
        let body = provider()
            .check_status(raw(200, r#"{"data":["DbSec|X1"]}"#), &ErrorContext::default())
            .unwrap();
        assert_eq!(body, r#"{"data":["DbSec|X1"]}"#);
    }

    #[test]
    fn rate_limit_keeps_retry_after() {
        let mut response = raw(429, "");
        response.retry_after = Some(4);

        let err = provider()
            .check_status(response, &ErrorContext::default())
            .unwrap_err();

        assert!(err.is_transient());
        assert!(matches!(
            err,
            ProviderError::RateLimited {
                retry_after: Some(4),
                raw_message: None,
                ..
            }
        ));
        assert_eq!(retry_delay(&err, 0), Duration::from_secs(4));
    }

    #[test]
    fn gateway_error_names_the_security() {
        let err = provider()
            .check_status(raw(503, "maintenance"), &record("DbSec~1"))
            .unwrap_err();

        assert!(err.is_transient());
        assert_eq!(
            err.to_string(),
            "[rest] Network error: security DbSec~1: HTTP 503: maintenance"
        );
    }

    #[test]
    fn missing_text_is_template_not_found() {
        let err = provider()
            .check_status(raw(404, ""), &template("og.views.securities.bond"))
            .unwrap_err();

        assert!(!err.is_transient());
        assert!(matches!(
            err,
            ProviderError::TemplateNotFound { ref module, .. } if module == "og.views.securities.bond"
        ));
    }

    #[test]
    fn json_error_body_supplies_the_message() {
        let err = provider()
            .check_status(raw(404, r#"{"message":"security was purged"}"#), &record("X9"))
            .unwrap_err();

        assert_eq!(err.user_message(), "security was purged");
    }

    #[test]
    fn unparseable_template_body_names_the_module() {
        let result: Result<CreatedSecurities> =
            provider().parse("<html>", &template("og.views.securities.default"));

        let err = result.unwrap_err();
        assert!(matches!(err, ProviderError::ParseError { .. }));
        assert!(err.to_string().contains("template og.views.securities.default: "));
    }

    #[test]
    fn backoff_doubles_up_to_cap() {
        let err = ProviderError::NetworkError {
            provider: "rest".into(),
            detail: "refused".into(),
        };
        let delays: Vec<u128> = (0..7).map(|n| retry_delay(&err, n).as_millis()).collect();
        assert_eq!(delays, [200, 400, 800, 1600, 3200, 5000, 5000]);
        assert_eq!(retry_delay(&err, u32::MAX), MAX_RETRY_DELAY);
    }

    #[test]
    fn retry_after_is_capped() {
        let err = ProviderError::RateLimited {
            provider: "rest".into(),
            retry_after: Some(600),
            raw_message: None,
        };
        assert_eq!(retry_delay(&err, 0), Duration::from_secs(30));
    }

    #[test]
    fn long_bodies_are_cut_on_char_boundaries() {
        assert_eq!(excerpt("short"), "short");

        let body = "証".repeat(LOG_EXCERPT_CHARS + 10);
        let cut = excerpt(&body);
        assert!(cut.starts_with(&"証".repeat(LOG_EXCERPT_CHARS)));
        assert!(cut.ends_with(&format!("... ({} bytes)", body.len())));
    }

    #[test]
    fn form_put_builds_urlencoded_request() {
        let provider = provider();
        let form = [("scheme_type", "ISIN"), ("identifier", "US0000000001\nUS0000000002")];

        let request = provider
            .request(Call::PutForm(&form), &provider.url("/securities"))
            .build()
            .unwrap();

        assert_eq!(*request.method(), reqwest::Method::PUT);
        assert_eq!(request.url().as_str(), "http://localhost:8080/jax/securities");
        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(
            std::str::from_utf8(body).unwrap(),
            "scheme_type=ISIN&identifier=US0000000001%0AUS0000000002"
        );
    }
}
