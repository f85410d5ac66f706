//! 集成测试共用：连接 `SECURITIES_API_URL` 指向的服务

use std::sync::Arc;

use securities_provider::{
    RestConfig, SecurityProvider, SecurityQueryParams, TemplateSource, create_providers,
};

pub const SERVER_VAR: &str = "SECURITIES_API_URL";

pub struct LiveServer {
    pub records: Arc<dyn SecurityProvider>,
    pub templates: Arc<dyn TemplateSource>,
}

/// 未设置服务地址时返回 `None`，调用方直接结束测试
pub fn live_server() -> Option<LiveServer> {
    let Ok(base_url) = std::env::var(SERVER_VAR) else {
        eprintln!("skipping: {SERVER_VAR} is not set");
        return None;
    };
    let providers = create_providers(&RestConfig {
        base_url,
        ..Default::default()
    })
    .unwrap_or_else(|e| panic!("cannot build providers: {e}"));

    Some(LiveServer {
        records: providers.records,
        templates: providers.templates,
    })
}

impl LiveServer {
    /// 列表第一页第一条证券，服务为空时为 `None`
    pub async fn any_security_id(&self) -> Option<String> {
        let params = SecurityQueryParams {
            page_size: 1,
            ..Default::default()
        };
        let page = self.records.search(&params).await.unwrap();
        page.items.into_iter().next().map(|s| s.id)
    }
}
