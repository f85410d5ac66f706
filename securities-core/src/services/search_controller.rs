//! 搜索列表服务

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{OnceCell, watch};

use crate::error::{CoreError, CoreResult};
use crate::services::ViewContext;
use crate::types::{ColumnDef, FilterState, SearchQuery, TypeColumn};

/// Drives the search grid and owns the security type taxonomy.
pub struct SearchController {
    ctx: Arc<ViewContext>,
    taxonomy: OnceCell<Vec<String>>,
    column: watch::Sender<TypeColumn>,
    loaded: AtomicBool,
}

impl SearchController {
    #[must_use]
    pub fn new(ctx: Arc<ViewContext>) -> Self {
        Self {
            ctx,
            taxonomy: OnceCell::new(),
            column: watch::channel(TypeColumn::Unresolved).0,
            loaded: AtomicBool::new(false),
        }
    }

    /// Resolves the type taxonomy, retrying with backoff.
    ///
    /// Concurrent callers share one resolution. After the retry policy is
    /// exhausted the column goes back to [`TypeColumn::Unresolved`] and a later
    /// call starts over.
    pub async fn ready(&self) -> CoreResult<&[String]> {
        let types = self
            .taxonomy
            .get_or_try_init(|| self.resolve_taxonomy())
            .await?;
        Ok(types.as_slice())
    }

    async fn resolve_taxonomy(&self) -> CoreResult<Vec<String>> {
        let policy = self.ctx.config.taxonomy_retry;
        let attempts = policy.attempts();
        self.column.send_replace(TypeColumn::Loading);

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.ctx.records.get_meta().await {
                Ok(meta) => {
                    log::debug!("Resolved {} security types", meta.types.len());
                    self.column
                        .send_replace(TypeColumn::Resolved(meta.types.clone()));
                    return Ok(meta.types);
                }
                Err(e) if attempt >= attempts => {
                    self.column.send_replace(TypeColumn::Unresolved);
                    return Err(CoreError::TaxonomyUnavailable {
                        attempts,
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    let delay = policy.delay(attempt);
                    log::warn!(
                        "Security types unavailable (attempt {attempt}/{attempts}), retrying in {delay:?}: {e}"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Current state of the type column.
    pub fn type_column(&self) -> TypeColumn {
        self.column.borrow().clone()
    }

    pub fn subscribe_type_column(&self) -> watch::Receiver<TypeColumn> {
        self.column.subscribe()
    }

    /// Full grid load with the given initial filter.
    pub async fn load(&self, filter: &FilterState) -> CoreResult<()> {
        let types = self.ready().await?.to_vec();
        let query = SearchQuery {
            page: self.ctx.config.page_name.clone(),
            columns: vec![ColumnDef::type_column(types), ColumnDef::name_column()],
            filter: filter.clone(),
        };
        self.ctx.grid.load(&query).await?;
        self.loaded.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Applies a filter, loading the grid first if it never was.
    pub async fn filter(&self, filter: &FilterState) -> CoreResult<()> {
        if !self.loaded.load(Ordering::SeqCst) {
            return self.load(filter).await;
        }
        self.ready().await?;
        self.ctx.grid.filter(filter).await
    }

    /// Re-runs the current route's filter.
    pub async fn refresh(&self) -> CoreResult<()> {
        let filter = FilterState::from_args(&self.ctx.routes.current_args());
        self.filter(&filter).await
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::{RetryPolicy, ViewConfig};
    use crate::test_utils::create_test_harness;

    fn filter(name: &str) -> FilterState {
        FilterState {
            name: Some(name.to_string()),
            security_type: None,
        }
    }

    #[tokio::test]
    async fn first_filter_loads_grid_with_type_column() {
        let h = create_test_harness();
        h.provider.set_types(&["BOND", "EQUITY"]).await;
        let search = SearchController::new(h.ctx.clone());

        search.filter(&filter("ACME")).await.unwrap();

        let loads = h.grid.loads();
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].page, "securities");
        assert_eq!(
            loads[0].columns,
            [
                ColumnDef::type_column(vec!["BOND".into(), "EQUITY".into()]),
                ColumnDef::name_column()
            ]
        );
        assert_eq!(loads[0].filter, filter("ACME"));
        assert!(h.grid.filters().is_empty());
        assert!(search.is_loaded());
    }

    #[tokio::test]
    async fn later_filters_do_not_reload() {
        let h = create_test_harness();
        let search = SearchController::new(h.ctx.clone());

        search.filter(&FilterState::default()).await.unwrap();
        search.filter(&filter("ACME")).await.unwrap();
        search.filter(&filter("UST")).await.unwrap();

        assert_eq!(h.grid.loads().len(), 1);
        assert_eq!(h.grid.filters(), [filter("ACME"), filter("UST")]);
    }

    #[tokio::test]
    async fn taxonomy_is_resolved_once() {
        let h = create_test_harness();
        h.provider.set_types(&["EQUITY"]).await;
        let search = Arc::new(SearchController::new(h.ctx.clone()));

        let (a, b) = tokio::join!(search.ready(), search.ready());
        assert_eq!(a.unwrap(), ["EQUITY"]);
        assert_eq!(b.unwrap(), ["EQUITY"]);
        search.ready().await.unwrap();

        assert_eq!(h.provider.meta_calls(), 1);
        assert_eq!(
            search.type_column(),
            TypeColumn::Resolved(vec!["EQUITY".into()])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn taxonomy_retries_with_backoff() {
        let h = create_test_harness();
        h.provider.set_types(&["EQUITY"]).await;
        h.provider.fail_meta(2);
        let search = SearchController::new(h.ctx.clone());
        let started = tokio::time::Instant::now();

        assert_eq!(search.ready().await.unwrap(), ["EQUITY"]);

        assert_eq!(h.provider.meta_calls(), 3);
        // 500ms + 1000ms
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn taxonomy_gives_up_after_policy_is_exhausted() {
        let h = create_test_harness().with_config(ViewConfig {
            taxonomy_retry: RetryPolicy {
                max_attempts: 3,
                initial_delay_ms: 100,
                max_delay_ms: 1000,
            },
            ..Default::default()
        });
        h.provider.fail_meta(u32::MAX);
        let search = SearchController::new(h.ctx.clone());
        let mut column = search.subscribe_type_column();

        let err = search.ready().await.unwrap_err();

        assert!(matches!(err, CoreError::TaxonomyUnavailable { attempts: 3, .. }));
        assert_eq!(h.provider.meta_calls(), 3);
        assert_eq!(*column.borrow_and_update(), TypeColumn::Unresolved);

        // a later call starts a fresh resolution
        h.provider.fail_meta(0);
        assert!(search.ready().await.is_ok());
        assert_eq!(h.provider.meta_calls(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn filter_without_taxonomy_fails_and_skips_grid() {
        let h = create_test_harness().with_config(ViewConfig {
            taxonomy_retry: RetryPolicy {
                max_attempts: 1,
                ..Default::default()
            },
            ..Default::default()
        });
        h.provider.fail_meta(u32::MAX);
        let search = SearchController::new(h.ctx.clone());

        assert!(search.filter(&FilterState::default()).await.is_err());
        assert!(h.grid.loads().is_empty());
        assert!(!search.is_loaded());
    }

    #[tokio::test]
    async fn refresh_uses_current_route_filter() {
        let h = create_test_harness();
        let search = SearchController::new(h.ctx.clone());
        search.load(&FilterState::default()).await.unwrap();
        h.ctx.routes.go("/securities/type:BOND").unwrap();

        search.refresh().await.unwrap();

        assert_eq!(
            h.grid.filters(),
            [FilterState {
                name: None,
                security_type: Some("BOND".into()),
            }]
        );
    }
}
