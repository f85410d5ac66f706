//! View configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings consumed by the view controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    /// Page name, used as the first route segment and for history keys.
    pub page_name: String,
    /// Template module prefix; type templates live at `<module>.<type>`.
    pub module: String,
    /// Suppresses the loading notification and its clearing.
    pub hide_loading: bool,
    /// Delay before the loading notification escalates to "still loading...".
    pub still_loading_after_ms: u64,
    /// Retry policy for resolving the type taxonomy.
    pub taxonomy_retry: RetryPolicy,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_name: "securities".to_string(),
            module: "og.views.securities".to_string(),
            hide_loading: false,
            still_loading_after_ms: 3000,
            taxonomy_retry: RetryPolicy::default(),
        }
    }
}

impl ViewConfig {
    /// Template module for a security type, e.g. `og.views.securities.equity`.
    pub fn template_module(&self, security_type: &str) -> String {
        format!("{}.{}", self.module, security_type.to_lowercase())
    }

    pub fn default_template_module(&self) -> String {
        format!("{}.default", self.module)
    }

    /// Recent-history item key, e.g. `history.securities.recent`.
    pub fn history_item(&self) -> String {
        format!("history.{}.recent", self.page_name)
    }
}

/// Bounded exponential backoff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Zero is treated as one.
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 500,
            max_delay_ms: 8000,
        }
    }
}

impl RetryPolicy {
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay after the given failed attempt (1-based): initial, 2x, 4x, ... capped.
    pub fn delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(20);
        let delay_ms = self.initial_delay_ms.saturating_mul(1_u64 << exponent);
        Duration::from_millis(delay_ms.min(self.max_delay_ms))
    }
}
