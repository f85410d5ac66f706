//! 配置服务
//!
//! 配置文件位于 `<config_dir>/securities-view/config.json`，
//! 缺失的字段使用默认值，文件不存在时整体使用默认配置。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use securities_core::ViewConfig;
use securities_provider::RestConfig;
use serde::{Deserialize, Serialize};

use crate::view::Theme;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// REST 后端连接设置
    pub rest: RestConfig,
    /// 路由前缀
    pub route_prefix: String,
    /// 启动时打开的路由
    pub initial_route: String,
    /// 视图设置
    pub view: ViewConfig,
    /// 界面主题
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rest: RestConfig::default(),
            route_prefix: "#".to_string(),
            initial_route: "/securities".to_string(),
            view: ViewConfig::default(),
            theme: Theme::default(),
        }
    }
}

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("securities-view")
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self {
            path: config_dir().join("config.json"),
        }
    }

    #[cfg(test)]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
