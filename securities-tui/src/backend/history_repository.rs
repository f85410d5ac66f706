//! 最近访问记录仓库
//!
//! 使用 JSON 文件存储最近打开的证券
//! 实现 securities-core 的 HistoryStore trait

use std::path::PathBuf;

use async_trait::async_trait;
use securities_core::types::HistoryEntry;
use securities_core::{CoreError, CoreResult, HistoryStore};
use tokio::fs;
use tokio::sync::Mutex;

use super::config_service::config_dir;

/// 每个 item 保留的条目数
const CAPACITY: usize = 20;

/// 基于 JSON 文件的历史记录仓库
pub struct JsonHistoryRepository {
    path: PathBuf,
    /// 内存缓存，首次访问时从文件加载
    cache: Mutex<Option<Vec<HistoryEntry>>>,
}

impl JsonHistoryRepository {
    pub fn new() -> Self {
        Self::at(config_dir().join("history.json"))
    }

    pub fn at(path: PathBuf) -> Self {
        Self {
            path,
            cache: Mutex::new(None),
        }
    }

    /// 从文件加载历史记录
    async fn load_from_file(&self) -> CoreResult<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    /// 保存历史记录到文件
    async fn save_to_file(&self, entries: &[HistoryEntry]) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

impl Default for JsonHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for JsonHistoryRepository {
    async fn put(&self, entry: HistoryEntry) -> CoreResult<()> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load_from_file().await?);
        }
        let entries = cache.get_or_insert_with(Vec::new);

        let item = entry.item.clone();
        entries.retain(|e| !(e.item == entry.item && e.value == entry.value));
        entries.insert(0, entry);

        let mut kept = 0;
        entries.retain(|e| {
            if e.item != item {
                return true;
            }
            kept += 1;
            kept <= CAPACITY
        });

        self.save_to_file(entries).await
    }

    async fn recent(&self, item: &str, limit: usize) -> CoreResult<Vec<HistoryEntry>> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load_from_file().await?);
        }
        Ok(cache
            .iter()
            .flatten()
            .filter(|e| e.item == item)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn entry(name: &str) -> HistoryEntry {
        HistoryEntry {
            name: name.to_string(),
            item: "history.securities.recent".to_string(),
            value: format!("#/securities/{name}"),
            visited_at: Utc::now(),
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("securities-history-test-{}", std::process::id()))
            .join(name)
    }

    #[tokio::test]
    async fn entries_survive_a_new_repository() {
        let path = temp_path("persist.json");
        let _ = std::fs::remove_file(&path);
        let repo = JsonHistoryRepository::at(path.clone());
        repo.put(entry("A")).await.unwrap();
        repo.put(entry("B")).await.unwrap();
        repo.put(entry("A")).await.unwrap();

        let reopened = JsonHistoryRepository::at(path);
        let recent = reopened.recent("history.securities.recent", 10).await.unwrap();

        let names: Vec<_> = recent.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let repo = JsonHistoryRepository::at(temp_path("none.json"));
        assert!(repo.recent("history.securities.recent", 5).await.unwrap().is_empty());
    }
}
