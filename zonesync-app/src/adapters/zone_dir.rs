//! Panel zone exports read from a directory.
//!
//! The panel drops one `<domain>.json` file per domain into the zone directory,
//! each holding a JSON array of `{"host", "type", "value"}` objects. A selected
//! domain without an export fails to sync.

use std::path::PathBuf;

use async_trait::async_trait;
use zonesync_core::error::{CoreError, CoreResult};
use zonesync_core::traits::LocalDnsStore;
use zonesync_core::types::PanelRecord;

/// `LocalDnsStore` over a directory of zone export files.
pub struct ZoneDirStore {
    dir: PathBuf,
}

impl ZoneDirStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn zone_file(&self, domain: &str) -> CoreResult<PathBuf> {
        if domain.is_empty()
            || domain.starts_with('.')
            || domain.contains(|c: char| c == '/' || c == '\\')
            || domain.contains("..")
        {
            return Err(CoreError::ValidationError(format!(
                "invalid domain name: {domain:?}"
            )));
        }
        Ok(self.dir.join(format!("{domain}.json")))
    }
}

#[async_trait]
impl LocalDnsStore for ZoneDirStore {
    async fn get_records(&self, domain: &str) -> CoreResult<Vec<PanelRecord>> {
        let path = self.zone_file(domain)?;
        // 缺少导出文件同样不能当作空区域
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::StorageError(format!(
                    "No zone export for {domain} at {}",
                    path.display()
                ))
            } else {
                CoreError::StorageError(format!("Failed to read {}: {e}", path.display()))
            }
        })?;

        // 整个文件无法解析时不能当作空区域，否则会删除远端全部记录
        let entries: Vec<serde_json::Value> = serde_json::from_str(&content).map_err(|e| {
            CoreError::SerializationError(format!("Invalid zone export {}: {e}", path.display()))
        })?;

        let total = entries.len();
        let records: Vec<PanelRecord> = entries
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect();
        if records.len() < total {
            log::warn!(
                "{domain}: skipped {} unreadable entries in zone export",
                total - records.len()
            );
        }
        Ok(records)
    }
}
