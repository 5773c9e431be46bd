//! 自动同步域名选择 Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// The set of domains opted into sync.
///
/// 平台实现:
/// - `zonesync-app`: `SqliteStore` (`SeaORM`)
#[async_trait]
pub trait SyncedDomainSelection: Send + Sync {
    /// 已选中的域名（排序、去重）
    async fn list(&self) -> CoreResult<Vec<String>>;

    /// 加入选择；已存在时无操作
    async fn enable(&self, domain: &str) -> CoreResult<()>;

    /// 移出选择；不存在时无操作
    async fn disable(&self, domain: &str) -> CoreResult<()>;

    async fn contains(&self, domain: &str) -> CoreResult<bool> {
        Ok(self.list().await?.iter().any(|d| d == domain))
    }
}
