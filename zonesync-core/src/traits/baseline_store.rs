//! 同步基线持久化 Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Baseline 存储 Trait
///
/// 存储的是 [`codec::encode_for_persistence`](crate::codec::encode_for_persistence)
/// 产出的原始载荷，解码与损坏容错由 codec 负责。
///
/// 平台实现:
/// - `zonesync-app`: `SqliteStore` (`SeaORM`)
#[async_trait]
pub trait BaselineStore: Send + Sync {
    /// 读取域名的 baseline 载荷
    ///
    /// # Returns
    /// * `Ok(Some(payload))` - 已有 baseline
    /// * `Ok(None)` - 从未同步过
    async fn get(&self, domain: &str) -> CoreResult<Option<String>>;

    /// 写入（覆盖）域名的 baseline 载荷
    async fn put(&self, domain: &str, payload: &str) -> CoreResult<()>;
}
