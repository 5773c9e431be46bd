//! 面板侧 DNS 区域读取 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::PanelRecord;

/// Read access to the hosting panel's zone for a domain.
///
/// 平台实现:
/// - `zonesync-app`: `ZoneDirStore`（每个域名一个 JSON 导出文件）
#[async_trait]
pub trait LocalDnsStore: Send + Sync {
    /// Raw panel records for `domain`. A domain the panel does not know has no
    /// records.
    async fn get_records(&self, domain: &str) -> CoreResult<Vec<PanelRecord>>;
}
