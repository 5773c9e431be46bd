//! 凭证存储抽象 Trait

use async_trait::async_trait;
use zonesync_provider::ProviderCredentials;

use crate::error::CoreResult;

/// Registrar 凭证存储 Trait
///
/// 平台实现:
/// - `zonesync-app`: `ConfigCredentialStore`（配置文件 `[registrar]` 段）
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 获取 Registrar 凭证
    ///
    /// # Returns
    /// * `Ok(Some(credentials))` - 凭证已配置
    /// * `Ok(None)` - 未配置（同步不会执行）
    async fn get(&self) -> CoreResult<Option<ProviderCredentials>>;
}
