//! 业务逻辑服务层

mod selection_service;
mod sync_service;
mod trigger_service;

pub use selection_service::{DomainSelectionEntry, SelectionService};
pub use sync_service::SyncService;
pub use trigger_service::TriggerService;

use std::sync::Arc;

use zonesync_provider::{create_provider, DnsProvider, ProviderCredentials};

use crate::error::CoreResult;
use crate::traits::{
    BaselineStore, CredentialStore, LocalDnsStore, SyncedDomainSelection, TtlOverrideConfig,
};

/// 从凭证构造 Registrar 句柄
pub type ProviderFactory = Arc<
    dyn Fn(ProviderCredentials) -> zonesync_provider::Result<Arc<dyn DnsProvider>> + Send + Sync,
>;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
pub struct ServiceContext {
    /// 凭证存储
    pub credential_store: Arc<dyn CredentialStore>,
    /// 面板侧 DNS 区域
    pub local_store: Arc<dyn LocalDnsStore>,
    /// 同步基线
    pub baseline_store: Arc<dyn BaselineStore>,
    /// TTL 覆盖配置
    pub ttl_override: Arc<dyn TtlOverrideConfig>,
    /// 自动同步域名选择
    pub domain_selection: Arc<dyn SyncedDomainSelection>,
    provider_factory: ProviderFactory,
}

impl ServiceContext {
    /// 创建服务上下文（使用默认的 `create_provider`）
    #[must_use]
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        local_store: Arc<dyn LocalDnsStore>,
        baseline_store: Arc<dyn BaselineStore>,
        ttl_override: Arc<dyn TtlOverrideConfig>,
        domain_selection: Arc<dyn SyncedDomainSelection>,
    ) -> Self {
        Self {
            credential_store,
            local_store,
            baseline_store,
            ttl_override,
            domain_selection,
            provider_factory: Arc::new(create_provider),
        }
    }

    /// 替换 Provider 工厂（测试或自定义 API 地址）
    #[must_use]
    pub fn with_provider_factory(mut self, factory: ProviderFactory) -> Self {
        self.provider_factory = factory;
        self
    }

    /// 已配置且完整的凭证
    pub async fn credentials(&self) -> CoreResult<Option<ProviderCredentials>> {
        Ok(self
            .credential_store
            .get()
            .await?
            .filter(ProviderCredentials::is_complete))
    }

    /// 构造本次运行使用的 Registrar 句柄
    ///
    /// 未配置凭证时返回 `Ok(None)`。
    pub async fn registrar(&self) -> CoreResult<Option<Arc<dyn DnsProvider>>> {
        let Some(credentials) = self.credentials().await? else {
            log::info!("Registrar credentials not configured, nothing to do");
            return Ok(None);
        };
        let provider = (self.provider_factory)(credentials)?;
        Ok(Some(provider))
    }
}

/// 域名规范化：去空白、去尾点、小写
pub(crate) fn normalize_domain_name(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// 规范化并去重，保持请求顺序
pub(crate) fn normalize_domain_list(domains: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    domains
        .iter()
        .map(|d| normalize_domain_name(d))
        .filter(|d| !d.is_empty() && seen.insert(d.clone()))
        .collect()
}
