//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use zonesync_provider::{DnsProvider, ProviderCredentials, ProviderError, ZoneEntry};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{
    BaselineStore, CredentialStore, LocalDnsStore, SyncedDomainSelection, TtlOverrideConfig,
};
use crate::types::PanelRecord;

fn mock_network_error(detail: &str) -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: detail.to_string(),
    }
}

// ===== MockDnsProvider =====

#[derive(Default)]
pub struct MockDnsProvider {
    domains: RwLock<Vec<String>>,
    zones: RwLock<HashMap<String, Vec<ZoneEntry>>>,
    zone_ttls: RwLock<HashMap<String, Option<u32>>>,
    pushed: RwLock<HashMap<String, Vec<ZoneEntry>>>,
    /// 这些域名的所有调用都返回网络错误
    failing: RwLock<HashSet<String>>,
    fail_list_domains: AtomicBool,
    list_domains_calls: AtomicUsize,
    zone_ttl_calls: AtomicUsize,
}

impl MockDnsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_domain(&self, domain: &str) {
        self.domains.write().await.push(domain.to_string());
    }

    pub async fn set_zone(&self, domain: &str, entries: Vec<ZoneEntry>) {
        self.zones.write().await.insert(domain.to_string(), entries);
    }

    pub async fn set_zone_ttl(&self, domain: &str, ttl: Option<u32>) {
        self.zone_ttls.write().await.insert(domain.to_string(), ttl);
    }

    pub async fn fail_domain(&self, domain: &str) {
        self.failing.write().await.insert(domain.to_string());
    }

    pub fn fail_list_domains(&self, fail: bool) {
        self.fail_list_domains.store(fail, Ordering::SeqCst);
    }

    /// 最近一次写入的区域
    pub async fn pushed(&self, domain: &str) -> Option<Vec<ZoneEntry>> {
        self.pushed.read().await.get(domain).cloned()
    }

    pub fn list_domains_calls(&self) -> usize {
        self.list_domains_calls.load(Ordering::SeqCst)
    }

    pub fn zone_ttl_calls(&self) -> usize {
        self.zone_ttl_calls.load(Ordering::SeqCst)
    }

    async fn check_domain(&self, domain: &str) -> zonesync_provider::Result<()> {
        if self.failing.read().await.contains(domain) {
            return Err(mock_network_error("connection reset"));
        }
        Ok(())
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn validate_credentials(&self) -> zonesync_provider::Result<bool> {
        Ok(true)
    }

    async fn list_domains(&self) -> zonesync_provider::Result<Vec<String>> {
        self.list_domains_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list_domains.load(Ordering::SeqCst) {
            return Err(mock_network_error("unreachable"));
        }
        Ok(self.domains.read().await.clone())
    }

    async fn list_records(&self, domain: &str) -> zonesync_provider::Result<Vec<ZoneEntry>> {
        self.check_domain(domain).await?;
        Ok(self
            .zones
            .read()
            .await
            .get(domain)
            .cloned()
            .unwrap_or_default())
    }

    async fn set_records(
        &self,
        domain: &str,
        entries: &[ZoneEntry],
    ) -> zonesync_provider::Result<()> {
        self.check_domain(domain).await?;
        self.pushed
            .write()
            .await
            .insert(domain.to_string(), entries.to_vec());
        self.zones
            .write()
            .await
            .insert(domain.to_string(), entries.to_vec());
        Ok(())
    }

    async fn get_zone_ttl(&self, domain: &str) -> zonesync_provider::Result<Option<u32>> {
        self.zone_ttl_calls.fetch_add(1, Ordering::SeqCst);
        self.check_domain(domain).await?;
        Ok(self.zone_ttls.read().await.get(domain).copied().flatten())
    }
}

// ===== MockCredentialStore =====

#[derive(Default)]
pub struct MockCredentialStore {
    credentials: RwLock<Option<ProviderCredentials>>,
}

impl MockCredentialStore {
    pub async fn set_transip(&self) {
        *self.credentials.write().await = Some(test_credentials());
    }

    pub async fn set_blank_transip(&self) {
        *self.credentials.write().await = Some(ProviderCredentials::Transip {
            login: "alice".to_string(),
            access_token: String::new(),
        });
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn get(&self) -> CoreResult<Option<ProviderCredentials>> {
        Ok(self.credentials.read().await.clone())
    }
}

// ===== MockLocalStore =====

#[derive(Default)]
pub struct MockLocalStore {
    records: RwLock<HashMap<String, Vec<PanelRecord>>>,
}

impl MockLocalStore {
    pub async fn set_records(&self, domain: &str, records: Vec<PanelRecord>) {
        self.records.write().await.insert(domain.to_string(), records);
    }
}

#[async_trait]
impl LocalDnsStore for MockLocalStore {
    async fn get_records(&self, domain: &str) -> CoreResult<Vec<PanelRecord>> {
        Ok(self
            .records
            .read()
            .await
            .get(domain)
            .cloned()
            .unwrap_or_default())
    }
}

// ===== MockBaselineStore =====

#[derive(Default)]
pub struct MockBaselineStore {
    payloads: RwLock<HashMap<String, String>>,
    /// 为 true 时 put 返回存储错误
    fail_writes: AtomicBool,
}

impl MockBaselineStore {
    pub async fn insert(&self, domain: &str, payload: &str) {
        self.payloads
            .write()
            .await
            .insert(domain.to_string(), payload.to_string());
    }

    pub async fn payload(&self, domain: &str) -> Option<String> {
        self.payloads.read().await.get(domain).cloned()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl BaselineStore for MockBaselineStore {
    async fn get(&self, domain: &str) -> CoreResult<Option<String>> {
        Ok(self.payloads.read().await.get(domain).cloned())
    }

    async fn put(&self, domain: &str, payload: &str) -> CoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CoreError::StorageError("database is locked".to_string()));
        }
        self.insert(domain, payload).await;
        Ok(())
    }
}

// ===== TTL override =====

/// 固定的 TTL 覆盖值
pub struct StaticTtlOverride(pub Option<u32>);

impl TtlOverrideConfig for StaticTtlOverride {
    fn get(&self) -> Option<u32> {
        self.0
    }
}

/// 可在测试中修改的 TTL 覆盖值（0 表示未设置）
#[derive(Default)]
pub struct MockTtlOverride(AtomicU32);

impl MockTtlOverride {
    pub fn set(&self, ttl: Option<u32>) {
        self.0.store(ttl.unwrap_or(0), Ordering::SeqCst);
    }
}

impl TtlOverrideConfig for MockTtlOverride {
    fn get(&self) -> Option<u32> {
        Some(self.0.load(Ordering::SeqCst)).filter(|t| *t > 0)
    }
}

// ===== MockSelection =====

#[derive(Default)]
pub struct MockSelection {
    domains: RwLock<BTreeSet<String>>,
}

#[async_trait]
impl SyncedDomainSelection for MockSelection {
    async fn list(&self) -> CoreResult<Vec<String>> {
        Ok(self.domains.read().await.iter().cloned().collect())
    }

    async fn enable(&self, domain: &str) -> CoreResult<()> {
        self.domains.write().await.insert(domain.to_string());
        Ok(())
    }

    async fn disable(&self, domain: &str) -> CoreResult<()> {
        self.domains.write().await.remove(domain);
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 测试上下文：`ServiceContext` 以及所有 mock 的句柄
pub struct TestContext {
    pub ctx: Arc<ServiceContext>,
    pub provider: Arc<MockDnsProvider>,
    pub credentials: Arc<MockCredentialStore>,
    pub local: Arc<MockLocalStore>,
    pub baselines: Arc<MockBaselineStore>,
    pub ttl_override: Arc<MockTtlOverride>,
    pub selection: Arc<MockSelection>,
    factory_calls: Arc<AtomicUsize>,
}

impl TestContext {
    /// Provider 工厂被调用的次数
    pub fn factory_calls(&self) -> usize {
        self.factory_calls.load(Ordering::SeqCst)
    }
}

/// 创建测试用 `ServiceContext`，Provider 工厂始终返回同一个 `MockDnsProvider`
pub fn create_test_context() -> TestContext {
    let provider = Arc::new(MockDnsProvider::new());
    let credentials = Arc::new(MockCredentialStore::default());
    let local = Arc::new(MockLocalStore::default());
    let baselines = Arc::new(MockBaselineStore::default());
    let ttl_override = Arc::new(MockTtlOverride::default());
    let selection = Arc::new(MockSelection::default());
    let factory_calls = Arc::new(AtomicUsize::new(0));

    let factory_provider: Arc<dyn DnsProvider> = provider.clone();
    let counter = factory_calls.clone();
    let ctx = ServiceContext::new(
        credentials.clone(),
        local.clone(),
        baselines.clone(),
        ttl_override.clone(),
        selection.clone(),
    )
    .with_provider_factory(Arc::new(
        move |_credentials: ProviderCredentials| -> zonesync_provider::Result<Arc<dyn DnsProvider>> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(factory_provider.clone())
        },
    ));

    TestContext {
        ctx: Arc::new(ctx),
        provider,
        credentials,
        local,
        baselines,
        ttl_override,
        selection,
        factory_calls,
    }
}

/// 创建一个用于测试的 `ProviderCredentials`
pub fn test_credentials() -> ProviderCredentials {
    ProviderCredentials::Transip {
        login: "alice".to_string(),
        access_token: "test-token-12345".to_string(),
    }
}
