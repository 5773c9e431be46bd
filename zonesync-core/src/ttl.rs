//! TTL resolution
//!
//! Order: administrator override, then the registrar's zone TTL, then
//! [`DEFAULT_TTL`]. Results are memoized per domain for the lifetime of one
//! resolver, which the orchestrator creates fresh for every run.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use zonesync_provider::DnsProvider;

use crate::traits::TtlOverrideConfig;

/// Fallback when neither an override nor a zone TTL is available.
pub const DEFAULT_TTL: u32 = 300;

#[async_trait]
pub trait TtlResolver: Send + Sync {
    async fn resolve_ttl(&self, domain: &str) -> u32;
}

/// Per-run memoizing resolver backed by the registrar.
pub struct RunTtlCache {
    provider: Arc<dyn DnsProvider>,
    override_config: Arc<dyn TtlOverrideConfig>,
    resolved: Mutex<HashMap<String, u32>>,
}

impl RunTtlCache {
    #[must_use]
    pub fn new(
        provider: Arc<dyn DnsProvider>,
        override_config: Arc<dyn TtlOverrideConfig>,
    ) -> Self {
        Self {
            provider,
            override_config,
            resolved: Mutex::new(HashMap::new()),
        }
    }

    async fn lookup(&self, domain: &str) -> u32 {
        if let Some(ttl) = self.override_config.get().filter(|t| *t > 0) {
            return ttl;
        }
        match self.provider.get_zone_ttl(domain).await {
            Ok(Some(ttl)) if ttl > 0 => ttl,
            Ok(_) => {
                log::debug!("{domain}: zone TTL unavailable, using {DEFAULT_TTL}");
                DEFAULT_TTL
            }
            Err(e) => {
                // 取不到 TTL 不影响同步本身
                log::warn!("{domain}: failed to read zone TTL, using {DEFAULT_TTL}: {e}");
                DEFAULT_TTL
            }
        }
    }
}

#[async_trait]
impl TtlResolver for RunTtlCache {
    async fn resolve_ttl(&self, domain: &str) -> u32 {
        if let Some(ttl) = self.resolved.lock().await.get(domain) {
            return *ttl;
        }
        let ttl = self.lookup(domain).await;
        self.resolved.lock().await.insert(domain.to_string(), ttl);
        ttl
    }
}

/// Resolver returning the same TTL for every domain.
#[derive(Debug, Clone, Copy)]
pub struct FixedTtl(pub u32);

impl Default for FixedTtl {
    fn default() -> Self {
        Self(DEFAULT_TTL)
    }
}

#[async_trait]
impl TtlResolver for FixedTtl {
    async fn resolve_ttl(&self, _domain: &str) -> u32 {
        self.0
    }
}
