//! Config-file backed adapters for registrar credentials and the TTL override.

use async_trait::async_trait;
use zonesync_core::error::CoreResult;
use zonesync_core::traits::{CredentialStore, TtlOverrideConfig};
use zonesync_core::types::ProviderCredentials;

use crate::config::AppConfig;

/// Credentials from the `[registrar]` section.
pub struct ConfigCredentialStore {
    credentials: Option<ProviderCredentials>,
}

impl ConfigCredentialStore {
    #[must_use]
    pub fn new(credentials: Option<ProviderCredentials>) -> Self {
        Self { credentials }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.credentials())
    }
}

#[async_trait]
impl CredentialStore for ConfigCredentialStore {
    async fn get(&self) -> CoreResult<Option<ProviderCredentials>> {
        Ok(self.credentials.clone())
    }
}

/// `sync.override_ttl` from the config file.
pub struct ConfigTtlOverride(Option<u32>);

impl ConfigTtlOverride {
    #[must_use]
    pub fn new(ttl: Option<u32>) -> Self {
        Self(ttl.filter(|t| *t > 0))
    }
}

impl TtlOverrideConfig for ConfigTtlOverride {
    fn get(&self) -> Option<u32> {
        self.0
    }
}
