//! Application bootstrap for zonesync.
//!
//! Provides `AppConfig` (TOML configuration), `AppState` (service container)
//! and `AppStateBuilder` (adapter injection).

pub mod adapters;
pub mod config;

use std::sync::Arc;

use zonesync_core::error::{CoreError, CoreResult};
use zonesync_core::services::{
    ProviderFactory, SelectionService, ServiceContext, SyncService, TriggerService,
};
use zonesync_core::traits::{
    BaselineStore, CredentialStore, LocalDnsStore, SyncedDomainSelection, TtlOverrideConfig,
};

pub use config::AppConfig;

/// Application state.
///
/// Holds all services and the `ServiceContext`. Every frontend constructs this
/// once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds all storage adapters)
    pub ctx: Arc<ServiceContext>,
    /// Sync orchestration
    pub sync_service: SyncService,
    /// Manual and event triggers
    pub trigger_service: TriggerService,
    /// Domain selection management
    pub selection_service: SelectionService,
}

impl AppState {
    /// Build the state from a loaded config: SQLite store for baselines and
    /// selection, zone directory for panel records, config for credentials
    /// and the TTL override.
    #[cfg(feature = "sqlite-store")]
    pub async fn from_config(config: &AppConfig) -> CoreResult<Self> {
        use adapters::{ConfigCredentialStore, ConfigTtlOverride, SqliteStore, ZoneDirStore};

        let store = Arc::new(SqliteStore::new(&config.database_path()?).await?);
        let zone_dir = config.zone_dir()?;
        log::debug!("Reading panel zones from {}", zone_dir.display());

        AppStateBuilder::new()
            .credential_store(Arc::new(ConfigCredentialStore::from_config(config)))
            .local_store(Arc::new(ZoneDirStore::new(zone_dir)))
            .baseline_store(store.clone())
            .domain_selection(store)
            .ttl_override(Arc::new(ConfigTtlOverride::new(config.sync.override_ttl)))
            .sync_new_domains(config.sync.sync_new_domains)
            .build()
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `credential_store` — where registrar credentials come from
/// - `local_store` — the panel's zones
/// - `baseline_store` — where baselines are persisted
/// - `domain_selection` — which domains are synced
///
/// # Optional
/// - `ttl_override` — defaults to no override
/// - `provider_factory` — defaults to `create_provider`
/// - `sync_new_domains` — defaults to `false`
pub struct AppStateBuilder {
    credential_store: Option<Arc<dyn CredentialStore>>,
    local_store: Option<Arc<dyn LocalDnsStore>>,
    baseline_store: Option<Arc<dyn BaselineStore>>,
    domain_selection: Option<Arc<dyn SyncedDomainSelection>>,
    ttl_override: Option<Arc<dyn TtlOverrideConfig>>,
    provider_factory: Option<ProviderFactory>,
    sync_new_domains: bool,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            credential_store: None,
            local_store: None,
            baseline_store: None,
            domain_selection: None,
            ttl_override: None,
            provider_factory: None,
            sync_new_domains: false,
        }
    }

    #[must_use]
    pub fn credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credential_store = Some(store);
        self
    }

    #[must_use]
    pub fn local_store(mut self, store: Arc<dyn LocalDnsStore>) -> Self {
        self.local_store = Some(store);
        self
    }

    #[must_use]
    pub fn baseline_store(mut self, store: Arc<dyn BaselineStore>) -> Self {
        self.baseline_store = Some(store);
        self
    }

    #[must_use]
    pub fn domain_selection(mut self, selection: Arc<dyn SyncedDomainSelection>) -> Self {
        self.domain_selection = Some(selection);
        self
    }

    #[must_use]
    pub fn ttl_override(mut self, config: Arc<dyn TtlOverrideConfig>) -> Self {
        self.ttl_override = Some(config);
        self
    }

    #[must_use]
    pub fn provider_factory(mut self, factory: ProviderFactory) -> Self {
        self.provider_factory = Some(factory);
        self
    }

    #[must_use]
    pub fn sync_new_domains(mut self, enabled: bool) -> Self {
        self.sync_new_domains = enabled;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let credential_store = self.credential_store.ok_or_else(|| {
            CoreError::ValidationError("credential_store is required".to_string())
        })?;
        let local_store = self
            .local_store
            .ok_or_else(|| CoreError::ValidationError("local_store is required".to_string()))?;
        let baseline_store = self
            .baseline_store
            .ok_or_else(|| CoreError::ValidationError("baseline_store is required".to_string()))?;
        let domain_selection = self.domain_selection.ok_or_else(|| {
            CoreError::ValidationError("domain_selection is required".to_string())
        })?;
        let ttl_override = self
            .ttl_override
            .unwrap_or_else(|| Arc::new(adapters::ConfigTtlOverride::new(None)));

        let mut ctx = ServiceContext::new(
            credential_store,
            local_store,
            baseline_store,
            ttl_override,
            domain_selection,
        );
        if let Some(factory) = self.provider_factory {
            ctx = ctx.with_provider_factory(factory);
        }
        let ctx = Arc::new(ctx);

        Ok(AppState {
            sync_service: SyncService::new(Arc::clone(&ctx)),
            trigger_service: TriggerService::new(Arc::clone(&ctx), self.sync_new_domains),
            selection_service: SelectionService::new(Arc::clone(&ctx)),
            ctx,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
