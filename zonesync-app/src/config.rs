//! Application configuration (TOML).
//!
//! ```toml
//! [registrar]
//! provider = "transip"
//! login = "alice"
//! access_token = "..."
//!
//! [sync]
//! override_ttl = 3600
//! sync_new_domains = false
//!
//! [storage]
//! database = "/var/lib/zonesync/zonesync.db"
//! zone_dir = "/var/lib/zonesync/zones"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zonesync_core::error::{CoreError, CoreResult};
use zonesync_core::types::{ProviderCredentials, ProviderType};

const APP_DIR: &str = "zonesync";
const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "zonesync.db";
const ZONE_DIR: &str = "zones";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Registrar account. Absent means sync is disabled.
    pub registrar: Option<RegistrarConfig>,
    pub sync: SyncConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct RegistrarConfig {
    pub provider: ProviderType,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub access_token: String,
}

// access_token 不能出现在日志中
impl std::fmt::Debug for RegistrarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrarConfig")
            .field("provider", &self.provider)
            .field("login", &self.login)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// TTL forced onto every synced record; unset or 0 disables the override.
    pub override_ttl: Option<u32>,
    /// Enrol domains created in the panel for sync automatically.
    pub sync_new_domains: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database holding baselines and the domain selection.
    pub database: Option<PathBuf>,
    /// Directory of panel zone exports (`<domain>.json`).
    pub zone_dir: Option<PathBuf>,
}

impl AppConfig {
    /// `<config dir>/zonesync/config.toml`
    pub fn default_path() -> CoreResult<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| CoreError::ConfigError("cannot determine config directory".to_string()))
    }

    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| CoreError::ConfigError(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`. A missing file yields the default (unconfigured) config.
    pub fn load(path: &Path) -> CoreResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("Loading config from {}", path.display());
                Self::from_toml_str(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Config file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(CoreError::ConfigError(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn validate(&self) -> CoreResult<()> {
        if let Some(dir) = &self.storage.zone_dir {
            if dir.as_os_str().is_empty() {
                return Err(CoreError::ConfigError("storage.zone_dir is empty".to_string()));
            }
        }
        Ok(())
    }

    /// Registrar credentials, or `None` when missing or incomplete.
    #[must_use]
    pub fn credentials(&self) -> Option<ProviderCredentials> {
        let registrar = self.registrar.as_ref()?;
        let credentials = match registrar.provider {
            ProviderType::Transip => ProviderCredentials::Transip {
                login: registrar.login.trim().to_string(),
                access_token: registrar.access_token.trim().to_string(),
            },
        };
        credentials.is_complete().then_some(credentials)
    }

    pub fn database_path(&self) -> CoreResult<PathBuf> {
        match &self.storage.database {
            Some(path) => Ok(path.clone()),
            None => data_dir().map(|d| d.join(DATABASE_FILE)),
        }
    }

    pub fn zone_dir(&self) -> CoreResult<PathBuf> {
        match &self.storage.zone_dir {
            Some(path) => Ok(path.clone()),
            None => data_dir().map(|d| d.join(ZONE_DIR)),
        }
    }
}

fn data_dir() -> CoreResult<PathBuf> {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or_else(|| CoreError::ConfigError("cannot determine data directory".to_string()))
}
