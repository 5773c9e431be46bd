//! Storage adapters for the CLI frontend.

mod config_store;
mod zone_dir;

pub use config_store::{ConfigCredentialStore, ConfigTtlOverride};
pub use zone_dir::ZoneDirStore;

#[cfg(feature = "sqlite-store")]
mod sqlite;

#[cfg(feature = "sqlite-store")]
pub use sqlite::SqliteStore;
