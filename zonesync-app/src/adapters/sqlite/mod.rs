//! SQLite-based store using `SeaORM`.
//!
//! A single `SqliteStore` implements `BaselineStore` and
//! `SyncedDomainSelection`, backed by a local `SQLite` database.

mod baseline_repo;
pub(crate) mod entity;
mod migration;
mod selection_repo;

use std::path::Path;

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use zonesync_core::error::{CoreError, CoreResult};

use migration::Migrator;

/// SQLite-based store for sync state.
///
/// Holds the per-domain baselines and the set of domains selected for sync.
pub struct SqliteStore {
    /// Shared `SeaORM` database connection.
    pub(crate) db: DatabaseConnection,
}

impl SqliteStore {
    /// Create a new `SQLite` store.
    ///
    /// `db_path` is created if it does not exist.
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if directory creation, database
    /// connection, or schema migration fails.
    pub async fn new(db_path: &Path) -> CoreResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = Database::connect(&db_url)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to connect to SQLite: {e}")))?;

        let store = Self { db };

        // Ensure schema is up to date before the store is used.
        Migrator::up(&store.db, None)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to run migrations: {e}")))?;

        log::debug!("SQLite store opened at {}", db_path.display());
        Ok(store)
    }
}
