//! `SyncedDomainSelection` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, EntityTrait, ModelTrait, QueryOrder};

use zonesync_core::error::{CoreError, CoreResult};
use zonesync_core::traits::SyncedDomainSelection;

use super::entity::synced_domain;
use super::SqliteStore;

#[async_trait]
impl SyncedDomainSelection for SqliteStore {
    async fn list(&self) -> CoreResult<Vec<String>> {
        let rows = synced_domain::Entity::find()
            .order_by_asc(synced_domain::Column::Domain)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query synced domains: {e}")))?;

        Ok(rows.into_iter().map(|r| r.domain).collect())
    }

    async fn enable(&self, domain: &str) -> CoreResult<()> {
        if self.contains(domain).await? {
            return Ok(());
        }

        let active_model = synced_domain::ActiveModel {
            domain: Set(domain.to_string()),
            enabled_at: Set(chrono::Utc::now().to_rfc3339()),
        };
        synced_domain::Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to enable domain: {e}")))?;

        Ok(())
    }

    async fn disable(&self, domain: &str) -> CoreResult<()> {
        let model = synced_domain::Entity::find_by_id(domain)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query synced domain: {e}")))?;

        if let Some(m) = model {
            m.delete(&self.db)
                .await
                .map_err(|e| CoreError::StorageError(format!("Failed to disable domain: {e}")))?;
        }
        Ok(())
    }

    async fn contains(&self, domain: &str) -> CoreResult<bool> {
        let row = synced_domain::Entity::find_by_id(domain)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query synced domain: {e}")))?;

        Ok(row.is_some())
    }
}
