//! `BaselineStore` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, EntityTrait};

use zonesync_core::error::{CoreError, CoreResult};
use zonesync_core::traits::BaselineStore;

use super::entity::baseline;
use super::SqliteStore;

#[async_trait]
impl BaselineStore for SqliteStore {
    async fn get(&self, domain: &str) -> CoreResult<Option<String>> {
        let row = baseline::Entity::find_by_id(domain)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query baseline: {e}")))?;

        Ok(row.map(|r| r.records))
    }

    async fn put(&self, domain: &str, payload: &str) -> CoreResult<()> {
        let active_model = baseline::ActiveModel {
            domain: Set(domain.to_string()),
            records: Set(payload.to_string()),
            updated_at: Set(chrono::Utc::now().to_rfc3339()),
        };

        baseline::Entity::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(baseline::Column::Domain)
                    .update_columns([baseline::Column::Records, baseline::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to save baseline: {e}")))?;

        log::debug!("Baseline saved for {domain}");
        Ok(())
    }
}
