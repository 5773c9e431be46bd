use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // baselines 表：每个域名最近一次同步的记录快照
        manager
            .create_table(
                Table::create()
                    .table(Baseline::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Baseline::Domain)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Baseline::Records)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ColumnDef::new(Baseline::UpdatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // synced_domains 表
        manager
            .create_table(
                Table::create()
                    .table(SyncedDomain::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SyncedDomain::Domain)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SyncedDomain::EnabledAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SyncedDomain::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Baseline::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Baseline {
    #[sea_orm(iden = "baselines")]
    Table,
    Domain,
    Records,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SyncedDomain {
    #[sea_orm(iden = "synced_domains")]
    Table,
    Domain,
    EnabledAt,
}
