//! `SeaORM` entities for `SqliteStore`.

pub mod baseline;
pub mod synced_domain;
