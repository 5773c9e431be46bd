//! 类型定义模块

mod record;
mod sync;

pub use record::{APEX_HOST, PanelRecord, Record, RecordKey, RecordSet, is_registrar_managed};
pub use sync::{DomainSyncOutcome, DomainSyncStatus, SyncReport};

// Re-export provider 库的公共类型
pub use zonesync_provider::{ProviderCredentials, ProviderType, ZoneEntry};
