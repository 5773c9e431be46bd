//! TTL 覆盖配置 Trait

/// Administrator-configured TTL applied to every synced record.
pub trait TtlOverrideConfig: Send + Sync {
    /// `None` (or zero) means no override.
    fn get(&self) -> Option<u32>;
}
