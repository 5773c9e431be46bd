use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::ZoneEntry;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（HTTP 状态码或 Provider 自定义码）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 域名（用于 `DomainNotFound` 等错误）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn for_domain(domain: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Registrar DNS capability.
///
/// This is the remote side of a sync: the set of domains the registrar account
/// owns, and each domain's zone as a flat list of [`ZoneEntry`] values. Zone
/// writes replace the whole zone.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 验证凭证是否有效
    async fn validate_credentials(&self) -> Result<bool>;

    /// 获取账户下所有域名
    async fn list_domains(&self) -> Result<Vec<String>>;

    /// 获取域名的全部 DNS 记录
    async fn list_records(&self, domain: &str) -> Result<Vec<ZoneEntry>>;

    /// 用给定记录整体替换域名的 DNS 记录
    async fn set_records(&self, domain: &str, entries: &[ZoneEntry]) -> Result<()>;

    /// 获取域名区域的默认 TTL
    ///
    /// 返回 `Ok(None)` 表示 Provider 无法提供该值，调用方应使用自己的默认值。
    async fn get_zone_ttl(&self, domain: &str) -> Result<Option<u32>>;
}
