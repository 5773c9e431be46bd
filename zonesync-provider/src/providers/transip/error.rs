//! TransIP error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::TransipProvider;

/// TransIP reports failures through the HTTP status and an `{"error": "..."}` body.
/// Reference: <https://api.transip.nl/rest/docs.html#header-errors>
impl ProviderErrorMapper for TransipProvider {
    fn provider_name(&self) -> &'static str {
        "transip"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // 401: token 缺失、过期或被吊销
            Some("401") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 403: 只读 token 写入，或 IP 不在白名单
            Some("403") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 404: 域名不属于该账户
            Some("404") => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: context.domain.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // 406: 参数不合法
            // 409: 冲突（例如区域被锁定）
            // 422: 记录内容校验失败
            Some("406" | "409" | "422") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "dnsEntries".to_string(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}
