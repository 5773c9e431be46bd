//! TransIP HTTP 请求方法

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpResponse, HttpUtils};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::mask_secret;

use super::{MAX_RETRIES, TransipErrorBody, TransipProvider};

impl TransipProvider {
    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let request = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.access_token));

        let response = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "GET",
            &url,
            MAX_RETRIES,
        )
        .await?;

        let response = self.check_status(response, context)?;
        HttpUtils::parse_json(&response.body, self.provider_name())
    }

    /// 执行 PUT 请求（成功时 TransIP 返回 204，无响应体）
    pub(crate) async fn put<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        let url = format!("{}{path}", self.base_url);
        let payload = serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: e.to_string(),
        })?;

        log::debug!(
            "[transip] PUT {url} as {} (token {})",
            self.login,
            mask_secret(&self.access_token)
        );

        let request = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Content-Type", "application/json")
            .body(payload);

        let response = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "PUT",
            &url,
            MAX_RETRIES,
        )
        .await?;

        self.check_status(response, context).map(|_| ())
    }

    /// 非 2xx 状态码转换为统一错误
    fn check_status(&self, response: HttpResponse, context: ErrorContext) -> Result<HttpResponse> {
        if response.is_success() {
            return Ok(response);
        }

        let message = serde_json::from_str::<TransipErrorBody>(&response.body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status));
        log::error!("[transip] API 错误 ({}): {message}", response.status);

        Err(self.map_error(
            RawApiError::with_code(response.status.to_string(), message),
            context,
        ))
    }
}

/// 路径中的域名需要编码
pub(crate) fn domain_dns_path(domain: &str) -> String {
    format!("/domains/{}/dns", urlencoding::encode(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dns_path_encodes_domain() {
        assert_eq!(domain_dns_path("example.com"), "/domains/example.com/dns");
        assert_eq!(domain_dns_path("a b.nl"), "/domains/a%20b.nl/dns");
    }
}
