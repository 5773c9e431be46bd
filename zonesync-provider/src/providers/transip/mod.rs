//! TransIP DNS Provider (REST API v6)

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;

pub(crate) use types::{TransipDnsEntries, TransipDomains, TransipErrorBody};

pub(crate) const TRANSIP_API_BASE: &str = "https://api.transip.nl/v6";
/// 瞬时错误的最大重试次数
pub(crate) const MAX_RETRIES: u32 = 3;

/// TransIP DNS Provider
///
/// Authenticates with a pre-issued bearer access token.
pub struct TransipProvider {
    pub(crate) client: Client,
    pub(crate) login: String,
    pub(crate) access_token: String,
    pub(crate) base_url: String,
}

impl TransipProvider {
    pub fn new(login: String, access_token: String) -> Result<Self> {
        Self::with_base_url(login, access_token, TRANSIP_API_BASE)
    }

    /// 指定 API 地址（测试环境或代理）
    pub fn with_base_url(
        login: String,
        access_token: String,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client: create_http_client("transip")?,
            login,
            access_token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}
