//! TransIP API 类型定义

use serde::{Deserialize, Serialize};

use crate::types::ZoneEntry;

/// `GET /domains` 响应
#[derive(Debug, Deserialize)]
pub struct TransipDomains {
    #[serde(default)]
    pub domains: Vec<TransipDomain>,
}

/// TransIP Domain 结构（只保留需要的字段）
#[derive(Debug, Deserialize)]
pub struct TransipDomain {
    pub name: String,
}

/// `GET/PUT /domains/{name}/dns` 的请求与响应体
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransipDnsEntries {
    #[serde(default)]
    pub dns_entries: Vec<ZoneEntry>,
}

/// 错误响应体
#[derive(Debug, Deserialize)]
pub struct TransipErrorBody {
    pub error: String,
}
