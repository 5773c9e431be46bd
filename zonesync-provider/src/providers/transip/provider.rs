//! TransIP `DnsProvider` trait 实现

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{ProviderError, Result};
use crate::providers::common::is_apex_name;
use crate::traits::{DnsProvider, ErrorContext};
use crate::types::ZoneEntry;

use super::http::domain_dns_path;
use super::{TransipDnsEntries, TransipDomains, TransipProvider};

#[derive(Debug, Deserialize)]
struct ApiTestResponse {
    ping: String,
}

#[async_trait]
impl DnsProvider for TransipProvider {
    fn id(&self) -> &'static str {
        "transip"
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self
            .get::<ApiTestResponse>("/api-test", ErrorContext::default())
            .await
        {
            Ok(resp) => Ok(resp.ping == "pong"),
            Err(ProviderError::InvalidCredentials { .. } | ProviderError::PermissionDenied { .. }) => {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    async fn list_domains(&self) -> Result<Vec<String>> {
        let resp: TransipDomains = self.get("/domains", ErrorContext::default()).await?;
        Ok(resp.domains.into_iter().map(|d| d.name).collect())
    }

    async fn list_records(&self, domain: &str) -> Result<Vec<ZoneEntry>> {
        let resp: TransipDnsEntries = self
            .get(&domain_dns_path(domain), ErrorContext::for_domain(domain))
            .await?;
        log::debug!(
            "[transip] {domain}: {} entries fetched",
            resp.dns_entries.len()
        );
        Ok(resp.dns_entries)
    }

    async fn set_records(&self, domain: &str, entries: &[ZoneEntry]) -> Result<()> {
        let body = TransipDnsEntries {
            dns_entries: entries.to_vec(),
        };
        self.put(&domain_dns_path(domain), &body, ErrorContext::for_domain(domain))
            .await?;
        log::info!("[transip] {domain}: zone replaced with {} entries", entries.len());
        Ok(())
    }

    async fn get_zone_ttl(&self, domain: &str) -> Result<Option<u32>> {
        // TransIP 不单独暴露区域 TTL，仅当区域里带有顶点 SOA 时可取到
        let entries = self.list_records(domain).await?;
        Ok(entries
            .iter()
            .find(|e| e.record_type.eq_ignore_ascii_case("SOA") && is_apex_name(&e.name, domain))
            .map(|e| e.expire))
    }
}
