//! 同步域名选择管理

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::services::{normalize_domain_name, ServiceContext};

/// Registrar 域名及其选择状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSelectionEntry {
    pub name: String,
    pub selected: bool,
}

/// 同步域名选择服务
pub struct SelectionService {
    ctx: Arc<ServiceContext>,
}

impl SelectionService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 已选中的域名
    pub async fn list_selected(&self) -> CoreResult<Vec<String>> {
        self.ctx.domain_selection.list().await
    }

    /// Registrar 账户下的全部域名，标记是否已选中
    pub async fn list_registrar_domains(&self) -> CoreResult<Vec<DomainSelectionEntry>> {
        let Some(provider) = self.ctx.registrar().await? else {
            return Err(CoreError::ConfigError(
                "registrar credentials are not configured".to_string(),
            ));
        };
        let selected: HashSet<String> = self.ctx.domain_selection.list().await?.into_iter().collect();

        let mut domains: Vec<DomainSelectionEntry> = provider
            .list_domains()
            .await?
            .iter()
            .map(|d| {
                let name = normalize_domain_name(d);
                DomainSelectionEntry {
                    selected: selected.contains(&name),
                    name,
                }
            })
            .collect();
        domains.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(domains)
    }

    pub async fn enable(&self, domain: &str) -> CoreResult<String> {
        let domain = validate_domain_name(domain)?;
        self.ctx.domain_selection.enable(&domain).await?;
        log::info!("{domain} selected for sync");
        Ok(domain)
    }

    pub async fn disable(&self, domain: &str) -> CoreResult<String> {
        let domain = validate_domain_name(domain)?;
        self.ctx.domain_selection.disable(&domain).await?;
        log::info!("{domain} removed from sync");
        Ok(domain)
    }
}

fn validate_domain_name(domain: &str) -> CoreResult<String> {
    let name = normalize_domain_name(domain);
    let valid = !name.is_empty()
        && name.len() <= 253
        && name.contains('.')
        && name.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });
    if valid {
        Ok(name)
    } else {
        Err(CoreError::ValidationError(format!(
            "invalid domain name: {domain:?}"
        )))
    }
}
