//! Sync triggers
//!
//! Entry points for the two ways a sync starts (an operator asking for it, or
//! the panel reporting a zone change) plus enrolment of newly created domains.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::{normalize_domain_list, normalize_domain_name, ServiceContext, SyncService};
use crate::types::SyncReport;

/// 同步触发服务
pub struct TriggerService {
    ctx: Arc<ServiceContext>,
    sync: SyncService,
    sync_new_domains: bool,
}

impl TriggerService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, sync_new_domains: bool) -> Self {
        Self {
            sync: SyncService::new(ctx.clone()),
            ctx,
            sync_new_domains,
        }
    }

    /// 手动同步
    ///
    /// 只同步已选中的域名；请求为空时同步全部已选中域名。
    pub async fn manual_sync(&self, requested: &[String]) -> CoreResult<SyncReport> {
        let selected = self.ctx.domain_selection.list().await?;
        let requested = normalize_domain_list(requested);

        let targets: Vec<String> = if requested.is_empty() {
            selected
        } else {
            let (targets, unselected): (Vec<String>, Vec<String>) =
                requested.into_iter().partition(|d| selected.contains(d));
            for domain in &unselected {
                log::info!("Ignoring {domain}: not selected for sync");
            }
            targets
        };

        if targets.is_empty() {
            log::info!("Manual sync: no selected domains to sync");
            return Ok(SyncReport::empty());
        }
        self.sync.sync_domains(&targets).await
    }

    /// 面板区域变更事件
    pub async fn handle_zone_changed(&self, domain: &str) -> CoreResult<SyncReport> {
        if self.ctx.credentials().await?.is_none() {
            log::debug!("Zone change for {domain} ignored: no registrar credentials");
            return Ok(SyncReport::empty());
        }

        let domain = normalize_domain_name(domain);
        if !self.ctx.domain_selection.contains(&domain).await? {
            log::debug!("Zone change for {domain} ignored: not selected for sync");
            return Ok(SyncReport::empty());
        }

        log::info!("Zone changed for {domain}, syncing");
        self.sync.sync_domains(&[domain]).await
    }

    /// 面板新建域名事件
    ///
    /// 开启 `sync_new_domains` 时把新域名加入同步选择。返回是否加入。
    pub async fn handle_domain_created(&self, domain: &str) -> CoreResult<bool> {
        if !self.sync_new_domains {
            return Ok(false);
        }
        let domain = normalize_domain_name(domain);
        if domain.is_empty() {
            return Ok(false);
        }
        self.ctx.domain_selection.enable(&domain).await?;
        log::info!("New domain {domain} enrolled for sync");
        Ok(true)
    }
}
