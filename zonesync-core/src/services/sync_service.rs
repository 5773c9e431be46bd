//! Sync orchestration
//!
//! One run: list the registrar's domains, keep the requested ones the account
//! owns, and for each of them fetch remote/local/baseline, reconcile, push the
//! zone and persist the new baseline. Domains are processed one after another
//! and a failing domain never stops the rest.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use zonesync_provider::DnsProvider;

use crate::codec;
use crate::error::{CoreError, CoreResult};
use crate::reconcile::reconcile;
use crate::services::{normalize_domain_list, normalize_domain_name, ServiceContext};
use crate::ttl::{RunTtlCache, TtlResolver};
use crate::types::{DomainSyncOutcome, DomainSyncStatus, SyncReport};

/// 同步编排服务
pub struct SyncService {
    ctx: Arc<ServiceContext>,
}

impl SyncService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 同步给定域名
    ///
    /// 未配置凭证时什么都不做，返回空报告。
    pub async fn sync_domains(&self, domains: &[String]) -> CoreResult<SyncReport> {
        let Some(provider) = self.ctx.registrar().await? else {
            return Ok(SyncReport::empty());
        };
        self.run(&provider, domains).await
    }

    /// 使用已构造的 Registrar 句柄执行一次同步
    pub async fn run(
        &self,
        provider: &Arc<dyn DnsProvider>,
        domains: &[String],
    ) -> CoreResult<SyncReport> {
        let mut report = SyncReport::empty();
        log::info!("Sync run {} started for {} domain(s)", report.run_id, domains.len());

        let requested = normalize_domain_list(domains);
        if requested.is_empty() {
            report.finished_at = Utc::now();
            return Ok(report);
        }

        let owned: HashSet<String> = provider
            .list_domains()
            .await
            .map_err(|e| {
                log::error!("Failed to list registrar domains: {e}");
                CoreError::from(e)
            })?
            .iter()
            .map(|d| normalize_domain_name(d))
            .collect();

        let (targets, skipped): (Vec<String>, Vec<String>) =
            requested.into_iter().partition(|d| owned.contains(d));
        for domain in &skipped {
            log::info!("Skipping {domain}: not in registrar account");
        }
        report.skipped = skipped;

        let ttl = RunTtlCache::new(provider.clone(), self.ctx.ttl_override.clone());
        for domain in &targets {
            let outcome = self.sync_domain(provider.as_ref(), &ttl, domain).await;
            report.outcomes.push(outcome);
        }

        report.finished_at = Utc::now();
        log::info!(
            "Sync run {} finished: {} ok, {} failed, {} skipped",
            report.run_id,
            report.succeeded(),
            report.failed(),
            report.skipped.len()
        );
        Ok(report)
    }

    async fn sync_domain(
        &self,
        provider: &dyn DnsProvider,
        ttl: &dyn TtlResolver,
        domain: &str,
    ) -> DomainSyncOutcome {
        let ttl = ttl.resolve_ttl(domain).await;

        let remote = match provider.list_records(domain).await {
            Ok(entries) => codec::decode_remote(&entries, domain, ttl),
            Err(e) => return failed(domain, &CoreError::from(e)),
        };
        let local = match self.ctx.local_store.get_records(domain).await {
            Ok(records) => codec::decode_local(&records, domain, ttl),
            Err(e) => return failed(domain, &e),
        };
        let baseline = match self.ctx.baseline_store.get(domain).await {
            Ok(payload) => codec::decode_from_persistence(payload.as_deref().unwrap_or_default(), ttl),
            Err(e) => return failed(domain, &e),
        };

        let result = reconcile(&remote, &local, &baseline);
        log::debug!(
            "{domain}: remote={} local={} baseline={} push={} removed={}",
            remote.len(),
            local.len(),
            baseline.len(),
            result.to_push.len(),
            result.removed.len()
        );
        for key in &result.removed {
            log::info!("{domain}: removing {key}");
        }

        let entries = codec::encode_remote(&result.to_push);
        if let Err(e) = provider.set_records(domain, &entries).await {
            return failed(domain, &CoreError::from(e));
        }

        let payload = codec::encode_for_persistence(&result.new_baseline);
        let status = match self.ctx.baseline_store.put(domain, &payload).await {
            Ok(()) => {
                log::info!("{domain}: synced {} record(s)", entries.len());
                DomainSyncStatus::Synced
            }
            Err(e) => {
                // 下一次同步会基于最新状态重新计算
                log::error!("{domain}: zone pushed but baseline not saved: {e}");
                DomainSyncStatus::BaselineStale {
                    reason: e.to_string(),
                }
            }
        };

        DomainSyncOutcome {
            domain: domain.to_string(),
            status,
            pushed: entries.len(),
            removed: result.removed.len(),
        }
    }
}

fn failed(domain: &str, e: &CoreError) -> DomainSyncOutcome {
    if e.is_expected() {
        log::warn!("{domain}: sync failed: {e}");
    } else {
        log::error!("{domain}: sync failed: {e}");
    }
    DomainSyncOutcome::failed(domain, e.to_string())
}
