//! 同步结果报告

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one domain within a sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DomainSyncStatus {
    /// Zone pushed and baseline persisted.
    Synced,
    /// Zone pushed, but the new baseline could not be stored. The next sync
    /// recomputes from current state.
    BaselineStale { reason: String },
    /// Nothing pushed; the previous baseline stays valid.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSyncOutcome {
    pub domain: String,
    #[serde(flatten)]
    pub status: DomainSyncStatus,
    /// Records in the pushed zone.
    pub pushed: usize,
    /// Records deleted because they disappeared locally.
    pub removed: usize,
}

impl DomainSyncOutcome {
    #[must_use]
    pub fn failed(domain: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            status: DomainSyncStatus::Failed {
                reason: reason.into(),
            },
            pushed: 0,
            removed: 0,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        !matches!(self.status, DomainSyncStatus::Failed { .. })
    }
}

/// Report of one orchestration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<DomainSyncOutcome>,
    /// Requested domains the registrar account does not own.
    pub skipped: Vec<String>,
}

impl SyncReport {
    /// Report for a run that attempted nothing (no credentials, empty request).
    #[must_use]
    pub fn empty() -> Self {
        let now = Utc::now();
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            started_at: now,
            finished_at: now,
            outcomes: Vec::new(),
            skipped: Vec::new(),
        }
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_successes_and_failures() {
        let mut report = SyncReport::empty();
        report.outcomes.push(DomainSyncOutcome {
            domain: "a.com".to_string(),
            status: DomainSyncStatus::Synced,
            pushed: 3,
            removed: 1,
        });
        report.outcomes.push(DomainSyncOutcome {
            domain: "b.com".to_string(),
            status: DomainSyncStatus::BaselineStale {
                reason: "disk full".to_string(),
            },
            pushed: 2,
            removed: 0,
        });
        report.outcomes.push(DomainSyncOutcome::failed("c.com", "timeout"));

        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_noop());
    }

    #[test]
    fn outcome_serializes_flat_status() {
        let outcome = DomainSyncOutcome::failed("c.com", "timeout");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "timeout");
        assert_eq!(json["domain"], "c.com");
    }
}
