//! Three-way reconciliation
//!
//! Given the registrar's records, the panel's records and the baseline stored
//! after the last sync, decide what the registrar zone should become and what
//! the next baseline is.
//!
//! - local records override remote records with the same identity and add
//!   records the registrar lacks;
//! - records in the baseline but no longer in the panel were deleted locally
//!   and are dropped from the pushed zone;
//! - remote-only records the baseline never tracked pass through untouched;
//! - the new baseline is exactly the panel's set.

use crate::types::{RecordKey, RecordSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Zone to write to the registrar.
    pub to_push: RecordSet,
    /// Baseline to persist after a successful push.
    pub new_baseline: RecordSet,
    /// Keys deleted locally since the last sync, sorted.
    pub removed: Vec<RecordKey>,
}

#[must_use]
pub fn reconcile(remote: &RecordSet, local: &RecordSet, baseline: &RecordSet) -> Reconciliation {
    let mut merged = remote.clone();
    // 整条覆盖，本地 TTL 生效
    merged.extend(local.iter().cloned());

    // 只与 local 比较，不与 merged 比较
    let removed: Vec<RecordKey> = baseline
        .keys()
        .filter(|key| !local.contains_key(key))
        .cloned()
        .collect();

    for key in &removed {
        merged.remove(key);
    }

    Reconciliation {
        to_push: merged,
        new_baseline: local.clone(),
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;

    fn set(records: &[(&str, &str, &str)]) -> RecordSet {
        records
            .iter()
            .map(|(h, t, v)| Record::new(*h, 300, *t, *v))
            .collect()
    }

    #[test]
    fn deletion_removes_from_remote() {
        let a = set(&[("www", "A", "192.0.2.1")]);
        let result = reconcile(&a, &RecordSet::new(), &a);
        assert!(result.to_push.is_empty());
        assert!(result.new_baseline.is_empty());
        assert_eq!(result.removed.len(), 1);
        assert_eq!(result.removed[0].to_string(), "www||A||192.0.2.1");
    }

    #[test]
    fn local_value_is_added_alongside_remote() {
        let remote = set(&[("www", "A", "192.0.2.2")]);
        let local = set(&[("www", "A", "192.0.2.1")]);
        let result = reconcile(&remote, &local, &RecordSet::new());
        // value 属于记录身份：没有 baseline 时远端旧值不会被替换
        let pushed: Vec<String> = result.to_push.keys().map(ToString::to_string).collect();
        assert_eq!(pushed, vec!["www||A||192.0.2.1", "www||A||192.0.2.2"]);
        assert_eq!(result.new_baseline, local);
        assert!(result.removed.is_empty());
    }

    #[test]
    fn changed_value_replaces_old_one() {
        // 本地把 www 从 .2 改成 .1：旧值在 baseline 里、不在 local 里
        let remote = set(&[("www", "A", "192.0.2.2")]);
        let local = set(&[("www", "A", "192.0.2.1")]);
        let baseline = set(&[("www", "A", "192.0.2.2")]);
        let result = reconcile(&remote, &local, &baseline);
        assert_eq!(result.to_push, local);
    }

    #[test]
    fn remote_passes_through_without_local_knowledge() {
        let remote = set(&[("www", "A", "192.0.2.1")]);
        let result = reconcile(&remote, &RecordSet::new(), &RecordSet::new());
        assert_eq!(result.to_push, remote);
        assert!(result.new_baseline.is_empty());
    }

    #[test]
    fn local_ttl_wins() {
        let remote: RecordSet = vec![Record::new("www", 86400, "A", "192.0.2.1")]
            .into_iter()
            .collect();
        let local: RecordSet = vec![Record::new("www", 60, "A", "192.0.2.1")]
            .into_iter()
            .collect();
        let result = reconcile(&remote, &local, &RecordSet::new());
        assert_eq!(result.to_push.iter().next().map(|r| r.ttl), Some(60));
    }

    #[test]
    fn remote_only_record_untracked_by_baseline_survives() {
        let remote = set(&[("www", "A", "192.0.2.1"), ("extra", "TXT", "registrar-added")]);
        let local = set(&[("www", "A", "192.0.2.1")]);
        let result = reconcile(&remote, &local, &local);
        assert_eq!(result.to_push, remote);
    }

    #[test]
    fn removed_key_absent_remotely_is_still_reported() {
        let baseline = set(&[("old", "A", "192.0.2.9")]);
        let result = reconcile(&RecordSet::new(), &RecordSet::new(), &baseline);
        assert!(result.to_push.is_empty());
        assert_eq!(result.removed.len(), 1);
    }

    // ===== 性质测试 =====

    fn samples() -> Vec<RecordSet> {
        vec![
            RecordSet::new(),
            set(&[("www", "A", "192.0.2.1")]),
            set(&[("www", "A", "192.0.2.2"), ("@", "TXT", "hello")]),
            set(&[("mail", "MX", "10 mx"), ("www", "A", "192.0.2.1")]),
            set(&[("ftp", "CNAME", "@"), ("@", "TXT", "hello")]),
        ]
    }

    #[test]
    fn new_baseline_always_equals_local() {
        for r in samples() {
            for l in samples() {
                for b in samples() {
                    assert_eq!(reconcile(&r, &l, &b).new_baseline, l);
                }
            }
        }
    }

    #[test]
    fn unchanged_local_deletes_nothing() {
        for r in samples() {
            for l in samples() {
                let result = reconcile(&r, &l, &l);
                assert!(result.removed.is_empty());
                for key in r.keys().chain(l.keys()) {
                    assert!(result.to_push.contains_key(key), "{key} missing");
                }
            }
        }
    }

    #[test]
    fn second_run_is_noop() {
        for r in samples() {
            for l in samples() {
                let first = reconcile(&r, &l, &l);
                let second = reconcile(&first.to_push, &l, &first.new_baseline);
                assert_eq!(second.to_push, first.to_push);
            }
        }
    }

    #[test]
    fn result_independent_of_insertion_order() {
        let forward = set(&[("a", "A", "1"), ("b", "A", "2"), ("c", "A", "3")]);
        let backward = set(&[("c", "A", "3"), ("b", "A", "2"), ("a", "A", "1")]);
        let local = set(&[("b", "A", "2")]);
        assert_eq!(
            reconcile(&forward, &local, &backward),
            reconcile(&backward, &local, &forward)
        );
    }
}
