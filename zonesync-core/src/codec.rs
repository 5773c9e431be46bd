//! Record set codec
//!
//! Converts registrar zone entries, panel exports and persisted baselines into
//! [`RecordSet`]s and back. Decoding never fails: malformed entries are
//! skipped and a corrupt baseline decodes to an empty set.

use serde::{Deserialize, Serialize};

use crate::types::{
    APEX_HOST, PanelRecord, Record, RecordSet, ZoneEntry, is_registrar_managed,
};

/// Persisted baseline entry. TTL is not stored.
#[derive(Debug, Serialize, Deserialize)]
struct BaselineEntry {
    #[serde(rename = "type")]
    record_type: String,
    host: String,
    value: String,
}

/// Normalizes a host name relative to `apex`.
///
/// `www.example.com.` becomes `www`, `example.com.` becomes `@`.
#[must_use]
pub fn normalize_host(host: &str, apex: &str) -> String {
    let apex = apex.trim_end_matches('.');
    if apex.is_empty() {
        return host.trim_end_matches('.').to_string();
    }
    let host = host
        .replace(&format!(".{apex}."), "")
        .replace(&format!("{apex}."), APEX_HOST);
    let host = host.trim_end_matches('.');
    // 无尾点的完整域名
    if host == apex {
        return APEX_HOST.to_string();
    }
    match host.strip_suffix(&format!(".{apex}")) {
        Some(relative) if !relative.is_empty() => relative.to_string(),
        _ => host.to_string(),
    }
}

/// Normalizes record content relative to `apex`.
///
/// Occurrences of `.apex` are stripped and the fully-qualified apex becomes `@`,
/// so `mail.example.com.` becomes `mail` and `example.com.` becomes `@`.
#[must_use]
pub fn normalize_value(value: &str, apex: &str) -> String {
    let apex = apex.trim_end_matches('.');
    if apex.is_empty() {
        return value.trim_end_matches('.').to_string();
    }
    value
        .replace(&format!(".{apex}"), "")
        .replace(&format!("{apex}."), APEX_HOST)
        .trim_end_matches('.')
        .to_string()
}

/// Builds a normalized record, or `None` if it is malformed or registrar-managed.
fn normalized_record(host: &str, record_type: &str, value: &str, apex: &str, ttl: u32) -> Option<Record> {
    let record_type = record_type.trim();
    if host.trim().is_empty() || record_type.is_empty() || value.trim().is_empty() {
        return None;
    }
    let host = normalize_host(host.trim(), apex);
    let value = normalize_value(value.trim(), apex);
    if host.is_empty() || value.is_empty() || is_registrar_managed(&host, record_type) {
        return None;
    }
    Some(Record::new(host, ttl, record_type, value))
}

/// Decodes the registrar's zone listing for `apex`.
///
/// Entries that normalize to the same identity collapse into one; the later
/// entry wins.
#[must_use]
pub fn decode_remote(entries: &[ZoneEntry], apex: &str, ttl: u32) -> RecordSet {
    let mut set = RecordSet::new();
    for entry in entries {
        match normalized_record(&entry.name, &entry.record_type, &entry.content, apex, ttl) {
            Some(record) => {
                if let Some(previous) = set.insert(record) {
                    log::debug!("{apex}: duplicate remote entry {}", previous.key());
                }
            }
            None => log::trace!(
                "{apex}: skipping remote entry {} {} {}",
                entry.name,
                entry.record_type,
                entry.content
            ),
        }
    }
    set
}

/// Decodes the panel's records for `apex`.
///
/// Panel names are usually zone-relative already; fully-qualified names are
/// normalized the same way as remote ones.
#[must_use]
pub fn decode_local(records: &[PanelRecord], apex: &str, ttl: u32) -> RecordSet {
    let mut set = RecordSet::new();
    let mut malformed = 0_usize;
    for raw in records {
        let (Some(host), Some(record_type), Some(value)) =
            (&raw.host, &raw.record_type, &raw.value)
        else {
            malformed += 1;
            continue;
        };
        if let Some(record) = normalized_record(host, record_type, value, apex, ttl) {
            set.insert(record);
        }
    }
    if malformed > 0 {
        log::warn!("{apex}: skipped {malformed} malformed panel record(s)");
    }
    set
}

/// Encodes a set as the registrar's zone entries.
#[must_use]
pub fn encode_remote(set: &RecordSet) -> Vec<ZoneEntry> {
    set.iter()
        .map(|r| ZoneEntry::new(r.host.clone(), r.ttl, r.record_type.clone(), r.value.clone()))
        .collect()
}

/// Serializes a set for baseline storage as a JSON array of `{type, host, value}`.
#[must_use]
pub fn encode_for_persistence(set: &RecordSet) -> String {
    let entries: Vec<BaselineEntry> = set
        .iter()
        .map(|r| BaselineEntry {
            record_type: r.record_type.clone(),
            host: r.host.clone(),
            value: r.value.clone(),
        })
        .collect();
    // 仅含字符串字段，序列化不会失败
    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}

/// Restores a persisted baseline, assigning `ttl` to every record.
///
/// Empty or corrupt payloads decode to an empty set.
#[must_use]
pub fn decode_from_persistence(payload: &str, ttl: u32) -> RecordSet {
    if payload.trim().is_empty() {
        return RecordSet::new();
    }
    let entries: Vec<PanelRecord> = match serde_json::from_str(payload) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Discarding corrupt baseline payload: {e}");
            return RecordSet::new();
        }
    };
    entries
        .into_iter()
        .filter_map(|e| match (e.host, e.record_type, e.value) {
            (Some(host), Some(record_type), Some(value))
                if !host.is_empty() && !record_type.is_empty() && !value.is_empty() =>
            {
                Some(Record::new(host, ttl, record_type, value))
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const APEX: &str = "example.com";

    #[test]
    fn host_normalization() {
        assert_eq!(normalize_host("www.example.com.", APEX), "www");
        assert_eq!(normalize_host("example.com.", APEX), "@");
        assert_eq!(normalize_host("example.com", APEX), "@");
        assert_eq!(normalize_host("a.b.example.com", APEX), "a.b");
        assert_eq!(normalize_host("www", APEX), "www");
        assert_eq!(normalize_host("@", APEX), "@");
        assert_eq!(normalize_host("www.other.org.", APEX), "www.other.org");
    }

    #[test]
    fn value_normalization() {
        assert_eq!(normalize_value("mail.example.com.", APEX), "mail");
        assert_eq!(normalize_value("example.com.", APEX), "@");
        assert_eq!(normalize_value("10 mx.example.com.", APEX), "10 mx");
        assert_eq!(normalize_value("ghs.google.com.", APEX), "ghs.google.com");
        assert_eq!(normalize_value("192.0.2.1", APEX), "192.0.2.1");
    }

    #[test]
    fn empty_apex_only_trims_dots() {
        assert_eq!(normalize_host("www.example.com.", ""), "www.example.com");
        assert_eq!(normalize_value("target.", ""), "target");
    }

    #[test]
    fn decode_remote_excludes_registrar_records() {
        let entries = vec![
            ZoneEntry::new("@", 86400, "NS", "ns0.transip.net."),
            ZoneEntry::new("@", 86400, "MX", "10 mx.example.com."),
            ZoneEntry::new("mail", 300, "MX", "10 mx.example.com."),
            ZoneEntry::new("www", 300, "A", "192.0.2.1"),
        ];
        let set = decode_remote(&entries, APEX, 600);
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|r| r.record_type != "NS"));
        assert!(!set.iter().any(|r| r.record_type == "MX" && r.host == "@"));
        assert!(set.iter().all(|r| r.ttl == 600));
    }

    #[test]
    fn decode_remote_later_duplicate_wins() {
        let entries = vec![
            ZoneEntry::new("www.example.com.", 300, "a", "192.0.2.1"),
            ZoneEntry::new("www", 300, "A", "192.0.2.1"),
        ];
        let set = decode_remote(&entries, APEX, 120);
        assert_eq!(set.len(), 1);
        let record = set.iter().next().unwrap();
        assert_eq!(record.host, "www");
        assert_eq!(record.record_type, "A");
    }

    #[test]
    fn decode_local_skips_malformed() {
        let records = vec![
            PanelRecord::new("www", "A", "192.0.2.1"),
            PanelRecord {
                host: Some("ftp".to_string()),
                record_type: None,
                value: Some("192.0.2.3".to_string()),
            },
            PanelRecord::new("", "A", "192.0.2.4"),
            PanelRecord::new("example.com.", "NS", "ns1.example.com."),
            PanelRecord::new("mail.example.com.", "CNAME", "example.com."),
        ];
        let set = decode_local(&records, APEX, 300);
        let keys: Vec<String> = set.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["mail||CNAME||@", "www||A||192.0.2.1"]);
    }

    #[test]
    fn encode_remote_carries_ttl() {
        let set: RecordSet = vec![Record::new("www", 900, "A", "192.0.2.1")]
            .into_iter()
            .collect();
        assert_eq!(
            encode_remote(&set),
            vec![ZoneEntry::new("www", 900, "A", "192.0.2.1")]
        );
    }

    #[test]
    fn persistence_round_trip() {
        let set: RecordSet = vec![
            Record::new("@", 300, "TXT", "v=spf1 include:_spf.example.net -all"),
            Record::new("www", 300, "CNAME", "@"),
            Record::new("mail", 300, "MX", "10 mx"),
        ]
        .into_iter()
        .collect();
        let payload = encode_for_persistence(&set);
        assert_eq!(decode_from_persistence(&payload, 300), set);
    }

    #[test]
    fn persisted_payload_has_no_ttl() {
        let set: RecordSet = vec![Record::new("www", 300, "A", "192.0.2.1")]
            .into_iter()
            .collect();
        let json: serde_json::Value =
            serde_json::from_str(&encode_for_persistence(&set)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "type": "A", "host": "www", "value": "192.0.2.1" }])
        );
    }

    #[test]
    fn corrupt_or_empty_payload_decodes_empty() {
        assert!(decode_from_persistence("", 300).is_empty());
        assert!(decode_from_persistence("   ", 300).is_empty());
        assert!(decode_from_persistence("{not json", 300).is_empty());
        assert!(decode_from_persistence("{\"type\":\"A\"}", 300).is_empty());
    }

    #[test]
    fn persisted_entries_missing_fields_are_skipped() {
        let payload = r#"[{"type":"A","host":"www","value":"192.0.2.1"},{"type":"A","host":"ftp"}]"#;
        let set = decode_from_persistence(payload, 300);
        assert_eq!(set.len(), 1);
    }
}
