//! DNS 记录模型

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Host token for the zone apex.
pub const APEX_HOST: &str = "@";

/// Identity of a record within one domain: `(host, type, value)`.
///
/// TTL is deliberately not part of the identity; two records that differ only
/// in TTL are the same logical record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub host: String,
    pub record_type: String,
    pub value: String,
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}||{}||{}", self.host, self.record_type, self.value)
    }
}

/// A normalized DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Host relative to the zone apex, `@` for the apex itself.
    pub host: String,
    pub ttl: u32,
    /// Upper-cased record type.
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
}

impl Record {
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        ttl: u32,
        record_type: impl AsRef<str>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            ttl,
            record_type: record_type.as_ref().to_ascii_uppercase(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey {
            host: self.host.clone(),
            record_type: self.record_type.clone(),
            value: self.value.clone(),
        }
    }
}

/// NS records and apex MX records belong to the registrar, not to the panel.
#[must_use]
pub fn is_registrar_managed(host: &str, record_type: &str) -> bool {
    record_type.eq_ignore_ascii_case("NS")
        || (record_type.eq_ignore_ascii_case("MX") && host == APEX_HOST)
}

/// One domain's records from one source, keyed by identity.
///
/// Backed by a `BTreeMap` so iteration (and therefore anything encoded from a
/// set) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: BTreeMap<RecordKey, Record>,
}

impl RecordSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any record with the same identity.
    ///
    /// Returns the replaced record.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.key(), record)
    }

    pub fn remove(&mut self, key: &RecordKey) -> Option<Record> {
        self.records.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.records.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &RecordKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &RecordKey> {
        self.records.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

impl Extend<Record> for RecordSet {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::collections::btree_map::IntoValues<RecordKey, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_values()
    }
}

/// A record as exported by the hosting panel.
///
/// Every field is optional on the wire; entries missing any of them are
/// dropped during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelRecord {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl PanelRecord {
    pub fn new(
        host: impl Into<String>,
        record_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            host: Some(host.into()),
            record_type: Some(record_type.into()),
            value: Some(value.into()),
        }
    }
}
