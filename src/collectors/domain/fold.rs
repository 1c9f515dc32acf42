//! Folding DNS records into labeled fields.
//!
//! Records of one type get numbered labels: the first keeps the bare type
//! (`A`), later ones get a suffix (`A-2`, `A-3`). Which records count as "the
//! same run" depends on [`RecordIndexing`].
//!
//! Records must be folded in response order, one at a time. The folder
//! carries the current type and counter from one record to the next.

use std::collections::HashMap;

use serde::Deserialize;

use crate::config::RecordIndexing;
use crate::results::ResultList;

/// One record from the DNS lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DnsRecord {
    /// A, AAAA, CNAME, MX, NS, SOA, TXT, ...
    pub record_type: String,
    /// Record data; absent on SOA records
    #[serde(default)]
    pub value: Option<String>,
    /// Primary name server, only present on SOA records
    #[serde(default)]
    pub mname: Option<String>,
}

impl DnsRecord {
    /// Builds a non-SOA record with the given value.
    pub fn new(record_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            value: Some(value.into()),
            mname: None,
        }
    }

    /// The value shown for this record: `mname` for SOA, `value` otherwise.
    pub fn display_value(&self) -> &str {
        let value = if self.record_type == "SOA" {
            &self.mname
        } else {
            &self.value
        };
        value.as_deref().unwrap_or_default()
    }
}

/// Running state while labels are assigned.
#[derive(Debug)]
pub struct RecordFolder {
    indexing: RecordIndexing,
    current_type: Option<String>,
    index: usize,
    per_type: HashMap<String, usize>,
}

impl RecordFolder {
    /// Starts a fold with no records seen.
    pub fn new(indexing: RecordIndexing) -> Self {
        Self {
            indexing,
            current_type: None,
            index: 0,
            per_type: HashMap::new(),
        }
    }

    /// Returns the label for the next record of `record_type`.
    pub fn next_label(&mut self, record_type: &str) -> String {
        let occurrence = match self.indexing {
            RecordIndexing::Restart => {
                if self.current_type.as_deref() != Some(record_type) {
                    self.current_type = Some(record_type.to_string());
                    self.index = 0;
                }
                self.index += 1;
                self.index
            }
            RecordIndexing::PerType => {
                let count = self.per_type.entry(record_type.to_string()).or_insert(0);
                *count += 1;
                *count
            }
        };

        if occurrence == 1 {
            record_type.to_string()
        } else {
            format!("{}-{}", record_type, occurrence)
        }
    }
}

/// Appends one field per record to `results`, in record order.
pub fn fold_records(records: &[DnsRecord], indexing: RecordIndexing, results: &mut ResultList) {
    let mut folder = RecordFolder::new(indexing);
    for record in records {
        let label = folder.next_label(&record.record_type);
        results.push(label, record.display_value());
    }
}
