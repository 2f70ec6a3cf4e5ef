use std::collections::HashSet;

use tracing::debug;

use crate::types::{DedupKey, PatientRecord};

/// Tracks the records kept so far in one pipeline run and drops exact repeats.
///
/// Two records are duplicates when every field matches after normalization,
/// compared in each record's own key order. The first occurrence wins.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<DedupKey>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an identical record was already registered; otherwise
    /// registers this one and returns false.
    pub fn is_duplicate(&mut self, record: &PatientRecord) -> bool {
        let key = record.dedup_key();
        if self.seen.contains(&key) {
            debug!("Dropping duplicate record {}", key.as_str());
            return true;
        }
        self.seen.insert(key);
        false
    }

    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}
